//! Section views. Each view is a read-only projection of the content store
//! and controller state; interactions are reported back to the app shell as
//! [`SectionAction`]s instead of mutating anything in place.

use eframe::egui;

use app_core::{Carousel, MinistryExpansion};
use content::{ContentStore, JudiciaryLeader, NewsItem};
use shared::domain::CollegeId;

use crate::controller::events::SectionAction;

pub fn loading_view(ui: &mut egui::Ui, status: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.label(status);
    });
}

fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(title).size(28.0).strong());
        ui.label(egui::RichText::new(subtitle).weak());
    });
    ui.add_space(16.0);
}

fn leader_tile(ui: &mut egui::Ui, name: &str, title: &str, contact: Option<&str>) {
    ui.group(|ui| {
        ui.strong(name);
        ui.label(title);
        if let Some(contact) = contact {
            ui.small(contact);
        }
    });
}

pub fn home(
    ui: &mut egui::Ui,
    content: &ContentStore,
    expansion: &MinistryExpansion,
) -> Option<SectionAction> {
    let mut action = None;

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.heading(
            egui::RichText::new("MUSTSO")
                .size(36.0)
                .strong()
                .color(egui::Color32::from_rgb(28, 108, 73)),
        );
        ui.label("Mbeya University of Science and Technology Students' Organization");
        ui.label(egui::RichText::new("Students serving students, across every college.").weak());
    });

    section_header(
        ui,
        "Our Ministries",
        "Each ministry is dedicated to specific student needs.",
    );
    for ministry in content.ministries() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(&ministry.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let expanded = expansion.is_expanded(&ministry.id);
                    let toggle = if expanded { "Hide details" } else { "View details" };
                    if ui.small_button(toggle).clicked() {
                        action = Some(SectionAction::ToggleMinistry(ministry.id.clone()));
                    }
                });
            });
            if let Some(featured) = ministry.featured_leader() {
                ui.label(format!("{} — {}", featured.name, featured.title));
            }
            if expansion.is_expanded(&ministry.id) {
                ui.separator();
                ui.label(&ministry.description);
                for leader in &ministry.leaders {
                    match &leader.phone {
                        Some(phone) => {
                            ui.small(format!("{} · {} · {}", leader.name, leader.title, phone))
                        }
                        None => ui.small(format!("{} · {}", leader.name, leader.title)),
                    };
                }
            }
        });
        ui.add_space(4.0);
    }

    section_header(
        ui,
        "Top Executives",
        "The executive leadership of the student government.",
    );
    ui.horizontal_wrapped(|ui| {
        for executive in content.executives() {
            leader_tile(ui, &executive.name, &executive.title, None);
        }
    });
    ui.add_space(24.0);

    action
}

pub fn council_overview(ui: &mut egui::Ui, content: &ContentStore) -> Option<SectionAction> {
    let mut action = None;

    section_header(
        ui,
        "University Student Representative Council (USRC)",
        "Bunge — the students' parliament.",
    );

    ui.horizontal_wrapped(|ui| {
        for leader in content.usrc_top_leaders() {
            leader_tile(ui, &leader.name, &leader.position, None);
        }
    });

    section_header(
        ui,
        "Student Representation by Colleges",
        "Find your leader easily based on your college or location.",
    );
    for card in content.college_cards() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(&card.short_name);
                ui.label(&card.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("View leaders →").clicked() {
                        action = Some(SectionAction::SelectCollege(card.slug.clone()));
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
    ui.add_space(24.0);

    action
}

pub fn college_detail(
    ui: &mut egui::Ui,
    content: &ContentStore,
    college_id: &CollegeId,
) -> Option<SectionAction> {
    let mut action = None;

    ui.add_space(16.0);
    if ui.button("← Back to USRC").clicked() {
        action = Some(SectionAction::BackToCouncilOverview);
    }

    let Some(college) = content.college(college_id) else {
        // Unknown slug: the controller tracked the intent, this view resolves it.
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.heading("College Not Found");
            ui.label("The college you're looking for doesn't exist or has been moved.");
        });
        return action;
    };

    section_header(ui, &college.name, "College representation");
    leader_tile(
        ui,
        &college.leader.name,
        &college.leader.title,
        college.leader.phone.as_deref(),
    );

    ui.add_space(16.0);
    ui.strong("Departments");
    if college.departments.is_empty() {
        ui.label(egui::RichText::new("Department representatives for this area will be announced.").weak());
    }
    for department in &college.departments {
        ui.group(|ui| {
            ui.strong(&department.name);
            match &department.leader.phone {
                Some(phone) => ui.label(format!("{} · {}", department.leader.name, phone)),
                None => ui.label(&department.leader.name),
            };
        });
        ui.add_space(4.0);
    }
    ui.add_space(24.0);

    action
}

fn judiciary_contact(leader: &JudiciaryLeader) -> Option<String> {
    match (&leader.phone, &leader.email) {
        (Some(phone), Some(email)) => Some(format!("{phone} · {email}")),
        (Some(phone), None) => Some(phone.clone()),
        (None, Some(email)) => Some(email.clone()),
        (None, None) => None,
    }
}

pub fn judiciary(ui: &mut egui::Ui, content: &ContentStore) -> Option<SectionAction> {
    section_header(
        ui,
        "The Judiciary",
        "The judicial arm of MUSTSO, ensuring justice and upholding the constitution.",
    );

    ui.strong("Top Judicial Leaders");
    ui.horizontal_wrapped(|ui| {
        for leader in content.judiciary_top_leaders() {
            leader_tile(ui, &leader.name, &leader.title, None);
        }
    });

    ui.add_space(16.0);
    ui.strong("Members");
    ui.horizontal_wrapped(|ui| {
        for member in content.judiciary_members() {
            leader_tile(
                ui,
                &member.name,
                &member.title,
                judiciary_contact(member).as_deref(),
            );
        }
    });
    ui.add_space(24.0);

    None
}

pub fn past_leaders(ui: &mut egui::Ui, content: &ContentStore) -> Option<SectionAction> {
    section_header(
        ui,
        "Past Leaders",
        "Honoring those who served and contributed to the growth of MUSTSO.",
    );

    if content.past_leaders().is_empty() {
        ui.vertical_centered(|ui| {
            ui.label("Past leaders data coming soon.");
        });
        return None;
    }

    ui.horizontal_wrapped(|ui| {
        for leader in content.past_leaders() {
            leader_tile(ui, &leader.name, &leader.title, None);
        }
    });
    ui.add_space(24.0);

    None
}

fn news_card(ui: &mut egui::Ui, item: &NewsItem, headline: bool) {
    ui.group(|ui| {
        ui.small(item.date.format("%-d %B %Y").to_string());
        if headline {
            ui.heading(&item.title);
        } else {
            ui.strong(&item.title);
        }
        ui.label(&item.description);
        if let Some(image) = &item.image {
            ui.weak(format!("Photo: {image}"));
        }
    });
}

pub fn newsroom(
    ui: &mut egui::Ui,
    content: &ContentStore,
    carousel: &Carousel,
) -> Option<SectionAction> {
    let mut action = None;
    let news = content.news();

    section_header(
        ui,
        "Newsroom",
        "Stay updated with the latest announcements and events from MUSTSO.",
    );

    if news.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label("No news yet. Check back soon.");
        });
        return None;
    }

    // active_index is always in range for a non-empty carousel.
    news_card(ui, &news[carousel.active_index()], true);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            action = Some(SectionAction::NewsPrevious);
        }
        for index in 0..news.len() {
            if ui
                .selectable_label(index == carousel.active_index(), "●")
                .clicked()
            {
                action = Some(SectionAction::NewsGoTo(index));
            }
        }
        if ui.button("▶").clicked() {
            action = Some(SectionAction::NewsNext);
        }
    });

    ui.add_space(16.0);
    ui.strong("All updates");
    for item in news {
        news_card(ui, item, false);
        ui.add_space(4.0);
    }
    ui.add_space(24.0);

    action
}
