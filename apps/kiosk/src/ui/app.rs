//! App shell: owns the controllers, applies backend events on the UI thread,
//! and renders the navigation bar, status bar, and active section.

use std::{path::PathBuf, sync::Arc, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use app_core::{Carousel, MinistryExpansion, NavEffect, NavigationController};
use content::ContentStore;
use shared::domain::{SectionId, TopLevelSection};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{
    describe_content_failure, SectionAction, UiErrorContext, UiEvent,
};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::sections;

pub struct KioskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    content: Option<Arc<ContentStore>>,
    nav: NavigationController,
    news: Carousel,
    expansion: MinistryExpansion,

    news_interval: Duration,
    status: String,
    scroll_to_top: bool,
}

impl KioskApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        content_dir: Option<PathBuf>,
        news_interval: Duration,
    ) -> Self {
        let mut status = "Loading content...".to_string();
        dispatch_backend_command(
            &cmd_tx,
            BackendCommand::LoadContent { content_dir },
            &mut status,
        );
        Self {
            cmd_tx,
            ui_rx,
            content: None,
            nav: NavigationController::new(),
            news: Carousel::new(0, news_interval),
            expansion: MinistryExpansion::new(),
            news_interval,
            status,
            scroll_to_top: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ContentLoaded(store) => {
                    self.news = Carousel::new(store.news().len(), self.news_interval);
                    self.status = format!(
                        "Content loaded: {} ministries, {} colleges, {} news items",
                        store.ministries().len(),
                        store.colleges().len(),
                        store.news().len()
                    );
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::StartNewsTicker {
                            interval: self.news.interval(),
                            slide_count: self.news.len(),
                        },
                        &mut self.status,
                    );
                    self.content = Some(store);
                }
                UiEvent::Error(err) => {
                    self.status = match err.context() {
                        UiErrorContext::ContentLoad => describe_content_failure(err.message()),
                        UiErrorContext::BackendStartup => {
                            format!("Backend startup failure: {}", err.message())
                        }
                    };
                }
                UiEvent::NewsTick => {
                    self.news.advance();
                }
            }
        }
    }

    fn apply_nav_effect(&mut self, effect: NavEffect) {
        match effect {
            NavEffect::ScrollToTop => self.scroll_to_top = true,
        }
    }

    fn apply_section_action(&mut self, action: SectionAction) {
        match action {
            SectionAction::SelectCollege(college) => {
                let effect = self.nav.select_college(college);
                self.apply_nav_effect(effect);
            }
            SectionAction::BackToCouncilOverview => {
                let effect = self.nav.return_to_council_overview();
                self.apply_nav_effect(effect);
            }
            SectionAction::NewsNext => self.news.next(),
            SectionAction::NewsPrevious => self.news.previous(),
            SectionAction::NewsGoTo(index) => {
                // Pager dots are derived from the same slide list, so a miss
                // here is a view bug; surface it instead of crashing.
                if let Err(err) = self.news.go_to(index) {
                    tracing::error!(%err, "pager emitted an out-of-range slide index");
                }
            }
            SectionAction::ToggleMinistry(ministry) => self.expansion.toggle(ministry),
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("MUSTSO");
                ui.separator();
                for section in TopLevelSection::ALL {
                    let selected = self.nav.active_section() == SectionId::from(section);
                    if ui.selectable_label(selected, section.label()).clicked() {
                        let effect = self.nav.navigate_to(section);
                        self.apply_nav_effect(effect);
                    }
                }
            });
        });
    }

    fn show_active_section(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical();
            if self.scroll_to_top {
                scroll = scroll.vertical_scroll_offset(0.0);
                self.scroll_to_top = false;
            }
            scroll.show(ui, |ui| {
                let Some(content) = self.content.clone() else {
                    sections::loading_view(ui, &self.status);
                    return;
                };
                let content = &*content;

                let action = match self.nav.active_section() {
                    SectionId::Home => sections::home(ui, content, &self.expansion),
                    SectionId::Usrc => sections::council_overview(ui, content),
                    SectionId::Judiciary => sections::judiciary(ui, content),
                    SectionId::Newsroom => sections::newsroom(ui, content, &self.news),
                    SectionId::PastLeaders => sections::past_leaders(ui, content),
                    SectionId::CollegeDetail => match self.nav.selected_college().cloned() {
                        Some(college) => sections::college_detail(ui, content, &college),
                        // Unreachable: the detail state always carries its id.
                        None => None,
                    },
                };
                if let Some(action) = action {
                    self.apply_section_action(action);
                }
            });
        });
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_nav_bar(ctx);
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(&self.status);
        });
        self.show_active_section(ctx);

        // Ticks arrive over a channel; wake a sleeping UI often enough to
        // show them close to their cadence.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Drop for KioskApp {
    fn drop(&mut self) {
        // Teardown guarantee: cancel the ticker even on abnormal disposal.
        // The worker also aborts it when the command channel disconnects.
        let _ = self.cmd_tx.try_send(BackendCommand::StopNewsTicker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::CollegeId;

    struct Harness {
        app: KioskApp,
        cmd_rx: Receiver<BackendCommand>,
        ui_tx: Sender<UiEvent>,
    }

    fn harness() -> Harness {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = KioskApp::new(cmd_tx, ui_rx, None, Duration::from_millis(5000));
        Harness {
            app,
            cmd_rx,
            ui_tx,
        }
    }

    fn loaded_store() -> Arc<ContentStore> {
        Arc::new(ContentStore::embedded_default().expect("embedded fixtures"))
    }

    #[test]
    fn startup_queues_a_content_load() {
        let h = harness();
        let cmd = h.cmd_rx.try_recv().expect("load queued at startup");
        assert!(matches!(cmd, BackendCommand::LoadContent { .. }));
    }

    #[test]
    fn content_loaded_resizes_the_carousel_and_starts_the_ticker() {
        let mut h = harness();
        let _ = h.cmd_rx.try_recv();

        let store = loaded_store();
        let slide_count = store.news().len();
        h.ui_tx
            .try_send(UiEvent::ContentLoaded(store))
            .expect("send event");
        h.app.process_ui_events();

        assert!(h.app.content.is_some());
        assert_eq!(h.app.news.len(), slide_count);
        assert_eq!(h.app.news.active_index(), 0);

        match h.cmd_rx.try_recv().expect("ticker start queued") {
            BackendCommand::StartNewsTicker {
                interval,
                slide_count: queued,
            } => {
                assert_eq!(interval, Duration::from_millis(5000));
                assert_eq!(queued, slide_count);
            }
            _ => panic!("expected StartNewsTicker"),
        }
    }

    #[test]
    fn ticks_advance_the_carousel_and_wrap() {
        let mut h = harness();
        let _ = h.cmd_rx.try_recv();
        h.ui_tx
            .try_send(UiEvent::ContentLoaded(loaded_store()))
            .expect("send event");
        h.app.process_ui_events();

        let len = h.app.news.len();
        assert!(len > 0);
        for _ in 0..len {
            h.ui_tx.try_send(UiEvent::NewsTick).expect("send tick");
        }
        h.app.process_ui_events();
        assert_eq!(h.app.news.active_index(), 0, "N ticks return to the start");
    }

    #[test]
    fn manual_pager_actions_apply_without_touching_the_ticker_queue() {
        let mut h = harness();
        let _ = h.cmd_rx.try_recv();
        h.ui_tx
            .try_send(UiEvent::ContentLoaded(loaded_store()))
            .expect("send event");
        h.app.process_ui_events();
        let _ = h.cmd_rx.try_recv(); // StartNewsTicker

        h.app.apply_section_action(SectionAction::NewsNext);
        assert_eq!(h.app.news.active_index(), 1);
        h.app.apply_section_action(SectionAction::NewsPrevious);
        assert_eq!(h.app.news.active_index(), 0);
        h.app.apply_section_action(SectionAction::NewsGoTo(2));
        assert_eq!(h.app.news.active_index(), 2);

        // No manual action restarts or stops the ticker.
        assert!(h.cmd_rx.try_recv().is_err());
    }

    #[test]
    fn selecting_a_college_sets_the_drilldown_and_requests_a_scroll_reset() {
        let mut h = harness();
        h.app.apply_section_action(SectionAction::SelectCollege(
            CollegeId::new("coict").expect("slug"),
        ));
        assert_eq!(h.app.nav.active_section(), SectionId::CollegeDetail);
        assert!(h.app.scroll_to_top);

        h.app.scroll_to_top = false;
        h.app
            .apply_section_action(SectionAction::BackToCouncilOverview);
        assert_eq!(h.app.nav.active_section(), SectionId::Usrc);
        assert_eq!(h.app.nav.selected_college(), None);
        assert!(h.app.scroll_to_top);
    }

    #[test]
    fn content_load_failures_surface_a_readable_status() {
        let mut h = harness();
        h.ui_tx
            .try_send(UiEvent::Error(
                crate::controller::events::UiError::from_message(
                    UiErrorContext::ContentLoad,
                    "failed to parse fixture 'mustso.json': expected value at line 1",
                ),
            ))
            .expect("send event");
        h.app.process_ui_events();
        assert!(h.app.status.starts_with("Fixture files are malformed"));
        assert!(h.app.content.is_none());
    }

    #[test]
    fn out_of_range_pager_index_is_logged_not_fatal() {
        let mut h = harness();
        h.app.apply_section_action(SectionAction::NewsGoTo(99));
        assert_eq!(h.app.news.active_index(), 0);
    }
}
