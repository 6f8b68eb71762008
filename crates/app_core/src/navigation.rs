//! Section selection for the kiosk window, including the council drill-down.
//!
//! The navigation bar can reach every [`TopLevelSection`]; the college detail
//! view is only entered by selecting a college from the council overview and
//! only exited through `return_to_council_overview` or a navigation-bar
//! click. Representing the drill-down as a variant that carries its college
//! id makes "a college is selected iff the detail view is active" true by
//! construction, and makes an invalid section id unrepresentable.

use shared::domain::{CollegeId, SectionId, TopLevelSection};

/// Instruction for the rendering environment, emitted by every transition.
/// The controller only records the intent; executing the scroll belongs to
/// the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "viewport effects must be handed to the rendering layer"]
pub enum NavEffect {
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveView {
    Top(TopLevelSection),
    CollegeDetail { college: CollegeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    view: ActiveView,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// Sessions always begin on the home section with no drill-down.
    pub fn new() -> Self {
        Self {
            view: ActiveView::Top(TopLevelSection::Home),
        }
    }

    pub fn active_section(&self) -> SectionId {
        match &self.view {
            ActiveView::Top(section) => (*section).into(),
            ActiveView::CollegeDetail { .. } => SectionId::CollegeDetail,
        }
    }

    /// The college being drilled into, present exactly when
    /// `active_section() == SectionId::CollegeDetail`.
    pub fn selected_college(&self) -> Option<&CollegeId> {
        match &self.view {
            ActiveView::Top(_) => None,
            ActiveView::CollegeDetail { college } => Some(college),
        }
    }

    /// Entering any top-level section exits the drill-down unconditionally.
    pub fn navigate_to(&mut self, section: TopLevelSection) -> NavEffect {
        tracing::debug!(section = ?section, "navigate to section");
        self.view = ActiveView::Top(section);
        NavEffect::ScrollToTop
    }

    /// The id is opaque here: the controller tracks the intent to view it,
    /// and an unknown college resolves downstream to a not-found view rather
    /// than a controller error.
    pub fn select_college(&mut self, college: CollegeId) -> NavEffect {
        tracing::debug!(college = %college, "drill into college");
        self.view = ActiveView::CollegeDetail { college };
        NavEffect::ScrollToTop
    }

    /// Single-level back action from college detail to the council overview.
    /// Navigation history is exactly one level deep; there is no stack.
    pub fn return_to_council_overview(&mut self) -> NavEffect {
        self.navigate_to(TopLevelSection::Usrc)
    }
}
