//! Expand/collapse state for the ministry card grid. At most one card is
//! open at a time; tapping the open card collapses it.

use shared::domain::MinistryId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinistryExpansion {
    expanded: Option<MinistryId>,
}

impl MinistryExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<&MinistryId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, ministry: &MinistryId) -> bool {
        self.expanded.as_ref() == Some(ministry)
    }

    pub fn toggle(&mut self, ministry: MinistryId) {
        if self.expanded.as_ref() == Some(&ministry) {
            self.expanded = None;
        } else {
            self.expanded = Some(ministry);
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
