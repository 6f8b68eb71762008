use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(LeaderId);
id_newtype!(NewsId);

macro_rules! slug_newtype {
    ($name:ident, $kind:literal) => {
        /// Non-empty fixture slug (e.g. `coict`, `education`).
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(slug: impl Into<String>) -> Result<Self, DomainError> {
                Self::try_from(slug.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(slug: String) -> Result<Self, Self::Error> {
                if slug.trim().is_empty() {
                    return Err(DomainError::EmptyId { kind: $kind });
                }
                Ok(Self(slug))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

slug_newtype!(CollegeId, "college");
slug_newtype!(MinistryId, "ministry");

/// Every view the kiosk can show. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    Usrc,
    Judiciary,
    Newsroom,
    PastLeaders,
    CollegeDetail,
}

/// Sections reachable directly from the navigation bar. College detail is
/// deliberately absent: it is only entered by selecting a college from the
/// council overview, which keeps the selected-college invariant closed under
/// the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelSection {
    Home,
    Usrc,
    Judiciary,
    Newsroom,
    PastLeaders,
}

impl TopLevelSection {
    pub const ALL: [TopLevelSection; 5] = [
        TopLevelSection::Home,
        TopLevelSection::Usrc,
        TopLevelSection::Judiciary,
        TopLevelSection::Newsroom,
        TopLevelSection::PastLeaders,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Usrc => "USRC",
            Self::Judiciary => "Judiciary",
            Self::Newsroom => "Newsroom",
            Self::PastLeaders => "Past Leaders",
        }
    }
}

impl From<TopLevelSection> for SectionId {
    fn from(value: TopLevelSection) -> Self {
        match value {
            TopLevelSection::Home => SectionId::Home,
            TopLevelSection::Usrc => SectionId::Usrc,
            TopLevelSection::Judiciary => SectionId::Judiciary,
            TopLevelSection::Newsroom => SectionId::Newsroom,
            TopLevelSection::PastLeaders => SectionId::PastLeaders,
        }
    }
}
