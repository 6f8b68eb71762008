//! Data collaborator for the kiosk: loads the organization's JSON fixtures
//! once at startup, validates them, and serves immutable typed records.
//!
//! Two documents mirror how the organization maintains its data: `mustso.json`
//! carries the organization-wide records (ministries, executives, judiciary,
//! past leaders, college details, news) and `usrc.json` carries the council
//! overview (top leaders and the college card grid). Controllers never see
//! these shapes; they only handle the opaque ids defined in `shared`.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use shared::domain::{CollegeId, LeaderId, MinistryId, NewsId};

pub const ORG_DOCUMENT: &str = "mustso.json";
pub const USRC_DOCUMENT: &str = "usrc.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read fixture '{document}': {source}")]
    Io {
        document: String,
        source: std::io::Error,
    },
    #[error("failed to parse fixture '{document}': {source}")]
    Parse {
        document: &'static str,
        source: serde_json::Error,
    },
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },
    #[error("empty {field} in {collection}")]
    EmptyField {
        collection: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinistryLeader {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ministry {
    pub id: MinistryId,
    pub name: String,
    pub description: String,
    pub leaders: Vec<MinistryLeader>,
}

impl Ministry {
    /// The card's featured leader: the minister when one exists, otherwise
    /// whoever is listed first.
    pub fn featured_leader(&self) -> Option<&MinistryLeader> {
        self.leaders
            .iter()
            .find(|leader| leader.title.eq_ignore_ascii_case("minister"))
            .or_else(|| self.leaders.first())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Executive {
    pub id: LeaderId,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JudiciaryLeader {
    pub id: LeaderId,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PastLeader {
    pub id: LeaderId,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollegeLeader {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentLeader {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Department {
    pub name: String,
    pub leader: DepartmentLeader,
}

#[derive(Debug, Clone, Deserialize)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
    pub leader: CollegeLeader,
    #[serde(default)]
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsrcTopLeader {
    pub id: LeaderId,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Entry in the council overview's college grid. The slug points at a
/// [`College`] detail record; a card without one still renders, and the
/// drill-down resolves to the not-found view.
#[derive(Debug, Clone, Deserialize)]
pub struct CollegeCard {
    pub slug: CollegeId,
    pub short_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct OrgDocument {
    ministries: Vec<Ministry>,
    executives: Vec<Executive>,
    judiciary_top_leaders: Vec<JudiciaryLeader>,
    judiciary_members: Vec<JudiciaryLeader>,
    past_leaders: Vec<PastLeader>,
    colleges: Vec<College>,
    news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct UsrcDocument {
    top_leaders: Vec<UsrcTopLeader>,
    college_cards: Vec<CollegeCard>,
}

/// Immutable, validated view of both fixture documents.
#[derive(Debug, Clone)]
pub struct ContentStore {
    org: OrgDocument,
    usrc: UsrcDocument,
}

impl ContentStore {
    /// Load `mustso.json` and `usrc.json` from a fixtures directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |document: &'static str| {
            let path = dir.join(document);
            fs::read_to_string(&path).map_err(|source| ContentError::Io {
                document: path.display().to_string(),
                source,
            })
        };
        let store = Self::from_documents(&read(ORG_DOCUMENT)?, &read(USRC_DOCUMENT)?)?;
        tracing::info!(dir = %dir.display(), "loaded content fixtures from directory");
        Ok(store)
    }

    /// The fixtures shipped inside the binary, used when no directory is
    /// passed on the command line.
    pub fn embedded_default() -> Result<Self, ContentError> {
        Self::from_documents(
            include_str!("../../../fixtures/mustso.json"),
            include_str!("../../../fixtures/usrc.json"),
        )
    }

    pub fn from_documents(org_json: &str, usrc_json: &str) -> Result<Self, ContentError> {
        let org: OrgDocument =
            serde_json::from_str(org_json).map_err(|source| ContentError::Parse {
                document: ORG_DOCUMENT,
                source,
            })?;
        let usrc: UsrcDocument =
            serde_json::from_str(usrc_json).map_err(|source| ContentError::Parse {
                document: USRC_DOCUMENT,
                source,
            })?;
        let store = Self { org, usrc };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        check_unique(
            "ministries",
            self.org.ministries.iter().map(|m| m.id.to_string()),
        )?;
        check_unique(
            "executives",
            self.org.executives.iter().map(|e| e.id.0.to_string()),
        )?;
        check_unique(
            "judiciary_top_leaders",
            self.org.judiciary_top_leaders.iter().map(|l| l.id.0.to_string()),
        )?;
        check_unique(
            "judiciary_members",
            self.org.judiciary_members.iter().map(|l| l.id.0.to_string()),
        )?;
        check_unique(
            "past_leaders",
            self.org.past_leaders.iter().map(|l| l.id.0.to_string()),
        )?;
        check_unique(
            "colleges",
            self.org.colleges.iter().map(|c| c.id.to_string()),
        )?;
        check_unique("news", self.org.news.iter().map(|n| n.id.0.to_string()))?;
        check_unique(
            "college_cards",
            self.usrc.college_cards.iter().map(|c| c.slug.to_string()),
        )?;

        check_named("ministries", self.org.ministries.iter().map(|m| &m.name))?;
        check_named("executives", self.org.executives.iter().map(|e| &e.name))?;
        check_named("colleges", self.org.colleges.iter().map(|c| &c.name))?;
        check_named("news", self.org.news.iter().map(|n| &n.title))?;

        // A card whose slug has no detail record still renders in the grid;
        // drilling into it shows the not-found view. Worth a warning, not a
        // startup failure.
        for card in &self.usrc.college_cards {
            if self.college(&card.slug).is_none() {
                tracing::warn!(
                    slug = %card.slug,
                    "college card has no detail record; drill-down will show not-found"
                );
            }
        }

        if self.org.news.is_empty() {
            tracing::warn!("news fixture is empty; the newsroom will render its empty state");
        }

        Ok(())
    }

    pub fn ministries(&self) -> &[Ministry] {
        &self.org.ministries
    }

    pub fn executives(&self) -> &[Executive] {
        &self.org.executives
    }

    pub fn judiciary_top_leaders(&self) -> &[JudiciaryLeader] {
        &self.org.judiciary_top_leaders
    }

    pub fn judiciary_members(&self) -> &[JudiciaryLeader] {
        &self.org.judiciary_members
    }

    pub fn past_leaders(&self) -> &[PastLeader] {
        &self.org.past_leaders
    }

    pub fn colleges(&self) -> &[College] {
        &self.org.colleges
    }

    /// Detail record for a college slug. `None` means the rendering layer
    /// shows its not-found view; it is never an error at this layer.
    pub fn college(&self, id: &CollegeId) -> Option<&College> {
        self.org.colleges.iter().find(|college| &college.id == id)
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.org.news
    }

    pub fn usrc_top_leaders(&self) -> &[UsrcTopLeader] {
        &self.usrc.top_leaders
    }

    pub fn college_cards(&self) -> &[CollegeCard] {
        &self.usrc.college_cards
    }
}

fn check_unique(
    collection: &'static str,
    ids: impl Iterator<Item = String>,
) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(ContentError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn check_named<'a>(
    collection: &'static str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), ContentError> {
    for name in names {
        if name.trim().is_empty() {
            return Err(ContentError::EmptyField {
                collection,
                field: "name",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
