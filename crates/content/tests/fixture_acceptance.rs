//! Acceptance checks for the fixture documents shipped with the kiosk.

use std::path::PathBuf;

use content::ContentStore;
use shared::domain::CollegeId;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("fixtures")
}

#[test]
fn shipped_fixtures_load_from_disk() {
    let store = ContentStore::load_from_dir(&fixtures_dir()).expect("shipped fixtures are valid");

    assert_eq!(store.ministries().len(), 10);
    assert_eq!(store.executives().len(), 5);
    assert!(!store.past_leaders().is_empty());
    assert!(!store.news().is_empty());
}

#[test]
fn embedded_fixtures_match_the_disk_copies() {
    let embedded = ContentStore::embedded_default().expect("embedded fixtures are valid");
    let disk = ContentStore::load_from_dir(&fixtures_dir()).expect("disk fixtures are valid");

    assert_eq!(embedded.news().len(), disk.news().len());
    assert_eq!(embedded.college_cards().len(), disk.college_cards().len());
}

#[test]
fn every_college_card_has_a_detail_record() {
    let store = ContentStore::embedded_default().expect("embedded fixtures are valid");
    for card in store.college_cards() {
        assert!(
            store.college(&card.slug).is_some(),
            "card '{}' has no detail record",
            card.slug
        );
    }
}

#[test]
fn every_ministry_has_a_featured_leader() {
    let store = ContentStore::embedded_default().expect("embedded fixtures are valid");
    for ministry in store.ministries() {
        assert!(
            ministry.featured_leader().is_some(),
            "ministry '{}' has no leaders",
            ministry.id
        );
    }
}

#[test]
fn representation_areas_without_departments_are_present() {
    let store = ContentStore::embedded_default().expect("embedded fixtures are valid");
    for slug in ["mrcc", "off-campus", "in-campus"] {
        let id = CollegeId::new(slug).expect("slug");
        let college = store.college(&id).expect("area record exists");
        assert!(college.departments.is_empty());
    }
}
