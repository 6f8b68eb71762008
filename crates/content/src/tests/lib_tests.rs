use super::*;

const MINIMAL_USRC: &str = r#"{
    "top_leaders": [
        { "id": 1, "name": "Jonas Mwambenja", "position": "Speaker" }
    ],
    "college_cards": [
        { "slug": "coict", "short_name": "CoICT", "name": "College of ICT" }
    ]
}"#;

fn minimal_org(news: &str) -> String {
    format!(
        r#"{{
            "ministries": [
                {{
                    "id": "education",
                    "name": "Ministry of Education",
                    "description": "Academic matters.",
                    "leaders": [
                        {{ "name": "Neema Mwakyusa", "title": "Deputy Minister" }},
                        {{ "name": "Baraka Mhando", "title": "Minister" }}
                    ]
                }}
            ],
            "executives": [
                {{ "id": 1, "name": "Emmanuel Swai", "title": "President" }}
            ],
            "judiciary_top_leaders": [],
            "judiciary_members": [],
            "past_leaders": [],
            "colleges": [
                {{
                    "id": "coict",
                    "name": "College of ICT (CoICT)",
                    "leader": {{ "name": "Brian Mwaikambo", "title": "CoICT Representative", "phone": "+255 744 901 226" }},
                    "departments": []
                }}
            ],
            "news": {news}
        }}"#
    )
}

#[test]
fn parses_a_minimal_pair_of_documents() {
    let org = minimal_org(r#"[{ "id": 1, "title": "Assembly", "description": "Annual assembly.", "date": "2025-03-14" }]"#);
    let store = ContentStore::from_documents(&org, MINIMAL_USRC).expect("valid documents");

    assert_eq!(store.ministries().len(), 1);
    assert_eq!(store.news().len(), 1);
    assert_eq!(store.news()[0].image, None);
    assert_eq!(store.usrc_top_leaders()[0].position, "Speaker");
}

#[test]
fn featured_leader_prefers_the_minister_over_listing_order() {
    let org = minimal_org("[]");
    let store = ContentStore::from_documents(&org, MINIMAL_USRC).expect("valid documents");

    let featured = store.ministries()[0].featured_leader().expect("has leaders");
    assert_eq!(featured.name, "Baraka Mhando");
    assert_eq!(featured.title, "Minister");
}

#[test]
fn unknown_college_lookup_is_none_not_an_error() {
    let org = minimal_org("[]");
    let store = ContentStore::from_documents(&org, MINIMAL_USRC).expect("valid documents");

    let missing = shared::domain::CollegeId::new("no-such-college").expect("slug");
    assert!(store.college(&missing).is_none());

    let known = shared::domain::CollegeId::new("coict").expect("slug");
    assert_eq!(
        store.college(&known).map(|c| c.leader.name.as_str()),
        Some("Brian Mwaikambo")
    );
}

#[test]
fn duplicate_news_ids_are_rejected() {
    let org = minimal_org(
        r#"[
            { "id": 1, "title": "A", "description": "a", "date": "2025-01-01" },
            { "id": 1, "title": "B", "description": "b", "date": "2025-01-02" }
        ]"#,
    );
    let err = ContentStore::from_documents(&org, MINIMAL_USRC).expect_err("duplicate id");
    assert!(matches!(
        err,
        ContentError::DuplicateId {
            collection: "news",
            ..
        }
    ));
}

#[test]
fn malformed_dates_fail_at_parse_time() {
    let org = minimal_org(r#"[{ "id": 1, "title": "A", "description": "a", "date": "sometime in March" }]"#);
    let err = ContentStore::from_documents(&org, MINIMAL_USRC).expect_err("bad date");
    assert!(matches!(
        err,
        ContentError::Parse {
            document: ORG_DOCUMENT,
            ..
        }
    ));
}

#[test]
fn empty_slugs_fail_at_parse_time() {
    let org = minimal_org("[]").replace(r#""id": "coict""#, r#""id": "  ""#);
    let err = ContentStore::from_documents(&org, MINIMAL_USRC).expect_err("blank slug");
    assert!(matches!(err, ContentError::Parse { .. }));
}

#[test]
fn blank_college_name_is_rejected_by_validation() {
    let org = minimal_org("[]").replace("College of ICT (CoICT)", " ");
    let err = ContentStore::from_documents(&org, MINIMAL_USRC).expect_err("blank name");
    assert!(matches!(
        err,
        ContentError::EmptyField {
            collection: "colleges",
            field: "name",
        }
    ));
}

#[test]
fn empty_news_list_is_valid() {
    let org = minimal_org("[]");
    let store = ContentStore::from_documents(&org, MINIMAL_USRC).expect("empty news is fine");
    assert!(store.news().is_empty());
}
