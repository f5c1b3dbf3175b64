//! Integration tests for the content registry public surface.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use portfolio_content::{BUNDLED_REGISTRY_JSON, ContentRegistry, RegistryError};
use rstest::rstest;

#[test]
fn bundled_json_matches_bundled_registry() {
    let parsed = ContentRegistry::from_json(BUNDLED_REGISTRY_JSON).expect("valid registry");
    let bundled = ContentRegistry::bundled().expect("valid registry");
    assert_eq!(parsed, bundled);
    assert_eq!(bundled.version(), 1);
}

#[test]
fn showcase_seed_keeps_declared_order() {
    let registry = ContentRegistry::bundled().expect("valid registry");
    let seed = registry.find_seed("showcase").expect("showcase seed");
    let titles: Vec<&str> = seed.projects().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        ["AI Chat Assistant", "E-Commerce Dashboard", "Neon Landing Page"]
    );
    assert_eq!(seed.achievements()[0].year, "October 2023");
    assert!(seed.achievements().iter().all(|a| a.link.is_none()));
}

#[test]
fn fallback_carries_nullable_demo_link() {
    let registry = ContentRegistry::bundled().expect("valid registry");
    let lumina = registry
        .fallback()
        .projects()
        .iter()
        .find(|p| p.title == "Lumina E-Commerce")
        .expect("fallback project present");
    assert!(lumina.live_demo_url.is_none());
    assert_eq!(lumina.github_url.as_deref(), Some("#"));
}

#[rstest]
#[case::blank_experience_role(
    r#"{"version": 1, "defaultSeed": "a",
        "seeds": [{"name": "a", "experiences": [{"company": "C", "role": " ", "period": "P", "description": "D"}]}],
        "fallback": {
            "projects": [{"title": "P", "description": "D", "imageUrl": "https://i", "techStack": []}],
            "experiences": [{"company": "C", "role": "R", "period": "P", "description": "D"}]
        }}"#,
    RegistryError::BlankField { location: "seed 'a' experiences[0]".to_owned(), field: "role" }
)]
#[case::blank_fallback_project_title(
    r#"{"version": 1, "defaultSeed": "a",
        "seeds": [{"name": "a", "projects": [{"title": "T", "description": "D", "imageUrl": "https://i", "techStack": []}]}],
        "fallback": {
            "projects": [{"title": "", "description": "D", "imageUrl": "https://i", "techStack": []}],
            "experiences": [{"company": "C", "role": "R", "period": "P", "description": "D"}]
        }}"#,
    RegistryError::BlankField { location: "fallback projects[0]".to_owned(), field: "title" }
)]
#[case::empty_fallback_experiences(
    r#"{"version": 1, "defaultSeed": "a",
        "seeds": [{"name": "a", "projects": [{"title": "T", "description": "D", "imageUrl": "https://i", "techStack": []}]}],
        "fallback": {
            "projects": [{"title": "P", "description": "D", "imageUrl": "https://i", "techStack": []}],
            "experiences": []
        }}"#,
    RegistryError::EmptyFallback { collection: "experiences" }
)]
#[case::seed_with_only_experiences(
    r#"{"version": 1, "defaultSeed": "a",
        "seeds": [{"name": "a", "projects": [],
            "experiences": [{"company": "C", "role": "R", "period": "P", "description": "D"}],
            "achievements": [{"title": "A", "description": "D", "year": "2024"}]}],
        "fallback": {
            "projects": [{"title": "P", "description": "D", "imageUrl": "https://i", "techStack": []}],
            "experiences": [{"company": "C", "role": "R", "period": "P", "description": "D"}]
        }}"#,
    RegistryError::EmptySeedProjects { name: "a".to_owned() }
)]
fn rejects_invalid_content(#[case] json: &str, #[case] expected: RegistryError) {
    assert_eq!(ContentRegistry::from_json(json), Err(expected));
}
