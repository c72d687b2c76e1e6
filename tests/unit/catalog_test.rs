//! Unit tests for the Catalog public API.
//!
//! Runs against the built-in content table plus a small hand-rolled
//! catalog where the built-in data would make assertions awkward.

use rand::rngs::StdRng;
use rand::SeedableRng;

use readhub::services::catalog::{Catalog, CatalogTrait};
use readhub::types::article::Article;
use readhub::types::category::{Category, Subtopic};

#[test]
fn test_builtin_table_is_populated() {
    let catalog = Catalog::builtin();
    assert!(!catalog.categories().is_empty());
    assert!(!catalog.articles().is_empty());

    // Every article points at a category that exists in the taxonomy
    for article in catalog.articles() {
        assert!(
            catalog.category(&article.category).is_some(),
            "article '{}' references unknown category '{}'",
            article.slug,
            article.category
        );
    }
}

#[test]
fn test_category_and_subtopic_lookup() {
    let catalog = Catalog::builtin();

    let finance = catalog.category("personal-finance").unwrap();
    assert_eq!(finance.name, "Personal Finance");
    assert!(finance.subtopic("budgeting").is_some());
    assert!(finance.subtopic("nonexistent").is_none());

    assert!(catalog.category("nonexistent").is_none());
}

#[test]
fn test_article_lookup_by_slug() {
    let catalog = Catalog::builtin();

    let article = catalog.article("fifty-thirty-twenty-rule").unwrap();
    assert_eq!(article.category, "personal-finance");
    assert!(article.has_faq());
    assert!(article.has_quiz());

    assert!(catalog.article("no-such-article").is_none());
}

#[test]
fn test_articles_in_category_match_their_category() {
    let catalog = Catalog::builtin();

    let in_finance = catalog.articles_in_category("personal-finance");
    assert!(!in_finance.is_empty());
    assert!(in_finance.iter().all(|a| a.category == "personal-finance"));

    assert!(catalog.articles_in_category("nonexistent").is_empty());
}

fn article(slug: &str, category: &str) -> Article {
    Article {
        slug: slug.to_string(),
        title: slug.to_string(),
        date: "2025-01-01".to_string(),
        category: category.to_string(),
        subtopic: None,
        summary: String::new(),
        faq: vec![],
        quiz: vec![],
    }
}

fn small_catalog() -> Catalog {
    let categories = vec![Category {
        id: "topic".to_string(),
        name: "Topic".to_string(),
        subtopics: vec![Subtopic {
            id: "sub".to_string(),
            name: "Sub".to_string(),
        }],
    }];
    let articles = vec![
        article("a", "topic"),
        article("b", "topic"),
        article("c", "topic"),
        article("d", "topic"),
        article("other", "elsewhere"),
    ];
    Catalog::new(categories, articles)
}

#[test]
fn test_related_excludes_self_and_other_categories() {
    let catalog = small_catalog();
    let mut rng = StdRng::seed_from_u64(42);

    let related = catalog.related_articles("a", 10, &mut rng);
    let slugs: Vec<&str> = related.iter().map(|a| a.slug.as_str()).collect();

    assert!(!slugs.contains(&"a"));
    assert!(!slugs.contains(&"other"));
    assert_eq!(related.len(), 3);
}

#[test]
fn test_related_caps_at_requested_count() {
    let catalog = small_catalog();
    let mut rng = StdRng::seed_from_u64(42);

    let related = catalog.related_articles("a", 2, &mut rng);
    assert_eq!(related.len(), 2);
}

#[test]
fn test_related_is_deterministic_under_a_seeded_rng() {
    let catalog = small_catalog();

    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);

    let picks1: Vec<String> = catalog
        .related_articles("a", 2, &mut rng1)
        .iter()
        .map(|a| a.slug.clone())
        .collect();
    let picks2: Vec<String> = catalog
        .related_articles("a", 2, &mut rng2)
        .iter()
        .map(|a| a.slug.clone())
        .collect();

    assert_eq!(picks1, picks2);
}

#[test]
fn test_related_for_unknown_slug_is_empty() {
    let catalog = small_catalog();
    let mut rng = StdRng::seed_from_u64(42);
    assert!(catalog.related_articles("missing", 3, &mut rng).is_empty());
}
