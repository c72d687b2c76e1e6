//! ReadHub — a local-first reading companion for editorial content.
//!
//! Entry point: runs an interactive console demo exercising every
//! component. The render layer (pages, navigation, styling) lives
//! elsewhere; this binary drives the engine directly.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                ReadHub v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Local-first reading companion for editorial content    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_storage();
    demo_settings();
    demo_catalog();
    demo_bookmarks();
    demo_quiz();
    demo_faq();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 7 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_storage() {
    use readhub::storage::{KeyValueStore, SqliteStore};
    section("Storage Layer");

    let mut store = SqliteStore::open_in_memory().expect("Failed to open store");
    store.set("greeting", "\"hello\"").unwrap();
    println!("  Wrote key 'greeting'");
    println!("  Read back: {:?}", store.get("greeting").unwrap());
    store.remove("greeting").unwrap();
    println!("  Removed: {:?}", store.get("greeting").unwrap());
    println!("  ✓ SqliteStore OK");
    println!();
}

fn demo_settings() {
    use readhub::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Language: {}", settings.general.language);
    println!("  Theme: {:?}", settings.appearance.theme);
    println!("  Font size: {}px", settings.appearance.font_size);
    println!("  Related articles shown: {}", settings.reading.related_count);

    engine.set_value("reading.related_count", serde_json::json!(5)).unwrap();
    println!("  Changed related_count to: {}", engine.get_settings().reading.related_count);

    engine.reset().unwrap();
    println!("  Reset to defaults: related_count = {}", engine.get_settings().reading.related_count);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_catalog() {
    use readhub::services::catalog::{Catalog, CatalogTrait};
    section("Article Catalog");

    let catalog = Catalog::builtin();
    println!("  Categories: {}", catalog.categories().len());
    for c in catalog.categories() {
        let subtopics: Vec<&str> = c.subtopics.iter().map(|s| s.name.as_str()).collect();
        println!("    {} — {}", c.name, subtopics.join(", "));
    }
    println!("  Articles: {}", catalog.articles().len());

    let in_finance = catalog.articles_in_category("personal-finance");
    println!("  In 'Personal Finance': {} article(s)", in_finance.len());

    let article = catalog.article("deep-work-starter-guide").unwrap();
    println!("  Lookup by slug: \"{}\" ({})", article.title, article.date);

    let mut rng = rand::rng();
    let related = catalog.related_articles("fifty-thirty-twenty-rule", 2, &mut rng);
    println!("  Related picks: {:?}", related.iter().map(|a| a.slug.as_str()).collect::<Vec<_>>());
    println!("  ✓ Catalog OK");
    println!();
}

fn demo_bookmarks() {
    use readhub::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
    use readhub::services::catalog::{Catalog, CatalogTrait};
    use readhub::storage::SqliteStore;
    section("Bookmark Store");

    let catalog = Catalog::builtin();
    let mut store = SqliteStore::open_in_memory().unwrap();
    let mut bookmarks = BookmarkStore::new(&mut store);

    let article = catalog.article("emergency-fund-basics").unwrap();
    println!("  Bookmarked on load: {}", bookmarks.is_bookmarked(&article.slug));

    let now = bookmarks.toggle(article);
    println!("  Toggled on: {}", now);
    println!("  Saved list: {} record(s)", bookmarks.bookmarks().len());

    let article2 = catalog.article("sleep-debt-explained").unwrap();
    bookmarks.toggle(article2);
    for r in bookmarks.bookmarks() {
        println!("    [{}] {} ({})", r.category, r.title, r.date);
    }

    let now = bookmarks.toggle(article);
    println!("  Toggled off: {}, remaining: {}", now, bookmarks.bookmarks().len());
    println!("  ✓ BookmarkStore OK");
    println!();
}

fn demo_quiz() {
    use readhub::managers::quiz_session::{QuizSession, QuizSessionTrait};
    use readhub::services::catalog::{Catalog, CatalogTrait};
    section("Quiz Session");

    let catalog = Catalog::builtin();
    let article = catalog.article("deep-work-starter-guide").unwrap();
    let mut quiz = QuizSession::new(article.quiz.clone());
    println!("  Questions: {}", quiz.question_count());

    quiz.select_answer(0, 1).unwrap();
    quiz.select_answer(1, 0).unwrap();
    quiz.select_answer(1, 1).unwrap(); // changed their mind
    println!("  Answered both (one re-selection)");

    quiz.submit();
    println!("  Submitted: {}, score: {}/{}", quiz.is_submitted(), quiz.score(), quiz.question_count());

    let revealed = quiz.toggle_reveal(0).unwrap();
    println!("  Revealed answer for question 0: {}", revealed);

    quiz.reset();
    println!("  Reset: submitted = {}, score = {}", quiz.is_submitted(), quiz.score());
    println!("  ✓ QuizSession OK");
    println!();
}

fn demo_faq() {
    use readhub::managers::faq_accordion::{FaqAccordion, FaqAccordionTrait};
    use readhub::services::catalog::{Catalog, CatalogTrait};
    section("FAQ Accordion");

    let catalog = Catalog::builtin();
    let article = catalog.article("fifty-thirty-twenty-rule").unwrap();
    let mut faq = FaqAccordion::new(article.faq.clone());
    println!("  Entries: {}", faq.entry_count());

    faq.toggle(0).unwrap();
    println!("  Opened entry 0: {:?}", faq.open_index());

    faq.toggle(1).unwrap();
    println!("  Opened entry 1 (0 closed): {:?}", faq.open_index());

    faq.toggle(1).unwrap();
    println!("  Closed entry 1: {:?}", faq.open_index());
    println!("  ✓ FaqAccordion OK");
    println!();
}

fn demo_app_core() {
    use readhub::app::App;
    use readhub::managers::bookmark_store::BookmarkStoreTrait;
    use readhub::services::catalog::CatalogTrait;
    section("App Core (full lifecycle)");

    let mut app = App::new(":memory:");
    app.startup();
    println!("  Startup sequence: store → settings → catalog");

    let article = app.catalog.article("two-minute-habits").unwrap().clone();
    let saved = app.bookmarks().toggle(&article);
    println!("  Toggled a bookmark through the app: {}", saved);

    app.shutdown();
    println!("  Shutdown sequence: flush settings");
    println!("  ✓ App Core OK");
}
