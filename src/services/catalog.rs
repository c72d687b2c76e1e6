//! Article catalog for ReadHub.
//!
//! Serves the category browser and per-article data from an inline data
//! table: the taxonomy of topics and subtopics, the article registry, and
//! related-article selection. Content is static — the catalog is built
//! once at startup, either from the built-in table or from externally
//! supplied data.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::article::Article;
use crate::types::category::{Category, Subtopic};
use crate::types::faq::FaqEntry;
use crate::types::quiz::QuizQuestion;

/// Trait defining read access to the catalog.
pub trait CatalogTrait {
    fn categories(&self) -> &[Category];
    fn category(&self, id: &str) -> Option<&Category>;
    fn articles(&self) -> &[Article];
    fn article(&self, slug: &str) -> Option<&Article>;
    fn articles_in_category(&self, category_id: &str) -> Vec<&Article>;
}

/// Immutable catalog of categories and articles.
pub struct Catalog {
    categories: Vec<Category>,
    articles: Vec<Article>,
}

impl Catalog {
    /// Creates a catalog from externally supplied data.
    pub fn new(categories: Vec<Category>, articles: Vec<Article>) -> Self {
        Self {
            categories,
            articles,
        }
    }

    /// The built-in content table shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(builtin_categories(), builtin_articles())
    }

    /// Picks up to `count` articles from the same category as `slug`,
    /// excluding the article itself.
    ///
    /// The randomness source is injected so callers that need
    /// reproducibility can seed it; beyond that, selection order is
    /// unspecified.
    pub fn related_articles<R: Rng>(
        &self,
        slug: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<&Article> {
        let Some(current) = self.article(slug) else {
            return Vec::new();
        };
        let mut candidates: Vec<&Article> = self
            .articles
            .iter()
            .filter(|a| a.category == current.category && a.slug != slug)
            .collect();
        candidates.shuffle(rng);
        candidates.truncate(count);
        candidates
    }
}

impl CatalogTrait for Catalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    fn articles_in_category(&self, category_id: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category_id)
            .collect()
    }
}

fn subtopic(id: &str, name: &str) -> Subtopic {
    Subtopic {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// The topic/subtopic table rendered by the category browser.
fn builtin_categories() -> Vec<Category> {
    vec![
        Category {
            id: "personal-finance".to_string(),
            name: "Personal Finance".to_string(),
            subtopics: vec![
                subtopic("budgeting", "Budgeting"),
                subtopic("saving", "Saving"),
                subtopic("credit", "Credit & Debt"),
            ],
        },
        Category {
            id: "productivity".to_string(),
            name: "Productivity".to_string(),
            subtopics: vec![
                subtopic("focus", "Focus & Deep Work"),
                subtopic("habits", "Habits"),
            ],
        },
        Category {
            id: "wellness".to_string(),
            name: "Wellness".to_string(),
            subtopics: vec![
                subtopic("sleep", "Sleep"),
                subtopic("nutrition", "Nutrition"),
            ],
        },
    ]
}

/// The article registry. Prose bodies live in the render layer; the
/// catalog carries only what the engine operates on.
fn builtin_articles() -> Vec<Article> {
    vec![
        Article {
            slug: "fifty-thirty-twenty-rule".to_string(),
            title: "The 50/30/20 Rule, Explained".to_string(),
            date: "2025-03-14".to_string(),
            category: "personal-finance".to_string(),
            subtopic: Some("budgeting".to_string()),
            summary: "A simple split for needs, wants, and savings that survives real life.".to_string(),
            faq: vec![
                FaqEntry::new(
                    "Does the rule work on an irregular income?",
                    "Yes — apply the percentages to each payment as it arrives instead of to a monthly figure.",
                ),
                FaqEntry::new(
                    "Where does debt repayment fit?",
                    "Minimum payments are needs; anything beyond the minimum counts toward the 20% savings share.",
                ),
            ],
            quiz: vec![
                QuizQuestion::new(
                    "Under the 50/30/20 rule, what share of take-home pay goes to wants?",
                    &["20%", "30%", "50%", "As much as is left over"],
                    1,
                ),
                QuizQuestion::new(
                    "Which of these belongs in the 'needs' bucket?",
                    &["Streaming subscriptions", "Rent", "Concert tickets"],
                    1,
                ),
            ],
        },
        Article {
            slug: "emergency-fund-basics".to_string(),
            title: "Emergency Funds: How Much Is Enough?".to_string(),
            date: "2025-04-02".to_string(),
            category: "personal-finance".to_string(),
            subtopic: Some("saving".to_string()),
            summary: "Three to six months of expenses is the convention — here is how to size yours.".to_string(),
            faq: vec![FaqEntry::new(
                "Should an emergency fund be invested?",
                "No — it needs to be liquid. A high-yield savings account is the usual home.",
            )],
            quiz: vec![QuizQuestion::new(
                "An emergency fund should be sized against your monthly…",
                &["Income", "Expenses", "Savings rate", "Rent"],
                1,
            )],
        },
        Article {
            slug: "credit-score-myths".to_string(),
            title: "Five Credit Score Myths That Cost You Money".to_string(),
            date: "2025-01-27".to_string(),
            category: "personal-finance".to_string(),
            subtopic: Some("credit".to_string()),
            summary: "Checking your own score does not hurt it, and other persistent myths.".to_string(),
            faq: vec![],
            quiz: vec![QuizQuestion::new(
                "Checking your own credit score…",
                &["Lowers it slightly", "Has no effect on it", "Raises it"],
                1,
            )],
        },
        Article {
            slug: "deep-work-starter-guide".to_string(),
            title: "A Starter Guide to Deep Work".to_string(),
            date: "2025-02-19".to_string(),
            category: "productivity".to_string(),
            subtopic: Some("focus".to_string()),
            summary: "Blocking ninety distraction-free minutes beats a whole day of shallow effort.".to_string(),
            faq: vec![FaqEntry::new(
                "How long should a deep work block be?",
                "Start with sixty to ninety minutes; most people cannot sustain more than four hours a day.",
            )],
            quiz: vec![
                QuizQuestion::new(
                    "What is the recommended starting length for a deep work block?",
                    &["Fifteen minutes", "Sixty to ninety minutes", "A full workday"],
                    1,
                ),
                QuizQuestion::new(
                    "Which habit most undermines deep work?",
                    &["Morning exercise", "Frequent inbox checks", "Taking notes by hand", "Working before noon"],
                    1,
                ),
            ],
        },
        Article {
            slug: "two-minute-habits".to_string(),
            title: "Why Two-Minute Habits Stick".to_string(),
            date: "2025-05-08".to_string(),
            category: "productivity".to_string(),
            subtopic: Some("habits".to_string()),
            summary: "Shrinking a habit until it is trivial removes the negotiation that kills it.".to_string(),
            faq: vec![],
            quiz: vec![],
        },
        Article {
            slug: "sleep-debt-explained".to_string(),
            title: "Sleep Debt Is Real — Here's How It Accrues".to_string(),
            date: "2025-06-11".to_string(),
            category: "wellness".to_string(),
            subtopic: Some("sleep".to_string()),
            summary: "Short nights compound; weekend lie-ins repay less than you think.".to_string(),
            faq: vec![FaqEntry::new(
                "Can you repay sleep debt on weekends?",
                "Partially. Recovery sleep helps, but performance stays below baseline for days.",
            )],
            quiz: vec![QuizQuestion::new(
                "Sleeping in on weekends repays sleep debt…",
                &["Completely", "Partially", "Not at all"],
                1,
            )],
        },
    ]
}
