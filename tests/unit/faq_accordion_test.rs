//! Unit tests for the FaqAccordion public API.

use readhub::managers::faq_accordion::{FaqAccordion, FaqAccordionTrait};
use readhub::types::faq::FaqEntry;

fn entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new("First question?", "First answer."),
        FaqEntry::new("Second question?", "Second answer."),
        FaqEntry::new("Third question?", "Third answer."),
    ]
}

#[test]
fn test_all_closed_initially() {
    let faq = FaqAccordion::new(entries());
    assert_eq!(faq.open_index(), None);
    assert!(!faq.is_open(0));
}

#[test]
fn test_toggle_opens_and_closes() {
    let mut faq = FaqAccordion::new(entries());

    assert!(faq.toggle(1).unwrap());
    assert_eq!(faq.open_index(), Some(1));
    assert!(faq.is_open(1));

    assert!(!faq.toggle(1).unwrap());
    assert_eq!(faq.open_index(), None);
}

#[test]
fn test_opening_another_entry_closes_the_first() {
    let mut faq = FaqAccordion::new(entries());

    faq.toggle(0).unwrap();
    faq.toggle(2).unwrap();

    assert!(!faq.is_open(0));
    assert!(faq.is_open(2));
    assert_eq!(faq.open_index(), Some(2));
}

#[test]
fn test_out_of_range_rejected_without_state_change() {
    let mut faq = FaqAccordion::new(entries());
    faq.toggle(1).unwrap();

    assert!(faq.toggle(3).is_err());
    assert_eq!(faq.open_index(), Some(1));
}

#[test]
fn test_empty_accordion() {
    let mut faq = FaqAccordion::new(vec![]);
    assert_eq!(faq.entry_count(), 0);
    assert!(faq.toggle(0).is_err());
    assert_eq!(faq.open_index(), None);
}

#[test]
fn test_entries_accessor() {
    let faq = FaqAccordion::new(entries());
    assert_eq!(faq.entry_count(), 3);
    assert_eq!(faq.entries()[0].question, "First question?");
    assert_eq!(faq.entries()[2].answer, "Third answer.");
}
