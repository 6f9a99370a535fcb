/*!
 * Tests for translation extraction from dictionary pages
 */

use slovnik::translation::extractor::extract_translations;
use slovnik::translation::{Extractor, Fragment, TrailingFragment};

use crate::common;

#[test]
fn test_extractTranslations_withDelimitedTexts_shouldSplitEntries() {
    let fragments = vec![
        Fragment::text("dog"),
        Fragment::Delimiter,
        Fragment::text("house"),
        Fragment::Delimiter,
    ];

    assert_eq!(extract_translations(fragments, TrailingFragment::Drop), vec!["dog", "house"]);
}

#[test]
fn test_extractTranslations_withAdjacentTexts_shouldJoinWithSpace() {
    let fragments = vec![Fragment::text("red"), Fragment::text("car"), Fragment::Delimiter];

    assert_eq!(extract_translations(fragments, TrailingFragment::Drop), vec!["red car"]);
}

#[test]
fn test_extractTranslations_withNoDelimiter_shouldBeEmptyByDefault() {
    let fragments = vec![Fragment::text("dog"), Fragment::text("cat")];

    assert!(extract_translations(fragments.clone(), TrailingFragment::Drop).is_empty());
    assert_eq!(extract_translations(fragments, TrailingFragment::Commit), vec!["dog cat"]);
}

#[test]
fn test_extractTranslations_withNoFragments_shouldBeEmpty() {
    assert!(extract_translations(Vec::new(), TrailingFragment::Commit).is_empty());
}

#[test]
fn test_parsePage_withDogPage_shouldDropUnterminatedEntry() {
    let parsed = Extractor::default().parse_page(&common::dog_page(), "psa").unwrap();

    assert_eq!(parsed.word, "pes");
    assert_eq!(parsed.translations, vec!["dog", "hound"]);
}

#[test]
fn test_parsePage_withCommitPolicy_shouldKeepUnterminatedEntry() {
    let extractor = Extractor::new(TrailingFragment::Commit);

    let parsed = extractor.parse_page(&common::dog_page(), "pes").unwrap();

    assert_eq!(parsed.translations, vec!["dog", "hound", "cur"]);
}

#[test]
fn test_parsePage_shouldIgnoreHeadingsOutsideHeadwordGroup() {
    let html = common::dictionary_page("kočka", r#"<a>cat</a><br>"#);

    let parsed = Extractor::default().parse_page(&html, "kocka").unwrap();

    assert_eq!(parsed.word, "kočka");
}

#[test]
fn test_parsePage_withNotFoundPage_shouldHaveNoTranslations() {
    let parsed = Extractor::default()
        .parse_page(&common::not_found_page("xyz"), "xyz")
        .unwrap();

    assert_eq!(parsed.word, "xyz");
    assert!(parsed.translations.is_empty());
}

#[test]
fn test_parsePage_withEmptyHeadword_shouldFallBackToQuestion() {
    let html = common::dictionary_page("   ", r#"<a>dog</a><br>"#);

    let parsed = Extractor::default().parse_page(&html, "pes").unwrap();

    assert_eq!(parsed.word, "pes");
    assert_eq!(parsed.translations, vec!["dog"]);
}

#[test]
fn test_parsePage_withTextOnlyChildren_shouldIgnoreBareText() {
    let html = common::dictionary_page("pes", "loose text<a>dog</a> more text<br>");

    let parsed = Extractor::default().parse_page(&html, "pes").unwrap();

    assert_eq!(parsed.translations, vec!["dog"]);
}
