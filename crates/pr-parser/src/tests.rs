use std::io::Write;
use std::path::Path;

use crate::*;
use pr_core::PrError;
use pr_phonetics::{inventory, ConsonantCluster, Syllable, VowelNucleus};

fn v(symbol: char) -> pr_phonetics::Vowel {
    inventory::vowel(symbol).unwrap()
}

fn c(symbol: char) -> pr_phonetics::Consonant {
    inventory::consonant(symbol).unwrap()
}

// ========== Syllable Structure ==========

#[test]
fn test_parse_open_syllable() {
    let s = parse_syllable("pa").unwrap();
    assert_eq!(s, Syllable::new(Some(ConsonantCluster::single(c('p'))), VowelNucleus::new(v('a')), None));
}

#[test]
fn test_parse_bare_vowel() {
    let s = parse_syllable("o").unwrap();
    assert_eq!(s, Syllable::nucleus_only(VowelNucleus::new(v('o'))));
}

#[test]
fn test_parse_clusters_are_greedy() {
    let s = parse_syllable("plaʁt").unwrap();
    assert_eq!(s.onset(), Some(&ConsonantCluster::pair(c('p'), c('l'))));
    assert_eq!(s.coda(), Some(&ConsonantCluster::pair(c('ʁ'), c('t'))));
}

#[test]
fn test_parse_semivowel_nucleus() {
    let s = parse_syllable("pia").unwrap();
    assert_eq!(*s.nucleus(), VowelNucleus::with_semivowel(v('i'), v('a')));
}

#[test]
fn test_parse_nasal_any_position() {
    let after = parse_syllable("pa\u{303}").unwrap();
    let before = parse_syllable("p\u{303}a").unwrap();
    assert!(after.nucleus().is_nasal());
    assert_eq!(after, before);

    let trailing = parse_syllable("ia\u{303}").unwrap();
    let middle = parse_syllable("i\u{303}a").unwrap();
    assert_eq!(trailing, middle);
    assert_eq!(*trailing.nucleus(), VowelNucleus::with_semivowel(v('i'), v('a')).set_nasal(true));
}

#[test]
fn test_parse_consonant_digraph_onset() {
    let s = parse_syllable("ʃwa").unwrap();
    assert_eq!(s.onset(), Some(&ConsonantCluster::pair(c('ʃ'), c('w'))));
    assert!(s.coda().is_none());
}

// ========== Text ==========

#[test]
fn test_parse_text_basic() {
    let text = parse_text("pa.ta.pa").unwrap();
    assert_eq!(text.len(), 3);
    assert_eq!(text.distinct_count(), 2);
    assert_eq!(text.to_string(), "pa.ta.pa");
}

#[test]
fn test_parse_text_trailing_separator() {
    let text = parse_text("pa.ta.").unwrap();
    assert_eq!(text.len(), 2);
}

#[test]
fn test_parse_text_surrounding_whitespace() {
    let text = parse_text("  pa.ta\n").unwrap();
    assert_eq!(text.to_string(), "pa.ta");
}

#[test]
fn test_parse_text_empty() {
    assert!(parse_text("").unwrap().is_empty());
    assert!(parse_text("   \n").unwrap().is_empty());
}

#[test]
fn test_parse_text_single_syllable() {
    let text = parse_text("a").unwrap();
    assert_eq!(text.len(), 1);
}

// ========== Errors ==========

#[test]
fn test_error_unknown_symbol() {
    let err = parse_text("pa#").unwrap_err();
    assert!(matches!(err, PrError::UnknownSymbol { symbol: '#', offset: 2 }));
}

#[test]
fn test_error_unknown_symbol_in_onset() {
    let err = parse_text("pAa").unwrap_err();
    assert!(matches!(err, PrError::UnknownSymbol { symbol: 'A', offset: 1 }));
}

#[test]
fn test_error_offsets_are_bytes() {
    let err = parse_text("ʃa#").unwrap_err();
    assert!(matches!(err, PrError::UnknownSymbol { symbol: '#', offset: 3 }));
}

#[test]
fn test_error_offsets_include_leading_whitespace() {
    let err = parse_text("  pa#").unwrap_err();
    assert!(matches!(err, PrError::UnknownSymbol { symbol: '#', offset: 4 }));
}

#[test]
fn test_error_internal_whitespace() {
    let err = parse_text("pa ta").unwrap_err();
    assert!(matches!(err, PrError::UnknownSymbol { symbol: ' ', offset: 2 }));
}

#[test]
fn test_error_empty_syllable() {
    let err = parse_text("pa..ta").unwrap_err();
    assert!(matches!(err, PrError::MissingNucleus { offset: 3 }));
    let err = parse_text(".pa").unwrap_err();
    assert!(matches!(err, PrError::MissingNucleus { offset: 0 }));
}

#[test]
fn test_error_three_consonants() {
    let err = parse_text("ppp").unwrap_err();
    assert!(matches!(err, PrError::MissingNucleus { offset: 2 }));
}

#[test]
fn test_error_consonants_only_at_end() {
    let err = parse_text("pa.pt").unwrap_err();
    assert!(matches!(err, PrError::MissingNucleus { offset: 5 }));
}

#[test]
fn test_error_expected_separator() {
    let err = parse_text("pata").unwrap_err();
    assert!(matches!(err, PrError::ExpectedSeparator { found: 'a', offset: 3 }));
    let err = parse_text("pastra").unwrap_err();
    assert!(matches!(err, PrError::ExpectedSeparator { found: 'r', offset: 4 }));
}

#[test]
fn test_error_single_syllable_trailing() {
    let err = parse_syllable("pa.ta").unwrap_err();
    assert!(matches!(err, PrError::TrailingInput { offset: 2 }));
    let err = parse_syllable("").unwrap_err();
    assert!(matches!(err, PrError::MissingNucleus { offset: 0 }));
}

// ========== Serialization ==========

#[test]
fn test_serialize_idempotent() {
    let inputs = [
        "pa.ta.pa",
        "plaʁt.o.ia\u{303}",
        "i\u{303}a.p\u{303}a.ʃwa",
        "ɡʁa.ndo.ŋa",
        "a.",
    ];
    for input in inputs {
        let first = parse_text(input).unwrap();
        let serialized = first.to_string();
        let second = parse_text(&serialized).unwrap();
        assert_eq!(first, second, "{input}");
        assert_eq!(second.to_string(), serialized);
    }
}

#[test]
fn test_serialize_moves_tilde_after_vowel() {
    let text = parse_text("i\u{303}a").unwrap();
    assert_eq!(text.to_string(), "ia\u{303}");
}

// ========== IPA Parser ==========

#[test]
fn test_ipa_parser_content() {
    let parser = IpaParser::new();
    let text = parser.parse_content("pa.ta").unwrap();
    assert_eq!(text.len(), 2);
}

#[test]
fn test_ipa_parser_file() {
    let mut file = tempfile::Builder::new().suffix(".ipa").tempfile().unwrap();
    writeln!(file, "pa.ta.pa").unwrap();
    let parser = IpaParser::default();
    let text = parser.parse_file(file.path()).unwrap();
    assert_eq!(text.to_string(), "pa.ta.pa");
    assert!(parser.can_parse(file.path()));
}

#[test]
fn test_ipa_parser_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = IpaParser::new().parse_file(&dir.path().join("absent.ipa")).unwrap_err();
    assert!(matches!(err, PrError::Io(_)));
}

#[test]
fn test_ipa_parser_extensions() {
    let parser = IpaParser::new();
    assert!(parser.can_parse(Path::new("corpus.txt")));
    assert!(!parser.can_parse(Path::new("corpus.md")));
    assert_eq!(parser.supported_extensions(), vec![".ipa", ".txt"]);
}
