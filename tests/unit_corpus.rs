// Unit tests for the corpus registry and normalizer.
//
// Tests registry construction from raw text, the error taxonomy for bad
// inputs, and shortest-length truncation.

use stylin::corpus::{build_registry, shortest_length, truncate, AuthorText, Corpus, CorpusRegistry, Role};
use stylin::error::StylinError;
use stylin::text::tokenizer::WordTokenizer;

fn corpus_of_len(author: &str, role: Role, len: usize) -> Corpus {
    let tokens = (0..len).map(|i| format!("w{}", i % 7)).collect();
    Corpus::new(author, role, tokens)
}

// ============================================================
// build_registry — tokenization and validation
// ============================================================

#[test]
fn registry_tokenizes_each_text_independently() {
    let registry = build_registry(
        vec![
            AuthorText::known("doyle", "The Hound! The moor, at 11 o'clock."),
            AuthorText::known("wells", "Martians... landed; in 1898?"),
            AuthorText::unknown("unknown", "A lost world."),
        ],
        &WordTokenizer,
    )
    .unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.get("doyle").unwrap().tokens(),
        &["the", "hound", "the", "moor", "at"]
    );
    assert_eq!(registry.get("wells").unwrap().tokens(), &["martians", "landed", "in"]);
    assert_eq!(registry.unknown().tokens(), &["a", "lost", "world"]);
}

#[test]
fn registry_drops_compounds_and_keeps_contraction_heads() {
    let registry = build_registry(
        vec![
            AuthorText::known("doyle", "Ma'am, the well-known hound didn't bark."),
            AuthorText::unknown("unknown", "We're late -- it's half-past ten."),
        ],
        &WordTokenizer,
    )
    .unwrap();

    assert_eq!(
        registry.get("doyle").unwrap().tokens(),
        &["the", "hound", "did", "bark"]
    );
    assert_eq!(registry.unknown().tokens(), &["we", "late", "it", "ten"]);
}

#[test]
fn registry_preserves_registration_order() {
    let registry = build_registry(
        vec![
            AuthorText::known("wells", "war of the worlds"),
            AuthorText::unknown("unknown", "lost world"),
            AuthorText::known("doyle", "hound of the baskervilles"),
        ],
        &WordTokenizer,
    )
    .unwrap();

    let known: Vec<&str> = registry.known().map(|c| c.author()).collect();
    assert_eq!(known, vec!["wells", "doyle"]);
    assert_eq!(registry.unknown().role(), Role::Unknown);
}

#[test]
fn text_without_words_is_empty_corpus() {
    let err = build_registry(
        vec![
            AuthorText::known("doyle", "The hound."),
            AuthorText::unknown("unknown", "1899 -- 1902 !!!"),
        ],
        &WordTokenizer,
    )
    .unwrap_err();
    assert!(matches!(err, StylinError::EmptyCorpus { author } if author == "unknown"));
}

#[test]
fn missing_unknown_is_missing_input() {
    let err = build_registry(vec![AuthorText::known("doyle", "The hound.")], &WordTokenizer)
        .unwrap_err();
    assert!(matches!(err, StylinError::MissingInput { .. }));
}

#[test]
fn missing_known_author_is_missing_input() {
    let err = build_registry(vec![AuthorText::unknown("unknown", "A lost world.")], &WordTokenizer)
        .unwrap_err();
    assert!(matches!(err, StylinError::MissingInput { .. }));
}

// ============================================================
// shortest_length / truncate
// ============================================================

#[test]
fn shortest_length_scenario() {
    let registry = CorpusRegistry::from_corpora(vec![
        corpus_of_len("a", Role::Known, 1000),
        corpus_of_len("b", Role::Known, 800),
        corpus_of_len("unknown", Role::Unknown, 900),
    ])
    .unwrap();
    assert_eq!(shortest_length(&registry), 800);
}

#[test]
fn truncation_to_shortest_equalizes_lengths() {
    let registry = CorpusRegistry::from_corpora(vec![
        corpus_of_len("a", Role::Known, 57),
        corpus_of_len("b", Role::Known, 13),
        corpus_of_len("unknown", Role::Unknown, 31),
    ])
    .unwrap();
    let shortest = shortest_length(&registry);
    let min = registry.corpora().iter().map(|c| c.len()).min().unwrap();
    assert_eq!(shortest, min);
    for corpus in registry.corpora() {
        assert_eq!(corpus.truncated(shortest).len(), shortest);
    }
}

#[test]
fn truncation_keeps_original_order() {
    let corpus = Corpus::new(
        "doyle",
        Role::Known,
        vec!["one".into(), "two".into(), "three".into()],
    );
    assert_eq!(corpus.truncated(2), &["one", "two"]);
    assert_eq!(truncate(corpus.tokens(), 99).len(), 3);
}
