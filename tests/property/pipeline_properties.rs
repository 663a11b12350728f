use proptest::prelude::*;
use regex::Regex;
use tf_idf_similarity::{
    cosine_similarity, idf, tf, CosineSimilarity, NormalizationLevel, PatternTokenizer, TfIdf,
    TfIdfVectorizer, TokenNormalizer, Tokenize, Tokenizer,
};

// Latin, Greek, Cyrillic, CJK, Devanagari with its marks, letter numbers,
// circled letters and combining accents
fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        "[a-zA-Zéß0-9 ,.αβΣжЯ日本テーनमसत्ेⅫⅻⓐⓑ\u{301}]{0,40}",
        0..8,
    )
}

fn refs(docs: &[String]) -> Vec<&str> {
    docs.iter().map(String::as_str).collect()
}

fn letter_run() -> Regex {
    Regex::new(r"^\p{L}{2,}$").unwrap()
}

fn nonzero_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 1..16)
        .prop_filter("needs a nonzero component", |v| v.iter().any(|x| x.abs() > 1e-3))
}

proptest! {
    #[test]
    fn vocabulary_sorted_and_unique(docs in corpus()) {
        let (vocab, _) = Tokenizer::lowercase().tokenize(&refs(&docs)).unwrap();
        prop_assert!(vocab.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {:?}", vocab);
    }

    #[test]
    fn tokens_are_letter_runs(docs in corpus()) {
        let (_, tokens) = Tokenizer::new().tokenize(&refs(&docs)).unwrap();
        prop_assert_eq!(tokens.len(), docs.len());
        let letters = letter_run();
        for token in tokens.iter().flatten() {
            prop_assert!(letters.is_match(token), "not a letter run: {:?}", token);
        }
    }

    #[test]
    fn scanner_matches_default_pattern(docs in corpus()) {
        let scan = Tokenizer::lowercase().tokenize(&refs(&docs)).unwrap();
        let pattern = PatternTokenizer::default()
            .with_normalizer(TokenNormalizer::lowercase())
            .tokenize(&refs(&docs))
            .unwrap();
        prop_assert_eq!(scan, pattern);
    }

    #[test]
    fn tf_rows_cover_every_token(docs in corpus()) {
        let (vocab, tokens) = Tokenizer::new().tokenize(&refs(&docs)).unwrap();
        let m = tf(&vocab, &tokens);
        prop_assert_eq!(m.len(), docs.len());
        for (row, doc) in m.iter().zip(&tokens) {
            prop_assert_eq!(row.len(), vocab.len());
            prop_assert_eq!(row.iter().sum::<f64>(), doc.len() as f64);
        }
    }

    #[test]
    fn idf_is_positive(docs in corpus(), smoothing in any::<bool>()) {
        let (vocab, tokens) = Tokenizer::new().tokenize(&refs(&docs)).unwrap();
        prop_assert!(idf(&vocab, &tokens, smoothing).iter().all(|w| *w > 0.0));
    }

    #[test]
    fn empty_corpus_idf_is_one(vocab in prop::collection::vec("[a-z]{2,6}", 0..10)) {
        prop_assert!(idf(&vocab, &[], true).iter().all(|w| *w == 1.0));
    }

    #[test]
    fn l2_rows_have_unit_norm(docs in corpus()) {
        prop_assume!(!docs.is_empty());
        let (vocab, tokens) = Tokenizer::new().tokenize(&refs(&docs)).unwrap();
        let m = TfIdfVectorizer::new()
            .tf_idf(&tf(&vocab, &tokens), &idf(&vocab, &tokens, true))
            .unwrap();
        for (row, doc) in m.iter().zip(&tokens) {
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if doc.is_empty() {
                prop_assert!(row.iter().all(|v| *v == 0.0));
            } else {
                prop_assert!((norm - 1.0).abs() < 1e-9, "norm = {}", norm);
            }
        }
    }

    #[test]
    fn l1_rows_sum_to_one(docs in corpus()) {
        prop_assume!(!docs.is_empty());
        let (vocab, tokens) = Tokenizer::new().tokenize(&refs(&docs)).unwrap();
        let m = TfIdfVectorizer::with_norm(NormalizationLevel::L1)
            .tf_idf(&tf(&vocab, &tokens), &idf(&vocab, &tokens, false))
            .unwrap();
        for (row, doc) in m.iter().zip(&tokens) {
            let sum = row.iter().map(|v| v.abs()).sum::<f64>();
            if doc.is_empty() {
                prop_assert_eq!(sum, 0.0);
            } else {
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
            }
        }
    }

    #[test]
    fn cosine_with_itself_is_one(a in nonzero_vec()) {
        prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_with_zero_is_zero(a in nonzero_vec()) {
        let zero = vec![0.0; a.len()];
        prop_assert_eq!(cosine_similarity(&a, &zero), 0.0);
        prop_assert_eq!(cosine_similarity(&zero, &a), 0.0);
    }

    #[test]
    fn disjoint_support_is_orthogonal(a in nonzero_vec()) {
        // a in the first half, b in the second
        let n = a.len();
        let mut left = a.clone();
        left.extend(std::iter::repeat(0.0).take(n));
        let mut right = vec![0.0; n];
        right.extend(a);
        prop_assert_eq!(cosine_similarity(&left, &right), 0.0);
    }

    #[test]
    fn scores_are_bounded(query in "[a-zA-Z ]{0,30}", docs in corpus()) {
        prop_assume!(!docs.is_empty());
        let engine = CosineSimilarity::new(Tokenizer::lowercase(), TfIdfVectorizer::new());
        let scores = engine.score(&query, &docs).unwrap();
        prop_assert_eq!(scores.len(), docs.len());
        for s in scores {
            prop_assert!(!s.is_nan());
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&s), "score {}", s);
        }
    }
}
