use proptest::prelude::*;

use globalign_alignment_rs::pairwise::global::{self, GAP};
use globalign_alignment_rs::pairwise::{Config, Layout};

fn arb_sequence() -> impl Strategy<Value = String> {
    "[ACGTacgt]{1,16}"
}

fn arb_config() -> impl Strategy<Value = Config<i32>> {
    (-4..=0, -4..=0, 0..=4, prop_oneof![Just(Layout::Unpadded), Just(Layout::Padded)])
        .prop_map(|(gap, mismatch, matched, layout)| Config::new(gap, mismatch, matched, layout))
}

fn column_score(config: &Config<i32>, a: char, b: char) -> i32 {
    if a == GAP || b == GAP {
        config.gap_penalty
    } else if a == b {
        config.match_score
    } else {
        config.mismatch_penalty
    }
}

fn ungapped(row: &str) -> String {
    row.chars().filter(|x| *x != GAP).collect()
}

proptest! {
    /// Both rows are of the same length and dropping gaps restores the upper-cased inputs.
    #[test]
    fn prop_rows_restore_inputs(seq1 in arb_sequence(), seq2 in arb_sequence(), config in arb_config()) {
        let result = global::align(&seq1, &seq2, &config).unwrap();
        let (top, bottom) = (result.alignment(), result.alignment_complement());

        prop_assert_eq!(top.chars().count(), bottom.chars().count());
        prop_assert!(top.chars().count() >= seq1.len().max(seq2.len()));
        prop_assert!(top.chars().count() <= seq1.len() + seq2.len());
        prop_assert_eq!(ungapped(top), seq1.to_uppercase());
        prop_assert_eq!(ungapped(bottom), seq2.to_uppercase());
    }

    /// A gap is never paired with another gap.
    #[test]
    fn prop_no_gap_pairs(seq1 in arb_sequence(), seq2 in arb_sequence(), config in arb_config()) {
        let result = global::align(&seq1, &seq2, &config).unwrap();
        let both = result
            .alignment()
            .chars()
            .zip(result.alignment_complement().chars())
            .any(|(a, b)| a == GAP && b == GAP);
        prop_assert!(!both);
    }

    /// The reported score equals the sum of column scores. Without padding the first column
    /// always pairs the first symbols and stays unscored.
    #[test]
    fn prop_score_matches_columns(seq1 in arb_sequence(), seq2 in arb_sequence(), config in arb_config()) {
        let result = global::align(&seq1, &seq2, &config).unwrap();
        let columns = result
            .alignment()
            .chars()
            .zip(result.alignment_complement().chars())
            .collect::<Vec<_>>();

        let mut expected: i32 = columns.iter().map(|(a, b)| column_score(&config, *a, *b)).sum();
        if config.layout == Layout::Unpadded {
            let (a, b) = columns[0];
            prop_assert_ne!(a, GAP);
            prop_assert_ne!(b, GAP);
            expected -= column_score(&config, a, b);
        }
        prop_assert_eq!(*result.final_score(), expected);
    }

    /// Padding only adds the score of the first symbol pair on top of the best unpadded path.
    #[test]
    fn prop_padding_bound(seq1 in arb_sequence(), seq2 in arb_sequence()) {
        let unpadded = Config::default();
        let padded = Config { layout: Layout::Padded, ..unpadded };

        let a = *global::align(&seq1, &seq2, &unpadded).unwrap().final_score();
        let b = *global::align(&seq1, &seq2, &padded).unwrap().final_score();
        prop_assert!(b >= a + unpadded.mismatch_penalty.min(unpadded.match_score));
    }

    /// Repeated runs with the same inputs produce identical results.
    #[test]
    fn prop_deterministic(seq1 in arb_sequence(), seq2 in arb_sequence(), config in arb_config()) {
        let first = global::align(&seq1, &seq2, &config).unwrap();
        let second = global::align(&seq1, &seq2, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
