use derive_getters::{Dissolve, Getters};
use eyre::{Result, WrapErr};

use super::validate::{self, Alphabet};
use super::{Config, Engine};

/// Gap marker used in textual alignments.
pub const GAP: char = '-';

/// Global alignment of two textual sequences.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct GlobalAlignment {
    /// The first sequence with gaps inserted
    alignment: String,
    /// The second sequence with gaps inserted, same length as `alignment`
    alignment_complement: String,
    final_score: i32,
}

/// Validate, upper-case and globally align two sequences of ASCII letters.
pub fn align(seq1: &str, seq2: &str, config: &Config<i32>) -> Result<GlobalAlignment> {
    align_with(seq1, seq2, config, Alphabet::default())
}

/// Same as [`align`] with a custom input alphabet. Sequences are aligned character by character.
pub fn align_with(
    seq1: &str,
    seq2: &str,
    config: &Config<i32>,
    alphabet: Alphabet,
) -> Result<GlobalAlignment> {
    let (seq1, seq2) = validate::sequences(seq1, seq2, alphabet)?;
    let (seq1, seq2): (Vec<char>, Vec<char>) = (seq1.chars().collect(), seq2.chars().collect());

    let engine = Engine::from_config(config);
    let alignment = engine
        .align(&seq1, &seq2)
        .wrap_err("Global alignment failed")?;
    let (top, bottom) = alignment.gapped(&seq1, &seq2, GAP)?;

    Ok(GlobalAlignment {
        alignment: top.into_iter().collect(),
        alignment_complement: bottom.into_iter().collect(),
        final_score: *alignment.score(),
    })
}
