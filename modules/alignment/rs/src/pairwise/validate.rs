use eyre::Result;

use crate::pairwise::error::{Error, Which};
use crate::Alignable;

/// Symbols accepted in textual input.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Alphabet {
    /// Any symbol is accepted, symbols are compared only for equality
    Any,
    /// ASCII letters only
    #[default]
    Letters,
}

impl Alphabet {
    pub fn accepts(&self, symbol: char) -> bool {
        match self {
            Alphabet::Any => true,
            Alphabet::Letters => symbol.is_ascii_alphabetic(),
        }
    }
}

pub fn non_empty<T: Alignable + ?Sized>(which: Which, seq: &T) -> Result<()> {
    if seq.is_empty() {
        return Err(Error::EmptySequence { which }.into());
    }
    Ok(())
}

/// Fails on the first symbol rejected by the alphabet. Positions are counted in characters.
pub fn symbols(which: Which, seq: &str, alphabet: Alphabet) -> Result<()> {
    match seq
        .chars()
        .enumerate()
        .find(|(_, symbol)| !alphabet.accepts(*symbol))
    {
        Some((position, symbol)) => Err(Error::InvalidSymbol {
            which,
            position,
            symbol,
        }
        .into()),
        None => Ok(()),
    }
}

/// Validate a pair of textual sequences and return their upper-case versions.
/// Only ASCII letters change case, so every sequence keeps its length in characters.
/// Emptiness is checked for both sequences before any symbol is inspected.
pub fn sequences(seq1: &str, seq2: &str, alphabet: Alphabet) -> Result<(String, String)> {
    non_empty(Which::First, &seq1)?;
    non_empty(Which::Second, &seq2)?;

    Ok((
        normalize(Which::First, seq1, alphabet)?,
        normalize(Which::Second, seq2, alphabet)?,
    ))
}

fn normalize(which: Which, seq: &str, alphabet: Alphabet) -> Result<String> {
    let upper = seq.to_ascii_uppercase();
    if upper != seq {
        log::debug!("Sequence {which} converted to upper case");
    }
    symbols(which, &upper, alphabet)?;
    Ok(upper)
}
