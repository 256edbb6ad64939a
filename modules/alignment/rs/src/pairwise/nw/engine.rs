use std::marker::PhantomData;

use eyre::Result;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::error::Which;
use crate::pairwise::{scoring, validate, Config};
use crate::Alignable;

use super::matrix::{Layout, Matrices};
use super::{algo, traceback};

/// Needleman-Wunsch global aligner.
/// Every call allocates its own matrices, so a single engine can be shared between threads.
#[derive(Clone, Debug)]
pub struct Engine<S, Smb, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    scoring: Scheme,
    layout: Layout,
    _phantom: PhantomData<(S, Smb)>,
}

impl<S, Smb, Scheme> Engine<S, Smb, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    pub fn new(scoring: Scheme, layout: Layout) -> Self {
        Self {
            scoring,
            layout,
            _phantom: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Build and fill the score and traceback matrices without reconstructing the alignment.
    pub fn matrices<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Matrices<S>>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        validate::non_empty(Which::First, seq1)?;
        validate::non_empty(Which::Second, seq2)?;

        let mut matrices = Matrices::new(seq1.len(), seq2.len(), self.layout, &self.scoring)?;
        log::trace!(
            "Allocated {:?} matrices of shape {:?}",
            self.layout,
            matrices.scores().shape()
        );

        algo::fill(&mut matrices, seq1, seq2, &self.scoring)?;
        Ok(matrices)
    }

    /// Globally align two non-empty sequences.
    pub fn align<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Alignment<S>>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let matrices = self.matrices(seq1, seq2)?;
        let steps = traceback::traceback(&matrices, seq1, seq2, &self.scoring);
        let alignment = Alignment::new(matrices.final_score(), steps);

        log::debug!(
            "Aligned {}x{} symbols: score {:?}, {}",
            seq1.len(),
            seq2.len(),
            alignment.score(),
            alignment.rle()
        );
        Ok(alignment)
    }
}

impl<S, Smb> Engine<S, Smb, scoring::Standard<S, Smb>>
where
    S: scoring::Score,
    Smb: PartialEq,
{
    pub fn from_config(config: &Config<S>) -> Self {
        Self::new(config.scheme(), config.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise::Error;

    #[test]
    fn test_empty_sequences() {
        let engine = Engine::<i32, u8, _>::from_config(&Config::default());
        for (seq1, seq2, which) in [
            (&b""[..], &b"ACGT"[..], Which::First),
            (&b"ACGT"[..], &b""[..], Which::Second),
            (&b""[..], &b""[..], Which::First),
        ] {
            let err = engine.align(&seq1, &seq2).unwrap_err();
            assert_eq!(
                err.downcast_ref::<Error>(),
                Some(&Error::EmptySequence { which })
            );
            assert!(engine.matrices(&seq1, &seq2).is_err());
        }
    }

    #[test]
    fn test_align() {
        let engine = Engine::<i32, u8, _>::from_config(&Config::default());
        let (seq1, seq2): (&[u8], &[u8]) = (b"AGCT", b"AGCT");
        let alignment = engine.align(&seq1, &seq2).unwrap();
        assert_eq!(*alignment.score(), 6);
        assert_eq!(alignment.rle(), "4=");
    }

    #[test]
    fn test_with_scoring() {
        let mut engine = Engine::<i32, u8, _>::from_config(&Config::default());
        let (seq1, seq2): (&[u8], &[u8]) = (b"AGCT", b"AGCT");
        engine.with_scoring(Config::new(-1, -1, 1, Layout::Unpadded).scheme());
        assert_eq!(*engine.align(&seq1, &seq2).unwrap().score(), 3);
        assert_eq!(engine.layout(), Layout::Unpadded);
    }

    #[test]
    fn test_matrices() {
        let engine = Engine::<i32, char, _>::from_config(&Config {
            layout: Layout::Padded,
            ..Config::default()
        });
        let (seq1, seq2) = (vec!['A', 'G'], vec!['A']);
        let matrices = engine.matrices(&seq1, &seq2).unwrap();
        assert_eq!(matrices.scores().shape(), (3, 2));
        assert_eq!(matrices.final_score(), 0);
        assert_eq!(*matrices.layout(), Layout::Padded);
    }

    #[test]
    fn test_score_overflow() {
        let engine = Engine::<i8, u8, _>::from_config(&Config::default());
        let (seq1, seq2) = (vec![b'A'; 70], vec![b'C'; 1]);
        // The exact score, -138, doesn't fit into i8
        let err = engine.align(&seq1, &seq2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ScoreOverflow { .. })
        ));

        let seq1 = vec![b'A'; 60];
        assert_eq!(*engine.align(&seq1, &seq2).unwrap().score(), -118);
    }
}
