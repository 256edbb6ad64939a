use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

use globalign_core_rs::alignment::pairwise::Step;

use crate::pairwise::scoring::Score;
use crate::Alignable;

/// A global alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score> {
    /// Score of the optimal path
    score: S,
    /// Alignment operations from the first symbol pair to the last one
    steps: Vec<Step<u32>>,
}

impl<S: Score> Alignment<S> {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of aligned columns, including gap columns.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len() as usize).sum()
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1X2v`.
    pub fn rle(&self) -> String {
        Step::<u32>::rle_string(self.steps.iter())
    }

    /// Materialize both aligned rows: each sequence with `gap` inserted wherever the other sequence
    /// has an unpaired symbol. Rows are always of the same length.
    pub fn gapped<Smb, S1, S2>(&self, seq1: &S1, seq2: &S2, gap: Smb) -> Result<(Vec<Smb>, Vec<Smb>)>
    where
        Smb: Copy,
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let total = self.len();
        let (mut top, mut bottom) = (Vec::with_capacity(total), Vec::with_capacity(total));
        let (mut i, mut j) = (0u64, 0u64);

        for step in &self.steps {
            let (start1, start2) = (i as usize, j as usize);
            step.op().apply(&mut i, &mut j, *step.len());
            let (end1, end2) = (i as usize, j as usize);
            ensure!(
                end1 <= seq1.len() && end2 <= seq2.len(),
                "Alignment {} doesn't fit sequences of length {} and {}",
                self.rle(),
                seq1.len(),
                seq2.len()
            );

            for k in 0..*step.len() as usize {
                top.push(if end1 > start1 { *seq1.at(start1 + k) } else { gap });
                bottom.push(if end2 > start2 { *seq2.at(start2 + k) } else { gap });
            }
        }

        let (i, j) = (i as usize, j as usize);
        ensure!(
            i == seq1.len() && j == seq2.len(),
            "Alignment {} covers {i} of {} symbols in sequence 1 and {j} of {} symbols in sequence 2",
            self.rle(),
            seq1.len(),
            seq2.len()
        );
        Ok((top, bottom))
    }
}
