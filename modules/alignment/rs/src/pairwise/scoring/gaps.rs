use derive_more::Constructor;

use crate::pairwise::scoring::Score;

// Gap scoring function MUST be additive: every gap position is scored independently.
// `pos` is the position of the symbol left unpaired in the other sequence.
pub trait Scorer {
    type Score: Score;

    /// Score of a gap inserted into the first sequence in front of `seq2[pos]`.
    fn seq1_gap(&self, pos: usize) -> Self::Score;

    /// Score of a gap inserted into the second sequence in front of `seq1[pos]`.
    fn seq2_gap(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// Every gap position costs the same.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Linear<S: Score> {
    pub gap: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.gap
    }
}
