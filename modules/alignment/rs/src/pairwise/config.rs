use derive_getters::Dissolve;
use derive_more::Constructor;

use super::nw::Layout;
use super::scoring::{self, Score};

/// Scoring parameters of a global alignment run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor, Dissolve)]
pub struct Config<S: Score> {
    // Linear gap score, applied to every gap position
    pub gap_penalty: S,
    // Substitution scores
    pub mismatch_penalty: S,
    pub match_score: S,
    // Shape of the dynamic programming matrices
    pub layout: Layout,
}

impl<S: Score> Default for Config<S> {
    fn default() -> Self {
        let two = S::one() + S::one();
        Config {
            gap_penalty: S::zero() - two,
            mismatch_penalty: S::zero() - S::one(),
            match_score: two,
            layout: Layout::default(),
        }
    }
}

impl<S: Score> Config<S> {
    /// Scoring scheme with the configured match/mismatch scores and linear gaps.
    pub fn scheme<Symbol: PartialEq>(&self) -> scoring::Standard<S, Symbol> {
        scoring::compose(
            scoring::symbols::Equality::new(self.match_score, self.mismatch_penalty),
            scoring::gaps::Linear::new(self.gap_penalty),
            scoring::equiv::Equality::new(),
        )
    }
}
