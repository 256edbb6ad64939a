use std::marker::PhantomData;

use crate::pairwise::scoring::{equiv, gaps, symbols, Scheme, Score};

/// Scoring scheme that forwards every query to one of its three independent components.
/// Bounds live on the impls, so a `Delegate` can be built from any components and only
/// becomes a [`Scheme`] when they agree on the score and symbol types.
#[derive(Copy, Clone, Debug)]
pub struct Delegate<S, Smb, Sym, Gap, Eqv> {
    pub symbols: Sym,
    pub gaps: Gap,
    pub equiv: Eqv,
    _types: PhantomData<(S, Smb)>,
}

impl<S, Smb, Sym, Gap, Eqv> Delegate<S, Smb, Sym, Gap, Eqv> {
    pub fn new(symbols: Sym, gaps: Gap, equiv: Eqv) -> Self {
        Self {
            symbols,
            gaps,
            equiv,
            _types: PhantomData,
        }
    }
}

impl<S, Smb, Sym, Gap, Eqv> gaps::Scorer for Delegate<S, Smb, Sym, Gap, Eqv>
where
    S: Score,
    Gap: gaps::Scorer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn seq1_gap(&self, pos: usize) -> S {
        self.gaps.seq1_gap(pos)
    }

    #[inline(always)]
    fn seq2_gap(&self, pos: usize) -> S {
        self.gaps.seq2_gap(pos)
    }
}

impl<S, Smb, Sym, Gap, Eqv> symbols::Scorer for Delegate<S, Smb, Sym, Gap, Eqv>
where
    S: Score,
    Sym: symbols::Scorer<Score = S, Symbol = Smb>,
{
    type Score = S;
    type Symbol = Smb;

    #[inline(always)]
    fn score(&self, seq1pos: usize, s1: &Smb, seq2pos: usize, s2: &Smb) -> S {
        self.symbols.score(seq1pos, s1, seq2pos, s2)
    }
}

impl<S, Smb, Sym, Gap, Eqv> equiv::Classifier for Delegate<S, Smb, Sym, Gap, Eqv>
where
    Eqv: equiv::Classifier<Symbol = Smb>,
{
    type Symbol = Smb;

    #[inline(always)]
    fn classify(&self, s1: &Smb, s2: &Smb) -> equiv::Type {
        self.equiv.classify(s1, s2)
    }
}

impl<S, Smb, Sym, Gap, Eqv> Scheme for Delegate<S, Smb, Sym, Gap, Eqv>
where
    S: Score,
    Sym: symbols::Scorer<Score = S, Symbol = Smb>,
    Gap: gaps::Scorer<Score = S>,
    Eqv: equiv::Classifier<Symbol = Smb>,
{
    type Score = S;
    type Symbol = Smb;
}
