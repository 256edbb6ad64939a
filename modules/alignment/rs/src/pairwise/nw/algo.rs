use eyre::Result;

use crate::pairwise::scoring::{self, gaps, symbols, Score};
use crate::Alignable;

use super::matrix::{self, Matrices};
use super::trace::Trace;

/// Best of the three candidate moves for a cell.
/// Candidates are checked in the order Up, Left, Diag and only a strictly greater score replaces
/// the current best, so ties are always resolved in favor of the move listed first.
#[inline(always)]
pub(super) fn best<S: Score>(up: S, left: S, diag: S) -> (S, Trace) {
    let (mut score, mut trace) = (up, Trace::Up);
    if left > score {
        score = left;
        trace = Trace::Left;
    }
    if diag > score {
        score = diag;
        trace = Trace::Diag;
    }
    (score, trace)
}

/// Score every interior cell of the initialized matrices and record the winning move.
/// Each cell depends only on its upper, left and upper-left neighbours, so a row-by-row scan is enough.
/// Fails as soon as any candidate score doesn't fit into `S`.
pub(super) fn fill<S, Smb, Scheme, S1, S2>(
    matrices: &mut Matrices<S>,
    seq1: &S1,
    seq2: &S2,
    scoring: &Scheme,
) -> Result<()>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    let pad = matrices.layout.padding();
    let (rows, cols) = (matrices.scores.rows(), matrices.scores.cols());
    debug_assert_eq!((rows, cols), matrices.layout.shape(seq1.len(), seq2.len()));

    let (scores, traces) = (&mut matrices.scores, &mut matrices.traces);
    for row in 1..rows {
        let i = row - pad;
        let s1 = seq1.at(i);

        for col in 1..cols {
            let j = col - pad;

            let up = gaps::Scorer::seq2_gap(scoring, i);
            let up = matrix::extend(scores[(row - 1, col)], up, row, col)?;
            let left = gaps::Scorer::seq1_gap(scoring, j);
            let left = matrix::extend(scores[(row, col - 1)], left, row, col)?;
            let diag = symbols::Scorer::score(scoring, i, s1, j, seq2.at(j));
            let diag = matrix::extend(scores[(row - 1, col - 1)], diag, row, col)?;

            let (score, trace) = best(up, left, diag);
            scores[(row, col)] = score;
            traces[(row, col)] = trace;
        }
    }
    Ok(())
}
