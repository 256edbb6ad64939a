use globalign_core_rs::alignment::pairwise::{Op, Step};

use crate::pairwise::scoring::{equiv, Score};
use crate::Alignable;

use super::matrix::{Layout, Matrices};
use super::trace::Trace;

/// Reconstruct the optimal alignment by following recorded moves from the bottom-right cell back to the origin.
/// Steps are returned in the forward direction and collapsed.
pub(super) fn traceback<S, Smb, S1, S2, E>(
    matrices: &Matrices<S>,
    seq1: &S1,
    seq2: &S2,
    classifier: &E,
) -> Vec<Step<u32>>
where
    S: Score,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    E: equiv::Classifier<Symbol = Smb>,
{
    let pad = matrices.layout.padding();
    let traces = &matrices.traces;

    // Number of symbols in each sequence that are not consumed by the walk yet
    let (mut i, mut j) = (seq1.len(), seq2.len());
    let mut steps = Vec::with_capacity(i + j);

    while match matrices.layout {
        // (0, 0) is a diagonal move, so both sequences run out at the same time
        Layout::Unpadded => i > 0 && j > 0,
        Layout::Padded => i > 0 || j > 0,
    } {
        let op: Op = match traces[(i + pad - 1, j + pad - 1)] {
            Trace::Diag => {
                i -= 1;
                j -= 1;
                classifier.classify(seq1.at(i), seq2.at(j)).into()
            }
            Trace::Up => {
                i -= 1;
                Op::GapSecond
            }
            Trace::Left => {
                j -= 1;
                Op::GapFirst
            }
        };
        steps.push(Step::unit(op));
    }
    debug_assert_eq!((i, j), (0, 0));

    steps.reverse();
    Step::collapse(&mut steps);
    steps
}
