use std::ops::{Index, IndexMut};

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use crate::pairwise::error::Error;
use crate::pairwise::scoring::{gaps, Score};

use super::trace::Trace;

/// Dense row-major grid with (row, col) indexing.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Shape of the dynamic programming matrices.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Layout {
    /// Matrices are sized exactly to the sequences (n x m). Cell (i, j) ends with `seq1[i]` and `seq2[j]`,
    /// and cell (0, 0) is the unscored base case that always pairs `seq1[0]` with `seq2[0]`.
    #[default]
    Unpadded,
    /// Textbook (n + 1) x (m + 1) matrices with a leading all-gap row and column.
    /// Cell (i, j) ends with `seq1[i - 1]` and `seq2[j - 1]`, cell (0, 0) is the empty origin.
    Padded,
}

impl Layout {
    /// Number of leading all-gap rows (columns).
    #[inline(always)]
    pub fn padding(&self) -> usize {
        match self {
            Layout::Unpadded => 0,
            Layout::Padded => 1,
        }
    }

    /// Matrix shape for sequences of the given lengths.
    pub fn shape(&self, seq1: usize, seq2: usize) -> (usize, usize) {
        (seq1 + self.padding(), seq2 + self.padding())
    }
}

/// Score of the cell `(row, col)` from its predecessor score and the move increment.
#[inline(always)]
pub(super) fn extend<S: Score>(score: S, increment: S, row: usize, col: usize) -> Result<S> {
    score
        .checked_add(&increment)
        .ok_or_else(|| Error::ScoreOverflow { row, col }.into())
}

/// Score and traceback matrices of a single alignment run.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrices<S: Score> {
    pub(super) scores: Matrix<S>,
    pub(super) traces: Matrix<Trace>,
    pub(super) layout: Layout,
}

impl<S: Score> Matrices<S> {
    /// Allocate zero-initialized matrices for non-empty sequences of the given lengths and
    /// initialize the first row and column with accumulated gap scores.
    /// Fails if an accumulated gap score doesn't fit into `S`.
    pub fn new<G>(seq1: usize, seq2: usize, layout: Layout, gaps: &G) -> Result<Self>
    where
        G: gaps::Scorer<Score = S>,
    {
        debug_assert!(seq1 > 0 && seq2 > 0);

        let (rows, cols) = layout.shape(seq1, seq2);
        let pad = layout.padding();

        let mut scores = Matrix::filled(rows, cols, S::zero());
        let mut traces = Matrix::filled(rows, cols, Trace::Diag);

        // First column: symbols of the first sequence paired with gaps
        for row in 1..rows {
            scores[(row, 0)] = extend(scores[(row - 1, 0)], gaps.seq2_gap(row - pad), row, 0)?;
            traces[(row, 0)] = Trace::Up;
        }

        // First row: symbols of the second sequence paired with gaps
        for col in 1..cols {
            scores[(0, col)] = extend(scores[(0, col - 1)], gaps.seq1_gap(col - pad), 0, col)?;
            traces[(0, col)] = Trace::Left;
        }

        Ok(Self {
            scores,
            traces,
            layout,
        })
    }

    /// Score of the whole alignment, i.e. the bottom-right cell of the score matrix.
    pub fn final_score(&self) -> S {
        self.scores[(self.scores.rows() - 1, self.scores.cols() - 1)]
    }
}
