use std::fmt::{self, Display, Formatter};
use std::iter;

use derive_more::Constructor;
use eyre::{ensure, Result};
use itertools::{EitherOrBoth, Itertools};

use super::nw::{Layout, Matrices, Matrix, Trace};
use super::scoring::Score;
use super::{Config, GlobalAlignment};

/// Human-readable summary of a textual global alignment: parameters, inputs, score and the aligned view.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct Report<'a> {
    config: &'a Config<i32>,
    seq1: &'a str,
    seq2: &'a str,
    result: &'a GlobalAlignment,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "***** Alignment Report *******")?;
        writeln!(f)?;
        writeln!(f, "----Parameters----")?;
        writeln!(f, "Gap penalty: {}", self.config.gap_penalty)?;
        writeln!(f, "Mismatch penalty: {}", self.config.mismatch_penalty)?;
        writeln!(f, "Match Score: {}", self.config.match_score)?;
        writeln!(f)?;
        writeln!(f, "------Input-------")?;
        writeln!(f, "Sequence 1: {}", self.seq1)?;
        writeln!(f, "Length: {}", self.seq1.chars().count())?;
        writeln!(f, "Sequence 2: {}", self.seq2)?;
        writeln!(f, "Length: {}", self.seq2.chars().count())?;
        writeln!(f)?;
        writeln!(f, "------Results------")?;
        writeln!(f, "Alignment score: {}", self.result.final_score())?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            AlignmentView::new(self.result.alignment(), self.result.alignment_complement())
        )
    }
}

/// Three-line view of two aligned rows with `|` marking identical symbols.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct AlignmentView<'a> {
    top: &'a str,
    bottom: &'a str,
}

impl Display for AlignmentView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spaced = |row: &str| row.chars().map(|symbol| format!("{symbol}  ")).join("");
        let markers = self
            .top
            .chars()
            .zip_longest(self.bottom.chars())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) if a == b => "|  ",
                _ => "   ",
            })
            .join("");

        writeln!(f, "{}", spaced(self.top))?;
        writeln!(f, "{markers}")?;
        writeln!(f, "{}", spaced(self.bottom))
    }
}

/// Debug view of a dynamic programming matrix with sequence symbols as row and column headers.
/// Padding rows and columns get a blank header.
#[derive(Clone, Debug)]
pub struct MatrixView<'a, T> {
    matrix: &'a Matrix<T>,
    rows: Vec<char>,
    cols: Vec<char>,
}

impl<'a, T: Copy + Display> MatrixView<'a, T> {
    pub fn new(matrix: &'a Matrix<T>, layout: Layout, seq1: &str, seq2: &str) -> Result<Self> {
        let headers = |seq: &str| {
            iter::repeat_n(' ', layout.padding())
                .chain(seq.chars())
                .collect_vec()
        };
        let (rows, cols) = (headers(seq1), headers(seq2));
        ensure!(
            rows.len() == matrix.rows() && cols.len() == matrix.cols(),
            "Matrix of shape {:?} doesn't match {layout:?} sequences of length {} and {}",
            matrix.shape(),
            seq1.chars().count(),
            seq2.chars().count()
        );
        Ok(Self { matrix, rows, cols })
    }
}

impl<'a> MatrixView<'a, Trace> {
    pub fn traces<S: Score>(matrices: &'a Matrices<S>, seq1: &str, seq2: &str) -> Result<Self> {
        Self::new(matrices.traces(), *matrices.layout(), seq1, seq2)
    }
}

impl<'a, S: Score + Display> MatrixView<'a, S> {
    pub fn scores(matrices: &'a Matrices<S>, seq1: &str, seq2: &str) -> Result<Self> {
        Self::new(matrices.scores(), *matrices.layout(), seq1, seq2)
    }
}

impl<T: Copy + Display> Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for symbol in &self.cols {
            write!(f, "   {symbol}")?;
        }
        writeln!(f)?;

        for (row, symbol) in self.rows.iter().enumerate() {
            write!(f, "{symbol}  ")?;
            for value in self.matrix.row(row) {
                write!(f, "{:<4}", value.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
