use derive_more::{Display, Error};

/// Which of the two aligned sequences an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Which {
    #[display("1")]
    First,
    #[display("2")]
    Second,
}

/// Input and scoring errors of the global aligner. They are reported inside [`eyre::Report`] and can be
/// recovered with `report.downcast_ref::<Error>()`.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum Error {
    #[display("Sequence {which} is empty")]
    EmptySequence { which: Which },
    #[display("Sequence {which} contains invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        which: Which,
        position: usize,
        symbol: char,
    },
    #[display("Alignment score overflows the score type at matrix cell ({row}, {col})")]
    ScoreOverflow { row: usize, col: usize },
}
