use derive_more::Display;

/// Predecessor move recorded for a cell of the traceback matrix.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Trace {
    /// Came from the row above: the symbol of the first sequence is paired with a gap.
    #[display("U")]
    Up,
    /// Came from the column on the left: the symbol of the second sequence is paired with a gap.
    #[display("L")]
    Left,
    /// Came diagonally: symbols of both sequences are paired with each other.
    #[display("D")]
    Diag,
}
