use derive_more::Display;

use crate::num::PrimUInt;

/// `Op` represents a single operation in a pairwise alignment. Displayed as its RLE symbol.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Op {
    /// A gap inserted into the first sequence, i.e. a symbol of the second sequence is left unpaired (v)
    #[display("v")]
    GapFirst,
    /// A gap inserted into the second sequence, i.e. a symbol of the first sequence is left unpaired (^)
    #[display("^")]
    GapSecond,
    /// Identical symbols aligned to each other (=)
    #[display("=")]
    Match,
    /// Different symbols aligned to each other (X)
    #[display("X")]
    Mismatch,
}

impl Op {
    /// Advances sequence positions by the number of symbols the operation consumes from each sequence.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::GapFirst => *seq2 = *seq2 + len.into(),
            Op::GapSecond => *seq1 = *seq1 + len.into(),
            Op::Match | Op::Mismatch => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}
