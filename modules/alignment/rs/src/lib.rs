use globalign_core_rs::num::PrimSInt;

pub use globalign_core_rs::alignment::Alignable;

pub mod pairwise;

/// Pairwise alignment score - any signed primitive integer.
pub trait Score: PrimSInt + Send + Sync {}

impl<T: PrimSInt + Send + Sync> Score for T {}
