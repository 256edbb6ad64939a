use std::marker::PhantomData;

use globalign_core_rs::alignment::pairwise::Op;

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
}

/// Labels aligned symbol pairs; used to turn diagonal moves into alignment operations.
pub trait Classifier {
    type Symbol;

    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<Symbol> {
    _phantom: PhantomData<Symbol>,
}

impl<Symbol: PartialEq> Equality<Symbol> {
    pub fn new() -> Self {
        Self {
            _phantom: Default::default(),
        }
    }
}

impl<Symbol: PartialEq> Default for Equality<Symbol> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Symbol: PartialEq> Classifier for Equality<Symbol> {
    type Symbol = Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type {
        if *s1 == *s2 {
            Type::Match
        } else {
            Type::Mismatch
        }
    }
}

impl From<Type> for Op {
    fn from(value: Type) -> Self {
        match value {
            Type::Match => Op::Match,
            Type::Mismatch => Op::Mismatch,
        }
    }
}
