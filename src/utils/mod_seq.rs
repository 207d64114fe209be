use std::fmt;

use crate::utils::Seq;

/// Sequence number in `[0, MAX]` for an arbitrary `MAX`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct ModSeq<const MAX: u32> {
    n: u32,
}

impl<const M: u32> Seq for ModSeq<M> {
    const MAX: u32 = M;

    fn from_u32(n: u32) -> Self {
        ModSeq {
            n: (u64::from(n) % Self::space_len()) as u32,
        }
    }

    fn to_u32(&self) -> u32 {
        self.n
    }
}

impl<const M: u32> fmt::Display for ModSeq<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}
