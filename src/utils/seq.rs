use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A number in the circular space `[0, MAX]`.
///
/// Implementors only provide the representation. Successors and distances
/// come from the provided methods, which all reduce through [`wrap`].
pub trait Seq: Debug + Display + Copy + Eq + Hash {
    /// Largest representable sequence number.
    const MAX: u32;

    /// Builds a sequence number from `n` reduced modulo [`Seq::space_len`].
    fn from_u32(n: u32) -> Self;

    fn to_u32(&self) -> u32;

    /// `MAX + 1`
    #[must_use]
    #[inline]
    fn space_len() -> u64 {
        u64::from(Self::MAX) + 1
    }

    #[must_use]
    #[inline]
    fn zero() -> Self {
        Self::from_u32(0)
    }

    #[must_use]
    #[inline]
    fn max_value() -> Self {
        Self::from_u32(Self::MAX)
    }

    #[must_use]
    fn add_usize(&self, n: usize) -> Self {
        let m = Self::space_len();
        let n = n as u64 % m;
        Self::from_u32(wrap(u64::from(self.to_u32()) + n, m))
    }

    #[must_use]
    #[inline]
    fn successor(&self) -> Self {
        self.add_usize(1)
    }

    /// Circular distance walking forward from `other` to `self`.
    #[must_use]
    fn sub(&self, other: &Self) -> usize {
        let m = Self::space_len();
        wrap(u64::from(self.to_u32()) + m - u64::from(other.to_u32()), m) as usize
    }

    #[inline]
    fn increment(&mut self) {
        *self = self.successor();
    }
}

#[inline]
fn wrap(n: u64, space_len: u64) -> u32 {
    (n % space_len) as u32
}
