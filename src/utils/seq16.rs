use std::fmt;

use crate::utils::Seq;

/// Sequence number over the full `u16` range.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Seq16 {
    n: u16,
}

impl Seq16 {
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        Seq16 { n }
    }

    #[must_use]
    pub const fn to_u16(&self) -> u16 {
        self.n
    }
}

impl Seq for Seq16 {
    const MAX: u32 = u16::MAX as u32;

    fn from_u32(n: u32) -> Self {
        // truncation is reduction modulo 2^16
        Seq16 { n: n as u16 }
    }

    fn to_u32(&self) -> u32 {
        u32::from(self.n)
    }
}

impl From<u16> for Seq16 {
    fn from(n: u16) -> Self {
        Seq16::from_u16(n)
    }
}

impl From<Seq16> for u16 {
    fn from(seq: Seq16) -> Self {
        seq.n
    }
}

impl fmt::Display for Seq16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::Seq;

    use super::Seq16;

    #[test]
    fn add_wraparound() {
        let a = Seq16::from_u16(u16::MAX);
        let b = a.add_usize(1);
        assert_eq!(b.to_u16(), 0);
    }

    #[test]
    fn add_wo_wraparound() {
        let a = Seq16::from_u16(0);
        let b = a.add_usize(1);
        assert_eq!(b.to_u16(), 1);
    }

    #[test]
    fn add_more_than_space() {
        let a = Seq16::from_u16(3);
        let b = a.add_usize(0x1_0000 * 2 + 5);
        assert_eq!(b.to_u16(), 8);
    }

    #[test]
    fn increment_wraparound() {
        let mut a = Seq16::max_value();
        a.increment();
        assert_eq!(a, Seq16::zero());
    }

    #[test]
    fn sub_wraparound() {
        let a = Seq16::from_u16(0);
        let b = Seq16::from_u16(u16::MAX);
        assert_eq!(a.sub(&b), 1);
        assert_eq!(b.sub(&a), u16::MAX as usize);
    }

    #[test]
    fn sub_zero() {
        let a = Seq16::from_u16(1);
        let b = Seq16::from_u16(1);
        assert_eq!(a.sub(&b), 0);
    }

    #[test]
    fn sub_wo_wraparound() {
        let a = Seq16::from_u16(3);
        let b = Seq16::from_u16(1);
        assert_eq!(a.sub(&b), 2);
    }

    #[test]
    fn from_u32_truncates() {
        assert_eq!(Seq16::from_u32(0x1_0002), Seq16::from_u16(2));
    }
}
