//! Degenerate repeat unit detection
//!
//! A candidate unit is degenerate when it is really a shorter-period repeat
//! (or a homopolymer) and would duplicate a finding at a lower period.
//! Periods 2, 3 and 4 are hardcoded as a closed set:
//!
//! - 2-mers and 3-mers are rejected when all bases are the same
//! - 4-mers are rejected when they are two copies of the same 2-mer, which
//!   also rejects 4-mer homopolymers
//!
//! The checks compare ring slots, not positions. Every rule is invariant
//! under rotation, so the phase of the window does not matter.

/// Degeneracy check for one repeat period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitValidator {
    /// Period 2
    TwoMer,
    /// Period 3
    ThreeMer,
    /// Period 4
    FourMer,
}

impl UnitValidator {
    /// Validator for `period`, or `None` outside 2..=4
    pub fn for_period(period: usize) -> Option<Self> {
        match period {
            2 => Some(UnitValidator::TwoMer),
            3 => Some(UnitValidator::ThreeMer),
            4 => Some(UnitValidator::FourMer),
            _ => None,
        }
    }

    /// Unit length this validator inspects
    pub fn period(self) -> usize {
        match self {
            UnitValidator::TwoMer => 2,
            UnitValidator::ThreeMer => 3,
            UnitValidator::FourMer => 4,
        }
    }

    /// Whether the unit held in `slots` reduces to a smaller period
    ///
    /// `slots` must hold at least [`period`](Self::period) symbols.
    #[inline]
    pub fn is_degenerate(self, slots: &[u8]) -> bool {
        match self {
            UnitValidator::TwoMer => slots[0] == slots[1],
            UnitValidator::ThreeMer => slots[0] == slots[1] && slots[1] == slots[2],
            UnitValidator::FourMer => slots[0] == slots[2] && slots[1] == slots[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_period() {
        assert_eq!(UnitValidator::for_period(2), Some(UnitValidator::TwoMer));
        assert_eq!(UnitValidator::for_period(3), Some(UnitValidator::ThreeMer));
        assert_eq!(UnitValidator::for_period(4), Some(UnitValidator::FourMer));
        assert_eq!(UnitValidator::for_period(1), None);
        assert_eq!(UnitValidator::for_period(5), None);
    }

    #[test]
    fn test_two_mer() {
        let v = UnitValidator::TwoMer;
        assert!(v.is_degenerate(b"AA"));
        assert!(!v.is_degenerate(b"AT"));
    }

    #[test]
    fn test_three_mer() {
        let v = UnitValidator::ThreeMer;
        assert!(v.is_degenerate(b"GGG"));
        assert!(!v.is_degenerate(b"CAG"));
        // Partial homopolymers are still valid 3-mer units
        assert!(!v.is_degenerate(b"AAT"));
        assert!(!v.is_degenerate(b"TAA"));
    }

    #[test]
    fn test_four_mer() {
        let v = UnitValidator::FourMer;
        assert!(v.is_degenerate(b"ATAT"));
        assert!(v.is_degenerate(b"CCCC"));
        assert!(!v.is_degenerate(b"AATT"));
        assert!(!v.is_degenerate(b"GATA"));
        // Only the half-comparison rule applies
        assert!(!v.is_degenerate(b"AAAT"));
    }

    #[test]
    fn test_rotation_invariance() {
        let v = UnitValidator::FourMer;
        for rotated in [b"ACAC", b"CACA"] {
            assert!(v.is_degenerate(rotated));
        }
        for rotated in [b"AATT", b"ATTA", b"TTAA", b"TAAT"] {
            assert!(!v.is_degenerate(rotated));
        }
    }
}
