//! Arithmetic in the BN254 base field.
//!
//! Elements are kept in canonical form (reduced below the modulus) at all
//! times; every operation returns a canonical result. There is no Montgomery
//! form and no lazy reduction, the representation is the plain integer.

use crate::MapError;
use core::ops::{Add, Mul, Neg, Sub};
use ruint::{aliases::U256, uint};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The BN254 base field modulus `p`.
pub const MODULUS: U256 =
    uint!(21888242871839275222246405745257275088696311157297823662689037894645226208583_U256);

/// An element of the BN254 base field, always in `[0, p)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Fp(U256);

impl Fp {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const ONE: Self = Self(uint!(1_U256));

    /// Parses a canonical field element.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidFieldElement`] if `value >= p`.
    pub fn new(value: U256) -> Result<Self, MapError> {
        if value < MODULUS {
            Ok(Self(value))
        } else {
            Err(MapError::InvalidFieldElement(value))
        }
    }

    /// Wraps a value already known to be canonical: hardcoded constants and
    /// results of field operations.
    pub(crate) const fn from_uint_unchecked(value: U256) -> Self {
        Self(value)
    }

    /// The canonical integer representation.
    #[must_use]
    pub const fn to_uint(self) -> U256 {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == U256::ZERO
    }

    /// `sgn0` of RFC 9380 §4.1: the least significant bit, defining the
    /// canonical sign of a field element.
    #[must_use]
    pub fn sgn0(self) -> Choice {
        Choice::from(u8::from(self.0.bit(0)))
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }
}

impl Add for Fp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(rhs.0, MODULUS))
    }
}

impl Sub for Fp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // a + (p - b); add_mod reduces the p - 0 = p case back to zero.
        Self(self.0.add_mod(MODULUS - rhs.0, MODULUS))
    }
}

impl Neg for Fp {
    type Output = Self;

    fn neg(self) -> Self {
        Self(U256::ZERO.add_mod(MODULUS - self.0, MODULUS))
    }
}

impl Mul for Fp {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul_mod(rhs.0, MODULUS))
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_limbs().ct_eq(other.0.as_limbs())
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let a = a.0.as_limbs();
        let b = b.0.as_limbs();
        Self(U256::from_limbs([
            u64::conditional_select(&a[0], &b[0], choice),
            u64::conditional_select(&a[1], &b[1], choice),
            u64::conditional_select(&a[2], &b[2], choice),
            u64::conditional_select(&a[3], &b[3], choice),
        ]))
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::{arbitrary::any, proptest, strategy::Strategy};

    pub fn arb_fp() -> impl Strategy<Value = Fp> {
        any::<U256>().prop_map(|n| Fp(n % MODULUS))
    }

    #[test]
    fn test_new_rejects_modulus() {
        assert_eq!(
            Fp::new(MODULUS),
            Err(MapError::InvalidFieldElement(MODULUS))
        );
        assert_eq!(
            Fp::new(U256::MAX),
            Err(MapError::InvalidFieldElement(U256::MAX))
        );
        assert_eq!(Fp::new(MODULUS - uint!(1_U256)).map(Fp::to_uint), Ok(MODULUS - uint!(1_U256)));
    }

    #[test]
    fn test_additive_group() {
        proptest!(|(a in arb_fp(), b in arb_fp())| {
            assert_eq!(a + b, b + a);
            assert_eq!(a - a, Fp::ZERO);
            assert_eq!(a + (-a), Fp::ZERO);
            assert_eq!((a - b) + b, a);
            assert!((a + b).to_uint() < MODULUS);
        });
    }

    #[test]
    fn test_multiplicative_identities() {
        proptest!(|(a in arb_fp(), b in arb_fp(), c in arb_fp())| {
            assert_eq!(a * b, b * a);
            assert_eq!(a * Fp::ONE, a);
            assert_eq!(a * Fp::ZERO, Fp::ZERO);
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a.square(), a * a);
        });
    }

    #[test]
    fn test_sgn0() {
        assert_eq!(Fp::ZERO.sgn0().unwrap_u8(), 0);
        assert_eq!(Fp::ONE.sgn0().unwrap_u8(), 1);
        // p is odd, so -1 = p - 1 is even
        assert_eq!((-Fp::ONE).sgn0().unwrap_u8(), 0);
    }

    #[test]
    fn test_conditional_select() {
        let a = Fp::ONE;
        let b = -Fp::ONE;
        assert_eq!(Fp::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(Fp::conditional_select(&a, &b, Choice::from(1)), b);
    }
}
