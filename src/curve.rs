//! The target curve `E: y² = x³ + 3` and affine points on it.

use crate::field::Fp;
use ruint::uint;

/// Coefficient `b` of the curve equation `y² = x³ + b`.
pub const COEFF_B: Fp = Fp::from_uint_unchecked(uint!(3_U256));

/// An affine point on `E`. The maps never produce the point at infinity, so
/// it has no representation here.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AffinePoint {
    pub x: Fp,
    pub y: Fp,
}

impl AffinePoint {
    /// Checks the curve equation.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        self.y.square() == self.x.square() * self.x + COEFF_B
    }
}

/// `g(x) = x³ + 3`, the right-hand side of the curve equation.
pub(crate) fn curve_rhs(x: Fp) -> Fp {
    x.square() * x + COEFF_B
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::field::MODULUS;
    use ark_bn254::{Fq, G1Affine};
    use ark_ec::AffineCurve;
    use ark_ff::PrimeField;

    /// Independent on-curve oracle through arkworks, for differential tests.
    pub fn ark_on_curve(point: &AffinePoint) -> bool {
        let x = Fq::from_be_bytes_mod_order(&point.x.to_uint().to_be_bytes::<32>());
        let y = Fq::from_be_bytes_mod_order(&point.y.to_uint().to_be_bytes::<32>());
        G1Affine::new(x, y, false).is_on_curve()
    }

    #[test]
    fn test_generator_is_on_curve() {
        // (1, 2) generates the prime-order group of E
        let gen = AffinePoint {
            x: Fp::from_uint_unchecked(uint!(1_U256)),
            y: Fp::from_uint_unchecked(uint!(2_U256)),
        };
        assert!(gen.is_on_curve());
        assert!(ark_on_curve(&gen));
        let off = AffinePoint {
            x: gen.x,
            y: Fp::from_uint_unchecked(uint!(3_U256)),
        };
        assert!(!off.is_on_curve());
        assert!(!ark_on_curve(&off));
    }

    #[test]
    fn test_modulus_matches_arkworks() {
        assert_eq!(
            MODULUS.to_be_bytes::<32>().to_vec(),
            {
                use ark_ff::{BigInteger, FpParameters};
                <Fq as PrimeField>::Params::MODULUS.to_bytes_be()
            }
        );
    }
}
