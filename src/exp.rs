//! Modular exponentiation with the three exponents fixed by the maps:
//! inversion, square root and the Legendre symbol.
//!
//! A plain left-to-right binary ladder over the full 256-bit exponent keeps
//! the operation sequence independent of the base. The exponents are public
//! compile-time constants, so the ladder leaks nothing.

use crate::{field::Fp, MapError};
use ruint::{aliases::U256, uint};
use subtle::{Choice, ConstantTimeEq};

/// `p - 2`, the inversion exponent (Fermat).
pub(crate) const INVERSE_EXP: U256 =
    uint!(21888242871839275222246405745257275088696311157297823662689037894645226208581_U256);

/// `(p + 1) / 4`, the square root exponent (`p ≡ 3 mod 4`).
pub(crate) const SQRT_EXP: U256 =
    uint!(5472060717959818805561601436314318772174077789324455915672259473661306552146_U256);

/// `(p - 1) / 2`, the Euler criterion exponent.
pub(crate) const LEGENDRE_EXP: U256 =
    uint!(10944121435919637611123202872628637544348155578648911831344518947322613104291_U256);

/// The Legendre symbol of a field element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Legendre {
    Zero,
    Residue,
    NonResidue,
}

/// Left-to-right binary ladder computing `base^exponent`.
pub(crate) fn mod_exp(base: Fp, exponent: U256) -> Fp {
    let mut acc = Fp::ONE;
    for i in (0..U256::BITS).rev() {
        acc = acc.square();
        if exponent.bit(i) {
            acc = acc * base;
        }
    }
    acc
}

/// `a^(p-2)`, which is `a⁻¹` for nonzero `a` and zero for zero (the `inv0`
/// convention of RFC 9380 §4, which the maps rely on at their exceptional
/// inputs).
pub(crate) fn inverse(a: Fp) -> Fp {
    mod_exp(a, INVERSE_EXP)
}

/// Candidate square root `a^((p+1)/4)` together with a flag telling whether
/// it actually squares back to `a`. The caller decides what a missing root
/// means.
pub(crate) fn sqrt(a: Fp) -> (Fp, Choice) {
    let s = mod_exp(a, SQRT_EXP);
    let ok = s.square().ct_eq(&a);
    (s, ok)
}

/// Legendre symbol by Euler's criterion.
///
/// # Errors
///
/// Returns [`MapError::MapToPointFailed`] if the ladder output is not one of
/// `{0, 1, p-1}`; this cannot happen for canonical inputs.
pub(crate) fn legendre(a: Fp) -> Result<Legendre, MapError> {
    let s = mod_exp(a, LEGENDRE_EXP);
    if s.is_zero() {
        Ok(Legendre::Zero)
    } else if s == Fp::ONE {
        Ok(Legendre::Residue)
    } else if s == -Fp::ONE {
        Ok(Legendre::NonResidue)
    } else {
        Err(MapError::MapToPointFailed(s.to_uint()))
    }
}
