//! The simplified Shallue–van de Woestijne–Ulas map (RFC 9380 §6.6.3).
//!
//! BN254 has `A = 0`, which the simplified map cannot handle directly, so the
//! straight-line program of §F.2 runs on the auxiliary curve
//! `E': y² = x³ + A'x + B'` and the result is carried back to `E` by the
//! degree-59 isogeny in [`crate::isogeny`].

use crate::{
    curve::AffinePoint,
    exp,
    field::Fp,
    isogeny, MapError,
};
use ruint::{aliases::U256, uint};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use tracing::instrument;

/// Coefficient `A'` of the auxiliary curve `E'`.
pub const A_PRIME: Fp = Fp::from_uint_unchecked(
    uint!(9087994317191712533568698403530528306233527979934880849865820425505218365052_U256),
);

/// Coefficient `B'` of the auxiliary curve `E'`.
pub const B_PRIME: Fp = Fp::from_uint_unchecked(
    uint!(3059101143800926337153883959975852125336293569895750485959800095292563537400_U256),
);

/// `Z = -13`, the non-residue parameter of the map.
pub const Z: Fp = Fp::from_uint_unchecked(
    uint!(21888242871839275222246405745257275088696311157297823662689037894645226208570_U256),
);

/// `c1 = (p - 3) / 4`, the `sqrt_ratio` exponent.
pub const C1: U256 =
    uint!(0xc19139cb84c680a6e14116da060561765e05aa45a1c72a34f082305b61f3f51_U256);

/// `c2 = sqrt(-Z) = sqrt(13)`.
pub const C2: Fp = Fp::from_uint_unchecked(
    uint!(0x1c358800160da43b4a5d11dd7f22902e00d123051c13dd6b9293849d8f1d8634_U256),
);

/// `sqrt_ratio_3mod4` of RFC 9380 §F.2.1.2: for `v != 0` returns
/// `(true, sqrt(u/v))` when `u/v` is square and `(false, sqrt(Z·u/v))`
/// otherwise.
fn sqrt_ratio(u: Fp, v: Fp) -> (Choice, Fp) {
    let tv1 = v.square();
    let tv2 = u * v;
    let tv1 = tv1 * tv2;
    let y1 = exp::mod_exp(tv1, C1) * tv2;
    let y2 = y1 * C2;
    let tv3 = y1.square() * v;
    let is_qr = tv3.ct_eq(&u);
    (is_qr, Fp::conditional_select(&y2, &y1, is_qr))
}

/// Maps a field element to a point on `E` through `E'` and the isogeny.
///
/// # Errors
///
/// - [`MapError::InvalidFieldElement`] if `u >= p`.
/// - [`MapError::MapToPointFailed`] if an internal invariant breaks
///   (unreachable for canonical inputs).
#[instrument(level = "trace", skip_all)]
pub fn map_to_point(u: U256) -> Result<AffinePoint, MapError> {
    let u = Fp::new(u)?;

    // RFC 9380 §F.2 straight-line map onto E'
    let tv1 = Z * u.square();
    let tv2 = tv1.square() + tv1;
    let tv3 = (tv2 + Fp::ONE) * B_PRIME;
    let tv4 = A_PRIME * Fp::conditional_select(&(-tv2), &Z, tv2.ct_eq(&Fp::ZERO));
    let tv2 = tv3.square();
    let tv6 = tv4.square();
    let tv5 = A_PRIME * tv6;
    let tv2 = (tv2 + tv5) * tv3;
    let tv6 = tv6 * tv4;
    let tv5 = B_PRIME * tv6;
    let tv2 = tv2 + tv5;
    let mut x = tv1 * tv3;
    let (is_gx1_square, y1) = sqrt_ratio(tv2, tv6);
    let mut y = tv1 * u * y1;
    x.conditional_assign(&tv3, is_gx1_square);
    y.conditional_assign(&y1, is_gx1_square);
    let flip = u.sgn0() ^ y.sgn0();
    y = Fp::conditional_select(&y, &(-y), flip);
    // tv4 is A'·Z or -A'·tv2, never zero for canonical inputs
    x = x * exp::inverse(tv4);

    isogeny::iso_map(AffinePoint { x, y })
}


#[cfg(feature = "bench")]
#[doc(hidden)]
pub mod bench {
    use super::*;
    use criterion::{black_box, Criterion};

    pub fn group(criterion: &mut Criterion) {
        let u = uint!(7105195380181880595384217009108718366423089053558315283835256316808390512725_U256);
        criterion.bench_function("sswu_map_to_point", move |bencher| {
            bencher.iter(|| black_box(map_to_point(black_box(u))));
        });
    }
}
