//! The Shallue–van de Woestijne map (RFC 9380 §6.6.1) specialized to
//! `E: y² = x³ + 3` with `Z = 1`.
//!
//! The map produces three candidate x-coordinates and takes the first whose
//! `g(x)` is a quadratic residue; at least one always qualifies. All three
//! candidates and their Legendre symbols are computed unconditionally and the
//! winner is picked with conditional moves, so the operation sequence does
//! not depend on the input.

use crate::{
    curve::{curve_rhs, AffinePoint},
    exp::{self, Legendre},
    field::Fp,
    MapError,
};
use ruint::{aliases::U256, uint};
use subtle::{Choice, ConditionallySelectable};
use tracing::instrument;

/// `Z = 1`, the smallest working parameter for this curve.
pub const Z: Fp = Fp::ONE;

/// `c1 = g(Z) = Z³ + 3`.
pub const C1: Fp = Fp::from_uint_unchecked(uint!(4_U256));

/// `c2 = -Z / 2`.
pub const C2: Fp = Fp::from_uint_unchecked(
    uint!(0x183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3_U256),
);

/// `c3 = sqrt(-g(Z) * (3Z² + 4A))`, sign-normalized so that `sgn0(c3) = 0`.
pub const C3: Fp = Fp::from_uint_unchecked(
    uint!(0x16789af3a83522eb353c98fc6b36d713d5d8d1cc5dffffffa_U256),
);

/// `c4 = -4 * g(Z) / (3Z² + 4A)`.
pub const C4: Fp = Fp::from_uint_unchecked(
    uint!(0x10216f7ba065e00de81ac1e7808072c9dd2b2385cd7b438469602eb24829a9bd_U256),
);

/// Maps a field element to a point on `E`.
///
/// # Errors
///
/// - [`MapError::InvalidFieldElement`] if `u >= p`.
/// - [`MapError::MapToPointFailed`] if an internal invariant breaks
///   (unreachable for canonical inputs).
#[instrument(level = "trace", skip_all)]
pub fn map_to_point(u: U256) -> Result<AffinePoint, MapError> {
    let u = Fp::new(u)?;

    let tv1 = u.square() * C1;
    let tv2 = Fp::ONE + tv1;
    let tv1 = Fp::ONE - tv1;
    // inv0: tv1 * tv2 vanishes at u = ±1/2, where tv4 = 0 makes x1 = x2 = c2
    let tv3 = exp::inverse(tv1 * tv2);
    let tv4 = u * tv1 * tv3 * C3;

    let x1 = C2 - tv4;
    let x2 = C2 + tv4;
    let x3 = Z + C4 * (tv2.square() * tv3).square();

    let gx1 = curve_rhs(x1);
    let gx2 = curve_rhs(x2);
    let e1 = is_residue(gx1)?;
    let e2 = is_residue(gx2)? & !e1;

    let mut x = x3;
    x.conditional_assign(&x2, e2);
    x.conditional_assign(&x1, e1);

    let gx = curve_rhs(x);
    let (y, has_root) = exp::sqrt(gx);
    if (!has_root).into() {
        return Err(MapError::MapToPointFailed(gx.to_uint()));
    }

    let flip = u.sgn0() ^ y.sgn0();
    let y = Fp::conditional_select(&y, &(-y), flip);
    Ok(AffinePoint { x, y })
}

fn is_residue(a: Fp) -> Result<Choice, MapError> {
    let symbol = exp::legendre(a)?;
    Ok(Choice::from(u8::from(symbol == Legendre::Residue)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::test::ark_on_curve;
    use crate::field::{test::arb_fp, MODULUS};
    use proptest::proptest;

    #[test]
    fn test_constants() {
        // c2 = -1/2: twice its negation is one
        assert_eq!(-(C2 + C2), Fp::ONE);
        // c3² = -g(Z)(3Z² + 4A) = -12, and c3 has even parity
        assert_eq!(C3.square(), -(C1 * (Fp::ONE + Fp::ONE + Fp::ONE)));
        assert_eq!(C3.sgn0().unwrap_u8(), 0);
        // c4 * 3 = -16
        let three = Fp::ONE + Fp::ONE + Fp::ONE;
        assert_eq!(C4 * three, -(C1.square()));
    }

    #[test]
    fn test_known_vector() {
        // RFC pipeline reference vector
        let u = uint!(7105195380181880595384217009108718366423089053558315283835256316808390512725_U256);
        let p = map_to_point(u).unwrap();
        assert_eq!(
            p.x.to_uint(),
            uint!(15712026073284912390314437469998384224444098668487062629391055065992760594476_U256)
        );
        assert_eq!(
            p.y.to_uint(),
            uint!(12286200326952730997678485294504458874299852441720220164574895986935631271221_U256)
        );
    }

    #[test]
    fn test_fixed_vectors() {
        let p = map_to_point(uint!(0_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(10944121435919637611123202872628637544348155578648911831344518947322613104291_U256));
        assert_eq!(p.y.to_uint(), uint!(4718603453640367770405249522358112449463417117041194427604452040985121683380_U256));
        let p = map_to_point(uint!(1_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(19699418584655347698258596782613050042691797047307431679640710698076539066151_U256));
        assert_eq!(p.y.to_uint(), uint!(10343751156573783632778856105235937123682780444565366714146603135794096447717_U256));
        let p = map_to_point(uint!(2_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(17381839927637071501056362437774011121691119445066277389064485038161894060682_U256));
        assert_eq!(p.y.to_uint(), uint!(21789543218268983059319487233665025740281924852318056688907715121470174155670_U256));
        let p = map_to_point(uint!(5_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(20262878302148239933902159870143739200212645228355066860207035924029037262790_U256));
        assert_eq!(p.y.to_uint(), uint!(9758744144075580486226292637147400604374287218633575049759831181260788318551_U256));
        let p = map_to_point(uint!(7105195380181880595384217009108718366423089053558315283835256316808390512725_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(15712026073284912390314437469998384224444098668487062629391055065992760594476_U256));
        assert_eq!(p.y.to_uint(), uint!(12286200326952730997678485294504458874299852441720220164574895986935631271221_U256));
        let p = map_to_point(uint!(21888242871839275222246405745257275088696311157297823662689037894645226208582_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(2188824287183927523987808962644225046004514109990391983048327196568687142431_U256));
        assert_eq!(p.y.to_uint(), uint!(7399068843397001083097024496093135224919265266911805500347547396964789457160_U256));
        let p = map_to_point(uint!(32164469232587831643629602365523479014170209731882053594237542493119495390_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(1178767042052046145870837925413473278960858245956956787035167177303935853891_U256));
        assert_eq!(p.y.to_uint(), uint!(16683697914517758916831396046428089097346341924334379791885692363476135625000_U256));
        let p = map_to_point(uint!(31415926535897932384626433832795028841971693993751058209749445923078164062_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(21216378679327395677909432868151951614105949198523069504122314819742264886733_U256));
        assert_eq!(p.y.to_uint(), uint!(13709426902754484653078477979594634625105764050145327846954407933914300764710_U256));
    }

    #[test]
    fn test_zero_maps_to_even_point() {
        let p = map_to_point(U256::ZERO).unwrap();
        assert!(p.is_on_curve());
        assert_eq!(p.y.sgn0().unwrap_u8(), 0);
    }

    #[test]
    fn test_last_element_maps() {
        let p = map_to_point(MODULUS - uint!(1_U256)).unwrap();
        assert!(p.is_on_curve());
        // p - 1 is even
        assert_eq!(p.y.sgn0().unwrap_u8(), 0);
    }

    #[test]
    fn test_exceptional_inputs() {
        // u = ±1/2 zero out tv1 * tv2; the inv0 convention must cover them
        let p = map_to_point(uint!(10944121435919637611123202872628637544348155578648911831344518947322613104292_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(10944121435919637611123202872628637544348155578648911831344518947322613104291_U256));
        assert_eq!(p.y.to_uint(), uint!(4718603453640367770405249522358112449463417117041194427604452040985121683380_U256));
        let p = map_to_point(uint!(10944121435919637611123202872628637544348155578648911831344518947322613104291_U256)).unwrap();
        assert_eq!(p.x.to_uint(), uint!(10944121435919637611123202872628637544348155578648911831344518947322613104291_U256));
        assert_eq!(p.y.to_uint(), uint!(17169639418198907451841156222899162639232894040256629235084585853660104525203_U256));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            map_to_point(MODULUS),
            Err(MapError::InvalidFieldElement(MODULUS))
        );
        assert_eq!(
            map_to_point(U256::MAX),
            Err(MapError::InvalidFieldElement(U256::MAX))
        );
    }

    #[test]
    fn test_map_properties() {
        proptest!(|(u in arb_fp())| {
            let p = map_to_point(u.to_uint()).unwrap();
            assert!(p.is_on_curve());
            assert!(ark_on_curve(&p));
            assert_eq!(p.y.sgn0().unwrap_u8(), u.sgn0().unwrap_u8());
            assert!(p.x.to_uint() < MODULUS && p.y.to_uint() < MODULUS);
            // determinism
            assert_eq!(map_to_point(u.to_uint()).unwrap(), p);
        });
    }
}

#[cfg(feature = "bench")]
#[doc(hidden)]
pub mod bench {
    use super::*;
    use criterion::{black_box, Criterion};

    pub fn group(criterion: &mut Criterion) {
        let u = uint!(7105195380181880595384217009108718366423089053558315283835256316808390512725_U256);
        criterion.bench_function("svdw_map_to_point", move |bencher| {
            bencher.iter(|| black_box(map_to_point(black_box(u))));
        });
    }
}
