use ruint::aliases::U256;
use thiserror::Error;

/// Errors surfaced by the map-to-curve entry points.
///
/// [`MapError::InvalidFieldElement`] is the only error reachable through
/// correct use; everything else indicates a broken internal invariant and is
/// reported rather than papered over with a bogus point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum MapError {
    /// The input is not a canonical base field element (it is `>= p`).
    #[error("{0:#x} is not a canonical BN254 base field element")]
    InvalidFieldElement(U256),
    /// An arithmetic invariant that holds for all canonical inputs was
    /// violated. The payload is the offending intermediate value.
    #[error("map-to-point invariant violated (witness {0:#x})")]
    MapToPointFailed(U256),
}

#[test]
fn test_error_display() {
    use ruint::uint;

    assert_eq!(
        MapError::InvalidFieldElement(uint!(0xff_U256)).to_string(),
        "0xff is not a canonical BN254 base field element"
    );
    assert_eq!(
        MapError::MapToPointFailed(uint!(3_U256)).to_string(),
        "map-to-point invariant violated (witness 0x3)"
    );
}
