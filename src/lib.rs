#![doc = include_str!("../Readme.md")]
#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]
#![cfg_attr(any(test, feature = "bench"), allow(clippy::wildcard_imports))]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod curve;
mod error;
mod exp;
mod field;
mod isogeny;
mod sswu;
mod svdw;

pub use crate::{
    batch::{sswu_map_to_point_batch, svdw_map_to_point_batch},
    curve::{AffinePoint, COEFF_B},
    error::MapError,
    field::{Fp, MODULUS},
    isogeny::{ISO_X_DEN, ISO_X_NUM, ISO_Y_DEN, ISO_Y_NUM},
    sswu::map_to_point as sswu_map_to_point,
    svdw::map_to_point as svdw_map_to_point,
};

/// The SvdW and SSWU map parameters, re-exported read-only.
pub mod constants {
    pub use crate::sswu::{A_PRIME, B_PRIME, C1 as C1_SSWU, C2 as C2_SSWU, Z as Z_SSWU};
    pub use crate::svdw::{
        C1 as C1_SVDW, C2 as C2_SVDW, C3 as C3_SVDW, C4 as C4_SVDW, Z as Z_SVDW,
    };
}

#[cfg(feature = "bench")]
#[doc(hidden)]
pub mod bench {
    use super::*;
    use criterion::Criterion;

    pub fn group(criterion: &mut Criterion) {
        svdw::bench::group(criterion);
        sswu::bench::group(criterion);
    }
}
