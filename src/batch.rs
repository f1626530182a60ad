//! Parallel batch variants of the maps.
//!
//! Each input is mapped independently, so the batch splits cleanly across
//! rayon's worker pool. Any invalid input aborts the batch with its error.

use crate::{curve::AffinePoint, sswu, svdw, MapError};
use rayon::prelude::*;
use ruint::aliases::U256;
use tracing::instrument;

/// Maps every element of `inputs` through the Shallue–van de Woestijne map.
///
/// # Errors
///
/// Returns the error of a failing input if any input is rejected.
#[instrument(level = "trace", skip_all, fields(n = inputs.len()))]
pub fn svdw_map_to_point_batch(inputs: &[U256]) -> Result<Vec<AffinePoint>, MapError> {
    inputs.par_iter().map(|u| svdw::map_to_point(*u)).collect()
}

/// Maps every element of `inputs` through the simplified SWU map.
///
/// # Errors
///
/// Returns the error of a failing input if any input is rejected.
#[instrument(level = "trace", skip_all, fields(n = inputs.len()))]
pub fn sswu_map_to_point_batch(inputs: &[U256]) -> Result<Vec<AffinePoint>, MapError> {
    inputs.par_iter().map(|u| sswu::map_to_point(*u)).collect()
}
