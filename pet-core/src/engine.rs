//! The potential evapotranspiration calculation run every time step.
//!
//! The model itself only stages forcing and advances time; the physics is
//! supplied by a [`PetEngine`] implementation.

use crate::config::ModelParameters;
use crate::errors::PetResult;
use crate::state::ForcingSnapshot;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Computes potential evapotranspiration for one time step.
#[typetag::serde(tag = "type")]
pub trait PetEngine: Debug + Send + Sync {
    /// Calculate the potential evapotranspiration flux (m s-1).
    ///
    /// `time_step_size_s` is the length of the step being computed, which is
    /// shorter than the configured step for a fractional update.
    fn compute(
        &self,
        parameters: &ModelParameters,
        forcing: &ForcingSnapshot,
        time_step_size_s: FloatValue,
    ) -> PetResult<FloatValue>;
}

/// An engine that always reports zero evapotranspiration.
///
/// Used when no engine has been supplied to the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NullPetEngine {}

#[typetag::serde]
impl PetEngine for NullPetEngine {
    fn compute(
        &self,
        _parameters: &ModelParameters,
        _forcing: &ForcingSnapshot,
        _time_step_size_s: FloatValue,
    ) -> PetResult<FloatValue> {
        Ok(0.0)
    }
}
