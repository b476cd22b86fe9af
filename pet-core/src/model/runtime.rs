//! Model struct and the time stepping state machine.

use crate::config::{ForcingSource, ModelParameters};
use crate::engine::PetEngine;
use crate::errors::{PetError, PetResult};
use crate::forcing::{load_forcing, ForcingRecordParser, ForcingTimeseries};
use crate::state::ModelState;
use crate::Time;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::clock::ModelClock;

/// Name reported to the host framework
pub const COMPONENT_NAME: &str = "Potential Evapotranspiration";

/// Lifecycle state of a [`PetModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelStatus {
    /// Created but not yet initialised
    Uninitialized,
    /// Initialised, no step taken yet
    Ready,
    /// At least one step has been taken
    Stepping,
    Finalized,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelStatus::Uninitialized => "uninitialized",
            ModelStatus::Ready => "ready",
            ModelStatus::Stepping => "stepping",
            ModelStatus::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

const CAN_INITIALIZE: [ModelStatus; 2] = [ModelStatus::Uninitialized, ModelStatus::Finalized];
const CAN_UPDATE: [ModelStatus; 2] = [ModelStatus::Ready, ModelStatus::Stepping];

/// A single point potential evapotranspiration model.
///
/// The model advances on a fixed time step. Forcing comes either from an AORC
/// file read during initialisation or from the host, which sets the input
/// variables before each update. The [`PetEngine`] turns each step's forcing
/// into the evapotranspiration flux exposed as the output variable.
#[derive(Debug, Serialize, Deserialize)]
pub struct PetModel {
    pub(super) status: ModelStatus,
    pub(super) parameters: ModelParameters,
    pub(super) clock: ModelClock,
    /// Forcing for every step, present only for file forcing
    pub(super) forcing: Option<ForcingTimeseries>,
    /// Values for the current step, read and written by the host
    pub(super) state: ModelState,
    pub(super) engine: Arc<dyn PetEngine>,
    pub(super) parser: Arc<dyn ForcingRecordParser>,
}

impl PetModel {
    /// Create an uninitialised model using the default engine and record parser.
    pub fn new() -> Self {
        super::PetModelBuilder::new().build()
    }

    pub(super) fn from_parts(
        engine: Arc<dyn PetEngine>,
        parser: Arc<dyn ForcingRecordParser>,
    ) -> Self {
        Self {
            status: ModelStatus::Uninitialized,
            parameters: ModelParameters::default(),
            clock: ModelClock::default(),
            forcing: None,
            state: ModelState::default(),
            engine,
            parser,
        }
    }

    pub fn status(&self) -> ModelStatus {
        self.status
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn clock(&self) -> &ModelClock {
        &self.clock
    }

    /// The forcing read from file, if the model uses file forcing.
    pub fn forcing(&self) -> Option<&ForcingTimeseries> {
        self.forcing.as_ref()
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Whether every configured step has been taken
    pub fn finished(&self) -> bool {
        self.clock.finished()
    }

    fn ensure_status(&self, operation: &'static str, allowed: &[ModelStatus]) -> PetResult<()> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(PetError::InvalidState {
                operation,
                status: self.status.to_string(),
            })
        }
    }

    /// Drop everything loaded by a previous initialisation.
    ///
    /// The engine and record parser are kept.
    fn reset(&mut self) {
        self.parameters = ModelParameters::default();
        self.clock = ModelClock::default();
        self.forcing = None;
        self.state = ModelState::default();
    }

    /// Initialise the model from parameters that have already been loaded.
    ///
    /// # Errors
    ///
    /// - [`PetError::InvalidState`] unless the model is uninitialised or finalised
    /// - any forcing error from [`load_forcing`]; the model is left uninitialised
    pub fn initialize_with_parameters(&mut self, parameters: ModelParameters) -> PetResult<()> {
        self.begin_initialization()?;
        self.complete_initialization(parameters)
    }

    pub(super) fn begin_initialization(&mut self) -> PetResult<()> {
        self.ensure_status("initialize", &CAN_INITIALIZE)?;
        self.reset();
        self.status = ModelStatus::Uninitialized;
        Ok(())
    }

    pub(super) fn complete_initialization(&mut self, parameters: ModelParameters) -> PetResult<()> {
        let forcing = match &parameters.forcing_source {
            ForcingSource::File(path) => {
                debug!("Reading forcing from {}", path.display());
                Some(load_forcing(path, &parameters, self.parser.as_ref())?)
            }
            ForcingSource::Bmi => {
                debug!("Forcing will be provided through the input variables");
                None
            }
        };

        let start_time = forcing
            .as_ref()
            .and_then(|series| series.at(0))
            .map_or(0.0, |first| first.time as Time);
        self.clock = ModelClock::new(
            start_time,
            parameters.time_step_size_s,
            parameters.num_timesteps,
        );
        self.parameters = parameters;
        self.forcing = forcing;
        self.stage_forcing();
        self.status = ModelStatus::Ready;

        info!(
            "Initialised {} for {} steps of {} s starting at {}",
            COMPONENT_NAME, self.clock.num_timesteps, self.clock.time_step_size_s, start_time
        );
        Ok(())
    }

    /// Copy the current step's forcing into the state seen by the host.
    ///
    /// Does nothing for caller provided forcing.
    fn stage_forcing(&mut self) {
        let Some(series) = &self.forcing else {
            return;
        };
        let step = self.clock.current_step;
        match series.at(step).filter(|_| step < self.clock.num_timesteps) {
            Some(forcing) => self.state.forcing = forcing,
            None => warn!(
                "Step {} is past the end of the {} forcing records, reusing the last forcing",
                step, self.clock.num_timesteps
            ),
        }
    }

    /// Take one time step.
    ///
    /// A failure of the engine is logged and the step still advances.
    ///
    /// # Errors
    ///
    /// [`PetError::InvalidState`] unless the model has been initialised.
    pub fn step(&mut self) -> PetResult<()> {
        self.ensure_status("update", &CAN_UPDATE)?;
        self.status = ModelStatus::Stepping;

        self.stage_forcing();
        match self.engine.compute(
            &self.parameters,
            &self.state.forcing,
            self.clock.time_step_size_s,
        ) {
            Ok(pet) => self.state.pet_m_per_s = pet,
            Err(err) => error!(
                "PET calculation failed at step {}: {}",
                self.clock.current_step, err
            ),
        }
        self.clock.advance();
        Ok(())
    }

    /// Step forward until `time`.
    ///
    /// Takes as many whole steps as fit before `time`. Any remaining fraction
    /// of a step is taken as one more step with the step size temporarily
    /// shortened to that fraction, so the engine sees the shortened step.
    /// The configured step size is restored afterwards.
    ///
    /// A target before the current time takes no steps.
    pub fn step_until(&mut self, time: Time) -> PetResult<()> {
        self.ensure_status("update_until", &CAN_UPDATE)?;

        let dt = self.clock.time_step_size_s;
        let n_steps = (time - self.clock.current_time) / dt;
        let whole_steps = n_steps.trunc();
        for _ in 0..whole_steps as usize {
            self.step()?;
        }

        let fraction = n_steps - whole_steps;
        if fraction > 0.0 {
            warn!(
                "Updating a fraction ({}) of a time step to reach {}",
                fraction, time
            );
            self.clock.time_step_size_s = fraction * dt;
            let result = self.step();
            self.clock.time_step_size_s = dt;
            result?;
        }
        Ok(())
    }

    /// Release all loaded state.
    ///
    /// The model can be initialised again afterwards.
    pub fn close(&mut self) -> PetResult<()> {
        if self.parameters.run_unit_tests {
            info!("Unit tests were requested in the configuration; they are run by the test harness");
        }
        self.reset();
        self.status = ModelStatus::Finalized;
        info!("Finalised {}", COMPONENT_NAME);
        Ok(())
    }
}

impl Default for PetModel {
    fn default() -> Self {
        Self::new()
    }
}
