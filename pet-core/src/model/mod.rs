//! The time stepping driver.
//!
//! A [`PetModel`] owns the model clock, the forcing time series (when forcing
//! is read from a file) and the current-step state exposed to the host. Each
//! update stages that step's forcing, asks the [`PetEngine`](crate::PetEngine)
//! for the evapotranspiration flux and advances the clock.
//!
//! Models are created with [`PetModelBuilder`] or [`PetModel::new`] and are
//! then driven through the [`Bmi`](crate::Bmi) trait.

mod bmi_impl;
mod builder;
mod clock;
mod runtime;

#[cfg(test)]
mod tests;

pub use builder::PetModelBuilder;
pub use clock::ModelClock;
pub use runtime::{ModelStatus, PetModel, COMPONENT_NAME};
