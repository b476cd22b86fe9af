//! Time stepping driver, forcing ingestion and variable registry for a
//! potential evapotranspiration (PET) model coupled through the Basic Model
//! Interface (BMI).
//!
//! A [`PetModel`] is configured from a `key=value` file, optionally reads an
//! AORC forcing file, and then advances one time step per [`Bmi::update`],
//! calling a [`PetEngine`] to compute the evapotranspiration flux.

pub mod bmi;
pub mod config;
pub mod engine;
pub mod errors;
pub mod forcing;
pub mod grid;
pub mod model;
pub mod prescan;
pub mod standard_variables;
pub mod state;
pub mod variable;

/// Floating point type used for every model value
pub type FloatValue = f64;

/// Time in seconds
pub type Time = f64;

pub use bmi::Bmi;
pub use config::{ForcingSource, ModelParameters};
pub use engine::{NullPetEngine, PetEngine};
pub use errors::{PetError, PetResult};
pub use model::{ModelClock, ModelStatus, PetModel, PetModelBuilder};
