//! Potential evapotranspiration (PET) model exposed through the Basic Model
//! Interface (BMI).
//!
//! Hosts create a model with [`new_bmi_pet`] or [`register_bmi_pet`] and then
//! drive it through [`Bmi`]:
//!
//! ```no_run
//! use pet_bmi::{new_bmi_pet, Bmi};
//! use std::path::Path;
//!
//! let mut model = new_bmi_pet();
//! model.initialize(Path::new("config/pet.txt"))?;
//! while model.get_current_time() < model.get_end_time() {
//!     model.update()?;
//! }
//! let mut pet = [0.0];
//! model.get_value("water_potential_evaporation_flux", &mut pet)?;
//! model.finalize()?;
//! # Ok::<(), pet_bmi::PetError>(())
//! ```

pub use pet_core::*;

use log::debug;

/// Create an uninitialised model with the default engine and forcing parser.
pub fn new_bmi_pet() -> PetModel {
    PetModel::new()
}

/// Create a model from `builder` behind the [`Bmi`] interface.
///
/// Hosts that only know the interface use this to obtain a model with their
/// own [`PetEngine`].
pub fn register_bmi_pet(builder: &PetModelBuilder) -> Box<dyn Bmi + Send> {
    let model = builder.build();
    debug!("Registered {}", model.get_component_name());
    Box::new(model)
}
