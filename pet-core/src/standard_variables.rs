//! Standard variables exposed by the PET model.
//!
//! Names follow the CSDMS standard names used by host frameworks to wire
//! model inputs and outputs together. Every variable is a single `double` on
//! the scalar grid 0.
//!
//! ## Inputs
//! - `VAR_INCOMING_LONGWAVE` - incoming longwave flux in W m-2
//! - `VAR_SURFACE_PRESSURE` - surface air pressure in Pa
//! - `VAR_SPECIFIC_HUMIDITY` - 2 m specific humidity in kg kg-1
//! - `VAR_INCOMING_SHORTWAVE` - incoming shortwave flux in W m-2
//! - `VAR_AIR_TEMPERATURE` - 2 m air temperature in K
//! - `VAR_U_WIND` - 10 m eastward wind in m s-1
//! - `VAR_V_WIND` - 10 m northward wind in m s-1
//!
//! ## Outputs
//! - `VAR_PET_FLUX` - potential evapotranspiration flux in m s-1

use crate::define_bmi_variable;
use crate::state::StateField;
use crate::variable::VariableRole;

// ============================================================================
// Inputs
// ============================================================================

define_bmi_variable!(
    VAR_INCOMING_LONGWAVE,
    name = "land_surface_radiation~incoming~longwave__energy_flux",
    units = "W m-2",
    role = VariableRole::Input,
    field = StateField::IncomingLongwave,
);

define_bmi_variable!(
    VAR_SURFACE_PRESSURE,
    name = "land_surface_air__pressure",
    units = "Pa",
    role = VariableRole::Input,
    field = StateField::SurfacePressure,
);

// The standard name says relative saturation but the field is specific humidity
define_bmi_variable!(
    VAR_SPECIFIC_HUMIDITY,
    name = "atmosphere_air_water~vapor__relative_saturation",
    units = "kg kg-1",
    role = VariableRole::Input,
    field = StateField::SpecificHumidity,
);

define_bmi_variable!(
    VAR_INCOMING_SHORTWAVE,
    name = "land_surface_radiation~incoming~shortwave__energy_flux",
    units = "W m-2",
    role = VariableRole::Input,
    field = StateField::IncomingShortwave,
);

define_bmi_variable!(
    VAR_AIR_TEMPERATURE,
    name = "land_surface_air__temperature",
    units = "K",
    role = VariableRole::Input,
    field = StateField::AirTemperature,
);

define_bmi_variable!(
    VAR_U_WIND,
    name = "land_surface_wind__x_component_of_velocity",
    units = "m s-1",
    role = VariableRole::Input,
    field = StateField::UWind,
);

define_bmi_variable!(
    VAR_V_WIND,
    name = "land_surface_wind__y_component_of_velocity",
    units = "m s-1",
    role = VariableRole::Input,
    field = StateField::VWind,
);

// ============================================================================
// Outputs
// ============================================================================

define_bmi_variable!(
    VAR_PET_FLUX,
    name = "water_potential_evaporation_flux",
    units = "m s-1",
    role = VariableRole::Output,
    field = StateField::PotentialEvapotranspiration,
);
