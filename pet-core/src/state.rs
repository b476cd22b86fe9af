//! Current-step model state.
//!
//! These are the values the host reads and writes through the variable
//! interface. They describe the step about to be (or just) computed and are
//! separate from the full forcing time series held by
//! [`ForcingTimeseries`](crate::forcing::ForcingTimeseries).

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Meteorological forcing for a single time step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForcingSnapshot {
    /// Precipitation (kg m-2 for stored series, kg m-2 s-1 as parsed)
    pub precip_kg_per_m2: FloatValue,
    pub incoming_longwave_w_per_m2: FloatValue,
    pub incoming_shortwave_w_per_m2: FloatValue,
    pub surface_pressure_pa: FloatValue,
    pub specific_humidity_2m_kg_per_kg: FloatValue,
    pub air_temperature_2m_k: FloatValue,
    pub u_wind_speed_10m_m_per_s: FloatValue,
    pub v_wind_speed_10m_m_per_s: FloatValue,
    /// Timestamp of the record (s since the Unix epoch)
    pub time: i64,
}

/// A model field that a registered variable is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateField {
    IncomingLongwave,
    SurfacePressure,
    SpecificHumidity,
    IncomingShortwave,
    AirTemperature,
    UWind,
    VWind,
    PotentialEvapotranspiration,
}

/// Values visible to the host for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelState {
    pub forcing: ForcingSnapshot,
    /// Potential evapotranspiration flux (m s-1)
    pub pet_m_per_s: FloatValue,
}

impl ModelState {
    /// Borrow the value behind a field.
    pub fn field(&self, field: StateField) -> &FloatValue {
        match field {
            StateField::IncomingLongwave => &self.forcing.incoming_longwave_w_per_m2,
            StateField::SurfacePressure => &self.forcing.surface_pressure_pa,
            StateField::SpecificHumidity => &self.forcing.specific_humidity_2m_kg_per_kg,
            StateField::IncomingShortwave => &self.forcing.incoming_shortwave_w_per_m2,
            StateField::AirTemperature => &self.forcing.air_temperature_2m_k,
            StateField::UWind => &self.forcing.u_wind_speed_10m_m_per_s,
            StateField::VWind => &self.forcing.v_wind_speed_10m_m_per_s,
            StateField::PotentialEvapotranspiration => &self.pet_m_per_s,
        }
    }

    /// Mutably borrow the value behind a field.
    pub fn field_mut(&mut self, field: StateField) -> &mut FloatValue {
        match field {
            StateField::IncomingLongwave => &mut self.forcing.incoming_longwave_w_per_m2,
            StateField::SurfacePressure => &mut self.forcing.surface_pressure_pa,
            StateField::SpecificHumidity => &mut self.forcing.specific_humidity_2m_kg_per_kg,
            StateField::IncomingShortwave => &mut self.forcing.incoming_shortwave_w_per_m2,
            StateField::AirTemperature => &mut self.forcing.air_temperature_2m_k,
            StateField::UWind => &mut self.forcing.u_wind_speed_10m_m_per_s,
            StateField::VWind => &mut self.forcing.v_wind_speed_10m_m_per_s,
            StateField::PotentialEvapotranspiration => &mut self.pet_m_per_s,
        }
    }
}
