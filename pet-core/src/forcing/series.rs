use crate::state::ForcingSnapshot;
use crate::FloatValue;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Forcing values for every time step of a run.
///
/// Each variable is held in its own array and every array has the same length,
/// one more than the number of time steps. Entry `i` holds the forcing for
/// step `i`, with precipitation stored as the depth accumulated over the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcingTimeseries {
    time: Array1<i64>,
    precip_kg_per_m2: Array1<FloatValue>,
    incoming_longwave_w_per_m2: Array1<FloatValue>,
    incoming_shortwave_w_per_m2: Array1<FloatValue>,
    surface_pressure_pa: Array1<FloatValue>,
    specific_humidity_2m_kg_per_kg: Array1<FloatValue>,
    air_temperature_2m_k: Array1<FloatValue>,
    u_wind_speed_10m_m_per_s: Array1<FloatValue>,
    v_wind_speed_10m_m_per_s: Array1<FloatValue>,
}

impl ForcingTimeseries {
    /// Allocate zeroed series for a run of `num_timesteps` steps.
    pub fn zeros(num_timesteps: usize) -> Self {
        let len = num_timesteps + 1;
        Self {
            time: Array1::zeros(len),
            precip_kg_per_m2: Array1::zeros(len),
            incoming_longwave_w_per_m2: Array1::zeros(len),
            incoming_shortwave_w_per_m2: Array1::zeros(len),
            surface_pressure_pa: Array1::zeros(len),
            specific_humidity_2m_kg_per_kg: Array1::zeros(len),
            air_temperature_2m_k: Array1::zeros(len),
            u_wind_speed_10m_m_per_s: Array1::zeros(len),
            v_wind_speed_10m_m_per_s: Array1::zeros(len),
        }
    }

    /// Length of every series
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Overwrite the values at `index`.
    ///
    /// Panics if `index` is outside the series.
    pub fn set(&mut self, index: usize, forcing: &ForcingSnapshot) {
        self.time[index] = forcing.time;
        self.precip_kg_per_m2[index] = forcing.precip_kg_per_m2;
        self.incoming_longwave_w_per_m2[index] = forcing.incoming_longwave_w_per_m2;
        self.incoming_shortwave_w_per_m2[index] = forcing.incoming_shortwave_w_per_m2;
        self.surface_pressure_pa[index] = forcing.surface_pressure_pa;
        self.specific_humidity_2m_kg_per_kg[index] = forcing.specific_humidity_2m_kg_per_kg;
        self.air_temperature_2m_k[index] = forcing.air_temperature_2m_k;
        self.u_wind_speed_10m_m_per_s[index] = forcing.u_wind_speed_10m_m_per_s;
        self.v_wind_speed_10m_m_per_s[index] = forcing.v_wind_speed_10m_m_per_s;
    }

    /// Get the forcing at `index`, or `None` past the end of the series.
    pub fn at(&self, index: usize) -> Option<ForcingSnapshot> {
        Some(ForcingSnapshot {
            time: *self.time.get(index)?,
            precip_kg_per_m2: self.precip_kg_per_m2[index],
            incoming_longwave_w_per_m2: self.incoming_longwave_w_per_m2[index],
            incoming_shortwave_w_per_m2: self.incoming_shortwave_w_per_m2[index],
            surface_pressure_pa: self.surface_pressure_pa[index],
            specific_humidity_2m_kg_per_kg: self.specific_humidity_2m_kg_per_kg[index],
            air_temperature_2m_k: self.air_temperature_2m_k[index],
            u_wind_speed_10m_m_per_s: self.u_wind_speed_10m_m_per_s[index],
            v_wind_speed_10m_m_per_s: self.v_wind_speed_10m_m_per_s[index],
        })
    }

    pub fn time(&self) -> ArrayView1<'_, i64> {
        self.time.view()
    }

    /// Precipitation accumulated over each step (kg m-2)
    pub fn precipitation(&self) -> ArrayView1<'_, FloatValue> {
        self.precip_kg_per_m2.view()
    }

    pub fn incoming_longwave(&self) -> ArrayView1<'_, FloatValue> {
        self.incoming_longwave_w_per_m2.view()
    }

    pub fn incoming_shortwave(&self) -> ArrayView1<'_, FloatValue> {
        self.incoming_shortwave_w_per_m2.view()
    }

    pub fn surface_pressure(&self) -> ArrayView1<'_, FloatValue> {
        self.surface_pressure_pa.view()
    }

    pub fn specific_humidity(&self) -> ArrayView1<'_, FloatValue> {
        self.specific_humidity_2m_kg_per_kg.view()
    }

    pub fn air_temperature(&self) -> ArrayView1<'_, FloatValue> {
        self.air_temperature_2m_k.view()
    }

    pub fn u_wind_speed(&self) -> ArrayView1<'_, FloatValue> {
        self.u_wind_speed_10m_m_per_s.view()
    }

    pub fn v_wind_speed(&self) -> ArrayView1<'_, FloatValue> {
        self.v_wind_speed_10m_m_per_s.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn zeros_has_one_extra_entry() {
        let series = ForcingTimeseries::zeros(3);
        assert_eq!(series.len(), 4);
        assert_eq!(series.precipitation().len(), 4);
        assert_eq!(series.v_wind_speed().len(), 4);
        assert_eq!(series.at(3), Some(ForcingSnapshot::default()));
        assert_eq!(series.at(4), None);
    }

    #[test]
    fn set_and_get() {
        let mut series = ForcingTimeseries::zeros(2);
        let forcing = ForcingSnapshot {
            precip_kg_per_m2: 1.0,
            incoming_longwave_w_per_m2: 2.0,
            incoming_shortwave_w_per_m2: 3.0,
            surface_pressure_pa: 4.0,
            specific_humidity_2m_kg_per_kg: 5.0,
            air_temperature_2m_k: 6.0,
            u_wind_speed_10m_m_per_s: 7.0,
            v_wind_speed_10m_m_per_s: 8.0,
            time: 9,
        };
        series.set(1, &forcing);

        assert_eq!(series.at(1), Some(forcing));
        assert_eq!(series.time(), array![0, 9, 0]);
        assert_eq!(series.air_temperature(), array![0.0, 6.0, 0.0]);
    }
}
