//! Model configuration.
//!
//! The configuration file is plain text with one `key=value` pair per line.
//! Unknown keys are skipped, and every recognised value is lexed as a floating
//! point number before being stored, including the integer and boolean ones.
//!
//! ```text
//! verbose=0
//! pet_method=5
//! forcing_file=data/cat-87.csv
//! time_step_size_s=3600
//! num_timesteps=720
//! latitude_degrees=37.25
//! ```

use crate::errors::{PetError, PetResult};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Forcing value of `forcing_file` that hands forcing over to the caller.
pub const BMI_FORCING_SENTINEL: &str = "BMI";

/// Where the per-step meteorological forcing comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForcingSource {
    /// The host framework sets the input variables before every update
    #[default]
    Bmi,
    /// The model reads an AORC forcing file during initialisation
    File(PathBuf),
}

impl ForcingSource {
    pub fn is_file(&self) -> bool {
        matches!(self, ForcingSource::File(_))
    }
}

/// Scalar model configuration, set once during initialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    // Run control
    /// Diagnostic verbosity requested by the configuration.
    pub verbose: i32,
    /// Size of one model time step (s).
    pub time_step_size_s: FloatValue,
    /// Number of time steps in the run.
    /// A value of 1 means the run length is not defined.
    pub num_timesteps: usize,
    /// Run the engine self checks when the model is finalised.
    pub run_unit_tests: bool,
    /// Source of the forcing data.
    pub forcing_source: ForcingSource,

    // Method selection
    /// PET method selector passed through to the engine.
    pub pet_method: i32,
    pub yes_aorc: bool,
    pub shortwave_radiation_provided: bool,

    // Aerodynamic parameters
    /// Height of the wind speed measurement (m).
    pub wind_speed_measurement_height_m: FloatValue,
    /// Height of the humidity measurement (m).
    pub humidity_measurement_height_m: FloatValue,
    pub vegetation_height_m: FloatValue,
    pub zero_plane_displacement_height_m: FloatValue,
    pub momentum_transfer_roughness_length_m: FloatValue,

    // Surface radiation
    pub surface_longwave_emissivity: FloatValue,
    pub surface_shortwave_albedo: FloatValue,

    // Site
    pub latitude_degrees: FloatValue,
    pub longitude_degrees: FloatValue,
    /// Site elevation above sea level (m).
    pub site_elevation_m: FloatValue,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            verbose: 0,
            time_step_size_s: 3600.0,
            num_timesteps: 1,
            run_unit_tests: false,
            forcing_source: ForcingSource::Bmi,
            pet_method: 0,
            yes_aorc: false,
            shortwave_radiation_provided: false,
            wind_speed_measurement_height_m: 0.0,
            humidity_measurement_height_m: 0.0,
            vegetation_height_m: 0.0,
            zero_plane_displacement_height_m: 0.0,
            momentum_transfer_roughness_length_m: 0.0,
            surface_longwave_emissivity: 0.0,
            surface_shortwave_albedo: 0.0,
            latitude_degrees: 0.0,
            longitude_degrees: 0.0,
            site_elevation_m: 0.0,
        }
    }
}

impl ModelParameters {
    /// Read parameters from a configuration file.
    ///
    /// Succeeds even if the file holds no recognised keys, in which case the
    /// defaults are returned.
    ///
    /// # Errors
    ///
    /// [`PetError::ConfigOpen`] if the file cannot be opened or read.
    pub fn from_file(path: impl AsRef<Path>) -> PetResult<Self> {
        let path = path.as_ref();
        let config_error = |source| PetError::ConfigOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(config_error)?;
        let mut parameters = Self::default();
        for line in BufReader::new(file).lines() {
            parameters.apply_line(&line.map_err(config_error)?);
        }
        Ok(parameters)
    }

    /// Parse parameters from configuration text.
    pub fn from_config_str(text: &str) -> Self {
        let mut parameters = Self::default();
        text.lines().for_each(|line| parameters.apply_line(line));
        parameters
    }

    fn apply_line(&mut self, line: &str) {
        if let Some((key, value)) = line.split_once('=') {
            self.apply(key, value);
        }
    }

    /// Apply a single `key=value` pair, ignoring keys that are not recognised.
    ///
    /// Returns `true` if the key was recognised.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        if key == "forcing_file" {
            self.forcing_source = if value == BMI_FORCING_SENTINEL {
                debug!("Getting forcing values from BMI, not reading forcing from file");
                ForcingSource::Bmi
            } else {
                debug!("Forcing will be read from {}", value);
                ForcingSource::File(PathBuf::from(value))
            };
            return true;
        }

        let number = lex_float(value);
        match key {
            "verbose" => self.verbose = number as i32,
            "pet_method" => self.pet_method = number as i32,
            "yes_aorc" => self.yes_aorc = number != 0.0,
            "shortwave_radiation_provided" => self.shortwave_radiation_provided = number != 0.0,
            "run_unit_tests" => self.run_unit_tests = number != 0.0,
            "time_step_size_s" => self.time_step_size_s = number,
            "num_timesteps" => self.num_timesteps = number as usize,
            "wind_speed_measurement_height_m" => self.wind_speed_measurement_height_m = number,
            "humidity_measurement_height_m" => self.humidity_measurement_height_m = number,
            "vegetation_height_m" => self.vegetation_height_m = number,
            "zero_plane_displacement_height_m" => self.zero_plane_displacement_height_m = number,
            "momentum_transfer_roughness_length_m" => {
                self.momentum_transfer_roughness_length_m = number
            }
            "surface_longwave_emissivity" => self.surface_longwave_emissivity = number,
            "surface_shortwave_albedo" => self.surface_shortwave_albedo = number,
            "latitude_degrees" => self.latitude_degrees = number,
            "longitude_degrees" => self.longitude_degrees = number,
            "site_elevation_m" => self.site_elevation_m = number,
            _ => return false,
        }
        debug!("Set {} = {} from configuration", key, number);
        true
    }
}

/// Lex the leading floating point number of a string.
///
/// Leading whitespace is skipped and the longest prefix that forms a valid
/// number is used. Returns `0.0` when no prefix is a number.
pub fn lex_float(value: &str) -> FloatValue {
    let trimmed = value.trim_start();
    let mut boundaries: Vec<usize> = trimmed.char_indices().map(|(i, _)| i).skip(1).collect();
    boundaries.push(trimmed.len());

    boundaries
        .into_iter()
        .rev()
        .find_map(|end| trimmed[..end].parse::<FloatValue>().ok())
        .unwrap_or(0.0)
}
