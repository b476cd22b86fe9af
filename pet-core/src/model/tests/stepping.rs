//! update and update_until.

use super::engines::{FailingEngine, StepSizeEngine, TemperatureEngine};
use super::fixtures::{write_config, write_file_forced, FIRST_RECORD_TIME};
use crate::bmi::Bmi;
use crate::model::{ModelStatus, PetModel, PetModelBuilder};
use approx::assert_relative_eq;
use is_close::is_close;
use std::path::Path;
use std::sync::Arc;

const TEMPERATURE: &str = "land_surface_air__temperature";
const PET: &str = "water_potential_evaporation_flux";

fn temperature_model(config: &Path) -> PetModel {
    let mut model = PetModelBuilder::new()
        .with_engine(Arc::new(TemperatureEngine { scale: 1e-9 }))
        .build();
    model.initialize(config).unwrap();
    model
}

fn step_size_model(config: &Path) -> PetModel {
    let mut model = PetModelBuilder::new()
        .with_engine(Arc::new(StepSizeEngine {}))
        .build();
    model.initialize(config).unwrap();
    model
}

fn pet(model: &PetModel) -> f64 {
    let mut value = [f64::NAN];
    model.get_value(PET, &mut value).unwrap();
    value[0]
}

#[test]
fn update_advances_the_clock() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = temperature_model(&write_file_forced(dir.path(), 3));

    model.update().unwrap();
    assert_eq!(model.status(), ModelStatus::Stepping);
    assert_eq!(model.clock().current_step, 1);
    assert_eq!(model.get_current_time(), FIRST_RECORD_TIME + 3600.0);
    assert_eq!(model.clock().current_time_step, 3600.0);

    model.update().unwrap();
    assert_eq!(model.clock().current_step, 2);
    assert_eq!(model.get_current_time(), FIRST_RECORD_TIME + 7200.0);
    assert_eq!(model.clock().current_time_step, 7200.0);
    assert_eq!(model.get_time_step(), 3600.0);
}

#[test]
fn update_stages_each_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = temperature_model(&write_file_forced(dir.path(), 3));

    for expected in [280.0, 281.0, 282.0] {
        model.update().unwrap();
        assert_eq!(model.state().forcing.air_temperature_2m_k, expected);
        assert_relative_eq!(pet(&model), expected * 1e-9);
    }
    assert!(model.finished());

    // Precipitation is stored as the depth over one step
    assert!(is_close!(model.state().forcing.precip_kg_per_m2, 0.003 * 3600.0));
}

#[test]
fn stepping_past_the_forcing_keeps_the_last_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = temperature_model(&write_file_forced(dir.path(), 2));

    model.update().unwrap();
    model.update().unwrap();
    model.update().unwrap();

    assert_eq!(model.clock().current_step, 3);
    assert_eq!(model.state().forcing.air_temperature_2m_k, 281.0);
    assert_relative_eq!(pet(&model), 281.0e-9);
}

#[test]
fn caller_forcing_is_used_as_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = temperature_model(&write_config(dir.path(), "BMI", 10));

    model.set_value(TEMPERATURE, &[300.0]).unwrap();
    model.update().unwrap();
    assert_relative_eq!(pet(&model), 300.0e-9);

    model.set_value(TEMPERATURE, &[290.0]).unwrap();
    model.update().unwrap();
    assert_relative_eq!(pet(&model), 290.0e-9);
    assert_eq!(model.get_current_time(), 7200.0);
}

#[test]
fn engine_failure_still_advances() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = PetModelBuilder::new()
        .with_engine(Arc::new(FailingEngine {}))
        .build();
    model
        .initialize(&write_config(dir.path(), "BMI", 10))
        .unwrap();
    model.set_value(PET, &[1.0e-8]).unwrap();

    model.update().unwrap();

    assert_eq!(model.clock().current_step, 1);
    assert_eq!(pet(&model), 1.0e-8);
}

#[test]
fn update_until_whole_steps_matches_update() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file_forced(dir.path(), 3);
    let mut stepped = temperature_model(&config);
    let mut until = temperature_model(&config);

    stepped.update().unwrap();
    stepped.update().unwrap();
    let target = until.get_current_time() + 2.0 * until.get_time_step();
    until.update_until(target).unwrap();

    assert_eq!(until.clock(), stepped.clock());
    assert_eq!(until.state(), stepped.state());
    assert_eq!(until.get_current_time(), target);
}

#[test]
fn update_until_now_does_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = step_size_model(&write_config(dir.path(), "BMI", 10));

    model.update_until(model.get_current_time()).unwrap();
    model.update_until(-3600.0).unwrap();

    assert_eq!(model.clock().current_step, 0);
    assert_eq!(model.status(), ModelStatus::Ready);
}

#[test]
fn update_until_takes_a_fractional_step() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = step_size_model(&write_config(dir.path(), "BMI", 10));
    let dt = model.get_time_step();

    model.update_until(1.5 * dt).unwrap();

    // One full step then one half step
    assert_eq!(model.clock().current_step, 2);
    assert_eq!(model.get_current_time(), 1.5 * dt);
    assert_eq!(model.clock().current_time_step, 1.5 * dt);
    // The engine saw the shortened step
    assert_eq!(pet(&model), 0.5 * dt);
    // and the configured step size is restored
    assert_eq!(model.get_time_step(), dt);
}
