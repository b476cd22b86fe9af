//! Initialise and finalise.

use super::fixtures::{write_config, write_file_forced, FIRST_RECORD_TIME};
use crate::bmi::Bmi;
use crate::config::ForcingSource;
use crate::errors::PetError;
use crate::model::{ModelStatus, PetModel};
use std::fs;

#[test]
fn initialize_with_file_forcing() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file_forced(dir.path(), 3);
    let mut model = PetModel::new();
    assert_eq!(model.status(), ModelStatus::Uninitialized);

    model.initialize(&config).unwrap();

    assert_eq!(model.status(), ModelStatus::Ready);
    assert!(model.parameters().forcing_source.is_file());
    assert_eq!(model.parameters().pet_method, 5);
    assert_eq!(model.parameters().latitude_degrees, 37.25);
    assert_eq!(model.clock().current_step, 0);
    assert_eq!(model.get_start_time(), FIRST_RECORD_TIME);
    assert_eq!(model.get_current_time(), FIRST_RECORD_TIME);
    assert_eq!(model.get_time_step(), 3600.0);
    assert_eq!(model.get_end_time(), FIRST_RECORD_TIME + 3.0 * 3600.0);
    assert_eq!(model.forcing().unwrap().len(), 4);

    // The first record is visible before the first update
    let mut value = [0.0];
    model
        .get_value("land_surface_air__temperature", &mut value)
        .unwrap();
    assert_eq!(value, [280.0]);
}

#[test]
fn initialize_with_caller_forcing() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "BMI", 24);
    let mut model = PetModel::new();

    model.initialize(&config).unwrap();

    assert_eq!(model.parameters().forcing_source, ForcingSource::Bmi);
    assert!(model.forcing().is_none());
    assert_eq!(model.get_start_time(), 0.0);
    assert_eq!(model.get_current_time(), 0.0);
    assert_eq!(model.get_end_time(), 24.0 * 3600.0);
}

#[test]
fn single_step_run_has_no_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "BMI", 1);
    let mut model = PetModel::new();
    model.initialize(&config).unwrap();

    assert_eq!(model.get_end_time(), f32::MAX as f64);
}

#[test]
fn missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = PetModel::new();

    let result = model.initialize(&dir.path().join("missing.txt"));

    assert!(matches!(result, Err(PetError::ConfigOpen { .. })));
    assert_eq!(model.status(), ModelStatus::Uninitialized);
}

#[test]
fn missing_forcing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &dir.path().join("nope.csv").display().to_string(), 3);
    let mut model = PetModel::new();

    let result = model.initialize(&config);

    assert!(matches!(result, Err(PetError::ForcingOpen { .. })));
    assert_eq!(model.status(), ModelStatus::Uninitialized);
    assert!(model.forcing().is_none());
}

#[test]
fn header_only_forcing_file() {
    let dir = tempfile::tempdir().unwrap();
    let forcing = dir.path().join("header.csv");
    fs::write(&forcing, "time,APCP_surface\n").unwrap();
    let config = write_config(dir.path(), &forcing.display().to_string(), 3);
    let mut model = PetModel::new();

    let result = model.initialize(&config);

    assert!(matches!(result, Err(PetError::ForcingHeaderOnly { .. })));
    assert_eq!(model.status(), ModelStatus::Uninitialized);
}

#[test]
fn failed_initialize_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = PetModel::new();
    assert!(model.initialize(&dir.path().join("missing.txt")).is_err());

    let config = write_file_forced(dir.path(), 3);
    model.initialize(&config).unwrap();
    assert_eq!(model.status(), ModelStatus::Ready);
}

#[test]
fn initialize_twice_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file_forced(dir.path(), 3);
    let mut model = PetModel::new();
    model.initialize(&config).unwrap();

    let result = model.initialize(&config);

    match result {
        Err(PetError::InvalidState { operation, status }) => {
            assert_eq!(operation, "initialize");
            assert_eq!(status, "ready");
        }
        other => panic!("unexpected result {:?}", other),
    }
    // The loaded state is untouched
    assert_eq!(model.get_start_time(), FIRST_RECORD_TIME);
}

#[test]
fn update_before_initialize_is_rejected() {
    let mut model = PetModel::new();
    assert!(matches!(
        model.update(),
        Err(PetError::InvalidState {
            operation: "update",
            ..
        })
    ));
    assert!(matches!(
        model.update_until(3600.0),
        Err(PetError::InvalidState {
            operation: "update_until",
            ..
        })
    ));
    assert_eq!(model.clock().current_step, 0);
}

#[test]
fn finalize_resets_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file_forced(dir.path(), 3);
    let mut model = PetModel::new();
    model.initialize(&config).unwrap();
    model.update().unwrap();

    model.finalize().unwrap();

    assert_eq!(model.status(), ModelStatus::Finalized);
    assert!(model.forcing().is_none());
    assert_eq!(model.get_current_time(), 0.0);
    assert_eq!(model.get_time_step(), 0.0);
    assert_eq!(model.state().forcing.air_temperature_2m_k, 0.0);
    assert!(matches!(
        model.update(),
        Err(PetError::InvalidState { .. })
    ));

    // A finalised model can be initialised again
    model.initialize(&config).unwrap();
    assert_eq!(model.status(), ModelStatus::Ready);
    assert_eq!(model.clock().current_step, 0);
    assert_eq!(model.get_current_time(), FIRST_RECORD_TIME);
}

#[test]
fn finalize_an_uninitialised_model() {
    let mut model = PetModel::new();
    model.finalize().unwrap();
    assert_eq!(model.status(), ModelStatus::Finalized);
}

#[test]
fn model_information() {
    let model = PetModel::new();
    assert_eq!(model.get_component_name(), "Potential Evapotranspiration");
    assert_eq!(model.get_time_units(), "s");
    assert_eq!(model.get_input_item_count(), 7);
    assert_eq!(model.get_output_item_count(), 1);
    assert_eq!(model.get_input_var_names().len(), 7);
    assert_eq!(
        model.get_output_var_names(),
        vec!["water_potential_evaporation_flux"]
    );
}
