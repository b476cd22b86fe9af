use crate::bmi::{check_buffer, Bmi};
use crate::config::ModelParameters;
use crate::errors::{PetError, PetResult};
use crate::grid::{grid_rank, grid_size, grid_type};
use crate::variable::VARIABLE_REGISTRY;
use crate::{FloatValue, Time};
use std::path::Path;
use std::slice;

use super::runtime::{PetModel, COMPONENT_NAME};

/// Fail unless every index addresses one of `item_count` elements.
fn check_indices(name: &str, indices: &[usize], item_count: usize) -> PetResult<()> {
    match indices.iter().find(|&&index| index >= item_count) {
        Some(&index) => Err(PetError::IndexOutOfRange {
            name: name.to_string(),
            index,
            item_count,
        }),
        None => Ok(()),
    }
}

impl PetModel {
    fn values(&self, name: &str) -> PetResult<&[FloatValue]> {
        let var = VARIABLE_REGISTRY.get(name)?;
        Ok(slice::from_ref(self.state.field(var.field)))
    }

    fn values_mut(&mut self, name: &str) -> PetResult<&mut [FloatValue]> {
        let var = VARIABLE_REGISTRY.get(name)?;
        Ok(slice::from_mut(self.state.field_mut(var.field)))
    }
}

impl Bmi for PetModel {
    fn initialize(&mut self, config_file: &Path) -> PetResult<()> {
        self.begin_initialization()?;
        let parameters = ModelParameters::from_file(config_file)?;
        self.complete_initialization(parameters)
    }

    fn update(&mut self) -> PetResult<()> {
        self.step()
    }

    fn update_until(&mut self, time: Time) -> PetResult<()> {
        self.step_until(time)
    }

    fn finalize(&mut self) -> PetResult<()> {
        self.close()
    }

    fn get_component_name(&self) -> &str {
        COMPONENT_NAME
    }

    fn get_input_item_count(&self) -> usize {
        VARIABLE_REGISTRY.input_count()
    }

    fn get_output_item_count(&self) -> usize {
        VARIABLE_REGISTRY.output_count()
    }

    fn get_input_var_names(&self) -> Vec<&str> {
        VARIABLE_REGISTRY.input_names()
    }

    fn get_output_var_names(&self) -> Vec<&str> {
        VARIABLE_REGISTRY.output_names()
    }

    fn get_var_grid(&self, name: &str) -> PetResult<i32> {
        Ok(VARIABLE_REGISTRY.get(name)?.grid)
    }

    fn get_var_type(&self, name: &str) -> PetResult<&str> {
        Ok(VARIABLE_REGISTRY.get(name)?.var_type.as_str())
    }

    fn get_var_units(&self, name: &str) -> PetResult<&str> {
        Ok(VARIABLE_REGISTRY.get(name)?.units)
    }

    fn get_var_itemsize(&self, name: &str) -> PetResult<usize> {
        Ok(VARIABLE_REGISTRY.get(name)?.itemsize())
    }

    fn get_var_nbytes(&self, name: &str) -> PetResult<usize> {
        Ok(VARIABLE_REGISTRY.get(name)?.nbytes())
    }

    fn get_var_location(&self, name: &str) -> PetResult<&str> {
        Ok(VARIABLE_REGISTRY.get(name)?.location.as_str())
    }

    fn get_current_time(&self) -> Time {
        self.clock.current_time
    }

    fn get_start_time(&self) -> Time {
        self.clock.start_time
    }

    fn get_end_time(&self) -> Time {
        self.clock.end_time()
    }

    fn get_time_units(&self) -> &str {
        "s"
    }

    fn get_time_step(&self) -> Time {
        self.clock.time_step_size_s
    }

    fn get_value(&self, name: &str, dest: &mut [FloatValue]) -> PetResult<()> {
        let values = self.values(name)?;
        check_buffer(name, values.len(), dest.len())?;
        dest[..values.len()].copy_from_slice(values);
        Ok(())
    }

    fn get_value_ptr(&mut self, name: &str) -> PetResult<&mut [FloatValue]> {
        self.values_mut(name)
    }

    fn get_value_at_indices(
        &self,
        name: &str,
        dest: &mut [FloatValue],
        indices: &[usize],
    ) -> PetResult<()> {
        let values = self.values(name)?;
        check_buffer(name, indices.len(), dest.len())?;
        check_indices(name, indices, values.len())?;
        for (value, &index) in dest.iter_mut().zip(indices) {
            *value = values[index];
        }
        Ok(())
    }

    fn set_value(&mut self, name: &str, src: &[FloatValue]) -> PetResult<()> {
        let values = self.values_mut(name)?;
        check_buffer(name, values.len(), src.len())?;
        let n = values.len();
        values.copy_from_slice(&src[..n]);
        Ok(())
    }

    fn set_value_at_indices(
        &mut self,
        name: &str,
        indices: &[usize],
        src: &[FloatValue],
    ) -> PetResult<()> {
        let values = self.values_mut(name)?;
        check_buffer(name, indices.len(), src.len())?;
        check_indices(name, indices, values.len())?;
        for (&index, &value) in indices.iter().zip(src) {
            values[index] = value;
        }
        Ok(())
    }

    fn get_grid_rank(&self, grid: i32) -> PetResult<usize> {
        grid_rank(grid)
    }

    fn get_grid_size(&self, grid: i32) -> PetResult<usize> {
        grid_size(grid)
    }

    fn get_grid_type(&self, grid: i32) -> PetResult<&str> {
        grid_type(grid)
    }
}
