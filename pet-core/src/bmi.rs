//! The Basic Model Interface (BMI) coupling contract.
//!
//! A host framework drives a model only through these operations: the
//! lifecycle (`initialize`, `update`, `update_until`, `finalize`), metadata
//! queries about the exposed variables and the model time, and typed access to
//! the variable values.
//!
//! Every value exposed by this model is a `double`, so values are exchanged as
//! `f64` slices. [`Bmi::get_value_ptr`] hands out a mutable view of the live
//! model value instead of a raw pointer.

use crate::errors::{PetError, PetResult};
use crate::grid::unsupported;
use crate::{FloatValue, Time};
use std::path::Path;

pub trait Bmi {
    // Lifecycle

    /// Load the configuration file and prepare the model for stepping.
    fn initialize(&mut self, config_file: &Path) -> PetResult<()>;

    /// Advance the model by one time step.
    fn update(&mut self) -> PetResult<()>;

    /// Advance the model until `time`.
    ///
    /// The time need not be a whole number of time steps from the current time.
    fn update_until(&mut self, time: Time) -> PetResult<()>;

    /// Release the model state.
    fn finalize(&mut self) -> PetResult<()>;

    // Model information

    fn get_component_name(&self) -> &str;
    fn get_input_item_count(&self) -> usize;
    fn get_output_item_count(&self) -> usize;
    fn get_input_var_names(&self) -> Vec<&str>;
    fn get_output_var_names(&self) -> Vec<&str>;

    // Variable information

    fn get_var_grid(&self, name: &str) -> PetResult<i32>;
    fn get_var_type(&self, name: &str) -> PetResult<&str>;
    fn get_var_units(&self, name: &str) -> PetResult<&str>;
    /// Size of one element of the variable in bytes
    fn get_var_itemsize(&self, name: &str) -> PetResult<usize>;
    /// Size of the whole variable in bytes
    fn get_var_nbytes(&self, name: &str) -> PetResult<usize>;
    fn get_var_location(&self, name: &str) -> PetResult<&str>;

    // Time information

    fn get_current_time(&self) -> Time;
    fn get_start_time(&self) -> Time;
    fn get_end_time(&self) -> Time;
    fn get_time_units(&self) -> &str;
    fn get_time_step(&self) -> Time;

    // Variable getters and setters

    /// Copy the values of a variable into `dest`.
    ///
    /// `dest` must hold at least the variable's item count.
    fn get_value(&self, name: &str, dest: &mut [FloatValue]) -> PetResult<()>;

    /// Borrow the live values of a variable.
    ///
    /// Writes through the returned slice are seen by the model.
    fn get_value_ptr(&mut self, name: &str) -> PetResult<&mut [FloatValue]>;

    /// Gather the elements at `indices` into `dest`.
    fn get_value_at_indices(
        &self,
        name: &str,
        dest: &mut [FloatValue],
        indices: &[usize],
    ) -> PetResult<()>;

    /// Overwrite the values of a variable from `src`.
    fn set_value(&mut self, name: &str, src: &[FloatValue]) -> PetResult<()>;

    /// Scatter `src` into the elements at `indices`.
    fn set_value_at_indices(
        &mut self,
        name: &str,
        indices: &[usize],
        src: &[FloatValue],
    ) -> PetResult<()>;

    // Grid information

    fn get_grid_rank(&self, grid: i32) -> PetResult<usize>;
    fn get_grid_size(&self, grid: i32) -> PetResult<usize>;
    fn get_grid_type(&self, grid: i32) -> PetResult<&str>;

    // Uniform rectilinear grids

    fn get_grid_shape(&self, grid: i32, _shape: &mut [usize]) -> PetResult<()> {
        Err(unsupported(grid, "shape"))
    }

    fn get_grid_spacing(&self, grid: i32, _spacing: &mut [FloatValue]) -> PetResult<()> {
        Err(unsupported(grid, "spacing"))
    }

    fn get_grid_origin(&self, grid: i32, _origin: &mut [FloatValue]) -> PetResult<()> {
        Err(unsupported(grid, "origin"))
    }

    // Non-uniform rectilinear, curvilinear and unstructured grids

    fn get_grid_x(&self, grid: i32, _x: &mut [FloatValue]) -> PetResult<()> {
        Err(unsupported(grid, "x"))
    }

    fn get_grid_y(&self, grid: i32, _y: &mut [FloatValue]) -> PetResult<()> {
        Err(unsupported(grid, "y"))
    }

    fn get_grid_z(&self, grid: i32, _z: &mut [FloatValue]) -> PetResult<()> {
        Err(unsupported(grid, "z"))
    }

    fn get_grid_node_count(&self, grid: i32) -> PetResult<usize> {
        Err(unsupported(grid, "node_count"))
    }

    fn get_grid_edge_count(&self, grid: i32) -> PetResult<usize> {
        Err(unsupported(grid, "edge_count"))
    }

    fn get_grid_face_count(&self, grid: i32) -> PetResult<usize> {
        Err(unsupported(grid, "face_count"))
    }

    fn get_grid_edge_nodes(&self, grid: i32, _edge_nodes: &mut [usize]) -> PetResult<()> {
        Err(unsupported(grid, "edge_nodes"))
    }

    fn get_grid_face_edges(&self, grid: i32, _face_edges: &mut [usize]) -> PetResult<()> {
        Err(unsupported(grid, "face_edges"))
    }

    fn get_grid_face_nodes(&self, grid: i32, _face_nodes: &mut [usize]) -> PetResult<()> {
        Err(unsupported(grid, "face_nodes"))
    }

    fn get_grid_nodes_per_face(&self, grid: i32, _nodes_per_face: &mut [usize]) -> PetResult<()> {
        Err(unsupported(grid, "nodes_per_face"))
    }
}

/// Check that a caller supplied buffer can hold `required` values.
pub(crate) fn check_buffer(name: &str, required: usize, actual: usize) -> PetResult<()> {
    if actual < required {
        Err(PetError::BufferSize {
            name: name.to_string(),
            required,
            actual,
        })
    } else {
        Ok(())
    }
}
