//! Grid metadata.
//!
//! The model runs on a single point, exposed as grid 0 of type `scalar` with
//! rank 1 and one element. Every other grid identifier is unknown.

use crate::errors::{PetError, PetResult};

/// Identifier of the only grid the model defines
pub const SCALAR_GRID_ID: i32 = 0;

/// Name of the scalar grid type
pub const SCALAR_GRID_TYPE: &str = "scalar";

pub(crate) fn unsupported(grid: i32, query: &'static str) -> PetError {
    PetError::UnsupportedGridQuery { grid, query }
}

fn check_scalar_grid(grid: i32, query: &'static str) -> PetResult<()> {
    if grid == SCALAR_GRID_ID {
        Ok(())
    } else {
        Err(unsupported(grid, query))
    }
}

/// Number of dimensions of a grid
pub fn grid_rank(grid: i32) -> PetResult<usize> {
    check_scalar_grid(grid, "rank").map(|_| 1)
}

/// Number of elements on a grid
pub fn grid_size(grid: i32) -> PetResult<usize> {
    check_scalar_grid(grid, "size").map(|_| 1)
}

pub fn grid_type(grid: i32) -> PetResult<&'static str> {
    check_scalar_grid(grid, "type").map(|_| SCALAR_GRID_TYPE)
}
