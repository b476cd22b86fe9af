//! Integration tests for the model module.
//!
//! These tests drive a [`PetModel`](crate::PetModel) through the BMI
//! lifecycle using configuration and forcing files written to a temporary
//! directory.

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod lifecycle;
#[cfg(test)]
mod stepping;
