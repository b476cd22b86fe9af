//! Variable registry for the coupling interface.
//!
//! Every variable the model exposes to a host framework is described by a
//! [`VariableDescriptor`] holding its name, element type, units, item count,
//! grid and location. Descriptors are defined at compile time with
//! [`define_bmi_variable!`] (see [`crate::standard_variables`]) and collected
//! into the global [`VARIABLE_REGISTRY`], which answers lookups by name.
//!
//! # Usage
//!
//! ```rust
//! use pet_core::variable::{VarType, VARIABLE_REGISTRY};
//!
//! let var = VARIABLE_REGISTRY.get("land_surface_air__pressure").unwrap();
//! assert_eq!(var.units, "Pa");
//! assert_eq!(var.var_type, VarType::Double);
//! assert_eq!(var.nbytes(), 8);
//!
//! assert!(VARIABLE_REGISTRY.get("not_a_variable").is_err());
//! ```

use crate::errors::{PetError, PetResult};
use crate::standard_variables::{
    VAR_AIR_TEMPERATURE, VAR_INCOMING_LONGWAVE, VAR_INCOMING_SHORTWAVE, VAR_PET_FLUX,
    VAR_SPECIFIC_HUMIDITY, VAR_SURFACE_PRESSURE, VAR_U_WIND, VAR_V_WIND,
};
use crate::state::StateField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Element type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Double,
    Float,
    Int,
    Short,
    Long,
}

impl VarType {
    /// Name of the type as reported to the host framework
    pub fn as_str(&self) -> &'static str {
        match self {
            VarType::Double => "double",
            VarType::Float => "float",
            VarType::Int => "int",
            VarType::Short => "short",
            VarType::Long => "long",
        }
    }

    /// Size of one element in bytes
    pub fn itemsize(&self) -> usize {
        match self {
            VarType::Double => std::mem::size_of::<f64>(),
            VarType::Float => std::mem::size_of::<f32>(),
            VarType::Int => std::mem::size_of::<i32>(),
            VarType::Short => std::mem::size_of::<i16>(),
            VarType::Long => std::mem::size_of::<i64>(),
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid element a variable's values are defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Node,
    Edge,
    Face,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Node => "node",
            Location::Edge => "edge",
            Location::Face => "face",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the host writes a variable (input) or reads it (output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableRole {
    Input,
    Output,
}

/// Static description of a variable exposed through the coupling interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDescriptor {
    /// Standard name, unique across inputs and outputs
    pub name: &'static str,
    pub var_type: VarType,
    pub units: &'static str,
    /// Number of elements held by the variable
    pub item_count: usize,
    /// Identifier of the grid the variable is defined on
    pub grid: i32,
    pub location: Location,
    pub role: VariableRole,
    /// The model field that backs the variable
    pub field: StateField,
}

impl VariableDescriptor {
    /// Size of one element in bytes
    pub fn itemsize(&self) -> usize {
        self.var_type.itemsize()
    }

    /// Size of the whole variable in bytes
    pub fn nbytes(&self) -> usize {
        self.itemsize() * self.item_count
    }
}

/// Macro for defining a scalar `double` variable on grid 0 at compile time.
///
/// # Usage
///
/// ```rust
/// use pet_core::define_bmi_variable;
/// use pet_core::state::StateField;
/// use pet_core::variable::VariableRole;
///
/// define_bmi_variable!(
///     MY_VARIABLE,
///     name = "land_surface_air__temperature",
///     units = "K",
///     role = VariableRole::Input,
///     field = StateField::AirTemperature,
/// );
///
/// assert_eq!(MY_VARIABLE.item_count, 1);
/// ```
#[macro_export]
macro_rules! define_bmi_variable {
    (
        $var_name:ident,
        name = $name:expr,
        units = $units:expr,
        role = $role:expr,
        field = $field:expr $(,)?
    ) => {
        #[doc = concat!("Variable definition for ", $name)]
        pub static $var_name: $crate::variable::VariableDescriptor =
            $crate::variable::VariableDescriptor {
                name: $name,
                var_type: $crate::variable::VarType::Double,
                units: $units,
                item_count: 1,
                grid: 0,
                location: $crate::variable::Location::Node,
                role: $role,
                field: $field,
            };
    };
}

/// Input variables, in the order reported to the host.
pub static INPUT_VARIABLES: [&VariableDescriptor; 7] = [
    &VAR_INCOMING_LONGWAVE,
    &VAR_SURFACE_PRESSURE,
    &VAR_SPECIFIC_HUMIDITY,
    &VAR_INCOMING_SHORTWAVE,
    &VAR_AIR_TEMPERATURE,
    &VAR_U_WIND,
    &VAR_V_WIND,
];

/// Output variables, in the order reported to the host.
pub static OUTPUT_VARIABLES: [&VariableDescriptor; 1] = [&VAR_PET_FLUX];

/// Lookup table over the input and output variables.
///
/// Names are unique across both tables.
#[derive(Debug)]
pub struct VariableRegistry {
    inputs: &'static [&'static VariableDescriptor],
    outputs: &'static [&'static VariableDescriptor],
    by_name: HashMap<&'static str, &'static VariableDescriptor>,
}

impl VariableRegistry {
    /// Build a registry from input and output tables.
    ///
    /// Panics if a name appears more than once across both tables.
    pub fn new(
        inputs: &'static [&'static VariableDescriptor],
        outputs: &'static [&'static VariableDescriptor],
    ) -> Self {
        let mut by_name = HashMap::with_capacity(inputs.len() + outputs.len());
        for var in outputs.iter().chain(inputs.iter()) {
            if by_name.insert(var.name, *var).is_some() {
                panic!("variable {} already registered", var.name)
            }
        }
        Self {
            inputs,
            outputs,
            by_name,
        }
    }

    /// Get a variable by name.
    ///
    /// # Errors
    ///
    /// [`PetError::UnrecognizedVariable`] if no variable has this name.
    pub fn get(&self, name: &str) -> PetResult<&'static VariableDescriptor> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| PetError::UnrecognizedVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &'static VariableDescriptor> {
        self.inputs.iter().copied()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &'static VariableDescriptor> {
        self.outputs.iter().copied()
    }

    pub fn input_names(&self) -> Vec<&'static str> {
        self.inputs().map(|var| var.name).collect()
    }

    pub fn output_names(&self) -> Vec<&'static str> {
        self.outputs().map(|var| var.name).collect()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

/// Global variable registry for the PET model.
pub static VARIABLE_REGISTRY: LazyLock<VariableRegistry> =
    LazyLock::new(|| VariableRegistry::new(&INPUT_VARIABLES, &OUTPUT_VARIABLES));
