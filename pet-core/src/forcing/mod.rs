//! Meteorological forcing.
//!
//! Forcing either arrives from the host through the input variables or is read
//! from an AORC forcing file during initialisation. File forcing is parsed line
//! by line with a [`ForcingRecordParser`] and stored as one
//! [`ForcingTimeseries`] that the model steps through.

mod aorc;
mod loader;
mod series;

pub use aorc::{AorcLineParser, AorcRecord, ForcingRecordParser};
pub use loader::load_forcing;
pub use series::ForcingTimeseries;
