//! Builder for configuring the collaborators of a model.

use crate::engine::{NullPetEngine, PetEngine};
use crate::forcing::{AorcLineParser, ForcingRecordParser};
use std::sync::Arc;

use super::runtime::PetModel;

/// Build a new, uninitialised model.
///
/// The PET engine defaults to [`NullPetEngine`] and forcing files are read
/// with [`AorcLineParser`].
#[derive(Debug, Clone)]
pub struct PetModelBuilder {
    engine: Arc<dyn PetEngine>,
    parser: Arc<dyn ForcingRecordParser>,
}

impl PetModelBuilder {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(NullPetEngine {}),
            parser: Arc::new(AorcLineParser::new()),
        }
    }

    /// Set the engine that computes the evapotranspiration flux each step.
    pub fn with_engine(&mut self, engine: Arc<dyn PetEngine>) -> &mut Self {
        self.engine = engine;
        self
    }

    /// Set the parser used to decode forcing file records.
    pub fn with_record_parser(&mut self, parser: Arc<dyn ForcingRecordParser>) -> &mut Self {
        self.parser = parser;
        self
    }

    pub fn build(&self) -> PetModel {
        PetModel::from_parts(Arc::clone(&self.engine), Arc::clone(&self.parser))
    }
}

impl Default for PetModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
