/// Prelude module for dataset ingestion.
pub mod dataset_prelude;
/// Prelude module for evaluation metrics.
pub mod metric_prelude;
/// Prelude module for the neural network components.
pub mod neural_network_prelude;
/// Prelude module for utility functions.
pub mod utility_prelude;

pub use crate::error::{IoError, ModelError};
pub use dataset_prelude::*;
pub use metric_prelude::*;
pub use neural_network_prelude::*;
pub use utility_prelude::*;
