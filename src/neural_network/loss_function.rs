/// Mean Squared Error loss function
pub mod mean_squared_error;

pub use mean_squared_error::*;
