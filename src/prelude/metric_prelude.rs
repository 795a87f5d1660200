pub use crate::metric::{Evaluation, accuracy};
