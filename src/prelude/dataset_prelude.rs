pub use crate::dataset::{DatasetConfig, LabelPosition, load_csv, load_rows, parse_token};
