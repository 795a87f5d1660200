pub use crate::utility::label_encoding::{label_index, one_hot_encode, split_row};
