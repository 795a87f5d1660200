/// Conversion between class labels and one-hot target vectors
pub mod label_encoding;

pub use label_encoding::*;
