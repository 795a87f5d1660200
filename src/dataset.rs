/// CSV ingestion of labelled pixel rows
pub mod csv_rows;
/// Parser for the plain decimal tokens found in the CSV files
pub mod numeric_token;

pub use csv_rows::*;
pub use numeric_token::*;

pub use crate::utility::split_row;

/// Column of the CSV file that holds the class label.
///
/// Rows handed to the network always carry the label last, whichever column it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    /// Label in the first column (the layout of the common MNIST CSV exports)
    #[default]
    First,
    /// Label in the last column
    Last,
}

/// Options controlling how CSV rows are turned into training rows.
///
/// # Fields
///
/// - `normalize` - Divide every feature (never the label) by `scale`
/// - `scale` - Divisor applied when `normalize` is set, 255 for 8-bit pixel intensities
/// - `label_position` - Column holding the label
/// - `has_headers` - Skip the first record of the file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetConfig {
    pub normalize: bool,
    pub scale: f64,
    pub label_position: LabelPosition,
    pub has_headers: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            scale: 255.0,
            label_position: LabelPosition::First,
            has_headers: false,
        }
    }
}
