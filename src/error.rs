/// Error types that can occur during network construction, training and inference
///
/// # Variants
///
/// - `DimensionMismatch` - a matrix handed to a layer or the network does not have the expected `(rows, cols)` shape
/// - `ConfigurationError` - the network or a layer was described with an invalid structure (no layers, zero-sized layers, unwired neighbours)
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    ConfigurationError(String),
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            ModelError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while loading datasets
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, file access)
/// - `CsvError` - Wraps errors raised by the CSV reader (ragged rows, invalid UTF-8)
/// - `ParseError` - A field is not a plain decimal number; carries the offending token
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    CsvError(csv::Error),
    ParseError(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::CsvError(e) => write!(f, "CSV error: {}", e),
            IoError::ParseError(token) => write!(f, "Parse error: invalid numeric token '{}'", token),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIoError(e) => Some(e),
            IoError::CsvError(e) => Some(e),
            IoError::ParseError(_) => None,
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::CsvError(e)
    }
}
