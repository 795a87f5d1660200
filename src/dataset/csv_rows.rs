use super::{DatasetConfig, LabelPosition, parse_token};
use crate::error::IoError;
use csv::{ReaderBuilder, Trim};
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads labelled rows from CSV data.
///
/// Every field is parsed with [`parse_token`]. The returned rows hold the features
/// followed by the label, regardless of `config.label_position`. When
/// `config.normalize` is set, features are divided by `config.scale`; the label is
/// never scaled. Blank records are skipped.
///
/// # Parameters
///
/// - `reader` - Source of the CSV text
/// - `config` - Layout and normalization options
///
/// # Returns
///
/// - `Ok(Vec<Vec<f64>>)` - One `features ++ label` row per record
/// - `Err(IoError::CsvError)` - If the CSV is malformed (for example rows of different lengths)
/// - `Err(IoError::ParseError)` - If a field is not a plain decimal number
/// - `Err(IoError::StdIoError)` - If normalization is requested with a non-positive scale
///
/// # Examples
/// ```rust
/// use digitnet::dataset::{DatasetConfig, load_rows};
///
/// let csv = "7,0,255\n2,51,0\n";
/// let rows = load_rows(csv.as_bytes(), &DatasetConfig::default()).unwrap();
///
/// assert_eq!(rows[0], vec![0.0, 1.0, 7.0]);
/// assert_eq!(rows[1], vec![0.2, 0.0, 2.0]);
/// ```
pub fn load_rows<R: Read>(reader: R, config: &DatasetConfig) -> Result<Vec<Vec<f64>>, IoError> {
    if config.normalize && !(config.scale > 0.0 && config.scale.is_finite()) {
        return Err(IoError::StdIoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("scale must be positive and finite, got {}", config.scale),
        )));
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(config.has_headers)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let mut values = record
            .iter()
            .map(parse_token)
            .collect::<Result<Vec<f64>, IoError>>()?;

        if config.label_position == LabelPosition::First {
            values.rotate_left(1);
        }

        if config.normalize {
            let feature_count = values.len().saturating_sub(1);
            for value in &mut values[..feature_count] {
                *value /= config.scale;
            }
        }

        rows.push(values);
    }

    Ok(rows)
}

/// Reads labelled rows from a CSV file; see [`load_rows`].
///
/// # Returns
///
/// - `Ok(Vec<Vec<f64>>)` - One `features ++ label` row per record
/// - `Err(IoError::StdIoError)` - If the file cannot be opened
/// - `Err(IoError)` - Any error of [`load_rows`]
pub fn load_csv<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<Vec<Vec<f64>>, IoError> {
    let file = File::open(path.as_ref()).map_err(IoError::StdIoError)?;
    let rows = load_rows(BufReader::new(file), config)?;

    info!("Loaded {} rows from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}
