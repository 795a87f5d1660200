use crate::error::IoError;

/// Parses a plain decimal token such as `255`, `0.5` or `.25`.
///
/// Only ASCII digits and at most one `.` are accepted; signs, exponents and any other
/// characters are rejected. Surrounding whitespace is ignored.
///
/// # Parameters
///
/// * `token` - A single CSV field
///
/// # Returns
///
/// - `Ok(f64)` - The value of the token
/// - `Err(IoError::ParseError)` - If the token is empty, has no digits, holds a second `.`,
///   or contains any other character; the error carries the token
///
/// # Examples
/// ```rust
/// use digitnet::dataset::parse_token;
///
/// assert_eq!(parse_token("255").unwrap(), 255.0);
/// assert_eq!(parse_token("0.5").unwrap(), 0.5);
/// assert!(parse_token("-1").is_err());
/// assert!(parse_token("1e3").is_err());
/// ```
pub fn parse_token(token: &str) -> Result<f64, IoError> {
    let trimmed = token.trim();
    let reject = || IoError::ParseError(token.to_string());

    let mut value = 0.0;
    let mut divisor = 1.0;
    let mut decimal_passed = false;
    let mut digits = 0;

    for c in trimmed.chars() {
        match c {
            '.' if !decimal_passed => decimal_passed = true,
            '0'..='9' => {
                value = value * 10.0 + f64::from(c as u8 - b'0');
                if decimal_passed {
                    divisor *= 10.0;
                }
                digits += 1;
            }
            _ => return Err(reject()),
        }
    }

    if digits == 0 {
        return Err(reject());
    }

    Ok(value / divisor)
}
