use crate::ModelError;

/// Calculates the accuracy of class predictions.
///
/// Accuracy is the proportion of predictions that match the actual classes.
///
/// # Parameters
///
/// - `predicted` - Predicted class indices
/// - `actual` - Actual class indices
///
/// # Returns
///
/// - `Ok(f64)` - The accuracy score in the range \[0.0, 1.0\]
/// - `Err(ModelError::InputValidationError)` - If the slices are empty or differ in length
///
/// # Examples
/// ```rust
/// use digitnet::metric::accuracy;
///
/// let predicted = [0, 1, 2, 1, 0];
/// let actual = [0, 1, 1, 1, 2];
///
/// let score = accuracy(&predicted, &actual).unwrap();
/// assert!((score - 0.6).abs() < 1e-12);
/// ```
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> Result<f64, ModelError> {
    if predicted.len() != actual.len() {
        return Err(ModelError::InputValidationError(format!(
            "Input slices must have the same length. Predicted: {}, Actual: {}",
            predicted.len(),
            actual.len()
        )));
    }

    if predicted.is_empty() {
        return Err(ModelError::InputValidationError(
            "Input slices must not be empty".to_string(),
        ));
    }

    let correct_predictions = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    Ok(correct_predictions as f64 / predicted.len() as f64)
}

/// Tally of correct and wrong predictions over a dataset.
///
/// # Fields
///
/// - `correct` - Number of samples whose predicted class matched the label
/// - `wrong` - Number of samples whose predicted class did not match the label
/// - `total` - Number of samples evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
}

impl Evaluation {
    /// Records the outcome of one prediction.
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        self.total += 1;
    }

    /// Proportion of correct predictions: correct / total.
    ///
    /// # Returns
    ///
    /// - `f64` - Accuracy in the range \[0.0, 1.0\] (returns 0.0 when nothing was evaluated)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Out of {}, {} were predicted correct and {} were predicted wrong",
            self.total, self.correct, self.wrong
        )
    }
}
