//! Batch classification of many inputs.
//!
//! Each input is classified independently, so results never depend on
//! batch order or size. With the `parallel` feature the work is spread over
//! rayon's thread pool; results are identical to the sequential versions
//! and keep input order.

use crate::card::ClassificationResult;
use crate::classify::check;
use crate::error::InputError;

/// Result of classifying one input.
pub type Outcome = Result<ClassificationResult, InputError>;

/// Classifies a slice of raw inputs.
///
/// Returns one outcome per input, in input order.
///
/// # Example
///
/// ```
/// use card_classifier::batch::classify_all;
///
/// let results = classify_all(&["4111111111111111", "abc"]);
/// assert!(results[0].as_ref().unwrap().is_probably_real());
/// assert!(results[1].is_err());
/// ```
#[inline]
pub fn classify_all<S: AsRef<str>>(inputs: &[S]) -> Vec<Outcome> {
    inputs.iter().map(|s| check(s.as_ref())).collect()
}

/// Returns the results for inputs that are probably real.
///
/// Rejected and fake inputs are silently filtered out.
pub fn real_only<S: AsRef<str>>(inputs: &[S]) -> Vec<ClassificationResult> {
    inputs
        .iter()
        .filter_map(|s| check(s.as_ref()).ok())
        .filter(ClassificationResult::is_probably_real)
        .collect()
}

/// Classifies a batch and splits accepted results from rejected inputs.
///
/// Returns `(results, rejections)`, where each rejection carries the index
/// of the input it came from.
pub fn classify_partitioned<S: AsRef<str>>(
    inputs: &[S],
) -> (Vec<ClassificationResult>, Vec<(usize, InputError)>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (i, input) in inputs.iter().enumerate() {
        match check(input.as_ref()) {
            Ok(r) => accepted.push(r),
            Err(e) => rejected.push((i, e)),
        }
    }

    (accepted, rejected)
}

/// Counts probably-real and not-real inputs in a batch.
///
/// Rejected inputs count as not real.
///
/// # Returns
///
/// Tuple of (real_count, not_real_count)
///
/// # Example
///
/// ```
/// use card_classifier::batch::count_real;
///
/// let inputs = ["4111111111111111", "4111111111111112", "5500000000000004"];
/// assert_eq!(count_real(&inputs), (2, 1));
/// ```
pub fn count_real<S: AsRef<str>>(inputs: &[S]) -> (usize, usize) {
    let real = inputs
        .iter()
        .filter(|s| crate::classify::is_probably_real(s.as_ref()))
        .count();

    (real, inputs.len() - real)
}

/// Classifies a slice of inputs in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn classify_parallel<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Outcome> {
    use rayon::prelude::*;
    inputs.par_iter().map(|s| check(s.as_ref())).collect()
}

/// Counts probably-real and not-real inputs in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_real_parallel<S: AsRef<str> + Sync>(inputs: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let real = inputs
        .par_iter()
        .filter(|s| crate::classify::is_probably_real(s.as_ref()))
        .count();

    (real, inputs.len() - real)
}
