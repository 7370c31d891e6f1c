//! Validation with error accumulation for configuration.
//!
//! Rates are checked with stillwater's `Validation` so that a config with
//! several bad values reports all of them in one run.

use stillwater::{NonEmptyVec, Validation};

use super::rates::RatesConfig;
use crate::core::GlobalParameters;
use crate::errors::ProfitmapError;

pub type RateValidation<T> = Validation<T, NonEmptyVec<String>>;

/// Upper bound (exclusive) for any rate expressed in percent.
const MAX_PERCENT: f64 = 100.0;

/// A percentage must be finite and within `[0, 100)`.
pub fn validate_percent(field: &str, value: f64) -> RateValidation<f64> {
    if !value.is_finite() {
        fail(format!("{field}: expected a number, got {value}"))
    } else if !(0.0..MAX_PERCENT).contains(&value) {
        fail(format!(
            "{field}: out of range (expected: 0-{MAX_PERCENT} exclusive, got: {value})"
        ))
    } else {
        Validation::Success(value)
    }
}

/// Validate both rates, accumulating every error.
pub fn validate_rates(rates: &RatesConfig) -> RateValidation<GlobalParameters> {
    let tax = validate_percent("rates.tax_percent", rates.tax_percent);
    let packaging = validate_percent("rates.packaging_percent", rates.packaging_percent);

    match (tax, packaging) {
        (Validation::Success(t), Validation::Success(p)) => {
            Validation::Success(GlobalParameters::from_percent(t, p))
        }
        (Validation::Failure(errors), Validation::Success(_))
        | (Validation::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        (Validation::Failure(first), Validation::Failure(second)) => {
            let head = first.head().clone();
            let tail = first.into_iter().skip(1).chain(second).collect();
            Validation::Failure(NonEmptyVec::new(head, tail))
        }
    }
}

/// `Result` wrapper for callers that just need the parameters.
pub fn validate_rates_result(rates: &RatesConfig) -> Result<GlobalParameters, ProfitmapError> {
    match validate_rates(rates) {
        Validation::Success(params) => Ok(params),
        Validation::Failure(errors) => Err(ProfitmapError::InvalidRates(
            errors.into_iter().collect(),
        )),
    }
}

fn fail<T>(message: String) -> RateValidation<T> {
    Validation::Failure(NonEmptyVec::new(message, Vec::new()))
}
