use crate::models::PriceEstimate;
use crate::services::model::ModelError;

/// Relative width of the reported price band on each side of the estimate.
///
/// This is a fixed heuristic, not a confidence interval derived from the
/// model's error.
pub const PRICE_BAND: f64 = 0.05;

/// Magnitude from which every f64 is an integer, so no cents remain to round
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Build the reported estimate from a raw model output
///
/// Both bounds are computed from the unrounded value, then all three
/// figures are rounded to two decimals. For negative outputs the "min"
/// bound ends up above the point estimate.
///
/// # Errors
/// `NonFiniteOutput` if the raw value or either bound overflows.
pub fn price_estimate(raw: f64) -> Result<PriceEstimate, ModelError> {
    let min = raw * (1.0 - PRICE_BAND);
    let max = raw * (1.0 + PRICE_BAND);

    if !(raw.is_finite() && min.is_finite() && max.is_finite()) {
        return Err(ModelError::NonFiniteOutput);
    }

    Ok(PriceEstimate {
        predicted_price: round_to_cents(raw),
        min_price: round_to_cents(min),
        max_price: round_to_cents(max),
    })
}

/// Round to two decimal places using the exact binary value
///
/// Goes through the decimal formatter, which rounds the exact value rather
/// than `value * 100` (that product is itself rounded and can land on a
/// spurious half).
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}
