use crate::domain::model::{
    CalculationInput, CalculationOutput, CompoundingFrequency, RawCalculationInput,
};
use crate::utils::error::CalcError;
use serde::Deserialize;
use serde_json::Value;

/// Validates a calculation payload and computes `A = P(1 + r/n)^(n·t)`.
///
/// Stateless: every call is independent and the same input always yields the
/// same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationService;

impl CalculationService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a raw request body. `None` and the empty string are both
    /// treated as a missing body.
    pub fn evaluate(&self, raw: Option<&str>) -> Result<CalculationOutput, CalcError> {
        let body = match raw {
            Some(body) if !body.is_empty() => body,
            _ => return Err(CalcError::MissingBody),
        };

        let value: Value = serde_json::from_str(body)?;
        self.evaluate_value(&value)
    }

    /// Evaluates a payload that has already been parsed as JSON.
    pub fn evaluate_value(&self, value: &Value) -> Result<CalculationOutput, CalcError> {
        let raw = decode_raw(value)?;
        let input = self.validate(raw)?;
        self.calculate(&input)
    }

    /// Applies the ordered field checks; the first failing check wins.
    pub fn validate(&self, raw: RawCalculationInput) -> Result<CalculationInput, CalcError> {
        let (Some(principal), Some(rate), Some(years), Some(frequency)) =
            (raw.principal, raw.rate, raw.years, raw.frequency)
        else {
            return Err(CalcError::MissingFields);
        };

        // 非數值欄位視同超出範圍
        let principal = principal
            .as_f64()
            .filter(|p| *p > 0.0)
            .ok_or(CalcError::InvalidPrincipal)?;

        let rate = rate
            .as_f64()
            .filter(|r| (0.0..=100.0).contains(r))
            .ok_or(CalcError::InvalidRate)?;

        let years = years
            .as_f64()
            .filter(|y| *y > 0.0)
            .ok_or(CalcError::InvalidYears)?;

        let frequency = frequency
            .as_f64()
            .and_then(CompoundingFrequency::from_periods)
            .ok_or(CalcError::InvalidFrequency)?;

        tracing::debug!(compounding = frequency.label(), "Calculation input validated");
        Ok(CalculationInput {
            principal,
            rate,
            years,
            frequency: f64::from(frequency.periods()),
        })
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationOutput, CalcError> {
        let amount = compound_amount(input.principal, input.rate, input.years, input.frequency);

        if !amount.is_finite() {
            return Err(CalcError::NonFiniteResult {
                principal: input.principal,
                years: input.years,
            });
        }

        let result = round_to_cents(amount);
        tracing::debug!(
            principal = input.principal,
            rate = input.rate,
            years = input.years,
            frequency = input.frequency,
            result,
            "Compound interest calculated"
        );

        Ok(CalculationOutput {
            result,
            principal: input.principal,
            rate: input.rate,
            years: input.years,
            frequency: input.frequency,
        })
    }
}

fn decode_raw(value: &Value) -> Result<RawCalculationInput, CalcError> {
    let found = match value {
        Value::Object(_) => return Ok(RawCalculationInput::deserialize(value)?),
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
    };
    Err(CalcError::NotAnObject { found })
}

/// `principal * (1 + rate/100/frequency)^(frequency*years)`, unrounded.
pub fn compound_amount(principal: f64, rate: f64, years: f64, frequency: f64) -> f64 {
    let rate_decimal = rate / 100.0;
    principal * (1.0 + rate_decimal / frequency).powf(frequency * years)
}

/// Rounds half away from zero on the cents boundary.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> CalculationService {
        CalculationService::new()
    }

    #[test]
    fn test_monthly_compounding() {
        let output = service()
            .evaluate(Some(r#"{"principal":1000,"rate":5,"years":10,"frequency":12}"#))
            .unwrap();
        assert_eq!(output.result, 1647.01);
        assert_eq!(output.principal, 1000.0);
        assert_eq!(output.frequency, 12.0);
    }

    #[test]
    fn test_missing_body() {
        assert!(matches!(service().evaluate(None), Err(CalcError::MissingBody)));
        assert!(matches!(service().evaluate(Some("")), Err(CalcError::MissingBody)));
    }

    #[test]
    fn test_invalid_json_is_processing_fault() {
        let err = service().evaluate(Some("{principal: 1")).unwrap_err();
        assert!(matches!(err, CalcError::MalformedPayload(_)));
        assert!(!err.is_validation_failure());
    }

    #[test]
    fn test_non_object_payload() {
        for payload in ["null", "42", "[1,2]", "\"text\"", "true"] {
            let err = service().evaluate(Some(payload)).unwrap_err();
            assert!(matches!(err, CalcError::NotAnObject { .. }), "{payload}");
        }
    }

    #[test]
    fn test_missing_fields_checked_before_ranges() {
        let err = service()
            .evaluate_value(&json!({"principal": -1, "rate": 500, "years": 1}))
            .unwrap_err();
        assert!(matches!(err, CalcError::MissingFields));
    }

    #[test]
    fn test_check_order_first_failure_wins() {
        let err = service()
            .evaluate_value(&json!({"principal": 0, "rate": -1, "years": 0, "frequency": 3}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidPrincipal));

        let err = service()
            .evaluate_value(&json!({"principal": 1, "rate": 100.5, "years": 0, "frequency": 3}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate));

        let err = service()
            .evaluate_value(&json!({"principal": 1, "rate": 100, "years": 0, "frequency": 3}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidYears));

        let err = service()
            .evaluate_value(&json!({"principal": 1, "rate": 0, "years": 1, "frequency": 3}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidFrequency));
    }

    #[test]
    fn test_null_field_fails_its_own_check() {
        let base = json!({"principal": 100, "rate": 5, "years": 1, "frequency": 12});
        let cases = [
            ("principal", "Principal must be positive"),
            ("rate", "Interest rate must be between 0 and 100"),
            ("years", "Years must be positive"),
            ("frequency", "Frequency must be 1, 2, 4, 12, or 365"),
        ];

        for (field, message) in cases {
            let mut payload = base.clone();
            payload[field] = Value::Null;
            let err = service().evaluate(Some(&payload.to_string())).unwrap_err();
            assert_eq!(err.to_string(), message, "{field}");
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_wrong_type_fails_field_check() {
        let err = service()
            .evaluate_value(&json!({"principal": "1000", "rate": 5, "years": 1, "frequency": 1}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidPrincipal));

        let err = service()
            .evaluate_value(&json!({"principal": 1000, "rate": 5, "years": 1, "frequency": "12"}))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidFrequency));
    }

    #[test]
    fn test_rate_bounds_inclusive() {
        let zero = service()
            .evaluate_value(&json!({"principal": 250.5, "rate": 0, "years": 3, "frequency": 4}))
            .unwrap();
        assert_eq!(zero.result, 250.5);

        let hundred = service()
            .evaluate_value(&json!({"principal": 100, "rate": 100, "years": 1, "frequency": 1}))
            .unwrap();
        assert_eq!(hundred.result, 200.0);
    }

    #[test]
    fn test_fractional_years() {
        let output = service()
            .evaluate_value(&json!({"principal": 100, "rate": 10, "years": 0.5, "frequency": 2}))
            .unwrap();
        assert_eq!(output.result, 105.0);
    }

    #[test]
    fn test_overflow_reported_as_processing_fault() {
        let err = service()
            .evaluate_value(&json!({
                "principal": 1e300,
                "rate": 100,
                "years": 1e6,
                "frequency": 365
            }))
            .unwrap_err();
        assert!(matches!(err, CalcError::NonFiniteResult { .. }));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1647.009497690283), 1647.01);
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(10.0), 10.0);
    }
}
