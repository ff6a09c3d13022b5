use serde::{Deserialize, Deserializer, Serialize};

/// First-stage decode of a request body: every field may be absent or of
/// the wrong JSON type. `None` means the key is absent; an explicit `null`
/// is kept as `Some(Value::Null)` and fails the field's own range check.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCalculationInput {
    #[serde(default, deserialize_with = "present")]
    pub principal: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    pub rate: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    pub years: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    pub frequency: Option<serde_json::Value>,
}

// 只要 key 存在就視為有值（包含 null）
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub principal: f64,
    /// Annual rate in percent, `0..=100`.
    pub rate: f64,
    pub years: f64,
    /// Compounding periods per year.
    pub frequency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    pub result: f64,
    pub principal: f64,
    pub rate: f64,
    pub years: f64,
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    pub fn periods(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semi-annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }

    /// Exact set membership; `12.5` or `12.000001` do not match.
    pub fn from_periods(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|frequency| f64::from(frequency.periods()) == value)
    }
}
