use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A scored expense as listed by `/dashboard/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub expense_id: String,
    pub category: String,
    pub amount: f64,
    pub department: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Model probability in [0, 1].
    pub score: f64,
    pub risk: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Body of `POST /predict` (and each element of `POST /batch`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub expense_id: String,
    pub request_id: String,
    pub requester_id: String,
    pub traveller_id: String,
    pub approver_id: String,
    pub request_date: String,
    pub travel_date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub job_title: String,
    pub department: String,
    pub approval_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub risk: String,
    /// Anomaly warnings in server order. Anything other than an array is
    /// treated as absent.
    #[serde(default, deserialize_with = "lenient_flags")]
    pub flags: Option<Vec<String>>,
    #[serde(default)]
    pub model: Option<String>,
}

impl ScoreResponse {
    /// Flags joined for display, or `None` when there is nothing to warn about.
    pub fn flags_text(&self) -> Option<String> {
        self.flags
            .as_ref()
            .filter(|flags| !flags.is_empty())
            .map(|flags| format!("Flags: {}", flags.join(", ")))
    }
}

fn lenient_flags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Point-in-time model quality metrics, keyed by metric name.
pub type MetricsSnapshot = serde_json::Map<String, Value>;

#[derive(Debug, Default, Deserialize)]
pub struct ItemsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ExpenseRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: MetricsSnapshot,
}

/// One result of `POST /batch`, in request order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchScore {
    pub score: f64,
    pub risk: String,
    #[serde(default, deserialize_with = "lenient_flags")]
    pub flags: Option<Vec<String>>,
}

/// Whitelisted risk classification. Display classes are derived from this,
/// never from the label text the server sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Risk {
    Low,
    Medium,
    High,
    Unknown,
}

impl Risk {
    /// Map a server label onto the closed set. Accepts the English labels and
    /// the Portuguese bands the scoring service emits.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" | "baixo" | "muito_baixo" => Risk::Low,
            "medium" | "medio" | "médio" => Risk::Medium,
            "high" | "alto" => Risk::High,
            _ => Risk::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Risk::Low => "low",
            Risk::Medium => "medium",
            Risk::High => "high",
            Risk::Unknown => "unknown",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Risk::Low => "risk-low",
            Risk::Medium => "risk-medium",
            Risk::High => "risk-high",
            Risk::Unknown => "risk-unknown",
        }
    }
}
