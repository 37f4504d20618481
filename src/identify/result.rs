//! Identification results returned by the upload endpoint.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::IdentifyError;

/// Shown in place of a missing descriptive field.
pub const NO_INFORMATION: &str = "No information available";

/// Used when a failed response carries no message of its own.
pub const DEFAULT_FAILURE: &str = "Failed to identify plant";

/// A successful identification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationResult {
    pub plant_name: String,
    pub scientific_name: String,
    /// Where the uploaded image can be viewed.
    pub image_url: String,
    /// Other names, split from the catalog's comma-separated list.
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub medicinal_properties: Option<String>,
    #[serde(default)]
    pub growing_conditions: Option<String>,
    #[serde(default)]
    pub harvesting_guidelines: Option<String>,
    #[serde(default)]
    pub precautions: Option<String>,
}

impl IdentificationResult {
    /// Medicinal properties, or the no-information placeholder.
    #[must_use]
    pub fn medicinal_properties_text(&self) -> &str {
        or_placeholder(self.medicinal_properties.as_deref())
    }

    /// Growing conditions, or the no-information placeholder.
    #[must_use]
    pub fn growing_conditions_text(&self) -> &str {
        or_placeholder(self.growing_conditions.as_deref())
    }

    #[must_use]
    pub fn harvesting_guidelines_text(&self) -> &str {
        or_placeholder(self.harvesting_guidelines.as_deref())
    }

    #[must_use]
    pub fn precautions_text(&self) -> &str {
        or_placeholder(self.precautions.as_deref())
    }
}

fn or_placeholder(text: Option<&str>) -> &str {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => NO_INFORMATION,
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret an endpoint response.
///
/// `ok` is whether the HTTP status was a success. Failed responses yield
/// the endpoint's `error` message when it sent one.
pub fn parse_response(ok: bool, body: &str) -> Result<IdentificationResult, IdentifyError> {
    if ok {
        return Ok(serde_json::from_str(body)?);
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
    warn!(%message, "identification rejected");
    Err(IdentifyError::Rejected(message))
}
