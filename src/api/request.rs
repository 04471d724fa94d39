//! Request types for the Employer Cost Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/export` and `/share` endpoints.

use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` and `/export` endpoints.
///
/// The salary is the raw text the user typed; parsing happens server-side
/// so an unparsable value produces the empty state instead of a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The gross annual salary as free text (e.g. "35.000 €").
    pub salary: String,
    /// The sector identifier. Unknown identifiers resolve to office.
    #[serde(default = "default_sector")]
    pub sector: String,
}

fn default_sector() -> String {
    "office".to_string()
}

/// Request body for the `/share` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    /// The calculation inputs.
    #[serde(flatten)]
    pub calculation: CalculationRequest,
    /// The page URL appended to the share text.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{ "salary": "35.000 €", "sector": "construction" }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.salary, "35.000 €");
        assert_eq!(request.sector, "construction");
    }

    #[test]
    fn test_sector_defaults_to_office() {
        let request: CalculationRequest = serde_json::from_str(r#"{ "salary": "1" }"#).unwrap();
        assert_eq!(request.sector, "office");
    }

    #[test]
    fn test_missing_salary_is_rejected() {
        let result = serde_json::from_str::<CalculationRequest>(r#"{ "sector": "office" }"#);
        assert!(result.unwrap_err().to_string().contains("missing field `salary`"));
    }

    #[test]
    fn test_deserialize_share_request() {
        let json = r#"{
            "salary": "48000",
            "sector": "transport",
            "url": "https://cuantolecuestoamijefe.com/"
        }"#;

        let request: ShareRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calculation.salary, "48000");
        assert_eq!(request.calculation.sector, "transport");
        assert_eq!(request.url, "https://cuantolecuestoamijefe.com/");
    }
}
