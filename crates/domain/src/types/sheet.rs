//! Envelope returned by the sheets endpoint

use serde::{Deserialize, Serialize};

/// `{ success, data }` body of `GET /api/sheets?worksheet=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetResponse<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Optional diagnostic sent alongside `success: false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> SheetResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self { success: true, data, error: None }
    }

    /// Records to classify. A failed response contributes no records even if
    /// it carried a `data` array.
    pub fn into_records(self) -> Vec<T> {
        if self.success {
            self.data
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_response_yields_no_records() {
        let response: SheetResponse<u32> =
            serde_json::from_str(r#"{"success": false, "data": [1, 2]}"#).unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let response: SheetResponse<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_ok_response_keeps_order() {
        assert_eq!(SheetResponse::ok(vec![3, 1, 2]).into_records(), vec![3, 1, 2]);
    }
}
