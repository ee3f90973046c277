//! Link into the purchase-request form for a part that needs ordering

use std::fmt;

use crate::constants::DEFAULT_FORM_PATH;
use crate::types::KanbanRecord;

/// Navigation target for the "Buat PR" action on a Not Started card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequestLink {
    pub code: String,
    pub part: String,
    pub month: String,
    pub vendor: String,
    pub quantity: String,
}

impl PurchaseRequestLink {
    pub fn from_record(record: &KanbanRecord) -> Self {
        Self {
            code: record.kode_part.clone(),
            part: record.part.clone(),
            month: record.untuk_bulan.clone(),
            vendor: record.supplier.clone(),
            quantity: record.qty_yang_dipesan.clone(),
        }
    }

    /// Query parameters in the order the form expects them
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("code", self.code.as_str()),
            ("part", self.part.as_str()),
            ("month", self.month.as_str()),
            ("vendor", self.vendor.as_str()),
            ("quantity", self.quantity.as_str()),
        ]
    }

    /// Render against `form_path`, percent-encoding every value
    pub fn to_url(&self, form_path: &str) -> String {
        let query = self
            .params()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{form_path}?{query}")
    }
}

impl fmt::Display for PurchaseRequestLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url(DEFAULT_FORM_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> KanbanRecord {
        KanbanRecord {
            kode_part: "A1".into(),
            part: "Bearing 6204".into(),
            untuk_bulan: "Mei 2024".into(),
            supplier: "PT Sumber & Co".into(),
            qty_yang_dipesan: "7".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_params_follow_form_order() {
        let link = PurchaseRequestLink::from_record(&record());
        let keys: Vec<_> = link.params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["code", "part", "month", "vendor", "quantity"]);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let link = PurchaseRequestLink::from_record(&record());
        assert_eq!(
            link.to_string(),
            "/form-pr?code=A1&part=Bearing%206204&month=Mei%202024&vendor=PT%20Sumber%20%26%20Co&quantity=7"
        );
    }

    #[test]
    fn test_custom_form_path() {
        let link = PurchaseRequestLink::from_record(&KanbanRecord::default());
        assert_eq!(
            link.to_url("/app/pr/new"),
            "/app/pr/new?code=&part=&month=&vendor=&quantity="
        );
    }
}
