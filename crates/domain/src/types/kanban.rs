//! Current replenishment state, one record per spare part
//!
//! Mirrors a row of the `KANBAN_INTERNAL` worksheet. Every cell is kept as
//! the raw string the sheet produced, so a malformed cell never fails the
//! record.

use serde::{Deserialize, Serialize};

use crate::utils::lenient::{self, parse_number};

/// Replenishment state for one spare part
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanRecord {
    /// Part identifier, unique within one fetch
    #[serde(rename = "kodepart", deserialize_with = "lenient::string")]
    pub kode_part: String,

    /// Display name
    #[serde(deserialize_with = "lenient::string")]
    pub part: String,

    #[serde(deserialize_with = "lenient::string")]
    pub category: String,

    /// Machine the part belongs to
    #[serde(deserialize_with = "lenient::string")]
    pub mesin: String,

    #[serde(deserialize_with = "lenient::string")]
    pub supplier: String,

    /// Deadline to place the next order. Empty means no order is pending.
    #[serde(rename = "deadlinepemesanan", deserialize_with = "lenient::string")]
    pub deadline_pemesanan: String,

    /// Quantity that has to be ordered
    #[serde(rename = "qtyyangdipesan", deserialize_with = "lenient::string")]
    pub qty_yang_dipesan: String,

    #[serde(rename = "qtykebutuhanreorder", deserialize_with = "lenient::string")]
    pub qty_kebutuhan_reorder: String,

    #[serde(rename = "qtykebutuhanselanjutnya", deserialize_with = "lenient::string")]
    pub qty_kebutuhan_selanjutnya: String,

    #[serde(rename = "onhandinventory", deserialize_with = "lenient::string")]
    pub on_hand_inventory: String,

    #[serde(rename = "reordermin", deserialize_with = "lenient::string")]
    pub reorder_min: String,

    #[serde(rename = "reordermax", deserialize_with = "lenient::string")]
    pub reorder_max: String,

    /// Lead time in days
    #[serde(rename = "leadtime(hari)", deserialize_with = "lenient::string")]
    pub lead_time_hari: String,

    /// Target month label, e.g. "Mei 2024"
    #[serde(rename = "untukbulan", deserialize_with = "lenient::string")]
    pub untuk_bulan: String,

    /// Free-text status from the sheet
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

impl KanbanRecord {
    /// Whether the part is waiting for an order to be placed.
    ///
    /// The deadline cell is the sole discriminator: any non-empty value,
    /// parsable or not, means an order is pending.
    pub fn needs_ordering(&self) -> bool {
        !self.deadline_pemesanan.is_empty()
    }

    /// Quantity to order as a number, `None` when the cell is empty or
    /// not numeric
    pub fn quantity_to_order(&self) -> Option<f64> {
        parse_number(&self.qty_yang_dipesan)
    }
}
