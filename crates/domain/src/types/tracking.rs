//! Order-tracking log entries
//!
//! Mirrors a row of the `KANBAN_TRACKING` worksheet. A part can appear many
//! times, once per order event. The two lifecycle tags are modelled as
//! closed variants so lane predicates are exhaustive matches instead of
//! string comparisons.

use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_PO_SUBMITTED, STATUS_RECEIVED, TIPE_KANBAN_INTERNAL};
use crate::impl_tag_conversions;
use crate::utils::lenient;

/// Lifecycle status of an order event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackingStatus {
    /// "PO Diajukan": purchase order submitted
    Submitted,
    /// "Sudah Diterima": goods received
    Received,
    /// Any value that is not one of the tags above, kept verbatim.
    ///
    /// Build statuses with `TrackingStatus::from`, which maps the named tags
    /// to their variants. `Other("PO Diajukan")` constructed by hand is not
    /// `Submitted` and matches no lane.
    Other(String),
}

impl_tag_conversions!(TrackingStatus {
    Submitted => STATUS_PO_SUBMITTED,
    Received => STATUS_RECEIVED,
});

impl Default for TrackingStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Which kanban board an order event belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KanbanType {
    /// "INTERNAL"
    Internal,
    /// Any value other than "INTERNAL" (e.g. "EXTERNAL"), kept verbatim.
    ///
    /// Build with `KanbanType::from`; `Other("INTERNAL")` constructed by hand
    /// is not `Internal`.
    Other(String),
}

impl_tag_conversions!(KanbanType {
    Internal => TIPE_KANBAN_INTERNAL,
});

impl Default for KanbanType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// One order event for a spare part
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingRecord {
    /// Entry date
    #[serde(deserialize_with = "lenient::string")]
    pub tanggal: String,

    /// Purchase-request reference
    #[serde(deserialize_with = "lenient::string")]
    pub pr: String,

    /// Purchase-order reference
    #[serde(deserialize_with = "lenient::string")]
    pub po: String,

    #[serde(rename = "tipekanban", deserialize_with = "lenient::tag")]
    pub tipe_kanban: KanbanType,

    #[serde(rename = "kodepart", deserialize_with = "lenient::string")]
    pub kode_part: String,

    #[serde(deserialize_with = "lenient::string")]
    pub part: String,

    #[serde(rename = "untukbulan", deserialize_with = "lenient::string")]
    pub untuk_bulan: String,

    #[serde(rename = "qtyorder", deserialize_with = "lenient::number")]
    pub qty_order: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub uom: String,

    #[serde(deserialize_with = "lenient::string")]
    pub satuan: String,

    #[serde(deserialize_with = "lenient::string")]
    pub harga: String,

    #[serde(deserialize_with = "lenient::string")]
    pub supplier: String,

    #[serde(rename = "tanggalpr", deserialize_with = "lenient::string")]
    pub tanggal_pr: String,

    #[serde(rename = "tanggalpo", deserialize_with = "lenient::string")]
    pub tanggal_po: String,

    #[serde(rename = "leadtimehari", deserialize_with = "lenient::number")]
    pub lead_time_hari: Option<f64>,

    /// Expected arrival
    #[serde(deserialize_with = "lenient::string")]
    pub eta: String,

    #[serde(rename = "tanggalreceipt", deserialize_with = "lenient::string")]
    pub tanggal_receipt: String,

    #[serde(rename = "noreceipt", deserialize_with = "lenient::string")]
    pub no_receipt: String,

    #[serde(deserialize_with = "lenient::tag")]
    pub status: TrackingStatus,

    #[serde(deserialize_with = "lenient::string")]
    pub keterangan: String,

    /// Person in charge
    #[serde(deserialize_with = "lenient::string")]
    pub pic: String,
}

impl TrackingRecord {
    pub fn is_internal(&self) -> bool {
        matches!(self.tipe_kanban, KanbanType::Internal)
    }
}
