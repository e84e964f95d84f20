//! Request and response bodies for the board REST API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One record as shown in the board list.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct RecordView {
    /// Medical record number.
    pub mrn: String,
    /// Display name.
    pub name: String,
    /// Origin tag: "patient" or "consultation".
    pub kind: String,
    /// Specialty the record is filed under.
    pub specialty: String,
    /// Admission date (patients) or creation timestamp (consultations).
    pub reference_date: String,
}

/// Response to a board load.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct LoadRes {
    /// Number of active records committed to the board.
    pub loaded: usize,
}

/// Query parameters for the record list.
#[derive(Clone, Debug, Deserialize, IntoParams)]
pub struct RecordsQuery {
    /// Free-text search over name and identifier.
    pub search: Option<String>,
    /// Exact specialty selection; omit for "All".
    pub specialty: Option<String>,
}

/// Response listing the visible records.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct ListRecordsRes {
    pub records: Vec<RecordView>,
}

/// The discharge form as seeded or edited.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct DischargeFormView {
    /// Discharge date (YYYY-MM-DD).
    pub date: String,
    /// Discharge time (HH:MM).
    pub time: String,
    /// Free-text note, persisted for patients only.
    pub note: String,
}

/// Response to selecting a record.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct SelectRes {
    pub record: RecordView,
    /// The form seeded with the current date and time.
    pub form: DischargeFormView,
}

/// Discharge submission.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct DischargeReq {
    /// Discharge date (YYYY-MM-DD). Required.
    pub date: String,
    /// Discharge time (HH:MM). Required.
    pub time: String,
    /// Optional free-text note, persisted for patients only.
    #[serde(default)]
    pub note: String,
}

/// Response to a successful discharge.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct DischargeRes {
    /// Success notification naming the record and its kind.
    pub message: String,
    /// Identifier of the record removed from the board.
    pub mrn: String,
}
