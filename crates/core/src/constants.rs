//! Constants used throughout the board core crate.
//!
//! This module centralises the status values and column/table names the board
//! exchanges with the data service, to ensure consistency across the codebase
//! and make maintenance easier.

/// Status value marking a patient admission or consultation as ongoing.
pub const STATUS_ACTIVE: &str = "Active";

/// Status value written to a patient row on discharge.
pub const STATUS_DISCHARGED: &str = "Discharged";

/// Status value written to a consultation row on completion.
pub const STATUS_COMPLETED: &str = "Completed";

/// Default logical table holding patient admissions.
pub const DEFAULT_PATIENTS_TABLE: &str = "patients";

/// Default logical table holding consultations.
pub const DEFAULT_CONSULTATIONS_TABLE: &str = "consultations";

/// Identifier column shared by both tables.
pub const COL_MRN: &str = "mrn";

/// Status column shared by both tables.
pub const COL_STATUS: &str = "status";

/// Update-timestamp column shared by both tables.
pub const COL_UPDATED_AT: &str = "updated_at";

/// Admission date column; the patient load is ordered by it, newest first.
pub const COL_ADMISSION_DATE: &str = "admission_date";

/// Creation timestamp column; the consultation load is ordered by it, newest first.
pub const COL_CREATED_AT: &str = "created_at";

/// Discharge columns written to a patient row only.
pub const COL_DISCHARGE_DATE: &str = "discharge_date";
pub const COL_DISCHARGE_TIME: &str = "discharge_time";
pub const COL_DISCHARGE_NOTE: &str = "discharge_note";

/// Columns selected when loading patient rows.
pub const PATIENT_COLUMNS: &[&str] = &[
    "mrn",
    "name",
    "admission_date",
    "admission_time",
    "status",
    "specialty",
];

/// Columns selected when loading consultation rows.
pub const CONSULTATION_COLUMNS: &[&str] = &[
    "mrn",
    "name",
    "created_at",
    "status",
    "consultation_specialty",
];
