//! Board record types.
//!
//! This module defines the wire rows read from the two data service tables
//! and the tagged union the board holds them in. The union exists only in
//! memory for the lifetime of a board session; it is never written back in
//! this shape.

use board_types::RecordKind;
use serde::{Deserialize, Serialize};

/// A patient admission row as read from the patients table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PatientRow {
    /// Medical record number, the unique identifier and update key.
    pub mrn: String,

    /// Display name.
    pub name: String,

    /// Admission date (YYYY-MM-DD).
    pub admission_date: String,

    /// Admission time (HH:MM).
    pub admission_time: String,

    /// Free-text status; "Active" and "Discharged" are the meaningful values.
    pub status: String,

    /// Specialty the admission is filed under.
    pub specialty: String,
}

/// A consultation row as read from the consultations table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConsultationRow {
    /// Medical record number; shares the identifier space with patients by
    /// convention only, nothing enforces it.
    pub mrn: String,

    /// Display name.
    pub name: String,

    /// Creation timestamp (RFC 3339).
    pub created_at: String,

    /// Free-text status; "Active" and "Completed" are the meaningful values.
    pub status: String,

    /// Specialty the consultation is filed under.
    pub consultation_specialty: String,
}

/// A record on the board: a patient admission or a consultation, tagged with
/// its origin table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveRecord {
    Patient(PatientRow),
    Consultation(ConsultationRow),
}

impl ActiveRecord {
    /// The discriminant tag for this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            ActiveRecord::Patient(_) => RecordKind::Patient,
            ActiveRecord::Consultation(_) => RecordKind::Consultation,
        }
    }

    /// The record identifier used as the update key.
    pub fn mrn(&self) -> &str {
        match self {
            ActiveRecord::Patient(row) => &row.mrn,
            ActiveRecord::Consultation(row) => &row.mrn,
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        match self {
            ActiveRecord::Patient(row) => &row.name,
            ActiveRecord::Consultation(row) => &row.name,
        }
    }

    /// The specialty field appropriate to the discriminant.
    pub fn specialty(&self) -> &str {
        match self {
            ActiveRecord::Patient(row) => &row.specialty,
            ActiveRecord::Consultation(row) => &row.consultation_specialty,
        }
    }

    /// The status field as last read from the service.
    pub fn status(&self) -> &str {
        match self {
            ActiveRecord::Patient(row) => &row.status,
            ActiveRecord::Consultation(row) => &row.status,
        }
    }

    /// The date shown beside the record in the list: the admission date for
    /// patients, the creation timestamp for consultations.
    pub fn reference_date(&self) -> &str {
        match self {
            ActiveRecord::Patient(row) => &row.admission_date,
            ActiveRecord::Consultation(row) => &row.created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn patient(mrn: &str, name: &str, specialty: &str) -> ActiveRecord {
        ActiveRecord::Patient(PatientRow {
            mrn: mrn.to_owned(),
            name: name.to_owned(),
            admission_date: "2024-01-02".to_owned(),
            admission_time: "14:05".to_owned(),
            status: "Active".to_owned(),
            specialty: specialty.to_owned(),
        })
    }

    pub(crate) fn consultation(mrn: &str, name: &str, specialty: &str) -> ActiveRecord {
        ActiveRecord::Consultation(ConsultationRow {
            mrn: mrn.to_owned(),
            name: name.to_owned(),
            created_at: "2024-01-03T09:00:00Z".to_owned(),
            status: "Active".to_owned(),
            consultation_specialty: specialty.to_owned(),
        })
    }

    #[test]
    fn accessors_follow_the_discriminant() {
        let admission = patient("MRN100", "Jane Doe", "Neurology");
        assert_eq!(admission.kind(), RecordKind::Patient);
        assert_eq!(admission.specialty(), "Neurology");
        assert_eq!(admission.reference_date(), "2024-01-02");

        let consult = consultation("MRN200", "John Roe", "Haematology");
        assert_eq!(consult.kind(), RecordKind::Consultation);
        assert_eq!(consult.specialty(), "Haematology");
        assert_eq!(consult.reference_date(), "2024-01-03T09:00:00Z");
    }

    #[test]
    fn patient_row_decodes_from_service_json() {
        let row: PatientRow = serde_json::from_value(serde_json::json!({
            "mrn": "MRN100",
            "name": "Jane Doe",
            "admission_date": "2024-01-02",
            "admission_time": "14:05",
            "status": "Active",
            "specialty": "Neurology"
        }))
        .expect("decode patient row");
        assert_eq!(row.mrn, "MRN100");
        assert_eq!(row.specialty, "Neurology");
    }
}
