//! Discharge form handling and update construction.
//!
//! This module validates the submitted form and builds the per-discriminant
//! update statement: patients are marked "Discharged" with the submitted
//! date/time and note; consultations are marked "Completed" with only the
//! update timestamp. Both updates filter on the identifier AND the active
//! status, so a record already discharged by another actor matches zero rows
//! instead of being silently rewritten.

use crate::constants::{
    COL_DISCHARGE_DATE, COL_DISCHARGE_NOTE, COL_DISCHARGE_TIME, COL_MRN, COL_STATUS,
    COL_UPDATED_AT, STATUS_ACTIVE, STATUS_COMPLETED, STATUS_DISCHARGED,
};
use crate::records::ActiveRecord;
use crate::{BoardError, BoardResult, CoreConfig};
use board_datasource::UpdateQuery;
use board_types::{NonEmptyText, RecordKind};
use chrono::{DateTime, Local, Utc};

/// The discharge form as presented to the user.
///
/// Selecting a record seeds the date and time from the wall clock; the note
/// starts empty and is only persisted for patients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DischargeForm {
    /// Discharge date (YYYY-MM-DD). Required.
    pub date: String,
    /// Discharge time (HH:MM). Required.
    pub time: String,
    /// Optional free-text note, persisted for patients only.
    pub note: String,
}

impl DischargeForm {
    /// A form seeded with the current date and time and an empty note, as
    /// happens when a record is selected.
    pub fn seeded(now: DateTime<Local>) -> Self {
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            note: String::new(),
        }
    }

    /// Validate the form into the values a mutation may carry.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::MissingDischargeDate` or
    /// `BoardError::MissingDischargeTime` when a required field is empty or
    /// whitespace. No network call may be made on either error.
    pub fn validate(&self) -> BoardResult<ValidDischarge> {
        let date =
            NonEmptyText::new(&self.date).map_err(|_| BoardError::MissingDischargeDate)?;
        let time =
            NonEmptyText::new(&self.time).map_err(|_| BoardError::MissingDischargeTime)?;

        Ok(ValidDischarge {
            date,
            time,
            note: self.note.clone(),
        })
    }
}

/// A validated discharge submission.
#[derive(Clone, Debug)]
pub struct ValidDischarge {
    pub date: NonEmptyText,
    pub time: NonEmptyText,
    pub note: String,
}

/// What a successful discharge reports back for the notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DischargeOutcome {
    pub mrn: String,
    pub name: String,
    pub kind: RecordKind,
}

impl DischargeOutcome {
    /// The user-facing success message, naming the record and its kind.
    pub fn message(&self) -> String {
        match self.kind {
            RecordKind::Patient => {
                format!("Discharged patient {} ({})", self.name, self.mrn)
            }
            RecordKind::Consultation => {
                format!("Completed consultation {} ({})", self.name, self.mrn)
            }
        }
    }
}

/// Build the update statement for `record` given a validated submission.
///
/// The statement is chosen by the record's discriminant and always filters on
/// both the identifier and the active status.
pub fn build_discharge_update(
    record: &ActiveRecord,
    submission: &ValidDischarge,
    now: DateTime<Utc>,
    cfg: &CoreConfig,
) -> UpdateQuery {
    let updated_at = now.to_rfc3339();

    match record {
        ActiveRecord::Patient(row) => UpdateQuery::table(cfg.patients_table())
            .set(COL_STATUS, STATUS_DISCHARGED)
            .set(COL_DISCHARGE_DATE, submission.date.as_str())
            .set(COL_DISCHARGE_TIME, submission.time.as_str())
            .set(COL_DISCHARGE_NOTE, submission.note.as_str())
            .set(COL_UPDATED_AT, updated_at)
            .filter_eq(COL_MRN, row.mrn.as_str())
            .filter_eq(COL_STATUS, STATUS_ACTIVE),
        ActiveRecord::Consultation(row) => UpdateQuery::table(cfg.consultations_table())
            .set(COL_STATUS, STATUS_COMPLETED)
            .set(COL_UPDATED_AT, updated_at)
            .filter_eq(COL_MRN, row.mrn.as_str())
            .filter_eq(COL_STATUS, STATUS_ACTIVE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::{consultation, patient};
    use chrono::TimeZone;

    fn config() -> CoreConfig {
        CoreConfig::new(
            "https://db.example.net/rest/v1".into(),
            None,
            "patients".into(),
            "consultations".into(),
        )
        .expect("valid config")
    }

    fn submission() -> ValidDischarge {
        DischargeForm {
            date: "2024-01-05".into(),
            time: "09:30".into(),
            note: "home with support".into(),
        }
        .validate()
        .expect("valid form")
    }

    #[test]
    fn seeded_form_carries_current_date_and_time() {
        let now = Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 12).unwrap();
        let form = DischargeForm::seeded(now);
        assert_eq!(form.date, "2024-01-05");
        assert_eq!(form.time, "09:30");
        assert!(form.note.is_empty());
    }

    #[test]
    fn missing_date_or_time_fails_validation() {
        let form = DischargeForm {
            date: String::new(),
            time: "09:30".into(),
            note: String::new(),
        };
        assert!(matches!(
            form.validate(),
            Err(BoardError::MissingDischargeDate)
        ));

        let form = DischargeForm {
            date: "2024-01-05".into(),
            time: "   ".into(),
            note: String::new(),
        };
        assert!(matches!(
            form.validate(),
            Err(BoardError::MissingDischargeTime)
        ));
    }

    #[test]
    fn empty_note_is_valid() {
        let form = DischargeForm {
            date: "2024-01-05".into(),
            time: "09:30".into(),
            note: String::new(),
        };
        let valid = form.validate().expect("empty note allowed");
        assert!(valid.note.is_empty());
    }

    #[test]
    fn patient_update_sets_discharge_fields_and_guards_on_active() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 31, 0).unwrap();
        let update = build_discharge_update(
            &patient("MRN100", "Jane Doe", "Neurology"),
            &submission(),
            now,
            &config(),
        );

        assert_eq!(update.table_name(), "patients");
        assert_eq!(update.set_columns()["status"], "Discharged");
        assert_eq!(update.set_columns()["discharge_date"], "2024-01-05");
        assert_eq!(update.set_columns()["discharge_time"], "09:30");
        assert_eq!(update.set_columns()["discharge_note"], "home with support");
        assert_eq!(update.set_columns()["updated_at"], now.to_rfc3339());
        assert_eq!(
            update.eq_filters(),
            [
                ("mrn".to_owned(), "MRN100".to_owned()),
                ("status".to_owned(), "Active".to_owned())
            ]
        );
    }

    #[test]
    fn consultation_update_never_carries_discharge_fields() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 31, 0).unwrap();
        let update = build_discharge_update(
            &consultation("MRN200", "John Roe", "Haematology"),
            &submission(),
            now,
            &config(),
        );

        assert_eq!(update.table_name(), "consultations");
        assert_eq!(update.set_columns()["status"], "Completed");
        assert_eq!(update.set_columns()["updated_at"], now.to_rfc3339());
        assert!(!update.sets_column("discharge_date"));
        assert!(!update.sets_column("discharge_time"));
        assert!(!update.sets_column("discharge_note"));
        assert_eq!(
            update.eq_filters(),
            [
                ("mrn".to_owned(), "MRN200".to_owned()),
                ("status".to_owned(), "Active".to_owned())
            ]
        );
    }

    #[test]
    fn outcome_message_names_record_and_kind() {
        let outcome = DischargeOutcome {
            mrn: "MRN100".into(),
            name: "Jane Doe".into(),
            kind: RecordKind::Patient,
        };
        assert_eq!(outcome.message(), "Discharged patient Jane Doe (MRN100)");

        let outcome = DischargeOutcome {
            mrn: "MRN200".into(),
            name: "John Roe".into(),
            kind: RecordKind::Consultation,
        };
        assert_eq!(
            outcome.message(),
            "Completed consultation John Roe (MRN200)"
        );
    }
}
