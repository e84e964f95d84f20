//! Ward board service and related operations.
//!
//! This module provides the main service for board operations: loading the
//! combined active record list and dispatching discharge mutations.

use crate::constants::{
    COL_ADMISSION_DATE, COL_CREATED_AT, COL_STATUS, CONSULTATION_COLUMNS, PATIENT_COLUMNS,
    STATUS_ACTIVE,
};
use crate::discharge::{build_discharge_update, DischargeForm, DischargeOutcome};
use crate::records::{ActiveRecord, ConsultationRow, PatientRow};
use crate::validation::validate_mrn_safe_for_filter;
use crate::{BoardError, BoardResult, CoreConfig};
use board_datasource::{QueryClient, SelectQuery};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Pure board data operations - no API concerns
#[derive(Clone)]
pub struct WardService<C> {
    cfg: Arc<CoreConfig>,
    client: C,
}

impl<C: QueryClient> WardService<C> {
    /// Creates a new instance of WardService.
    ///
    /// # Returns
    /// A new `WardService` ready to load and discharge records through the
    /// given query client.
    pub fn new(cfg: Arc<CoreConfig>, client: C) -> Self {
        Self { cfg, client }
    }

    /// Load the combined active record list.
    ///
    /// Issues the patient and consultation reads concurrently and joins them:
    /// both must succeed before anything is returned, so a failure of either
    /// read aborts the whole load and the caller's prior state stays as it
    /// was. Patients come first in the combined list, then consultations,
    /// each sub-list ordered newest first by the service.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` if either read fails or a row does not decode.
    pub async fn load_active_records(&self) -> BoardResult<Vec<ActiveRecord>> {
        let patients_query = SelectQuery::table(self.cfg.patients_table())
            .columns(PATIENT_COLUMNS)
            .filter_eq(COL_STATUS, STATUS_ACTIVE)
            .order_desc(COL_ADMISSION_DATE);
        let consultations_query = SelectQuery::table(self.cfg.consultations_table())
            .columns(CONSULTATION_COLUMNS)
            .filter_eq(COL_STATUS, STATUS_ACTIVE)
            .order_desc(COL_CREATED_AT);

        let (patient_rows, consultation_rows) = tokio::try_join!(
            self.client.select(patients_query),
            self.client.select(consultations_query)
        )?;

        let patients: Vec<PatientRow> =
            decode_rows(patient_rows, self.cfg.patients_table())?;
        let consultations: Vec<ConsultationRow> =
            decode_rows(consultation_rows, self.cfg.consultations_table())?;

        let mut records: Vec<ActiveRecord> =
            Vec::with_capacity(patients.len() + consultations.len());
        records.extend(patients.into_iter().map(ActiveRecord::Patient));
        records.extend(consultations.into_iter().map(ActiveRecord::Consultation));

        tracing::info!(count = records.len(), "loaded active records");
        Ok(records)
    }

    /// Discharge or complete `record` according to its discriminant.
    ///
    /// The form is validated before any network call is made. The update
    /// filters on the identifier and the active status; a zero-row result
    /// means the record was already discharged or completed by another actor
    /// and is surfaced as `RecordNoLongerActive` so the caller leaves its
    /// local state untouched.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` on validation failure, query failure, or a
    /// stale record.
    pub async fn discharge(
        &self,
        record: &ActiveRecord,
        form: &DischargeForm,
    ) -> BoardResult<DischargeOutcome> {
        let submission = form.validate()?;
        validate_mrn_safe_for_filter(record.mrn())?;

        let update = build_discharge_update(record, &submission, Utc::now(), &self.cfg);
        let affected = self.client.update(update).await?;

        if affected == 0 {
            return Err(BoardError::RecordNoLongerActive(record.mrn().to_owned()));
        }

        tracing::info!(
            mrn = record.mrn(),
            kind = %record.kind(),
            "record discharged"
        );

        Ok(DischargeOutcome {
            mrn: record.mrn().to_owned(),
            name: record.name().to_owned(),
            kind: record.kind(),
        })
    }
}

fn decode_rows<T: DeserializeOwned>(
    rows: Vec<serde_json::Value>,
    table: &str,
) -> BoardResult<Vec<T>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|source| BoardError::RowDecode {
                table: table.to_owned(),
                source,
            })
        })
        .collect()
}
