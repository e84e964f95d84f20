//! Board session state.
//!
//! Holds the loaded record list, the current selection and the discharge
//! form for one board session. The list is the sole client-side cache: it is
//! replaced wholesale by a successful load and only ever pruned between
//! loads, so records added or changed by other actors stay invisible until
//! the next load.
//!
//! Selection lifecycle: unselected -> selected (seeds the form date and time
//! from the wall clock and clears any prior note) -> discharged (record
//! pruned, selection and form cleared) or back to selected unchanged when
//! the mutation fails.

use crate::discharge::{DischargeForm, DischargeOutcome};
use crate::filter::visible_records;
use crate::records::ActiveRecord;
use crate::{BoardError, BoardResult};
use board_types::{RecordKind, Specialty};
use chrono::{DateTime, Local};

/// In-memory state for one board session.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    records: Vec<ActiveRecord>,
    selected: Option<(RecordKind, String)>,
    form: DischargeForm,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record list with a freshly loaded one.
    ///
    /// Clears the selection and the form: the previous selection may not
    /// exist in the new list.
    pub fn commit_load(&mut self, records: Vec<ActiveRecord>) {
        self.records = records;
        self.selected = None;
        self.form = DischargeForm::default();
    }

    /// All records currently on the board.
    pub fn records(&self) -> &[ActiveRecord] {
        &self.records
    }

    /// The visible subset for the given search text and specialty selection.
    pub fn visible(&self, search: &str, selection: Option<Specialty>) -> Vec<ActiveRecord> {
        visible_records(&self.records, search, selection)
    }

    /// Select the record with the given identifier, seeding the form from
    /// the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::UnknownRecord` when no record on the board has
    /// that identifier.
    pub fn select(&mut self, mrn: &str) -> BoardResult<&ActiveRecord> {
        self.select_at(mrn, Local::now())
    }

    /// Select the record with the given identifier, seeding the form date and
    /// time from `now` and clearing any previously entered note. Re-selection
    /// re-seeds the form regardless of which record was selected before.
    pub fn select_at(&mut self, mrn: &str, now: DateTime<Local>) -> BoardResult<&ActiveRecord> {
        let record = self
            .records
            .iter()
            .find(|record| record.mrn() == mrn)
            .ok_or_else(|| BoardError::UnknownRecord(mrn.to_owned()))?;

        self.selected = Some((record.kind(), record.mrn().to_owned()));
        self.form = DischargeForm::seeded(now);
        Ok(record)
    }

    /// The currently selected record, if any.
    pub fn selected_record(&self) -> Option<&ActiveRecord> {
        let (kind, mrn) = self.selected.as_ref()?;
        self.records
            .iter()
            .find(|record| record.kind() == *kind && record.mrn() == mrn)
    }

    /// The current discharge form.
    pub fn form(&self) -> &DischargeForm {
        &self.form
    }

    /// Replace the discharge form with user-entered values.
    pub fn set_form(&mut self, form: DischargeForm) {
        self.form = form;
    }

    /// Prune the discharged record and clear the selection and form.
    ///
    /// Only the record matching the outcome's kind AND identifier is removed;
    /// an identifier collision across the two tables cannot prune the wrong
    /// record.
    pub fn complete_discharge(&mut self, outcome: &DischargeOutcome) {
        self.records
            .retain(|record| !(record.kind() == outcome.kind && record.mrn() == outcome.mrn));
        self.selected = None;
        self.form = DischargeForm::default();
    }
}
