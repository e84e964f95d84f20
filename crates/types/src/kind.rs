//! Discriminant tagging a board record's origin table.

/// Which table a combined board record came from.
///
/// Every record on the board carries exactly one of these tags; the discharge
/// dispatcher uses it to choose between the patient and consultation update
/// statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// An inpatient admission from the patients table.
    Patient,
    /// A consultation from the consultations table.
    Consultation,
}

impl RecordKind {
    /// The lowercase tag used in API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Patient => "patient",
            RecordKind::Consultation => "consultation",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for RecordKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_lowercase_table_names() {
        assert_eq!(RecordKind::Patient.as_str(), "patient");
        assert_eq!(RecordKind::Consultation.as_str(), "consultation");
    }
}
