//! The closed list of clinical specialties recognised by the board.
//!
//! Specialty values travel as plain strings in table rows; this enum exists so
//! that the dropdown/CLI surface and the filter work against a closed set with
//! a single source of truth for the wire spelling.

/// Errors that can occur when parsing a specialty from its wire string.
#[derive(Debug, thiserror::Error)]
pub enum SpecialtyError {
    /// The input did not name a known specialty.
    #[error("unknown specialty: {0}")]
    Unknown(String),
}

/// A clinical specialty a patient admission or consultation is filed under.
///
/// The board's specialty filter compares the selected variant's wire string
/// for exact equality against the record's specialty column; the "All"
/// position of the dropdown is represented by the absence of a selection, not
/// by a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Specialty {
    Cardiology,
    Dermatology,
    Endocrinology,
    Gastroenterology,
    GeneralSurgery,
    Haematology,
    Neurology,
    Obstetrics,
    Oncology,
    Orthopaedics,
    Paediatrics,
}

impl Specialty {
    /// All specialties, in the order the dropdown presents them.
    pub const ALL: [Specialty; 11] = [
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Endocrinology,
        Specialty::Gastroenterology,
        Specialty::GeneralSurgery,
        Specialty::Haematology,
        Specialty::Neurology,
        Specialty::Obstetrics,
        Specialty::Oncology,
        Specialty::Orthopaedics,
        Specialty::Paediatrics,
    ];

    /// The wire spelling stored in table rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Endocrinology => "Endocrinology",
            Specialty::Gastroenterology => "Gastroenterology",
            Specialty::GeneralSurgery => "General Surgery",
            Specialty::Haematology => "Haematology",
            Specialty::Neurology => "Neurology",
            Specialty::Obstetrics => "Obstetrics",
            Specialty::Oncology => "Oncology",
            Specialty::Orthopaedics => "Orthopaedics",
            Specialty::Paediatrics => "Paediatrics",
        }
    }
}

impl std::str::FromStr for Specialty {
    type Err = SpecialtyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .iter()
            .copied()
            .find(|specialty| specialty.as_str() == s)
            .ok_or_else(|| SpecialtyError::Unknown(s.to_owned()))
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Specialty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Specialty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for specialty in Specialty::ALL {
            let parsed: Specialty = specialty.as_str().parse().expect("known wire string");
            assert_eq!(parsed, specialty);
        }
    }

    #[test]
    fn rejects_unknown_specialty() {
        let err = "Telepathy".parse::<Specialty>().expect_err("unknown");
        assert!(matches!(err, SpecialtyError::Unknown(s) if s == "Telepathy"));
    }

    #[test]
    fn dropdown_list_has_eleven_entries() {
        assert_eq!(Specialty::ALL.len(), 11);
    }
}
