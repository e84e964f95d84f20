use board_datasource::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no record is selected")]
    NoSelection,
    #[error("discharge date is required")]
    MissingDischargeDate,
    #[error("discharge time is required")]
    MissingDischargeTime,
    #[error("no record with identifier {0} is on the board")]
    UnknownRecord(String),
    #[error("record {0} is no longer active on the data service")]
    RecordNoLongerActive(String),
    #[error("query failed: {0}")]
    Query(#[from] QueryError),
    #[error("failed to decode a {table} row: {source}")]
    RowDecode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;
