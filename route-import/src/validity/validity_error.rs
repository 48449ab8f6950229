use chrono::NaiveDate;

#[derive(thiserror::Error, Debug)]
pub enum ValidityError {
    #[error("candidate window is missing its start date")]
    MissingStartDateError,
    #[error("candidate window ends before it starts: {start} > {end}")]
    InvalidRangeError { start: NaiveDate, end: NaiveDate },
}
