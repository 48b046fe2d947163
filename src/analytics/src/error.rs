use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("MissingInput: {0:?}")]
    MissingInput(String),
    #[error("InvalidNumeric: {field} is {value}")]
    InvalidNumeric { field: &'static str, value: f64 },
}
