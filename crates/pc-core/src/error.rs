use thiserror::Error;

pub type PcResult<T> = Result<T, PcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
