use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("Invalid RF version {value:?}: not an integer")]
    InvalidRfVersion { value: String },
    #[error("RF version {value:?} is out of range")]
    RfVersionOutOfRange { value: String },
}

pub type InitResult<T> = Result<T, InitError>;
