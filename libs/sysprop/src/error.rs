use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid property name: {0:?}")]
    InvalidName(String),
    #[error("Value for {name} contains a NUL byte")]
    InvalidValue { name: String },
    #[error("Value for {name} is {len} bytes, limit is {limit}")]
    ValueTooLong {
        name: String,
        len: usize,
        limit: usize,
    },
    #[error("Property area full ({capacity} entries), cannot add {name}")]
    StoreFull { capacity: usize, name: String },
    #[error("{op} failed for {name} (code {code})")]
    Platform {
        op: &'static str,
        name: String,
        code: i32,
    },
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, Error>;
