//! Regional device identity for OPlus vendor init
//!
//! One board ships as several regional SKUs. The bootloader reports which
//! one through `ro.boot.rf_version`, and this crate rewrites the read-only
//! `ro.product.*` identity properties to match before anything else reads
//! them.
//!
//! - [`table`] holds the RF version to model mapping
//! - [`loader`] reads the inputs and applies the overrides through any
//!   [`oplus_sysprop::PropertyStore`]
//!
//! On Android the crate also builds as a static library exporting
//! `oplus_vendor_load_properties` for init's vendor hook.

pub mod constants;
mod error;
#[cfg(target_os = "android")]
mod ffi;
pub mod loader;
pub mod logging;
pub mod rf_version;
pub mod table;

pub use error::{InitError, InitResult};
pub use loader::{PropWrite, Report, vendor_load_properties};
pub use table::{Lookup, Override, Region};
