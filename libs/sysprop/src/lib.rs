//! Android system property access for early-boot vendor code
//!
//! The regular property service refuses to change anything under `ro.`
//! once it has been set. Code running inside init during the vendor
//! property-loading phase owns the property area directly, so it can find
//! an entry and rewrite it in place, or append a new one.
//!
//! This crate exposes that through the [`PropertyStore`] trait:
//! - [`MemoryStore`] keeps properties in a map, for tests and host dry runs
//! - `BionicStore` (Android only) talks to libc's `__system_property_*` API
//!
//! # Example
//! ```
//! use oplus_sysprop::{MemoryStore, PropertyStore, override_property};
//!
//! let mut store = MemoryStore::new();
//! store.seed("ro.product.product.model", "LE2113");
//! override_property(&mut store, "ro.product.product.model", "LE2115").unwrap();
//! assert_eq!(store.get("ro.product.product.model").as_deref(), Some("LE2115"));
//! ```

#[cfg(target_os = "android")]
mod bionic;
pub mod build_prop;
mod error;
mod memory;

#[cfg(target_os = "android")]
pub use bionic::BionicStore;
pub use error::{Error, Result};
pub use memory::MemoryStore;

use log::debug;

/// Maximum value length (including the terminator) for mutable properties.
///
/// Matches `PROP_VALUE_MAX` in bionic's `sys/system_properties.h`.
pub const PROP_VALUE_MAX: usize = 92;

/// Prefix marking a property as read-only for the property service
pub const READ_ONLY_PREFIX: &str = "ro.";

/// Whether `name` falls under the read-only namespace
pub fn is_read_only(name: &str) -> bool {
    name.starts_with(READ_ONLY_PREFIX)
}

/// Low-level property area operations.
///
/// Implementations do not enforce read-only semantics; that is the
/// property service's job and this trait sits below it.
pub trait PropertyStore {
    /// Opaque reference to an existing entry
    type Handle;

    /// Locate an existing property by name
    fn find(&self, name: &str) -> Option<Self::Handle>;

    /// Read the current value behind `handle`
    fn read(&self, handle: &Self::Handle) -> String;

    /// Overwrite the value of an existing entry in place
    fn update(&mut self, handle: &Self::Handle, value: &str) -> Result<()>;

    /// Append a new entry
    fn add(&mut self, name: &str, value: &str) -> Result<()>;

    /// Look up a property and read its value
    fn get(&self, name: &str) -> Option<String> {
        self.find(name).map(|handle| self.read(&handle))
    }
}

/// Read `name`, falling back to `default` when it is unset or empty.
///
/// Mirrors libbase's `GetProperty`, which treats an empty value the same as
/// a missing one.
pub fn get_property_or<S: PropertyStore>(store: &S, name: &str, default: &str) -> String {
    match store.get(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_owned(),
    }
}

/// Set `name` to `value` regardless of any read-only marking.
///
/// Existing entries are rewritten in place; missing ones are added. The new
/// value is visible to the next read of `name`.
pub fn override_property<S: PropertyStore>(store: &mut S, name: &str, value: &str) -> Result<()> {
    validate(name, value)?;

    if let Some(handle) = store.find(name) {
        debug!("Updating {name}={value}");
        store.update(&handle, value)
    } else {
        debug!("Adding {name}={value}");
        store.add(name, value)
    }
}

fn validate(name: &str, value: &str) -> Result<()> {
    if name.is_empty() || name.contains('\0') {
        return Err(Error::InvalidName(name.to_owned()));
    }
    if value.contains('\0') {
        return Err(Error::InvalidValue {
            name: name.to_owned(),
        });
    }
    Ok(())
}
