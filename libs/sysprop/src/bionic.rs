//! Property area access through bionic's libc
//!
//! `__system_property_update` and `__system_property_add` only succeed in
//! the process that owns the writable property area, i.e. init itself.

use crate::{Error, PropertyStore, Result};
use libc::{c_char, c_int, c_uint, c_void};
use std::ffi::{CStr, CString};
use std::ptr::NonNull;

type ReadCallback = unsafe extern "C" fn(
    cookie: *mut c_void,
    name: *const c_char,
    value: *const c_char,
    serial: u32,
);

unsafe extern "C" {
    fn __system_property_find(name: *const c_char) -> *const c_void;
    fn __system_property_update(pi: *mut c_void, value: *const c_char, len: c_uint) -> c_int;
    fn __system_property_add(
        name: *const c_char,
        namelen: c_uint,
        value: *const c_char,
        valuelen: c_uint,
    ) -> c_int;
    fn __system_property_read_callback(
        pi: *const c_void,
        callback: ReadCallback,
        cookie: *mut c_void,
    );
}

unsafe extern "C" fn read_value(
    cookie: *mut c_void,
    _name: *const c_char,
    value: *const c_char,
    _serial: u32,
) {
    // SAFETY: cookie is the &mut String passed by `read`, value is a
    // NUL-terminated string owned by libc for the duration of the call.
    unsafe {
        let out = &mut *cookie.cast::<String>();
        *out = CStr::from_ptr(value).to_string_lossy().into_owned();
    }
}

/// Pointer to a `prop_info` inside the mapped property area
#[derive(Debug, Clone, Copy)]
pub struct PropInfo(NonNull<c_void>);

/// The process-wide property area
#[derive(Debug, Default)]
pub struct BionicStore;

impl BionicStore {
    pub fn new() -> Self {
        Self
    }
}

fn c_len(s: &str) -> Option<c_uint> {
    c_uint::try_from(s.len()).ok()
}

fn too_long(name: String, s: &str) -> Error {
    Error::ValueTooLong {
        name,
        len: s.len(),
        limit: c_uint::MAX as usize,
    }
}

impl PropertyStore for BionicStore {
    type Handle = PropInfo;

    fn find(&self, name: &str) -> Option<PropInfo> {
        let cname = CString::new(name).ok()?;
        // SAFETY: cname is a valid NUL-terminated string.
        let pi = unsafe { __system_property_find(cname.as_ptr()) };
        NonNull::new(pi.cast_mut()).map(PropInfo)
    }

    fn read(&self, handle: &PropInfo) -> String {
        let mut value = String::new();
        // SAFETY: handle came from __system_property_find and prop_info
        // entries are never freed.
        unsafe {
            __system_property_read_callback(
                handle.0.as_ptr(),
                read_value,
                (&raw mut value).cast::<c_void>(),
            );
        }
        value
    }

    fn update(&mut self, handle: &PropInfo, value: &str) -> Result<()> {
        let cvalue = CString::new(value).map_err(|_| Error::InvalidValue {
            name: describe(handle),
        })?;
        let len = c_len(value).ok_or_else(|| too_long(describe(handle), value))?;
        // SAFETY: see `read`; cvalue outlives the call.
        let code = unsafe { __system_property_update(handle.0.as_ptr(), cvalue.as_ptr(), len) };
        if code != 0 {
            return Err(Error::Platform {
                op: "__system_property_update",
                name: describe(handle),
                code,
            });
        }
        Ok(())
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        let cname = CString::new(name).map_err(|_| Error::InvalidName(name.to_owned()))?;
        let cvalue = CString::new(value).map_err(|_| Error::InvalidValue {
            name: name.to_owned(),
        })?;
        let namelen = c_len(name).ok_or_else(|| Error::InvalidName(name.to_owned()))?;
        let valuelen = c_len(value).ok_or_else(|| too_long(name.to_owned(), value))?;
        // SAFETY: both strings are NUL-terminated and live across the call.
        let code =
            unsafe { __system_property_add(cname.as_ptr(), namelen, cvalue.as_ptr(), valuelen) };
        if code != 0 {
            return Err(Error::Platform {
                op: "__system_property_add",
                name: name.to_owned(),
                code,
            });
        }
        Ok(())
    }
}

/// Best-effort name for a handle in error messages
fn describe(handle: &PropInfo) -> String {
    let mut name = String::new();

    unsafe extern "C" fn read_name(
        cookie: *mut c_void,
        name: *const c_char,
        _value: *const c_char,
        _serial: u32,
    ) {
        // SAFETY: same contract as `read_value`.
        unsafe {
            let out = &mut *cookie.cast::<String>();
            *out = CStr::from_ptr(name).to_string_lossy().into_owned();
        }
    }

    // SAFETY: see `read`.
    unsafe {
        __system_property_read_callback(
            handle.0.as_ptr(),
            read_name,
            (&raw mut name).cast::<c_void>(),
        );
    }
    name
}
