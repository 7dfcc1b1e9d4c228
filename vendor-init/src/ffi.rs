//! C entry point for init's vendor library hook

use crate::loader::vendor_load_properties;
use crate::logging;
use libc::c_int;
use oplus_sysprop::BionicStore;

/// Apply the regional identity to the live property area.
///
/// Returns 0 on success and -1 when the RF version could not be parsed.
#[unsafe(no_mangle)]
pub extern "C" fn oplus_vendor_load_properties() -> c_int {
    logging::init_device();
    let mut store = BionicStore::new();
    match vendor_load_properties(&mut store) {
        Ok(report) => {
            log::debug!("Vendor properties loaded: {} writes", report.writes.len());
            0
        }
        Err(e) => {
            log::error!("Vendor property loading failed: {e}");
            -1
        }
    }
}
