//! Log output of a vendor property loading pass
//!
//! An unknown RF version must leave an error in the log, while an unknown
//! device under a known RF version stays quiet. Records are captured per
//! thread so the tests can run in parallel under one global logger.

use log::{Level, LevelFilter, Log, Metadata, Record};
use oplus_init::constants::{DEVICE_PROP, RF_VERSION_PROP};
use oplus_init::vendor_load_properties;
use oplus_sysprop::MemoryStore;
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return the records it logged on this thread
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    (result, RECORDS.with(RefCell::take))
}

fn errors(records: &[(Level, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, message)| message.as_str())
        .collect()
}

fn store_with(device: &str, rf_version: &str) -> MemoryStore {
    [(DEVICE_PROP, device), (RF_VERSION_PROP, rf_version)]
        .into_iter()
        .collect()
}

#[test]
fn test_unknown_rf_version_logs_error() {
    let mut store = store_with("OnePlus9", "99");

    let (report, records) = capture(|| vendor_load_properties(&mut store));

    assert!(report.unwrap().writes.is_empty());
    assert_eq!(errors(&records), ["Unexpected RF version: 99"]);
}

#[test]
fn test_missing_rf_version_logs_zero() {
    let mut store = MemoryStore::new();
    store.seed(DEVICE_PROP, "OnePlus9Pro");

    let (_, records) = capture(|| vendor_load_properties(&mut store));

    assert_eq!(errors(&records), ["Unexpected RF version: 0"]);
}

#[test]
fn test_unknown_device_logs_no_error() {
    let mut store = store_with("Unknown", "11");

    let (report, records) = capture(|| vendor_load_properties(&mut store));

    assert!(report.unwrap().writes.is_empty());
    assert!(errors(&records).is_empty(), "unexpected errors: {records:?}");
}

#[test]
fn test_applied_override_logs_info_only() {
    let mut store = store_with("OnePlus9", "13");

    let (_, records) = capture(|| vendor_load_properties(&mut store));

    assert!(errors(&records).is_empty());
    assert!(
        records
            .iter()
            .any(|(level, message)| *level == Level::Info && message.contains("IN identity"))
    );
}

#[test]
fn test_failed_write_logs_error_per_key() {
    let mut store = MemoryStore::with_capacity(2);
    store.seed(DEVICE_PROP, "OnePlus9");
    store.seed(RF_VERSION_PROP, "22");

    let (report, records) = capture(|| vendor_load_properties(&mut store));

    assert_eq!(report.unwrap().failures(), 1);
    let errors = errors(&records);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to override ro.product.product.model"));
}
