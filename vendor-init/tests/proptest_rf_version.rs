//! Property-based tests for RF version handling
//!
//! The value comes straight from the bootloader command line, so the parser
//! must never panic and a pass must never write for codes outside the table.

use oplus_init::constants::{DEVICE_PROP, RF_VERSION_PROP};
use oplus_init::rf_version::parse_rf_version;
use oplus_init::table::{lookup, region_for};
use oplus_init::{InitError, Lookup, vendor_load_properties};
use oplus_sysprop::MemoryStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse_rf_version(&input);
    }

    #[test]
    fn parse_matches_display(code in any::<i32>()) {
        prop_assert_eq!(parse_rf_version(&code.to_string()), Ok(code));
    }

    #[test]
    fn parse_ignores_trailing_text(code in 0i32..1000, suffix in "[a-z. ][a-z0-9 ]{0,8}") {
        prop_assert_eq!(parse_rf_version(&format!(" {code}{suffix}")), Ok(code));
    }

    #[test]
    fn unknown_codes_never_write(code in any::<i32>(), device in "[A-Za-z0-9]{0,12}") {
        prop_assume!(region_for(code).is_none());

        let mut store: MemoryStore = [
            (DEVICE_PROP, device),
            (RF_VERSION_PROP, code.to_string()),
        ]
        .into_iter()
        .collect();

        let report = vendor_load_properties(&mut store).unwrap();

        prop_assert_eq!(report.lookup, Lookup::UnknownRfVersion);
        prop_assert_eq!(store.writes(), 0);
    }

    #[test]
    fn lookup_is_deterministic(
        code in -5i32..30,
        device in prop::sample::select(vec!["OnePlus9", "OnePlus9Pro", "RMX3360", "lemonade"])
    ) {
        prop_assert_eq!(lookup(code, device), lookup(code, device));
    }

    #[test]
    fn non_numeric_rf_version_is_fatal(value in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
        let mut store: MemoryStore = [
            (DEVICE_PROP, "OnePlus9".to_owned()),
            (RF_VERSION_PROP, value.clone()),
        ]
        .into_iter()
        .collect();

        let err = vendor_load_properties(&mut store).unwrap_err();

        prop_assert_eq!(err, InitError::InvalidRfVersion { value });
        prop_assert_eq!(store.writes(), 0);
    }
}
