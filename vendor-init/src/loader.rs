//! Vendor property loading
//!
//! Runs once while init loads the vendor properties. Reads the device
//! codename and RF version, resolves them through the regional table and
//! rewrites the matching read-only identity properties.

use crate::constants::{
    DEVICE_PROP, PRODUCT_MODEL_PROP, RF_VERSION_DEFAULT, RF_VERSION_PROP, SOURCE_PARTITIONS,
};
use crate::error::InitResult;
use crate::rf_version::parse_rf_version;
use crate::table::{Lookup, Override, lookup};
use log::{debug, error, info};
use oplus_sysprop::{PropertyStore, get_property_or, override_property};
use serde::Serialize;

/// Name of a build property for a given source partition.
///
/// `product` selects the `ro.product.<source><prop>` family, otherwise the
/// `ro.<source>build.<prop>` family is used.
pub fn ro_build_prop(source: &str, prop: &str, product: bool) -> String {
    if product {
        format!("ro.product.{source}{prop}")
    } else {
        format!("ro.{source}build.{prop}")
    }
}

/// Property writes needed to apply `action`, in order
pub fn override_writes(action: &Override) -> Vec<(String, &'static str)> {
    match *action {
        Override::Full {
            model,
            name,
            marketname,
        } => SOURCE_PARTITIONS
            .iter()
            .flat_map(|source| {
                [
                    (ro_build_prop(source, "model", true), model),
                    (ro_build_prop(source, "name", true), name),
                    (ro_build_prop(source, "marketname", true), marketname),
                ]
            })
            .collect(),
        Override::ModelOnly { model } => vec![(PRODUCT_MODEL_PROP.to_owned(), model)],
    }
}

/// A single attempted property write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropWrite {
    pub key: String,
    pub value: String,
    /// Error text when the store refused the write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What a vendor property loading pass did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub device: String,
    pub rf_version: i32,
    pub lookup: Lookup,
    pub writes: Vec<PropWrite>,
}

impl Report {
    /// Number of writes the store rejected
    pub fn failures(&self) -> usize {
        self.writes.iter().filter(|w| w.error.is_some()).count()
    }
}

fn apply<S: PropertyStore>(store: &mut S, action: &Override) -> Vec<PropWrite> {
    override_writes(action)
        .into_iter()
        .map(|(key, value)| {
            let error = match override_property(store, &key, value) {
                Ok(()) => None,
                Err(e) => {
                    error!("Failed to override {key}: {e}");
                    Some(e.to_string())
                }
            };
            PropWrite {
                key,
                value: value.to_owned(),
                error,
            }
        })
        .collect()
}

/// Apply the regional identity for this device to `store`.
///
/// A missing RF version reads as 0, which is not a known code and only
/// logs an error. A value that is not an integer aborts before any write.
pub fn vendor_load_properties<S: PropertyStore>(store: &mut S) -> InitResult<Report> {
    let device = get_property_or(store, DEVICE_PROP, "");
    let raw_rf_version = get_property_or(store, RF_VERSION_PROP, RF_VERSION_DEFAULT);
    let rf_version = parse_rf_version(&raw_rf_version)?;

    let lookup = lookup(rf_version, &device);
    let writes = match lookup {
        Lookup::Apply { region, action } => {
            info!("Applying {region} identity for {device} (RF version {rf_version})");
            apply(store, &action)
        }
        Lookup::UnknownDevice { region } => {
            debug!("No {region} override for device {device:?}");
            Vec::new()
        }
        Lookup::UnknownRfVersion => {
            error!("Unexpected RF version: {rf_version}");
            Vec::new()
        }
    };

    Ok(Report {
        device,
        rf_version,
        lookup,
        writes,
    })
}
