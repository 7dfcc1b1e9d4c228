//! Property names read and written during vendor property loading

/// Device codename of the product partition
pub const DEVICE_PROP: &str = "ro.product.product.device";

/// Regional RF variant passed on the kernel command line by the bootloader
pub const RF_VERSION_PROP: &str = "ro.boot.rf_version";

/// Value used when the bootloader did not set an RF version
pub const RF_VERSION_DEFAULT: &str = "0";

/// Model property overridden for carrier/regional variants
pub const PRODUCT_MODEL_PROP: &str = "ro.product.product.model";

/// Namespaces that mirror the product identity.
///
/// The empty prefix is the top-level `ro.product.*` set; the rest are the
/// per-partition copies loaded from each partition's `build.prop`.
pub const SOURCE_PARTITIONS: [&str; 7] = [
    "",
    "bootimage.",
    "odm.",
    "product.",
    "system.",
    "system_ext.",
    "vendor.",
];
