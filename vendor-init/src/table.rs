//! Regional identity table
//!
//! Each RF version the bootloader can report maps to a region and a set of
//! per-device overrides. Anything not listed here is left untouched.

use serde::Serialize;
use std::fmt;

/// Sales region a given RF version is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Eu,
    Cn,
    Tmo,
    In,
    Na,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Eu => "EU",
            Self::Cn => "CN",
            Self::Tmo => "TMO",
            Self::In => "IN",
            Self::Na => "NA",
        };
        f.write_str(label)
    }
}

/// Properties to rewrite for a matching device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Override {
    /// Rewrite model, name and marketname in every partition namespace
    Full {
        model: &'static str,
        name: &'static str,
        marketname: &'static str,
    },
    /// Rewrite only `ro.product.product.model`
    ModelOnly { model: &'static str },
}

/// One RF version and the devices it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfVariant {
    pub code: i32,
    pub region: Region,
    pub devices: &'static [(&'static str, Override)],
}

const fn model_only(model: &'static str) -> Override {
    Override::ModelOnly { model }
}

pub static RF_VARIANTS: &[RfVariant] = &[
    RfVariant {
        code: 2,
        region: Region::Eu,
        devices: &[(
            "RMX3360",
            Override::Full {
                model: "RMX3363",
                name: "RMX3360",
                marketname: "Realme GT Master Edition",
            },
        )],
    },
    RfVariant {
        code: 11,
        region: Region::Cn,
        devices: &[
            ("OnePlus9", model_only("LE2110")),
            ("OnePlus9Pro", model_only("LE2120")),
        ],
    },
    RfVariant {
        code: 12,
        region: Region::Tmo,
        devices: &[
            ("OnePlus9", model_only("LE2117")),
            ("OnePlus9Pro", model_only("LE2127")),
        ],
    },
    RfVariant {
        code: 13,
        region: Region::In,
        devices: &[
            ("OnePlus9", model_only("LE2111")),
            ("OnePlus9Pro", model_only("LE2121")),
        ],
    },
    RfVariant {
        code: 21,
        region: Region::Eu,
        devices: &[
            ("OnePlus9", model_only("LE2113")),
            ("OnePlus9Pro", model_only("LE2123")),
        ],
    },
    RfVariant {
        code: 22,
        region: Region::Na,
        devices: &[
            ("OnePlus9", model_only("LE2115")),
            ("OnePlus9Pro", model_only("LE2125")),
        ],
    },
];

/// Result of looking up a device in [`RF_VARIANTS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Lookup {
    Apply { region: Region, action: Override },
    UnknownDevice { region: Region },
    UnknownRfVersion,
}

/// Find the variant registered for `code`
pub fn variant_for(code: i32) -> Option<&'static RfVariant> {
    RF_VARIANTS.iter().find(|variant| variant.code == code)
}

/// Region label for `code`, if it is a known RF version
pub fn region_for(code: i32) -> Option<Region> {
    variant_for(code).map(|variant| variant.region)
}

/// Resolve the override for `device` on RF version `code`
pub fn lookup(code: i32, device: &str) -> Lookup {
    let Some(variant) = variant_for(code) else {
        return Lookup::UnknownRfVersion;
    };

    variant
        .devices
        .iter()
        .find(|(codename, _)| *codename == device)
        .map_or(
            Lookup::UnknownDevice {
                region: variant.region,
            },
            |&(_, action)| Lookup::Apply {
                region: variant.region,
                action,
            },
        )
}
