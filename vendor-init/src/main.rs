//! init-oplus - apply the regional device identity
//!
//! On a device this runs as a oneshot from init during the vendor property
//! phase. On a host, `--build-prop` loads a device's property files into
//! memory and shows what would be written.

use anyhow::{Context, Result};
use clap::Parser;
use oplus_init::constants::{DEVICE_PROP, RF_VERSION_PROP};
use oplus_init::table::RF_VARIANTS;
use oplus_init::{Override, Report, logging, vendor_load_properties};
use oplus_sysprop::{MemoryStore, build_prop};
use std::path::PathBuf;

/// Set regional model identity from the bootloader RF version
#[derive(Parser, Debug)]
#[command(name = "init-oplus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dry run against properties loaded from these build.prop files
    #[arg(long = "build-prop", value_name = "FILE")]
    build_props: Vec<PathBuf>,

    /// Device codename to use for the dry run
    #[arg(long, requires = "build_props")]
    device: Option<String>,

    /// RF version to use for the dry run
    #[arg(long, requires = "build_props")]
    rf_version: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the RF version table and exit
    #[arg(long)]
    table: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.build_props.is_empty() && !cli.table {
        logging::init_device();
    } else {
        logging::init_host();
    }

    if cli.table {
        print_table();
        return Ok(());
    }

    let report = if cli.build_props.is_empty() {
        run_platform()?
    } else {
        run_dry(&cli)?
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        for write in &report.writes {
            match &write.error {
                None => println!("{}={}", write.key, write.value),
                Some(e) => println!("{}={} (failed: {e})", write.key, write.value),
            }
        }
    }

    if report.failures() > 0 {
        anyhow::bail!("{} of {} writes failed", report.failures(), report.writes.len());
    }
    Ok(())
}

#[cfg(target_os = "android")]
fn run_platform() -> Result<Report> {
    let mut store = oplus_sysprop::BionicStore::new();
    vendor_load_properties(&mut store).context("Vendor property loading failed")
}

#[cfg(not(target_os = "android"))]
fn run_platform() -> Result<Report> {
    anyhow::bail!("No property area on this platform; pass --build-prop for a dry run")
}

fn run_dry(cli: &Cli) -> Result<Report> {
    let mut store = MemoryStore::new();
    for path in &cli.build_props {
        build_prop::load_file(&mut store, path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    if let Some(device) = &cli.device {
        store.seed(DEVICE_PROP, device.as_str());
    }
    if let Some(rf_version) = &cli.rf_version {
        store.seed(RF_VERSION_PROP, rf_version.as_str());
    }

    vendor_load_properties(&mut store).context("Vendor property loading failed")
}

fn print_table() {
    for variant in RF_VARIANTS {
        for (codename, action) in variant.devices {
            let target = match action {
                Override::Full {
                    model,
                    name,
                    marketname,
                } => format!(
                    "model={model} name={name} marketname={marketname:?} (all partitions)"
                ),
                Override::ModelOnly { model } => format!("model={model}"),
            };
            println!(
                "{:>3} {:<4} {codename:<12} {target}",
                variant.code,
                variant.region.to_string()
            );
        }
    }
}
