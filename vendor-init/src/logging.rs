//! Logger setup for the device and host entry points
//!
//! Inside init there is no terminal, so on Android records go to logcat's
//! system buffer. Host dry runs log to stderr through `env_logger`.

/// Tag under which records show up in logcat
pub const LOG_TAG: &str = "init-oplus";

/// Install the logger used when running against the live property area.
#[cfg(target_os = "android")]
pub fn init_device() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(log::LevelFilter::Info)
            .with_log_buffer(android_logger::LogId::System),
    );
}

/// Install the logger used when running against the live property area.
///
/// Off-device there is no logcat, so this falls back to [`init_host`].
#[cfg(not(target_os = "android"))]
pub fn init_device() {
    init_host();
}

/// Log to stderr, filtered by `RUST_LOG`. Safe to call more than once.
pub fn init_host() {
    let _ = env_logger::try_init();
}
