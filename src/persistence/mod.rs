//! Throw log storage
//!
//! The core never touches storage; this module moves a `ThrowLog` in and
//! out of it:
//! - Browser: JSON array under the LocalStorage key `records`
//! - Native: JSON file on disk
//!
//! Exports are named after the moment they were taken.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::game::ThrowLog;

/// LocalStorage key holding the throw log (browser only)
pub const RECORDS_KEY: &str = "records";

/// Current time as a record timestamp (Unix ms)
pub fn now_millis() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// File name for an exported log, e.g. `2024-03-01T18:04:05.123Z.json`
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("{}.json", at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Load the throw log from LocalStorage (WASM only)
///
/// A missing or corrupt entry yields an empty log.
#[cfg(target_arch = "wasm32")]
pub fn load_records() -> ThrowLog {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if let Ok(Some(json)) = storage.get_item(RECORDS_KEY) {
            match ThrowLog::from_json(&json) {
                Ok(log) => {
                    log::info!("Loaded {} throws", log.len());
                    return log;
                }
                Err(e) => log::warn!("Discarding stored throws: {e}"),
            }
        }
    }

    ThrowLog::new()
}

/// Save the throw log to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save_records(log: &ThrowLog) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        match log.to_json() {
            Ok(json) => match storage.set_item(RECORDS_KEY, &json) {
                Ok(()) => log::debug!("Saved {} throws", log.len()),
                Err(e) => log::warn!("Failed to store {} throws: {e:?}", log.len()),
            },
            Err(e) => log::warn!("Failed to save throws: {e}"),
        }
    }
}

/// Clear the stored throw log (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn clear_records() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        match storage.set_item(RECORDS_KEY, "") {
            Ok(()) => log::info!("Stored throws cleared"),
            Err(e) => log::warn!("Failed to clear stored throws: {e:?}"),
        }
    }
}

/// Load a throw log from a JSON file
#[cfg(not(target_arch = "wasm32"))]
pub fn load_records_from(path: &std::path::Path) -> crate::Result<ThrowLog> {
    let json = std::fs::read_to_string(path)?;
    let log = ThrowLog::from_json(&json)?;
    log::info!("Loaded {} throws from {}", log.len(), path.display());
    Ok(log)
}

/// Write a throw log to a JSON file
#[cfg(not(target_arch = "wasm32"))]
pub fn save_records_to(path: &std::path::Path, log: &ThrowLog) -> crate::Result<()> {
    std::fs::write(path, log.to_json()?)?;
    log::info!("Saved {} throws to {}", log.len(), path.display());
    Ok(())
}
