//! List and show records

use newsproof::adapters::PlaceholderCipher;
use newsproof::config::Config;
use newsproof::core::models::RecordStatus;
use newsproof::error::StoreError;
use newsproof::output::{OutputMode, RecordListResult, RecordResult};

use super::{fail, open_store};

/// List records, newest first
pub fn list(status: Option<RecordStatus>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let store = open_store(&config);

    // Availability only changes the message, never the listing
    if !store.is_available().unwrap_or(false) {
        log::warn!("Contract is not available");
    }

    let records = match status {
        Some(status) => store.list_with_status(status),
        None => store.list(),
    }
    .map_err(|e| fail("Loading records", &e, mode))?;

    RecordListResult { records, status }.render(mode);
    Ok(())
}

/// Show one record
pub fn show(id: &str, reveal: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let store = open_store(&config);

    let record = store
        .get(id)
        .and_then(|record| record.ok_or_else(|| StoreError::NotFound(id.to_string())))
        .map_err(|e| fail("Lookup", &e, mode))?;

    let revealed = if reveal {
        PlaceholderCipher::reveal(&record.encrypted_content)
    } else {
        None
    };

    RecordResult {
        notice: None,
        record,
        revealed,
    }
    .render(mode);
    Ok(())
}
