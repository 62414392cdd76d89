//! Dashboard statistics

use newsproof::config::Config;
use newsproof::core::services::summarize;
use newsproof::output::OutputMode;

use super::{fail, open_store};

/// Summarize every listed record
pub fn stats(mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let store = open_store(&config);

    let records = store.list().map_err(|e| fail("Loading records", &e, mode))?;
    summarize(&records).render(mode);
    Ok(())
}
