//! Verify or dispute a record

use newsproof::config::Config;
use newsproof::core::models::Verdict;
use newsproof::notice::Notice;
use newsproof::output::{OutputMode, RecordResult};

use super::{fail, open_store};

/// Mark a record as verified
pub fn verify(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    review(id, Verdict::Verify, mode)
}

/// Mark a record as disputed
pub fn dispute(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    review(id, Verdict::Dispute, mode)
}

fn review(id: &str, verdict: Verdict, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let session = config.session();
    let store = open_store(&config);

    if mode == OutputMode::Human {
        Notice::pending("Processing encrypted news...").render(mode);
    }

    let record = store
        .review(&session, id, verdict)
        .map_err(|e| fail(verdict.action(), &e, mode))?;

    RecordResult {
        notice: Some(Notice::success(format!("{} completed", verdict.action()))),
        record,
        revealed: None,
    }
    .render(mode);
    Ok(())
}
