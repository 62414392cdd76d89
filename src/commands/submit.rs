//! Submit a news record

use newsproof::config::Config;
use newsproof::core::models::NewsDraft;
use newsproof::notice::Notice;
use newsproof::output::{OutputMode, RecordResult};

use super::{fail, open_store};

/// Submit a record from the given fields
pub fn submit(
    source: String,
    category: String,
    content: String,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load();
    let session = config.session();
    let store = open_store(&config);
    let draft = NewsDraft {
        source,
        category,
        content,
    };

    if mode == OutputMode::Human {
        Notice::pending(format!("Encrypting news content ({})...", store.cipher().scheme()))
            .render(mode);
    }

    let record = store.submit(&session, &draft).map_err(|e| fail("Submission", &e, mode))?;

    let message = if store.cipher().is_simulated() {
        "News submitted (content encryption simulated)"
    } else {
        "News submitted with encrypted content"
    };

    RecordResult {
        notice: Some(Notice::success(message)),
        record,
        revealed: None,
    }
    .render(mode);
    Ok(())
}
