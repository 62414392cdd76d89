//! Status command - probe the contract and show the session

use newsproof::config::Config;
use newsproof::output::{AvailabilityResult, OutputMode};

use super::{fail, open_store};

/// Show contract availability and the connected account
pub fn status(mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let session = config.session();
    let store = open_store(&config);

    let available = store
        .is_available()
        .map_err(|e| fail("Availability check", &e, mode))?;

    AvailabilityResult {
        available,
        backend: config.contract.backend.to_string(),
        account: session.account().map(String::from),
        cipher: store.cipher().scheme().to_string(),
        simulated_encryption: store.cipher().is_simulated(),
    }
    .render(mode);
    Ok(())
}
