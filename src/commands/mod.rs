//! Command implementations

mod init;
mod list;
mod review;
mod session;
mod stats;
mod status;
mod submit;

pub use init::init;
pub use list::{list, show};
pub use review::{dispute, verify};
pub use session::{connect, disconnect};
pub use stats::stats;
pub use status::status;
pub use submit::submit;

use newsproof::adapters;
use newsproof::config::Config;
use newsproof::core::services::RecordStore;
use newsproof::error::StoreError;
use newsproof::notice::Notice;
use newsproof::output::OutputMode;

/// A failure already shown to the user as an error notice
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(String);

/// Open the record store described by `config`
fn open_store(config: &Config) -> RecordStore {
    let contract = adapters::open_contract(config.contract.backend, &config.contract_path());
    adapters::record_store(contract, config.store_options())
}

/// Show an error notice for a failed action and return it as the command error
fn fail(action: &str, err: &StoreError, mode: OutputMode) -> anyhow::Error {
    log::debug!("{action} failed: {err:?}");
    let notice = Notice::from_error(action, err);
    notice.render(mode);
    Reported(notice.message).into()
}
