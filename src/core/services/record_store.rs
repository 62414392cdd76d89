//! Indexed record store
//!
//! Emulates an appendable collection on top of a key/value contract. One
//! index entry holds the ordered list of record identifiers; every record
//! lives under its own key.
//!
//! ```text
//! news_keys              -> ["1700000000000-k3j9x0a", ...]
//! news_1700000000000-... -> {"content": ..., "status": "pending", ...}
//! ```
//!
//! Appending to the index is a read-modify-write with no compare-and-swap.
//! Two clients submitting at the same time can overwrite each other's index
//! write, and the losing identifier disappears from listings. Nothing here
//! detects or repairs that.

use std::time::Duration;

use crate::core::models::{
    MAX_INITIAL_SCORE, NewsDraft, NewsRecord, RecordIndex, RecordStatus, Session, Verdict,
    payload, sort_newest_first,
};
use crate::core::ports::{Clock, ContentCipher, Contract, Entropy};
use crate::error::StoreError;

/// Default key of the index entry
pub const DEFAULT_INDEX_KEY: &str = "news_keys";

/// Default prefix of record keys
pub const DEFAULT_RECORD_PREFIX: &str = "news_";

/// Key layout and timing of a [`RecordStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Key holding the serialized identifier list
    pub index_key: String,
    /// Prefix prepended to a record identifier to form its key
    pub record_prefix: String,
    /// Pause before a review, standing in for encrypted computation time
    pub processing_delay: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            index_key: DEFAULT_INDEX_KEY.to_string(),
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
            processing_delay: Duration::ZERO,
        }
    }
}

/// Client for key-indexed news records
pub struct RecordStore {
    contract: Box<dyn Contract>,
    cipher: Box<dyn ContentCipher>,
    entropy: Box<dyn Entropy>,
    clock: Box<dyn Clock>,
    options: StoreOptions,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("cipher", &self.cipher.scheme())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    /// Create a store with default options
    #[must_use]
    pub fn new(
        contract: Box<dyn Contract>,
        cipher: Box<dyn ContentCipher>,
        entropy: Box<dyn Entropy>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            contract,
            cipher,
            entropy,
            clock,
            options: StoreOptions::default(),
        }
    }

    /// Replace the options
    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The encryption capability in use
    #[must_use]
    pub fn cipher(&self) -> &dyn ContentCipher {
        self.cipher.as_ref()
    }

    /// Key a record is stored under
    #[must_use]
    pub fn record_key(&self, id: &str) -> String {
        format!("{}{id}", self.options.record_prefix)
    }

    /// Probe the contract
    ///
    /// Informational only; no other operation consults it.
    pub fn is_available(&self) -> Result<bool, StoreError> {
        Ok(self.contract.is_available()?)
    }

    /// Read the index
    ///
    /// An absent entry is an empty index. An undecodable entry is logged and
    /// also treated as empty. Only a failed contract read is an error.
    pub fn index(&self) -> Result<RecordIndex, StoreError> {
        let key = &self.options.index_key;
        let bytes = self.contract.get_data(key)?;
        if bytes.is_empty() {
            log::debug!("Index '{key}' is empty");
            return Ok(RecordIndex::default());
        }

        Ok(RecordIndex::decode(&bytes).unwrap_or_else(|e| {
            log::error!("Error parsing index '{key}': {e}");
            RecordIndex::default()
        }))
    }

    /// List every readable record, newest first
    ///
    /// A record that fails to load or decode is logged and skipped; it never
    /// aborts the listing.
    pub fn list(&self) -> Result<Vec<NewsRecord>, StoreError> {
        let index = self.index()?;
        let mut records = Vec::with_capacity(index.len());

        for id in index.ids() {
            let key = self.record_key(id);
            let bytes = match self.contract.get_data(&key) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("Error loading record {id}: {e}");
                    continue;
                },
            };
            if bytes.is_empty() {
                log::debug!("Skipping {id}: no entry under '{key}'");
                continue;
            }
            match payload::decode_record(id, &bytes) {
                Ok(record) => records.push(record),
                Err(e) => log::error!("Error parsing record {id}: {e}"),
            }
        }

        sort_newest_first(&mut records);
        Ok(records)
    }

    /// List records with the given status, newest first
    pub fn list_with_status(&self, status: RecordStatus) -> Result<Vec<NewsRecord>, StoreError> {
        let mut records = self.list()?;
        records.retain(|r| r.status == status);
        Ok(records)
    }

    /// Fetch one record
    pub fn get(&self, id: &str) -> Result<Option<NewsRecord>, StoreError> {
        let key = self.record_key(id);
        let bytes = self.contract.get_data(&key)?;
        if bytes.is_empty() {
            return Ok(None);
        }
        payload::decode_record(id, &bytes)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source })
    }

    /// Submit a new record
    ///
    /// The draft is validated before anything is written. The record entry
    /// is stored first, then the index is re-read, appended to and written
    /// back.
    pub fn submit(&self, session: &Session, draft: &NewsDraft) -> Result<NewsRecord, StoreError> {
        let account = session.require_account()?;
        draft.validate()?;

        let plaintext = draft.plaintext().map_err(StoreError::Encode)?;
        let encrypted_content = self
            .cipher
            .encrypt(&plaintext)
            .map_err(|e| StoreError::Encryption(e.to_string()))?;

        let now = self.clock.now();
        let record = NewsRecord {
            id: format!("{}-{}", now.timestamp_millis(), self.entropy.id_suffix()),
            encrypted_content,
            timestamp: now.timestamp(),
            source: draft.source.clone(),
            category: draft.category.clone(),
            credibility_score: self.entropy.initial_score().min(MAX_INITIAL_SCORE),
            status: RecordStatus::Pending,
        };

        let bytes = payload::encode_record(&record).map_err(StoreError::Encode)?;
        self.contract.set_data(&self.record_key(&record.id), &bytes)?;

        let mut index = self.index()?;
        index.push(record.id.clone());
        let bytes = index.encode().map_err(StoreError::Encode)?;
        self.contract.set_data(&self.options.index_key, &bytes)?;

        log::info!("Submitted record {} as {account} ({} indexed)", record.id, index.len());
        Ok(record)
    }

    /// Apply a review verdict to a stored record
    ///
    /// Any record in any state can be reviewed again; the last writer wins.
    pub fn review(
        &self,
        session: &Session,
        id: &str,
        verdict: Verdict,
    ) -> Result<NewsRecord, StoreError> {
        let account = session.require_account()?;

        let delay = self.options.processing_delay;
        if !delay.is_zero() {
            log::debug!("Simulating processing for {}ms", delay.as_millis());
            std::thread::sleep(delay);
        }

        let key = self.record_key(id);
        let bytes = self.contract.get_data(&key)?;
        if bytes.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let mut record = payload::decode_record(id, &bytes)
            .map_err(|source| StoreError::Corrupt { key: key.clone(), source })?;
        let updated = payload::overlay_verdict(&bytes, verdict)
            .map_err(|source| StoreError::Corrupt { key: key.clone(), source })?;
        self.contract.set_data(&key, &updated)?;

        record.apply(verdict);
        log::info!("Record {id} marked {} by {account}", record.status);
        Ok(record)
    }

    /// Mark a record as verified (score 95)
    pub fn verify(&self, session: &Session, id: &str) -> Result<NewsRecord, StoreError> {
        self.review(session, id, Verdict::Verify)
    }

    /// Mark a record as disputed (score 25)
    pub fn dispute(&self, session: &Session, id: &str) -> Result<NewsRecord, StoreError> {
        self.review(session, id, Verdict::Dispute)
    }
}
