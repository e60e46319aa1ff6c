//! # Ledger Service
//!
//! [`LedgerStore`] owns the pending overlay for the block being executed and
//! the last committed [`ApplicationState`]. [`CommittedView`] is a cheap
//! clonable handle onto the same backing store that only ever sees committed
//! data, which is what balance queries read.

use crate::domain::app_hash::compute_app_hash;
use crate::domain::errors::StoreError;
use crate::domain::keys::{account_key, identity_from_key, ACCOUNT_PREFIX, APP_STATE_KEY};
use crate::domain::records::{AccountRecord, ApplicationState};
use crate::ports::database::{BatchOperation, KeyValueStore};
use crate::ports::ledger::WorkingLedger;
use parking_lot::RwLock;
use shared_types::Amount;
use std::collections::BTreeMap;
use std::sync::Arc;
use tl_01_signature_verification::Identity;

fn read_balance<S: KeyValueStore>(store: &S, identity: &Identity) -> Result<Amount, StoreError> {
    let key = account_key(identity);
    match store.get(&key)? {
        Some(bytes) => Ok(AccountRecord::decode(&key, &bytes)?.amount()),
        None => Ok(Amount::ZERO),
    }
}

fn read_state<S: KeyValueStore>(store: &S) -> Result<ApplicationState, StoreError> {
    match store.get(APP_STATE_KEY)? {
        Some(bytes) => ApplicationState::decode(APP_STATE_KEY, &bytes),
        None => Ok(ApplicationState::default()),
    }
}

/// Read-only handle onto committed balances.
pub struct CommittedView<S> {
    store: Arc<RwLock<S>>,
}

impl<S> Clone for CommittedView<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> CommittedView<S> {
    pub fn balance(&self, identity: &Identity) -> Result<Amount, StoreError> {
        read_balance(&*self.store.read(), identity)
    }

    pub fn state(&self) -> Result<ApplicationState, StoreError> {
        read_state(&*self.store.read())
    }

    /// Every account with a persisted record, in identity order.
    pub fn accounts(&self) -> Result<Vec<(Identity, Amount)>, StoreError> {
        let store = self.store.read();
        store
            .prefix_scan(ACCOUNT_PREFIX)?
            .into_iter()
            .map(|(key, value)| {
                let identity = identity_from_key(&key)
                    .ok_or_else(|| StoreError::corrupted(&key, "invalid identity in key"))?;
                Ok((identity, AccountRecord::decode(&key, &value)?.amount()))
            })
            .collect()
    }
}

/// Balance ledger with block-level atomic commits.
pub struct LedgerStore<S> {
    committed: Arc<RwLock<S>>,
    pending: BTreeMap<Identity, Amount>,
    state: ApplicationState,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Open the ledger on `store`, validating every persisted record.
    ///
    /// An empty store yields height 0 and a zero app hash. Any undecodable
    /// record is fatal.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let state = read_state(&store)?;
        let ledger = Self {
            committed: Arc::new(RwLock::new(store)),
            pending: BTreeMap::new(),
            state,
        };

        let accounts = ledger.committed_view().accounts()?;
        if let Some((identity, balance)) = accounts.iter().find(|(_, b)| b.is_negative()) {
            return Err(StoreError::NegativeBalance {
                identity: *identity,
                balance: *balance,
            });
        }

        tracing::info!(
            "[tl-02] 📒 Ledger opened at height {} with {} accounts (app hash {})",
            ledger.state.height,
            accounts.len(),
            hex::encode(ledger.state.app_hash)
        );
        Ok(ledger)
    }

    pub fn committed_view(&self) -> CommittedView<S> {
        CommittedView {
            store: Arc::clone(&self.committed),
        }
    }

    /// State as of the last commit.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Number of accounts touched since the last commit.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Persist the block's writes together with the next application state.
    ///
    /// Height and size counter advance by one and the app hash chains the
    /// previous hash with this block's writes. On failure nothing is
    /// persisted and the pending overlay is kept.
    pub fn commit(&mut self) -> Result<ApplicationState, StoreError> {
        let mut writes = Vec::with_capacity(self.pending_len());
        for (identity, balance) in &self.pending {
            writes.push((account_key(identity), AccountRecord::new(*balance).encode()?));
        }

        let height = self.state.height + 1;
        let size_counter = self.state.size_counter + 1;
        let next = ApplicationState {
            height,
            size_counter,
            app_hash: compute_app_hash(&self.state.app_hash, height, size_counter, &writes),
        };

        let mut batch: Vec<BatchOperation> = writes
            .into_iter()
            .map(|(key, value)| BatchOperation::Put { key, value })
            .collect();
        batch.push(BatchOperation::put(APP_STATE_KEY, next.encode()?));

        self.committed.write().atomic_batch_write(batch)?;

        tracing::debug!(
            "[tl-02] Committed height {} ({} accounts written)",
            next.height,
            self.pending_len()
        );
        self.pending.clear();
        self.state = next.clone();
        Ok(next)
    }
}

impl<S: KeyValueStore> WorkingLedger for LedgerStore<S> {
    fn balance(&self, identity: &Identity) -> Result<Amount, StoreError> {
        match self.pending.get(identity) {
            Some(balance) => Ok(*balance),
            None => read_balance(&*self.committed.read(), identity),
        }
    }

    fn stage(&mut self, writes: BTreeMap<Identity, Amount>) -> Result<(), StoreError> {
        if let Some((identity, balance)) = writes.iter().find(|(_, b)| b.is_negative()) {
            return Err(StoreError::NegativeBalance {
                identity: *identity,
                balance: *balance,
            });
        }
        self.pending.extend(writes);
        Ok(())
    }
}
