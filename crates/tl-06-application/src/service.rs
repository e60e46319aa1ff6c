//! # Application Service
//!
//! Wires the ledger, the authorization registry, transaction processing and
//! balance queries behind [`ConsensusApplication`].

use crate::config::ApplicationConfig;
use crate::domain::{
    ApplicationError, ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseInfo,
    ResponseQuery,
};
use crate::ports::inbound::ConsensusApplication;
use parking_lot::Mutex;
use shared_types::{HexBytes, ResponseCode};
use std::sync::Arc;
use tl_02_ledger_store::{ApplicationState, CommittedView, KeyValueStore, LedgerStore};
use tl_03_authorization::{AuthorizationApi, AuthorizationRegistry, LoadError, RegistrySource};
use tl_04_transaction_processing::TransactionProcessor;
use tl_05_balance_query::{BalanceQueryService, SystemTimeSource, TimeSource};

pub struct Application<S, T = SystemTimeSource> {
    ledger: Mutex<LedgerStore<S>>,
    committed: CommittedView<S>,
    registry: Arc<AuthorizationRegistry>,
    processor: TransactionProcessor,
    queries: BalanceQueryService<T>,
}

impl<S: KeyValueStore> Application<S> {
    /// Open on `store` using the system clock.
    pub fn open(
        store: S,
        registry: Arc<AuthorizationRegistry>,
        config: ApplicationConfig,
    ) -> Result<Self, ApplicationError> {
        Self::with_time_source(store, registry, config, SystemTimeSource)
    }
}

impl<S: KeyValueStore, T: TimeSource> Application<S, T> {
    /// Open on `store`, recovering the last committed state.
    ///
    /// Fails if any persisted record is corrupt.
    pub fn with_time_source(
        store: S,
        registry: Arc<AuthorizationRegistry>,
        config: ApplicationConfig,
        time: T,
    ) -> Result<Self, ApplicationError> {
        let ledger = LedgerStore::open(store)?;
        let committed = ledger.committed_view();
        Ok(Self {
            ledger: Mutex::new(ledger),
            committed,
            registry,
            processor: TransactionProcessor::default(),
            queries: BalanceQueryService::new(time, config.freshness()),
        })
    }

    pub fn registry(&self) -> &Arc<AuthorizationRegistry> {
        &self.registry
    }

    /// Replace the authorization registry, or keep it if `source` is invalid.
    pub fn reload_registry(&self, source: &RegistrySource) -> Result<(), LoadError> {
        self.registry.reload(source)
    }

    /// State as of the last commit.
    pub fn state(&self) -> ApplicationState {
        self.ledger.lock().state().clone()
    }

    pub fn committed_view(&self) -> CommittedView<S> {
        self.committed.clone()
    }
}

impl<S: KeyValueStore, T: TimeSource> ConsensusApplication for Application<S, T> {
    fn info(&self) -> ResponseInfo {
        let state = self.state();
        ResponseInfo {
            last_block_height: state.height,
            last_block_app_hash: HexBytes::from(state.app_hash),
        }
    }

    fn check_tx(&self, _tx: &[u8]) -> ResponseCheckTx {
        ResponseCheckTx {
            code: ResponseCode::Ok,
        }
    }

    fn deliver_tx(&self, tx: &[u8]) -> ResponseDeliverTx {
        let registry = self.registry.snapshot();
        let mut ledger = self.ledger.lock();

        match self.processor.deliver(tx, &registry, &mut *ledger) {
            Ok(_) => ResponseDeliverTx::ok(),
            Err(e) => {
                let code = e.code();
                if code == ResponseCode::Internal {
                    tracing::warn!("[tl-06] DeliverTx store failure: {}", e);
                } else {
                    tracing::debug!("[tl-06] DeliverTx rejected ({}): {}", code, e);
                }
                ResponseDeliverTx::rejected(code, e.to_string())
            }
        }
    }

    fn commit(&self) -> Result<ResponseCommit, ApplicationError> {
        let state = self.ledger.lock().commit().map_err(|e| {
            tracing::error!("[tl-06] ❌ Commit failed: {}", e);
            e
        })?;
        tracing::info!(
            "[tl-06] 📦 Committed height {} (app hash {})",
            state.height,
            HexBytes::from(state.app_hash)
        );
        Ok(ResponseCommit {
            app_hash: HexBytes::from(state.app_hash),
        })
    }

    fn query(&self, data: &[u8]) -> ResponseQuery {
        let registry = self.registry.snapshot();
        let answer = self
            .queries
            .answer(data, &registry, &self.committed)
            .and_then(|response| response.encode());

        match answer {
            Ok(value) => ResponseQuery {
                code: ResponseCode::Ok,
                value: Some(HexBytes::from(value)),
                log: None,
            },
            Err(e) => {
                tracing::debug!("[tl-06] Query rejected ({}): {}", e.code(), e);
                ResponseQuery::rejected(e.code(), e.to_string())
            }
        }
    }
}
