//! Shared fixtures: an application wired to a registry with one inflator,
//! one watcher and a 10% tax, plus helpers for building signed requests.

use shared_types::{Amount, ResponseCode};
use std::cell::Cell;
use std::sync::Arc;
use tl_01_signature_verification::{Identity, SigningIdentity};
use tl_02_ledger_store::{InMemoryKVStore, KeyValueStore};
use tl_03_authorization::{
    AuthorizationRegistry, KeyEntry, RegistrySource, TaxDocument, TaxSource,
};
use tl_04_transaction_processing::{DeliveryData, DeliveryRequest};
use tl_05_balance_query::{ManualTimeSource, QueryData, QueryRequest, QueryResponse, TimeSource};
use tl_06_application::{Application, ApplicationConfig, ConsensusApplication, ResponseQuery};

pub const NOW: u64 = 1_700_000_000_000;
pub const TAX_REFERENCE: &str = "tax-document-address";
pub const TAX_PERCENT: i64 = 10;

pub fn coins(value: &str) -> Amount {
    value.parse().unwrap()
}

/// The identities a test network needs.
pub struct Keys {
    pub inflator: SigningIdentity,
    pub watcher: SigningIdentity,
    pub tax_receiver: SigningIdentity,
}

impl Keys {
    pub fn generate() -> Self {
        Self {
            inflator: SigningIdentity::generate(),
            watcher: SigningIdentity::generate(),
            tax_receiver: SigningIdentity::generate(),
        }
    }

    /// Fixed keys, so two nodes can replay the same signed history.
    pub fn from_seeds() -> Self {
        Self {
            inflator: SigningIdentity::from_seed([1; 32]),
            watcher: SigningIdentity::from_seed([2; 32]),
            tax_receiver: SigningIdentity::from_seed([3; 32]),
        }
    }

    pub fn registry_source(&self, percentage: i64) -> RegistrySource {
        RegistrySource {
            inflators: vec![KeyEntry::new(self.inflator.identity().to_hex())],
            watchers: vec![KeyEntry::new(self.watcher.identity().to_hex())],
            tax: Some(TaxSource {
                reference: TAX_REFERENCE.to_string(),
                document: TaxDocument {
                    percentage,
                    public_key_hex: self.tax_receiver.identity().to_hex(),
                },
            }),
        }
    }
}

pub struct TestNode<S: KeyValueStore> {
    pub app: Application<S, Arc<ManualTimeSource>>,
    pub clock: Arc<ManualTimeSource>,
    pub keys: Keys,
    submitted: Cell<u64>,
}

impl TestNode<InMemoryKVStore> {
    pub fn in_memory() -> Self {
        Self::with_store(InMemoryKVStore::new(), Keys::generate())
    }
}

impl<S: KeyValueStore> TestNode<S> {
    pub fn with_store(store: S, keys: Keys) -> Self {
        let registry =
            AuthorizationRegistry::from_source(&keys.registry_source(TAX_PERCENT)).unwrap();
        let clock = Arc::new(ManualTimeSource::new(NOW));
        let app = Application::with_time_source(
            store,
            Arc::new(registry),
            ApplicationConfig::default(),
            Arc::clone(&clock),
        )
        .unwrap();
        Self {
            app,
            clock,
            keys,
            submitted: Cell::new(NOW),
        }
    }

    /// Sign and encode a delivery.
    pub fn tx(&self, data: DeliveryData, signer: &SigningIdentity) -> Vec<u8> {
        self.submitted.set(self.submitted.get() + 1);
        DeliveryRequest::sign(data, signer, self.submitted.get())
            .encode()
            .unwrap()
    }

    pub fn deliver(&self, data: DeliveryData, signer: &SigningIdentity) -> ResponseCode {
        let tx = self.tx(data, signer);
        self.app.deliver_tx(&tx).code
    }

    /// Mint `amount` into the inflator's own account.
    pub fn mint(&self, amount: &str) -> ResponseCode {
        let inflator = &self.keys.inflator;
        self.deliver(DeliveryData::add(inflator.identity(), coins(amount)), inflator)
    }

    pub fn send(&self, from: &SigningIdentity, to: Identity, amount: &str) -> ResponseCode {
        self.deliver(
            DeliveryData::send(from.identity(), to, TAX_REFERENCE, coins(amount)),
            from,
        )
    }

    pub fn commit(&self) {
        self.app.commit().unwrap();
    }

    /// Query `signer`'s own balance at the current clock.
    pub fn query_own(&self, signer: &SigningIdentity) -> ResponseQuery {
        let data = QueryData::own(signer.identity(), self.clock.now(), "nonce");
        self.app
            .query(&QueryRequest::sign(data, signer).encode().unwrap())
    }

    pub fn query_as_watcher(&self, target: Identity) -> ResponseQuery {
        let watcher = &self.keys.watcher;
        let data = QueryData::on_behalf_of(watcher.identity(), target, self.clock.now(), "nonce");
        self.app
            .query(&QueryRequest::sign(data, watcher).encode().unwrap())
    }

    /// Committed balance through the watcher query path.
    pub fn balance(&self, target: Identity) -> Amount {
        let response = self.query_as_watcher(target);
        assert_eq!(response.code, ResponseCode::Ok, "{:?}", response.log);
        QueryResponse::decode(response.value.unwrap().as_slice())
            .unwrap()
            .balance
    }
}
