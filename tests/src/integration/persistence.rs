//! # Persistence and Registry Loading
//!
//! Restarting on a file-backed store, and bootstrapping authorization from
//! content-addressed documents.

#[cfg(test)]
mod tests {
    use crate::fixtures::{coins, Keys, TestNode};
    use shared_types::{Amount, ResponseCode};
    use std::sync::Arc;
    use tl_01_signature_verification::SigningIdentity;
    use tl_02_ledger_store::FileBackedKVStore;
    use tl_03_authorization::{
        AuthorizationRegistry, ContentStore, InMemoryContentStore, KeyEntry, LoadError,
        RegistryAddresses, RegistryLoader, TaxDocument,
    };
    use tl_04_transaction_processing::DeliveryData;
    use tl_06_application::{Application, ApplicationConfig, ConsensusApplication};

    // =============================================================================
    // RESTART
    // =============================================================================

    #[test]
    fn test_restart_recovers_committed_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");
        let recipient = SigningIdentity::from_seed([8; 32]).identity();

        let before = {
            let store = FileBackedKVStore::open(&path).unwrap();
            let node = TestNode::with_store(store, Keys::from_seeds());
            node.mint("111");
            node.send(&node.keys.inflator, recipient, "111");
            node.commit();
            // Delivered but never committed: must not survive the restart.
            node.mint("5");
            node.app.info()
        };

        let store = FileBackedKVStore::open(&path).unwrap();
        let node = TestNode::with_store(store, Keys::from_seeds());
        assert_eq!(node.app.info(), before);
        assert_eq!(before.last_block_height, 1);
        assert_eq!(node.balance(node.keys.inflator.identity()), Amount::ZERO);
        assert_eq!(node.balance(recipient), coins("99.9"));
        assert_eq!(node.balance(node.keys.tax_receiver.identity()), coins("11.1"));

        // The chain continues from the recovered height.
        node.mint("1");
        node.commit();
        assert_eq!(node.app.info().last_block_height, 2);
    }

    #[test]
    fn test_corrupt_ledger_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");
        std::fs::write(&path, [0xFF, 0xFF, 0xFF]).unwrap();
        assert!(FileBackedKVStore::open(&path).is_err());
    }

    // =============================================================================
    // REGISTRY FROM CONTENT
    // =============================================================================

    fn publish(store: &InMemoryContentStore, keys: &Keys, percentage: i64) -> RegistryAddresses {
        let list = |key: &SigningIdentity| {
            serde_json::to_vec(&[KeyEntry::new(key.identity().to_hex())]).unwrap()
        };
        let tax = serde_json::to_vec(&TaxDocument {
            percentage,
            public_key_hex: keys.tax_receiver.identity().to_hex(),
        })
        .unwrap();
        RegistryAddresses {
            inflators: store.put(&list(&keys.inflator)).unwrap(),
            watchers: store.put(&list(&keys.watcher)).unwrap(),
            tax: store.put(&tax).unwrap(),
        }
    }

    #[test]
    fn test_registry_loaded_from_content_drives_transfers() {
        let keys = Keys::generate();
        let content = InMemoryContentStore::new();
        let addresses = publish(&content, &keys, 10);
        let loader = RegistryLoader::new(content);
        let source = loader.load(&addresses).unwrap();

        let app = Application::open(
            tl_02_ledger_store::InMemoryKVStore::new(),
            Arc::new(AuthorizationRegistry::from_source(&source).unwrap()),
            ApplicationConfig::default(),
        )
        .unwrap();
        let inflator = &keys.inflator;
        let recipient = SigningIdentity::generate().identity();
        let deliver = |data: DeliveryData| {
            let tx = tl_04_transaction_processing::DeliveryRequest::sign(data, inflator, 1)
                .encode()
                .unwrap();
            app.deliver_tx(&tx).code
        };

        assert_eq!(deliver(DeliveryData::add(inflator.identity(), coins("10"))), ResponseCode::Ok);
        // The tax reference is the tax document's content address.
        let send = DeliveryData::send(inflator.identity(), recipient, &addresses.tax, coins("10"));
        assert_eq!(deliver(send), ResponseCode::Ok);
        let stale =
            DeliveryData::send(inflator.identity(), recipient, "not-the-address", coins("1"));
        assert_eq!(deliver(stale), ResponseCode::Unauthorized);
        app.commit().unwrap();

        let view = app.committed_view();
        assert_eq!(view.balance(&recipient).unwrap(), coins("9"));
        assert_eq!(view.balance(&keys.tax_receiver.identity()).unwrap(), coins("1"));
    }

    #[test]
    fn test_invalid_reload_keeps_previous_policy() {
        let node = TestNode::in_memory();
        let mut broken = node.keys.registry_source(10);
        broken.inflators.push(KeyEntry::new("zz"));

        let err = node.app.reload_registry(&broken).unwrap_err();
        assert!(matches!(err, LoadError::InvalidKey { list: "inflators", index: 1, .. }));
        assert_eq!(node.mint("1"), ResponseCode::Ok);
    }

    #[test]
    fn test_reload_changes_tax_for_later_transfers() {
        let node = TestNode::in_memory();
        let recipient = SigningIdentity::generate().identity();
        node.mint("20");
        node.send(&node.keys.inflator, recipient, "10");

        node.app
            .reload_registry(&node.keys.registry_source(0))
            .unwrap();
        node.send(&node.keys.inflator, recipient, "10");
        node.commit();

        assert_eq!(node.balance(recipient), coins("19"));
        assert_eq!(node.balance(node.keys.tax_receiver.identity()), coins("1"));
    }
}
