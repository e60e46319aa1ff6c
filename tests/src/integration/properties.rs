//! # Ledger Properties
//!
//! Randomized delivery streams checked against the ledger invariants:
//!
//! - total supply changes only by minting and burning
//! - no committed balance is ever negative
//! - replicas fed the same blocks agree on every app hash

#[cfg(test)]
mod tests {
    use crate::fixtures::{Keys, TestNode, TAX_REFERENCE};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{Amount, ResponseCode};
    use tl_01_signature_verification::SigningIdentity;
    use tl_02_ledger_store::{InMemoryKVStore, KeyValueStore};
    use tl_04_transaction_processing::DeliveryData;
    use tl_06_application::ConsensusApplication;

    fn committed_supply<S: KeyValueStore>(node: &TestNode<S>) -> i64 {
        let accounts = node.app.committed_view().accounts().unwrap();
        for (identity, balance) in &accounts {
            assert!(!balance.is_negative(), "{identity} went negative: {balance}");
        }
        accounts.iter().map(|(_, balance)| balance.minor()).sum()
    }

    #[test]
    fn test_random_stream_conserves_supply() {
        let node = TestNode::in_memory();
        let users: Vec<SigningIdentity> =
            (0..5u8).map(|i| SigningIdentity::from_seed([40 + i; 32])).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut supply: i64 = 0;

        for step in 0..400 {
            let amount = Amount::from_minor(rng.gen_range(1..=50_000_000_000));
            let inflator = &node.keys.inflator;

            match rng.gen_range(0..4) {
                0 => {
                    let data = DeliveryData::add(inflator.identity(), amount);
                    if node.deliver(data, inflator) == ResponseCode::Ok {
                        supply += amount.minor();
                    }
                }
                1 => {
                    let data = DeliveryData::remove(inflator.identity(), amount);
                    if node.deliver(data, inflator) == ResponseCode::Ok {
                        supply -= amount.minor();
                    }
                }
                2 => {
                    let to = &users[rng.gen_range(0..users.len())];
                    let data = DeliveryData::send(
                        inflator.identity(),
                        to.identity(),
                        TAX_REFERENCE,
                        amount,
                    );
                    node.deliver(data, inflator);
                }
                _ => {
                    let from = &users[rng.gen_range(0..users.len())];
                    let to = &users[rng.gen_range(0..users.len())];
                    let small = Amount::from_minor(amount.minor() / 10 + 1);
                    let data =
                        DeliveryData::send(from.identity(), to.identity(), TAX_REFERENCE, small);
                    node.deliver(data, from);
                }
            }

            if step % 25 == 24 {
                node.commit();
                assert_eq!(committed_supply(&node), supply, "after step {step}");
            }
        }
    }

    #[test]
    fn test_replicas_agree_on_app_hash() {
        let a = TestNode::with_store(InMemoryKVStore::new(), Keys::from_seeds());
        let b = TestNode::with_store(InMemoryKVStore::new(), Keys::from_seeds());
        let recipient = SigningIdentity::from_seed([9; 32]).identity();

        for block in 0..5 {
            for node in [&a, &b] {
                node.mint("100");
                node.send(&node.keys.inflator, recipient, "33.33");
                if block % 2 == 1 {
                    node.send(&node.keys.inflator, recipient, "100000");
                }
            }
            let hash_a = a.app.commit().unwrap().app_hash;
            let hash_b = b.app.commit().unwrap().app_hash;
            assert_eq!(hash_a, hash_b, "diverged at block {block}");
        }
        assert_eq!(a.app.info(), b.app.info());
    }

    #[test]
    fn test_different_history_changes_app_hash() {
        let a = TestNode::with_store(InMemoryKVStore::new(), Keys::from_seeds());
        let b = TestNode::with_store(InMemoryKVStore::new(), Keys::from_seeds());
        a.mint("1");
        b.mint("2");
        assert_ne!(a.app.commit().unwrap().app_hash, b.app.commit().unwrap().app_hash);
    }

    #[test]
    fn test_transfer_fee_never_exceeds_amount() {
        let node = TestNode::in_memory();
        let recipient = SigningIdentity::generate().identity();
        let tax = node.keys.tax_receiver.identity();
        node.mint("1");

        // Amounts too small for a full minor unit of tax still transfer.
        for minor in [1, 4, 5, 6, 15] {
            let data = DeliveryData::send(
                node.keys.inflator.identity(),
                recipient,
                TAX_REFERENCE,
                Amount::from_minor(minor),
            );
            assert_eq!(node.deliver(data, &node.keys.inflator), ResponseCode::Ok);
        }
        node.commit();

        let received = node.balance(recipient).minor();
        let collected = node.balance(tax).minor();
        assert_eq!(received + collected, 1 + 4 + 5 + 6 + 15);
        // 0.1, 0.4, 0.5, 0.6 and 1.5 minor units round half-to-even to 0, 0, 0, 1, 2.
        assert_eq!(collected, 3);
    }
}
