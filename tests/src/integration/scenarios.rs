//! # Ledger Scenarios
//!
//! Block-level walkthroughs: mint, taxed transfer, overspend, burn and the
//! query rules for owners and watchers.

#[cfg(test)]
mod tests {
    use crate::fixtures::{coins, TestNode, TAX_REFERENCE};
    use shared_types::{Amount, ResponseCode};
    use tl_01_signature_verification::SigningIdentity;
    use tl_04_transaction_processing::DeliveryData;
    use tl_05_balance_query::QueryResponse;
    use tl_06_application::ConsensusApplication;

    // =============================================================================
    // MINT / TRANSFER
    // =============================================================================

    #[test]
    fn test_mint_then_query_own_balance() {
        let node = TestNode::in_memory();
        assert_eq!(node.mint("111"), ResponseCode::Ok);
        node.commit();

        let response = node.query_own(&node.keys.inflator);
        assert_eq!(response.code, ResponseCode::Ok);
        let value = QueryResponse::decode(response.value.unwrap().as_slice()).unwrap();
        assert_eq!(value.balance, coins("111"));
    }

    #[test]
    fn test_taxed_transfer_splits_exactly() {
        let node = TestNode::in_memory();
        let recipient = SigningIdentity::generate().identity();
        node.mint("111");
        assert_eq!(node.send(&node.keys.inflator, recipient, "111"), ResponseCode::Ok);
        node.commit();

        assert_eq!(node.balance(node.keys.inflator.identity()), Amount::ZERO);
        assert_eq!(node.balance(recipient), coins("99.9"));
        assert_eq!(node.balance(node.keys.tax_receiver.identity()), coins("11.1"));
    }

    #[test]
    fn test_overspend_rejected_without_effect() {
        let node = TestNode::in_memory();
        let sender = SigningIdentity::generate();
        let recipient = SigningIdentity::generate().identity();
        node.mint("11");
        node.send(&node.keys.inflator, sender.identity(), "11");
        node.commit();
        // 10% of 11 went to the tax receiver.
        assert_eq!(node.balance(sender.identity()), coins("9.9"));

        assert_eq!(node.send(&sender, recipient, "11"), ResponseCode::Unauthorized);
        node.commit();
        assert_eq!(node.balance(sender.identity()), coins("9.9"));
        assert_eq!(node.balance(recipient), Amount::ZERO);
    }

    #[test]
    fn test_send_without_prior_funds_is_unauthorized() {
        let node = TestNode::in_memory();
        let stranger = SigningIdentity::generate();
        let code = node.send(&stranger, node.keys.inflator.identity(), "1");
        assert_eq!(code, ResponseCode::Unauthorized);
    }

    #[test]
    fn test_burn_reduces_balance_and_rejects_overdraw() {
        let node = TestNode::in_memory();
        let inflator = &node.keys.inflator;
        node.mint("50");
        let burn = |amount: &str| {
            node.deliver(DeliveryData::remove(inflator.identity(), coins(amount)), inflator)
        };
        assert_eq!(burn("20"), ResponseCode::Ok);
        assert_eq!(burn("31"), ResponseCode::Unauthorized);
        node.commit();
        assert_eq!(node.balance(inflator.identity()), coins("30"));
    }

    #[test]
    fn test_non_inflator_cannot_mint_or_burn() {
        let node = TestNode::in_memory();
        let outsider = SigningIdentity::generate();
        for data in [
            DeliveryData::add(outsider.identity(), coins("5")),
            DeliveryData::remove(outsider.identity(), coins("5")),
        ] {
            assert_eq!(node.deliver(data, &outsider), ResponseCode::Unauthorized);
        }
        node.commit();
        assert_eq!(node.balance(outsider.identity()), Amount::ZERO);
    }

    #[test]
    fn test_wrong_tax_reference_rejected() {
        let node = TestNode::in_memory();
        node.mint("10");
        let inflator = &node.keys.inflator;
        let data = DeliveryData::send(
            inflator.identity(),
            SigningIdentity::generate().identity(),
            format!("{TAX_REFERENCE}-old"),
            coins("1"),
        );
        assert_eq!(node.deliver(data, inflator), ResponseCode::Unauthorized);
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let node = TestNode::in_memory();
        let inflator = &node.keys.inflator;
        for amount in ["0", "-1"] {
            let data = DeliveryData::add(inflator.identity(), coins(amount));
            assert_eq!(node.deliver(data, inflator), ResponseCode::Unauthorized);
        }
    }

    // =============================================================================
    // SIGNATURES / ENCODING
    // =============================================================================

    #[test]
    fn test_tampered_payload_fails_signature() {
        let node = TestNode::in_memory();
        let inflator = &node.keys.inflator;
        let tx = node.tx(DeliveryData::add(inflator.identity(), coins("1")), inflator);
        let tampered = String::from_utf8(tx)
            .unwrap()
            .replace("\"amount\":\"1\"", "\"amount\":\"1000\"");

        let response = node.app.deliver_tx(tampered.as_bytes());
        assert_eq!(response.code, ResponseCode::Unauthorized);
        node.commit();
        assert_eq!(node.balance(inflator.identity()), Amount::ZERO);
    }

    #[test]
    fn test_signature_by_other_key_rejected() {
        let node = TestNode::in_memory();
        let impostor = SigningIdentity::generate();
        let data = DeliveryData::add(node.keys.inflator.identity(), coins("1"));
        assert_eq!(node.deliver(data, &impostor), ResponseCode::Unauthorized);
    }

    #[test]
    fn test_garbage_bytes_are_encoding_errors() {
        let node = TestNode::in_memory();
        assert_eq!(node.app.deliver_tx(b"\x00\x01").code, ResponseCode::EncodingError);
        assert_eq!(node.app.query(b"{\"data\":1}").code, ResponseCode::EncodingError);
        // CheckTx never inspects the payload.
        assert_eq!(node.app.check_tx(b"\x00\x01").code, ResponseCode::Ok);
    }

    // =============================================================================
    // QUERIES
    // =============================================================================

    #[test]
    fn test_stale_query_rejected() {
        let node = TestNode::in_memory();
        let owner = &node.keys.inflator;
        let fresh = node.query_own(owner);
        assert_eq!(fresh.code, ResponseCode::Ok);

        // A request signed now but answered after the wait window.
        let data = tl_05_balance_query::QueryData::own(
            owner.identity(),
            tl_05_balance_query::TimeSource::now(node.clock.as_ref()),
            "n",
        );
        let raw = tl_05_balance_query::QueryRequest::sign(data, owner)
            .encode()
            .unwrap();
        node.clock.advance(5_001);
        let stale = node.app.query(&raw);
        assert_eq!(stale.code, ResponseCode::Unauthorized);
        assert!(stale.value.is_none());
    }

    #[test]
    fn test_watcher_reads_other_balance_but_outsider_cannot() {
        let node = TestNode::in_memory();
        node.mint("7");
        node.commit();
        assert_eq!(node.balance(node.keys.inflator.identity()), coins("7"));

        let outsider = SigningIdentity::generate();
        let data = tl_05_balance_query::QueryData::on_behalf_of(
            outsider.identity(),
            node.keys.inflator.identity(),
            crate::fixtures::NOW,
            "n",
        );
        let raw = tl_05_balance_query::QueryRequest::sign(data, &outsider)
            .encode()
            .unwrap();
        assert_eq!(node.app.query(&raw).code, ResponseCode::Unauthorized);
    }

    #[test]
    fn test_query_does_not_see_uncommitted_deliveries() {
        let node = TestNode::in_memory();
        node.mint("5");
        node.commit();
        node.mint("5");

        assert_eq!(node.balance(node.keys.inflator.identity()), coins("5"));
        node.commit();
        assert_eq!(node.balance(node.keys.inflator.identity()), coins("10"));
    }

    // =============================================================================
    // BLOCK BOOKKEEPING
    // =============================================================================

    #[test]
    fn test_info_tracks_commits() {
        let node = TestNode::in_memory();
        let genesis = node.app.info();
        assert_eq!(genesis.last_block_height, 0);

        node.mint("1");
        let first = node.app.commit().unwrap();
        let second = node.app.commit().unwrap();

        let info = node.app.info();
        assert_eq!(info.last_block_height, 2);
        assert_eq!(info.last_block_app_hash, second.app_hash);
        assert_ne!(first.app_hash, second.app_hash);
        assert_ne!(genesis.last_block_app_hash, first.app_hash);
    }

    #[test]
    fn test_rejected_delivery_repeats_identically() {
        let node = TestNode::in_memory();
        let outsider = SigningIdentity::generate();
        let tx = node.tx(DeliveryData::add(outsider.identity(), coins("1")), &outsider);

        let first = node.app.deliver_tx(&tx);
        let second = node.app.deliver_tx(&tx);
        assert_eq!(first, second);
        assert_eq!(first.code, ResponseCode::Unauthorized);
    }
}
