//! Property tests for memo purity, address rejection and transaction round-trips

use proptest::prelude::*;

use thorswap::config::NetworkConfig;
use thorswap::swap::{
    build_memo, decode_signing_input, validate_address, Chain, FixedLimitQuoter, SwapBuilder,
    SwapRequest,
};

const ADDRESS_BNB: &str = "bnb1z53wwe7md6cewz9sqwqzn0aavpaun0gwt6qy7j";
const VAULT_BNB: &str = "bnb1ksxqxurvejkndenuv0alqawpr3e4vtqk855aal";

fn chain_strategy() -> impl Strategy<Value = Chain> {
    prop::sample::select(Chain::ALL.to_vec())
}

fn valid_address(chain: Chain) -> &'static str {
    match chain {
        Chain::Thor => "thor1z53wwe7md6cewz9sqwqzn0aavpaun0gw0exn2r",
        Chain::Bnb => ADDRESS_BNB,
        Chain::Btc => "bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8",
        Chain::Eth => "0xB9F5771C27664bF2282D98E09D7F50cEc7cB01a7",
    }
}

proptest! {
    #[test]
    fn memo_is_deterministic(
        chain in chain_strategy(),
        symbol in "[A-Z]{1,8}",
        address in "[a-z0-9]{1,64}",
        limit in any::<u64>(),
    ) {
        let first = build_memo(chain, &symbol, &address, limit);
        let second = build_memo(chain, &symbol, &address, limit);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first,
            format!("SWAP:{}.{}:{}:{}", chain.ticker(), symbol, address, limit)
        );
    }

    #[test]
    fn valid_address_rejected_by_other_chains(owner in chain_strategy(), other in chain_strategy()) {
        prop_assume!(owner != other);
        prop_assert!(validate_address(owner, valid_address(owner)));
        prop_assert!(!validate_address(other, valid_address(owner)));
    }

    #[test]
    fn validators_never_panic(chain in chain_strategy(), input in "\\PC{0,100}") {
        let _ = validate_address(chain, &input);
    }

    #[test]
    fn built_memo_round_trips(
        to_chain in chain_strategy(),
        symbol in "[A-Z]{2,6}",
        amount in 0i64..=i64::MAX,
        limit in any::<u64>(),
    ) {
        let builder = SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("1"));
        let to_address = valid_address(to_chain);
        let request = SwapRequest {
            from_chain: Chain::Bnb,
            to_chain,
            from_address: ADDRESS_BNB.to_string(),
            to_asset_symbol: symbol.clone(),
            limit: Some(limit.to_string()),
            to_address: to_address.to_string(),
            vault_address: VAULT_BNB.to_string(),
            amount: amount.to_string(),
        };

        let output = builder.build(&request).unwrap();
        let decoded = decode_signing_input(&output.tx).unwrap();
        prop_assert_eq!(decoded.memo, build_memo(to_chain, &symbol, to_address, limit));

        let order = decoded.send_order.unwrap();
        prop_assert_eq!(order.inputs[0].coins[0].amount, amount);
        prop_assert_eq!(order.outputs[0].coins[0].amount, amount);
    }

    #[test]
    fn unsupported_source_never_produces_bytes(
        from_chain in chain_strategy(),
        to_chain in chain_strategy(),
    ) {
        prop_assume!(from_chain != Chain::Bnb);
        let builder = SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("1"));
        let (tx, err) = thorswap::swap::legacy::build(
            &builder,
            from_chain,
            to_chain,
            valid_address(from_chain),
            "X",
            "",
            valid_address(to_chain),
            VAULT_BNB,
            "1",
        );
        prop_assert!(tx.is_empty());
        prop_assert_eq!(err, format!("Invalid from chain: {}", from_chain.code()));
    }
}
