//! Benchmark for swap memo composition and transaction assembly

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thorswap::config::NetworkConfig;
use thorswap::swap::{build_memo, validate_address, Chain, FixedLimitQuoter, SwapBuilder, SwapRequest};

fn fixture_request() -> SwapRequest {
    SwapRequest {
        from_chain: Chain::Bnb,
        to_chain: Chain::Btc,
        from_address: "bnb1z53wwe7md6cewz9sqwqzn0aavpaun0gwt6qy7j".to_string(),
        to_asset_symbol: "BTC".to_string(),
        limit: None,
        to_address: "bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8".to_string(),
        vault_address: "bnb1ksxqxurvejkndenuv0alqawpr3e4vtqk855aal".to_string(),
        amount: "10000000".to_string(),
    }
}

fn bench_build(c: &mut Criterion) {
    let builder = SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("343050111"));
    let request = fixture_request();

    c.bench_function("swap_build_bnb_btc", |b| {
        b.iter(|| black_box(builder.build(black_box(&request))))
    });
}

fn bench_memo(c: &mut Criterion) {
    c.bench_function("build_memo", |b| {
        b.iter(|| {
            black_box(build_memo(
                Chain::Btc,
                black_box("BTC"),
                black_box("bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8"),
                343_050_111u64,
            ))
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_address");
    let cases = [
        (Chain::Bnb, "bnb1z53wwe7md6cewz9sqwqzn0aavpaun0gwt6qy7j"),
        (Chain::Btc, "bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8"),
        (Chain::Eth, "0xB9F5771C27664bF2282D98E09D7F50cEc7cB01a7"),
    ];
    for (chain, address) in cases {
        group.bench_function(chain.ticker(), |b| {
            b.iter(|| black_box(validate_address(chain, black_box(address))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_memo, bench_validate);
criterion_main!(benches);
