use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minibank_accounts::NewAccount;
use minibank_core::AccountId;
use minibank_ledger::LedgerStore;

fn profile(i: usize) -> NewAccount {
    NewAccount {
        first_name: format!("Holder{i}"),
        last_name: "Bench".to_string(),
        email: format!("holder{i}@example.com"),
        password: "secret".to_string(),
    }
}

fn seeded_store(accounts: usize, opening: i64) -> (LedgerStore, Vec<AccountId>) {
    let store = LedgerStore::new();
    let ids = (0..accounts)
        .map(|i| {
            let account = store.insert_account(profile(i)).unwrap();
            store.deposit(account.id(), opening).unwrap();
            account.id()
        })
        .collect();
    (store, ids)
}

fn bench_post_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_transfer");

    for accounts in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(accounts),
            &accounts,
            |b, &accounts| {
                let (store, ids) = seeded_store(accounts, i64::MAX / 2);
                let mut next = 0usize;
                b.iter(|| {
                    let sender = ids[next % ids.len()];
                    let recipient = ids[(next + 1) % ids.len()];
                    next += 1;
                    black_box(store.post_transfer(sender, recipient, 1).unwrap());
                });
            },
        );
    }

    group.finish();
}

fn bench_history_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_for");

    for transactions in [100usize, 1_000, 10_000] {
        let (store, ids) = seeded_store(10, i64::MAX / 2);
        for i in 0..transactions {
            let sender = ids[i % ids.len()];
            let recipient = ids[(i + 1) % ids.len()];
            store.post_transfer(sender, recipient, 1).unwrap();
        }

        group.throughput(Throughput::Elements(transactions as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(transactions),
            &ids[0],
            |b, id| {
                b.iter(|| black_box(store.history_for(*id).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_post_transfer, bench_history_filter);
criterion_main!(benches);
