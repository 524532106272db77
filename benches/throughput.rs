use std::thread;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use library_inventory::{
    book::{Book, Member},
    core::store::InventoryStore,
    runtime::{config::LibraryConfig, library::Library},
};

fn seeded_store(books: u32, members: u32) -> InventoryStore {
    let mut store = InventoryStore::new();
    for id in 0..books {
        store.add_book(Book::new(id, format!("Title {id}"), "Anon"));
    }
    for id in 0..members {
        store.add_member(Member::new(id, format!("Member {id}")));
    }
    store
}

fn bench_borrow_return(c: &mut Criterion) {
    c.bench_function("store_borrow_return_10k", |b| {
        let mut store = seeded_store(10_000, 100);
        b.iter(|| {
            for id in 0..10_000u32 {
                store.borrow_book(id, id % 100).expect("borrow");
            }
            for id in 0..10_000u32 {
                store.return_book(id, id % 100).expect("return");
            }
        });
    });
}

fn bench_available_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_query");
    for n in [100u32, 1_000, 10_000] {
        let mut store = seeded_store(n, 1);
        for id in (0..n).step_by(2) {
            store.reserve_book(id, 0).expect("reserve");
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| store.available_books());
        });
    }
    group.finish();
}

fn bench_contended_library(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .expect("runtime");
    let library = Library::with_handle(rt.handle().clone(), LibraryConfig::default());
    for id in 0..64u32 {
        library.add_book(Book::new(id, format!("Title {id}"), "Anon"));
    }
    for id in 0..4u32 {
        library.add_member(Member::new(id, format!("Member {id}")));
    }

    c.bench_function("library_4_threads_borrow_return", |b| {
        b.iter(|| {
            thread::scope(|s| {
                for member in 0..4u32 {
                    let library = library.clone();
                    s.spawn(move || {
                        for id in (member..64).step_by(4) {
                            library.borrow_book(id, member).expect("borrow");
                            library.return_book(id, member).expect("return");
                        }
                    });
                }
            });
        });
    });
}

criterion_group!(benches, bench_borrow_return, bench_available_query, bench_contended_library);
criterion_main!(benches);
