use criterion::{criterion_group, criterion_main, Criterion};
use steam_inventory_aggregator::{Inventory, InventoryPage, SteamID};

fn criterion_benchmark(c: &mut Criterion) {
    let page_bytes = include_bytes!("../src/response/fixtures/inventory_page_1.json");
    let page = serde_json::from_slice::<InventoryPage>(page_bytes).unwrap();
    let mut inventory = Inventory::new(SteamID::from(76500000000000001), 730, 2);
    
    for _ in 0..500 {
        inventory.items.extend(page.items.iter().copied());
        inventory.descriptions.extend(page.descriptions.iter().cloned());
    }
    
    c.bench_function("deserializes inventory page", |b| b.iter(|| {
        serde_json::from_slice::<InventoryPage>(page_bytes).ok();
    }));
    
    c.bench_function("joins items with descriptions", |b| b.iter(|| {
        inventory.assets().ok();
    }));
    
    c.bench_function("finds description for last item", |b| b.iter(|| {
        inventory.find_description(inventory.items.last());
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
