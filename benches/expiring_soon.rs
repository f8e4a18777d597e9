//! This bench test loads a large pantry from disk and computes the
//! expiring-soon and browse views over it.

#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pantry::{
    BrowseQuery, FileStore, IngredientForm, JsonRepository, Pantry, QuickFilter, Repository,
    domain::Estimate,
};
use tempfile::TempDir;

const PACKINGS: [&str; 4] = ["fresh", "confection", "frozen", "dry"];
const LOCATIONS: [&str; 3] = ["fridge", "freezer", "cupboard"];

/// Generates a pantry with a mix of packings, ripeness and expiration dates
fn preseed_pantry(tmp_dir: &TempDir) {
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let mut ingredients = Vec::new();
    for i in 0..2_000 {
        let mut form = IngredientForm::new();
        form.set_name(format!("Item {i}"));
        form.set_location(LOCATIONS[i % LOCATIONS.len()]);
        form.set_packing(PACKINGS[i % PACKINGS.len()]);
        form.set_status(if i % 5 == 0 { "ripe" } else { "unripe" });
        form.set_open(i % 7 == 0);
        form.set_estimate(Estimate::ALL[i % Estimate::ALL.len()].keyword());

        ingredients.push(form.build(today).unwrap());
    }

    JsonRepository::new(FileStore::new(tmp_dir.path().to_path_buf()))
        .replace_all(&ingredients)
        .unwrap();
}

fn expiring_soon(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2025, 6, 3, 9, 0, 0).unwrap();

    c.bench_function("expiring soon", |b| {
        b.iter_batched(
            || {
                let tmp_dir = TempDir::new().unwrap();
                preseed_pantry(&tmp_dir);
                tmp_dir
            },
            |tmp_dir| {
                Pantry::open(tmp_dir.path().to_path_buf())
                    .expiring_soon(&now)
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn browse(c: &mut Criterion) {
    let tmp_dir = TempDir::new().unwrap();
    preseed_pantry(&tmp_dir);
    let pantry = Pantry::open(tmp_dir.path().to_path_buf());
    let query = BrowseQuery {
        quick: QuickFilter::Recent,
        location: "fridge".to_string(),
        ..BrowseQuery::default()
    };

    c.bench_function("browse recent in fridge", |b| {
        b.iter(|| pantry.browse(&query).unwrap());
    });
}

criterion_group!(benches, expiring_soon, browse);
criterion_main!(benches);
