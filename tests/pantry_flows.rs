//! End-to-end flows over a pantry stored on disk.

use std::{convert::Infallible, fs};

use chrono::{NaiveDate, TimeZone, Utc};
use pantry::{
    BrowseQuery, IngredientForm, IngredientKey, Pantry, PantryError, ProductLookup, QuickFilter,
    Repository, StoreError,
    domain::packing::{CONFECTION, FRESH},
};
use tempfile::TempDir;

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn add(target: &mut Pantry<impl Repository>, form: &IngredientForm) {
    target.add(form.build(june_first()).unwrap()).unwrap();
}

#[test]
fn estimate_is_resolved_and_persisted() {
    let tmp = TempDir::new().unwrap();
    let mut pantry = Pantry::open(tmp.path().to_path_buf());

    let mut form = IngredientForm::new();
    form.set_name("Milk");
    form.set_category("dairy");
    form.set_location("fridge");
    form.set_estimate("1 week");
    add(&mut pantry, &form);

    let reopened = Pantry::open(tmp.path().to_path_buf());
    let stored = reopened
        .find(&IngredientKey::new("Milk", "2025-06-08"))
        .unwrap();
    assert_eq!(stored.category(), Some("dairy"));

    let raw = fs::read_to_string(tmp.path().join("ingredients.json")).unwrap();
    assert_eq!(
        raw,
        r#"[{"name":"Milk","category":"dairy","location":"fridge","expirationDate":"2025-06-08"}]"#
    );
}

#[test]
fn ripe_item_far_from_expiry_needs_attention() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ingredients.json"),
        r#"[
            {"name":"Milk","packing":"fresh","status":"ripe","expirationDate":"2099-01-01"},
            {"name":"Rice","packing":"dry","expirationDate":"2099-01-01"}
        ]"#,
    )
    .unwrap();
    let pantry = Pantry::open(tmp.path().to_path_buf());

    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let expiring = pantry.expiring_soon(&now).unwrap();

    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].name.as_str(), "Milk");
}

#[test]
fn edit_keeps_check_history_and_applies_packing_rules() {
    let tmp = TempDir::new().unwrap();
    let mut pantry = Pantry::open(tmp.path().to_path_buf());

    let mut form = IngredientForm::new();
    form.set_name("Mango");
    form.set_packing(FRESH);
    form.set_status("unripe");
    form.set_exact_date(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    add(&mut pantry, &form);

    let key = IngredientKey::new("Mango", "2025-06-10");
    let checked_at = Utc.with_ymd_and_hms(2025, 6, 2, 7, 30, 0).unwrap();
    pantry.mark_checked(&key, checked_at).unwrap();

    let mut edit = IngredientForm::edit(&pantry.find(&key).unwrap(), june_first());
    edit.set_name("Dried Mango");
    edit.set_packing(CONFECTION);
    edit.set_open(true);
    let updated = edit.build(june_first()).unwrap();
    pantry.update(&key, &updated).unwrap();

    let stored = pantry
        .find(&IngredientKey::new("Dried Mango", "2025-06-10"))
        .unwrap();
    assert_eq!(stored.status(), None);
    assert!(stored.is_open());
    assert_eq!(stored.last_checked(), Some("2025-06-02T07:30:00.000Z"));
}

struct OneProduct;

impl ProductLookup for OneProduct {
    type Error = Infallible;

    fn lookup(&self, code: &str) -> Result<Option<String>, Self::Error> {
        Ok((code == "5000112548167").then(|| "Sparkling Water".to_string()))
    }
}

#[test]
fn scanned_product_is_completed_through_edit() {
    let tmp = TempDir::new().unwrap();
    let mut pantry = Pantry::open(tmp.path().to_path_buf());

    let scanned = pantry
        .register_scan(&OneProduct, "5000112548167")
        .unwrap()
        .unwrap();
    let missing = BrowseQuery {
        quick: QuickFilter::Missing,
        ..BrowseQuery::default()
    };
    assert_eq!(pantry.browse(&missing).unwrap().len(), 1);

    let mut form = IngredientForm::edit(&scanned, june_first());
    form.set_category("drinks");
    form.set_location("cellar");
    form.set_estimate("1 month");
    pantry
        .update(&scanned.key(), &form.build(june_first()).unwrap())
        .unwrap();

    assert!(pantry.browse(&missing).unwrap().is_empty());
    assert!(
        pantry
            .find(&IngredientKey::new("Sparkling Water", "2025-07-01"))
            .is_ok()
    );
}

#[test]
fn recent_view_uses_configured_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "_version = \"1\"\nrecent_limit = 2\n",
    )
    .unwrap();
    let mut pantry = Pantry::open(tmp.path().to_path_buf());

    for name in ["Apples", "Bread", "Cheese"] {
        let mut form = IngredientForm::new();
        form.set_name(name);
        add(&mut pantry, &form);
    }

    let recent = pantry
        .browse(&BrowseQuery {
            quick: QuickFilter::Recent,
            ..BrowseQuery::default()
        })
        .unwrap();
    let names: Vec<_> = recent.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Cheese", "Bread"]);
}

#[test]
fn corrupt_store_is_reported_and_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ingredients.json");
    fs::write(&path, "not json").unwrap();
    let mut pantry = Pantry::open(tmp.path().to_path_buf());

    let mut form = IngredientForm::new();
    form.set_name("Eggs");
    let error = pantry.add(form.build(june_first()).unwrap()).unwrap_err();

    assert!(matches!(
        error,
        PantryError::Store(StoreError::Parse { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn blank_name_is_rejected_before_storage() {
    let mut form = IngredientForm::new();
    form.set_name("   ");

    let error = PantryError::from(form.build(june_first()).unwrap_err());

    assert_eq!(error.to_string(), "ingredient name must not be empty");
}

#[test]
fn oversized_configured_window_selects_every_dated_item() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "_version = \"1\"\nexpiring_window_days = 4294967295\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("ingredients.json"),
        r#"[
            {"name":"Honey","packing":"dry","expirationDate":"9999-12-31"},
            {"name":"Salt","packing":"dry","expirationDate":""}
        ]"#,
    )
    .unwrap();
    let pantry = Pantry::open(tmp.path().to_path_buf());

    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let expiring = pantry.expiring_soon(&now).unwrap();

    assert_eq!(pantry.config().expiring_window_days(), u32::MAX);
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].name.as_str(), "Honey");
}
