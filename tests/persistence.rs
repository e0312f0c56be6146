// tests/persistence.rs

//! Catalog database and cookbook file tests: imports, reloads, rollbacks.

mod common;

use common::{ingredient, recipe, setup_test_db};
use cookbook::{EntryKind, Error, db, loader, summarize};
use std::fs;

const KITCHEN_JSON: &str = r#"[
    {"type": "ingredient", "name": "egg", "cookTime": 5},
    {"type": "ingredient", "name": "flour", "cookTime": 2},
    {"type": "recipe", "name": "batter",
     "requiredItems": [{"name": "egg", "quantity": 2}, {"name": "flour", "quantity": 1}]},
    {"type": "recipe", "name": "cake",
     "requiredItems": [{"name": "batter", "quantity": 3}, {"name": "egg", "quantity": 1}]}
]"#;

#[test]
fn test_import_file_then_summarize_from_fresh_connection() {
    let (temp_dir, db_path) = setup_test_db();
    let book = temp_dir.path().join("kitchen.json");
    fs::write(&book, KITCHEN_JSON).unwrap();

    let entries = loader::parse_entries_file(&book).unwrap();
    let mut conn = db::open(&db_path).unwrap();
    assert_eq!(db::register_entries(&mut conn, entries).unwrap(), 4);
    drop(conn);

    let store = db::open_catalog(&db_path).unwrap();
    let summary = summarize("cake", &store).unwrap();
    assert_eq!(summary.cook_time, 41.0);
    assert_eq!(summary.quantity_of("egg"), Some(7.0));
    assert_eq!(summary.quantity_of("flour"), Some(3.0));
}

#[test]
fn test_toml_import() {
    let (temp_dir, db_path) = setup_test_db();
    let book = temp_dir.path().join("pantry.toml");
    fs::write(
        &book,
        r#"
[[entry]]
type = "ingredient"
name = "rice"
cookTime = 20

[[entry]]
type = "ingredient"
name = "water"
cookTime = 0

[[entry]]
type = "recipe"
name = "steamed-rice"
requiredItems = [
    { name = "rice", quantity = 1 },
    { name = "water", quantity = 2 },
]
"#,
    )
    .unwrap();

    let entries = loader::parse_entries_file(&book).unwrap();
    let mut conn = db::open(&db_path).unwrap();
    db::register_entries(&mut conn, entries).unwrap();

    let recipes = db::list_entries(&conn, Some(EntryKind::Recipe)).unwrap();
    assert_eq!(recipes.len(), 1);

    let store = db::load_catalog(&conn).unwrap();
    assert_eq!(summarize("steamed-rice", &store).unwrap().cook_time, 20.0);
}

#[test]
fn test_failed_import_leaves_database_untouched() {
    let (_temp_dir, db_path) = setup_test_db();
    let mut conn = db::open(&db_path).unwrap();
    db::register_entries(&mut conn, vec![ingredient("egg", 5.0)]).unwrap();

    let entries = loader::parse_entries(KITCHEN_JSON, loader::CookbookFormat::Json).unwrap();
    let err = db::register_entries(&mut conn, entries).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(ref name) if name == "egg"));

    let all = db::list_entries(&conn, None).unwrap();
    assert_eq!(all.len(), 1);
    assert!(db::find_entry(&conn, "batter").unwrap().is_none());
}

#[test]
fn test_unresolved_recipe_persists_and_resolves_later() {
    let (_temp_dir, db_path) = setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    db::register_entries(&mut conn, vec![recipe("toast", &[("bread", 1.0)])]).unwrap();
    let store = db::load_catalog(&conn).unwrap();
    assert!(matches!(
        summarize("toast", &store),
        Err(Error::UnresolvableReference { .. })
    ));

    db::register_entries(&mut conn, vec![ingredient("bread", 3.0)]).unwrap();
    let store = db::load_catalog(&conn).unwrap();
    assert_eq!(summarize("toast", &store).unwrap().cook_time, 3.0);
}

#[test]
fn test_required_item_order_survives_reload() {
    let (_temp_dir, db_path) = setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    let stew = recipe("stew", &[("potato", 3.0), ("carrot", 2.0), ("beef", 1.0), ("onion", 1.0)]);
    db::register_entries(&mut conn, vec![stew.clone()]).unwrap();

    assert_eq!(db::find_entry(&conn, "stew").unwrap(), Some(stew));
}
