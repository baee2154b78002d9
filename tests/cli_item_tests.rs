//! End-to-end tests for `pb item` commands.

mod fixtures;
use belongings::models::{Season, Store};
use fixtures::*;

fn descriptions(store: &Store, category: &str) -> Vec<String> {
    store
        .items(category)
        .unwrap()
        .iter()
        .map(|i| i.description.clone())
        .collect()
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_item_add_appends() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "charger", "--season", "n"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let store = read_store(&store_path);
    assert_eq!(descriptions(&store, "tech"), ["laptop", "phone", "charger"]);
    assert_eq!(store.items("tech").unwrap()[2].index, None);
}

#[test]
fn test_item_add_at_index() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "tablet", "-s", "n", "--index", "1"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("position 2"));

    let store = read_store(&store_path);
    assert_eq!(descriptions(&store, "tech"), ["laptop", "tablet", "phone"]);
    assert_eq!(store.items("tech").unwrap()[1].index, Some(1));
}

#[test]
fn test_item_add_index_clamped() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "cable", "--index", "-3"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "mouse", "--index", "40"],
    );
    assert_eq!(output.status.code(), Some(0));

    let store = read_store(&store_path);
    assert_eq!(
        descriptions(&store, "tech"),
        ["cable", "laptop", "phone", "mouse"]
    );
}

#[test]
fn test_item_add_uses_default_season() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(&temp_dir, &store_path, &["item", "add", "health", "vitamins"]);

    assert_eq!(output.status.code(), Some(0));
    let store = read_store(&store_path);
    assert_eq!(store.items("health").unwrap()[0].season, Season::Neutral);
}

#[test]
fn test_item_add_uses_configured_default_season() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());
    let config_dir = temp_dir.path().join("config");

    let output = pb_command(&["config", "set", "--default-season", "w"], &config_dir)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = run_pb(&temp_dir, &store_path, &["item", "add", "clothing", "gloves"]);
    assert_eq!(output.status.code(), Some(0));

    let store = read_store(&store_path);
    let gloves = store.items("clothing").unwrap().last().unwrap();
    assert_eq!(gloves.season, Season::Winter);
}

#[test]
fn test_item_add_invalid_season() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "charger", "--season", "x"],
    );

    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid season should fail with exit code 1"
    );
    assert!(stderr(&output).contains("Invalid season"));
    assert_eq!(read_store(&store_path), sample_store());
}

#[test]
fn test_item_add_season_word_rejected() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "tech", "charger", "--season", "summer"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid season"));
    assert_eq!(read_store(&store_path), sample_store());
}

#[test]
fn test_item_add_unknown_category() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(&temp_dir, &store_path, &["item", "add", "garden", "rake"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
}

// ============================================================================
// Remove Command Tests
// ============================================================================

#[test]
fn test_item_add_then_remove_restores_store() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "add", "clothing", "hat", "-s", "s", "-i", "1"],
    );
    assert_eq!(output.status.code(), Some(0));

    let output = run_pb(&temp_dir, &store_path, &["item", "remove", "clothing", "hat"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(read_store(&store_path), sample_store());
}

#[test]
fn test_item_remove_missing_item() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(&temp_dir, &store_path, &["item", "remove", "tech", "camera"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
}

// ============================================================================
// Move and List Command Tests
// ============================================================================

#[test]
fn test_item_move() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "move", "tech", "phone", "personal-care"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let store = read_store(&store_path);
    assert_eq!(descriptions(&store, "tech"), ["laptop"]);
    assert_eq!(
        descriptions(&store, "personal-care"),
        ["toothbrush", "phone"]
    );
}

#[test]
fn test_item_move_to_unknown_category() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(
        &temp_dir,
        &store_path,
        &["item", "move", "tech", "phone", "garden"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(read_store(&store_path), sample_store());
}

#[test]
fn test_item_list_json() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(&temp_dir, &store_path, &["item", "list", "clothing", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    assert_eq!(result["category"], "clothing");
    assert_eq!(result["count"], 2);
    assert_eq!(result["items"][0]["description"], "coat");
    assert_eq!(result["items"][0]["season"], "w");
    assert_eq!(result["items"][0]["index"], 0);
    assert_eq!(result["items"][1]["description"], "shorts");
    assert!(result["items"][1].get("index").is_none());
}

#[test]
fn test_item_list_human_readable() {
    let (store_path, temp_dir) = create_temp_store_file(&sample_store());

    let output = run_pb(&temp_dir, &store_path, &["item", "list", "clothing"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("coat"));
    assert!(stdout.contains("winter"));
    assert!(stdout.contains("summer"));
    assert!(stdout.contains("index 0"));
    assert_eq!(stdout.matches("index").count(), 1, "only coat has an index");
}
