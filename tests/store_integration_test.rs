use anyhow::Result;
use sthlm_map_search::{
    AddressHooks, AutocompleteController, Candidate, LocalStorage, RecordingNotifier,
    SearchConfig, StoredSource, SuggestionStore,
};
use tempfile::TempDir;

/// 建立前綴索引、寫入檔案後重新載入
#[test]
fn test_build_save_and_reload_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let config = SearchConfig::default();
    let store = SuggestionStore::build_from(&config.candidates, config.store.max_prefix_chars);
    store.save(&storage, "index/suggestions.json")?;

    let reloaded = SuggestionStore::load(&storage, "index/suggestions.json")?;
    assert_eq!(reloaded, store);
    assert_eq!(
        reloaded.all_suggestions()["to"],
        vec![Candidate::new("Torsgatan 7", 'g')]
    );
    Ok(())
}

#[test]
fn test_missing_store_loads_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    assert!(SuggestionStore::load(&storage, "nope.json")?.is_empty());
    Ok(())
}

#[test]
fn test_corrupt_store_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("bad.json"), "not json")?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    assert!(matches!(
        SuggestionStore::load(&storage, "bad.json"),
        Err(sthlm_map_search::SearchError::SerializationError(_))
    ));
    Ok(())
}

#[test]
fn test_controller_over_stored_source() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("search.toml");
    std::fs::write(
        &config_path,
        r#"
[[candidates]]
label = "Hornsgatan 12"
tag = "g"

[[candidates]]
label = "Hornstull 1"
tag = "f"

[store]
max_prefix_chars = 2
"#,
    )?;
    let config = SearchConfig::from_file(&config_path)?;

    let store = SuggestionStore::build_from(&config.candidates, config.store.max_prefix_chars);
    let notifier = RecordingNotifier::new();
    let controller = AutocompleteController::new(
        config.widget.clone(),
        StoredSource::new(store, AddressHooks::new(config.candidates.clone(), &notifier)),
    );

    assert_eq!(controller.suggestions("HO").map(|s| s.len()), Some(2));
    // not a stored prefix, answered by the linear scan
    assert_eq!(
        controller.suggestions("stull"),
        Some(vec![Candidate::new("Hornstull 1", 'f')])
    );

    let rendered = controller.query("horn")?.unwrap_or_default();
    assert!(rendered[0].ends_with("<b>Horn</b>sgatan 12</div>"));
    Ok(())
}
