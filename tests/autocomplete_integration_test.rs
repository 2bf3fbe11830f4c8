use anyhow::Result;
use sthlm_map_search::{
    refresh_map, AddressHooks, AutocompleteController, Candidate, CandidateList, MemoryPage,
    RecordingNotifier, SearchConfig, SearchError, SelectionEvent,
};

/// 輸入 "test" 時應取得兩個建議並可選取
#[test]
fn test_type_render_and_select_with_enter() -> Result<()> {
    let config = SearchConfig::default();
    let notifier = RecordingNotifier::new();
    let controller = AutocompleteController::new(
        config.widget.clone(),
        AddressHooks::new(config.candidates.clone(), &notifier),
    );

    assert_eq!(
        controller.suggestions("test"),
        Some(vec![
            Candidate::new("Testfastighet 7", 'f'),
            Candidate::new("Testgatan 1", 'g'),
        ])
    );

    let rendered = controller.query("test")?.expect("term is long enough");
    assert_eq!(rendered.len(), 2);
    assert!(rendered[1].contains(r#"data-addr="Testgatan 1""#));
    assert!(rendered[1].contains(r#"<img src="static/g.png">"#));
    assert!(rendered[1].ends_with("<b>Test</b>gatan 1</div>"));

    controller.select(&SelectionEvent::from_event_type("keydown"), "test", &rendered[1])?;
    controller.select(&SelectionEvent::from_event_type("click"), "test", &rendered[0])?;

    assert_eq!(
        notifier.messages(),
        vec![
            "Item \"Testgatan 1 (g)\" selected by pressing enter.".to_string(),
            "Item \"Testfastighet 7 (f)\" selected by mouse click.".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_empty_term_stays_below_default_min_chars() -> Result<()> {
    let controller = AutocompleteController::new(
        SearchConfig::default().widget,
        AddressHooks::new(CandidateList::default(), RecordingNotifier::new()),
    );
    assert_eq!(controller.query("")?, None);
    assert_eq!(controller.query("xyz")?, Some(vec![]));
    Ok(())
}

#[test]
fn test_select_unrelated_markup_fails_loudly() {
    let notifier = RecordingNotifier::new();
    let controller = AutocompleteController::new(
        SearchConfig::default().widget,
        AddressHooks::new(CandidateList::default(), &notifier),
    );

    let result = controller.select(&SelectionEvent::Click, "t", "<div>plain</div>");
    assert!(matches!(result, Err(SearchError::MissingAttribute { .. })));
    assert!(notifier.last().is_none());
}

#[test]
fn test_map_refresh_with_configured_ids() -> Result<()> {
    let config = SearchConfig::from_toml_str(
        r#"
[map]
base_url = "https://maps.example.com/DPWebMap.html?"

[page]
input_id = "street"
frame_id = "map"
"#,
    )?;

    let mut page = MemoryPage::new().with_input("street", "").with_frame("map");
    refresh_map(&mut page, &config.page, &config.map)?;
    assert_eq!(
        page.frame_src("map"),
        Some("https://maps.example.com/DPWebMap.html?zoom=7&layers=TTTB000000000T&super_search=")
    );

    page.set_input("street", "Götgatan 1&zoom=1");
    refresh_map(&mut page, &config.page, &config.map)?;
    assert_eq!(
        page.frame_src("map"),
        Some("https://maps.example.com/DPWebMap.html?zoom=7&layers=TTTB000000000T&super_search=Götgatan 1&zoom=1")
    );
    Ok(())
}
