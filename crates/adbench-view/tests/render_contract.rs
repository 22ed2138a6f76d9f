// SPDX-License-Identifier: Apache-2.0

use adbench_model::BenchmarkDataset;
use adbench_view::{assemble, render, ActiveSection, Tab, TabSelector};

#[test]
fn fresh_session_renders_overview() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let view_model = assemble(&dataset).expect("assemble");
    let frame = render(&view_model, &TabSelector::new());
    assert_eq!(frame.active, Tab::Overview);
    assert!(matches!(frame.section, ActiveSection::Overview(_)));
}

#[test]
fn each_tab_renders_its_own_section_and_one_active_entry() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let view_model = assemble(&dataset).expect("assemble");
    let mut selector = TabSelector::new();
    for tab in Tab::ALL {
        selector.select(tab);
        let frame = render(&view_model, &selector);
        assert_eq!(frame.section.tab(), tab);
        let active: Vec<Tab> = frame.tabs.iter().filter(|t| t.active).map(|t| t.tab).collect();
        assert_eq!(active, [tab]);
        assert_eq!(frame.tabs.len(), 4);
    }
}

#[test]
fn rendered_frame_is_tagged_by_view_name() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let view_model = assemble(&dataset).expect("assemble");
    let frame = render(&view_model, &TabSelector::starting_at(Tab::Insights));
    let value = serde_json::to_value(&frame).expect("encode");
    assert_eq!(value["active"], serde_json::json!("insights"));
    assert_eq!(value["section"]["view"], serde_json::json!("insights"));
    assert_eq!(
        value["section"]["data"]["weaknesses"][0]["title"],
        serde_json::json!("Dangerous Platform Concentration")
    );
    assert_eq!(value["tabs"][2]["label"], serde_json::json!("Insights"));
}

#[test]
fn render_does_not_touch_the_selector() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let view_model = assemble(&dataset).expect("assemble");
    let selector = TabSelector::starting_at(Tab::Recommendations);
    let _ = render(&view_model, &selector);
    assert_eq!(selector.active(), Tab::Recommendations);
}
