// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use adbench_model::{BenchmarkDataset, ChartPoint, Currency, Identifier, LoadError, MetricSample};

#[test]
fn metric_sample_rejects_unknown_fields() {
    let raw = r#"{
      "metric":"Overall ROAS",
      "measured_value":4.9,
      "benchmark_value":1.5,
      "unit":"ratio",
      "better_direction":"higher",
      "status":"excellent"
    }"#;
    assert!(serde_json::from_str::<MetricSample>(raw).is_err());
}

#[test]
fn identifier_is_validated_on_decode() {
    assert!(serde_json::from_str::<Identifier>(r#"" padded""#).is_err());
    let id: Identifier = serde_json::from_str(r#""Snapchat""#).expect("decode");
    assert_eq!(serde_json::to_string(&id).expect("encode"), r#""Snapchat""#);
}

#[test]
fn currency_codes_are_uppercase_on_the_wire() {
    assert_eq!(serde_json::to_string(&Currency::Usd).expect("encode"), r#""USD""#);
    assert_eq!(
        serde_json::from_str::<Currency>(r#""SAR""#).expect("decode"),
        Currency::Sar
    );
    assert!(serde_json::from_str::<Currency>(r#""EUR""#).is_err());
}

#[test]
fn chart_point_keeps_charting_field_names() {
    let value = serde_json::to_value(ChartPoint::new("Meta CTR", 1.1, 0.83)).expect("encode");
    assert_eq!(value, serde_json::json!({"metric":"Meta CTR","benchmark":1.1,"yours":0.83}));
}

#[test]
fn dataset_loads_from_yaml_file() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let yaml = serde_yaml::to_string(&dataset).expect("yaml encode");
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    file.write_all(yaml.as_bytes()).expect("write yaml");
    let loaded = BenchmarkDataset::load(file.path()).expect("load yaml");
    assert_eq!(loaded, dataset);
}

#[test]
fn dataset_load_rejects_unknown_extension() {
    let file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("tempfile");
    let err = BenchmarkDataset::load(file.path()).expect_err("csv is unsupported");
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn dataset_decode_runs_validation() {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    let mut value = serde_json::to_value(&dataset).expect("encode");
    value["platforms"][0]["benchmark"]["roas"] = serde_json::json!(0);
    let err = BenchmarkDataset::from_json_str(&value.to_string()).expect_err("must reject");
    assert!(matches!(err, LoadError::Validation(_)));
}

#[test]
fn dataset_decode_reports_parse_errors() {
    let err = BenchmarkDataset::from_json_str("{").expect_err("truncated json");
    assert!(err.to_string().starts_with("dataset json decode failed"));
}
