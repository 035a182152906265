//! Black-box driver tests: configuration in, JSON records out.

use std::fs;
use std::path::PathBuf;

use quotealloc_cli::config::CliConfig;
use quotealloc_cli::dto::AllocationInput;
use quotealloc_cli::{allocate_input, render, run};

fn write_input(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quotealloc-{}-{name}.json", std::process::id()));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn sample_data_produces_expected_records() {
    let records = run(&CliConfig::default()).unwrap();

    let summary: Vec<(u32, Option<u32>, i64)> = records
        .iter()
        .map(|r| (r.purchase_id.get(), r.quotation_id.map(|q| q.get()), r.allocated_qty))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, Some(3), 20),
            (1, Some(4), 20),
            (1, Some(1), 60),
            (2, Some(2), 50),
            (3, None, -60),
        ]
    );
}

#[test]
fn rendered_output_is_a_json_array() {
    let records = run(&CliConfig::default()).unwrap();
    let json = render(&records, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["kind"], "special");
    assert_eq!(items[0]["valid_to"], "2022-06-30");
    assert!(items[4]["quotation_id"].is_null());
}

#[test]
fn reads_input_file() {
    let path = write_input(
        "file",
        r#"{
            "purchases": [
                {"id": 10, "product_id": 5, "quantity": 30, "shipping_date": "2023-03-10"}
            ],
            "quotations": [
                {"id": 1, "kind": "special", "product_id": 5, "remaining_qty": 12, "price": 9,
                 "valid_from": "2023-03-01", "valid_to": "2023-03-31"}
            ]
        }"#,
    );
    let config = CliConfig {
        input: Some(path.clone()),
        ..CliConfig::default()
    };

    let records = run(&config).unwrap();
    fs::remove_file(&path).ok();

    let quantities: Vec<i64> = records.iter().map(|r| r.allocated_qty).collect();
    assert_eq!(quantities, vec![12, -18]);
}

#[test]
fn duplicate_ids_fail_only_when_validating() {
    let body = r#"{
        "purchases": [
            {"id": 1, "product_id": 5, "quantity": 3, "shipping_date": "2023-03-10"},
            {"id": 1, "product_id": 5, "quantity": 4, "shipping_date": "2023-03-10"}
        ],
        "quotations": []
    }"#;
    let path = write_input("dupes", body);

    let strict = CliConfig {
        input: Some(path.clone()),
        ..CliConfig::default()
    };
    let err = run(&strict).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate purchase id 1"));

    let lenient = CliConfig {
        validate: false,
        ..strict
    };
    let records = run(&lenient).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.is_shortfall()));
}

#[test]
fn missing_input_file_is_reported_with_path() {
    let config = CliConfig {
        input: Some(PathBuf::from("/nonexistent/quotealloc/input.json")),
        ..CliConfig::default()
    };

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/quotealloc/input.json"));
}

#[test]
fn normal_quotation_recorded_with_zero_units_leaves_demand_unmet() {
    let input: AllocationInput = serde_json::from_str(
        r#"{
            "purchases": [
                {"id": 1, "product_id": 1, "quantity": 10, "shipping_date": "2022-06-20"}
            ],
            "quotations": [
                {"id": 1, "kind": "normal", "product_id": 1, "remaining_qty": 0, "price": 80,
                 "valid_from": "2022-06-01", "valid_to": "2022-12-31"},
                {"id": 2, "kind": "normal", "product_id": 1, "price": 70,
                 "valid_from": "2022-06-01", "valid_to": "2022-12-31"}
            ]
        }"#,
    )
    .unwrap();

    let records = allocate_input(input, true).unwrap();

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.quotation_id.map(|q| q.get()), r.allocated_qty))
        .collect();
    assert_eq!(summary, vec![(None, -10)]);
}
