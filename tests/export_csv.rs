//! End-to-end export tests over the demo records.

use exhibitor_scraper::config::OUTPUT_FIELDS;
use exhibitor_scraper::{run_demo, Config, ExportFormat};

fn demo_config(dir: &std::path::Path, format: ExportFormat) -> Config {
    Config {
        output_format: format,
        output_dir: dir.to_path_buf(),
        include_timestamp: false,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_demo_csv_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_demo(demo_config(dir.path(), ExportFormat::Csv))
        .await
        .expect("demo should run");

    let path = report.output_path.expect("demo always exports");
    assert_eq!(path, dir.path().join("demo_data.csv"));

    let mut reader = csv::Reader::from_path(&path).expect("csv should open");
    let headers: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, OUTPUT_FIELDS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Mustermann GmbH");
    assert_eq!(&rows[0][2], "Berlin");
    assert_eq!(&rows[0][3], "Deutschland");
    assert!(rows[0][8].starts_with("mustermann.de (unknown); mustermann.com (unknown)"));
    assert!(rows[0][9].starts_with("unknown: "));
    assert_eq!(&rows[1][0], "Schneider & Partner AG");
    assert!(rows[1][8].contains("sp.de (unknown)"));
    assert_eq!(&rows[2][2], "Hamburg");
    assert!(rows[2][8].contains("tech-solutions.de (unknown)"));
}

#[tokio::test]
async fn test_demo_excel_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_demo(demo_config(dir.path(), ExportFormat::Excel))
        .await
        .expect("demo should run");

    let path = report.output_path.expect("demo always exports");
    assert_eq!(path, dir.path().join("demo_data.xlsx"));
    let bytes = std::fs::read(&path).expect("workbook file");
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_demo_json_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_demo(demo_config(dir.path(), ExportFormat::Json))
        .await
        .expect("demo should run");

    let path = report.output_path.expect("demo always exports");
    let text = std::fs::read_to_string(&path).expect("json file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

    assert_eq!(value["metadata"]["total_companies"], 3);
    let companies = value["companies"].as_array().expect("companies array");
    assert_eq!(companies.len(), 3);
    assert_eq!(companies[1]["city"], "München");
    assert_eq!(companies[0]["generated_domains"][0]["domain"], "mustermann.de");

    let total: u64 = companies
        .iter()
        .map(|c| c["domain_count"].as_u64().expect("count"))
        .sum();
    assert_eq!(total as usize, report.statistics.total_domains);
}

#[tokio::test]
async fn test_demo_custom_filename_with_timestamp() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        output_file: Some("my/demo".to_string()),
        include_timestamp: true,
        ..demo_config(dir.path(), ExportFormat::Csv)
    };
    let report = run_demo(config).await.expect("demo should run");

    let path = report.output_path.expect("demo always exports");
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");
    assert!(name.starts_with("my_demo_"), "unexpected name {name}");
    assert!(name.ends_with(".csv"));
    assert_eq!(path.parent(), Some(dir.path()));
}
