use std::io::Write;

use kmeans_explorer::{
    demo_customers, write_clustered_csv, Dataset, Explorer, RunConfig, ScaleMode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn demo_file() -> tempfile::NamedTempFile {
    let dataset = demo_customers(&mut ChaCha8Rng::seed_from_u64(77));
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(dataset.to_csv(Some(3)).as_bytes()).unwrap();
    file
}

#[test]
fn test_csv_to_export_round_trip() {
    let input = demo_file();
    let dataset = Dataset::from_path(input.path()).unwrap();
    assert_eq!(dataset.len(), 450);
    assert!(dataset.skipped.is_empty());

    let config = RunConfig {
        seed: Some(5),
        ..RunConfig::default()
    };
    let report = Explorer::new(config).run(&dataset).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clustered.csv");
    write_clustered_csv(&out, &dataset, &report.feature_rows, &report.solution.assignments)
        .unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "annual_spend,visits_per_month,email_open_rate,cluster_id,distance_to_centroid"
    );

    // The export is itself a valid numeric table
    let exported = Dataset::parse(&text, 5000).unwrap();
    assert_eq!(exported.len(), dataset.len());
    for (row, &assigned) in exported.rows.iter().zip(&report.solution.assignments) {
        assert_eq!(row[3] as usize, assigned + 1);
        assert!(row[4] >= 0.0);
    }
}

#[test]
fn test_json_config_drives_run() {
    let input = demo_file();
    let dataset = Dataset::from_path(input.path()).unwrap();

    let mut cfg_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        cfg_file,
        r#"{{"k": 4, "k_min": 3, "k_max": 5, "scale": "none", "seed": 9, "restarts": 2}}"#
    )
    .unwrap();
    let config = RunConfig::from_json_file(cfg_file.path()).unwrap();
    assert_eq!(config.scale, ScaleMode::None);

    let report = Explorer::new(config).run(&dataset).unwrap();
    assert_eq!(report.solution.k(), 4);
    assert_eq!(
        report.elbow.iter().map(|p| p.k).collect::<Vec<_>>(),
        vec![3, 4, 5]
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["resolved"]["k"], 4);
    assert_eq!(json["standardization"]["mode"], "none");
    assert!(json["summary"]["apa"].as_str().unwrap().contains("N = 450"));
    assert!(json.get("feature_rows").is_none());
}

#[test]
fn test_missing_input_file() {
    let err = Dataset::from_path("/no/such/input.csv").unwrap_err();
    assert!(err.to_string().starts_with("Failed to read /no/such/input.csv"));
}
