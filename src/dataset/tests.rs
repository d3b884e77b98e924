use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_simple_csv() {
    let ds = Dataset::parse("a,b\n1,2\n3,4\n", MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(ds.headers, names(&["a", "b"]));
    assert_eq!(ds.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert!(ds.skipped.is_empty());
}

#[test]
fn test_parse_tab_delimited() {
    let ds = Dataset::parse("x\ty\r\n1.5\t-2\r\n", MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(ds.headers, names(&["x", "y"]));
    assert_eq!(ds.rows, vec![vec![1.5, -2.0]]);
}

#[test]
fn test_parse_trims_cells_and_skips_blank_lines() {
    let ds = Dataset::parse(" a , b \n\n 1 , 2 \n   \n3,4", MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(ds.headers, names(&["a", "b"]));
    assert_eq!(ds.len(), 2);
}

#[test]
fn test_parse_skips_bad_rows() {
    let ds = Dataset::parse("a,b\n1,2\n3\nx,4\n5,6\n,\n", MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(ds.rows, vec![vec![1.0, 2.0], vec![5.0, 6.0]]);
    assert_eq!(
        ds.skipped,
        vec![
            "Row 3: wrong number of columns.".to_string(),
            "Row 4: non-numeric value detected.".to_string(),
        ]
    );
}

#[test]
fn test_parse_rejects_non_finite() {
    let ds = Dataset::parse("a,b\n1,NaN\n2,inf\n3,3\n", MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(ds.rows, vec![vec![3.0, 3.0]]);
    assert_eq!(ds.skipped.len(), 2);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Dataset::parse("   \n", MAX_UPLOAD_ROWS),
        Err(DatasetError::Empty)
    ));
    assert!(matches!(
        Dataset::parse("a,b\n", MAX_UPLOAD_ROWS),
        Err(DatasetError::MissingRows)
    ));
    assert!(matches!(
        Dataset::parse("a\n1\n", MAX_UPLOAD_ROWS),
        Err(DatasetError::TooFewColumns)
    ));

    let err = Dataset::parse("a,b\nx,y\n", MAX_UPLOAD_ROWS).unwrap_err();
    assert_eq!(err.to_string(), "Row 2: non-numeric value detected.");
}

#[test]
fn test_parse_row_limit() {
    let text = "a,b\n1,1\n2,2\n3,3\n";
    assert!(Dataset::parse(text, 3).is_ok());

    let err = Dataset::parse(text, 2).unwrap_err();
    assert!(matches!(err, DatasetError::TooManyRows { max: 2 }));
    assert!(err.to_string().contains("Only 2 row(s)"));
}

#[test]
fn test_csv_rendering() {
    let ds = Dataset::new(names(&["a", "b"]), vec![vec![1.0, 0.25], vec![-2.5, 3.0]]);
    assert_eq!(ds.to_csv(None), "a,b\n1,0.25\n-2.5,3");
    assert_eq!(ds.to_csv(Some(3)), "a,b\n1.000,0.250\n-2.500,3.000");

    let back = Dataset::parse(&ds.to_csv(None), MAX_UPLOAD_ROWS).unwrap();
    assert_eq!(back, ds);
}

#[test]
fn test_feature_matrix_selects_columns() {
    let ds = Dataset::new(names(&["a", "b", "c"]), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

    let fm = build_feature_matrix(&ds, &names(&["c", "missing", "a"])).unwrap();
    assert_eq!(fm.names, names(&["c", "a"]));
    assert_eq!(fm.rows, vec![vec![3.0, 1.0], vec![6.0, 4.0]]);

    let all = build_feature_matrix(&ds, &[]).unwrap();
    assert_eq!(all.names, ds.headers);
    assert_eq!(all.rows, ds.rows);

    assert!(matches!(
        build_feature_matrix(&ds, &names(&["nope"])),
        Err(DatasetError::NoFeatures)
    ));
}

#[test]
fn test_feature_matrix_keeps_repeated_columns_once() {
    let ds = Dataset::new(names(&["a", "b"]), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    let fm = build_feature_matrix(&ds, &names(&["b", "a", "b", "a"])).unwrap();
    assert_eq!(fm.names, names(&["b", "a"]));
    assert_eq!(fm.rows, vec![vec![2.0, 1.0], vec![4.0, 3.0]]);

    let fm = build_feature_matrix(&ds, &names(&["a", "a"])).unwrap();
    assert_eq!(fm.names, names(&["a"]));
    assert_eq!(fm.rows, vec![vec![1.0], vec![3.0]]);
}

#[test]
fn test_zscore() {
    let matrix = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
    let st = standardize(&matrix, ScaleMode::Zscore);

    assert_eq!(st.means, vec![2.0, 5.0]);
    // sample sd of 1,2,3 is 1; constant column falls back to 1
    assert_eq!(st.stds, vec![1.0, 1.0]);
    assert_eq!(st.points, vec![vec![-1.0, 0.0], vec![0.0, 0.0], vec![1.0, 0.0]]);
}

#[test]
fn test_zscore_single_row() {
    let st = standardize(&[vec![4.0, -1.0]], ScaleMode::Zscore);
    assert_eq!(st.stds, vec![1.0, 1.0]);
    assert_eq!(st.points, vec![vec![0.0, 0.0]]);
}

#[test]
fn test_minmax() {
    let matrix = vec![vec![10.0, 7.0], vec![20.0, 7.0], vec![15.0, 7.0]];
    let st = standardize(&matrix, ScaleMode::Minmax);

    assert_eq!(st.means, vec![10.0, 7.0]);
    assert_eq!(st.stds, vec![0.1, 1.0]);
    let scaled: Vec<f64> = st.points.iter().map(|p| p[0]).collect();
    for (got, want) in scaled.iter().zip([0.0, 100.0, 50.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    assert!(st.points.iter().all(|p| p[1] == 0.0));
}

#[test]
fn test_no_scaling_and_round_trip() {
    let matrix = vec![vec![3.0, -4.0], vec![1.0, 8.0]];

    let none = standardize(&matrix, ScaleMode::None);
    assert_eq!(none.points, matrix);
    assert_eq!(none.unstandardize(&[3.0, -4.0]), vec![3.0, -4.0]);

    let z = standardize(&matrix, ScaleMode::Zscore);
    for (raw, scaled) in matrix.iter().zip(&z.points) {
        let back = z.unstandardize(scaled);
        assert!((back[0] - raw[0]).abs() < 1e-9);
        assert!((back[1] - raw[1]).abs() < 1e-9);
    }
}

#[test]
fn test_standardize_empty() {
    let st = standardize(&[], ScaleMode::Zscore);
    assert!(st.points.is_empty());
    assert!(st.means.is_empty());
}

#[test]
fn test_demo_customers_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let ds = demo_customers(&mut rng);

    assert_eq!(ds.headers, names(&["annual_spend", "visits_per_month", "email_open_rate"]));
    assert_eq!(ds.len(), 3 * DEMO_SEGMENT_SIZE);
    assert!(ds.rows.iter().all(|r| r.len() == 3));

    // Segment means land near their targets
    let low: f64 = ds.rows[..DEMO_SEGMENT_SIZE].iter().map(|r| r[0]).sum::<f64>()
        / DEMO_SEGMENT_SIZE as f64;
    let high: f64 = ds.rows[2 * DEMO_SEGMENT_SIZE..].iter().map(|r| r[0]).sum::<f64>()
        / DEMO_SEGMENT_SIZE as f64;
    assert!((low - 250.0).abs() < 20.0, "low mean {}", low);
    assert!((high - 1500.0).abs() < 50.0, "high mean {}", high);
}

#[test]
fn test_demo_customers_seeded() {
    let a = demo_customers(&mut ChaCha8Rng::seed_from_u64(1));
    let b = demo_customers(&mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(a, b);
}
