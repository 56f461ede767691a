#[test]
fn simple_table_collection_creation() {
    let tables = tablekit::TableCollection::new(100.0).unwrap();
    assert_eq!(tables.sequence_length(), 100.0);
}

#[test]
fn simple_table_collection_creation_with_newtype() {
    let sequence_length = tablekit::Position::from(100.0);
    if let Ok(tables) = tablekit::TableCollection::new(sequence_length) {
        assert_eq!(tables.sequence_length(), sequence_length);
        // The newtypes can be compared to the low-level
        // types they wrap.
        assert_eq!(tables.sequence_length(), 100.0);
    } else {
        panic!(
            "TableCollection creation sequence length = {} failed",
            sequence_length
        );
    }
}

#[test]
fn invalid_sequence_length() {
    for bad in [0.0, -1.0] {
        match tablekit::TableCollection::new(bad) {
            Err(tablekit::TablekitError::ValueError { .. }) => (),
            _ => panic!("expected ValueError"),
        }
    }
}

#[test]
fn sequence_length_is_stable_across_insertions() {
    let mut tables = tablekit::TableCollection::new(10.0).unwrap();
    assert_eq!(tables.sequence_length(), 10.0);
    for i in 0..5 {
        tables.add_row(0, i as f64).unwrap();
    }
    assert_eq!(tables.sequence_length(), 10.0);
}

#[test]
fn rows_via_embedded_wrapper() {
    let mut tables = tablekit::TableCollection::new(10.0).unwrap();
    let rows = tables.rows_mut();
    rows.add_row(0, 1.0).unwrap();
    rows.add_row(0, 2.0).unwrap();
    rows.add_row(0, 3.0).unwrap();
    assert_eq!(tables.rows().num_rows(), 3);
    assert_eq!(tables.sequence_length(), 10.0);
    let times: Vec<f64> = tables.rows().iter().map(|r| r.time.into()).collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);
}

#[test]
fn ids_via_collection_are_dense() {
    let mut tables = tablekit::TableCollection::new(1.0).unwrap();
    for i in 0..4 {
        let id = tables.add_row(0, f64::from(i)).unwrap();
        assert_eq!(id, i);
    }
}

#[test]
fn empty_table_collection() {
    let tables = tablekit::TableCollection::new(10.0).unwrap();
    assert!(tables.rows().row(-1).is_none());
    assert!(tables.rows().row(0).is_none());
    assert_eq!(tables.rows().num_rows(), 0);
}

#[test]
fn collections_drop_cleanly() {
    for _ in 0..100 {
        let mut tables = tablekit::TableCollection::new(5.0).unwrap();
        tables.add_row(0, 0.0).unwrap();
    }
}
