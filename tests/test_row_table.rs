#[test]
fn add_rows_yields_dense_ids() {
    let mut rows = tablekit::OwnedRowTable::default();
    for i in 0..10 {
        let id = rows.add_row(0, i as f64).unwrap();
        assert_eq!(id, i);
    }
    assert_eq!(rows.num_rows(), 10);
    // reading the count does not mutate it
    assert_eq!(rows.num_rows(), 10);
}

#[test]
fn read_back_columns() {
    let mut rows = tablekit::OwnedRowTable::default();
    let marked = rows
        .add_row(tablekit::RowFlags::new_marked(), 1.5)
        .unwrap();
    let plain = rows.add_row(0, 2.5).unwrap();
    assert!(rows.flags(marked).unwrap().is_marked());
    assert!(!rows.flags(plain).unwrap().is_marked());
    assert_eq!(rows.time(marked).unwrap(), 1.5);
    assert_eq!(rows.time(plain).unwrap(), 2.5);
}

#[test]
fn out_of_range_reads_return_none() {
    let rows = tablekit::OwnedRowTable::default();
    assert!(rows.time(0).is_none());
    assert!(rows.flags(-1).is_none());
    assert!(rows.row(tablekit::RowId::NULL).is_none());
    assert!(rows.row(0).is_none());
}

#[test]
fn iterate_rows() {
    let mut rows = tablekit::OwnedRowTable::default();
    for i in 0..3 {
        rows.add_row(0, i as f64).unwrap();
    }
    let times: Vec<f64> = rows.iter().map(|row| row.time.into()).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.0]);
    assert_eq!(rows.iter().count(), 3);
}

#[test]
fn row_access_is_stable() {
    let mut rows = tablekit::OwnedRowTable::default();
    rows.add_row(0, 0.25).unwrap();
    let row_a = rows.row(0).unwrap();
    let row_b = rows.row(0).unwrap();
    assert_eq!(row_a, row_b);
    assert_eq!(row_a.id, 0);
}

#[test]
fn clear_resets_the_count() {
    let mut rows = tablekit::OwnedRowTable::default();
    for i in 0..5 {
        rows.add_row(0, i as f64).unwrap();
    }
    rows.clear().unwrap();
    assert_eq!(rows.num_rows(), 0);
    let id = rows.add_row(0, 10.0).unwrap();
    assert_eq!(id, 0);
}
