#[test]
fn test_error_messages() {
    assert_eq!(
        tablekit::error::get_error_message(0),
        "Normal exit condition. This is not an error!"
    );
    assert_eq!(tablekit::error::get_error_message(1), "Unknown error");
    assert!(tablekit::error::get_error_message(-2).contains("Out of memory"));
}

#[test]
fn value_error_formatting() {
    match tablekit::TableCollection::new(-1.0) {
        Err(e) => {
            let msg = format!("{}", e);
            assert!(msg.contains("expected sequence_length > 0.0"));
        }
        Ok(_) => panic!("expected failure"),
    }
}

#[test]
fn extract_error_message() {
    let x: tablekit::TblReturnValue = Ok(0);
    assert!(tablekit::error::extract_error_message(x).is_none());
}

#[test]
fn anyhow_interop() {
    fn build() -> anyhow::Result<tablekit::TableCollection> {
        let mut tables = tablekit::TableCollection::new(10.0)?;
        tables.add_row(0, 1.0)?;
        Ok(tables)
    }

    let tables = build().unwrap();
    assert_eq!(tables.rows().num_rows(), 1);
}
