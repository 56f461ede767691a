use thiserror::Error;

#[allow(dead_code)]
pub mod bindings;

mod macros;
mod row_table;
mod table_collection;
mod tblbox;
mod traits;

pub use row_table::RowTable;
pub use table_collection::TableCollection;
pub use tblbox::TblBox;
pub use traits::TblTeardown;

impl_tblteardown!(bindings::tbl_row_table_t, bindings::tbl_row_table_free);
impl_tblteardown!(
    bindings::tbl_table_collection_t,
    bindings::tbl_table_collection_free
);

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", *.0)]
    Message(String),
    #[error("{}", get_error_message(*.0))]
    Code(i32),
}

fn column_access_detail<R: Into<bindings::tbl_id_t>, L: Into<bindings::tbl_size_t>, T: Copy>(
    row: R,
    column: *const T,
    column_length: L,
) -> Option<T> {
    let row = row.into();
    let column_length = column_length.into();
    if row < 0 || (row as bindings::tbl_size_t) >= column_length {
        None
    } else {
        assert!(!column.is_null());
        // SAFETY: pointer is not null.
        // column_length is assumed to come directly
        // from a table.
        Some(unsafe { *column.offset(row as isize) })
    }
}

pub fn column_access<
    O: From<T>,
    R: Into<bindings::tbl_id_t>,
    L: Into<bindings::tbl_size_t>,
    T: Copy,
>(
    row: R,
    column: *const T,
    column_length: L,
) -> Option<O> {
    column_access_detail(row, column, column_length).map(|v| v.into())
}

pub fn get_error_message(code: i32) -> String {
    let c_str = unsafe { std::ffi::CStr::from_ptr(bindings::tbl_strerror(code)) };
    c_str
        .to_str()
        .expect("failed to convert c_str to &str")
        .to_owned()
}

#[test]
fn test_error_message() {
    fn foo() -> Result<(), Error> {
        Err(Error::Message("foobar".to_owned()))
    }

    let msg = "foobar".to_owned();
    match foo() {
        Err(Error::Message(m)) => assert_eq!(m, msg),
        _ => panic!("unexpected match"),
    }
}

#[test]
fn test_error_code() {
    fn foo() -> Result<(), Error> {
        Err(Error::Code(bindings::TBL_ERR_NO_MEMORY))
    }

    match foo() {
        Err(Error::Code(x)) => {
            assert_eq!(x, bindings::TBL_ERR_NO_MEMORY);
        }
        _ => panic!("unexpected match"),
    }

    match foo() {
        Err(e) => {
            let m = format!("{}", e);
            assert_eq!(&m, "Out of memory");
        }
        _ => panic!("unexpected match"),
    }
}
