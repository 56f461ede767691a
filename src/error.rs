//! Error handling

use crate::sys;
use crate::TblReturnValue;
use thiserror::Error;

/// Error type returned by the public API.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TablekitError {
    /// Returned when conversion attempts fail
    #[error("range error: {}", *.0)]
    RangeError(String),
    /// Used when bad input is encountered.
    #[error("we received {} but expected {}", *got, *expected)]
    ValueError { got: String, expected: String },
    /// Wrapper around native status codes.
    #[error("{}", get_error_message(*code))]
    ErrorCode { code: i32 },
    /// General error variant
    #[error("{}", *.0)]
    LibraryError(String),
}

impl From<sys::Error> for TablekitError {
    fn from(error: sys::Error) -> Self {
        match error {
            sys::Error::Message(msg) => TablekitError::LibraryError(msg),
            sys::Error::Code(code) => TablekitError::ErrorCode { code },
        }
    }
}

/// Takes the return code from a native
/// function and panics if the code indicates
/// an error.  The error message is included
/// in the panic statement.
///
/// # Examples
///
/// ```
/// let rv = 0;  // All good!
/// tablekit::error::panic_on_tablekit_error(rv);
/// let rv = 1;  // Probably something like a new row id.
/// tablekit::error::panic_on_tablekit_error(rv);
/// ```
///
/// This will panic:
///
/// ```should_panic
/// let rv = -2; // "Out of memory"
/// tablekit::error::panic_on_tablekit_error(rv);
/// ```
pub fn panic_on_tablekit_error(code: i32) {
    panic_on_tablekit_error!(code);
}

/// Given a return value from a low-level function,
/// obtain the corresponding error message.
///
/// The native library returns 0 when there's no error:
///
/// ```
/// let x = tablekit::error::get_error_message(0);
/// assert_eq!(x, "Normal exit condition. This is not an error!");
/// ```
///
/// Values > 0 are not errors, and have no known type/cause.
/// The library never returns codes > 0 and there should be no attempt
/// to ever do so by client code.
///
/// ```
/// let x = tablekit::error::get_error_message(1);
/// assert_eq!(x, "Unknown error");
/// ```
///
/// Values < 0 have known causes:
///
/// ```
/// let x = tablekit::error::get_error_message(-2);
/// assert!(x.contains("Out of memory"));
/// ```
pub fn get_error_message(code: i32) -> String {
    sys::get_error_message(code)
}

/// Given an instance of [``TblReturnValue``](crate::TblReturnValue),
/// obtain the error message if there is indeed an error.
pub fn extract_error_message(x: TblReturnValue) -> Option<String> {
    x.map_or_else(|e: TablekitError| Some(format!("{}", e)), |_| None)
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_get_error_message() {
        let m = get_error_message(0);
        assert_eq!(m, "Normal exit condition. This is not an error!");
    }

    fn mock_error() -> TblReturnValue {
        handle_tbl_return_value!(crate::sys::bindings::TBL_ERR_NO_MEMORY)
    }

    fn mock_success() -> TblReturnValue {
        handle_tbl_return_value!(0)
    }

    #[test]
    fn test_error_formatting() {
        let x = mock_error();
        let mut s: String = "nope!".to_string();
        x.map_or_else(|e: TablekitError| s = format!("{}", e), |_| ());
        assert!(s.contains("Out of memory"));
    }

    #[test]
    fn test_extract_error_message() {
        let x = mock_error();
        match extract_error_message(x) {
            Some(s) => assert!(s.contains("Out of memory")),
            None => panic!(),
        }

        if extract_error_message(mock_success()).is_some() {
            panic!();
        }
    }

    #[test]
    fn test_anyhow_compatability() {
        fn foo() -> anyhow::Result<crate::TableCollection> {
            let tables = crate::TableCollection::new(1.0)?;
            Ok(tables)
        }

        let _ = foo().unwrap();
    }
}
