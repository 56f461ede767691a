//! A rust interface to a native table-collection storage library.
//!
//! The native library hands out C structs with explicit ``init``/``free``
//! lifecycles. The wrapper types here decide at construction time whether
//! they own the underlying object or alias one owned by an enclosing
//! structure; only the single owner ever releases a given object.
//!
//! # Examples
//!
//! ```
//! let mut tables = tablekit::TableCollection::new(10.0).unwrap();
//! tables.add_row(0, 1.0).unwrap();
//! tables.add_row(0, 2.0).unwrap();
//! assert_eq!(tables.rows().num_rows(), 2);
//! assert_eq!(tables.sequence_length(), 10.0);
//! ```

#![allow(non_camel_case_types)]

mod _macros; // Starts w/_ to be sorted at front by rustfmt!

pub mod error;
mod flags;
mod newtypes;
pub mod prelude;
mod row_table;
mod sys;
mod table_collection;
mod util;

/// Low-level ("unsafe") surface of the native library.
pub use sys::bindings;

// re-export fundamental types
pub use bindings::tbl_flags_t;
pub use bindings::tbl_id_t;
pub use bindings::tbl_size_t;

/// "Null" identifier value.
pub use bindings::TBL_NULL;

pub use error::TablekitError;
pub use flags::RowFlags;
pub use newtypes::Position;
pub use newtypes::RowId;
pub use newtypes::SizeType;
pub use newtypes::Time;
pub use row_table::OwnedRowTable;
pub use row_table::RowTable;
pub use row_table::RowTableRow;
pub use table_collection::TableCollection;

/// The raw flags type underlying [`RowFlags`].
pub type RawFlags = bindings::tbl_flags_t;

/// Handles return codes from low-level functions.
///
/// When an error from the native library is detected,
/// the error message is stored for display.
pub type TblReturnValue = Result<i32, TablekitError>;

/// Get the library version number.
pub fn version() -> &'static str {
    return env!("CARGO_PKG_VERSION");
}
