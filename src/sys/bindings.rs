//! Low-level ("unsafe") surface of the native table library.
//!
//! This module is a 1-to-1 mapping of the C types and functions:
//! `#[repr(C)]` structs, `malloc`/`realloc`/`free` column storage,
//! and signed status codes.
//!
//! Using things from this module is ``unsafe``.
//! The types require ``init()`` calls to correctly set up the structs,
//! so one has to coerce ``rust`` into allowing uninitialized variables:
//!
//! ```
//! use std::mem::MaybeUninit;
//! let mut rows: MaybeUninit<tablekit::bindings::tbl_row_table_t> = MaybeUninit::uninit();
//! unsafe {
//!     let _ = tablekit::bindings::tbl_row_table_init(rows.as_mut_ptr(), 0);
//!     let _ = tablekit::bindings::tbl_row_table_add_row(rows.as_mut_ptr(), 0, 1.0, std::ptr::null(), 0);
//!     assert_eq!((*rows.as_ptr()).num_rows, 1);
//!     tablekit::bindings::tbl_row_table_free(rows.as_mut_ptr());
//! }
//! ```

#![allow(clippy::all)]

use libc::c_char;
use libc::c_void;

pub type tbl_id_t = i32;
pub type tbl_size_t = u64;
pub type tbl_flags_t = u32;

/// "Null" identifier value.
pub const TBL_NULL: tbl_id_t = -1;

pub const TBL_ERR_GENERIC: i32 = -1;
pub const TBL_ERR_NO_MEMORY: i32 = -2;
pub const TBL_ERR_BAD_PARAM_VALUE: i32 = -3;
pub const TBL_ERR_BAD_SEQUENCE_LENGTH: i32 = -4;
pub const TBL_ERR_TABLE_OVERFLOW: i32 = -5;

/// Flag bit marking a row.
pub const TBL_ROW_IS_MARKED: tbl_flags_t = 1;

// Row ids are tbl_id_t, so the id space caps the table size.
const TBL_MAX_ROWS: tbl_size_t = tbl_id_t::MAX as tbl_size_t;

const DEFAULT_MAX_ROWS_INCREMENT: tbl_size_t = 1024;

#[repr(C)]
#[derive(Debug)]
pub struct tbl_row_table_t {
    pub num_rows: tbl_size_t,
    pub max_rows: tbl_size_t,
    pub max_rows_increment: tbl_size_t,
    pub flags: *mut tbl_flags_t,
    pub time: *mut f64,
}

#[repr(C)]
#[derive(Debug)]
pub struct tbl_table_collection_t {
    pub sequence_length: f64,
    pub rows: tbl_row_table_t,
}

/// Message for a status code. The pointer refers to static,
/// null-terminated storage and must not be freed.
pub fn tbl_strerror(err: i32) -> *const c_char {
    let msg: &'static [u8] = match err {
        0 => b"Normal exit condition. This is not an error!\0",
        TBL_ERR_GENERIC => b"Generic error; please file a bug report\0",
        TBL_ERR_NO_MEMORY => b"Out of memory\0",
        TBL_ERR_BAD_PARAM_VALUE => b"Bad parameter value provided\0",
        TBL_ERR_BAD_SEQUENCE_LENGTH => b"Sequence length must be > 0\0",
        TBL_ERR_TABLE_OVERFLOW => b"Table too large; cannot allocate more rows\0",
        _ => b"Unknown error\0",
    };
    msg.as_ptr() as *const c_char
}

/// # Safety
///
/// `table` must be valid for writes of `tbl_row_table_t`.
/// On any return value the object is safe to pass to
/// [`tbl_row_table_free`]; the struct is zeroed before anything else.
pub unsafe fn tbl_row_table_init(table: *mut tbl_row_table_t, _options: tbl_flags_t) -> i32 {
    if table.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    libc::memset(
        table as *mut c_void,
        0,
        std::mem::size_of::<tbl_row_table_t>(),
    );
    (*table).max_rows_increment = DEFAULT_MAX_ROWS_INCREMENT;
    0
}

unsafe fn expand_column<T>(column: *mut T, new_max: tbl_size_t) -> *mut T {
    // realloc(NULL, n) behaves as malloc(n), covering freshly
    // initialized tables whose columns are still null.
    libc::realloc(
        column as *mut c_void,
        (new_max as usize) * std::mem::size_of::<T>(),
    ) as *mut T
}

unsafe fn tbl_row_table_expand(table: *mut tbl_row_table_t) -> i32 {
    let t = &mut *table;
    if t.num_rows < t.max_rows {
        return 0;
    }
    if t.max_rows == TBL_MAX_ROWS {
        return TBL_ERR_TABLE_OVERFLOW;
    }
    let new_max = std::cmp::min(t.max_rows + t.max_rows_increment, TBL_MAX_ROWS);
    // On realloc failure the old block is untouched, so the column
    // pointers stay valid and the table is still consistent.
    let flags = expand_column(t.flags, new_max);
    if flags.is_null() {
        return TBL_ERR_NO_MEMORY;
    }
    t.flags = flags;
    let time = expand_column(t.time, new_max);
    if time.is_null() {
        return TBL_ERR_NO_MEMORY;
    }
    t.time = time;
    t.max_rows = new_max;
    0
}

/// Append a row, returning its id or a negative status code.
///
/// The metadata parameters mirror the native signature; passing
/// null/0 appends a row without metadata.
///
/// # Safety
///
/// `table` must point at an initialized `tbl_row_table_t`.
pub unsafe fn tbl_row_table_add_row(
    table: *mut tbl_row_table_t,
    flags: tbl_flags_t,
    time: f64,
    _metadata: *const c_char,
    _metadata_length: tbl_size_t,
) -> tbl_id_t {
    if table.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    let rv = tbl_row_table_expand(table);
    if rv != 0 {
        return rv;
    }
    let t = &mut *table;
    let index = t.num_rows as isize;
    *t.flags.offset(index) = flags;
    *t.time.offset(index) = time;
    t.num_rows += 1;
    index as tbl_id_t
}

/// # Safety
///
/// `table` must point at an initialized `tbl_row_table_t`.
pub unsafe fn tbl_row_table_clear(table: *mut tbl_row_table_t) -> i32 {
    if table.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    (*table).num_rows = 0;
    0
}

/// Release column storage. Idempotent: a freed or zeroed (failed-init)
/// table is accepted.
///
/// # Safety
///
/// `table` must be valid for reads and writes of `tbl_row_table_t`.
pub unsafe fn tbl_row_table_free(table: *mut tbl_row_table_t) -> i32 {
    if table.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    let t = &mut *table;
    libc::free(t.flags as *mut c_void);
    libc::free(t.time as *mut c_void);
    t.flags = std::ptr::null_mut();
    t.time = std::ptr::null_mut();
    t.num_rows = 0;
    t.max_rows = 0;
    0
}

/// # Safety
///
/// `tables` must be valid for writes of `tbl_table_collection_t`.
/// On any return value the object is safe to pass to
/// [`tbl_table_collection_free`].
pub unsafe fn tbl_table_collection_init(
    tables: *mut tbl_table_collection_t,
    options: tbl_flags_t,
) -> i32 {
    if tables.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    libc::memset(
        tables as *mut c_void,
        0,
        std::mem::size_of::<tbl_table_collection_t>(),
    );
    tbl_row_table_init(&mut (*tables).rows, options)
}

/// Release the collection's embedded table storage.
///
/// # Safety
///
/// `tables` must be valid for reads and writes of `tbl_table_collection_t`.
pub unsafe fn tbl_table_collection_free(tables: *mut tbl_table_collection_t) -> i32 {
    if tables.is_null() {
        return TBL_ERR_BAD_PARAM_VALUE;
    }
    tbl_row_table_free(&mut (*tables).rows)
}
