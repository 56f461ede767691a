use std::ptr::NonNull;

use super::bindings::tbl_flags_t;
use super::bindings::tbl_id_t;
use super::bindings::tbl_row_table_add_row;
use super::bindings::tbl_row_table_clear;
use super::bindings::tbl_row_table_init;
use super::bindings::tbl_row_table_t;
use super::tblbox::TblBox;
use super::Error;

#[derive(Debug)]
pub struct RowTable(TblBox<tbl_row_table_t>);

impl RowTable {
    pub fn new(options: tbl_flags_t) -> Result<Self, Error> {
        let tbl =
            TblBox::new(|t: *mut tbl_row_table_t| unsafe { tbl_row_table_init(t, options) })?;
        Ok(Self(tbl))
    }

    /// # Safety
    ///
    /// `ptr` must point at an initialized table owned by an enclosing
    /// object that outlives the returned value. The returned value
    /// performs no teardown.
    pub unsafe fn new_borrowed(ptr: NonNull<tbl_row_table_t>) -> Self {
        Self(TblBox::new_borrowed(ptr))
    }

    pub fn as_ref(&self) -> &tbl_row_table_t {
        self.0.as_ref()
    }

    pub fn as_mut(&mut self) -> &mut tbl_row_table_t {
        self.0.as_mut()
    }

    pub fn clear(&mut self) -> i32 {
        unsafe { tbl_row_table_clear(self.as_mut()) }
    }

    pub fn add_row(&mut self, flags: tbl_flags_t, time: f64) -> Result<tbl_id_t, Error> {
        // SAFETY: pointer is not null.
        // If it points to an uninitialized object,
        // the error is in an earlier "unsafe" call.
        match unsafe { tbl_row_table_add_row(self.as_mut(), flags, time, std::ptr::null(), 0) } {
            id if id >= 0 => Ok(id),
            code => Err(Error::Code(code)),
        }
    }
}

impl Default for RowTable {
    fn default() -> Self {
        Self::new(0).unwrap()
    }
}
