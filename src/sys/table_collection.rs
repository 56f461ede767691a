use super::bindings::tbl_row_table_t;
use super::bindings::tbl_table_collection_init;
use super::bindings::tbl_table_collection_t;
use super::tblbox::TblBox;
use super::Error;

#[derive(Debug)]
pub struct TableCollection(TblBox<tbl_table_collection_t>);

impl TableCollection {
    pub fn new(sequence_length: f64) -> Result<Self, Error> {
        let mut tbl = TblBox::new(|tc: *mut tbl_table_collection_t| unsafe {
            tbl_table_collection_init(tc, 0)
        })?;
        tbl.as_mut().sequence_length = sequence_length;
        Ok(Self(tbl))
    }

    pub fn sequence_length(&self) -> f64 {
        self.0.as_ref().sequence_length
    }

    /// The embedded table remains owned by the collection; callers
    /// aliasing it must not outlive `self`.
    pub fn rows_mut(&mut self) -> &mut tbl_row_table_t {
        // SAFETY: self pointer is not null
        unsafe { &mut (*self.as_mut_ptr()).rows }
    }

    #[allow(dead_code)]
    pub fn as_ptr(&self) -> *const tbl_table_collection_t {
        self.0.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut tbl_table_collection_t {
        self.0.as_mut_ptr()
    }
}
