use std::ptr::NonNull;

use crate::sys;
use crate::RowFlags;
use crate::RowId;
use crate::SizeType;
use crate::TablekitError;
use crate::TblReturnValue;
use crate::Time;

/// Row of a [`RowTable`]
#[derive(Debug)]
pub struct RowTableRow {
    pub id: RowId,
    pub flags: RowFlags,
    pub time: Time,
}

impl PartialEq for RowTableRow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.flags == other.flags
            && crate::util::partial_cmp_equal(&self.time, &other.time)
    }
}

fn make_row_table_row(table: &RowTable, pos: crate::bindings::tbl_id_t) -> Option<RowTableRow> {
    Some(RowTableRow {
        id: pos.into(),
        flags: table.flags(pos)?,
        time: table.time(pos)?,
    })
}

/// A table of rows, each carrying a set of flags and a time value.
///
/// The wrapper either owns the native storage (standalone tables, see
/// [`OwnedRowTable`]) or aliases storage embedded in a
/// [`crate::TableCollection`]. Which of the two is decided when the
/// underlying handle is created and never changes afterwards; only the
/// owner releases the storage.
#[derive(Debug)]
pub struct RowTable {
    inner: sys::RowTable,
}

impl RowTable {
    pub(crate) fn new_owning(options: crate::RawFlags) -> Result<Self, TablekitError> {
        Ok(Self {
            inner: sys::RowTable::new(options)?,
        })
    }

    /// # Safety
    ///
    /// `ptr` must point at an initialized table owned by an enclosing
    /// object that outlives the returned value.
    pub(crate) unsafe fn new_borrowed(ptr: NonNull<crate::bindings::tbl_row_table_t>) -> Self {
        Self {
            inner: sys::RowTable::new_borrowed(ptr),
        }
    }

    /// Return the number of rows.
    pub fn num_rows(&self) -> SizeType {
        self.inner.as_ref().num_rows.into()
    }

    /// Append a row to the table.
    ///
    /// # Returns
    ///
    /// The id of the new row. Ids are assigned densely, starting at 0;
    /// on success the row count increases by one.
    ///
    /// # Errors
    ///
    /// [`TablekitError::ErrorCode`] if the native append fails.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut rows = tablekit::OwnedRowTable::default();
    /// let id = rows.add_row(0, 1.0).unwrap();
    /// assert_eq!(id, 0);
    /// assert_eq!(rows.num_rows(), 1);
    /// ```
    pub fn add_row<F, T>(&mut self, flags: F, time: T) -> Result<RowId, TablekitError>
    where
        F: Into<RowFlags>,
        T: Into<Time>,
    {
        match self.inner.add_row(flags.into().bits(), time.into().into()) {
            Ok(id) => Ok(id.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Return the ``flags`` value from row ``row`` of the table.
    ///
    /// # Returns
    ///
    /// * `Some(flags)` if `row` is valid.
    /// * `None` otherwise.
    pub fn flags<R: Into<RowId> + Copy>(&self, row: R) -> Option<RowFlags> {
        let row: RowId = row.into();
        let table = self.inner.as_ref();
        sys::column_access(row, table.flags, table.num_rows)
    }

    /// Return the ``time`` value from row ``row`` of the table.
    ///
    /// # Returns
    ///
    /// * `Some(time)` if `row` is valid.
    /// * `None` otherwise.
    pub fn time<R: Into<RowId> + Copy>(&self, row: R) -> Option<Time> {
        let row: RowId = row.into();
        let table = self.inner.as_ref();
        sys::column_access(row, table.time, table.num_rows)
    }

    /// Return row `r` of the table.
    ///
    /// # Returns
    ///
    /// * `Some(row)` if `r` is valid
    /// * `None` otherwise
    pub fn row<R: Into<RowId> + Copy>(&self, r: R) -> Option<RowTableRow> {
        let r: RowId = r.into();
        make_row_table_row(self, r.into())
    }

    /// Return an iterator over rows of the table.
    /// The value of the iterator is [`RowTableRow`].
    pub fn iter(&self) -> impl Iterator<Item = RowTableRow> + '_ {
        (0..).map_while(move |pos| make_row_table_row(self, pos))
    }

    /// Remove all rows, retaining the allocated storage.
    pub fn clear(&mut self) -> TblReturnValue {
        let rv = self.inner.clear();
        handle_tbl_return_value!(rv)
    }
}

/// A standalone row table that owns its data.
///
/// # Examples
///
/// ```
/// use tablekit::OwnedRowTable;
///
/// let mut rows = OwnedRowTable::default();
/// let rowid = rows.add_row(0, 1.1).unwrap();
/// assert_eq!(rowid, 0);
/// assert_eq!(rows.num_rows(), 1);
/// ```
#[derive(Debug)]
pub struct OwnedRowTable {
    table: RowTable,
}

impl OwnedRowTable {
    pub fn new() -> Result<Self, TablekitError> {
        Ok(Self {
            table: RowTable::new_owning(0)?,
        })
    }
}

impl Default for OwnedRowTable {
    fn default() -> Self {
        Self::new().unwrap()
    }
}

impl std::ops::Deref for OwnedRowTable {
    type Target = RowTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl std::ops::DerefMut for OwnedRowTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}
