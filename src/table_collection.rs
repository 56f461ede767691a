use std::ptr::NonNull;

use crate::sys;
use crate::Position;
use crate::RowFlags;
use crate::RowId;
use crate::RowTable;
use crate::TablekitError;
use crate::Time;

/// A table collection.
///
/// This is a thin wrapper around the native `tbl_table_collection_t`.
/// The collection always owns its storage. The embedded [`RowTable`]
/// returned by [`TableCollection::rows`] aliases the collection's
/// internal table: rows added through it are rows of the collection,
/// and it never releases the shared storage itself.
///
/// # Examples
///
/// ```
/// let mut tables = tablekit::TableCollection::new(100.0).unwrap();
/// assert_eq!(tables.sequence_length(), 100.0);
///
/// tables.add_row(0, 3.2).unwrap();
///
/// let rows = tables.rows();
/// assert_eq!(rows.num_rows(), 1);
/// ```
pub struct TableCollection {
    // Declaration order fixes drop order: the aliasing view goes
    // first, the owning handle last.
    rows: RowTable,
    inner: sys::TableCollection,
}

impl TableCollection {
    /// Create a new table collection with a sequence length.
    ///
    /// # Errors
    ///
    /// [`TablekitError::ValueError`] if `sequence_length` is not
    /// greater than zero.
    pub fn new<P: Into<Position>>(sequence_length: P) -> Result<Self, TablekitError> {
        let sequence_length = sequence_length.into();
        if sequence_length <= 0.0 {
            return Err(TablekitError::ValueError {
                got: sequence_length.to_string(),
                expected: "sequence_length > 0.0".to_string(),
            });
        }
        let mut inner = sys::TableCollection::new(sequence_length.into())?;
        // SAFETY: the view aliases a table owned by `inner`, lives in
        // the same struct, and drops before it.
        let rows = unsafe { RowTable::new_borrowed(NonNull::from(inner.rows_mut())) };
        Ok(Self { rows, inner })
    }

    /// Length of the sequence the collection covers.
    ///
    /// The value is set at construction and is read-only thereafter.
    pub fn sequence_length(&self) -> Position {
        self.inner.sequence_length().into()
    }

    /// Get reference to the embedded [`RowTable`].
    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    /// Get mutable reference to the embedded [`RowTable`].
    pub fn rows_mut(&mut self) -> &mut RowTable {
        &mut self.rows
    }

    /// Add a row to the embedded table.
    ///
    /// Dispatches to [`RowTable::add_row`].
    pub fn add_row<F, T>(&mut self, flags: F, time: T) -> Result<RowId, TablekitError>
    where
        F: Into<RowFlags>,
        T: Into<Time>,
    {
        self.rows.add_row(flags, time)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sequence_length_is_preserved() {
        let tables = crate::TableCollection::new(100.0).unwrap();
        assert_eq!(tables.sequence_length(), 100.0);
    }

    #[test]
    fn test_rows_added_via_the_view() {
        let mut tables = crate::TableCollection::new(100.0).unwrap();
        tables.rows_mut().add_row(0, 0.0).unwrap();
        tables.add_row(0, 1.0).unwrap();
        assert_eq!(tables.rows().num_rows(), 2);
    }
}
