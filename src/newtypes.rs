use crate::sys::bindings;
use crate::TablekitError;

use bindings::tbl_id_t;
use bindings::tbl_size_t;

/// A row id.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct RowId(tbl_id_t);

impl_id_traits!(RowId);
impl_size_type_comparisons_for_row_ids!(RowId);

/// An unsigned size.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct SizeType(tbl_size_t);

impl SizeType {
    /// Convenience function to convert to usize.
    ///
    /// Works via [`TryFrom`].
    ///
    /// # Returns
    ///
    /// * `None` if the underlying value does not fit.
    /// * `Some(usize)` otherwise.
    pub fn to_usize(&self) -> Option<usize> {
        (*self).try_into().ok()
    }

    /// Convenience function to convert to usize.
    /// Implemented via `as`.
    /// Out-of-range values will therefore wrap.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<tbl_size_t> for SizeType {
    fn from(value: tbl_size_t) -> Self {
        Self(value)
    }
}

impl From<SizeType> for tbl_size_t {
    fn from(value: SizeType) -> Self {
        value.0
    }
}

// SizeType is u64, so conversion
// can fail on systems with smaller pointer widths.
impl TryFrom<SizeType> for usize {
    type Error = TablekitError;

    fn try_from(value: SizeType) -> Result<Self, Self::Error> {
        match usize::try_from(value.0) {
            Ok(x) => Ok(x),
            Err(_) => Err(TablekitError::RangeError(format!(
                "could not convert {} to usize",
                value
            ))),
        }
    }
}

impl TryFrom<usize> for SizeType {
    type Error = TablekitError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match tbl_size_t::try_from(value) {
            Ok(x) => Ok(Self(x)),
            Err(_) => Err(TablekitError::RangeError(format!(
                "could not convert usize {} to SizeType",
                value
            ))),
        }
    }
}

impl TryFrom<tbl_id_t> for SizeType {
    type Error = TablekitError;

    fn try_from(value: tbl_id_t) -> Result<Self, Self::Error> {
        match tbl_size_t::try_from(value) {
            Ok(v) => Ok(Self(v)),
            Err(_) => Err(TablekitError::RangeError(format!(
                "could not convert {} to SizeType",
                value
            ))),
        }
    }
}

impl TryFrom<SizeType> for tbl_id_t {
    type Error = TablekitError;

    fn try_from(value: SizeType) -> Result<Self, Self::Error> {
        match tbl_id_t::try_from(value.0) {
            Ok(v) => Ok(v),
            Err(_) => Err(TablekitError::RangeError(format!(
                "could not convert {} to a row id",
                value
            ))),
        }
    }
}

impl PartialEq<SizeType> for tbl_size_t {
    fn eq(&self, other: &SizeType) -> bool {
        *self == other.0
    }
}

impl PartialEq<tbl_size_t> for SizeType {
    fn eq(&self, other: &tbl_size_t) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<tbl_size_t> for SizeType {
    fn partial_cmp(&self, other: &tbl_size_t) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<SizeType> for tbl_size_t {
    fn partial_cmp(&self, other: &SizeType) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.0)
    }
}

/// A time value attached to each row.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(f64);

/// A position along the sequence covered by a table collection.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Position(f64);

impl_f64_newtypes!(Time);
impl_f64_newtypes!(Position);

#[test]
fn test_f64_newtype_display() {
    let x = Position::from(1.0);
    let mut output = String::new();
    std::fmt::write(&mut output, format_args!("{}", x))
        .expect("Error occurred while trying to write in String");
    assert_eq!(output, "1".to_string());
    let x = Time::from(1.0);
    let mut output = String::new();
    std::fmt::write(&mut output, format_args!("{}", x))
        .expect("Error occurred while trying to write in String");
    assert_eq!(output, "1".to_string());
}

#[test]
fn test_usize_to_size_type() {
    let x = usize::MAX;
    let s = SizeType::try_from(x).ok();

    #[cfg(target_pointer_width = "64")]
    assert_eq!(s, Some(bindings::tbl_size_t::MAX.into()));

    #[cfg(target_pointer_width = "32")]
    assert_eq!(s, Some((usize::MAX as bindings::tbl_size_t).into()));

    let x = usize::MIN;
    let s = SizeType::try_from(x).ok();
    assert_eq!(s, Some(0.into()));
}

#[test]
fn test_from_reference() {
    let x = 2;
    let y = RowId::from(&x);
    assert_eq!(y, 2);
    assert_eq!(2, tbl_id_t::from(&y));
}

#[test]
fn test_try_from_reference() {
    let y = RowId::from(2);
    assert_eq!(2, usize::try_from(&y).unwrap());
}

#[test]
fn test_row_id_display() {
    let y = RowId::from(2);
    assert_eq!(format!("{}", y), "2");
    assert_eq!(format!("{}", RowId::NULL), "NULL");
}
