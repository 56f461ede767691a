use crate::sys::bindings as ll_bindings;
use crate::RawFlags;
use bitflags::bitflags;

bitflags! {
    /// Flags attached to each row of a [`crate::RowTable`].
    ///
    /// # Examples
    ///
    /// ## Building up flags
    ///
    /// ### Default flags
    ///
    /// ```
    /// # use tablekit::RowFlags;
    /// let flags = RowFlags::default();
    /// assert_eq!(flags, RowFlags::NONE);
    /// ```
    ///
    /// ### Using a "builder" API
    ///
    /// ```
    /// # use tablekit::RowFlags;
    /// let flags = RowFlags::default().mark();
    /// assert!(flags.contains(RowFlags::IS_MARKED));
    /// ```
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(transparent)]
    pub struct RowFlags: RawFlags {
        /// Default behavior
        const NONE = 0;
        /// The row is marked.
        const IS_MARKED = ll_bindings::TBL_ROW_IS_MARKED;
    }
}

impl RowFlags {
    /// Create a new, marked, set of flags.
    pub fn new_marked() -> Self {
        Self::IS_MARKED
    }

    /// Update to set [`IS_MARKED`](RowFlags::IS_MARKED).
    pub fn mark(self) -> Self {
        self | Self::IS_MARKED
    }

    /// Query the marked status of a set of flags.
    pub fn is_marked(&self) -> bool {
        self.contains(Self::IS_MARKED)
    }

    /// We do not enforce valid flags in the library.
    /// This function will return `true` only if no bits
    /// are set that do not correspond to allowed flags.
    pub fn is_valid(&self) -> bool {
        Self::from_bits(self.bits()).is_some()
    }
}

impl From<RawFlags> for RowFlags {
    fn from(value: RawFlags) -> Self {
        Self::from_bits_truncate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_flags() {
        let f = RowFlags::new_marked();
        assert!(f.is_marked());
        assert!(f.is_valid());
        assert!(!RowFlags::default().is_marked());
    }

    #[test]
    fn test_invalid_bits() {
        let f = RowFlags::from_bits_retain(1 << 17);
        assert!(!f.is_valid());
    }
}
