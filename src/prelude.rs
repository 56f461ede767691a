//! Export commonly-used types and traits

pub use {
    crate::Position, crate::RawFlags, crate::RowFlags, crate::RowId, crate::SizeType, crate::Time,
};
