/// For a type `tbl_foo_t`, this trait abstracts
/// out the functionality of `tbl_foo_free`
///
/// # Note
///
/// This trait should NEVER be part of the public API.
pub trait TblTeardown {
    /// # Safety
    ///
    /// Implementations must abide by the expectations
    /// of `tbl_foo_free` and C's `free`.
    unsafe fn teardown(&mut self) -> i32;
}
