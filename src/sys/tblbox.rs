use std::ptr::NonNull;

use super::Error;
use super::TblTeardown;

/// A handle to a heap-allocated native object.
///
/// Whether the handle owns the object is decided at construction and
/// never changes: [`TblBox::new`] produces the single owner,
/// [`TblBox::new_borrowed`] produces an alias that performs no teardown.
#[derive(Debug)]
pub struct TblBox<T: TblTeardown> {
    tbl: NonNull<T>,
    owning: bool,
}

// SAFETY: these must be encapsulated in types that work
// via shared/immutable reference AND/OR use data protection methods.
unsafe impl<T> Send for TblBox<T> where T: TblTeardown {}

// SAFETY: these must be encapsulated in types that work
// via shared/immutable reference AND/OR use data protection methods.
unsafe impl<T> Sync for TblBox<T> where T: TblTeardown {}

impl<T> TblBox<T>
where
    T: TblTeardown,
{
    /// Allocate storage for a `T` and initialize it with `init`.
    ///
    /// Allocation failure is reported before any native call is made,
    /// so there is nothing to release on that path. If `init` returns
    /// a negative status, the allocation is torn down and freed before
    /// the error propagates; `init` must leave the object safe to
    /// tear down even on failure (the native init functions zero the
    /// struct before anything else).
    pub fn new<F: Fn(*mut T) -> i32>(init: F) -> Result<Self, Error> {
        let x = unsafe { libc::malloc(std::mem::size_of::<T>()) as *mut T };
        let tbl = NonNull::new(x).ok_or_else(|| Error::Message("out of memory".to_string()))?;
        let mut handle = Self { tbl, owning: true };
        match init(handle.as_mut_ptr()) {
            // the failed handle drops here, releasing the allocation
            code if code < 0 => Err(Error::Code(code)),
            _ => Ok(handle),
        }
    }

    /// # Safety
    ///
    /// The returned value aliases storage owned elsewhere and will
    /// not perform any teardown when dropped.
    ///
    /// Taking the pointer elides the tied lifetimes of the owner
    /// and the new instance, so the only sound use of this function
    /// involves encapsulation in such a way that the alias's lifetime
    /// is bound to the owner. For example, instances should only be
    /// publicly exposed via reference types.
    pub unsafe fn new_borrowed(tbl: NonNull<T>) -> Self {
        Self { tbl, owning: false }
    }

    pub fn as_ref(&self) -> &T {
        unsafe { self.tbl.as_ref() }
    }

    pub fn as_mut(&mut self) -> &mut T {
        unsafe { self.tbl.as_mut() }
    }

    #[allow(dead_code)]
    pub fn as_ptr(&self) -> *const T {
        self.as_ref()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut()
    }
}

impl<T> Drop for TblBox<T>
where
    T: TblTeardown,
{
    fn drop(&mut self) {
        if self.owning {
            unsafe {
                // SAFETY: the storage is NonNull and either initialized
                // or zeroed by a failed init, both teardown-safe.
                self.as_mut().teardown();
                libc::free(self.tbl.as_ptr() as *mut libc::c_void)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    fn is_send_sync<T: Send + Sync>(_: &T) {}

    // Each probe type gets its own counter so that concurrently
    // running tests cannot see each other's teardowns.
    macro_rules! teardown_probe {
        ($probe: ident, $counter: ident) => {
            static $counter: AtomicUsize = AtomicUsize::new(0);

            struct $probe {
                data: i32,
            }

            impl super::TblTeardown for $probe {
                unsafe fn teardown(&mut self) -> i32 {
                    $counter.fetch_add(1, Ordering::SeqCst);
                    0
                }
            }
        };
    }

    teardown_probe!(OwnedProbe, OWNED_TEARDOWNS);

    #[test]
    fn owning_handle_releases_exactly_once() {
        let b = TblBox::new(|x: *mut OwnedProbe| {
            unsafe { (*x).data = 42 };
            0
        })
        .unwrap();
        assert_eq!(b.as_ref().data, 42);
        is_send_sync(&b);
        drop(b);
        assert_eq!(OWNED_TEARDOWNS.load(Ordering::SeqCst), 1);
    }

    teardown_probe!(BorrowProbe, BORROW_TEARDOWNS);

    #[test]
    fn borrowed_handle_never_releases() {
        let mut owner = TblBox::new(|x: *mut BorrowProbe| {
            unsafe { (*x).data = 1 };
            0
        })
        .unwrap();
        let alias = unsafe { TblBox::new_borrowed(NonNull::new(owner.as_mut_ptr()).unwrap()) };
        assert_eq!(alias.as_ref().data, 1);
        drop(alias);
        assert_eq!(BORROW_TEARDOWNS.load(Ordering::SeqCst), 0);
        drop(owner);
        assert_eq!(BORROW_TEARDOWNS.load(Ordering::SeqCst), 1);
    }

    teardown_probe!(FailProbe, FAIL_TEARDOWNS);

    #[test]
    fn failed_init_releases_the_allocation() {
        let rv = TblBox::new(|x: *mut FailProbe| {
            unsafe { (*x).data = 0 };
            crate::sys::bindings::TBL_ERR_NO_MEMORY
        });
        match rv {
            Err(Error::Code(code)) => {
                assert_eq!(code, crate::sys::bindings::TBL_ERR_NO_MEMORY)
            }
            _ => panic!("expected Error::Code"),
        }
        // released exactly once, despite init failing
        assert_eq!(FAIL_TEARDOWNS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn table_collection_tblbox() {
        let flags: u32 = 0;
        let tables = TblBox::new(|t: *mut super::super::bindings::tbl_table_collection_t| unsafe {
            super::super::bindings::tbl_table_collection_init(t, flags)
        })
        .unwrap();
        let _ = unsafe { TblBox::new_borrowed(tables.tbl) };
    }
}
