#![macro_use]

macro_rules! impl_tblteardown {
    ($tbl: ty, $teardown: expr) => {
        impl crate::sys::TblTeardown for $tbl {
            unsafe fn teardown(&mut self) -> i32 {
                $teardown(self as _)
            }
        }
    };
}
