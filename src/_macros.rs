#![macro_use]

#[doc(hidden)]
macro_rules! handle_tbl_return_value {
    ($code: expr) => {{
        if $code < 0 {
            return Err(crate::error::TablekitError::ErrorCode { code: $code });
        }
        Ok($code)
    }};
    ($code: expr, $return_value: expr) => {{
        if $code < 0 {
            return Err(crate::error::TablekitError::ErrorCode { code: $code });
        }
        Ok($return_value)
    }};
}

macro_rules! panic_on_tablekit_error {
    ($code: expr) => {
        if $code < 0 {
            let c_str =
                unsafe { std::ffi::CStr::from_ptr(crate::sys::bindings::tbl_strerror($code)) };
            let str_slice: &str = c_str.to_str().unwrap();
            let message: String = str_slice.to_owned();
            panic!("{}", message);
        }
    };
}

macro_rules! impl_id_traits {
    ($idtype: ty) => {
        impl $idtype {
            /// NULL value for this type.
            pub const NULL: $idtype = Self(crate::sys::bindings::TBL_NULL);

            /// Return `true` if the underlying value is NULL.
            pub fn is_null(&self) -> bool {
                *self == Self::NULL
            }
        }

        impl std::fmt::Display for $idtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if !self.is_null() {
                    write!(f, "{}", self.0)
                } else {
                    write!(f, "NULL")
                }
            }
        }

        impl From<crate::sys::bindings::tbl_id_t> for $idtype {
            fn from(value: crate::sys::bindings::tbl_id_t) -> Self {
                Self(value)
            }
        }

        impl From<&crate::sys::bindings::tbl_id_t> for $idtype {
            fn from(value: &crate::sys::bindings::tbl_id_t) -> Self {
                Self(*value)
            }
        }

        impl From<$idtype> for crate::sys::bindings::tbl_id_t {
            fn from(value: $idtype) -> Self {
                value.0
            }
        }

        impl From<&$idtype> for crate::sys::bindings::tbl_id_t {
            fn from(value: &$idtype) -> Self {
                value.0
            }
        }

        impl TryFrom<$idtype> for usize {
            type Error = crate::TablekitError;

            fn try_from(value: $idtype) -> Result<Self, Self::Error> {
                match usize::try_from(value.0) {
                    Ok(v) => Ok(v),
                    Err(_) => Err(crate::TablekitError::RangeError(format!(
                        "could not convert {} to usize",
                        value
                    ))),
                }
            }
        }

        impl TryFrom<&$idtype> for usize {
            type Error = crate::TablekitError;

            fn try_from(value: &$idtype) -> Result<Self, Self::Error> {
                usize::try_from(*value)
            }
        }

        impl PartialEq<crate::sys::bindings::tbl_id_t> for $idtype {
            fn eq(&self, other: &crate::sys::bindings::tbl_id_t) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$idtype> for crate::sys::bindings::tbl_id_t {
            fn eq(&self, other: &$idtype) -> bool {
                *self == other.0
            }
        }

        impl PartialOrd<crate::sys::bindings::tbl_id_t> for $idtype {
            fn partial_cmp(
                &self,
                other: &crate::sys::bindings::tbl_id_t,
            ) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<$idtype> for crate::sys::bindings::tbl_id_t {
            fn partial_cmp(&self, other: &$idtype) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }
    };
}

macro_rules! impl_size_type_comparisons_for_row_ids {
    ($idtype: ty) => {
        impl PartialEq<$idtype> for SizeType {
            fn eq(&self, other: &$idtype) -> bool {
                self.0 == other.0 as crate::sys::bindings::tbl_size_t
            }
        }

        impl PartialEq<SizeType> for $idtype {
            fn eq(&self, other: &SizeType) -> bool {
                (self.0 as crate::sys::bindings::tbl_size_t) == other.0
            }
        }
    };
}

macro_rules! impl_f64_newtypes {
    ($type: ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<f64> for $type {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl From<$type> for f64 {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $type {
            fn eq(&self, other: &f64) -> bool {
                self.0.eq(other)
            }
        }

        impl PartialEq<$type> for f64 {
            fn eq(&self, other: &$type) -> bool {
                self.eq(&other.0)
            }
        }

        impl PartialOrd<f64> for $type {
            fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<$type> for f64 {
            fn partial_cmp(&self, other: &$type) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul for $type {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl std::ops::Div for $type {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self(self.0 / rhs.0)
            }
        }
    };
}
