//! Conversions shared by the positive-integer newtypes.
//!
//! [`PageNumber`](super::PageNumber) and [`PageLength`](super::PageLength)
//! accept raw integers of any width and `f64`. A value converts only when it
//! is a finite, integral number in `1..=usize::MAX`.

use std::num::NonZeroUsize;

/// Interpret a float as a positive integer.
pub(crate) fn positive_from_f64(v: f64) -> Option<NonZeroUsize> {
    if !v.is_finite() || v.fract() != 0.0 || v < 1.0 || v > usize::MAX as f64 {
        return None;
    }
    NonZeroUsize::new(v as usize)
}

/// Implement `TryFrom<{integer}>` and `TryFrom<f64>` for a
/// `NonZeroUsize` newtype, rejecting with the given error variant.
macro_rules! impl_positive_conversions {
    ($ty:ident, $variant:ident, [$($int:ty),* $(,)?]) => {
        $(
            impl TryFrom<$int> for $ty {
                type Error = $crate::common::Error;

                fn try_from(v: $int) -> $crate::common::Result<Self> {
                    usize::try_from(v)
                        .ok()
                        .and_then(::std::num::NonZeroUsize::new)
                        .map($ty)
                        .ok_or_else(|| $crate::common::Error::$variant(v.to_string()))
                }
            }
        )*

        impl TryFrom<f64> for $ty {
            type Error = $crate::common::Error;

            fn try_from(v: f64) -> $crate::common::Result<Self> {
                $crate::common::positive::positive_from_f64(v)
                    .map($ty)
                    .ok_or_else(|| $crate::common::Error::$variant(v.to_string()))
            }
        }

        impl From<::std::num::NonZeroUsize> for $ty {
            #[inline]
            fn from(v: ::std::num::NonZeroUsize) -> Self {
                $ty(v)
            }
        }

        impl From<$ty> for usize {
            #[inline]
            fn from(v: $ty) -> usize {
                v.0.get()
            }
        }
    };
}

pub(crate) use impl_positive_conversions;
