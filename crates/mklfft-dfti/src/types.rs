//! Types shared across the DFTI binding.
//!
//! Discriminants follow the values published in `mkl_dfti.h`; MKL treats
//! the configuration enumeration as part of its stable interface.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};

/// MKL integer type.
///
/// Dimensions, lengths, integer configuration values and every status code
/// use this width. The binding assumes the 64-bit interface.
pub type MklLong = i64;

/// Opaque transform descriptor handle, owned entirely by MKL.
///
/// Null before creation. This layer never inspects, clones or releases a
/// handle on its own; it only forwards it.
pub type DftiHandle = *mut c_void;

/// Numeric precision selector for descriptor creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Precision {
    Single = 35,
    Double = 36,
}

/// Forward-domain selector for descriptor creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ForwardDomain {
    Complex = 32,
    Real = 33,
}

/// Configuration parameters accepted by `DftiSetValue` / `DftiGetValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConfigParam {
    ForwardDomain = 0,
    Dimension = 1,
    Lengths = 2,
    Precision = 3,
    ForwardScale = 4,
    BackwardScale = 5,
    NumberOfTransforms = 7,
    ComplexStorage = 8,
    RealStorage = 9,
    ConjugateEvenStorage = 10,
    Placement = 11,
    InputStrides = 12,
    OutputStrides = 13,
    InputDistance = 14,
    OutputDistance = 15,
    Workspace = 17,
    Ordering = 18,
    Transpose = 19,
    DescriptorName = 20,
    PackedFormat = 21,
    CommitStatus = 22,
    Version = 23,
    NumberOfUserThreads = 26,
    ThreadLimit = 27,
}

impl ConfigParam {
    /// Raw parameter id as passed across the native boundary.
    pub fn id(self) -> c_int {
        self as c_int
    }
}

/// Typed payload for [`set_value`](crate::Dfti::set_value).
///
/// The native `DftiSetValue` is variadic; each variant here selects the
/// call shape documented for the corresponding parameter family (scalar
/// integer, scalar float, integer array, C string).
#[derive(Debug, Clone, Copy)]
pub enum ConfigValue<'a> {
    Long(MklLong),
    Float(f64),
    Longs(&'a [MklLong]),
    Str(&'a CStr),
}

/// Typed output slot for [`get_value`](crate::Dfti::get_value).
#[derive(Debug)]
pub enum ConfigSlot<'a> {
    Long(&'a mut MklLong),
    Float(&'a mut f64),
    Longs(&'a mut [MklLong]),
    /// Character buffer, e.g. for [`ConfigParam::Version`] or
    /// [`ConfigParam::DescriptorName`]. Size it with [`VERSION_LENGTH`]
    /// or [`MAX_NAME_LENGTH`].
    Chars(&'a mut [c_char]),
}

/// Configuration values from the `DFTI_CONFIG_VALUE` enumeration.
pub mod values {
    use super::MklLong;

    pub const COMMITTED: MklLong = 30;
    pub const UNCOMMITTED: MklLong = 31;

    pub const COMPLEX_COMPLEX: MklLong = 39;
    pub const COMPLEX_REAL: MklLong = 40;
    pub const REAL_COMPLEX: MklLong = 41;
    pub const REAL_REAL: MklLong = 42;

    pub const INPLACE: MklLong = 43;
    pub const NOT_INPLACE: MklLong = 44;

    pub const ORDERED: MklLong = 48;
    pub const BACKWARD_SCRAMBLED: MklLong = 49;

    pub const ALLOW: MklLong = 51;
    pub const AVOID: MklLong = 52;
    pub const NONE: MklLong = 53;

    pub const CCS_FORMAT: MklLong = 54;
    pub const PACK_FORMAT: MklLong = 55;
    pub const PERM_FORMAT: MklLong = 56;
    pub const CCE_FORMAT: MklLong = 57;
}

/// Status codes returned by every descriptor operation.
///
/// Zero is success; non-zero codes can be translated with
/// [`error_message`](crate::Dfti::error_message).
pub mod status {
    use super::MklLong;

    pub const NO_ERROR: MklLong = 0;
    pub const MEMORY_ERROR: MklLong = 1;
    pub const INVALID_CONFIGURATION: MklLong = 2;
    pub const INCONSISTENT_CONFIGURATION: MklLong = 3;
    pub const MULTITHREADED_ERROR: MklLong = 4;
    pub const BAD_DESCRIPTOR: MklLong = 5;
    pub const UNIMPLEMENTED: MklLong = 6;
    pub const MKL_INTERNAL_ERROR: MklLong = 7;
    pub const NUMBER_OF_THREADS_ERROR: MklLong = 8;
    pub const LENGTH_EXCEEDS_INT32: MklLong = 9;
}

/// Buffer size for [`ConfigParam::Version`] reads.
pub const VERSION_LENGTH: usize = 198;
/// Longest message produced by `DftiErrorMessage`.
pub const MAX_MESSAGE_LENGTH: usize = 80;
/// Buffer size for [`ConfigParam::DescriptorName`].
pub const MAX_NAME_LENGTH: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_discriminants_match_mkl() {
        assert_eq!(Precision::Single as i32, 35);
        assert_eq!(Precision::Double as i32, 36);
        assert_eq!(ForwardDomain::Complex as i32, 32);
        assert_eq!(ForwardDomain::Real as i32, 33);
    }

    #[test]
    fn config_param_ids_match_mkl() {
        assert_eq!(ConfigParam::ForwardDomain.id(), 0);
        assert_eq!(ConfigParam::Lengths.id(), 2);
        assert_eq!(ConfigParam::ForwardScale.id(), 4);
        assert_eq!(ConfigParam::Placement.id(), 11);
        assert_eq!(ConfigParam::CommitStatus.id(), 22);
        assert_eq!(ConfigParam::ThreadLimit.id(), 27);
    }

    #[test]
    fn config_values_match_mkl() {
        assert_eq!(values::COMMITTED, 30);
        assert_eq!(values::INPLACE, 43);
        assert_eq!(values::NOT_INPLACE, 44);
        assert_eq!(values::CCE_FORMAT, 57);
    }

    #[test]
    fn success_status_is_zero() {
        assert_eq!(status::NO_ERROR, 0);
        assert_ne!(status::BAD_DESCRIPTOR, status::NO_ERROR);
    }
}
