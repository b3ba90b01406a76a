//! Dynamic binding to Intel MKL's descriptor-based DFT interface (DFTI).
//!
//! The whole surface is the eight `Dfti*` entry points: create a
//! descriptor, configure it, commit it, run forward/backward transforms,
//! free it, and translate a status code into text. This crate declares the
//! calling convention and argument shapes and forwards everything
//! unchanged; the FFT itself, its threading and its numerical behavior all
//! belong to MKL.
//!
//! Status codes come back verbatim as [`MklLong`] (zero is success, see
//! [`status`]). The `Result` layer only reports problems on this side of
//! the boundary: the runtime library or one of its symbols could not be
//! resolved.
//!
//! # Example
//!
//! ```no_run
//! use std::os::raw::c_void;
//! use std::ptr;
//!
//! use mklfft_dfti::{
//!     status, values, ConfigParam, ConfigValue, Dfti, DftiHandle, ForwardDomain, Precision,
//! };
//!
//! # fn main() -> Result<(), mklfft_dfti::DftiError> {
//! let dfti = Dfti::load()?;
//!
//! // Interleaved (re, im) pairs for a length-4 complex transform.
//! let mut data = [1.0f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let mut handle: DftiHandle = ptr::null_mut();
//! unsafe {
//!     dfti.create_descriptor(&mut handle, Precision::Double, ForwardDomain::Complex, &[4])?;
//!     dfti.set_value(handle, ConfigParam::Placement, ConfigValue::Long(values::INPLACE))?;
//!     dfti.commit(handle)?;
//!     let rc = dfti.compute_forward(handle, data.as_mut_ptr() as *mut c_void)?;
//!     if rc != status::NO_ERROR {
//!         eprintln!("transform failed: {}", dfti.error_message(rc)?);
//!     }
//!     dfti.free_descriptor(&mut handle)?;
//! }
//! # Ok(())
//! # }
//! ```

mod descriptor;
mod library;
mod types;

pub use descriptor::{
    Dfti, SYM_COMMIT, SYM_COMPUTE_BACKWARD, SYM_COMPUTE_FORWARD, SYM_CREATE, SYM_ERROR_MESSAGE,
    SYM_FREE, SYM_GET_VALUE, SYM_SET_VALUE,
};
pub use library::{DftiSymbols, MklLibrary, MKL_LIB_ENV};
pub use types::{
    status, values, ConfigParam, ConfigSlot, ConfigValue, DftiHandle, ForwardDomain, MklLong,
    Precision, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, VERSION_LENGTH,
};

use thiserror::Error;

/// Failures on this side of the native boundary.
///
/// Native status codes are not represented here; they are returned
/// verbatim by every operation for the caller to interpret.
#[derive(Debug, Error)]
pub enum DftiError {
    #[error("failed to load MKL runtime library '{path}': {reason}")]
    Load { path: String, reason: String },
    #[error("MKL entry point '{name}' could not be resolved: {reason}")]
    Symbol { name: String, reason: String },
}
