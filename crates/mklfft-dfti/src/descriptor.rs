//! Pass-through wrappers over the DFTI descriptor entry points.
//!
//! Each operation resolves its symbol, forwards the arguments unchanged
//! and returns the native status verbatim. No validation, no retries, no
//! lifecycle tracking: the uncommitted → configure → commit → compute →
//! free ordering is the caller's contract with MKL.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::path::Path;

use crate::library::{DftiSymbols, MklLibrary};
use crate::types::{
    ConfigParam, ConfigSlot, ConfigValue, DftiHandle, ForwardDomain, MklLong, Precision,
};
use crate::DftiError;

/// Exported symbol names of the descriptor API.
pub const SYM_CREATE: &str = "DftiCreateDescriptor";
pub const SYM_COMMIT: &str = "DftiCommitDescriptor";
pub const SYM_SET_VALUE: &str = "DftiSetValue";
pub const SYM_GET_VALUE: &str = "DftiGetValue";
pub const SYM_COMPUTE_FORWARD: &str = "DftiComputeForward";
pub const SYM_COMPUTE_BACKWARD: &str = "DftiComputeBackward";
pub const SYM_FREE: &str = "DftiFreeDescriptor";
pub const SYM_ERROR_MESSAGE: &str = "DftiErrorMessage";

// The natives are variadic C functions; one typed alias per documented
// call shape.
type Create1dFn =
    unsafe extern "C" fn(*mut DftiHandle, c_int, c_int, MklLong, MklLong) -> MklLong;
type CreateNdFn =
    unsafe extern "C" fn(*mut DftiHandle, c_int, c_int, MklLong, *const MklLong) -> MklLong;
type CommitFn = unsafe extern "C" fn(DftiHandle) -> MklLong;
type SetLongFn = unsafe extern "C" fn(DftiHandle, c_int, MklLong) -> MklLong;
type SetFloatFn = unsafe extern "C" fn(DftiHandle, c_int, f64) -> MklLong;
type SetLongsFn = unsafe extern "C" fn(DftiHandle, c_int, *const MklLong) -> MklLong;
type SetStrFn = unsafe extern "C" fn(DftiHandle, c_int, *const c_char) -> MklLong;
type GetLongFn = unsafe extern "C" fn(DftiHandle, c_int, *mut MklLong) -> MklLong;
type GetFloatFn = unsafe extern "C" fn(DftiHandle, c_int, *mut f64) -> MklLong;
type GetCharsFn = unsafe extern "C" fn(DftiHandle, c_int, *mut c_char) -> MklLong;
type ComputeFn = unsafe extern "C" fn(DftiHandle, *mut c_void) -> MklLong;
type ComputeOutFn = unsafe extern "C" fn(DftiHandle, *mut c_void, *mut c_void) -> MklLong;
type FreeFn = unsafe extern "C" fn(*mut DftiHandle) -> MklLong;
type ErrorMessageFn = unsafe extern "C" fn(MklLong) -> *const c_char;

/// The DFTI descriptor API over a symbol source.
///
/// `Dfti<MklLibrary>` is the production configuration; any other
/// [`DftiSymbols`] implementation (a stub table in tests) slots in
/// unchanged because every operation is a pure pass-through.
pub struct Dfti<S: DftiSymbols> {
    symbols: S,
}

impl Dfti<MklLibrary> {
    /// Bind against the system MKL runtime.
    pub fn load() -> Result<Self, DftiError> {
        Ok(Self::new(MklLibrary::load_default()?))
    }

    /// Bind against an MKL runtime at an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, DftiError> {
        Ok(Self::new(MklLibrary::load(path)?))
    }

    pub fn library(&self) -> &MklLibrary {
        &self.symbols
    }
}

impl<S: DftiSymbols> Dfti<S> {
    pub fn new(symbols: S) -> Self {
        Self { symbols }
    }

    /// `DftiCreateDescriptor`: allocate a descriptor for a transform of
    /// the given precision, domain and lengths, writing the new handle
    /// into `handle`.
    ///
    /// A single length uses the scalar call shape, more than one the
    /// array-pointer shape, mirroring the documented varargs.
    ///
    /// # Safety
    ///
    /// `handle` receives an MKL-owned pointer that must eventually be
    /// released through [`free_descriptor`](Self::free_descriptor).
    pub unsafe fn create_descriptor(
        &self,
        handle: &mut DftiHandle,
        precision: Precision,
        domain: ForwardDomain,
        lengths: &[MklLong],
    ) -> Result<MklLong, DftiError> {
        let dimension = lengths.len() as MklLong;
        if lengths.len() == 1 {
            let create: Create1dFn = self.symbols.get(SYM_CREATE)?;
            Ok(create(
                handle,
                precision as c_int,
                domain as c_int,
                dimension,
                lengths[0],
            ))
        } else {
            let create: CreateNdFn = self.symbols.get(SYM_CREATE)?;
            Ok(create(
                handle,
                precision as c_int,
                domain as c_int,
                dimension,
                lengths.as_ptr(),
            ))
        }
    }

    /// `DftiCommitDescriptor`: finalize configuration; the descriptor may
    /// execute afterwards.
    ///
    /// # Safety
    ///
    /// `handle` must be a live descriptor from
    /// [`create_descriptor`](Self::create_descriptor).
    pub unsafe fn commit(&self, handle: DftiHandle) -> Result<MklLong, DftiError> {
        let commit: CommitFn = self.symbols.get(SYM_COMMIT)?;
        Ok(commit(handle))
    }

    /// `DftiSetValue`: mutate descriptor configuration before commit.
    ///
    /// # Safety
    ///
    /// `handle` must be live and uncommitted; the value variant must match
    /// the shape MKL documents for `param`.
    pub unsafe fn set_value(
        &self,
        handle: DftiHandle,
        param: ConfigParam,
        value: ConfigValue<'_>,
    ) -> Result<MklLong, DftiError> {
        match value {
            ConfigValue::Long(v) => {
                let set: SetLongFn = self.symbols.get(SYM_SET_VALUE)?;
                Ok(set(handle, param.id(), v))
            }
            ConfigValue::Float(v) => {
                let set: SetFloatFn = self.symbols.get(SYM_SET_VALUE)?;
                Ok(set(handle, param.id(), v))
            }
            ConfigValue::Longs(vs) => {
                let set: SetLongsFn = self.symbols.get(SYM_SET_VALUE)?;
                Ok(set(handle, param.id(), vs.as_ptr()))
            }
            ConfigValue::Str(s) => {
                let set: SetStrFn = self.symbols.get(SYM_SET_VALUE)?;
                Ok(set(handle, param.id(), s.as_ptr()))
            }
        }
    }

    /// `DftiGetValue`: read descriptor configuration into `slot`.
    ///
    /// # Safety
    ///
    /// `handle` must be live; the slot variant must match the shape MKL
    /// documents for `param`, and array/char slots must be large enough
    /// for what MKL writes.
    pub unsafe fn get_value(
        &self,
        handle: DftiHandle,
        param: ConfigParam,
        slot: ConfigSlot<'_>,
    ) -> Result<MklLong, DftiError> {
        match slot {
            ConfigSlot::Long(out) => {
                let get: GetLongFn = self.symbols.get(SYM_GET_VALUE)?;
                Ok(get(handle, param.id(), out))
            }
            ConfigSlot::Float(out) => {
                let get: GetFloatFn = self.symbols.get(SYM_GET_VALUE)?;
                Ok(get(handle, param.id(), out))
            }
            ConfigSlot::Longs(out) => {
                let get: GetLongFn = self.symbols.get(SYM_GET_VALUE)?;
                Ok(get(handle, param.id(), out.as_mut_ptr()))
            }
            ConfigSlot::Chars(out) => {
                let get: GetCharsFn = self.symbols.get(SYM_GET_VALUE)?;
                Ok(get(handle, param.id(), out.as_mut_ptr()))
            }
        }
    }

    /// `DftiComputeForward`, in place.
    ///
    /// # Safety
    ///
    /// `handle` must be committed and `data` must point at a buffer laid
    /// out as the descriptor was configured.
    pub unsafe fn compute_forward(
        &self,
        handle: DftiHandle,
        data: *mut c_void,
    ) -> Result<MklLong, DftiError> {
        let compute: ComputeFn = self.symbols.get(SYM_COMPUTE_FORWARD)?;
        Ok(compute(handle, data))
    }

    /// `DftiComputeForward`, out of place.
    ///
    /// # Safety
    ///
    /// As [`compute_forward`](Self::compute_forward); `input` and `output`
    /// must not alias unless the descriptor allows it.
    pub unsafe fn compute_forward_out(
        &self,
        handle: DftiHandle,
        input: *mut c_void,
        output: *mut c_void,
    ) -> Result<MklLong, DftiError> {
        let compute: ComputeOutFn = self.symbols.get(SYM_COMPUTE_FORWARD)?;
        Ok(compute(handle, input, output))
    }

    /// `DftiComputeBackward`, in place.
    ///
    /// # Safety
    ///
    /// As [`compute_forward`](Self::compute_forward).
    pub unsafe fn compute_backward(
        &self,
        handle: DftiHandle,
        data: *mut c_void,
    ) -> Result<MklLong, DftiError> {
        let compute: ComputeFn = self.symbols.get(SYM_COMPUTE_BACKWARD)?;
        Ok(compute(handle, data))
    }

    /// `DftiComputeBackward`, out of place.
    ///
    /// # Safety
    ///
    /// As [`compute_forward_out`](Self::compute_forward_out).
    pub unsafe fn compute_backward_out(
        &self,
        handle: DftiHandle,
        input: *mut c_void,
        output: *mut c_void,
    ) -> Result<MklLong, DftiError> {
        let compute: ComputeOutFn = self.symbols.get(SYM_COMPUTE_BACKWARD)?;
        Ok(compute(handle, input, output))
    }

    /// `DftiFreeDescriptor`: release the descriptor and null out the
    /// handle slot on the MKL side.
    ///
    /// # Safety
    ///
    /// `handle` must not be used after this call.
    pub unsafe fn free_descriptor(&self, handle: &mut DftiHandle) -> Result<MklLong, DftiError> {
        let free: FreeFn = self.symbols.get(SYM_FREE)?;
        let slot: *mut DftiHandle = handle;
        Ok(free(slot))
    }

    /// `DftiErrorMessage`: human-readable text for a status code.
    pub fn error_message(&self, code: MklLong) -> Result<String, DftiError> {
        let message: ErrorMessageFn = unsafe { self.symbols.get(SYM_ERROR_MESSAGE)? };
        let ptr = unsafe { message(code) };
        if ptr.is_null() {
            return Ok(String::new());
        }
        Ok(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}
