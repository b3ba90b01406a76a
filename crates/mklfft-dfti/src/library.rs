//! MKL runtime library loading and symbol lookup.

use std::env;
use std::ffi::CString;
use std::path::Path;

use libloading::{Library, Symbol};
use log::{debug, info};

use crate::DftiError;

/// Environment variable holding an explicit path to the MKL runtime
/// library. When set it takes precedence over the platform candidates.
pub const MKL_LIB_ENV: &str = "MKLFFT_MKL_LIB";

/// File names tried by [`MklLibrary::load_default`], in order.
#[cfg(target_os = "linux")]
const CANDIDATES: &[&str] = &["libmkl_rt.so.2", "libmkl_rt.so", "libmkl_rt.so.1"];
#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &["libmkl_rt.2.dylib", "libmkl_rt.dylib"];
#[cfg(target_os = "windows")]
const CANDIDATES: &[&str] = &["mkl_rt.2.dll", "mkl_rt.dll"];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[&str] = &["libmkl_rt.so"];

/// Resolves DFTI entry points to typed function values.
///
/// [`MklLibrary`] implements this over the real shared library; tests plug
/// in a stub symbol table so binding dispatch can be exercised without MKL
/// installed.
pub trait DftiSymbols {
    /// Resolve `name` to a function value of type `F`.
    ///
    /// # Safety
    ///
    /// `F` must be the `unsafe extern "C" fn` type matching the actual
    /// signature of the native entry point.
    unsafe fn get<F: Copy>(&self, name: &str) -> Result<F, DftiError>;
}

/// A loaded MKL runtime library (`mkl_rt`, the single-dynamic-library
/// interface).
#[derive(Debug)]
pub struct MklLibrary {
    library: Library,
    path: String,
}

impl MklLibrary {
    /// Load the library from an explicit path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DftiError> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }.map_err(|e| DftiError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!("Loaded MKL runtime library from '{}'", path.display());
        Ok(Self {
            library,
            path: path.display().to_string(),
        })
    }

    /// Load the MKL runtime, honoring `MKLFFT_MKL_LIB` and then trying the
    /// platform-specific file names on the system search path.
    pub fn load_default() -> Result<Self, DftiError> {
        if let Ok(path) = env::var(MKL_LIB_ENV) {
            return Self::load(path);
        }

        let mut last = String::new();
        for candidate in CANDIDATES {
            match Self::load(candidate) {
                Ok(lib) => return Ok(lib),
                Err(err) => {
                    debug!("MKL candidate '{candidate}' not loadable: {err}");
                    last = err.to_string();
                }
            }
        }
        Err(DftiError::Load {
            path: CANDIDATES.join(", "),
            reason: last,
        })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl DftiSymbols for MklLibrary {
    unsafe fn get<F: Copy>(&self, name: &str) -> Result<F, DftiError> {
        let c_name = CString::new(name).map_err(|_| DftiError::Symbol {
            name: name.to_string(),
            reason: "name contains an interior NUL".to_string(),
        })?;

        let symbol: Symbol<'_, F> =
            self.library
                .get(c_name.as_bytes_with_nul())
                .map_err(|e| DftiError::Symbol {
                    name: name.to_string(),
                    reason: format!("not found in '{}': {e}", self.path),
                })?;
        Ok(*symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_name_the_runtime_library() {
        assert!(!CANDIDATES.is_empty());
        assert!(CANDIDATES.iter().all(|name| name.contains("mkl_rt")));
    }

    #[test]
    fn load_from_missing_path_reports_the_path() {
        let err = MklLibrary::load("/nonexistent/libmkl_rt.so").unwrap_err();
        match err {
            DftiError::Load { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("expected load error, got {other:?}"),
        }
    }
}
