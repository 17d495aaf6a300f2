// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Archive support for the spdl extension modules.
//
// Exposes a minimal reader for uncompressed tar archives to Python:
// enough to index the regular-file members of an archive and slice
// their contents back out by (offset, size).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

pub mod tar;

pub use tar::{TarEntry, TarError};

impl From<TarError> for PyErr {
    fn from(err: TarError) -> Self {
        match err {
            // malformed archives surface as ValueError, matching the
            // domain-error convention of the other spdl modules
            TarError::UnsupportedEntryType { .. }
            | TarError::TruncatedEntry
            | TarError::NonUtf8 { .. } => PyValueError::new_err(err.to_string()),
            TarError::Open { .. } | TarError::Read { .. } => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

fn entry_tuples(entries: Vec<TarEntry>) -> Vec<(String, u64, u64)> {
    entries.into_iter().map(|e| (e.name, e.offset, e.size)).collect()
}

/// Index the regular-file members of an uncompressed tar archive held in
/// memory. Returns a list of `(name, offset, size)` tuples, where `offset`
/// points at the member's first content byte.
#[pyfunction]
fn parse_tar_bytes(data: &[u8]) -> PyResult<Vec<(String, u64, u64)>> {
    Ok(entry_tuples(tar::parse_tar_bytes(data)?))
}

/// Index the regular-file members of an uncompressed tar archive on disk,
/// without loading the archive into memory.
#[pyfunction]
fn parse_tar_file(path: &str) -> PyResult<Vec<(String, u64, u64)>> {
    Ok(entry_tuples(tar::parse_tar_file(path)?))
}

/// Read `size` bytes starting at `offset` from the file at `path`.
#[pyfunction]
fn load_bytes<'py>(
    py: Python<'py>,
    path: &str,
    offset: u64,
    size: u64,
) -> PyResult<Bound<'py, PyBytes>> {
    let data = tar::load_bytes(path, offset, size)?;
    Ok(PyBytes::new(py, &data))
}

/// Read `size` bytes starting at `offset` and decode them as UTF-8 text.
#[pyfunction]
fn load_text(path: &str, offset: u64, size: u64) -> PyResult<String> {
    Ok(tar::load_text(path, offset, size)?)
}

/// Python module definition
#[pymodule]
pub fn _archive(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_tar_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(parse_tar_file, m)?)?;
    m.add_function(wrap_pyfunction!(load_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(load_text, m)?)?;
    Ok(())
}
