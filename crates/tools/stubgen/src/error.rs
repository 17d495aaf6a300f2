use std::io;
use std::path::PathBuf;

use pyo3::PyErr;
use thiserror::Error;

/// Failures surfaced while emitting stub files.
///
/// Every variant is terminal: the run stops at the first error and files
/// already written stay on disk.
#[derive(Debug, Error)]
pub enum StubgenError {
    #[error("failed to create output directory {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load extension module `{name}`")]
    ModuleLoad {
        name: String,
        #[source]
        source: PyErr,
    },

    #[error("stub generation failed for `{module}`")]
    Generate {
        module: String,
        #[source]
        source: PyErr,
    },

    #[error("failed to write stub file {}", .path.display())]
    WriteStub {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
