use pyo3::prelude::*;
use spdl_archive::_archive;

use crate::error::StubgenError;

/// Import name of the bundled archive module.
pub const ARCHIVE_MODULE: &str = "_archive";
/// Import paths of the prebuilt binary extension modules.
pub const LIBSPDL_MODULE: &str = "spdl.io.lib._libspdl";
pub const LIBSPDL_CUDA_MODULE: &str = "spdl.io.lib._libspdl_cuda";

/// Registers the workspace's own `_archive` module on the interpreter's
/// init table. Must run before `Python::initialize`.
pub fn register_bundled_modules() {
    pyo3::append_to_inittab!(_archive);
}

/// The `_archive` handle is available directly; importing it resolves
/// against the registration done in [`register_bundled_modules`].
pub fn import_archive(py: Python<'_>) -> Result<Bound<'_, PyModule>, StubgenError> {
    import(py, ARCHIVE_MODULE)
}

/// Loads the prebuilt CPU extension module.
pub fn import_libspdl(py: Python<'_>) -> Result<Bound<'_, PyModule>, StubgenError> {
    import(py, LIBSPDL_MODULE)
}

/// Loads the prebuilt CUDA extension module.
pub fn import_libspdl_cuda(py: Python<'_>) -> Result<Bound<'_, PyModule>, StubgenError> {
    import(py, LIBSPDL_CUDA_MODULE)
}

fn import<'py>(py: Python<'py>, name: &str) -> Result<Bound<'py, PyModule>, StubgenError> {
    PyModule::import(py, name).map_err(|source| StubgenError::ModuleLoad {
        name: name.to_string(),
        source,
    })
}
