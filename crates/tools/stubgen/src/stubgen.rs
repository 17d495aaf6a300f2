use pyo3::prelude::*;

use crate::error::StubgenError;

/// Python module hosting the external stub generator.
const STUBGEN_MODULE: &str = "nanobind.stubgen";

/// Handle to the external stub generator, bound to one extension module.
///
/// The generator is opaque: its surface here is construction against a
/// module handle, `put` for everything registered under that handle, and
/// `get` for the rendered interface text.
pub struct StubGen<'py> {
    inner: Bound<'py, PyAny>,
}

impl<'py> StubGen<'py> {
    pub fn new(py: Python<'py>, module: &Bound<'py, PyModule>) -> PyResult<Self> {
        let class = py.import(STUBGEN_MODULE)?.getattr("StubGen")?;
        Ok(Self {
            inner: class.call1((module,))?,
        })
    }

    pub fn put(&self, module: &Bound<'py, PyModule>) -> PyResult<()> {
        self.inner.call_method1("put", (module,))?;
        Ok(())
    }

    pub fn get(&self) -> PyResult<String> {
        self.inner.call_method0("get")?.extract()
    }
}

/// Produces the full interface description for `module`; `name` labels
/// errors only.
pub fn describe_module<'py>(
    py: Python<'py>,
    name: &str,
    module: &Bound<'py, PyModule>,
) -> Result<String, StubgenError> {
    let generate = || -> PyResult<String> {
        let sg = StubGen::new(py, module)?;
        sg.put(module)?;
        sg.get()
    };
    generate().map_err(|source| StubgenError::Generate {
        module: name.to_string(),
        source,
    })
}
