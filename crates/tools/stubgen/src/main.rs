use anyhow::{Context, Result};
use pyo3::Python;

use spdl_stubgen::emit::{StubTarget, emit_stubs};
use spdl_stubgen::main_init::init_main;
use spdl_stubgen::{modules, stubgen};

static ARCHIVE_STUB: &str = "_archive.pyi";
static LIBSPDL_STUB: &str = "_libspdl.pyi";
static LIBSPDL_CUDA_STUB: &str = "_libspdl_cuda.pyi";

fn main() -> Result<()> {
    let config = init_main(std::env::args());

    // The bundled module must be on the init table before the interpreter
    // comes up.
    modules::register_bundled_modules();
    Python::initialize();

    tracing::info!(
        output_dir = %config.output_dir.display(),
        "generating extension module stubs"
    );

    Python::attach(|py| {
        let targets = vec![
            StubTarget::new(ARCHIVE_STUB, || {
                let module = modules::import_archive(py)?;
                stubgen::describe_module(py, modules::ARCHIVE_MODULE, &module)
            }),
            StubTarget::new(LIBSPDL_STUB, || {
                let module = modules::import_libspdl(py)?;
                stubgen::describe_module(py, modules::LIBSPDL_MODULE, &module)
            }),
            StubTarget::new(LIBSPDL_CUDA_STUB, || {
                let module = modules::import_libspdl_cuda(py)?;
                stubgen::describe_module(py, modules::LIBSPDL_CUDA_MODULE, &module)
            }),
        ];
        emit_stubs(&config.output_dir, targets)
    })
    .context("stub generation failed")?;

    Ok(())
}
