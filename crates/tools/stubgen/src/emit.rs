use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::StubgenError;

/// One stub file to produce: a fixed destination file name plus the source
/// that yields the interface text for its extension module.
pub struct StubTarget<'a> {
    file_name: &'static str,
    source: Box<dyn FnOnce() -> Result<String, StubgenError> + 'a>,
}

impl<'a> StubTarget<'a> {
    pub fn new(
        file_name: &'static str,
        source: impl FnOnce() -> Result<String, StubgenError> + 'a,
    ) -> Self {
        Self {
            file_name,
            source: Box::new(source),
        }
    }
}

/// Writes every target's interface text into `output_dir`, creating the
/// directory (parents included) first.
///
/// Targets run strictly in order. The first failure aborts the run; files
/// written before it are left in place.
pub fn emit_stubs(output_dir: &Path, targets: Vec<StubTarget<'_>>) -> Result<(), StubgenError> {
    fs::create_dir_all(output_dir).map_err(|source| StubgenError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    for target in targets {
        let dest = output_dir.join(target.file_name);
        debug!(file = target.file_name, "generating stub");
        let text = (target.source)()?;
        fs::write(&dest, &text).map_err(|source| StubgenError::WriteStub {
            path: dest.clone(),
            source,
        })?;
        info!(file = %dest.display(), bytes = text.len(), "stub written");
    }
    Ok(())
}
