use std::ffi::OsString;
use std::path::Path;

use super::{file_name_of, CommandError, OperationResult, Router};
use crate::core::session::Session;
use crate::fs::Gateway;

const BROTLI_EXTENSION: &str = "br";

fn compressed_name(source: &Path) -> Result<OsString, CommandError> {
    let mut name = file_name_of(source)?.to_os_string();
    name.push(".");
    name.push(BROTLI_EXTENSION);
    Ok(name)
}

fn decompressed_name(source: &Path) -> Result<OsString, CommandError> {
    let name = file_name_of(source)?;
    let stripped = match (Path::new(name).extension(), Path::new(name).file_stem()) {
        (Some(ext), Some(stem)) if ext == BROTLI_EXTENSION => stem,
        _ => name,
    };
    Ok(stripped.to_os_string())
}

impl<G: Gateway> Router<G> {
    pub(super) fn compress(&self, session: &Session, src: &str, dst: &str) -> Result<OperationResult, CommandError> {
        let source = self.existing_file(session, src)?;
        let target = self.destination(session, dst, &compressed_name(&source)?)?;
        let bytes = self.gateway.compress_stream(&source, &target)?;
        Ok(OperationResult::success(format!(
            "Compressed {} into {} ({} bytes)",
            source.display(),
            target.display(),
            bytes
        )))
    }

    pub(super) fn decompress(&self, session: &Session, src: &str, dst: &str) -> Result<OperationResult, CommandError> {
        let source = self.existing_file(session, src)?;
        let target = self.destination(session, dst, &decompressed_name(&source)?)?;
        let bytes = self.gateway.decompress_stream(&source, &target)?;
        Ok(OperationResult::success(format!(
            "Decompressed {} into {} ({} bytes)",
            source.display(),
            target.display(),
            bytes
        )))
    }
}
