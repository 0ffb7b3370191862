use std::path::Path;

/// Source of INI text. Implemented for the file system by `FsProvider`; tests
/// and embedders can serve text from memory instead.
pub trait ReadProvider {
    fn read_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads from the local file system.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so only
/// an unreadable file fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProvider;

impl ReadProvider for FsProvider {
    fn read_string(&self, path: &Path) -> std::io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
