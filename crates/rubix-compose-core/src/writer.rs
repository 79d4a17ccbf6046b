//! compose ファイルの書き出し

use crate::error::{GenerateError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// ファイルを切り詰めて `contents` を書き込む
///
/// 親ディレクトリは作成しない。ファイルハンドルはこの関数内で閉じられる。
pub fn write_descriptor(path: &Path, contents: &str) -> Result<()> {
    let io_error = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.sync_all().map_err(io_error)?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.yml");

        write_descriptor(&path, "version: '3.7'\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "version: '3.7'\n");
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.yml");
        fs::write(&path, "a much longer previous content\n".repeat(10)).unwrap();

        write_descriptor(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docker").join("out.yml");

        let err = write_descriptor(&path, "x").unwrap_err();

        match err {
            GenerateError::Io { path: err_path, source } => {
                assert_eq!(err_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert!(!temp_dir.path().join("docker").exists());
    }
}
