/// 文件存储实现
///
/// 提供基于文件系统的默认文档存储

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use super::traits::Storage;
use crate::error::StorageError;

/// 默认的文档文件名（相对于当前工作目录）
pub const DEFAULT_DOCUMENT_FILE: &str = "document.txt";

/// 文件存储（基于 std::fs）
///
/// 每次保存都会覆盖目标文件的全部内容，不追加
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// 创建写入 `document.txt` 的文件存储
    pub fn new() -> Self {
        Self::with_path(DEFAULT_DOCUMENT_FILE)
    }

    /// 创建写入指定路径的文件存储
    ///
    /// # 参数
    /// * `path` - 目标文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 获取目标文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, data: &str) -> std::io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(data.as_bytes())?;
        file.flush()
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        match self.write_file(data) {
            Ok(()) => {
                tracing::info!("Document saved to {}", self.path.display());
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    "Unable to open {} for writing: {}",
                    self.path.display(),
                    source
                );
                Err(StorageError::Io {
                    destination: self.destination(),
                    source,
                })
            }
        }
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
