use thiserror::Error;

/// 存储错误
///
/// 存储层唯一的错误种类：目标不可写
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to write to {destination}: {source}")]
    Io {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// 获取出错的目标
    pub fn destination(&self) -> &str {
        match self {
            StorageError::Io { destination, .. } => destination,
        }
    }
}

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
