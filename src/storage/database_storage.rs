/// 数据库存储占位实现
///
/// 仅用于演示 [`Storage`] 的可替换性，不持久化任何数据

use super::traits::Storage;
use crate::error::StorageError;

/// 数据库存储（占位）
#[derive(Debug, Clone, Default)]
pub struct DatabaseStorage;

impl Storage for DatabaseStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        tracing::debug!("DatabaseStorage is a placeholder, discarding {} bytes", data.len());
        Ok(())
    }

    fn destination(&self) -> String {
        "database".to_string()
    }
}
