/// 内存存储实现
///
/// 将每次保存的内容记录在内存中，主要用于测试时注入

use std::cell::RefCell;
use super::traits::Storage;
use crate::error::StorageError;

/// 内存存储
///
/// 按保存顺序记录所有数据。使用 `RefCell`，仅限单线程使用
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saves: RefCell<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取所有保存记录（按时间顺序）
    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }

    /// 获取最近一次保存的内容
    pub fn last(&self) -> Option<String> {
        self.saves.borrow().last().cloned()
    }

    /// 保存次数
    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        self.saves.borrow_mut().push(data.to_string());
        tracing::debug!("Document saved to memory ({} bytes)", data.len());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}
