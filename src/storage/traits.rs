/// 存储抽象层 - trait 定义

use crate::error::StorageError;

/// 文档存储 trait
///
/// # 职责
/// - 接收渲染完成的字符串并持久化
/// - 不负责渲染，仅负责 IO
///
/// # 错误处理
/// 失败时返回 [`StorageError`]，实现不得 panic
///
/// # 实现示例
/// ```rust,ignore
/// pub struct StdoutStorage;
/// impl Storage for StdoutStorage {
///     fn save(&self, data: &str) -> Result<(), StorageError> {
///         print!("{}", data);
///         Ok(())
///     }
///
///     fn destination(&self) -> String {
///         "stdout".to_string()
///     }
/// }
/// ```
pub trait Storage {
    /// 保存数据
    ///
    /// # 参数
    /// * `data` - 渲染后的文档内容
    fn save(&self, data: &str) -> Result<(), StorageError>;

    /// 存储目标的可读描述（用于诊断输出）
    fn destination(&self) -> String;
}
