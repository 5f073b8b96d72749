/// 存储抽象层模块
///
/// 该模块提供了文档持久化的抽象接口，遵循依赖倒置原则。
/// 编辑器只依赖 [`Storage`] trait，具体实现由调用方在构造时注入。
///
/// # 架构设计
///
/// - **traits**: 定义 Storage trait 接口
/// - **file_storage**: 基于文件系统的默认实现
/// - **database_storage**: 数据库存储占位实现
/// - **memory_storage**: 内存存储，便于测试注入
///
/// # 使用示例
///
/// ```rust,ignore
/// use doc_editor::storage::{FileStorage, Storage};
///
/// let storage = FileStorage::new();
/// storage.save("Hello")?;
/// ```
pub mod traits;
pub mod file_storage;
pub mod database_storage;
pub mod memory_storage;

// === 导出 trait 定义 ===
pub use traits::Storage;

// === 导出默认实现 ===
pub use file_storage::{FileStorage, DEFAULT_DOCUMENT_FILE};
pub use database_storage::DatabaseStorage;
pub use memory_storage::MemoryStorage;
