pub mod element;
pub mod document;
pub mod storage;
pub mod editor;
pub mod error;

// 重新导出主要结构
pub use element::{Element, ElementKind};
pub use document::Document;
pub use storage::{DatabaseStorage, FileStorage, MemoryStorage, Storage, DEFAULT_DOCUMENT_FILE};
pub use editor::DocumentEditor;
pub use error::{DocError, StorageError};

/// 构建演示文档：依次添加文本、换行、制表符和图片
///
/// 渲染结果为：
///
/// ```text
/// Hello, world!
/// This is a real-world document editor example.
/// 	Indented text after a tab space.
/// [Image: picture.jpg]
/// ```
pub fn build_demo(editor: &mut DocumentEditor<'_>) {
    editor.add_text("Hello, world!");
    editor.add_new_line();
    editor.add_text("This is a real-world document editor example.");
    editor.add_new_line();
    editor.add_tab_space();
    editor.add_text("Indented text after a tab space.");
    editor.add_new_line();
    editor.add_image("picture.jpg");
}
