/// 编辑器层模块
///
/// 该模块提供面向调用方的编辑接口（外观模式）。
/// 编辑器借用调用方持有的文档和存储，自身只维护渲染缓存。
///
/// # 架构设计
///
/// - **document_editor**: 文档编辑器，组合 Document 与 Storage
///
/// # 使用示例
///
/// ```rust,ignore
/// use doc_editor::{Document, DocumentEditor};
/// use doc_editor::storage::FileStorage;
///
/// let mut document = Document::new();
/// let storage = FileStorage::new();
/// let mut editor = DocumentEditor::new(&mut document, &storage);
///
/// editor.add_text("Hello, world!");
/// editor.add_new_line();
/// editor.add_image("picture.jpg");
///
/// println!("{}", editor.render_document());
/// editor.save_document()?;
/// ```
pub mod document_editor;

// === 导出公共接口 ===
pub use document_editor::DocumentEditor;
