/// 文档编辑器模块
///
/// 提供添加元素、渲染（带缓存）与保存的便捷接口。

use crate::document::Document;
use crate::element::Element;
use crate::error::StorageError;
use crate::storage::Storage;

/// 文档编辑器 - 组合文档与存储的外观
///
/// # 核心特性
/// - **依赖注入**: 文档和存储均由调用方创建并持有，编辑器只借用
/// - **渲染缓存**: 首次得到非空渲染结果后缓存，之后直接返回
///
/// # 缓存语义
/// 添加元素不会使缓存失效：缓存建立后再添加元素，`render_document`
/// 仍返回旧结果。需要最新结果时显式调用 [`DocumentEditor::invalidate_cache`]。
/// 空字符串表示“未缓存”，因此空文档每次都会重新渲染。
///
/// # 使用示例
///
/// ```rust,ignore
/// let mut document = Document::new();
/// let storage = MemoryStorage::new();
/// let mut editor = DocumentEditor::new(&mut document, &storage);
///
/// editor.add_text("Hello");
/// assert_eq!(editor.render_document(), "Hello");
/// ```
pub struct DocumentEditor<'a> {
    /// 被编辑的文档（借用）
    document: &'a mut Document,
    /// 存储后端（借用）
    storage: &'a dyn Storage,
    /// 渲染缓存，空字符串表示未缓存
    rendered_document: String,
}

impl<'a> DocumentEditor<'a> {
    /// 创建新的文档编辑器
    ///
    /// # 参数
    /// * `document` - 要编辑的文档
    /// * `storage` - 保存时使用的存储后端
    pub fn new(document: &'a mut Document, storage: &'a dyn Storage) -> Self {
        Self {
            document,
            storage,
            rendered_document: String::new(),
        }
    }

    /// 添加文本
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.document.add_element(Element::text(text));
    }

    /// 添加图片
    ///
    /// # 参数
    /// * `path` - 图片路径，不做扩展名或存在性检查
    pub fn add_image(&mut self, path: impl Into<String>) {
        self.document.add_element(Element::image(path));
    }

    /// 添加换行
    pub fn add_new_line(&mut self) {
        self.document.add_element(Element::NewLine);
    }

    /// 添加制表符
    pub fn add_tab_space(&mut self) {
        self.document.add_element(Element::TabSpace);
    }

    /// 渲染文档（带缓存）
    ///
    /// # 返回
    /// 缓存非空时直接返回缓存，否则渲染文档并写入缓存
    pub fn render_document(&mut self) -> String {
        if self.rendered_document.is_empty() {
            self.rendered_document = self.document.render();
            tracing::debug!(
                "Rendered {} elements into {} bytes",
                self.document.len(),
                self.rendered_document.len()
            );
        }
        self.rendered_document.clone()
    }

    /// 保存文档
    ///
    /// 先调用 [`DocumentEditor::render_document`]，再交给存储后端
    ///
    /// # 返回
    /// 存储失败时返回 [`StorageError`]，不会 panic
    pub fn save_document(&mut self) -> Result<(), StorageError> {
        let rendered = self.render_document();
        self.storage.save(&rendered)
    }

    /// 检查渲染缓存是否已建立
    pub fn is_cached(&self) -> bool {
        !self.rendered_document.is_empty()
    }

    /// 清除渲染缓存，下次渲染时重新计算
    pub fn invalidate_cache(&mut self) {
        self.rendered_document.clear();
    }

    /// 获取文档的不可变引用
    pub fn document(&self) -> &Document {
        &*self.document
    }

    /// 获取存储后端
    pub fn storage(&self) -> &dyn Storage {
        self.storage
    }
}
