/// 文档元素模块
///
/// 定义文档中最小的可渲染单元。元素的类型在构造时确定，
/// 渲染时不再根据字符串内容（如扩展名）推断类型。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 换行元素的渲染结果
pub const NEW_LINE: &str = "\n";

/// 制表符元素的渲染结果
pub const TAB_SPACE: &str = "\t";

/// 文档元素
///
/// # 变体
/// - `Text`: 纯文本，原样输出
/// - `Image`: 图片引用，输出为 `[Image: <path>]`
/// - `NewLine`: 换行符
/// - `TabSpace`: 制表符
///
/// # JSON 格式
///
/// ```json
/// [
///   {"type": "text", "content": "Hello"},
///   {"type": "image", "path": "picture.jpg"},
///   {"type": "newline"},
///   {"type": "tab"}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// 文本元素
    Text { content: String },
    /// 图片元素（仅保存路径，不做任何校验）
    Image { path: String },
    /// 换行元素
    #[serde(rename = "newline")]
    NewLine,
    /// 制表符元素
    #[serde(rename = "tab")]
    TabSpace,
}

/// 元素种类，用于统计和摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Text,
    Image,
    NewLine,
    TabSpace,
}

impl ElementKind {
    /// 所有种类（按摘要输出顺序）
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::NewLine,
        ElementKind::TabSpace,
    ];

    /// 种类名称（与 JSON 中的 `type` 字段一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::NewLine => "newline",
            ElementKind::TabSpace => "tab",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Element {
    /// 创建文本元素
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
        }
    }

    /// 创建图片元素
    ///
    /// # 参数
    /// * `path` - 图片路径，不检查文件是否存在或扩展名
    pub fn image(path: impl Into<String>) -> Self {
        Element::Image { path: path.into() }
    }

    /// 获取元素种类
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text { .. } => ElementKind::Text,
            Element::Image { .. } => ElementKind::Image,
            Element::NewLine => ElementKind::NewLine,
            Element::TabSpace => ElementKind::TabSpace,
        }
    }

    /// 渲染为字符串片段
    ///
    /// 纯函数：只依赖元素自身的内容，多次调用结果相同
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text { content } => f.write_str(content),
            Element::Image { path } => write!(f, "[Image: {}]", path),
            Element::NewLine => f.write_str(NEW_LINE),
            Element::TabSpace => f.write_str(TAB_SPACE),
        }
    }
}
