/// 文档模块
///
/// 文档是元素的有序集合，独占其中所有元素。插入顺序即渲染顺序。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::element::{Element, ElementKind};
use crate::error::DocError;

/// 文档 - 元素的有序容器
///
/// # 核心特性
/// - **有序**: 元素按插入顺序渲染，从不重排
/// - **独占**: 元素以值的形式存储，不存在别名
/// - **无缓存**: 每次 `render` 都重新拼接，缓存由编辑器负责
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// 创建空文档
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// 从元素列表创建文档
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// 从 JSON 数组加载文档
    ///
    /// # 参数
    /// * `json` - 元素数组，格式见 [`Element`]
    pub fn from_json(json: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为 JSON 数组（带缩进）
    pub fn to_json(&self) -> Result<String, DocError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 在末尾追加元素
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// 渲染整个文档
    ///
    /// 依次拼接每个元素的渲染结果，不插入任何分隔符
    pub fn render(&self) -> String {
        let mut result = String::new();
        for element in &self.elements {
            result.push_str(&element.render());
        }
        result
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 获取所有元素
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// 按种类统计元素数量
    pub fn count_by_kind(&self) -> BTreeMap<ElementKind, usize> {
        let mut counts = BTreeMap::new();
        for element in &self.elements {
            *counts.entry(element.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// 生成文档摘要
    ///
    /// # 返回
    /// 返回人类可读的摘要字符串，如 `元素总数: 3 (text: 2, image: 1, newline: 0, tab: 0)`
    pub fn summary(&self) -> String {
        let counts = self.count_by_kind();
        let parts: Vec<String> = ElementKind::ALL
            .iter()
            .map(|kind| format!("{}: {}", kind, counts.get(kind).copied().unwrap_or(0)))
            .collect();
        format!("元素总数: {} ({})", self.len(), parts.join(", "))
    }
}

impl Extend<Element> for Document {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
