//! 文档编辑器集成测试
//!
//! 测试场景：
//! - 演示文档的完整渲染结果
//! - 渲染缓存的幂等性与过期行为
//! - 通过文件存储保存，包括不可写目标
//! - 从 JSON 加载文档后经编辑器保存

use doc_editor::{
    build_demo, DatabaseStorage, Document, DocumentEditor, Element, FileStorage, MemoryStorage,
    Storage,
};
use tempfile::TempDir;

const DEMO_OUTPUT: &str = "Hello, world!\nThis is a real-world document editor example.\n\tIndented text after a tab space.\n[Image: picture.jpg]";

#[test]
fn test_demo_document_renders() {
    let mut document = Document::new();
    let storage = MemoryStorage::new();
    let mut editor = DocumentEditor::new(&mut document, &storage);

    build_demo(&mut editor);

    assert_eq!(editor.render_document(), DEMO_OUTPUT);
    assert_eq!(editor.document().len(), 8);
}

#[test]
fn test_render_matches_fragment_concatenation() {
    let mut document = Document::new();
    let storage = MemoryStorage::new();
    let mut editor = DocumentEditor::new(&mut document, &storage);

    editor.add_tab_space();
    editor.add_image("notes.txt");
    editor.add_text("");
    editor.add_text("picture.jpg");
    editor.add_new_line();
    editor.add_new_line();

    let expected: String = editor
        .document()
        .iter()
        .map(Element::render)
        .collect();

    assert_eq!(expected, "\t[Image: notes.txt]picture.jpg\n\n");
    assert_eq!(editor.render_document(), expected);
}

#[test]
fn test_render_twice_is_identical() {
    let mut document = Document::new();
    let storage = MemoryStorage::new();
    let mut editor = DocumentEditor::new(&mut document, &storage);

    build_demo(&mut editor);
    let first = editor.render_document();
    let second = editor.render_document();

    assert_eq!(first, second);
}

#[test]
fn test_stale_cache_after_add() {
    let mut document = Document::new();
    let storage = MemoryStorage::new();
    let mut editor = DocumentEditor::new(&mut document, &storage);

    build_demo(&mut editor);
    let first = editor.render_document();

    editor.add_new_line();
    editor.add_text("Added after the first render.");

    assert_eq!(editor.render_document(), first);
    assert_ne!(editor.document().render(), first);
}

#[test]
fn test_save_demo_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("document.txt");

    let mut document = Document::new();
    let storage = FileStorage::with_path(&path);
    let mut editor = DocumentEditor::new(&mut document, &storage);

    build_demo(&mut editor);
    editor.save_document().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEMO_OUTPUT);
}

#[test]
fn test_save_to_unwritable_destination_returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("document.txt");

    let mut document = Document::new();
    let storage = FileStorage::with_path(&path);
    let mut editor = DocumentEditor::new(&mut document, &storage);

    editor.add_text("data");
    let result = editor.save_document();

    assert!(result.is_err());
    // 失败后编辑器仍可继续使用
    assert_eq!(editor.render_document(), "data");
}

#[test]
fn test_storage_is_substitutable() {
    let storages: Vec<Box<dyn Storage>> = vec![
        Box::new(MemoryStorage::new()),
        Box::new(DatabaseStorage),
    ];

    for storage in &storages {
        let mut document = Document::new();
        let mut editor = DocumentEditor::new(&mut document, &**storage);
        editor.add_text("same text");
        assert!(editor.save_document().is_ok());
    }
}

#[test]
fn test_json_document_through_editor() {
    let json = r#"[
        {"type": "text", "content": "Title"},
        {"type": "newline"},
        {"type": "tab"},
        {"type": "image", "path": "cover.png"}
    ]"#;

    let mut document = Document::from_json(json).unwrap();
    let storage = MemoryStorage::new();
    let mut editor = DocumentEditor::new(&mut document, &storage);

    editor.add_new_line();
    editor.save_document().unwrap();

    assert_eq!(storage.last().as_deref(), Some("Title\n\t[Image: cover.png]\n"));
}
