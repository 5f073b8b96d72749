use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use doc_editor::{
    build_demo, DatabaseStorage, Document, DocumentEditor, FileStorage, MemoryStorage, Storage,
    DEFAULT_DOCUMENT_FILE,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "doc_editor")]
#[command(about = "渲染文档元素并保存到存储后端")]
#[command(version = "0.1.0")]
struct Cli {
    /// 输入JSON文件路径（元素数组），缺省时使用演示文档
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件路径（仅 file 存储）
    #[arg(short, long, default_value = DEFAULT_DOCUMENT_FILE)]
    output: PathBuf,

    /// 存储后端
    #[arg(long, value_enum, default_value_t = StorageKind::File)]
    storage: StorageKind,

    /// 显示文档统计信息
    #[arg(long)]
    stats: bool,

    /// 以JSON格式输出文档（不渲染、不保存）
    #[arg(long)]
    dump_json: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageKind {
    File,
    Database,
    Memory,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.quiet);

    let mut document = load_document(&cli)?;
    let storage = create_storage(&cli);
    handle_render_and_save(&cli, &mut document, storage.as_ref())
}

/// 初始化日志输出
fn init_logging(quiet: bool) {
    let level = if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// 加载文档：有输入文件时从JSON读取，否则返回空文档（稍后填充演示内容）
fn load_document(cli: &Cli) -> Result<Document> {
    match &cli.input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取输入文件: {}", path.display()))?;
            let document = Document::from_json(&json)
                .with_context(|| format!("无法解析输入文件: {}", path.display()))?;
            Ok(document)
        }
        None => Ok(Document::new()),
    }
}

/// 根据命令行选项创建存储后端
fn create_storage(cli: &Cli) -> Box<dyn Storage> {
    match cli.storage {
        StorageKind::File => Box::new(FileStorage::with_path(cli.output.clone())),
        StorageKind::Database => Box::new(DatabaseStorage),
        StorageKind::Memory => Box::new(MemoryStorage::new()),
    }
}

/// 渲染并保存文档（`--dump-json` 时仅输出JSON）
fn handle_render_and_save(cli: &Cli, document: &mut Document, storage: &dyn Storage) -> Result<()> {
    let use_demo = cli.input.is_none();
    let mut editor = DocumentEditor::new(document, storage);

    if use_demo {
        build_demo(&mut editor);
    }

    if cli.dump_json {
        println!("{}", editor.document().to_json()?);
        return Ok(());
    }

    if cli.stats {
        println!("{}", editor.document().summary());
    }

    let rendered = editor.render_document();
    if !cli.quiet {
        println!("{}", rendered);
    }

    editor
        .save_document()
        .with_context(|| format!("保存失败: {}", storage.destination()))?;

    Ok(())
}
