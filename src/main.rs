use anyhow::{Context, Result};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use c172_checklist::{
    checklist::{is_fallback, parse_checklist, Checklist},
    config::{config_path, Config},
    logging::{init_file_logging, init_logging, Verbosity},
    resolve_checklist,
    tui::{self, ViewerOptions},
};

/// C172 Checklist
///
/// 终端里的 Cessna 172 检查单 - 标签页 + 复选框 + 一键重置
#[derive(Parser)]
#[command(name = "c172-checklist")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Cessna 172 checklist viewer for the terminal.\n\
                  The checklist data is embedded in the binary; use --file to load another one.\n\
                  Training/reference only. Always follow your specific aircraft POH/AFM."
)]
struct Cli {
    /// 日志详细程度（可重复：-v, -vv, -vvv）
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// 打开检查单查看器（默认）
    Run(RunArgs),

    /// 以纯文本打印检查单
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// 只打印指定分组（按 ID）
        #[arg(short, long)]
        section: Option<String>,
    },

    /// 严格校验检查单文件
    Check {
        /// 检查单 JSON 文件
        path: PathBuf,
    },

    /// 列出所有分组
    Sections {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// 显示配置文件位置和生效配置
    Config,
}

#[derive(Args, Clone, Default)]
struct SourceArgs {
    /// 使用外部检查单文件代替内嵌数据
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args, Clone, Default)]
struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// 启动时打开的分组（按 ID）
    #[arg(short, long)]
    section: Option<String>,

    /// 禁用鼠标
    #[arg(long)]
    no_mouse: bool,
}

impl RunArgs {
    fn is_empty(&self) -> bool {
        self.source.file.is_none() && self.section.is_none() && !self.no_mouse
    }
}

/// 把写在子命令前面的查看器参数并入子命令，子命令自己的参数优先
///
/// `c172-checklist --file x.json sections` 与 `c172-checklist sections --file x.json` 等价；
/// 子命令用不到的参数报错，而不是悄悄忽略。
fn resolve_command(command: Option<Commands>, top: RunArgs) -> Result<Commands, clap::Error> {
    let Some(command) = command else {
        return Ok(Commands::Run(top));
    };

    let command = match command {
        Commands::Run(args) => Commands::Run(RunArgs {
            source: SourceArgs {
                file: args.source.file.or(top.source.file),
            },
            section: args.section.or(top.section),
            no_mouse: args.no_mouse || top.no_mouse,
        }),
        Commands::Print { source, section } if !top.no_mouse => Commands::Print {
            source: SourceArgs {
                file: source.file.or(top.source.file),
            },
            section: section.or(top.section),
        },
        Commands::Sections { source } if top.section.is_none() && !top.no_mouse => {
            Commands::Sections {
                source: SourceArgs {
                    file: source.file.or(top.source.file),
                },
            }
        }
        other if top.is_empty() => other,
        _ => {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "this option does not apply to the given subcommand; place it after the subcommand",
            ))
        }
    };

    Ok(command)
}

// ═══════════════════════════════════════════════════════════════════
// 数据源
// ═══════════════════════════════════════════════════════════════════

/// 命令行 --file 优先，其次配置文件，最后内嵌数据
fn load_checklist(source: &SourceArgs, config: &Config) -> Result<Checklist> {
    let path = source.file.as_deref().or(config.checklist_path.as_deref());
    let checklist = resolve_checklist(path)?;

    if let Some(path) = path {
        tracing::info!(path = %path.display(), "using external checklist");
    }

    Ok(checklist)
}

fn warn_if_fallback(checklist: &Checklist) {
    if is_fallback(checklist) {
        eprintln!(
            "{}",
            "⚠️  Checklist data could not be read, showing the built-in example".yellow()
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// 查看器
// ═══════════════════════════════════════════════════════════════════

fn run_viewer(
    args: RunArgs,
    config: &Config,
    config_error: Option<&anyhow::Error>,
    verbosity: Verbosity,
) -> Result<()> {
    if let Some(log_path) = config.log_file_path() {
        // 日志不可用不影响查看器
        let _ = init_file_logging(verbosity, &log_path);
    }

    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{:#}", e), "config file rejected, using defaults");
    }

    let checklist = load_checklist(&args.source, config)?;

    let options = ViewerOptions {
        section: args.section,
        tick_rate: config.tick_rate(),
        mouse: config.mouse && !args.no_mouse,
    };

    tui::run(checklist, options)
}

// ═══════════════════════════════════════════════════════════════════
// 打印
// ═══════════════════════════════════════════════════════════════════

fn print_checklist(source: &SourceArgs, section: Option<&str>, config: &Config) -> Result<()> {
    let checklist = load_checklist(source, config)?;
    warn_if_fallback(&checklist);

    let sections: Vec<_> = match section {
        Some(id) => {
            let Some(index) = checklist.position_of(id) else {
                eprintln!("{}", format!("❌ Unknown section: {}", id).red());
                eprintln!("Run {} to see available sections", "c172-checklist sections".cyan());
                std::process::exit(1);
            };
            vec![&checklist.sections[index]]
        }
        None => checklist.sections.iter().collect(),
    };

    println!(
        "{}",
        format!("✈️  {} Checklist", checklist.aircraft).cyan().bold()
    );
    if !checklist.disclaimer.is_empty() {
        println!("{}", checklist.disclaimer.yellow());
    }

    for s in sections {
        println!();
        println!("{}", s.title.bold());
        for (idx, item) in s.items.iter().enumerate() {
            println!("  {:>2}. {} {}", idx + 1, "☐".white(), item);
        }
    }

    println!();
    println!(
        "{}",
        "Training/reference only. Always follow your specific aircraft POH/AFM.".dimmed()
    );

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 校验
// ═══════════════════════════════════════════════════════════════════

fn check_file(path: &Path) -> Result<()> {
    let raw = fs::read(path)
        .with_context(|| format!("Failed to read checklist file: {}", path.display()))?;

    println!(
        "{}",
        format!("🔍 Checking {}", path.display()).cyan().bold()
    );

    let checklist = match parse_checklist(&raw) {
        Ok(checklist) => checklist,
        Err(e) => {
            let (line, column) = e.location();
            println!("   {} {}", "✗".red(), e.to_string().red());
            println!("   at line {}, column {}", line, column);
            println!();
            println!(
                "{}",
                "The viewer would show the built-in example checklist for this file.".yellow()
            );
            std::process::exit(1);
        }
    };

    println!("   {} Aircraft: {}", "✓".green(), checklist.aircraft.yellow());
    println!(
        "   {} Sections: {} ({} items)",
        "✓".green(),
        checklist.sections.len(),
        checklist.item_count()
    );

    if checklist.is_empty() {
        println!("   {} {}", "!".yellow(), "Checklist has no sections".yellow());
    }

    for id in checklist.duplicate_section_ids() {
        println!(
            "   {} {}",
            "!".yellow(),
            format!("Duplicate section id: {}", id).yellow()
        );
    }

    for section in checklist.sections.iter().filter(|s| s.items.is_empty()) {
        println!(
            "   {} {}",
            "!".yellow(),
            format!("Section '{}' has no items", section.id).yellow()
        );
    }

    println!();
    println!("{}", "✅ Checklist is well-formed".green().bold());

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 分组列表
// ═══════════════════════════════════════════════════════════════════

fn list_sections(source: &SourceArgs, config: &Config) -> Result<()> {
    let checklist = load_checklist(source, config)?;
    warn_if_fallback(&checklist);

    println!(
        "{}",
        format!("📋 {} sections:", checklist.aircraft).cyan().bold()
    );
    println!();

    for (idx, section) in checklist.sections.iter().enumerate() {
        println!(
            "  {:>2}  {:<18} {} ({} items)",
            idx + 1,
            section.id.yellow(),
            section.title,
            section.items.len()
        );
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 配置
// ═══════════════════════════════════════════════════════════════════

fn show_config(config: &Config, config_error: Option<&anyhow::Error>) -> Result<()> {
    match config_path() {
        Some(path) => {
            let state = if config_error.is_some() {
                "✗ (invalid, using defaults)".red()
            } else if path.exists() {
                "✓".green()
            } else {
                "(not found, using defaults)".dimmed()
            };
            println!("📝 Config file: {} {}", path.display().to_string().cyan(), state);
        }
        None => println!("📝 Config file: {}", "unavailable".red()),
    }

    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(config).context("Failed to serialize configuration")?
    );

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

/// 读取配置；文件损坏时提示并使用默认值
fn load_config() -> (Config, Option<anyhow::Error>) {
    match Config::load() {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!(
                "{}",
                format!("⚠️  Config file could not be read, using defaults: {:#}", e).yellow()
            );
            (Config::default(), Some(e))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_occurrences(cli.verbose);

    let command = resolve_command(cli.command, cli.run).unwrap_or_else(|e| e.exit());
    if !matches!(command, Commands::Run(_)) {
        init_logging(verbosity);
    }

    let (config, config_error) = load_config();
    let config_error = config_error.as_ref();

    match command {
        Commands::Run(args) => run_viewer(args, &config, config_error, verbosity),
        Commands::Print { source, section } => {
            print_checklist(&source, section.as_deref(), &config)
        }
        Commands::Check { path } => check_file(&path),
        Commands::Sections { source } => list_sections(&source, &config),
        Commands::Config => show_config(&config, config_error),
    }
}
