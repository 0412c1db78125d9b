use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use codesample_config::Config;
use codesample_engine::{Editor, NoopHighlighter, Settings, io};
use std::fs;
use std::path::{Path, PathBuf};

/// Decorate and canonicalize code samples in markup documents
#[derive(Parser, Debug)]
#[command(name = "codesample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/codesample/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Print a document as it looks inside the editor
    Decorate {
        file: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a document in its saved form
    Canonicalize {
        file: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that documents survive save/reload cycles unchanged
    ///
    /// Exits non-zero when any document drifts.
    Check {
        /// Directory to scan; defaults to content_root from the config
        root: Option<PathBuf>,
        /// Rewrite documents that are not already in saved form
        #[arg(long)]
        write: bool,
    },

    /// List the languages offered for new samples
    Languages,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Decorate { file, output } => {
            let content = read_document(&file)?;
            emit(&decorated(&config.settings(), &content), output.as_deref())
        }
        Commands::Canonicalize { file, output } => {
            let content = read_document(&file)?;
            emit(&canonical(&config.settings(), &content), output.as_deref())
        }
        Commands::Check { root, write } => {
            let Some(root) = root.or_else(|| config.content_root.clone()) else {
                bail!(
                    "No directory given and no content_root in {}",
                    Config::config_path().display()
                );
            };
            let report = check(&config, &root, write)?;
            log::info!(
                "checked {} document(s): {} rewritten, {} drifting",
                report.checked,
                report.rewritten,
                report.drifting.len()
            );
            if !report.drifting.is_empty() {
                for path in &report.drifting {
                    eprintln!("drift: {}", path.display());
                }
                bail!("{} document(s) change on every save", report.drifting.len());
            }
            Ok(())
        }
        Commands::Languages => {
            for language in config.effective_languages() {
                println!("{}\t{}", language.value, language.text);
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn editor_with(settings: &Settings, content: &str) -> Editor {
    let mut editor = Editor::new(settings.clone(), NoopHighlighter);
    editor.set_content(content);
    editor
}

fn decorated(settings: &Settings, content: &str) -> String {
    editor_with(settings, content).document().to_markup()
}

fn canonical(settings: &Settings, content: &str) -> String {
    editor_with(settings, content).get_content()
}

#[derive(Debug, Default)]
struct CheckReport {
    checked: usize,
    rewritten: usize,
    drifting: Vec<PathBuf>,
}

fn check(config: &Config, root: &Path, write: bool) -> Result<CheckReport> {
    io::validate_content_root(root)
        .with_context(|| format!("Content directory '{}' is invalid", root.display()))?;

    let settings = config.settings();
    let mut report = CheckReport::default();

    let files = if config.include.is_empty() {
        io::scan_markup_files(root)?
    } else {
        config.matching_files(root)?
    };

    for path in files {
        let relative = io::relative_to(root, &path)?;
        let content = io::read_file(&relative, root)?;
        report.checked += 1;

        let once = canonical(&settings, &content);
        let twice = canonical(&settings, &once);
        if once != twice {
            log::warn!("{relative} is not stable across save/reload");
            report.drifting.push(path);
            continue;
        }

        if write && once != content {
            io::write_file(&relative, root, &once)?;
            log::info!("rewrote {relative}");
            report.rewritten += 1;
        }
    }

    Ok(report)
}
