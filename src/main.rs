use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use stackbadge::commands;
use stackbadge::config;
use stackbadge::options::{Align, FontWeight};
use stackbadge::themes::{BuiltinThemes, ThemeSource};
use stackbadge::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "stackbadge")]
#[command(
    about = "Tech stack badge link generator",
    long_about = "Tech stack badge link generator\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
}

impl AlignArg {
    fn to_align(self) -> Align {
        match self {
            AlignArg::Left => Align::Left,
            AlignArg::Center => Align::Center,
            AlignArg::Right => Align::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FontWeightArg {
    Thin,
    Normal,
    Semibold,
    Bold,
}

impl FontWeightArg {
    fn to_font_weight(self) -> FontWeight {
        match self {
            FontWeightArg::Thin => FontWeight::Thin,
            FontWeightArg::Normal => FontWeight::Normal,
            FontWeightArg::Semibold => FontWeight::Semibold,
            FontWeightArg::Bold => FontWeight::Bold,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a shareable link without entering interactive mode
    Generate {
        /// Card title
        #[arg(short, long)]
        title: Option<String>,

        /// Theme identifier (see `themes`)
        #[arg(long)]
        theme: Option<String>,

        /// Badge alignment within a line
        #[arg(long)]
        align: Option<AlignArg>,

        /// Disable the card border
        #[arg(long)]
        no_border: bool,

        /// Border radius, 0 to 50
        #[arg(long)]
        border_radius: Option<String>,

        /// Title/badge font weight
        #[arg(long)]
        font_weight: Option<FontWeightArg>,

        /// Font size, 15 to 30
        #[arg(long)]
        font_size: Option<String>,

        /// Comma-separated badges for one line; repeat for more lines (max 5)
        #[arg(short, long)]
        line: Vec<String>,
    },
    /// List the available themes
    Themes,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[generator]");
    println!("base_url: {}", cfg.generator.base_url);
    println!();
    println!("[defaults]");
    println!("title: {}", cfg.defaults.title);
    println!("line_count: {}", cfg.defaults.line_count);
    println!("theme: {}", cfg.defaults.theme);
    println!("align: {}", cfg.defaults.align);
    println!("show_border: {}", cfg.defaults.show_border);
    println!("border_radius: {}", cfg.defaults.border_radius);
    println!("font_weight: {}", cfg.defaults.font_weight);
    println!("font_size: {}", cfg.defaults.font_size);
    println!();
    println!("[display]");
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run interactive mode. The last generated link is echoed to stdout after
/// the terminal is restored, so it can be piped or copied.
async fn run_tui_mode(config: config::Config) -> anyhow::Result<()> {
    let themes = BuiltinThemes.themes().await?;

    let mut last_link: Option<String> = None;
    tui::run(config, themes, |link| last_link = Some(link)).await?;

    if let Some(link) = last_link {
        println!("{}", link);
    }
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Generate {
            title,
            theme,
            align,
            no_border,
            border_radius,
            font_weight,
            font_size,
            line,
        } => {
            let params = commands::generate::Params {
                title,
                theme,
                align: align.map(AlignArg::to_align),
                no_border,
                border_radius,
                font_weight: font_weight.map(FontWeightArg::to_font_weight),
                font_size,
                lines: line,
            };
            commands::generate::run(config, params)
        }
        Commands::Themes => commands::themes::run(&BuiltinThemes).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = run_tui_mode(config).await {
            eprintln!("Error running TUI: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.unwrap();

    // Handle Config command separately (only displays resolved state)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
