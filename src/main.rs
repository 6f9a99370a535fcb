// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use slovnik::app_config::{self, Config};
use slovnik::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a word, using the local cache when it is fresh
    Translate(TranslateArgs),

    /// List stored words starting with a prefix
    Suggest(SuggestArgs),

    /// Show local database statistics
    Stats,

    /// Generate shell completions for slovnik
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Word or phrase to translate
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    word: Vec<String>,

    /// Source language code (e.g., 'cz', 'de')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Answer from the local cache only
    #[arg(long)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct SuggestArgs {
    /// Beginning of the word
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// Source language code (e.g., 'cz', 'de')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Maximum number of suggestions
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,
}

/// slovnik - cached online dictionary lookups
///
/// Looks up translations on the online dictionary and keeps every result in
/// a local database, so repeated lookups work fast and offline.
#[derive(Parser, Debug)]
#[command(name = "slovnik")]
#[command(version)]
#[command(about = "Cached online dictionary lookups")]
#[command(long_about = "slovnik translates words with an online dictionary and caches the results locally.

EXAMPLES:
    slovnik translate pes                      # Translate using the configured languages
    slovnik translate -s cz -t de pes          # Translate from Czech to German
    slovnik translate --offline pes            # Use the local cache only
    slovnik suggest pe -n 5                    # Stored words starting with 'pe'
    slovnik stats                              # Database statistics
    slovnik completions bash > slovnik.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Database file to use instead of the configured one
    #[arg(long, global = true, env = "SLOVNIK_DATABASE")]
    database: Option<PathBuf>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "slovnik", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => {
            let mut config = load_config(&cli)?;
            if let Some(source_lang) = &args.source_language {
                config.source_language = source_lang.clone();
            }
            if let Some(target_lang) = &args.target_language {
                config.target_language = target_lang.clone();
            }
            if args.offline {
                config.offline_mode = true;
            }
            config.validate().context("Configuration validation failed")?;

            run_translate(config, &args.word.join(" ")).await
        }
        Commands::Suggest(args) => {
            let mut config = load_config(&cli)?;
            if let Some(source_lang) = &args.source_language {
                config.source_language = source_lang.clone();
            }
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            for suggestion in controller.suggest(&args.prefix, None, args.limit).await {
                println!("{}", suggestion);
            }
            controller.shutdown().await;
            Ok(())
        }
        Commands::Stats => {
            let config = load_config(&cli)?;
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            println!("{}", controller.database_stats()?);
            controller.shutdown().await;
            Ok(())
        }
    }
}

/// Load the configuration file and apply the global overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(database) = &cli.database {
        config.cache.database_path = Some(database.to_string_lossy().into_owned());
    }

    match &cli.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    debug!("Loaded configuration from {}", cli.config_path);
    Ok(config)
}

async fn run_translate(config: Config, word: &str) -> Result<()> {
    let controller = Controller::with_config(config)?;

    let outcome = controller.translate(word, None, None).await;
    // Pending writes must land before the process exits
    controller.shutdown().await;

    let result = outcome?;
    println!("{}", Controller::format_result(&result));
    Ok(())
}
