//! bmc-drv - Scanner Driver
//!
//! Reads a B-Minor source file (or standard input), runs the lexer over it,
//! prints the token dump to stdout and the diagnostics to stderr.

pub mod config;
pub mod emit;
pub mod error;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bmc_lex::{LexError, Lexer, LexerConfig, Token};
use bmc_util::{Handler, SourceFile};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::{Config, OutputFormat};
pub use error::{DriverError, Result};

/// Name shown for input read from standard input.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// bmc - Lexical scanner for the B-Minor language
///
/// Prints one line per token, or a JSON array with `--format json`.
/// Diagnostics go to stderr. Exits with 0 when no errors were found,
/// 1 when the input has lexical errors, and 2 when it could not be scanned.
#[derive(Parser, Debug)]
#[command(name = "bmc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for the B-Minor language", long_about = None)]
pub struct Cli {
    /// Source file to scan, or `-` for standard input
    pub input: PathBuf,

    /// Token dump format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Longest lexeme accepted (default: from config, else 499)
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_lexeme_len: Option<usize>,

    /// Stop at the first lexical error instead of reporting and continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BMC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "BMC_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "BMC_NO_COLOR")]
    pub no_color: bool,
}

/// Effective settings for one run, after merging config and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Token dump format.
    pub format: OutputFormat,
    /// Longest lexeme accepted.
    pub max_lexeme_len: usize,
    /// Stop at the first error.
    pub fail_fast: bool,
    /// Color diagnostics.
    pub color: bool,
}

impl Settings {
    /// Merges command-line flags over file configuration.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            max_lexeme_len: cli.max_lexeme_len.unwrap_or(config.lexer.max_lexeme_len),
            fail_fast: cli.fail_fast,
            color: config.output.color && !cli.no_color,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            format: config.output.format,
            max_lexeme_len: config.lexer.max_lexeme_len,
            fail_fast: false,
            color: false,
        }
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No errors; warnings may have been reported.
    Clean,
    /// At least one lexical error was reported.
    LexicalErrors,
}

impl Status {
    /// Process exit code for this outcome.
    pub fn code(self) -> u8 {
        match self {
            Status::Clean => 0,
            Status::LexicalErrors => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Scan session for a single input.
pub struct Session {
    /// Settings for this scan.
    pub settings: Settings,
    /// Display name of the input.
    pub origin: String,
    /// Raw input with its line table.
    pub source: SourceFile,
    /// Collected diagnostics.
    pub handler: Handler,
}

impl Session {
    /// Creates a session by reading `input`, where `-` means standard input.
    pub fn new(settings: Settings, input: &Path) -> Result<Self> {
        let (origin, source) = read_input(input)?;
        debug!(origin = %origin, bytes = source.len(), "read input");
        Ok(Self::from_source(settings, origin, source))
    }

    /// Creates a session over in-memory source.
    pub fn from_source(settings: Settings, origin: impl Into<String>, source: Vec<u8>) -> Self {
        Self {
            settings,
            origin: origin.into(),
            source: SourceFile::new(source),
            handler: Handler::new(),
        }
    }

    /// Scans the whole input, collecting tokens and reporting every error.
    ///
    /// With `fail_fast` set, scanning stops after the first error; warnings
    /// never stop it.
    pub fn scan(&self) -> Vec<Token> {
        let config = LexerConfig::default().with_max_lexeme_len(self.settings.max_lexeme_len);
        let mut tokens = Vec::new();

        for item in Lexer::with_config(self.source.content(), config) {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    self.report(&error);
                    if self.settings.fail_fast && !error.is_warning() {
                        debug!("stopping at first error");
                        break;
                    }
                },
            }
        }

        info!(
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            warnings = self.handler.warning_count(),
            "scan finished"
        );
        tokens
    }

    /// Records `error` as a diagnostic with a snippet of the offending line.
    fn report(&self, error: &LexError) {
        let mut diagnostic = error.diagnostic();
        if let Some(snippet) = self.source.snippet(error.address()) {
            diagnostic = diagnostic.snippet(snippet);
        }
        diagnostic.emit(&self.handler);
    }

    /// Renders every collected diagnostic, in the order reported.
    pub fn render_diagnostics(&self) -> String {
        self.handler
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.render(&self.origin, self.settings.color))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Outcome of the scan so far.
    pub fn status(&self) -> Status {
        if self.handler.has_errors() {
            Status::LexicalErrors
        } else {
            Status::Clean
        }
    }
}

fn read_input(input: &Path) -> Result<(String, Vec<u8>)> {
    if input == Path::new("-") {
        let mut source = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut source)
            .map_err(|err| DriverError::Read {
                path: PathBuf::from(STDIN_ORIGIN),
                source: err,
            })?;
        return Ok((STDIN_ORIGIN.to_string(), source));
    }

    let source = fs::read(input).map_err(|err| DriverError::Read {
        path: input.to_path_buf(),
        source: err,
    })?;
    Ok((input.display().to_string(), source))
}

/// Initialize the logging system.
///
/// Logs go to stderr at `debug` when verbose and `warn` otherwise, unless
/// `RUST_LOG` says differently.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color && io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Runs one scan as described by `cli`.
///
/// The token dump is written to stdout and diagnostics to stderr. Lexical
/// errors are reported through the returned [`Status`], not as `Err`.
pub fn run(cli: &Cli) -> Result<Status> {
    let config = load_config(cli.config.as_deref())?;
    let mut settings = Settings::resolve(cli, &config);
    settings.color &= io::stderr().is_terminal();
    debug!(?settings, "resolved settings");

    let session = Session::new(settings, &cli.input)?;
    let tokens = session.scan();

    let mut stdout = io::stdout().lock();
    emit::write_tokens(&mut stdout, &tokens, settings.format)?;

    let diagnostics = session.render_diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics);
    }

    Ok(session.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmc_util::{DiagnosticCode, Level};
    use std::time::{Duration, Instant};

    fn session(source: &str) -> Session {
        Session::from_source(Settings::default(), "test.bm", source.as_bytes().to_vec())
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bmc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_clean_scan() {
        let session = session("x = 42;");
        assert_eq!(session.scan().len(), 4);
        assert_eq!(session.status(), Status::Clean);
        assert!(session.render_diagnostics().is_empty());
    }

    #[test]
    fn test_errors_are_reported_and_scan_continues() {
        let session = session("a @ b # c");
        let texts: Vec<_> = session.scan().into_iter().map(Token::into_text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(session.handler.error_count(), 2);
        assert_eq!(session.status(), Status::LexicalErrors);

        let diagnostics = session.handler.diagnostics();
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR));
        assert_eq!(diagnostics[0].snippets.len(), 1);
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let settings = Settings {
            fail_fast: true,
            ..Settings::default()
        };
        let session = Session::from_source(settings, "test.bm", b"a @ b # c".to_vec());
        assert_eq!(session.scan().len(), 1);
        assert_eq!(session.handler.error_count(), 1);
    }

    #[test]
    fn test_unterminated_comment_is_a_warning() {
        let session = session("x /* open");
        assert_eq!(session.scan().len(), 1);
        assert_eq!(session.status(), Status::Clean);
        let diagnostics = session.handler.diagnostics();
        assert_eq!(diagnostics[0].level, Level::Warning);
    }

    #[test]
    fn test_rendered_diagnostic() {
        let session = session("x = 1;\ny = \"open");
        session.scan();
        let rendered = session.render_diagnostics();
        assert!(rendered.starts_with("error[E0102]: unterminated string literal\n"));
        assert!(rendered.contains("  --> test.bm:2:5\n"));
        assert!(rendered.contains("y = \"open"));
        assert!(rendered.contains("= help: add a closing `\"`"));
    }

    #[test]
    fn test_caret_under_non_ascii_line() {
        let session = session("a é @");
        session.scan();
        assert_eq!(session.handler.error_count(), 3);

        let at = session.handler.diagnostics()[2].render("test.bm", false);
        assert!(at.contains("  --> test.bm:1:6\n"));
        assert!(at.contains("  1 | a é @\n    |     ^\n"));
    }

    #[test]
    fn test_many_errors_scan_in_linear_time() {
        let errors = 40_000;
        let session = session(&"@\n".repeat(errors));

        let started = Instant::now();
        let tokens = session.scan();
        let elapsed = started.elapsed();

        assert!(tokens.is_empty());
        assert_eq!(session.handler.error_count(), errors);
        let last = &session.handler.diagnostics()[errors - 1];
        assert_eq!(last.snippets[0].line_number, errors);
        assert_eq!(last.snippets[0].line, "@");
        assert!(elapsed < Duration::from_secs(5), "scan took {:?}", elapsed);
    }

    #[test]
    fn test_max_lexeme_len_setting() {
        let settings = Settings {
            max_lexeme_len: 2,
            ..Settings::default()
        };
        let session = Session::from_source(settings, "test.bm", b"abc 12".to_vec());
        let tokens = session.scan();
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            session.handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEX_LEXEME_TOO_LONG)
        );
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.lexer.max_lexeme_len = 10;

        let settings = Settings::resolve(&cli(&["in.bm"]), &config);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.max_lexeme_len, 10);
        assert!(settings.color);

        let settings = Settings::resolve(
            &cli(&["in.bm", "-f", "text", "--max-lexeme-len", "3", "--no-color"]),
            &config,
        );
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.max_lexeme_len, 3);
        assert!(!settings.color);
    }

    #[test]
    fn test_cli_rejects_zero_lexeme_len() {
        let result = Cli::try_parse_from(["bmc", "in.bm", "--max-lexeme-len", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Clean.code(), 0);
        assert_eq!(Status::LexicalErrors.code(), 1);
    }
}
