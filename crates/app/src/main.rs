use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ispace_core::model::{Level, LevelAccess, Topic, TopicError};
use services::{AppServices, AuthService, ProgressGate};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingFlag { command: &'static str, flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTopic(TopicError),
    InvalidLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingFlag { command, flag } => write!(f, "{command} requires {flag}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTopic(err) => write!(f, "invalid --topic value: {err}"),
            ArgsError::InvalidLevel { raw } => {
                write!(f, "invalid --level value: {raw} (expected easy, medium or hard)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn progress_gate(&self) -> Arc<ProgressGate> {
        self.services.progress_gate()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- progress [--db <sqlite_url>] [--topic <topic>]");
    eprintln!("  cargo run -p app -- complete [--db <sqlite_url>] --topic <topic> --level <easy|medium|hard>");
    eprintln!("  cargo run -p app -- login    [--db <sqlite_url>] --user <name>");
    eprintln!("  cargo run -p app -- logout   [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:ispace.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ISPACE_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Complete,
    Login,
    Logout,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "complete" => Some(Self::Complete),
            "login" => Some(Self::Login),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Progress => "progress",
            Self::Complete => "complete",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    db_url: String,
    topic: Option<Topic>,
    level: Option<Level>,
    user: Option<String>,
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut parsed = Args {
            db_url: normalize_sqlite_url(
                env_db_url.unwrap_or_else(|| "sqlite:ispace.sqlite3".into()),
            ),
            ..Args::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = normalize_sqlite_url(value);
                }
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    parsed.topic = Some(Topic::new(value).map_err(ArgsError::InvalidTopic)?);
                }
                "--level" => {
                    let value = require_value(args, "--level")?;
                    let level = value
                        .parse::<Level>()
                        .map_err(|_| ArgsError::InvalidLevel { raw: value.clone() })?;
                    parsed.level = Some(level);
                }
                "--user" => {
                    parsed.user = Some(require_value(args, "--user")?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }

    fn require_topic(&self, cmd: Command) -> Result<&Topic, ArgsError> {
        self.topic.as_ref().ok_or(ArgsError::MissingFlag {
            command: cmd.name(),
            flag: "--topic",
        })
    }

    fn require_level(&self, cmd: Command) -> Result<Level, ArgsError> {
        self.level.ok_or(ArgsError::MissingFlag {
            command: cmd.name(),
            flag: "--level",
        })
    }

    fn require_user(&self, cmd: Command) -> Result<&str, ArgsError> {
        self.user.as_deref().ok_or(ArgsError::MissingFlag {
            command: cmd.name(),
            flag: "--user",
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn access_label(access: LevelAccess) -> &'static str {
    match access {
        LevelAccess::Locked => "locked",
        LevelAccess::Unlocked => "open",
        LevelAccess::Completed => "done",
    }
}

async fn print_progress(gate: &ProgressGate, topic: Option<&Topic>) {
    let topics = topic.map_or_else(Topic::catalog, |topic| vec![topic.clone()]);
    for item in gate.overview(&topics).await {
        let levels: Vec<String> = Level::ALL
            .iter()
            .map(|level| format!("{level}={}", access_label(item.unlock.access(*level))))
            .collect();
        println!("{:<24} {}", item.topic.as_str(), levels.join(" "));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h" | "help") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match Args::parse(&mut iter, std::env::var("ISPACE_DB_URL").ok()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url).await?;
    info!(db = %parsed.db_url, command = cmd.name(), "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("iSpace Math")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            print_progress(&services.progress_gate(), parsed.topic.as_ref()).await;
            Ok(())
        }
        Command::Complete => {
            let topic = parsed.require_topic(cmd)?;
            let level = parsed.require_level(cmd)?;
            let gate = services.progress_gate();
            gate.complete_level(topic, level).await?;
            print_progress(&gate, Some(topic)).await;
            Ok(())
        }
        Command::Login => {
            let user = parsed.require_user(cmd)?;
            services.auth().login(user).await?;
            println!("logged in as {}", user.trim());
            Ok(())
        }
        Command::Logout => {
            let target = services.auth().logout().await?;
            println!("logged out; redirect to {target}");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, None)
    }

    #[test]
    fn parses_complete_flags() {
        let Ok(Parsed::Run(args)) = parse(&["--topic", "algebra", "--level", "Medium"]) else {
            panic!("expected parsed args");
        };
        assert_eq!(args.topic.unwrap().as_str(), "algebra");
        assert_eq!(args.level, Some(Level::Medium));
        assert!(args.db_url.starts_with("sqlite://"));
        assert!(args.db_url.ends_with("ispace.sqlite3"));
    }

    #[test]
    fn rejects_unknown_level_and_flags() {
        assert!(matches!(
            parse(&["--level", "expert"]),
            Err(ArgsError::InvalidLevel { .. })
        ));
        assert!(matches!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&["--topic"]),
            Err(ArgsError::MissingValue { flag: "--topic" })
        ));
    }

    #[test]
    fn missing_required_flag_names_command() {
        let Ok(Parsed::Run(args)) = parse(&[]) else {
            panic!("expected parsed args");
        };
        let err = args.require_topic(Command::Complete).unwrap_err();
        assert_eq!(err.to_string(), "complete requires --topic");
    }

    #[test]
    fn memory_and_absolute_urls_pass_through() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/ispace.db".into()),
            "sqlite:///tmp/ispace.db"
        );
    }

    #[test]
    fn help_flag_short_circuits() {
        assert!(matches!(parse(&["--help"]), Ok(Parsed::Help)));
    }
}
