use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    EmailPrompt, FileIdentityStore, GatewayConfig, NoPrompt, PassportService, resolve_email,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingApi,
    InvalidApi { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingApi => write!(f, "no backend configured (--api or PASSPORT_API_BASE)"),
            ArgsError::InvalidApi { raw } => write!(f, "invalid --api value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <url>] [--email <addr>] [--identity-file <path>] [--no-prompt]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!(
        "  --identity-file {}",
        FileIdentityStore::default_path().display()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PASSPORT_API_BASE, PASSPORT_EMAIL, PASSPORT_IDENTITY_FILE, RUST_LOG");
}

struct Args {
    gateway: GatewayConfig,
    email: Option<String>,
    identity_file: PathBuf,
    prompt: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = None;
        let mut email = std::env::var("PASSPORT_EMAIL").ok();
        let mut identity_file = std::env::var("PASSPORT_IDENTITY_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(FileIdentityStore::default_path, PathBuf::from);
        let mut prompt = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => api = Some(require_value(args, "--api")?),
                "--email" => email = Some(require_value(args, "--email")?),
                "--identity-file" => {
                    identity_file = require_value(args, "--identity-file")?.into();
                }
                "--no-prompt" => prompt = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let gateway = match api {
            Some(raw) => {
                GatewayConfig::new(&raw).map_err(|_| ArgsError::InvalidApi { raw: raw.clone() })?
            }
            None => GatewayConfig::from_env().ok_or(ArgsError::MissingApi)?,
        };

        Ok(Self {
            gateway,
            email,
            identity_file,
            prompt,
        })
    }
}

/// Asks on the terminal before the window opens.
struct StdinPrompt;

impl EmailPrompt for StdinPrompt {
    fn ask(&self) -> Option<String> {
        eprint!("Enter your email for the passport: ");
        io::stderr().flush().ok()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        Some(line)
    }
}

struct DesktopApp {
    email: Option<String>,
    passport: Arc<PassportService>,
}

impl UiApp for DesktopApp {
    fn email(&self) -> Option<String> {
        self.email.clone()
    }

    fn passport(&self) -> Arc<PassportService> {
        Arc::clone(&self.passport)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let store = FileIdentityStore::new(&parsed.identity_file);
    let email = if parsed.prompt {
        resolve_email(parsed.email.as_deref(), &store, &StdinPrompt)
    } else {
        resolve_email(parsed.email.as_deref(), &store, &NoPrompt)
    };
    match email.as_deref() {
        Some(_) => info!(identity_file = %parsed.identity_file.display(), "identity resolved"),
        // The window still opens so the missing-identity message is shown there.
        None => warn!("no email resolved"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        email,
        passport: Arc::new(PassportService::http(parsed.gateway)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Passport")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
