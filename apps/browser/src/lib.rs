//! # Thali Browser Library
//!
//! Terminal front end for browsing one restaurant's menu.
//!
//! ## Module Organization
//! ```text
//! thali_browser_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── menu.rs     ◄─── Session phase (menu, selection, cart)
//! │   └── config.rs   ◄─── Header text, currency formatting
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Categories, selection, search
//! │   └── cart.rs     ◄─── Cart manipulation
//! ├── view.rs         ◄─── Text rendering
//! ├── repl.rs         ◄─── Command loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod repl;
pub mod state;
pub mod view;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::LOAD_FAILED_MESSAGE;
use repl::Repl;
use state::{ConfigState, MenuState};
use thali_loader::MenuLoader;

/// Runs the browser.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,thali=debug, overridable with RUST_LOG              │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults → thali.toml → THALI_* env → flags                       │
/// │                                                                         │
/// │  3. Fetch Menu ───────────────────────────────────────────────────────► │
/// │     • "Loading..." on screen, one GET, no retry                         │
/// │     • Ready: render the screen                                          │
/// │     • Failed: print the generic error and exit non-zero                 │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • stdin until quit or EOF                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_tracing();

    info!("Starting Thali menu browser");

    let config = cli.resolve_config().context("Failed to load configuration")?;
    let config_state = ConfigState::from(&config.restaurant);
    let menu_state = MenuState::new();

    let stdout = io::stdout();
    {
        let mut out = stdout.lock();
        write!(out, "{}\n{}\n", view::render_header(&config_state), view::LOADING_MESSAGE)?;
        out.flush()?;
    }

    let loader = MenuLoader::new(&config.source).context("Failed to set up menu loader")?;
    if !load_menu(&loader, &menu_state).await {
        writeln!(stdout.lock(), "{}", LOAD_FAILED_MESSAGE)?;
        return Ok(ExitCode::FAILURE);
    }

    let repl = Repl::new(&menu_state, &config_state);
    {
        let mut out = stdout.lock();
        write!(out, "\n{}\n{}", repl.render_screen()?, repl::HELP_TEXT)?;
        out.flush()?;
    }

    let stdin = io::stdin();
    repl.run(stdin.lock(), stdout.lock())?;

    info!("Browser closed");
    Ok(ExitCode::SUCCESS)
}

/// Performs the single fetch and installs its outcome. Returns true when
/// the menu is browsable; the loader has already logged any failure.
pub async fn load_menu(loader: &MenuLoader, menu_state: &MenuState) -> bool {
    menu_state.install(loader.load().await)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=thali=trace` - Show trace for thali crates only
/// - Default: `info,thali=debug,reqwest=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,thali=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use thali_loader::SourceSettings;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> SourceSettings {
        SourceSettings {
            endpoint: format!("{}/menu", server.uri()),
            ..SourceSettings::default()
        }
    }

    #[tokio::test]
    async fn test_load_menu_installs_ready_session() {
        let server = MockServer::start().await;
        let inner = r#"{"CategoryList":[{"CategryId":5,"CategryName":"Thali","ItemListWidget":[{"ItemId":1,"ItemName":"Gujarati Thali","Price":250}]}]}"#;
        let body = serde_json::json!({ "data": inner }).to_string();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let menu_state = MenuState::new();
        assert!(load_menu(&loader, &menu_state).await);

        let items = commands::menu::get_visible_items(&menu_state).unwrap();
        assert_eq!(items.heading, "Thali");
        assert_eq!(items.items[0].name, "Gujarati Thali");
    }

    #[tokio::test]
    async fn test_load_menu_failure_never_ready() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let menu_state = MenuState::new();
        assert!(!load_menu(&loader, &menu_state).await);
        assert!(!menu_state.with_phase(|p| p.is_ready()));
    }
}
