//! QC-Console: Quantum-Chain Operator Console
//!
//! A TUI console over the backend session with a permission-filtered menu.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;
use tracing::{error, info};

use qc_console::{logging, ui, App, ConsoleConfig, ConsoleSession};
use qc_session::Credentials;

/// QC-Console: Quantum-Chain Operator Console
#[derive(Parser, Debug)]
#[command(name = "qc-console")]
#[command(about = "TUI console with a permission-filtered navigation menu")]
struct Args {
    /// Backend base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    endpoint: String,

    /// Menu configuration (JSON); the built-in console menu when omitted
    #[arg(short, long)]
    menu: Option<PathBuf>,

    /// Session state file; kept in memory when omitted
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Session layer configuration (JSON)
    #[arg(long)]
    session_config: Option<PathBuf>,

    /// Route opened at startup
    #[arg(long, default_value = shared_types::INDEX_ROUTE)]
    route: String,

    /// Run offline with preset permissions
    #[arg(long)]
    demo: bool,

    /// Permission refresh interval in seconds
    #[arg(short, long, default_value = "30")]
    refresh: u64,

    /// Log file
    #[arg(long, default_value = "qc-console.log")]
    log_file: PathBuf,

    /// Sign in as this user at startup
    #[arg(short, long)]
    username: Option<String>,

    /// Password for --username
    #[arg(long, env = "QC_CONSOLE_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ConsoleConfig> {
        let login = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            (Some(_), None) => anyhow::bail!("--username requires a password"),
            _ => None,
        };

        Ok(ConsoleConfig {
            endpoint: self.endpoint,
            menu_path: self.menu,
            state_path: self.state,
            session_config_path: self.session_config,
            initial_route: self.route,
            demo: self.demo,
            refresh: Duration::from_secs(self.refresh),
            log_file: self.log_file,
            login,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config()?;
    config.validate()?;

    logging::init(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;
    info!(version = qc_console::VERSION, demo = config.demo, "Starting qc-console");

    let menu = config.load_menu()?;
    let session_config = config.load_session_config()?;
    let session = Arc::new(ConsoleSession::connect(&config, session_config)?);

    if let Some(credentials) = &config.login {
        session
            .login(credentials)
            .await
            .context("sign-in failed")?;
    }

    let app = Arc::new(Mutex::new(App::new(
        menu,
        session.permissions(),
        &config.initial_route,
    )));
    session.refresh(&app).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Background permission refresh
    let refresh_app = app.clone();
    let refresh_session = session.clone();
    let refresh_interval = config.refresh;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await;
        loop {
            interval.tick().await;
            refresh_session.refresh(&refresh_app).await;
        }
    });

    let result = run_app(&mut terminal, app, session).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "Console stopped");
    }
    info!("qc-console exited");
    result.map_err(Into::into)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    session: Arc<ConsoleSession>,
) -> io::Result<()> {
    loop {
        {
            let mut app_guard = app.lock().await;
            session.pump(&mut app_guard);
            terminal.draw(|frame| ui::render(frame, &app_guard))?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Char(c) => app_guard.handle_key(c),
                        KeyCode::Up => app_guard.select_prev(),
                        KeyCode::Down => app_guard.select_next(),
                        KeyCode::Enter => app_guard.activate_selected(),
                        KeyCode::Esc => app_guard.handle_key('q'),
                        _ => {}
                    }

                    if app_guard.take_logout_request() {
                        session.logout(&mut app_guard);
                    }
                    if app_guard.take_refresh_request() {
                        let app = app.clone();
                        let session = session.clone();
                        tokio::spawn(async move { session.refresh(&app).await });
                    }
                }
            }
        }

        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}
