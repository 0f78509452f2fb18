//! labdash - terminal dashboard for cloud-lab workspaces
//!
//! Entry point with terminal setup and cleanup.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use labdash::{logging, DashApp, DashConfig, Dashboard, Result, SelectionStore, SessionId};
use labdash_core::{config::load_config, FileSessionStore, FileWorkspaceSource, WorkspaceSource};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line arguments
struct Args {
    /// Directory to look for `.labdash.toml` in
    path: Option<PathBuf>,
    /// Session to resume
    session: Option<String>,
    /// Workspace list file
    workspaces: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut path = None;
        let mut session = None;
        let mut workspaces = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--session" | "-s" => {
                    session = args.next();
                }
                "--workspaces" | "-w" => {
                    workspaces = args.next().map(PathBuf::from);
                }
                _ if !arg.starts_with('-') => {
                    path = Some(PathBuf::from(arg));
                }
                _ => {
                    // Ignore unknown flags
                }
            }
        }

        Self {
            path,
            session,
            workspaces,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let project_dir = args.path.clone().unwrap_or_else(|| {
        std::env::current_dir()
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")))
    });

    let mut config = load_config(&project_dir).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        DashConfig::default()
    });
    if args.session.is_some() {
        config.session.id = args.session.clone();
    }
    if args.workspaces.is_some() {
        config.workspaces.file = args.workspaces.clone();
    }

    let session_dir = config.session.effective_dir();
    if let Err(e) = logging::init_tracing(&session_dir) {
        eprintln!("Warning: {}", e);
    }

    let session = config
        .session
        .id
        .clone()
        .map(SessionId::from)
        .unwrap_or_else(SessionId::generate);
    tracing::info!(session = %session, dir = %session_dir.display(), "starting dashboard");

    let store = Arc::new(FileSessionStore::new(&session_dir, session.clone())?);
    let mut dashboard = Dashboard::new(
        config.tenant_namespace.clone(),
        SelectionStore::with_store(store),
    )
    .with_candidates(config.show_candidates);

    let file_source = |file: &PathBuf| {
        let file = if file.is_relative() {
            project_dir.join(file)
        } else {
            file.clone()
        };
        Box::new(FileWorkspaceSource::new(file)) as Box<dyn WorkspaceSource>
    };
    let source = config.workspaces.file.as_ref().map(file_source);
    let candidates = config.workspaces.candidates_file.as_ref().map(file_source);
    if let Some(ref source) = source {
        if let Err(e) = dashboard.refresh(source.as_ref()) {
            eprintln!("Warning: Failed to load workspaces: {}", e);
        }
    }

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DashApp::new(dashboard, source, session.clone());
    if let Some(candidates) = candidates {
        app = app.with_candidates_source(candidates);
    }
    let result = app.run(&mut terminal);

    // Restore terminal (ALWAYS, even on error)
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    } else {
        println!("Resume this session with: labdash --session {}", session);
    }

    result
}
