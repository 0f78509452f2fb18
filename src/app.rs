//! DashApp - main application struct driving the core Dashboard
//!
//! Bridges terminal events to dashboard selection changes and renders the
//! resulting pane.

use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use labdash_core::{Dashboard, SessionId, WorkspaceSource};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Duration;

use crate::error::Result;
use crate::events::TuiEvent;
use crate::panels::{ContentPanel, ListAction, Panel, WorkspaceListPanel};
use crate::state::{AppState, MessageLevel};
use crate::ui::{get_layout, AppLayout, Area, Theme, ThemeVariant};

/// Main TUI application
pub struct DashApp {
    /// Selection state and workspace snapshot
    dashboard: Dashboard,

    /// Where reloads come from; `None` keeps the initial list
    source: Option<Box<dyn WorkspaceSource>>,

    /// Consumer of the "Load candidates" toggle
    candidates_source: Option<Box<dyn WorkspaceSource>>,

    /// TUI-specific state
    state: AppState,

    theme_variant: ThemeVariant,
    theme: Theme,

    /// Areas from the last render, for mouse hit testing
    layout: AppLayout,

    list: WorkspaceListPanel,
    content: ContentPanel,
}

impl DashApp {
    pub fn new(
        dashboard: Dashboard,
        source: Option<Box<dyn WorkspaceSource>>,
        session: SessionId,
    ) -> Self {
        let theme_variant = ThemeVariant::default();
        let mut app = Self {
            dashboard,
            source,
            candidates_source: None,
            state: AppState::new(session),
            theme: theme_variant.theme(),
            theme_variant,
            layout: AppLayout::default(),
            list: WorkspaceListPanel::new(),
            content: ContentPanel::new(),
        };
        app.sync_panels();
        app
    }

    /// Source read when the candidates toggle is switched on
    pub fn with_candidates_source(mut self, source: Box<dyn WorkspaceSource>) -> Self {
        self.candidates_source = Some(source);
        self
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                if let Some(tui_event) = TuiEvent::from_crossterm(event::read()?) {
                    self.handle_event(tui_event)?;
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one terminal event, then apply what the panels asked for
    pub fn handle_event(&mut self, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key) => {
                if self.handle_key(key)? {
                    self.state.should_quit = true;
                    return Ok(());
                }
            }
            TuiEvent::Mouse(mouse) => {
                if self.layout.area_at(mouse.column, mouse.row) == Some(Area::List) {
                    self.list.handle_input(&TuiEvent::Mouse(mouse), &mut self.state)?;
                }
            }
            TuiEvent::Resize(cols, rows) => {
                self.list.on_resize(cols, rows);
                self.content.on_resize(cols, rows);
            }
        }

        self.process_panel_actions();
        self.sync_panels();
        Ok(())
    }

    /// Handle a key event, returns true when quit was requested
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => self.dashboard.show_welcome(),
            KeyCode::Char('a') => self.dashboard.request_add_workspace(),
            KeyCode::Char('c') => self.toggle_candidates(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('t') => {
                self.theme_variant = self.theme_variant.toggle();
                self.theme = self.theme_variant.theme();
            }
            _ => {
                self.list.handle_input(&TuiEvent::Key(key), &mut self.state)?;
            }
        }

        Ok(false)
    }

    /// Reload the workspace list from the configured source
    pub fn reload(&mut self) {
        let Some(source) = self.source.as_deref() else {
            self.state.info("No workspace source configured");
            return;
        };

        match self.dashboard.refresh(source) {
            Ok(count) => {
                tracing::info!(count, "workspace list reloaded");
                self.state.info(format!("Loaded {} workspaces", count));
            }
            Err(e) => {
                tracing::warn!(error = %e, "workspace reload failed");
                self.state.error(format!("Reload failed: {}", e));
            }
        }
    }

    /// Flip the candidates toggle and load or drop the candidate list
    fn toggle_candidates(&mut self) {
        if !self.dashboard.candidates().show {
            return;
        }
        if !self.dashboard.toggle_candidates() {
            self.state.info("Candidates hidden");
            return;
        }

        let Some(source) = self.candidates_source.as_deref() else {
            self.state.warning("No candidate source configured");
            return;
        };

        match self.dashboard.load_candidates(source) {
            Ok(count) => {
                tracing::info!(count, "candidates loaded");
                self.state.info(format!("Loaded {} candidates", count));
            }
            Err(e) => {
                tracing::warn!(error = %e, "candidate load failed");
                self.state.error(format!("Loading candidates failed: {}", e));
            }
        }
    }

    /// Apply pending actions from panels
    fn process_panel_actions(&mut self) {
        if let Some(action) = self.list.take_pending_action() {
            match action {
                ListAction::Select(selection) => self.dashboard.select(selection),
                ListAction::ToggleCandidates => self.toggle_candidates(),
            }
        }
    }

    fn sync_panels(&mut self) {
        self.list.update_from_dashboard(&self.dashboard);
        self.content.update_from_dashboard(&self.dashboard);
    }

    /// Render all panels
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout = get_layout(frame.area());

        self.list.render(frame, self.layout.list, &self.theme);
        self.content.render(frame, self.layout.content, &self.theme);
        self.render_status_bar(frame, self.layout.status);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let session: String = self.state.session.as_str().chars().take(8).collect();
        let session = format!(" session {} ", session);
        let pane = format!(" {} ", self.content.view().label());

        // Persistence failures outrank transient messages
        let (message, color) = if let Some(err) = self.dashboard.persistence_error() {
            (format!("selection not saved: {}", err), theme.status_error)
        } else if let Some(msg) = &self.state.status_message {
            let color = match msg.level {
                MessageLevel::Info => theme.status_info,
                MessageLevel::Warning => theme.status_warning,
                MessageLevel::Error => theme.status_error,
            };
            (msg.text.clone(), color)
        } else {
            (String::new(), theme.status_info)
        };

        let spans = vec![
            Span::styled(
                session,
                Style::default()
                    .bg(theme.statusbar_session_bg)
                    .fg(theme.statusbar_session_fg),
            ),
            Span::raw(" "),
            Span::styled(
                pane,
                Style::default()
                    .bg(theme.statusbar_pane_bg)
                    .fg(theme.statusbar_pane_fg),
            ),
            Span::raw(" "),
            Span::styled(message, Style::default().fg(color)),
        ];

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
