use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
    Terminal,
};

use crate::animation::FrameClock;
use crate::demo::DemoConfig;
use crate::dispatch::Dispatcher;
use crate::error::AppError;
use crate::event::{create_message_queue, DashboardMessage, FileWatcher, MessageReceiver};
use crate::input::{InputEvent, InputHandler};
use crate::render::{
    Gradient, HelpOverlay, MessageLog, MessageLogWidget, PerformanceWidget,
    RoleIndicatorsWidget, RulesTableWidget, StatusBar, WinChartWidget,
};
use crate::state::{Dashboard, PanelLayout};

/// Width of the message log column
const LOG_WIDTH: u16 = 40;

/// Most messages dispatched between two frames
const MAX_MESSAGES_PER_FRAME: usize = 256;

/// Height of the bottom row (rules table and message log)
const BOTTOM_HEIGHT: u16 = 12;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub file_path: Option<PathBuf>,
    pub demo_mode: bool,
    pub gradient: Gradient,
    pub panels: PanelLayout,
    pub demo: DemoConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            demo_mode: false,
            gradient: Gradient::default(),
            panels: PanelLayout::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// Main application state
pub struct App {
    config: AppConfig,
    dashboard: Dashboard,
    dispatcher: Dispatcher,
    message_log: MessageLog,
    frame_clock: FrameClock,
    input_handler: InputHandler,

    /// Shown in the status bar
    source: String,
    messages_seen: usize,

    show_help: bool,
    show_log: bool,

    running: bool,
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

impl App {
    pub fn new(config: AppConfig) -> Self {
        let source = match (&config.file_path, config.demo_mode) {
            (_, true) => "demo".to_string(),
            (Some(path), false) => path.display().to_string(),
            (None, false) => "none".to_string(),
        };

        Self {
            dashboard: Dashboard::new(config.panels, &config.gradient),
            dispatcher: Dispatcher::new(config.gradient),
            message_log: MessageLog::new(100), // Keep last 100 messages
            frame_clock: FrameClock::new(),
            input_handler: InputHandler::new(),
            source,
            messages_seen: 0,
            show_help: false,
            show_log: true,
            running: true,
            config,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<(), AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(&mut self, terminal: &mut Term) -> Result<(), AppError> {
        let (message_tx, mut message_rx) = create_message_queue();

        // Start file watcher or demo mode
        let _watcher = if self.config.demo_mode {
            tracing::info!(seed = ?self.config.demo.seed, "starting demo feed");
            tokio::spawn(crate::demo::generate_demo_messages(
                message_tx,
                self.config.demo.clone(),
            ));
            None
        } else if let Some(path) = self.config.file_path.clone() {
            // The watcher replays existing lines through the queue itself
            let watcher = FileWatcher::new(&path, message_tx)?;
            tracing::debug!(path = %watcher.path().display(), "file source ready");
            Some(watcher)
        } else {
            return Err(AppError::Config(
                "either a message file or demo mode is required".to_string(),
            ));
        };

        while self.running {
            self.handle_input();

            self.process_incoming(&mut message_rx);

            if self.frame_clock.should_render() {
                terminal.draw(|frame| {
                    let area = frame.area();
                    self.render(area, frame.buffer_mut());
                })?;

                self.frame_clock.frame_rendered();
            }

            // Small sleep to prevent busy loop
            tokio::time::sleep(self.frame_clock.time_until_next_frame()).await;
        }

        tracing::info!(messages = self.messages_seen, "shutting down");
        Ok(())
    }

    /// Dispatch a single message to the panels and log it
    fn process_message(&mut self, message: DashboardMessage) {
        self.message_log.record(&message);
        self.dispatcher.dispatch(&message, &mut self.dashboard);
        self.messages_seen += 1;
    }

    /// Dispatch what was queued since the last frame, up to the per-frame cap
    fn process_incoming(&mut self, rx: &mut MessageReceiver) {
        for message in rx.drain(MAX_MESSAGES_PER_FRAME) {
            self.process_message(message);
        }
    }

    /// Handle user input
    fn handle_input(&mut self) {
        let timeout = Duration::from_millis(1);

        if let Some(event) = self.input_handler.poll(timeout) {
            match event {
                InputEvent::Quit => self.running = false,
                InputEvent::ToggleHelp => {
                    self.show_help = !self.show_help;
                    self.input_handler.set_help_visible(self.show_help);
                }
                InputEvent::CloseHelp => {
                    self.show_help = false;
                    self.input_handler.set_help_visible(false);
                }
                InputEvent::ToggleMessageLog => self.show_log = !self.show_log,
                InputEvent::ClearMessageLog => self.message_log.clear(),
                // ratatui picks up the new size on the next draw
                InputEvent::Resize { .. } | InputEvent::None => {}
            }
        }
    }

    /// Render the whole screen: chart and side panels on top, rules table and
    /// message log below, status bar last. Disabled panels take no space.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let has_bottom = self.dashboard.rules.is_some() || self.show_log;
        let [main_area, bottom_area, status_area] = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(if has_bottom { BOTTOM_HEIGHT } else { 0 }),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_main(main_area, buf);
        self.render_bottom(bottom_area, buf);

        let points = self.dashboard.chart.as_ref().map_or(0, |c| c.len());
        StatusBar::new(&self.source)
            .messages(self.messages_seen)
            .points(points)
            .fps(self.frame_clock.fps())
            .render(status_area, buf);

        if self.show_help {
            HelpOverlay.render(area, buf);
        }
    }

    fn render_main(&self, area: Rect, buf: &mut Buffer) {
        let has_side = self.dashboard.roles.is_some() || self.dashboard.performance.is_some();

        let (chart_area, side_area) = match (&self.dashboard.chart, has_side) {
            (Some(_), true) => {
                let [chart, side] =
                    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .areas(area);
                (chart, side)
            }
            (Some(_), false) => (area, Rect::default()),
            (None, _) => (Rect::default(), area),
        };

        if let Some(series) = &self.dashboard.chart {
            WinChartWidget::new(series).render(chart_area, buf);
        }

        let roles_height = if self.dashboard.roles.is_some() { 7 } else { 0 };
        let [roles_area, performance_area] =
            Layout::vertical([Constraint::Length(roles_height), Constraint::Min(0)])
                .areas(side_area);

        match (&self.dashboard.roles, &self.dashboard.performance) {
            (Some(roles), Some(performance)) => {
                RoleIndicatorsWidget::new(roles).render(roles_area, buf);
                PerformanceWidget::new(performance).render(performance_area, buf);
            }
            (Some(roles), None) => RoleIndicatorsWidget::new(roles).render(side_area, buf),
            (None, Some(performance)) => PerformanceWidget::new(performance).render(side_area, buf),
            (None, None) => {}
        }
    }

    fn render_bottom(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let log_width = if self.show_log { LOG_WIDTH.min(area.width) } else { 0 };
        let [rules_area, log_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(log_width)]).areas(area);

        match &self.dashboard.rules {
            Some(rules) => RulesTableWidget::new(rules).render(rules_area, buf),
            None if self.show_log => {
                MessageLogWidget::new(&self.message_log).render(area, buf);
                return;
            }
            None => {}
        }

        if self.show_log {
            MessageLogWidget::new(&self.message_log).render(log_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{Role, RuleRecord};
    use crate::event::{PerformanceReport, RoleReport};

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn report() -> PerformanceReport {
        let row = |text: &str, status: &str| RoleReport {
            text: text.to_string(),
            status: status.into(),
        };
        PerformanceReport {
            tank: row("Tank: good", "good"),
            damage: row("Damage: average", "average"),
            support: row("Support: poor", "poor"),
            team_composition: vec!["Winston".to_string()],
        }
    }

    #[test]
    fn test_messages_reach_panels() {
        let mut app = App::new(AppConfig {
            demo_mode: true,
            ..AppConfig::default()
        });

        app.process_message(DashboardMessage::WinProbability(0.62));
        app.process_message(DashboardMessage::RulesUpdate(Some(vec![RuleRecord::new(
            "{CHAR_1=Mercy, CHAR_2=Ana}",
        )])));
        app.process_message(DashboardMessage::Performance(report()));

        assert_eq!(app.messages_seen, 3);
        assert_eq!(app.message_log.len(), 3);
        assert_eq!(app.dashboard.chart.as_ref().unwrap().latest(), Some(62.0));
        let roles = app.dashboard.roles.as_ref().unwrap();
        assert_eq!(roles.indicator(Role::Support).count_text, "2");
        assert!(app.dashboard.performance.as_ref().unwrap().row(Role::Tank).is_some());

        app.process_message(DashboardMessage::ChartReset);
        assert!(app.dashboard.chart.as_ref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backlog_is_spread_over_frames() {
        let mut app = App::new(AppConfig {
            demo_mode: true,
            ..AppConfig::default()
        });
        let (tx, mut rx) = create_message_queue();
        for _ in 0..300 {
            tx.send(DashboardMessage::WinProbability(0.5)).await.unwrap();
        }

        app.process_incoming(&mut rx);
        assert_eq!(app.messages_seen, MAX_MESSAGES_PER_FRAME);
        app.process_incoming(&mut rx);
        assert_eq!(app.messages_seen, 300);
    }

    #[test]
    fn test_disabled_panels_are_skipped() {
        let mut app = App::new(AppConfig {
            demo_mode: true,
            panels: PanelLayout {
                chart: false,
                rules: false,
                ..PanelLayout::default()
            },
            ..AppConfig::default()
        });

        app.process_message(DashboardMessage::WinProbability(0.5));
        app.process_message(DashboardMessage::RulesTable {
            table_html: "<p>No rules found for these statuses</p>".to_string(),
            rules: Some(vec![RuleRecord::new("{CHAR_1=Reinhardt}")]),
        });

        assert!(app.dashboard.chart.is_none());
        let roles = app.dashboard.roles.as_ref().unwrap();
        assert_eq!(roles.indicator(Role::Tank).count_text, "2");
    }

    #[test]
    fn test_render_shows_panels_and_status() {
        let mut app = App::new(AppConfig {
            demo_mode: true,
            ..AppConfig::default()
        });
        app.process_message(DashboardMessage::Performance(report()));

        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Role Balance"));
        assert!(text.contains("Tank: good"));
        assert!(text.contains("Team Rules"));
        assert!(text.contains("Source: demo"));
    }

    #[test]
    fn test_render_with_everything_disabled() {
        let app = App::new(AppConfig {
            demo_mode: true,
            panels: PanelLayout {
                chart: false,
                roles: false,
                performance: false,
                rules: false,
            },
            ..AppConfig::default()
        });

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        assert!(screen_text(&buf).contains("TEAMBOARD"));
    }
}
