use anyhow::Result;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::api::ApiService;
use crate::config::AppConfig;
use crate::internal::messages;
use crate::internal::models::{ClearSummary, HealthStatus, Shortened, UrlListing, UrlRecord, UrlStats};
use crate::internal::notification::Notification;
use crate::utils;

use ratatui::widgets::ListState;
use strum_macros::Display;

/// Application view modes.
#[derive(Debug, PartialEq, Clone, Copy, Display)]
pub enum ViewMode {
    #[strum(to_string = "Encurtar")]
    Shorten,
    #[strum(to_string = "URLs")]
    Listing,
    #[strum(to_string = "Estatísticas")]
    Stats,
}

/// Input modes for the UI.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Actions/messages sent through the app action channel.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    NavigateUp,
    NavigateDown,
    Submit,
    Shortened(Shortened),
    CopyShortUrl,
    OpenShortUrl,
    LoadListing,
    ListingLoaded(UrlListing),
    ShowStats,
    StatsLoaded(UrlStats),
    CheckHealth,
    HealthChecked(HealthStatus),
    ClearAll,
    Cleared(ClearSummary),
    Error(String),
}

/// Main application state.
///
/// The form follows Idle -> Submitting -> (Success | Failed) -> Idle:
/// `loading` is the Submitting flag, `notification` carries the outcome
/// message, and every settle path returns to Idle ready for resubmission.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub url_input: String,
    pub short_url: Option<String>,
    pub loading: bool,
    pub records: Vec<UrlRecord>,
    pub total_urls: u64,
    pub list_state: ListState,
    pub list_loading: bool,
    pub stats: Option<UrlStats>,
    pub stats_loading: bool,
    pub notification: Option<Notification>,
    pub api_service: Arc<ApiService>,
    pub config: AppConfig,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let api_service = Arc::new(ApiService::new(&config.api));

        Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            view_mode: ViewMode::Shorten,
            input_mode: InputMode::Editing,
            url_input: String::new(),
            short_url: None,
            loading: false,
            records: Vec::new(),
            total_urls: 0,
            list_state: ListState::default(),
            list_loading: false,
            stats: None,
            stats_loading: false,
            notification: None,
            api_service,
            config,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        let mut event_interval = tokio::time::interval(std::time::Duration::from_millis(16));

        loop {
            tui.draw(|f| crate::internal::ui::view::render(self, f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    // Check for terminal events
                    if event::poll(std::time::Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key_event(key);
                    }

                    if self.notification.as_ref().is_some_and(|n| n.should_dismiss()) {
                        self.notification = None;
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if !self.running {
                break;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Editing => self.handle_edit_input(key),
            InputMode::Normal => self.handle_normal_input(key),
        }
    }

    fn handle_edit_input(&mut self, key: KeyEvent) {
        // The form is disabled while a request is in flight.
        if self.loading {
            if key.code == KeyCode::Esc {
                self.input_mode = InputMode::Normal;
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                // Typing clears any previously shown error/success message.
                self.notification = None;
                self.url_input.push(c);
            }
            KeyCode::Backspace => {
                self.notification = None;
                self.url_input.pop();
            }
            KeyCode::Enter => {
                let _ = self.action_tx.send(Action::Submit);
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => match self.view_mode {
                ViewMode::Shorten => {
                    let _ = self.action_tx.send(Action::Quit);
                }
                ViewMode::Listing | ViewMode::Stats => {
                    let _ = self.action_tx.send(Action::Back);
                }
            },
            KeyCode::Char('i') | KeyCode::Char('e') => {
                if self.view_mode == ViewMode::Shorten {
                    self.input_mode = InputMode::Editing;
                }
            }
            KeyCode::Enter => match self.view_mode {
                ViewMode::Shorten => {
                    let _ = self.action_tx.send(Action::Submit);
                }
                ViewMode::Listing => {
                    let _ = self.action_tx.send(Action::ShowStats);
                }
                ViewMode::Stats => {}
            },
            KeyCode::Char('j') | KeyCode::Down => {
                let _ = self.action_tx.send(Action::NavigateDown);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let _ = self.action_tx.send(Action::NavigateUp);
            }
            KeyCode::Char('y') => {
                let _ = self.action_tx.send(Action::CopyShortUrl);
            }
            KeyCode::Char('o') => {
                let _ = self.action_tx.send(Action::OpenShortUrl);
            }
            KeyCode::Char('l') => {
                let _ = self.action_tx.send(Action::LoadListing);
            }
            KeyCode::Char('h') => {
                let _ = self.action_tx.send(Action::CheckHealth);
            }
            KeyCode::Char('X') => {
                // Development-only endpoint, kept out of the UI unless the
                // config flag opts in.
                if self.config.enable_dev_clear && self.view_mode == ViewMode::Listing {
                    let _ = self.action_tx.send(Action::ClearAll);
                }
            }
            _ => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Back => match self.view_mode {
                ViewMode::Stats => {
                    self.view_mode = ViewMode::Listing;
                    self.stats = None;
                }
                _ => {
                    self.view_mode = ViewMode::Shorten;
                }
            },
            Action::NavigateUp => self.select_prev(),
            Action::NavigateDown => self.select_next(),
            Action::Submit => self.submit_url(),
            Action::Shortened(shortened) => {
                self.loading = false;
                self.short_url = Some(shortened.short_url);
                self.notification = Some(Notification::info(shortened.message));
                // Clear the input; the result panel keeps showing the short URL.
                self.url_input.clear();
            }
            Action::CopyShortUrl => {
                if let Some(short_url) = &self.short_url {
                    if utils::clipboard::copy_to_clipboard(short_url) {
                        self.notification = Some(Notification::info(messages::COPIED));
                    } else {
                        self.notification = Some(Notification::error(messages::COPY_ERROR));
                    }
                }
            }
            Action::OpenShortUrl => {
                if let Some(short_url) = &self.short_url {
                    let _ = open::that(short_url);
                }
            }
            Action::LoadListing => {
                if self.list_loading {
                    return;
                }
                self.view_mode = ViewMode::Listing;
                self.list_loading = true;

                let api = self.api_service.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    match api.list() {
                        Ok(listing) => {
                            let _ = tx.send(Action::ListingLoaded(listing));
                        }
                        Err(err) => {
                            let _ = tx.send(Action::Error(err.message));
                        }
                    }
                });
            }
            Action::ListingLoaded(listing) => {
                self.list_loading = false;
                self.total_urls = listing.total;
                self.records = listing.urls;
                if self.records.is_empty() {
                    self.list_state.select(None);
                } else if self.list_state.selected().is_none_or(|i| i >= self.records.len()) {
                    self.list_state.select(Some(0));
                }
            }
            Action::ShowStats => {
                let Some(record) = self.selected_record() else {
                    return;
                };
                let code = record.short_code.clone();
                self.view_mode = ViewMode::Stats;
                self.stats_loading = true;
                self.stats = None;

                let api = self.api_service.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    match api.stats(&code) {
                        Ok(stats) => {
                            let _ = tx.send(Action::StatsLoaded(stats));
                        }
                        Err(err) => {
                            let _ = tx.send(Action::Error(err.message));
                        }
                    }
                });
            }
            Action::StatsLoaded(stats) => {
                self.stats_loading = false;
                self.stats = Some(stats);
            }
            Action::CheckHealth => {
                let api = self.api_service.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    match api.health_check() {
                        Ok(health) => {
                            let _ = tx.send(Action::HealthChecked(health));
                        }
                        Err(err) => {
                            let _ = tx.send(Action::Error(err.message));
                        }
                    }
                });
            }
            Action::HealthChecked(health) => {
                let label = health.message.unwrap_or(health.status);
                let version = health.version.unwrap_or_else(|| "?".to_string());
                self.notification = Some(Notification::info(format!(
                    "{} (v{}, {} URLs)",
                    label, version, health.total_urls
                )));
            }
            Action::ClearAll => {
                let api = self.api_service.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    match api.clear() {
                        Ok(summary) => {
                            let _ = tx.send(Action::Cleared(summary));
                        }
                        Err(err) => {
                            let _ = tx.send(Action::Error(err.message));
                        }
                    }
                });
            }
            Action::Cleared(summary) => {
                self.notification = Some(Notification::info(summary.message));
                // Refresh the listing so the emptied state is visible.
                let _ = self.action_tx.send(Action::LoadListing);
            }
            Action::Error(message) => {
                self.loading = false;
                self.list_loading = false;
                self.stats_loading = false;
                self.notification = Some(Notification::error(message));
            }
        }
    }

    /// Validate and submit the current input. Local validation failures set
    /// the error message and never reach the network.
    fn submit_url(&mut self) {
        if self.loading {
            return;
        }

        // A new submit attempt clears any previously shown message.
        self.notification = None;

        let trimmed = self.url_input.trim().to_string();
        if trimmed.is_empty() {
            self.notification = Some(Notification::error(messages::EMPTY_URL));
            return;
        }
        if !utils::url::is_valid_url(&trimmed) {
            self.notification = Some(Notification::error(messages::INVALID_URL));
            return;
        }

        self.loading = true;

        let api = self.api_service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match api.shorten(&trimmed) {
                Ok(shortened) => {
                    let _ = tx.send(Action::Shortened(shortened));
                }
                Err(err) => {
                    let _ = tx.send(Action::Error(err.message));
                }
            }
        });
    }

    pub fn selected_record(&self) -> Option<&UrlRecord> {
        self.list_state.selected().and_then(|i| self.records.get(i))
    }

    fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.records.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.records.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
