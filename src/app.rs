use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::api::MovieBackend;
use crate::config::ClientConfig;
use crate::dropdown::{Dropdown, MenuItem};
use crate::location::Location;
use crate::messages::{AppChannels, AppMessage};
use crate::modal::Modal;
use crate::model::PageContext;
use crate::search::{PageSizeSelector, SearchForm, search_path};
use crate::status::{apply_status, spawn_save_status};
use crate::storage::KeyValueStore;
use crate::sync::{ListView, spawn_refresh};
use crate::theme::Theme;

/// Input mode for the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Main application state.
pub struct App {
    pub config: ClientConfig,
    backend: Arc<dyn MovieBackend>,
    store: KeyValueStore,
    channels: AppChannels,

    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,

    // Address bar; the form and size selector are views onto it
    pub location: Location,
    pub search: SearchForm,
    pub page_size: PageSizeSelector,
    pub input_mode: InputMode,

    pub list: ListView,
    pub list_selected: usize,
    pub dropdown: Dropdown,
    pub modal: Modal,

    /// Fetches started but not yet reported back
    pub pending_loads: usize,
    pub status_msg: String,
}

impl App {
    pub fn new(
        config: ClientConfig,
        backend: Arc<dyn MovieBackend>,
        store: KeyValueStore,
        mut location: Location,
    ) -> Self {
        let theme = Theme::load(&store);
        let query = location.query_state(config.default_limit);
        let page_size = PageSizeSelector::new(query.limit);
        // Only offered sizes are shown, so the address follows the selector.
        if page_size.value() != query.limit {
            page_size.apply(&mut location, config.default_limit);
        }
        Self {
            backend,
            store,
            channels: AppChannels::new(),

            should_quit: false,
            show_help: false,
            theme,

            search: SearchForm::from_location(&location),
            page_size,
            location,
            input_mode: InputMode::Normal,

            list: ListView::default(),
            list_selected: 0,
            dropdown: Dropdown::default(),
            modal: Modal::default(),

            pending_loads: 0,
            status_msg: "Loading movies...".to_string(),
            config,
        }
    }

    pub fn context(&self) -> PageContext {
        self.location.context()
    }

    /// Fetch the list for the current address.
    pub fn refresh(&mut self) {
        let context = self.context();
        let query = self.location.query_state(self.config.default_limit);
        self.pending_loads += 1;
        spawn_refresh(
            self.backend.clone(),
            self.channels.tx.clone(),
            context,
            query,
        );
    }

    pub fn submit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        match self
            .search
            .submit(&mut self.location, self.page_size.value())
        {
            Ok(_) => self.refresh(),
            Err(e) => self.status_msg = e.user_message(),
        }
    }

    /// Step the page size and refresh if it changed.
    pub fn change_page_size(&mut self, delta: isize) {
        if !self.page_size.step(delta) {
            return;
        }
        self.page_size
            .apply(&mut self.location, self.config.default_limit);
        self.refresh();
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle(&self.store);
    }

    /// Show the dialog for the selected card.
    pub fn open_modal(&mut self) {
        if let Some(card) = self.list.cards().get(self.list_selected) {
            self.modal.open(card);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Apply the status picked in the dialog and send it to the backend.
    pub fn choose_status(&mut self) {
        let Some(movie_id) = self.modal.movie_id() else {
            return;
        };
        let status = self.modal.selector.value().map(|s| s.value().to_string());
        apply_status(&mut self.list, &mut self.modal, movie_id, status.as_deref());
        spawn_save_status(
            self.backend.clone(),
            self.channels.tx.clone(),
            self.config.user_id,
            movie_id,
            status,
        );
    }

    pub fn toggle_expand(&mut self) {
        self.list.toggle_expand(self.list_selected);
    }

    pub fn list_next(&mut self) {
        if self.list_selected + 1 < self.list.len() {
            self.list_selected += 1;
        }
    }

    pub fn list_prev(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    /// Run the highlighted "Library" menu entry.
    pub fn activate_menu_item(&mut self) {
        match self.dropdown.activate() {
            MenuItem::Page(context) => {
                self.location.navigate(context);
                self.search = SearchForm::from_location(&self.location);
                self.list_selected = 0;
                self.refresh();
            }
            item => {
                if let Some(path) = item.library_path(self.config.user_id) {
                    self.open_in_browser(&path);
                }
            }
        }
    }

    /// Open the full-page search for the current query in the browser.
    pub fn open_search_page(&mut self) {
        let query = self.location.query_state(self.config.default_limit);
        self.open_in_browser(&search_path(&query));
    }

    fn open_in_browser(&mut self, path: &str) {
        let url = match self.config.web_url(path) {
            Ok(url) => url,
            Err(e) => {
                self.status_msg = e.user_message();
                return;
            }
        };
        match open::that(url.as_str()) {
            Ok(()) => self.status_msg = format!("Opening: {}", url),
            Err(e) => {
                warn!(%url, error = %e, "failed to open browser");
                self.status_msg = format!("Link: {} (browser not available)", url);
            }
        }
    }

    /// Apply every message that has arrived since the last call.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.channels.rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ListLoaded {
                context,
                query,
                result,
            } => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                debug!(?context, query = %query.to_query_string(), "list response applied");
                let ok = result.is_ok();
                self.list.apply(context, result);
                if ok {
                    self.list_selected = 0;
                    self.status_msg = format!(
                        "{} movies loaded at {}",
                        self.list.len(),
                        Local::now().format("%H:%M:%S")
                    );
                } else {
                    self.status_msg.clear();
                }
            }
            AppMessage::StatusSaved { movie_id, status } => {
                info!(movie_id, ?status, "interaction stored");
            }
            AppMessage::StatusFailed { movie_id } => {
                debug!(movie_id, "keeping optimistic status after failed save");
            }
        }
    }

    #[cfg(test)]
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        self.channels.rx.recv().await
    }
}
