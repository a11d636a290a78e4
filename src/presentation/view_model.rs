//! UI state for the translator panel.
//!
//! Every element of the panel is optional: a host that does not render an
//! element simply leaves it `None` and updates to it are skipped.

use crate::domain::model::Language;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A language drop-down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    options: Vec<Language>,
    value: Option<Language>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[Language] {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Clear the options and append `languages` in order. The first option
    /// becomes the selection.
    pub fn replace_options(&mut self, languages: &[Language]) {
        self.options = languages.to_vec();
        self.value = self.options.first().cloned();
    }

    /// Select `value` if it is one of the options, otherwise clear the
    /// selection. Returns whether the value was accepted.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o == value) {
            self.value = Some(value.to_string());
            true
        } else {
            self.value = None;
            false
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub from_lang: Option<Selector>,
    pub to_lang: Option<Selector>,
    pub file_input: bool,
    pub url_form: bool,
    pub url_input: Option<String>,
    /// Loading indicator visibility
    pub loading: Option<bool>,
    pub error_display: Option<ErrorDisplay>,
}

impl UiState {
    /// A panel with every element present
    pub fn full() -> Self {
        Self {
            from_lang: Some(Selector::new()),
            to_lang: Some(Selector::new()),
            file_input: true,
            url_form: true,
            url_input: Some(String::new()),
            loading: Some(false),
            error_display: Some(ErrorDisplay::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiChange {
    LanguagesPopulated(usize),
    LoadingChanged(bool),
    ErrorShown(String),
    ErrorHidden,
}

/// Receives every visible change, e.g. to render it
pub trait UiObserver: Send + Sync {
    fn on_change(&self, change: &UiChange);
}

#[derive(Debug, Default)]
pub struct NoopObserver;

impl UiObserver for NoopObserver {
    fn on_change(&self, _change: &UiChange) {}
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ViewModel {
    state: Arc<Mutex<UiState>>,
    observer: Arc<dyn UiObserver>,
    error_display: Duration,
    error_timer: Mutex<Option<JoinHandle<()>>>,
}

impl ViewModel {
    pub fn new(state: UiState, observer: Arc<dyn UiObserver>, error_display: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            observer,
            error_display,
            error_timer: Mutex::new(None),
        }
    }

    pub fn snapshot(&self) -> UiState {
        lock(&self.state).clone()
    }

    /// Mutate the state directly, as user input would
    pub fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut lock(&self.state))
    }

    /// Current (from, to) selection; `None` if either selector is missing or empty
    pub fn selected_languages(&self) -> Option<(Language, Language)> {
        let state = lock(&self.state);
        let from = state.from_lang.as_ref()?.value()?.to_string();
        let to = state.to_lang.as_ref()?.value()?.to_string();
        Some((from, to))
    }

    pub fn url_input(&self) -> Option<String> {
        lock(&self.state).url_input.clone()
    }

    /// Refill both selectors and pick the default pair.
    ///
    /// Does nothing unless both selectors exist. Returns whether they were filled.
    pub fn populate_languages(&self, languages: &[Language], from: &str, to: &str) -> bool {
        {
            let mut state = lock(&self.state);
            let UiState {
                from_lang: Some(from_select),
                to_lang: Some(to_select),
                ..
            } = &mut *state
            else {
                debug!("Language selectors missing, skipping population");
                return false;
            };

            from_select.replace_options(languages);
            to_select.replace_options(languages);
            if !from_select.select(from) {
                warn!("Default source language '{}' not offered by service", from);
            }
            if !to_select.select(to) {
                warn!("Default target language '{}' not offered by service", to);
            }
        }

        self.observer
            .on_change(&UiChange::LanguagesPopulated(languages.len()));
        true
    }

    pub fn set_loading(&self, loading: bool) {
        {
            let mut state = lock(&self.state);
            match state.loading.as_mut() {
                Some(visible) => *visible = loading,
                None => return,
            }
        }
        self.observer.on_change(&UiChange::LoadingChanged(loading));
    }

    /// Show the loading indicator until the returned guard is dropped
    pub fn loading(&self) -> LoadingGuard<'_> {
        self.set_loading(true);
        LoadingGuard { view: self }
    }

    /// Display `message` and hide it again after the configured delay.
    ///
    /// A newer message restarts the delay.
    pub fn show_error(&self, message: &str) {
        {
            let mut state = lock(&self.state);
            let Some(display) = state.error_display.as_mut() else {
                return;
            };
            display.text = message.to_string();
            display.visible = true;
        }
        self.observer
            .on_change(&UiChange::ErrorShown(message.to_string()));

        let mut timer = lock(&self.error_timer);
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, error message will stay visible");
            return;
        };

        let state = Arc::clone(&self.state);
        let observer = Arc::clone(&self.observer);
        let delay = self.error_display;
        *timer = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = lock(&state);
                if let Some(display) = state.error_display.as_mut() {
                    display.visible = false;
                }
            }
            observer.on_change(&UiChange::ErrorHidden);
        }));
    }
}

impl Drop for ViewModel {
    fn drop(&mut self) {
        if let Some(timer) = lock(&self.error_timer).take() {
            timer.abort();
        }
    }
}

/// Hides the loading indicator on drop, including when the operation is cancelled
pub struct LoadingGuard<'a> {
    view: &'a ViewModel,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}
