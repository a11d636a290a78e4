use crate::presentation::view_model::{UiChange, UiObserver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Renders view-model changes to the terminal
#[derive(Default)]
pub struct TerminalView {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_spinner(&self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Translating PDF...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn print_error(&self, message: &str) {
        let line = format!("✘ {}", message).red();
        let slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    fn stop_spinner(&self) {
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
    }
}

impl UiObserver for TerminalView {
    fn on_change(&self, change: &UiChange) {
        match change {
            UiChange::LanguagesPopulated(count) => debug!("{} languages available", count),
            UiChange::LoadingChanged(true) => self.start_spinner(),
            UiChange::LoadingChanged(false) => self.stop_spinner(),
            UiChange::ErrorShown(message) => self.print_error(message),
            UiChange::ErrorHidden => debug!("Error message cleared"),
        }
    }
}
