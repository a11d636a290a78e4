use crate::domain::error::PdfTrError;
use crate::domain::traits::TabOpener;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;
use url::Url;

/// Opens URLs with the platform's default handler or a configured command
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    command: Option<String>,
}

impl SystemOpener {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }

    fn command_parts(&self) -> Vec<String> {
        match &self.command {
            // e.g. "firefox --new-tab" -> ["firefox", "--new-tab"]
            Some(cmd) => cmd.split_whitespace().map(str::to_string).collect(),
            None => default_open_command()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn default_open_command() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", ""]
    } else if cfg!(target_os = "macos") {
        &["open"]
    } else {
        &["xdg-open"]
    }
}

impl TabOpener for SystemOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<(), PdfTrError> {
        let parts = self.command_parts();
        let Some((program, args)) = parts.split_first() else {
            return Err(PdfTrError::Config("Empty open_command".to_string()));
        };

        debug!("Launching {} {:?} {}", program, args, url);
        Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PdfTrError::Open {
                url: url.to_string(),
                reason: format!("cannot run '{}': {}", program, e),
            })?;
        Ok(())
    }
}

/// Prints the URL instead of opening it
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoOpener;

impl TabOpener for EchoOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<(), PdfTrError> {
        println!("{}", url);
        Ok(())
    }
}

/// Moves the opened document to a fixed path instead of showing it
#[derive(Debug, Clone)]
pub struct SaveOpener {
    target: PathBuf,
}

impl SaveOpener {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl TabOpener for SaveOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<(), PdfTrError> {
        let source = Url::parse(url)
            .ok()
            .and_then(|u| u.to_file_path().ok())
            .ok_or_else(|| PdfTrError::Open {
                url: url.to_string(),
                reason: "not a local file URL".to_string(),
            })?;

        // Nothing is left behind in the blob store
        if std::fs::rename(&source, &self.target).is_err() {
            std::fs::copy(&source, &self.target)?;
            std::fs::remove_file(&source)?;
        }
        println!("Saved translated PDF to {}", self.target.display());
        Ok(())
    }
}
