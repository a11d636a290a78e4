use crate::domain::error::PdfTrError;
use crate::domain::model::{Language, RenderMode, TranslateOptions};
use crate::infrastructure::config::Config;
use crate::presentation::view_model::{Selector, UiState, ViewModel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdftr")]
#[command(about = "Translate PDF documents with a remote translation service.")]
#[command(version)]
pub struct Cli {
    /// Source language (defaults to config, then "English")
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Target language (defaults to config, then "Chinese")
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// List supported languages
    #[arg(short = 'l', long)]
    pub languages: bool,

    /// Output as JSON (with --languages or --status)
    #[arg(long)]
    pub json: bool,

    /// First page to translate (implies a page range)
    #[arg(long)]
    pub page_from: Option<u32>,

    /// Last page to translate (implies a page range)
    #[arg(long)]
    pub page_to: Option<u32>,

    /// INTERLEAVE, SIDE_BY_SIDE or TRANSLATION_ONLY
    #[arg(short = 'm', long)]
    pub render_mode: Option<String>,

    /// Ask the service to add a blank page
    #[arg(long)]
    pub add_blank_page: bool,

    /// Translation service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the translated document's URL instead of opening it
    #[arg(long)]
    pub no_open: bool,

    /// Save the translated PDF to this file instead of opening it
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Show service status
    #[arg(long)]
    pub status: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// PDF file path or http(s) URL
    pub input: Option<String>,
}

impl Cli {
    /// Whether the input should be downloaded rather than read from disk
    pub fn input_is_url(&self) -> bool {
        self.input
            .as_deref()
            .map(|i| i.starts_with("http://") || i.starts_with("https://"))
            .unwrap_or(false)
    }

    /// Request options from the flags, falling back to the config.
    ///
    /// Any page bound turns off `translate_all`.
    pub fn translate_options(&self, config: &Config) -> Result<TranslateOptions, PdfTrError> {
        let render_mode = match &self.render_mode {
            Some(mode) => mode.parse::<RenderMode>()?,
            None => config.render_mode,
        };
        let page_range = self.page_from.is_some() || self.page_to.is_some();

        Ok(TranslateOptions {
            translate_all: !page_range,
            page_from: self.page_from.unwrap_or(0),
            page_to: self.page_to.unwrap_or(0),
            render_mode,
            add_blank_page: self.add_blank_page,
        })
    }

    /// Apply --from/--to on top of the defaults picked at init and return
    /// the resulting pair.
    pub fn select_languages(&self, view: &ViewModel) -> Result<(Language, Language), PdfTrError> {
        for (choice, is_source) in [(&self.from, true), (&self.to, false)] {
            let Some(lang) = choice else { continue };
            let accepted = view.update(|state| {
                selector_mut(state, is_source)
                    .map(|s| s.select(lang))
                    .unwrap_or(false)
            });
            if !accepted {
                return Err(PdfTrError::InvalidInput(format!(
                    "Unsupported language: {} (see --languages)",
                    lang
                )));
            }
        }

        view.selected_languages().ok_or_else(|| {
            let state = view.snapshot();
            let (flag, side) = if selected(state.from_lang.as_ref()) {
                ("--to", "target")
            } else {
                ("--from", "source")
            };
            PdfTrError::InvalidInput(format!(
                "No {} language selected: the configured default is not offered, pass {} (see --languages)",
                side, flag
            ))
        })
    }
}

fn selector_mut(state: &mut UiState, is_source: bool) -> Option<&mut Selector> {
    if is_source {
        state.from_lang.as_mut()
    } else {
        state.to_lang.as_mut()
    }
}

fn selected(selector: Option<&Selector>) -> bool {
    selector.and_then(Selector::value).is_some()
}
