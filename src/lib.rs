//! Client for a remote PDF translation service.
//!
//! Fetches the supported languages, uploads a PDF (local or downloaded) and
//! opens the translated document.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::PdfTrError;
