pub mod client;
pub mod download;
pub mod http;

pub use client::ServiceClient;
pub use download::download_pdf;
