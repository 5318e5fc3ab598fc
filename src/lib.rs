//! docdesk: operator console for a document-triage backend.
//!
//! ARCHITECTURE
//! ============
//! The backend classifies Email, JSON and PDF inputs, runs a per-format
//! agent and dispatches follow-up actions. This crate only consumes its
//! responses: `input` collects a submission, `console` coordinates it through
//! `api`, `render` turns the result into HTML, `history` lists past traces,
//! `samples` pre-fills the form and `notify` keeps the banner stack. `routes`
//! serves all of it as a server-rendered web page.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod input;
pub mod notify;
pub mod render;
pub mod routes;
pub mod samples;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::ConsoleConfig;
pub use console::{Console, SubmitOutcome};
pub use error::ConsoleError;
