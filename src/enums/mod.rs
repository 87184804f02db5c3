//! Enumerated types.

mod app;

pub use app::{App, SteamContext};
