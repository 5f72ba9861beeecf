//! Terminal front end for the Marquee catalog browser.
//!
//! The binary wires configuration, logging, and a catalog source together;
//! this library holds the pieces so they can be driven from tests with a
//! scripted event source and ratatui's test backend.

pub mod animation;
pub mod app;
pub mod bootstrap;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod events;
pub mod logging;
pub mod ui;

pub use app::{App, AppCommand, AppSettings, FetchRequest};
pub use browser::{CatalogDelivery, Fetcher};
