//! KeyLibrary
//!
//! Core functionality for the KeyLibrary application: a registry that checks
//! labels out to keyboard keys, the embedded key catalog, key list parsing,
//! and the terminal UI that drives them.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod key_db;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
pub mod shortcuts;
pub mod tui;
