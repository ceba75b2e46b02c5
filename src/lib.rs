//! # Binance Futures CLI
//!
//! A command-line tool for placing MARKET and LIMIT orders on Binance USDT-M
//! Futures (testnet by default).
//!
//! ## Architecture
//!
//! - `config`: credentials and environment selection
//! - `exchange`: signed REST client for the futures API
//! - `order`: input validation, request construction, and execution workflow

pub mod config;
pub mod exchange;
pub mod order;

pub use config::Config;
