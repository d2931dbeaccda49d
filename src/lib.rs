//! landing-page - personal landing card for the terminal
//!
//! This crate renders a small personal landing page: a splash, a counter of the
//! time elapsed since a birth date, a quote and photo block, an optional
//! embedded video, and social links, all driven by one configuration value.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Video link extraction, elapsed-time formatting, config and page values
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (TOML config file, system clock, embed player)
//! - **CLI**: Command-line interface, argument parsing, logging, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
