//! Core components, types, and utilities for desk-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The system prompt for model interactions.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
/// Common types and result aliases shared across the crate.
pub mod types;
