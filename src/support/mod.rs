//! Support-domain logic for desk-bot.
//!
//! This module provides the pieces the ask flow is built from:
//! - Gating incoming messages to customer-support topics
//! - Assembling the prompt sent to the model
//! - Classifying issues and keeping the tally current

pub mod classify;
pub mod gate;
pub mod handler;
pub mod prompt;
