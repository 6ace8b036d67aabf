//! Shared state for the application: conversation history and issue tally.
//!
//! This module defines the `GenericStore` trait that can be implemented for
//! different backends, with a default in-memory implementation. The store owns
//! all cross-request mutable state so handlers never touch globals, and every
//! mutation is a single atomic operation on the store.

pub mod memory;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{IssueCategory, IssueCounts, Res};

// Traits.

/// Generic store trait that backends must implement.
#[async_trait]
pub trait GenericStore: Send + Sync + 'static {
    /// Append a message to the shared conversation history and return the
    /// whole history joined with newlines.
    ///
    /// Append and join happen under one lock so concurrent requests cannot
    /// observe a transcript missing their own message.
    async fn append_and_render_history(&self, message: &str) -> Res<String>;

    /// Snapshot of the conversation history, oldest first.
    async fn history(&self) -> Res<Vec<String>>;

    /// Increment the tally for the given category and return the updated counts.
    async fn record_issue(&self, category: IssueCategory) -> Res<IssueCounts>;

    /// Snapshot of the issue tally.
    async fn issue_counts(&self) -> Res<IssueCounts>;
}

// Structs.

/// Store client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<dyn GenericStore>,
}

impl Deref for StoreClient {
    type Target = dyn GenericStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl StoreClient {
    /// Wrap any implementation of the trait. Used by tests to inject fakes.
    pub fn new(inner: Arc<dyn GenericStore>) -> Self {
        Self { inner }
    }
}
