//! In-memory store implementation.
//!
//! History and tally live for the lifetime of the process and are guarded by
//! mutexes. History is bounded: once `max_turns` is reached, the oldest
//! message is evicted on each append.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::base::{
    config::Config,
    types::{IssueCategory, IssueCounts, Res},
};

use super::{GenericStore, StoreClient};

// Extra methods on `StoreClient` applied by the in-memory implementation.

impl StoreClient {
    pub fn memory(config: &Config) -> Self {
        let store = MemoryStore::new(config.max_history_turns);
        Self { inner: Arc::new(store) }
    }
}

/// In-memory store implementation.
pub struct MemoryStore {
    max_turns: usize,
    history: Mutex<VecDeque<String>>,
    counts: Mutex<IssueCounts>,
}

impl MemoryStore {
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            history: Mutex::new(VecDeque::new()),
            counts: Mutex::new(IssueCounts::default()),
        }
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        // A poisoned lock means a panic mid-mutation; propagating the panic is fine here.
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_counts(&self) -> std::sync::MutexGuard<'_, IssueCounts> {
        self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GenericStore for MemoryStore {
    async fn append_and_render_history(&self, message: &str) -> Res<String> {
        let mut history = self.lock_history();

        history.push_back(message.to_string());

        while history.len() > self.max_turns {
            history.pop_front();
        }

        let rendered = history.iter().map(String::as_str).collect::<Vec<_>>().join("\n");

        Ok(rendered)
    }

    async fn history(&self) -> Res<Vec<String>> {
        Ok(self.lock_history().iter().cloned().collect())
    }

    async fn record_issue(&self, category: IssueCategory) -> Res<IssueCounts> {
        let mut counts = self.lock_counts();
        counts.increment(category);
        Ok(*counts)
    }

    async fn issue_counts(&self) -> Res<IssueCounts> {
        Ok(*self.lock_counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_joins_history_with_newlines() {
        let store = MemoryStore::new(16);

        assert_eq!(store.append_and_render_history("A").await.unwrap(), "A");
        assert_eq!(store.append_and_render_history("B").await.unwrap(), "A\nB");
        assert_eq!(store.history().await.unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn history_evicts_oldest_beyond_bound() {
        let store = MemoryStore::new(2);

        store.append_and_render_history("first").await.unwrap();
        store.append_and_render_history("second").await.unwrap();
        let rendered = store.append_and_render_history("third").await.unwrap();

        assert_eq!(rendered, "second\nthird");
        assert_eq!(store.history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn tally_sums_to_number_of_recorded_issues() {
        let store = MemoryStore::new(16);

        store.record_issue(IssueCategory::Delivery).await.unwrap();
        store.record_issue(IssueCategory::Delivery).await.unwrap();
        let counts = store.record_issue(IssueCategory::Other).await.unwrap();

        assert_eq!(counts.delivery, 2);
        assert_eq!(counts.other, 1);
        assert_eq!(counts.refund, 0);
        assert_eq!(counts.total(), 3);
    }
}
