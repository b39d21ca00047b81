//! Correlation store implementations
//!
//! When a post is published to the channel with comments enabled, the
//! submitter's id is parked under `(channel_id, message_id)` until the
//! discussion-group echo arrives. The entry is consumed exactly once:
//! `take_if_present` removes and returns it in a single atomic step, so two
//! near-simultaneous echoes can never both resolve the same submitter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::config::RedisConfig;
use crate::utils::errors::Result;

/// Expiry for correlation entries. The discussion-group echo normally
/// arrives within seconds; the TTL only bounds leakage when it never does
/// (channel without a linked group, dropped update).
const CORRELATION_TTL_SECS: u64 = 86_400;

fn correlation_key(prefix: &str, channel_id: i64, message_id: i32) -> String {
    format!("{}corr:{}:{}", prefix, channel_id, message_id)
}

/// Keyed store mapping a published channel message to its submitter
#[async_trait]
pub trait CorrelationStore: Send + Sync {
    /// Record the submitter for a freshly published channel message
    async fn put(&self, channel_id: i64, message_id: i32, user_id: i64) -> Result<()>;

    /// Atomically remove and return the submitter for a channel message
    async fn take_if_present(&self, channel_id: i64, message_id: i32) -> Result<Option<i64>>;
}

/// Redis-backed correlation store
#[derive(Clone)]
pub struct RedisCorrelationStore {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
}

impl RedisCorrelationStore {
    /// Create a new store from Redis configuration
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    fn key(&self, channel_id: i64, message_id: i32) -> String {
        correlation_key(&self.config.prefix, channel_id, message_id)
    }
}

#[async_trait]
impl CorrelationStore for RedisCorrelationStore {
    async fn put(&self, channel_id: i64, message_id: i32, user_id: i64) -> Result<()> {
        let key = self.key(channel_id, message_id);
        let mut conn = self.connection_manager.clone();

        redis::cmd("SET")
            .arg(&key)
            .arg(user_id)
            .arg("EX")
            .arg(CORRELATION_TTL_SECS)
            .query_async::<_, ()>(&mut conn)
            .await?;

        debug!(channel_id = channel_id, message_id = message_id, user_id = user_id,
               "Correlation entry recorded");
        Ok(())
    }

    async fn take_if_present(&self, channel_id: i64, message_id: i32) -> Result<Option<i64>> {
        let key = self.key(channel_id, message_id);
        let mut conn = self.connection_manager.clone();

        // GETDEL removes and returns in one round trip, keeping consumption
        // atomic per key.
        let user_id: Option<i64> = redis::cmd("GETDEL")
            .arg(&key)
            .query_async(&mut conn)
            .await?;

        debug!(channel_id = channel_id, message_id = message_id, found = user_id.is_some(),
               "Correlation entry taken");
        Ok(user_id)
    }
}

impl std::fmt::Debug for RedisCorrelationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCorrelationStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// In-memory correlation store for tests and single-process deployments
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorrelationStore {
    entries: Arc<Mutex<HashMap<(i64, i32), i64>>>,
}

impl InMemoryCorrelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently parked
    pub fn len(&self) -> usize {
        self.entries.lock().expect("correlation map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CorrelationStore for InMemoryCorrelationStore {
    async fn put(&self, channel_id: i64, message_id: i32, user_id: i64) -> Result<()> {
        self.entries
            .lock()
            .expect("correlation map poisoned")
            .insert((channel_id, message_id), user_id);
        Ok(())
    }

    async fn take_if_present(&self, channel_id: i64, message_id: i32) -> Result<Option<i64>> {
        Ok(self
            .entries
            .lock()
            .expect("correlation map poisoned")
            .remove(&(channel_id, message_id)))
    }
}
