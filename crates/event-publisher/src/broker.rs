//! Broker channel abstraction.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Errors a broker can return.
#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Publish rejected: {0}")]
    Rejected(String),
}

/// Publishes one message on a named channel.
#[async_trait]
pub trait Broker: Send {
    /// Publish `payload` on `channel`, returning the number of receivers.
    async fn publish(&mut self, channel: &str, payload: String) -> Result<u64, BrokerError>;
}

/// Broker backed by Redis `PUBLISH`.
///
/// Holds the single multiplexed connection of the process. Pipelines that need
/// the same connection get a cheap clone through [`RedisBroker::connection`].
pub struct RedisBroker {
    conn: MultiplexedConnection,
}

impl RedisBroker {
    /// Open a client for `url` and establish the connection.
    pub async fn connect(url: &str) -> Result<Self, BrokerError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("connected to Redis");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// A handle on the shared connection.
    pub fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}

#[async_trait]
impl Broker for RedisBroker {
    async fn publish(&mut self, channel: &str, payload: String) -> Result<u64, BrokerError> {
        let receivers: u64 = redis::cmd("PUBLISH")
            .arg(channel)
            .arg(payload)
            .query_async(&mut self.conn)
            .await?;

        debug!(channel, receivers, "message published to redis");
        Ok(receivers)
    }
}

/// A message recorded by [`MemoryBroker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub channel: String,
    pub payload: String,
}

/// In-memory broker that records every published message.
///
/// Clones share the same record, so a test can keep one handle while the
/// publisher owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBroker {
    messages: Arc<Mutex<Vec<PublishedMessage>>>,
    attempts: Arc<AtomicUsize>,
    /// 1-based publish attempt that fails instead of recording
    fail_on_attempt: Option<usize>,
    receivers: u64,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `attempt`-th publish call (1-based).
    pub fn fail_on_attempt(mut self, attempt: usize) -> Self {
        self.fail_on_attempt = Some(attempt);
        self
    }

    /// Number of receivers reported for each successful publish.
    pub fn with_receivers(mut self, receivers: u64) -> Self {
        self.receivers = receivers;
        self
    }

    // Recover the guard even if a panicking test poisoned the lock
    fn lock_messages(&self) -> MutexGuard<'_, Vec<PublishedMessage>> {
        match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Every message published so far, in order.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.lock_messages().clone()
    }

    /// Number of publish calls, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Broker for MemoryBroker {
    async fn publish(&mut self, channel: &str, payload: String) -> Result<u64, BrokerError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_attempt == Some(attempt) {
            return Err(BrokerError::Rejected(format!(
                "simulated failure on publish attempt {attempt}"
            )));
        }

        self.lock_messages().push(PublishedMessage {
            channel: channel.to_string(),
            payload,
        });
        Ok(self.receivers)
    }
}
