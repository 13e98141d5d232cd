//! Redis-backed key-value store implementation.

use super::store::{KvError, KvResult, KvStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

/// Redis implementation of [`KvStore`].
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Commands map one-to-one onto Redis: GET/SET/DEL, INCRBY, MGET,
/// SMEMBERS/SADD/SREM.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> KvResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| KvError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| KvError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| KvError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let mut conn = self.client.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> KvResult<()> {
        let mut conn = self.client.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }

    async fn incr_by(&self, key: &str, delta: i64) -> KvResult<i64> {
        let mut conn = self.client.clone();
        Ok(conn.incr::<_, _, i64>(key, delta).await?)
    }

    async fn mget(&self, keys: &[String]) -> KvResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.client.clone();
        Ok(conn.mget::<_, Vec<Option<String>>>(keys).await?)
    }

    async fn smembers(&self, set: &str) -> KvResult<Vec<String>> {
        let mut conn = self.client.clone();
        Ok(conn.smembers::<_, Vec<String>>(set).await?)
    }

    async fn sadd(&self, set: &str, member: &str) -> KvResult<()> {
        let mut conn = self.client.clone();
        conn.sadd::<_, _, ()>(set, member).await?;
        Ok(())
    }

    async fn srem(&self, set: &str, member: &str) -> KvResult<()> {
        let mut conn = self.client.clone();
        conn.srem::<_, _, ()>(set, member).await?;
        Ok(())
    }

    async fn ping(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
