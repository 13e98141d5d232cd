//! In-process key-value store for tests and Redis-free development.

use super::store::{KvError, KvResult, KvStore};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    strings: HashMap<String, String>,
    sets: HashMap<String, BTreeSet<String>>,
}

/// Hash-map implementation of [`KvStore`].
///
/// Follows Redis semantics for the commands the service uses, including
/// INCRBY treating an absent key as zero and rejecting non-integer values.
/// All state lives behind a single `RwLock`, which is enough to make
/// `incr_by` atomic with respect to concurrent callers.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.tables.read().await.strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        self.tables
            .write()
            .await
            .strings
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn del(&self, key: &str) -> KvResult<()> {
        self.tables.write().await.strings.remove(key);
        Ok(())
    }

    async fn incr_by(&self, key: &str, delta: i64) -> KvResult<i64> {
        let mut tables = self.tables.write().await;

        let current = match tables.strings.get(key) {
            Some(raw) => raw.parse::<i64>().map_err(|_| KvError::NotAnInteger {
                key: key.to_string(),
            })?,
            None => 0,
        };

        let next = current + delta;
        tables.strings.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn mget(&self, keys: &[String]) -> KvResult<Vec<Option<String>>> {
        let tables = self.tables.read().await;
        Ok(keys
            .iter()
            .map(|key| tables.strings.get(key).cloned())
            .collect())
    }

    async fn smembers(&self, set: &str) -> KvResult<Vec<String>> {
        Ok(self
            .tables
            .read()
            .await
            .sets
            .get(set)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn sadd(&self, set: &str, member: &str) -> KvResult<()> {
        self.tables
            .write()
            .await
            .sets
            .entry(set.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn srem(&self, set: &str, member: &str) -> KvResult<()> {
        if let Some(members) = self.tables.write().await.sets.get_mut(set) {
            members.remove(member);
        }
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_del() {
        let store = MemoryStore::new();

        assert!(store.get("k").await.unwrap().is_none());

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        store.del("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());

        // Deleting an absent key is a no-op.
        store.del("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_incr_by_starts_from_zero() {
        let store = MemoryStore::new();

        assert_eq!(store.incr_by("n", 1).await.unwrap(), 1);
        assert_eq!(store.incr_by("n", 1).await.unwrap(), 2);
        assert_eq!(store.incr_by("n", 5).await.unwrap(), 7);
        assert_eq!(store.get("n").await.unwrap().as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_incr_by_rejects_non_integer() {
        let store = MemoryStore::new();
        store.set("n", "not-a-number").await.unwrap();

        let err = store.incr_by("n", 1).await.unwrap_err();
        assert!(matches!(err, KvError::NotAnInteger { .. }));
    }

    #[tokio::test]
    async fn test_mget_preserves_order_and_gaps() {
        let store = MemoryStore::new();
        store.set("a", "1").await.unwrap();
        store.set("c", "3").await.unwrap();

        let values = store
            .mget(&["a".to_string(), "b".to_string(), "c".to_string()])
            .await
            .unwrap();

        assert_eq!(
            values,
            vec![Some("1".to_string()), None, Some("3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_set_membership() {
        let store = MemoryStore::new();

        assert!(store.smembers("ids").await.unwrap().is_empty());

        store.sadd("ids", "a").await.unwrap();
        store.sadd("ids", "b").await.unwrap();
        store.sadd("ids", "a").await.unwrap();

        assert_eq!(store.smembers("ids").await.unwrap(), vec!["a", "b"]);

        store.srem("ids", "a").await.unwrap();
        assert_eq!(store.smembers("ids").await.unwrap(), vec!["b"]);

        store.srem("missing", "a").await.unwrap();
    }
}
