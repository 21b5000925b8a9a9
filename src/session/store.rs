//! Async key/value persistence for wizard answers.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Storage keys for the onboarding answers.
pub mod field_keys {
    /// The user's first name.
    pub const FIRST_NAME: &str = "userFirstName";
    /// The selected motivation option.
    pub const GOAL: &str = "monoGoal";
    /// Monthly after-tax income, raw digits as entered.
    pub const MONTHLY_INCOME: &str = "monthlyIncome";
    /// Monthly rent, raw digits as entered.
    pub const MONTHLY_RENT: &str = "monthlyRent";
    /// Debt selections as a JSON object of category id to amount.
    pub const USER_DEBTS: &str = "userDebts";

    /// All onboarding keys, in collection order.
    pub const ALL: [&str; 5] = [FIRST_NAME, GOAL, MONTHLY_INCOME, MONTHLY_RENT, USER_DEBTS];
}

/// Backend-agnostic key/value store for a single wizard session.
///
/// Reads are infallible: a missing value is simply absent, so aggregation
/// can never fail on the read path. Only writers report errors.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the stored value for `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` if present.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory session store, the default for a single wizard run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// File-backed session store. Answers survive process restarts the way
/// browser storage survives page visits.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the session at `path`. A missing file is an empty session;
    /// an unreadable or non-JSON file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Rewrite the session file from the in-memory map.
    async fn persist(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(values)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.remove(key);
        self.persist(&values).await
    }
}

/// Remove every onboarding answer from the store.
///
/// This is the explicit reset operation. Completing the wizard does not
/// call it; answers stay in place until a caller asks for a fresh start.
pub async fn clear_responses(store: &dyn SessionStore) -> Result<(), StoreError> {
    for key in field_keys::ALL {
        store.remove(key).await?;
    }
    Ok(())
}
