//! Map-backed storage shared by the in-memory repositories.
//!
//! Each table keys rows by entity id and can be told to fail any of its four
//! operations, so tests can force a repository error at a chosen call.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use domain::{Category, RepositoryError, RepositoryResult, User};

/// Storage operation a failure flag applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Save,
    Update,
    Get,
    Count,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Save => write!(f, "save"),
            StoreOperation::Update => write!(f, "update"),
            StoreOperation::Get => write!(f, "get"),
            StoreOperation::Count => write!(f, "count"),
        }
    }
}

/// Injectable failure switches, one per storage operation.
///
/// Flags can be flipped through a shared reference while the repository is
/// in use.
#[derive(Debug, Default)]
pub struct FailureFlags {
    save: AtomicBool,
    update: AtomicBool,
    get: AtomicBool,
    count: AtomicBool,
}

impl FailureFlags {
    /// Make `save` fail (or succeed again)
    pub fn fail_on_save(&self, enabled: bool) {
        self.set(StoreOperation::Save, enabled);
    }

    /// Make `update` fail (or succeed again)
    pub fn fail_on_update(&self, enabled: bool) {
        self.set(StoreOperation::Update, enabled);
    }

    /// Make `get_by_id` fail (or succeed again)
    pub fn fail_on_get(&self, enabled: bool) {
        self.set(StoreOperation::Get, enabled);
    }

    /// Make `count` fail (or succeed again)
    pub fn fail_on_count(&self, enabled: bool) {
        self.set(StoreOperation::Count, enabled);
    }

    /// Set the flag for `op`
    pub fn set(&self, op: StoreOperation, enabled: bool) {
        self.flag(op).store(enabled, Ordering::SeqCst);
    }

    /// Check whether `op` is set to fail
    pub fn is_failing(&self, op: StoreOperation) -> bool {
        self.flag(op).load(Ordering::SeqCst)
    }

    /// Clear every flag
    pub fn reset(&self) {
        for op in [
            StoreOperation::Save,
            StoreOperation::Update,
            StoreOperation::Get,
            StoreOperation::Count,
        ] {
            self.set(op, false);
        }
    }

    fn flag(&self, op: StoreOperation) -> &AtomicBool {
        match op {
            StoreOperation::Save => &self.save,
            StoreOperation::Update => &self.update,
            StoreOperation::Get => &self.get,
            StoreOperation::Count => &self.count,
        }
    }
}

/// Entities that can be stored in a [`MemoryTable`]
pub(crate) trait Identified {
    fn id(&self) -> &str;
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Id-keyed map with failure injection.
#[derive(Debug)]
pub(crate) struct MemoryTable<T> {
    kind: &'static str,
    rows: RwLock<HashMap<String, T>>,
    failures: FailureFlags,
    failure: RepositoryError,
}

impl<T> MemoryTable<T>
where
    T: Identified + Clone + Send + Sync,
{
    /// Create a table seeded with `rows`; later rows win on id clashes.
    /// Set flags make calls fail with `failure`.
    pub fn with_rows(kind: &'static str, failure: RepositoryError, rows: Vec<T>) -> Self {
        let rows: HashMap<String, T> = rows
            .into_iter()
            .map(|row| (row.id().to_string(), row))
            .collect();

        Self {
            kind,
            rows: RwLock::new(rows),
            failures: FailureFlags::default(),
            failure,
        }
    }

    pub fn failures(&self) -> &FailureFlags {
        &self.failures
    }

    /// Store or overwrite `row` by its id
    pub async fn put(&self, op: StoreOperation, row: T) -> RepositoryResult<()> {
        self.check(op)?;

        let id = row.id().to_string();
        self.rows.write().await.insert(id.clone(), row);
        tracing::debug!(kind = self.kind, op = %op, id = %id, "Row stored");
        Ok(())
    }

    /// Fetch a copy of the row with `id`, if any
    pub async fn get(&self, id: &str) -> RepositoryResult<Option<T>> {
        self.check(StoreOperation::Get)?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    /// Number of stored rows
    pub async fn len(&self) -> RepositoryResult<usize> {
        self.check(StoreOperation::Count)?;
        Ok(self.rows.read().await.len())
    }

    fn check(&self, op: StoreOperation) -> RepositoryResult<()> {
        if self.failures.is_failing(op) {
            tracing::warn!(kind = self.kind, op = %op, "Simulated repository failure");
            return Err(self.failure.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    fn table() -> MemoryTable<Row> {
        MemoryTable::with_rows("row", RepositoryError::SimulatedUserFailure, Vec::new())
    }

    #[tokio::test]
    async fn test_put_overwrites_by_id() {
        let table = table();

        table.put(StoreOperation::Save, row("a", 1)).await.unwrap();
        table.put(StoreOperation::Update, row("a", 2)).await.unwrap();

        assert_eq!(table.len().await.unwrap(), 1);
        assert_eq!(table.get("a").await.unwrap().map(|r| r.value), Some(2));
    }

    #[tokio::test]
    async fn test_get_absent_is_not_an_error() {
        assert_eq!(table().get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_seeded_rows_later_wins() {
        let table = MemoryTable::with_rows(
            "row",
            RepositoryError::SimulatedUserFailure,
            vec![row("a", 1), row("b", 2), row("a", 3)],
        );

        assert_eq!(table.len().await.unwrap(), 2);
        assert_eq!(table.get("a").await.unwrap(), Some(row("a", 3)));
    }

    #[tokio::test]
    async fn test_each_flag_fails_only_its_operation() {
        let table = table();
        table.put(StoreOperation::Save, row("a", 1)).await.unwrap();

        table.failures().fail_on_save(true);
        assert!(table.put(StoreOperation::Save, row("b", 1)).await.is_err());
        assert!(table.put(StoreOperation::Update, row("a", 5)).await.is_ok());
        assert!(table.get("a").await.is_ok());
        assert!(table.len().await.is_ok());

        table.failures().reset();
        table.failures().fail_on_update(true);
        assert!(table.put(StoreOperation::Update, row("a", 6)).await.is_err());

        table.failures().reset();
        table.failures().fail_on_get(true);
        assert_eq!(
            table.get("a").await,
            Err(RepositoryError::SimulatedUserFailure)
        );

        table.failures().reset();
        table.failures().fail_on_count(true);
        assert!(table.len().await.is_err());

        // Failed writes leave state untouched
        table.failures().reset();
        assert_eq!(table.len().await.unwrap(), 1);
        assert_eq!(table.get("a").await.unwrap(), Some(row("a", 5)));
    }
}
