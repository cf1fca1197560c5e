use std::sync::Arc;

use crate::directory::{AppLinkSubmission, Directory, UpsertOutcome};
use crate::error::{DirectoryError, Result};
use applink_core::{AppLinkRecord, LinkStore};
use async_trait::async_trait;
use jiff::Timestamp;
use tracing::{debug, trace};

/// A concrete implementation of the [`Directory`] trait.
///
/// Wraps a [`LinkStore`] and handles:
/// - Submission validation (one pass, collecting every failed constraint)
/// - Upsert semantics (create-if-absent-else-update-in-place by `id`)
/// - The active-only lookup used by the public redirect flow
///
/// Every mutation loads the whole collection, rewrites it in memory, and
/// persists it back; the store's last-write-wins semantics are accepted
/// for the single-administrator usage pattern.
#[derive(Debug, Clone)]
pub struct DirectoryService<S> {
    store: Arc<S>,
}

impl<S: LinkStore> DirectoryService<S> {
    /// Creates a new directory service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Validates that a URL has an http(s) scheme followed by at least
    /// one character.
    fn is_url_shaped(url: &str) -> bool {
        ["http://", "https://"]
            .iter()
            .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
    }

    /// Single validation pass over a submission. Returns every failed
    /// constraint so the caller can report them all at once.
    fn constraint_failures(submission: &AppLinkSubmission) -> Vec<String> {
        let mut failures = Vec::new();

        for (field, value) in [
            ("id", &submission.id),
            ("name", &submission.name),
            ("appStoreUrl", &submission.app_store_url),
            ("playStoreUrl", &submission.play_store_url),
        ] {
            if value.trim().is_empty() {
                failures.push(format!("{field} is required"));
            }
        }

        for (field, value) in [
            ("appStoreUrl", &submission.app_store_url),
            ("playStoreUrl", &submission.play_store_url),
        ] {
            if !value.trim().is_empty() && !Self::is_url_shaped(value) {
                failures.push(format!("{field} must be an http(s) URL"));
            }
        }

        failures
    }
}

#[async_trait]
impl<S: LinkStore> Directory for DirectoryService<S> {
    async fn list_all(&self) -> Result<Vec<AppLinkRecord>> {
        Ok(self.store.load_all().await?)
    }

    async fn upsert(&self, submission: AppLinkSubmission) -> Result<UpsertOutcome> {
        let failures = Self::constraint_failures(&submission);
        if !failures.is_empty() {
            return Err(DirectoryError::Validation(failures));
        }

        let mut records = self.store.load_all().await?;
        let existing = records.iter().position(|r| r.id == submission.id);

        let record = AppLinkRecord {
            // createdAt is write-once: carried forward on update, stamped
            // now on first creation.
            created_at: match existing {
                Some(index) => records[index].created_at,
                None => Timestamp::now(),
            },
            id: submission.id,
            name: submission.name,
            app_store_url: submission.app_store_url,
            play_store_url: submission.play_store_url,
            active: submission.active.unwrap_or(true),
        };

        let created = match existing {
            Some(index) => {
                records[index] = record.clone();
                false
            }
            None => {
                records.push(record.clone());
                true
            }
        };

        self.store.save_all(records).await?;
        debug!(id = %record.id, created, "upserted app link");
        Ok(UpsertOutcome { record, created })
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let records = self.store.load_all().await?;
        let before = records.len();

        let remaining: Vec<AppLinkRecord> =
            records.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == before {
            // Unknown id: do not rewrite the persisted state.
            return Err(DirectoryError::NotFound(id.to_string()));
        }

        self.store.save_all(remaining).await?;
        debug!(id, "removed app link");
        Ok(())
    }

    async fn find_active_by_id(&self, id: &str) -> Result<AppLinkRecord> {
        trace!(id, "resolving app link");

        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|r| r.id == id && r.active)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use applink_store::InMemoryLinkStore;

    fn service() -> DirectoryService<InMemoryLinkStore> {
        DirectoryService::new(InMemoryLinkStore::new())
    }

    fn submission(id: &str) -> AppLinkSubmission {
        AppLinkSubmission {
            id: id.to_string(),
            name: "Cat Game".to_string(),
            app_store_url: "https://apps.apple.com/x".to_string(),
            play_store_url: "https://play.google.com/x".to_string(),
            active: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_active_and_stamps_created_at() {
        let service = service();

        let outcome = service.upsert(submission("cat-game")).await.unwrap();
        assert!(outcome.created);
        assert!(outcome.record.active);

        let records = service.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], outcome.record);
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_position() {
        let service = service();
        service.upsert(submission("cat-game")).await.unwrap();
        let second = service.upsert(submission("undead-hunter")).await.unwrap();
        service.upsert(submission("sinir-puzzle")).await.unwrap();

        let mut changed = submission("undead-hunter");
        changed.name = "Undead Hunter 2".to_string();
        let outcome = service.upsert(changed).await.unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.record.created_at, second.record.created_at);

        let records = service.list_all().await.unwrap();
        assert_eq!(records.len(), 3);
        // In-place update keeps the record's position.
        assert_eq!(records[1].id, "undead-hunter");
        assert_eq!(records[1].name, "Undead Hunter 2");
    }

    #[tokio::test]
    async fn repeated_upsert_keeps_single_record() {
        let service = service();
        let first = service.upsert(submission("cat-game")).await.unwrap();

        let mut changed = submission("cat-game");
        changed.name = "Cat Game 2".to_string();
        service.upsert(changed).await.unwrap();

        let records = service.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Cat Game 2");
        assert_eq!(records[0].created_at, first.record.created_at);
    }

    #[tokio::test]
    async fn upsert_can_deactivate_and_reactivate() {
        let service = service();
        service.upsert(submission("cat-game")).await.unwrap();

        let mut inactive = submission("cat-game");
        inactive.active = Some(false);
        let outcome = service.upsert(inactive).await.unwrap();
        assert!(!outcome.record.active);

        let mut reactivated = submission("cat-game");
        reactivated.active = Some(true);
        let outcome = service.upsert(reactivated).await.unwrap();
        assert!(outcome.record.active);
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let service = service();

        let empty = AppLinkSubmission {
            id: String::new(),
            name: String::new(),
            app_store_url: String::new(),
            play_store_url: String::new(),
            active: None,
        };

        let err = service.upsert(empty).await.unwrap_err();
        let DirectoryError::Validation(failures) = err else {
            panic!("expected validation error");
        };
        assert_eq!(failures.len(), 4);
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_without_persisting() {
        let service = service();

        let mut bad = submission("cat-game");
        bad.app_store_url = "not-a-url".to_string();

        let err = service.upsert(bad).await.unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[test]
    fn scheme_alone_is_not_a_url() {
        assert!(!DirectoryService::<InMemoryLinkStore>::is_url_shaped("https://"));
        assert!(!DirectoryService::<InMemoryLinkStore>::is_url_shaped("ftp://x"));
        assert!(DirectoryService::<InMemoryLinkStore>::is_url_shaped("http://x"));
        assert!(DirectoryService::<InMemoryLinkStore>::is_url_shaped(
            "https://play.google.com/store/apps/details?id=com.example"
        ));
    }

    #[tokio::test]
    async fn remove_existing_record() {
        let service = service();
        service.upsert(submission("cat-game")).await.unwrap();

        service.remove("cat-game").await.unwrap();
        assert!(service.list_all().await.unwrap().is_empty());

        let err = service.find_active_by_id("cat-game").await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn removing_twice_reports_not_found_without_changes() {
        let service = service();
        service.upsert(submission("cat-game")).await.unwrap();
        service.upsert(submission("undead-hunter")).await.unwrap();
        service.remove("cat-game").await.unwrap();

        let err = service.remove("cat-game").await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));

        // The second call must not alter the persisted collection.
        let records = service.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "undead-hunter");
    }

    #[tokio::test]
    async fn inactive_records_are_invisible_to_public_lookup() {
        let service = service();
        let mut inactive = submission("cat-game");
        inactive.active = Some(false);
        service.upsert(inactive).await.unwrap();

        let err = service.find_active_by_id("cat-game").await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));

        // But the admin view still sees it.
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_active_by_id_returns_the_record() {
        let service = service();
        let outcome = service.upsert(submission("cat-game")).await.unwrap();

        let found = service.find_active_by_id("cat-game").await.unwrap();
        assert_eq!(found, outcome.record);
    }
}
