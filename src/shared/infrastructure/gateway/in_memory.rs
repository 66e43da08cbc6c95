// In memory implementation of the Gateway port.
//
// Purpose
// - Back use case tests and the demo mode without a database.
//
// Responsibilities
// - Keep every table in one lock so multi-row writes are atomic.
// - Enforce one submission per (request, submitter) at insert time.
// - Offer fault toggles (offline, slow creates, failing entry writes) for tests.

use crate::shared::core::primitives::DateTime;
use crate::shared::infrastructure::gateway::{
    EntryDraft, EntryId, EntryRecord, Gateway, NewEntryRecord, NewUserRecord, RequestId,
    RequestRecord, StorageError, SubmissionId, SubmissionRecord, UserId, UserRecord,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: Vec<UserRecord>,
    requests: Vec<RequestRecord>,
    submissions: Vec<SubmissionRecord>,
    entries: Vec<EntryRecord>,
}

impl Tables {
    fn has_submission(&self, request_id: RequestId, submitter_id: UserId) -> bool {
        self.submissions
            .iter()
            .any(|s| s.request_id == request_id && s.submitter_id == submitter_id)
    }

    fn insert_submission(&mut self, submitter_id: UserId, request_id: RequestId) -> SubmissionId {
        let id = self.submissions.len() as SubmissionId + 1;
        let now = DateTime::now().format();
        self.submissions.push(SubmissionRecord {
            id,
            request_id,
            submitter_id,
            created_at: now.clone(),
            updated_at: now,
        });
        id
    }

    fn insert_entries(&mut self, entries: Vec<NewEntryRecord>) -> Vec<EntryId> {
        let first = self.entries.len() as EntryId + 1;
        let mut ids = Vec::with_capacity(entries.len());
        for (offset, entry) in entries.into_iter().enumerate() {
            let id = first + offset as EntryId;
            self.entries.push(EntryRecord {
                id,
                submission_id: entry.submission_id,
                date: entry.date,
                hour: entry.hour,
            });
            ids.push(id);
        }
        ids
    }
}

#[derive(Default)]
pub struct InMemoryGateway {
    tables: RwLock<Tables>,
    offline: bool,
    delay_create_ms: AtomicU64,
    fail_next_entries: AtomicBool,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing rows. Later ids continue after the highest seeded id.
    pub fn with_records(users: Vec<UserRecord>, requests: Vec<RequestRecord>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                users,
                requests,
                ..Tables::default()
            }),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Sleeps before taking the write lock in `create_submission_with_entries`.
    pub fn set_delay_create_ms(&self, ms: u64) {
        self.delay_create_ms.store(ms, Ordering::SeqCst);
    }

    /// Makes the next entry write fail with a backend error.
    pub fn fail_next_entries(&self) {
        self.fail_next_entries.store(true, Ordering::SeqCst);
    }

    pub async fn submission_count(&self) -> usize {
        self.tables.read().await.submissions.len()
    }

    pub async fn entry_count(&self) -> usize {
        self.tables.read().await.entries.len()
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Backend("Gateway offline".into()));
        }
        Ok(())
    }

    fn take_entry_failure(&self) -> Result<(), StorageError> {
        if self.fail_next_entries.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Backend("entry write failed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn get_user_by_id(&self, id: UserId) -> Result<UserRecord, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("user", id))
    }

    async fn get_user_by_login_id(&self, login_id: &str) -> Result<UserRecord, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| u.login_id == login_id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("user", login_id))
    }

    async fn create_user(&self, user: NewUserRecord) -> Result<UserId, StorageError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.login_id == user.login_id) {
            return Err(StorageError::UniqueViolation(format!(
                "login_id {} already exists",
                user.login_id
            )));
        }
        let id = tables.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        tables.users.push(UserRecord {
            id,
            login_id: user.login_id,
            password_hash: user.password_hash,
            name: user.name,
            role: user.role,
            created_at: DateTime::now().format(),
        });
        Ok(id)
    }

    async fn get_requests(&self) -> Result<Vec<RequestRecord>, StorageError> {
        self.ensure_online()?;
        let mut requests = self.tables.read().await.requests.clone();
        requests.sort_by_key(|r| r.id);
        Ok(requests)
    }

    async fn get_request_by_id(&self, id: RequestId) -> Result<RequestRecord, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        tables
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("request", id))
    }

    async fn create_request(
        &self,
        creator_id: UserId,
        start_date: &str,
        end_date: &str,
        deadline: &str,
    ) -> Result<RequestId, StorageError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = tables.requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        tables.requests.push(RequestRecord {
            id,
            creator_id,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            deadline: deadline.to_string(),
            created_at: DateTime::now().format(),
        });
        Ok(id)
    }

    async fn get_submissions_by_request_id(
        &self,
        request_id: RequestId,
    ) -> Result<Vec<SubmissionRecord>, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .submissions
            .iter()
            .filter(|s| s.request_id == request_id)
            .cloned()
            .collect())
    }

    async fn get_submission_by_request_and_submitter(
        &self,
        request_id: RequestId,
        submitter_id: UserId,
    ) -> Result<Option<SubmissionRecord>, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .submissions
            .iter()
            .find(|s| s.request_id == request_id && s.submitter_id == submitter_id)
            .cloned())
    }

    async fn create_submission(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
    ) -> Result<SubmissionId, StorageError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.has_submission(request_id, submitter_id) {
            return Err(StorageError::UniqueViolation(format!(
                "submission for request {request_id} by user {submitter_id}"
            )));
        }
        Ok(tables.insert_submission(submitter_id, request_id))
    }

    async fn get_entries_by_submission_id(
        &self,
        submission_id: SubmissionId,
    ) -> Result<Vec<EntryRecord>, StorageError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .entries
            .iter()
            .filter(|e| e.submission_id == submission_id)
            .cloned()
            .collect())
    }

    async fn create_entries(
        &self,
        entries: Vec<NewEntryRecord>,
    ) -> Result<Vec<EntryId>, StorageError> {
        self.ensure_online()?;
        self.take_entry_failure()?;
        Ok(self.tables.write().await.insert_entries(entries))
    }

    async fn create_submission_with_entries(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
        entries: Vec<EntryDraft>,
    ) -> Result<SubmissionId, StorageError> {
        self.ensure_online()?;
        let delay = self.delay_create_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut tables = self.tables.write().await;
        if tables.has_submission(request_id, submitter_id) {
            return Err(StorageError::UniqueViolation(format!(
                "submission for request {request_id} by user {submitter_id}"
            )));
        }
        self.take_entry_failure()?;
        let submission_id = tables.insert_submission(submitter_id, request_id);
        let rows = entries
            .into_iter()
            .map(|draft| NewEntryRecord {
                submission_id,
                date: draft.date,
                hour: draft.hour,
            })
            .collect();
        tables.insert_entries(rows);
        Ok(submission_id)
    }
}

#[cfg(test)]
mod in_memory_gateway_tests {
    use super::*;
    use crate::tests::fixtures::records::{manager_record, request_record};
    use rstest::{fixture, rstest};

    #[fixture]
    fn gateway() -> InMemoryGateway {
        InMemoryGateway::with_records(
            vec![manager_record(2)],
            vec![request_record(1, 2, "2024-06-01", "2024-06-07")],
        )
    }

    fn draft(date: &str, hour: i64) -> EntryDraft {
        EntryDraft {
            date: date.into(),
            hour,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_request_ids_after_the_seeded_ones(gateway: InMemoryGateway) {
        let id = gateway
            .create_request(2, "2024-07-01", "2024-07-07", "2024-06-30 00:00:00")
            .await
            .expect("create failed");
        assert_eq!(id, 2);
        let stored = gateway.get_request_by_id(2).await.expect("load failed");
        assert_eq!(stored.start_date, "2024-07-01");
        assert_eq!(stored.deadline, "2024-06-30 00:00:00");
        assert!(DateTime::parse(&stored.created_at).is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_missing_rows_as_not_found(gateway: InMemoryGateway) {
        assert!(matches!(
            gateway.get_request_by_id(99).await,
            Err(StorageError::NotFound { entity: "request", .. })
        ));
        assert!(matches!(
            gateway.get_user_by_id(99).await,
            Err(StorageError::NotFound { entity: "user", .. })
        ));
        assert!(matches!(
            gateway.get_user_by_login_id("nobody").await,
            Err(StorageError::NotFound { entity: "user", .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_when_no_submission_exists(gateway: InMemoryGateway) {
        let found = gateway
            .get_submission_by_request_and_submitter(1, 1)
            .await
            .expect("lookup failed");
        assert_eq!(found, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_a_submission_with_sequential_entry_ids(gateway: InMemoryGateway) {
        let submission_id = gateway
            .create_submission_with_entries(
                1,
                1,
                vec![draft("2024-06-01", 9), draft("2024-06-02", 10)],
            )
            .await
            .expect("create failed");
        assert_eq!(submission_id, 1);

        let entries = gateway
            .get_entries_by_submission_id(submission_id)
            .await
            .expect("load failed");
        assert_eq!(
            entries,
            vec![
                EntryRecord {
                    id: 1,
                    submission_id: 1,
                    date: "2024-06-01".into(),
                    hour: 9
                },
                EntryRecord {
                    id: 2,
                    submission_id: 1,
                    date: "2024-06-02".into(),
                    hour: 10
                },
            ]
        );
    }

    fn row(submission_id: SubmissionId, date: &str, hour: i64) -> NewEntryRecord {
        NewEntryRecord {
            submission_id,
            date: date.into(),
            hour,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_number_batched_entries_in_input_order(gateway: InMemoryGateway) {
        let submission_id = gateway.create_submission(1, 1).await.expect("create failed");
        let first = gateway
            .create_entries(vec![row(submission_id, "2024-06-03", 8)])
            .await
            .expect("first batch failed");
        assert_eq!(first, vec![1]);

        let ids = gateway
            .create_entries(vec![
                row(submission_id, "2024-06-05", 17),
                row(submission_id, "2024-06-04", 0),
                row(submission_id, "2024-06-04", 23),
            ])
            .await
            .expect("second batch failed");
        assert_eq!(ids, vec![2, 3, 4]);

        let stored = gateway
            .get_entries_by_submission_id(submission_id)
            .await
            .expect("load failed");
        let by_id: Vec<_> = stored
            .iter()
            .map(|e| (e.id, e.date.as_str(), e.hour))
            .collect();
        assert_eq!(
            by_id,
            vec![
                (1, "2024-06-03", 8),
                (2, "2024-06-05", 17),
                (3, "2024-06-04", 0),
                (4, "2024-06-04", 23),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_a_batched_entry_write_once(gateway: InMemoryGateway) {
        let submission_id = gateway.create_submission(1, 1).await.expect("create failed");
        gateway.fail_next_entries();
        let failed = gateway
            .create_entries(vec![row(submission_id, "2024-06-01", 9)])
            .await;
        assert!(matches!(failed, Err(StorageError::Backend(_))));
        assert_eq!(gateway.entry_count().await, 0);

        let retried = gateway
            .create_entries(vec![row(submission_id, "2024-06-01", 9)])
            .await
            .expect("retry failed");
        assert_eq!(retried, vec![1]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_submission_for_the_same_pair(gateway: InMemoryGateway) {
        gateway.create_submission(1, 1).await.expect("first failed");
        let second = gateway.create_submission(1, 1).await;
        assert!(matches!(second, Err(StorageError::UniqueViolation(_))));
        let batched = gateway.create_submission_with_entries(1, 1, vec![]).await;
        assert!(matches!(batched, Err(StorageError::UniqueViolation(_))));
        assert_eq!(gateway.submission_count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_nothing_when_the_entry_write_fails(gateway: InMemoryGateway) {
        gateway.fail_next_entries();
        let result = gateway
            .create_submission_with_entries(1, 1, vec![draft("2024-06-01", 9)])
            .await;
        assert!(matches!(result, Err(StorageError::Backend(_))));
        assert_eq!(gateway.submission_count().await, 0);
        assert_eq!(gateway.entry_count().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_when_offline(gateway: InMemoryGateway) {
        let mut gateway = gateway;
        gateway.toggle_offline();
        assert!(matches!(
            gateway.get_requests().await,
            Err(StorageError::Backend(ref m)) if m == "Gateway offline"
        ));
        assert!(gateway.get_user_by_id(2).await.is_err());
        gateway.toggle_offline();
        assert_eq!(gateway.get_requests().await.expect("online again").len(), 1);
    }
}
