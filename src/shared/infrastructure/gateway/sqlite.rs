// SQLite implementation of the Gateway port.
//
// Purpose
// - Durable storage for the server.
//
// Responsibilities
// - Create the schema on start.
// - Map rows to records and sqlx failures to StorageError.
// - Write a submission and its entries in one transaction.

use crate::shared::infrastructure::gateway::{
    EntryDraft, EntryId, EntryRecord, Gateway, NewEntryRecord, NewUserRecord, RequestId,
    RequestRecord, StorageError, SubmissionId, SubmissionRecord, UserId, UserRecord,
};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool};
use std::str::FromStr;

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        login_id TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        name TEXT NOT NULL,
        role INTEGER NOT NULL CHECK (role >= 0),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS requests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        creator_id INTEGER NOT NULL REFERENCES users (id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        deadline TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS submissions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        request_id INTEGER NOT NULL REFERENCES requests (id) ON DELETE CASCADE,
        submitter_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        updated_at TEXT NOT NULL DEFAULT (datetime('now')),
        UNIQUE (request_id, submitter_id)
    )",
    "CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        submission_id INTEGER NOT NULL REFERENCES submissions (id) ON DELETE CASCADE,
        date TEXT NOT NULL,
        hour INTEGER NOT NULL CHECK (hour BETWEEN 0 AND 23)
    )",
];

const USER_COLUMNS: &str = "id, login_id, password_hash, name, role, created_at";
const REQUEST_COLUMNS: &str = "id, creator_id, start_date, end_date, deadline, created_at";
const SUBMISSION_COLUMNS: &str = "id, request_id, submitter_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteGateway {
    pool: SqlitePool,
}

impl SqliteGateway {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;
        let gateway = Self { pool };
        gateway.migrate().await?;
        tracing::info!(url, "sqlite gateway ready");
        Ok(gateway)
    }

    /// A private in-memory database. A single connection that never expires
    /// keeps the data alive for the lifetime of the pool.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(map_sqlx_error)?
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;
        let gateway = Self { pool };
        gateway.migrate().await?;
        Ok(gateway)
    }

    async fn migrate(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        }
        Ok(())
    }
}

fn map_sqlx_error(error: sqlx::Error) -> StorageError {
    match error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::UniqueViolation(db.message().to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
            StorageError::Corrupt(error.to_string())
        }
        other => StorageError::Backend(other.to_string()),
    }
}

fn user_from_row(row: &SqliteRow) -> Result<UserRecord, sqlx::Error> {
    Ok(UserRecord {
        id: row.try_get("id")?,
        login_id: row.try_get("login_id")?,
        password_hash: row.try_get("password_hash")?,
        name: row.try_get("name")?,
        role: row.try_get("role")?,
        created_at: row.try_get("created_at")?,
    })
}

fn request_from_row(row: &SqliteRow) -> Result<RequestRecord, sqlx::Error> {
    Ok(RequestRecord {
        id: row.try_get("id")?,
        creator_id: row.try_get("creator_id")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        deadline: row.try_get("deadline")?,
        created_at: row.try_get("created_at")?,
    })
}

fn submission_from_row(row: &SqliteRow) -> Result<SubmissionRecord, sqlx::Error> {
    Ok(SubmissionRecord {
        id: row.try_get("id")?,
        request_id: row.try_get("request_id")?,
        submitter_id: row.try_get("submitter_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn entry_from_row(row: &SqliteRow) -> Result<EntryRecord, sqlx::Error> {
    Ok(EntryRecord {
        id: row.try_get("id")?,
        submission_id: row.try_get("submission_id")?,
        date: row.try_get("date")?,
        hour: row.try_get("hour")?,
    })
}

async fn insert_submission(
    conn: &mut SqliteConnection,
    submitter_id: UserId,
    request_id: RequestId,
) -> Result<SubmissionId, sqlx::Error> {
    let result = sqlx::query("INSERT INTO submissions (request_id, submitter_id) VALUES (?, ?)")
        .bind(request_id)
        .bind(submitter_id)
        .execute(conn)
        .await?;
    Ok(result.last_insert_rowid())
}

async fn insert_entry(
    conn: &mut SqliteConnection,
    submission_id: SubmissionId,
    date: &str,
    hour: i64,
) -> Result<EntryId, sqlx::Error> {
    let result = sqlx::query("INSERT INTO entries (submission_id, date, hour) VALUES (?, ?, ?)")
        .bind(submission_id)
        .bind(date)
        .bind(hour)
        .execute(conn)
        .await?;
    Ok(result.last_insert_rowid())
}

#[async_trait]
impl Gateway for SqliteGateway {
    async fn get_user_by_id(&self, id: UserId) -> Result<UserRecord, StorageError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StorageError::not_found("user", id))?;
        user_from_row(&row).map_err(map_sqlx_error)
    }

    async fn get_user_by_login_id(&self, login_id: &str) -> Result<UserRecord, StorageError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE login_id = ?"))
            .bind(login_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StorageError::not_found("user", login_id))?;
        user_from_row(&row).map_err(map_sqlx_error)
    }

    async fn create_user(&self, user: NewUserRecord) -> Result<UserId, StorageError> {
        let result = sqlx::query(
            "INSERT INTO users (login_id, password_hash, name, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.login_id)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(result.last_insert_rowid())
    }

    async fn get_requests(&self) -> Result<Vec<RequestRecord>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {REQUEST_COLUMNS} FROM requests ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        rows.iter()
            .map(request_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_error)
    }

    async fn get_request_by_id(&self, id: RequestId) -> Result<RequestRecord, StorageError> {
        let row = sqlx::query(&format!("SELECT {REQUEST_COLUMNS} FROM requests WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StorageError::not_found("request", id))?;
        request_from_row(&row).map_err(map_sqlx_error)
    }

    async fn create_request(
        &self,
        creator_id: UserId,
        start_date: &str,
        end_date: &str,
        deadline: &str,
    ) -> Result<RequestId, StorageError> {
        let result = sqlx::query(
            "INSERT INTO requests (creator_id, start_date, end_date, deadline) VALUES (?, ?, ?, ?)",
        )
        .bind(creator_id)
        .bind(start_date)
        .bind(end_date)
        .bind(deadline)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(result.last_insert_rowid())
    }

    async fn get_submissions_by_request_id(
        &self,
        request_id: RequestId,
    ) -> Result<Vec<SubmissionRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE request_id = ? ORDER BY id"
        ))
        .bind(request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        rows.iter()
            .map(submission_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_error)
    }

    async fn get_submission_by_request_and_submitter(
        &self,
        request_id: RequestId,
        submitter_id: UserId,
    ) -> Result<Option<SubmissionRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE request_id = ? AND submitter_id = ?"
        ))
        .bind(request_id)
        .bind(submitter_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        row.as_ref()
            .map(submission_from_row)
            .transpose()
            .map_err(map_sqlx_error)
    }

    async fn create_submission(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
    ) -> Result<SubmissionId, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
        insert_submission(&mut conn, submitter_id, request_id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn get_entries_by_submission_id(
        &self,
        submission_id: SubmissionId,
    ) -> Result<Vec<EntryRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, submission_id, date, hour FROM entries WHERE submission_id = ? ORDER BY id",
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        rows.iter()
            .map(entry_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_error)
    }

    async fn create_entries(
        &self,
        entries: Vec<NewEntryRecord>,
    ) -> Result<Vec<EntryId>, StorageError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let mut ids = Vec::with_capacity(entries.len());
        for entry in &entries {
            let id = insert_entry(&mut tx, entry.submission_id, &entry.date, entry.hour)
                .await
                .map_err(map_sqlx_error)?;
            ids.push(id);
        }
        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(ids)
    }

    async fn create_submission_with_entries(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
        entries: Vec<EntryDraft>,
    ) -> Result<SubmissionId, StorageError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let submission_id = insert_submission(&mut tx, submitter_id, request_id)
            .await
            .map_err(map_sqlx_error)?;
        for draft in &entries {
            insert_entry(&mut tx, submission_id, &draft.date, draft.hour)
                .await
                .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(submission_id)
    }
}
