//! SQLite-backed persistence.
//!
//! Provides durable storage for:
//! - Tasks and their lifecycle status
//! - Check-in snapshots (append-only, latest wins)
//! - Memory tracking records for spaced revision
//! - A key-value store holding the additive XP ledger

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::checkin::CheckinTracker;
use crate::error::{DatabaseError, RewardError};
use crate::memory::MemoryRecord;
use crate::reward::Priority;
use crate::task::{Task, TaskStatus};

use super::data_dir;

/// Key under which the XP ledger lives in the kv store.
const TOTAL_XP_KEY: &str = "total_xp";

const DATE_FORMAT: &str = "%Y-%m-%d";

const TASK_COLUMNS: &str = "id, title, description, subject_name, priority, estimated_minutes, \
                            status, xp_reward, show_on_quest_board, is_high_cognitive_load, created_at";

const CHECKIN_COLUMNS: &str = "id, csi, mode, burnout_score, reroute_strategy, task_reduction, \
                               temporary_csi_boost, daily_quest_streak, recorded_at";

const MEMORY_COLUMNS: &str = "id, topic, revision_count, retention_score, decay_constant, \
                              last_revision_date, next_revision_date";

/// A persisted check-in snapshot.
///
/// Check-ins are append-only; the newest row is the current tracker state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub id: i64,
    #[serde(flatten)]
    pub state: CheckinTracker,
    pub recorded_at: DateTime<Utc>,
}

/// SQLite database for player progress.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data dir>/studyquest.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> crate::Result<Self> {
        let path = data_dir()?.join("studyquest.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the database at an explicit path, creating the schema if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|e| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory().map_err(|e| DatabaseError::OpenFailed {
            path: ":memory:".into(),
            source: e,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id          TEXT PRIMARY KEY,
                    title       TEXT NOT NULL,
                    description TEXT,
                    subject_name TEXT NOT NULL,
                    priority    TEXT NOT NULL,
                    estimated_minutes INTEGER,
                    status      TEXT NOT NULL,
                    xp_reward   INTEGER NOT NULL,
                    show_on_quest_board INTEGER NOT NULL DEFAULT 0,
                    is_high_cognitive_load INTEGER NOT NULL DEFAULT 0,
                    created_at  TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS checkins (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    csi         INTEGER,
                    mode        TEXT,
                    burnout_score INTEGER,
                    reroute_strategy TEXT,
                    task_reduction INTEGER,
                    temporary_csi_boost INTEGER NOT NULL DEFAULT 0,
                    daily_quest_streak INTEGER NOT NULL DEFAULT 0,
                    recorded_at TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS memory_tracking (
                    id          TEXT PRIMARY KEY,
                    topic       TEXT NOT NULL UNIQUE,
                    revision_count INTEGER NOT NULL,
                    retention_score INTEGER NOT NULL,
                    decay_constant REAL NOT NULL,
                    last_revision_date TEXT NOT NULL,
                    next_revision_date TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                -- Create indexes for common query patterns
                CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
                CREATE INDEX IF NOT EXISTS idx_tasks_quest_board ON tasks(show_on_quest_board);
                CREATE INDEX IF NOT EXISTS idx_memory_next_revision ON memory_tracking(next_revision_date);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    // ---- tasks ----

    /// Insert a new task.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_task(&self, task: &Task) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, subject_name, priority, estimated_minutes,
                                status, xp_reward, show_on_quest_board, is_high_cognitive_load, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                task.id,
                task.title,
                task.description,
                task.subject_name,
                task.priority.as_str(),
                task.estimated_minutes,
                task.status.as_str(),
                task.xp_reward,
                task.show_on_quest_board,
                task.is_high_cognitive_load,
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// All tasks in creation order.
    pub fn list_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at, rowid"
        ))?;
        let rows = stmt.query_map([], row_to_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Tasks with a given status, in creation order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE status = ?1 ORDER BY created_at, rowid"
        ))?;
        let rows = stmt.query_map(params![status.as_str()], row_to_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Tasks flagged for the quest board, in creation order.
    pub fn quest_board_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE show_on_quest_board = 1
             ORDER BY created_at, rowid"
        ))?;
        let rows = stmt.query_map([], row_to_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Fetch a single task by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no task has that id.
    pub fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        match stmt.query_row(params![id], row_to_task) {
            Ok(task) => Ok(task),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(DatabaseError::NotFound {
                entity: "task".to_string(),
                id: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Change the status of a task.
    ///
    /// # Errors
    /// Returns `NotFound` if no task has that id.
    pub fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<(), DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Delete a task.
    ///
    /// # Errors
    /// Returns `NotFound` if no task has that id.
    pub fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Mark a task completed and credit its frozen XP reward to the ledger.
    ///
    /// Completing an already-completed task awards nothing, so a replayed
    /// command cannot inflate the total. Returns the XP awarded.
    ///
    /// # Errors
    /// Returns `NotFound` if no task has that id.
    pub fn complete_task(&self, id: &str) -> Result<u32, DatabaseError> {
        let task = self.get_task(id)?;
        if task.status.is_completed() {
            return Ok(0);
        }
        self.update_task_status(id, TaskStatus::Completed)?;
        self.add_xp(task.xp_reward)?;
        Ok(task.xp_reward)
    }

    // ---- XP ledger ----

    /// Current XP total from the ledger. A missing key reads as zero.
    ///
    /// # Errors
    /// Returns an error if the stored value is not an integer.
    pub fn total_xp(&self) -> Result<i64, DatabaseError> {
        match self.kv_get(TOTAL_XP_KEY)? {
            Some(raw) => raw.parse().map_err(|_| {
                DatabaseError::QueryFailed(format!("corrupt XP ledger value: '{raw}'"))
            }),
            None => Ok(0),
        }
    }

    /// Add earned XP to the ledger and return the new total.
    ///
    /// The ledger is additive only; rewards are never clawed back.
    pub fn add_xp(&self, earned: u32) -> Result<i64, DatabaseError> {
        let total = self.total_xp()? + i64::from(earned);
        self.kv_set(TOTAL_XP_KEY, &total.to_string())?;
        Ok(total)
    }

    /// Overwrite the ledger with a total restored from a profile import.
    ///
    /// This is the one path that bypasses the additive rule; callers must
    /// validate the total first.
    pub fn import_xp(&self, total_xp: i64) -> Result<(), DatabaseError> {
        self.kv_set(TOTAL_XP_KEY, &total_xp.to_string())
    }

    // ---- check-ins ----

    /// Append a check-in snapshot. Returns its row id.
    pub fn insert_checkin(
        &self,
        state: &CheckinTracker,
        recorded_at: DateTime<Utc>,
    ) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO checkins (csi, mode, burnout_score, reroute_strategy, task_reduction,
                                   temporary_csi_boost, daily_quest_streak, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                state.csi,
                state.mode,
                state.burnout_score,
                state.reroute_strategy,
                state.task_reduction,
                state.temporary_csi_boost,
                state.daily_quest_streak,
                recorded_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The most recent check-in snapshot, if any.
    pub fn latest_checkin(&self) -> Result<Option<CheckinRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHECKIN_COLUMNS} FROM checkins ORDER BY id DESC LIMIT 1"
        ))?;
        match stmt.query_row([], row_to_checkin) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Check-in snapshots, newest first.
    pub fn checkin_history(&self, limit: u32) -> Result<Vec<CheckinRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHECKIN_COLUMNS} FROM checkins ORDER BY id DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit], row_to_checkin)?;
        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    // ---- memory tracking ----

    /// Insert or update a memory record, keyed by topic.
    ///
    /// A record that already exists for the topic keeps its row id.
    pub fn upsert_memory_record(&self, record: &MemoryRecord) -> Result<(), DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE memory_tracking SET
                 revision_count = ?2,
                 retention_score = ?3,
                 decay_constant = ?4,
                 last_revision_date = ?5,
                 next_revision_date = ?6
             WHERE topic = ?1",
            params![
                record.topic,
                record.revision_count,
                record.retention_score,
                record.decay_constant,
                record.last_revision_date.format(DATE_FORMAT).to_string(),
                record.next_revision_date.format(DATE_FORMAT).to_string(),
            ],
        )?;
        if changed == 0 {
            self.conn.execute(
                "INSERT INTO memory_tracking (id, topic, revision_count, retention_score,
                                              decay_constant, last_revision_date, next_revision_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.topic,
                    record.revision_count,
                    record.retention_score,
                    record.decay_constant,
                    record.last_revision_date.format(DATE_FORMAT).to_string(),
                    record.next_revision_date.format(DATE_FORMAT).to_string(),
                ],
            )?;
        }
        Ok(())
    }

    /// Fetch the memory record for a topic, if one exists.
    pub fn memory_record(&self, topic: &str) -> Result<Option<MemoryRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEMORY_COLUMNS} FROM memory_tracking WHERE topic = ?1"
        ))?;
        match stmt.query_row(params![topic], row_to_memory_record) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All memory records ordered by next revision date.
    pub fn list_memory_records(&self) -> Result<Vec<MemoryRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEMORY_COLUMNS} FROM memory_tracking ORDER BY next_revision_date, topic"
        ))?;
        let rows = stmt.query_map([], row_to_memory_record)?;
        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    // ---- key-value store ----

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let priority_raw: String = row.get(4)?;
    let priority = priority_raw.parse::<Priority>().map_err(|e: RewardError| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
    })?;
    // Unknown status labels fold to Pending at the read boundary.
    let status_raw: String = row.get(6)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        subject_name: row.get(3)?,
        priority,
        estimated_minutes: row.get(5)?,
        status: TaskStatus::normalize(&status_raw),
        xp_reward: row.get(7)?,
        show_on_quest_board: row.get(8)?,
        is_high_cognitive_load: row.get(9)?,
        created_at: timestamp_column(row, 10)?,
    })
}

fn row_to_checkin(row: &Row<'_>) -> rusqlite::Result<CheckinRecord> {
    Ok(CheckinRecord {
        id: row.get(0)?,
        state: CheckinTracker {
            csi: row.get(1)?,
            mode: row.get(2)?,
            burnout_score: row.get(3)?,
            reroute_strategy: row.get(4)?,
            task_reduction: row.get(5)?,
            temporary_csi_boost: row.get(6)?,
            daily_quest_streak: row.get(7)?,
        },
        recorded_at: timestamp_column(row, 8)?,
    })
}

fn row_to_memory_record(row: &Row<'_>) -> rusqlite::Result<MemoryRecord> {
    Ok(MemoryRecord {
        id: row.get(0)?,
        topic: row.get(1)?,
        revision_count: row.get(2)?,
        retention_score: row.get(3)?,
        decay_constant: row.get(4)?,
        last_revision_date: date_column(row, 5)?,
        next_revision_date: date_column(row, 6)?,
    })
}

fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(index)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn date_column(row: &Row<'_>, index: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(index)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::record_review;

    fn make_task(title: &str, xp: u32) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: None,
            subject_name: "Physics".to_string(),
            priority: Priority::High,
            estimated_minutes: Some(45),
            status: TaskStatus::Pending,
            xp_reward: xp,
            show_on_quest_board: true,
            is_high_cognitive_load: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_list_tasks() {
        let db = Database::open_memory().unwrap();
        let first = make_task("Optics numericals", 1000);
        let second = make_task("History notes", 250);
        db.insert_task(&first).unwrap();
        db.insert_task(&second).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Optics numericals");
        assert_eq!(tasks[1].title, "History notes");
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].estimated_minutes, Some(45));
    }

    #[test]
    fn get_task_reports_missing_id() {
        let db = Database::open_memory().unwrap();
        let err = db.get_task("nope").unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn status_filters_and_updates() {
        let db = Database::open_memory().unwrap();
        let task = make_task("Revise algebra", 500);
        db.insert_task(&task).unwrap();

        db.update_task_status(&task.id, TaskStatus::InProgress)
            .unwrap();
        let in_progress = db.tasks_with_status(TaskStatus::InProgress).unwrap();
        assert_eq!(in_progress.len(), 1);
        assert!(db.tasks_with_status(TaskStatus::Pending).unwrap().is_empty());

        let err = db
            .update_task_status("missing", TaskStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn unknown_status_label_reads_back_as_pending() {
        let db = Database::open_memory().unwrap();
        let task = make_task("Old import", 250);
        db.insert_task(&task).unwrap();
        db.conn()
            .execute(
                "UPDATE tasks SET status = 'someday-maybe' WHERE id = ?1",
                params![task.id],
            )
            .unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Pending);
    }

    #[test]
    fn complete_task_awards_xp_exactly_once() {
        let db = Database::open_memory().unwrap();
        let task = make_task("Thermodynamics recap", 1000);
        db.insert_task(&task).unwrap();

        assert_eq!(db.complete_task(&task.id).unwrap(), 1000);
        assert_eq!(db.total_xp().unwrap(), 1000);
        assert_eq!(db.get_task(&task.id).unwrap().status, TaskStatus::Completed);

        // Replaying the command must not double-award.
        assert_eq!(db.complete_task(&task.id).unwrap(), 0);
        assert_eq!(db.total_xp().unwrap(), 1000);
    }

    #[test]
    fn xp_ledger_accumulates() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.total_xp().unwrap(), 0);
        assert_eq!(db.add_xp(500).unwrap(), 500);
        assert_eq!(db.add_xp(250).unwrap(), 750);
        assert_eq!(db.total_xp().unwrap(), 750);
    }

    #[test]
    fn corrupt_xp_ledger_is_an_error() {
        let db = Database::open_memory().unwrap();
        db.kv_set("total_xp", "not-a-number").unwrap();
        assert!(db.total_xp().is_err());
    }

    #[test]
    fn delete_task_removes_the_row() {
        let db = Database::open_memory().unwrap();
        let task = make_task("Scratch", 250);
        db.insert_task(&task).unwrap();
        db.delete_task(&task.id).unwrap();
        assert!(db.list_tasks().unwrap().is_empty());
        assert!(matches!(
            db.delete_task(&task.id).unwrap_err(),
            DatabaseError::NotFound { .. }
        ));
    }

    #[test]
    fn quest_board_filter_only_returns_flagged_tasks() {
        let db = Database::open_memory().unwrap();
        let mut hidden = make_task("Background reading", 250);
        hidden.show_on_quest_board = false;
        let visible = make_task("Mock test", 1500);
        db.insert_task(&hidden).unwrap();
        db.insert_task(&visible).unwrap();

        let board = db.quest_board_tasks().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].title, "Mock test");
    }

    #[test]
    fn checkin_snapshots_append_and_latest_wins() {
        let db = Database::open_memory().unwrap();
        assert!(db.latest_checkin().unwrap().is_none());

        let mut tracker = CheckinTracker::new();
        tracker.csi = Some(40);
        tracker.mode = Some("Stable".to_string());
        db.insert_checkin(&tracker, Utc::now()).unwrap();

        tracker.apply_quest_boost();
        db.insert_checkin(&tracker, Utc::now()).unwrap();

        let latest = db.latest_checkin().unwrap().unwrap();
        assert_eq!(latest.state.temporary_csi_boost, 5);
        assert_eq!(latest.state.daily_quest_streak, 1);

        let history = db.checkin_history(10).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, latest.id);
        assert_eq!(history[1].state.temporary_csi_boost, 0);
    }

    #[test]
    fn memory_records_upsert_by_topic() {
        let db = Database::open_memory().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let first = record_review(None, "Integration by parts", today);
        db.upsert_memory_record(&first).unwrap();

        let stored = db.memory_record("Integration by parts").unwrap().unwrap();
        assert_eq!(stored.revision_count, 1);
        assert_eq!(stored.retention_score, 60);

        let next_day = today.succ_opt().unwrap();
        let second = record_review(Some(stored), "Integration by parts", next_day);
        db.upsert_memory_record(&second).unwrap();

        let records = db.list_memory_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].revision_count, 2);
        assert_eq!(records[0].retention_score, 65);
        assert_eq!(records[0].id, first.id);

        // Even a record built without the stored row keeps the original id.
        let fresh = record_review(None, "Integration by parts", next_day);
        assert_ne!(fresh.id, first.id);
        db.upsert_memory_record(&fresh).unwrap();
        let kept = db.memory_record("Integration by parts").unwrap().unwrap();
        assert_eq!(kept.id, first.id);
        assert_eq!(kept.revision_count, 1);
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }
}
