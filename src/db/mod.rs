//! Database module - SQLite storage for workout requests and generated plans

use anyhow::{Context, Result, bail};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

use crate::exercises::MuscleGroup;
use crate::params::{Goal, WorkoutParameters, WorkoutType};

/// Stored request
#[derive(Debug, Clone)]
pub struct WorkoutRequest {
    pub id: i64,
    pub parameters: WorkoutParameters,
    pub timestamp: DateTime<Utc>,
}

/// Generated plan with a copy of its request parameters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutHistory {
    pub id: i64,
    pub request_id: i64,
    pub content: String,
    pub is_demo: bool,
    pub timestamp: DateTime<Utc>,
    pub parameters: WorkoutParameters,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database (`:memory:` for a throwaway one)
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;
            CREATE TABLE IF NOT EXISTS workout_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                muscle_groups TEXT NOT NULL,
                intensity INTEGER NOT NULL,
                workout_type TEXT NOT NULL,
                goal TEXT NOT NULL,
                duration TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS workout_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                request_id INTEGER NOT NULL REFERENCES workout_requests(id),
                content TEXT NOT NULL,
                is_demo INTEGER NOT NULL DEFAULT 0,
                timestamp TEXT NOT NULL,
                muscle_groups TEXT NOT NULL,
                intensity INTEGER NOT NULL,
                workout_type TEXT NOT NULL,
                goal TEXT NOT NULL,
                duration TEXT NOT NULL
            );",
        )?;

        // Migration: files created before is_demo existed
        let has_is_demo: bool = self.conn
            .prepare("SELECT is_demo FROM workout_history LIMIT 1")
            .is_ok();
        if !has_is_demo {
            self.conn.execute(
                "ALTER TABLE workout_history ADD COLUMN is_demo INTEGER NOT NULL DEFAULT 0",
                [],
            )?;
        }

        Ok(())
    }

    /// Record an incoming request
    pub fn create_request(&self, parameters: &WorkoutParameters) -> Result<WorkoutRequest> {
        let timestamp = Utc::now();
        self.conn.execute(
            "INSERT INTO workout_requests (muscle_groups, intensity, workout_type, goal, duration, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                serde_json::to_string(&parameters.muscle_groups)?,
                parameters.intensity,
                parameters.workout_type.key(),
                parameters.goal.key(),
                parameters.duration,
                stamp(&timestamp),
            ],
        )?;
        Ok(WorkoutRequest {
            id: self.conn.last_insert_rowid(),
            parameters: parameters.clone(),
            timestamp,
        })
    }

    pub fn get_request(&self, id: i64) -> Result<Option<WorkoutRequest>> {
        let request = self.conn
            .query_row(
                "SELECT id, muscle_groups, intensity, workout_type, goal, duration, timestamp FROM workout_requests WHERE id = ?1",
                params![id],
                |row| Ok((row.get::<_, i64>(0)?, read_parameters(row, 1)?, row.get::<_, String>(6)?)),
            )
            .optional()?;

        request
            .map(|(id, parameters, timestamp)| -> Result<WorkoutRequest> {
                Ok(WorkoutRequest {
                    id,
                    parameters: parameters?,
                    timestamp: parse_timestamp(&timestamp)?,
                })
            })
            .transpose()
    }

    /// Attach generated content to a stored request
    pub fn save_content(&self, request_id: i64, content: &str, is_demo: bool) -> Result<WorkoutHistory> {
        let Some(request) = self.get_request(request_id)? else {
            bail!("Workout request with ID {} not found", request_id);
        };

        let timestamp = Utc::now();
        let p = &request.parameters;
        self.conn.execute(
            "INSERT INTO workout_history (request_id, content, is_demo, timestamp, muscle_groups, intensity, workout_type, goal, duration) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                request_id,
                content,
                is_demo,
                stamp(&timestamp),
                serde_json::to_string(&p.muscle_groups)?,
                p.intensity,
                p.workout_type.key(),
                p.goal.key(),
                p.duration,
            ],
        )?;

        Ok(WorkoutHistory {
            id: self.conn.last_insert_rowid(),
            request_id,
            content: content.to_string(),
            is_demo,
            timestamp,
            parameters: request.parameters,
        })
    }

    /// Generated workouts, newest first
    pub fn get_history(&self) -> Result<Vec<WorkoutHistory>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, request_id, content, is_demo, timestamp, muscle_groups, intensity, workout_type, goal, duration FROM workout_history ORDER BY timestamp DESC, id DESC"
        )?;

        let rows = stmt.query_map([], |row| {
            let timestamp: String = row.get(4)?;
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                timestamp,
                read_parameters(row, 5)?,
            ))
        })?;

        let mut history = Vec::new();
        for row in rows {
            let (id, request_id, content, is_demo, timestamp, parameters) = row?;
            history.push(WorkoutHistory {
                id,
                request_id,
                content,
                is_demo,
                timestamp: parse_timestamp(&timestamp)?,
                parameters: parameters?,
            });
        }
        Ok(history)
    }
}

/// Fixed-width so text ordering matches time ordering
fn stamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("invalid stored timestamp {:?}", s))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Parameters from five consecutive columns starting at `first`.
/// The outer result is the SQLite read, the inner one the key decoding.
fn read_parameters(row: &Row<'_>, first: usize) -> rusqlite::Result<Result<WorkoutParameters>> {
    let groups: String = row.get(first)?;
    let intensity: u8 = row.get(first + 1)?;
    let workout_type: String = row.get(first + 2)?;
    let goal: String = row.get(first + 3)?;
    let duration: String = row.get(first + 4)?;

    Ok(decode_parameters(&groups, intensity, &workout_type, &goal, duration))
}

fn decode_parameters(
    groups: &str,
    intensity: u8,
    workout_type: &str,
    goal: &str,
    duration: String,
) -> Result<WorkoutParameters> {
    let muscle_groups: Vec<MuscleGroup> =
        serde_json::from_str(groups).context("invalid stored muscle groups")?;
    let workout_type = WorkoutType::from_key(workout_type)
        .with_context(|| format!("unknown stored workout type {}", workout_type))?;
    let goal = Goal::from_key(goal).with_context(|| format!("unknown stored goal {}", goal))?;
    Ok(WorkoutParameters {
        muscle_groups,
        intensity,
        workout_type,
        goal,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(groups: Vec<MuscleGroup>, goal: Goal) -> WorkoutParameters {
        WorkoutParameters {
            muscle_groups: groups,
            intensity: 2,
            workout_type: WorkoutType::Circuit,
            goal,
            duration: "45".to_string(),
        }
    }

    #[test]
    fn test_create_and_get_request() {
        let db = Database::open(":memory:").unwrap();
        let p = params(vec![MuscleGroup::Back, MuscleGroup::Core], Goal::Endurance);
        let req = db.create_request(&p).unwrap();
        assert_eq!(req.id, 1);

        let loaded = db.get_request(req.id).unwrap().unwrap();
        assert_eq!(loaded.parameters, p);
        assert!(db.get_request(99).unwrap().is_none());
    }

    #[test]
    fn test_save_content_copies_parameters() {
        let db = Database::open(":memory:").unwrap();
        let p = params(vec![MuscleGroup::Legs], Goal::Strength);
        let req = db.create_request(&p).unwrap();

        let saved = db.save_content(req.id, "<h3>Plan</h3>", true).unwrap();
        assert_eq!(saved.request_id, req.id);
        assert!(saved.is_demo);
        assert_eq!(saved.parameters, p);
    }

    #[test]
    fn test_save_content_unknown_request() {
        let db = Database::open(":memory:").unwrap();
        let err = db.save_content(42, "x", false).unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_history_newest_first() {
        let db = Database::open(":memory:").unwrap();
        let first = db.create_request(&params(vec![MuscleGroup::Chest], Goal::Toning)).unwrap();
        let second = db.create_request(&params(vec![MuscleGroup::Arms], Goal::MuscleBuild)).unwrap();
        db.save_content(first.id, "first", false).unwrap();
        db.save_content(second.id, "second", true).unwrap();

        let history = db.get_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "second");
        assert_eq!(history[0].parameters.goal, Goal::MuscleBuild);
        assert!(history[0].is_demo);
        assert_eq!(history[1].content, "first");
        assert!(!history[1].is_demo);
    }

    #[test]
    fn test_history_json_shape() {
        let db = Database::open(":memory:").unwrap();
        let req = db.create_request(&params(vec![MuscleGroup::FullBody], Goal::WeightLoss)).unwrap();
        db.save_content(req.id, "<p>x</p>", true).unwrap();

        let json = serde_json::to_value(db.get_history().unwrap()).unwrap();
        assert_eq!(json[0]["requestId"], req.id);
        assert_eq!(json[0]["isDemo"], true);
        assert_eq!(json[0]["parameters"]["muscleGroups"][0], "fullbody");
    }

    #[test]
    fn test_history_empty() {
        let db = Database::open(":memory:").unwrap();
        assert!(db.get_history().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_timestamp_is_an_error() {
        let db = Database::open(":memory:").unwrap();
        let req = db.create_request(&params(vec![MuscleGroup::Core], Goal::Toning)).unwrap();
        db.save_content(req.id, "plan", false).unwrap();
        db.conn
            .execute("UPDATE workout_history SET timestamp = 'yesterday'", [])
            .unwrap();

        let err = db.get_history().unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_old_history_table_gets_is_demo() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE workout_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                request_id INTEGER NOT NULL,
                content TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                muscle_groups TEXT NOT NULL,
                intensity INTEGER NOT NULL,
                workout_type TEXT NOT NULL,
                goal TEXT NOT NULL,
                duration TEXT NOT NULL
            );",
        )
        .unwrap();
        let db = Database { conn };
        db.init_schema().unwrap();

        let req = db.create_request(&params(vec![MuscleGroup::Back], Goal::Strength)).unwrap();
        assert!(db.save_content(req.id, "plan", true).unwrap().is_demo);
        assert!(db.get_history().unwrap()[0].is_demo);
    }

    #[test]
    fn test_fresh_schema_has_is_demo_and_reopens() {
        let db = Database::open(":memory:").unwrap();
        let columns: Vec<String> = db
            .conn
            .prepare("SELECT name FROM pragma_table_info('workout_history')")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(columns.iter().filter(|c| *c == "is_demo").count(), 1);
        db.init_schema().unwrap();
    }

    #[test]
    fn test_decode_rejects_unknown_keys() {
        assert!(decode_parameters("[\"chest\"]", 1, "yoga", "toning", "30".into()).is_err());
        assert!(decode_parameters("[\"chest\"]", 1, "hiit", "fame", "30".into()).is_err());
        assert!(decode_parameters("not json", 1, "hiit", "toning", "30".into()).is_err());
    }
}
