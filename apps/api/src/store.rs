//! Mood data loading: the collaborator that turns a user id and a range label into
//! an ordered sequence of validated samples.
//!
//! `AppState` holds an `Arc<dyn MoodDataSource>`. The default backend is
//! `FileMoodStore`, which reads the JSON array the logging client produces.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::errors::AppError;
use crate::models::mood::{parse_records, MoodRecord, MoodSample};

/// How far back to look. Unknown labels fall back to a week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "month" => TimeRange::Month,
            "year" => TimeRange::Year,
            _ => TimeRange::Week,
        }
    }

    pub fn days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }

    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

#[async_trait]
pub trait MoodDataSource: Send + Sync {
    /// Returns the user's samples inside `range`, in stored order.
    async fn load(&self, user_id: &str, range: TimeRange) -> Result<Vec<MoodSample>, AppError>;
}

/// User ids name files on disk, so only a conservative alphabet is accepted.
pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    if user_id.is_empty() {
        return Err(AppError::Validation("userId cannot be empty".to_string()));
    }
    if !user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::Validation(format!(
            "userId '{user_id}' may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

/// Drops samples older than the range cutoff, keeping the original order.
pub fn filter_to_range(
    samples: Vec<MoodSample>,
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<MoodSample> {
    let cutoff = range.cutoff(now);
    samples
        .into_iter()
        .filter(|s| s.timestamp >= cutoff)
        .collect()
}

/// Reads `<data_dir>/<user_id>.json`.
#[derive(Debug, Clone)]
pub struct FileMoodStore {
    data_dir: PathBuf,
}

impl FileMoodStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.data_dir.join(format!("{user_id}.json"))
    }

    async fn read_records(path: &Path) -> Result<Vec<MoodRecord>, AppError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No mood data at {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Storage(format!("malformed mood data in {}: {e}", path.display())))
    }
}

#[async_trait]
impl MoodDataSource for FileMoodStore {
    async fn load(&self, user_id: &str, range: TimeRange) -> Result<Vec<MoodSample>, AppError> {
        // The id becomes a path component; not every caller goes through the handler.
        validate_user_id(user_id)?;

        let path = self.path_for(user_id);
        let records = Self::read_records(&path).await?;
        let total = records.len();

        let samples = filter_to_range(parse_records(records)?, range, Utc::now());
        debug!(
            "Loaded {} of {} mood records for {user_id} ({range:?})",
            samples.len(),
            total
        );
        Ok(samples)
    }
}
