use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Contest-wide state: the announced winner, if any. Exactly one row exists
/// (id = 1). A null winner means the contest is open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContestSettings {
    pub id: i32,
    pub winner_nominee_id: Option<i32>,
}

impl ContestSettings {
    pub fn is_resolved(&self) -> bool {
        self.winner_nominee_id.is_some()
    }

    /// Submissions are only accepted while no winner is set. Resetting the
    /// winner reopens the contest.
    pub fn ensure_open(&self) -> Result<()> {
        if self.is_resolved() {
            return Err(StorageError::ContestClosed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_contest_accepts_submissions() {
        let settings = ContestSettings {
            id: 1,
            winner_nominee_id: None,
        };
        assert!(!settings.is_resolved());
        assert!(settings.ensure_open().is_ok());
    }

    #[test]
    fn resolved_contest_rejects_submissions() {
        let settings = ContestSettings {
            id: 1,
            winner_nominee_id: Some(3),
        };
        assert!(settings.is_resolved());
        assert!(matches!(
            settings.ensure_open(),
            Err(StorageError::ContestClosed)
        ));
    }

    #[test]
    fn resetting_winner_reopens_contest() {
        let mut settings = ContestSettings {
            id: 1,
            winner_nominee_id: Some(3),
        };
        settings.winner_nominee_id = None;
        assert!(settings.ensure_open().is_ok());
    }
}
