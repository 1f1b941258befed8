use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::dto::leaderboard::LeaderboardRow;
use crate::models::{ContestSettings, NomineeWithOdds, Pick};

/// Points a correct pick earns: `round(100 * (1 - odds))`, rounding halves
/// away from zero. Odds in [0, 1] give points in [0, 100]; longer shots are
/// worth more.
pub fn points(odds: Decimal) -> i32 {
    ((Decimal::ONE - odds) * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

/// Projects the pick ledger onto a ranked leaderboard. A pick scores only
/// when its nominee is the announced winner, using that nominee's *current*
/// odds; before any announcement every row shows zero. Pure and synchronous,
/// so it can be recomputed on every change notification.
///
/// Ordering is total and stable: points descending, then submission time
/// ascending, then pick id as the final tiebreak, so re-renders of identical
/// input never reorder rows.
pub fn compute_leaderboard(
    nominees: &[NomineeWithOdds],
    picks: &[Pick],
    settings: &ContestSettings,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = picks
        .iter()
        .map(|pick| {
            let nominee = nominees.iter().find(|n| n.nominee_id == pick.nominee_id);
            let is_correct = settings.winner_nominee_id == Some(pick.nominee_id);
            let awarded = match nominee {
                Some(nominee) if is_correct => points(nominee.odds),
                _ => 0,
            };

            LeaderboardRow {
                rank: 0,
                pick_id: pick.pick_id,
                name: pick.name.clone(),
                nominee_id: pick.nominee_id,
                pick_title: nominee
                    .map(|n| n.title.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                points: awarded,
                is_correct,
                submitted_at: pick.created_at,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.pick_id.cmp(&b.pick_id))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = (index + 1) as i64;
    }

    rows
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use uuid::Uuid;

    use super::*;

    fn nominee(nominee_id: i32, title: &str, odds: &str) -> NomineeWithOdds {
        NomineeWithOdds {
            nominee_id,
            title: title.to_string(),
            director: String::new(),
            odds: odds.parse().unwrap(),
        }
    }

    fn pick(seq: u8, name: &str, nominee_id: i32, submitted_secs: i64) -> Pick {
        Pick {
            pick_id: Uuid::from_u128(seq as u128),
            name: name.to_string(),
            nominee_id,
            created_at: DateTime::from_timestamp(submitted_secs, 0).unwrap(),
        }
    }

    fn open() -> ContestSettings {
        ContestSettings {
            id: 1,
            winner_nominee_id: None,
        }
    }

    fn resolved(winner: i32) -> ContestSettings {
        ContestSettings {
            id: 1,
            winner_nominee_id: Some(winner),
        }
    }

    #[test]
    fn points_match_formula() {
        assert_eq!(points("0".parse().unwrap()), 100);
        assert_eq!(points("1".parse().unwrap()), 0);
        assert_eq!(points("0.8".parse().unwrap()), 20);
        assert_eq!(points("0.05".parse().unwrap()), 95);
        assert_eq!(points("0.5".parse().unwrap()), 50);
        // 18.5 rounds up, not to even
        assert_eq!(points("0.815".parse().unwrap()), 19);
    }

    #[test]
    fn points_stay_within_bounds() {
        for hundredths in 0i64..=100 {
            let odds = Decimal::new(hundredths, 2);
            let p = points(odds);
            assert!((0..=100).contains(&p), "points({odds}) = {p}");
        }
    }

    #[test]
    fn everyone_scores_zero_before_announcement() {
        let nominees = [nominee(1, "One Battle After Another", "0.80"), nominee(2, "Sinners", "0.05")];
        let picks = [pick(1, "Sam", 1, 100), pick(2, "Lee", 2, 200)];

        let board = compute_leaderboard(&nominees, &picks, &open());

        assert_eq!(board.len(), 2);
        assert!(board.iter().all(|row| row.points == 0 && !row.is_correct));
        // zero-point ties fall back to submission order
        assert_eq!(board[0].name, "Sam");
        assert_eq!(board[1].name, "Lee");
    }

    #[test]
    fn announced_winner_awards_points_by_current_odds() {
        let nominees = [nominee(1, "One Battle After Another", "0.80"), nominee(2, "Sinners", "0.05")];
        let picks = [pick(1, "Sam", 1, 100), pick(2, "Lee", 2, 200)];

        let board = compute_leaderboard(&nominees, &picks, &resolved(2));

        assert_eq!(board[0].name, "Lee");
        assert_eq!(board[0].points, 95);
        assert!(board[0].is_correct);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].name, "Sam");
        assert_eq!(board[1].points, 0);
        assert!(!board[1].is_correct);
    }

    #[test]
    fn ordering_is_total_and_stable() {
        let nominees = [nominee(1, "Hamnet", "0.10")];
        // identical points and timestamps; pick_id decides
        let picks = [pick(3, "Cleo", 1, 100), pick(1, "Ada", 1, 100), pick(2, "Ben", 1, 100)];

        let first = compute_leaderboard(&nominees, &picks, &open());
        let second = compute_leaderboard(&nominees, &picks, &open());

        let order: Vec<&str> = first.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(order, ["Ada", "Ben", "Cleo"]);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.pick_id, b.pick_id);
            assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn pick_for_unknown_nominee_scores_zero() {
        let nominees = [nominee(1, "Bugonia", "0.005")];
        let picks = [pick(1, "Sam", 99, 100)];

        let board = compute_leaderboard(&nominees, &picks, &resolved(1));

        assert_eq!(board[0].points, 0);
        assert_eq!(board[0].pick_title, "Unknown");
    }
}
