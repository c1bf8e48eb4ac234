//! Streak levels and milestone progress.

use chrono::{DateTime, Duration, Utc};
use goal_model::Streak;
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Streak lengths at which a new level is reached, ascending.
pub const STREAK_THRESHOLDS: [u32; 6] = [0, 7, 14, 30, 50, 100];

/// Momentum level earned by a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum StreakLevel {
    Building,
    Strong,
    Pro,
    Expert,
    Master,
    Legendary,
}

impl StreakLevel {
    /// Minimum streak length for this level.
    pub fn threshold(&self) -> u32 {
        match self {
            Self::Building => 0,
            Self::Strong => 7,
            Self::Pro => 14,
            Self::Expert => 30,
            Self::Master => 50,
            Self::Legendary => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Strong => "Strong",
            Self::Pro => "Pro",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Legendary => "Legendary",
        }
    }

    /// All levels, lowest first.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Building,
            Self::Strong,
            Self::Pro,
            Self::Expert,
            Self::Master,
            Self::Legendary,
        ]
    }
}

/// Highest level whose threshold is `<= current`.
pub fn streak_level(current: u32) -> StreakLevel {
    StreakLevel::all()
        .into_iter()
        .rev()
        .find(|level| level.threshold() <= current)
        .unwrap_or(StreakLevel::Building)
}

/// Progress from the last reached milestone towards the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub current: u32,
    pub previous: u32,
    /// `None` once the top milestone is reached
    pub next: Option<u32>,
    /// Periods left until `next` (0 at the top)
    pub remaining: u32,
    /// In [0, 100]
    pub percent: f64,
}

impl MilestoneProgress {
    pub fn is_max(&self) -> bool {
        self.next.is_none()
    }
}

pub fn progress_to_next_milestone(current: u32) -> MilestoneProgress {
    let previous = STREAK_THRESHOLDS
        .iter()
        .copied()
        .filter(|t| *t <= current)
        .max()
        .unwrap_or(0);
    let next = STREAK_THRESHOLDS.iter().copied().find(|t| *t > current);

    match next {
        Some(next) => {
            let span = (next - previous) as f64;
            let percent = ((current - previous) as f64 / span * 100.0).clamp(0.0, 100.0);
            MilestoneProgress {
                current,
                previous,
                next: Some(next),
                remaining: next - current,
                percent,
            }
        }
        None => MilestoneProgress {
            current,
            previous,
            next: None,
            remaining: 0,
            percent: 100.0,
        },
    }
}

/// Whether the streak breaks unless activity is logged soon: more than one
/// period has elapsed since the last activity. Only "days" and "weeks" units
/// have a known period length.
pub fn streak_at_risk(streak: &Streak, now: DateTime<Utc>) -> bool {
    let Some(last) = streak.last_activity_date else {
        return false;
    };
    if streak.current_streak == 0 {
        return false;
    }

    let period = match streak.unit.trim().to_ascii_lowercase().as_str() {
        "day" | "days" | "daily" => Duration::days(1),
        "week" | "weeks" | "weekly" => Duration::weeks(1),
        _ => return false,
    };
    now - last > period
}

/// A streak with its level and milestone progress resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StreakSnapshot {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub unit: String,
    pub level: StreakLevel,
    pub milestone: MilestoneProgress,
    pub at_risk: bool,
    pub last_activity_date: Option<DateTime<Utc>>,
}

pub fn streak_snapshot(streak: &Streak, now: DateTime<Utc>) -> StreakSnapshot {
    let streak = streak.normalized();
    StreakSnapshot {
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        level: streak_level(streak.current_streak),
        milestone: progress_to_next_milestone(streak.current_streak),
        at_risk: streak_at_risk(&streak, now),
        unit: streak.unit,
        last_activity_date: streak.last_activity_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_levels_at_thresholds() {
        assert_eq!(streak_level(0), StreakLevel::Building);
        assert_eq!(streak_level(6), StreakLevel::Building);
        assert_eq!(streak_level(7), StreakLevel::Strong);
        assert_eq!(streak_level(14), StreakLevel::Pro);
        assert_eq!(streak_level(29), StreakLevel::Pro);
        assert_eq!(streak_level(30), StreakLevel::Expert);
        assert_eq!(streak_level(50), StreakLevel::Master);
        assert_eq!(streak_level(100), StreakLevel::Legendary);
        assert_eq!(streak_level(365), StreakLevel::Legendary);
    }

    #[test]
    fn test_thresholds_match_levels() {
        let from_levels: Vec<u32> = StreakLevel::all().iter().map(|l| l.threshold()).collect();
        assert_eq!(from_levels, STREAK_THRESHOLDS.to_vec());
    }

    #[test]
    fn test_progress_between_milestones() {
        let progress = progress_to_next_milestone(10);
        assert_eq!(progress.previous, 7);
        assert_eq!(progress.next, Some(14));
        assert_eq!(progress.remaining, 4);
        assert!(progress.percent > 0.0 && progress.percent < 100.0);
        assert!((progress.percent - 300.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_on_a_threshold_starts_at_zero() {
        let progress = progress_to_next_milestone(30);
        assert_eq!(progress.previous, 30);
        assert_eq!(progress.next, Some(50));
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_progress_at_max() {
        for current in [100, 250] {
            let progress = progress_to_next_milestone(current);
            assert!(progress.is_max());
            assert_eq!(progress.percent, 100.0);
            assert_eq!(progress.remaining, 0);
        }
    }

    #[test]
    fn test_at_risk() {
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();
        let mut streak = Streak::new(12);
        assert!(!streak_at_risk(&streak, now));

        streak.last_activity_date = Some(now - Duration::hours(20));
        assert!(!streak_at_risk(&streak, now));

        streak.last_activity_date = Some(now - Duration::hours(30));
        assert!(streak_at_risk(&streak, now));

        streak.unit = "weeks".to_string();
        assert!(!streak_at_risk(&streak, now));

        streak.unit = "sessions".to_string();
        streak.last_activity_date = Some(now - Duration::days(60));
        assert!(!streak_at_risk(&streak, now));
    }

    #[test]
    fn test_snapshot_normalizes_longest() {
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();
        let streak = Streak {
            current_streak: 21,
            longest_streak: 15,
            unit: "days".to_string(),
            last_activity_date: Some(now),
        };
        let snapshot = streak_snapshot(&streak, now);
        assert_eq!(snapshot.longest_streak, 21);
        assert_eq!(snapshot.level, StreakLevel::Pro);
        assert_eq!(snapshot.milestone.next, Some(30));
        assert!(!snapshot.at_risk);
    }
}
