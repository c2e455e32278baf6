use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::domain::mood::model::Mood;

use super::model::DailyLog;

/// Days covered by the weekly window, counted back from the start of today.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRate {
    pub total: usize,
    pub completed: usize,
}

impl CompletionRate {
    fn of<'a>(logs: impl Iterator<Item = &'a DailyLog>) -> Self {
        logs.fold(
            Self {
                total: 0,
                completed: 0,
            },
            |acc, log| Self {
                total: acc.total + 1,
                completed: acc.completed + usize::from(log.activity_completed),
            },
        )
    }

    /// Share of entries with a completed activity; 0.0 when there are none.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// One point of the mood chart: a calendar day (UTC) of the weekly window.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMoodTrend {
    pub date: NaiveDate,
    /// Rounded mean of the day's mood scores.
    pub average_score: u8,
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    pub weekly: CompletionRate,
    pub monthly: CompletionRate,
    /// Oldest day first.
    pub trend: Vec<DailyMoodTrend>,
}

impl MoodStats {
    /// Weekly window: entries at or after midnight seven days before `now`.
    /// Monthly window: entries in the calendar month of `now`.
    pub fn compute(logs: &[DailyLog], now: DateTime<Utc>) -> Self {
        let week_start = week_start(now);
        let weekly: Vec<&DailyLog> = logs
            .iter()
            .filter(|log| log.recorded_at >= week_start)
            .collect();

        let monthly = CompletionRate::of(logs.iter().filter(|log| {
            log.recorded_at.year() == now.year() && log.recorded_at.month() == now.month()
        }));

        Self {
            weekly: CompletionRate::of(weekly.iter().copied()),
            monthly,
            trend: mood_trend(&weekly),
        }
    }
}

fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let start_day = now.date_naive() - Duration::days(WEEKLY_WINDOW_DAYS);
    start_day.and_time(NaiveTime::MIN).and_utc()
}

fn mood_trend(logs: &[&DailyLog]) -> Vec<DailyMoodTrend> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Mood>> = BTreeMap::new();
    for log in logs {
        by_day
            .entry(log.recorded_at.date_naive())
            .or_default()
            .push(log.mood);
    }

    by_day
        .into_iter()
        .map(|(date, moods)| {
            let total: u32 = moods.iter().map(|mood| u32::from(mood.score())).sum();
            let average_score = (f64::from(total) / moods.len() as f64).round() as u8;

            DailyMoodTrend {
                date,
                average_score,
                mood: representative_mood(&moods, average_score),
            }
        })
        .collect()
}

/// Most frequent mood. Ties go to the mood nearest the average score, then
/// to the better mood.
fn representative_mood(moods: &[Mood], average_score: u8) -> Mood {
    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for mood in moods {
        *counts.entry(*mood).or_default() += 1;
    }

    Mood::ALL
        .into_iter()
        .filter_map(|mood| counts.get(&mood).map(|count| (mood, *count)))
        .min_by_key(|(mood, count)| (Reverse(*count), mood.score().abs_diff(average_score)))
        .map(|(mood, _)| mood)
        .or_else(|| Mood::ALL.into_iter().find(|mood| mood.score() == average_score))
        .unwrap_or(Mood::Neutral)
}
