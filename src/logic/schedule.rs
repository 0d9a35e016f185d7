//! Bulk scheduling: spread matches over courts and consecutive time slots.

use crate::models::{BracketError, MatchId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Parameters of a bulk schedule run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BulkSchedule {
    pub courts: u32,
    pub match_duration_minutes: u32,
    /// Start of the first slot.
    pub start: DateTime<Utc>,
}

impl BulkSchedule {
    /// Four courts and 90-minute matches from `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            courts: 4,
            match_duration_minutes: 90,
            start,
        }
    }
}

/// Court and start time assigned to one match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub match_id: MatchId,
    pub scheduled_time: DateTime<Utc>,
    pub court_number: u32,
}

/// Assign matches, in order, to courts 1..=courts at the current slot; once every
/// court is taken the slot moves on by one match duration.
pub fn schedule_matches(
    match_ids: &[MatchId],
    schedule: &BulkSchedule,
) -> Result<Vec<ScheduleSlot>, BracketError> {
    if schedule.courts == 0 {
        return Err(BracketError::NoCourts);
    }
    let step = Duration::minutes(i64::from(schedule.match_duration_minutes));

    let mut slots = Vec::with_capacity(match_ids.len());
    let mut current_time = schedule.start;
    let mut court = 1;
    for &match_id in match_ids {
        slots.push(ScheduleSlot {
            match_id,
            scheduled_time: current_time,
            court_number: court,
        });
        court += 1;
        if court > schedule.courts {
            court = 1;
            current_time += step;
        }
    }
    Ok(slots)
}
