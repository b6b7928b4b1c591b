//! Timeline primitives: time segments, periods, and interval arithmetic.
//!
//! All times are game-clock seconds. Intervals are half-open `[start, end)`:
//! the instant where one segment ends and the next begins belongs to the
//! later segment only, so adjacent segments never double-count a boundary.

use crate::cli::types::PeriodId;
use serde::{Deserialize, Serialize};

/// Seconds in one standard period (12 minutes).
pub const STANDARD_PERIOD_SECS: u32 = 12 * 60;

/// Seconds in a standard four-period game.
pub const STANDARD_GAME_SECS: u32 = 4 * STANDARD_PERIOD_SECS;

/// One uninterrupted on-court or off-court stretch for a player.
///
/// Field names follow the dashboard's JSON (`startTime`/`endTime`/`onCourt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSegment {
    #[serde(rename = "startTime")]
    pub start_secs: u32,
    #[serde(rename = "endTime")]
    pub end_secs: u32,
    #[serde(rename = "onCourt")]
    pub on_court: bool,
}

impl TimeSegment {
    pub fn new(start_secs: u32, end_secs: u32, on_court: bool) -> Self {
        Self {
            start_secs,
            end_secs,
            on_court,
        }
    }

    /// Shorthand for an on-court segment.
    pub fn on_court(start_secs: u32, end_secs: u32) -> Self {
        Self::new(start_secs, end_secs, true)
    }

    /// Shorthand for a bench segment.
    pub fn bench(start_secs: u32, end_secs: u32) -> Self {
        Self::new(start_secs, end_secs, false)
    }

    pub fn duration_secs(&self) -> u32 {
        self.end_secs.saturating_sub(self.start_secs)
    }

    /// Whether the instant `t` falls inside this segment (`start <= t < end`).
    pub fn contains(&self, t: u32) -> bool {
        self.start_secs <= t && t < self.end_secs
    }

    /// Whether this segment fully contains the slice `[start, end)`.
    pub fn spans(&self, start_secs: u32, end_secs: u32) -> bool {
        self.start_secs <= start_secs && end_secs <= self.end_secs
    }

    /// Seconds this segment shares with another segment.
    pub fn overlap(&self, other: &TimeSegment) -> u32 {
        overlap_secs(
            self.start_secs,
            self.end_secs,
            other.start_secs,
            other.end_secs,
        )
    }

    /// Seconds this segment shares with the range `[start, end)`.
    pub fn overlap_range(&self, start_secs: u32, end_secs: u32) -> u32 {
        overlap_secs(self.start_secs, self.end_secs, start_secs, end_secs)
    }
}

/// Overlap in seconds between `[a_start, a_end)` and `[b_start, b_end)`.
pub fn overlap_secs(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> u32 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    end.saturating_sub(start)
}

/// A fixed game segment (quarter, half, overtime) with its time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub name: String,
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    #[serde(rename = "startTime")]
    pub start_secs: u32,
    #[serde(rename = "endTime")]
    pub end_secs: u32,
}

impl Period {
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_secs: u32, end_secs: u32) -> Self {
        Self {
            id: PeriodId::new(id),
            name: name.into(),
            duration_secs: end_secs - start_secs,
            start_secs,
            end_secs,
        }
    }
}

/// The standard four 12-minute quarters covering `[0, 2880)`.
pub fn default_periods() -> Vec<Period> {
    let names = ["1st Quarter", "2nd Quarter", "3rd Quarter", "4th Quarter"];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let start = i as u32 * STANDARD_PERIOD_SECS;
            Period::new(format!("q{}", i + 1), *name, start, start + STANDARD_PERIOD_SECS)
        })
        .collect()
}
