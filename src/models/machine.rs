//! Machine and cycle status data structures.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cycle state of a single washer or dryer.
///
/// Times are whole minutes. `progress` is the elapsed fraction read from the
/// rendered progress bar and is not clamped; values slightly above `1.0` show
/// up when the bar overflows its nominal width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    Available,
    Active { time: u32, progress: f64 },
    CycleEnded { time: u32 },
    ExtendedCycle { time: u32 },
    OutOfService,
    Unknown,
}

/// Visual emphasis for a status, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// Free to use
    Positive,
    /// Busy
    Negative,
    /// Done but not yet emptied
    Attention,
    /// Broken
    Inactive,
    /// Not understood
    Neutral,
}

impl Status {
    /// Headline shown for the machine.
    pub fn title(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Active { .. } => "In Use",
            Status::CycleEnded { .. } => "Cycle Ended",
            Status::ExtendedCycle { .. } => "Running Extended Cycle",
            Status::OutOfService => "Out Of Service",
            Status::Unknown => "Unknown",
        }
    }

    /// Secondary line, when the status carries a useful time.
    pub fn detail(&self) -> Option<String> {
        match self {
            Status::Active { time, .. } => Some(format!("{time} Min Left")),
            Status::CycleEnded { time } => Some(format!("{time} Min Ago")),
            Status::Available
            | Status::ExtendedCycle { .. }
            | Status::OutOfService
            | Status::Unknown => None,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Available => StatusTone::Positive,
            Status::Active { .. } | Status::ExtendedCycle { .. } => StatusTone::Negative,
            Status::CycleEnded { .. } => StatusTone::Attention,
            Status::OutOfService => StatusTone::Inactive,
            Status::Unknown => StatusTone::Neutral,
        }
    }

    /// Delay after which a "cycle almost done" reminder should fire.
    ///
    /// Only running cycles have a known end, so every other state yields `None`.
    pub fn reminder_delay(&self) -> Option<Duration> {
        match self {
            Status::Active { time, .. } => Some(Duration::from_secs(u64::from(*time) * 60)),
            Status::Available
            | Status::CycleEnded { .. }
            | Status::ExtendedCycle { .. }
            | Status::OutOfService
            | Status::Unknown => None,
        }
    }

    /// Progress rounded to a whole percent, e.g. `"50%"`.
    pub fn progress_percent(&self) -> Option<String> {
        match self {
            Status::Active { progress, .. } => Some(format!("{:.0}%", progress * 100.0)),
            Status::Available
            | Status::CycleEnded { .. }
            | Status::ExtendedCycle { .. }
            | Status::OutOfService
            | Status::Unknown => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Status::Available)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{} ({})", self.title(), detail),
            None => f.write_str(self.title()),
        }
    }
}

/// A washer or dryer within a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Ordinal shown on the machine, unique within its table
    pub number: u32,

    /// Current cycle state
    pub status: Status,
}

impl Machine {
    /// Stable identifier for a reminder about this machine in `location_name`.
    pub fn reminder_id(&self, location_name: &str) -> String {
        format!("{}{}", location_name, self.number)
    }
}

/// Machines of one room, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomMachines {
    pub washers: Vec<Machine>,
    pub dryers: Vec<Machine>,
}

impl RoomMachines {
    pub fn available_washers(&self) -> usize {
        count_available(&self.washers)
    }

    pub fn available_dryers(&self) -> usize {
        count_available(&self.dryers)
    }

    pub fn is_empty(&self) -> bool {
        self.washers.is_empty() && self.dryers.is_empty()
    }
}

fn count_available(machines: &[Machine]) -> usize {
    machines.iter().filter(|m| m.status.is_available()).count()
}
