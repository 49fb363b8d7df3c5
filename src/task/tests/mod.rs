//! Unit tests for projects, tasks and the lifecycle.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Clock that replays a fixed sequence of instants, then repeats the last.
///
/// Lets tests hand the lifecycle a timestamp earlier than the task's
/// current `updated_at`.
pub(super) struct ScriptedClock {
    instants: Mutex<VecDeque<DateTime<Utc>>>,
    last: Mutex<DateTime<Utc>>,
}

impl ScriptedClock {
    pub(super) fn new(seconds: impl IntoIterator<Item = i64>) -> Self {
        let instants: VecDeque<DateTime<Utc>> = seconds.into_iter().map(at).collect();
        let first = instants.front().copied().unwrap_or_else(|| at(0));
        Self {
            instants: Mutex::new(instants),
            last: Mutex::new(first),
        }
    }
}

impl Clock for ScriptedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut instants = self.instants.lock().expect("clock lock");
        let mut last = self.last.lock().expect("clock lock");
        if let Some(next) = instants.pop_front() {
            *last = next;
        }
        *last
    }
}

/// Returns the instant `seconds` after 2026-01-01T00:00:00Z.
pub(super) fn at(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("valid base instant")
        + chrono::Duration::seconds(seconds)
}
