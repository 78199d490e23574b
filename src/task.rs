//! Scheduled tasks for the to-do manager
//!
//! A [`Task`] pairs a time of day with free-form text. Its ordering is
//! inverted relative to clock order: the task due **soonest** compares as the
//! greatest, so a max-queue hands it out first.
//!
//! # Example
//!
//! ```rust
//! use todo_heap::priority_queue::PriorityQueue;
//! use todo_heap::task::Task;
//!
//! let mut todo = PriorityQueue::new();
//! todo.insert("16:00 Finish essay".parse::<Task>().unwrap());
//! todo.insert("09:00 Leave for work".parse::<Task>().unwrap());
//!
//! let next = todo.take_next().unwrap();
//! assert_eq!(next.to_string(), "Task: due at 09:00 - Leave for work");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::priority_queue::PriorityQueue;
use crate::traits::Heap;

const TIME_FORMAT: &str = "%H:%M";

/// Error type for parsing a [`Task`] from `"HH:MM description"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskParseError {
    /// Nothing followed the due time
    MissingDescription,
    /// The due time was not a valid `HH:MM` time of day
    InvalidTime(String),
}

impl fmt::Display for TaskParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskParseError::MissingDescription => {
                write!(f, "task has no description after its due time")
            }
            TaskParseError::InvalidTime(time) => {
                write!(f, "invalid due time {:?}, expected HH:MM", time)
            }
        }
    }
}

impl std::error::Error for TaskParseError {}

/// Parses a bare `HH:MM` time of day
pub fn parse_time(s: &str) -> Result<NaiveTime, TaskParseError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| TaskParseError::InvalidTime(s.trim().to_string()))
}

/// Something to do at a given time of day
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    due: NaiveTime,
    description: String,
}

impl Task {
    pub fn new(due: NaiveTime, description: impl Into<String>) -> Self {
        Self {
            due,
            description: description.into(),
        }
    }

    pub fn due(&self) -> NaiveTime {
        self.due
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True when the task was due strictly before `now`
    pub fn is_overdue(&self, now: NaiveTime) -> bool {
        self.due < now
    }
}

impl Ord for Task {
    /// Sooner due times are greater; equal times fall back to the
    /// alphabetically earlier description being greater
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.description.cmp(&self.description))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task: due at {} - {}",
            self.due.format(TIME_FORMAT),
            self.description
        )
    }
}

impl FromStr for Task {
    type Err = TaskParseError;

    /// Parses `"HH:MM description"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (time, description) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or(TaskParseError::MissingDescription)?;
        let due = parse_time(time)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskParseError::MissingDescription);
        }
        Ok(Task::new(due, description))
    }
}

/// Takes every task due strictly before `now` off the front of the queue
///
/// The queue hands out tasks soonest-first, so the overdue ones are exactly
/// those at the front. They are returned in due order; the first task still
/// pending is left in place.
pub fn take_overdue<H: Heap<Task>>(
    todo: &mut PriorityQueue<Task, H>,
    now: NaiveTime,
) -> Vec<Task> {
    let mut overdue = Vec::new();
    while todo.peek_next().is_some_and(|task| task.is_overdue(now)) {
        if let Some(task) = todo.take_next() {
            overdue.push(task);
        }
    }
    overdue
}
