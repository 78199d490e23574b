use argh::FromArgs;
use chrono::NaiveTime;

use todo_heap::task::{parse_time, Task, TaskParseError};

/// The day used when no `--task` is given
const SAMPLE_DAY: [&str; 5] = [
    "09:00 Leave for work",
    "11:30 Meeting with tutor",
    "10:00 Call bank",
    "16:00 Finish essay",
    "13:00 Remember lunch",
];

#[derive(FromArgs, Debug, PartialEq)]
/// show what to do next from a day's schedule
pub struct Arguments {
    /// a task as "HH:MM description", repeat for more (default: a sample day)
    #[argh(option)]
    pub task: Vec<String>,

    /// current time as HH:MM; earlier tasks are reported as overdue
    #[argh(option)]
    pub now: Option<String>,

    /// print the whole remaining schedule instead of only the next task
    #[argh(switch)]
    pub all: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Arguments {
    pub fn tasks(&self) -> Result<Vec<Task>, TaskParseError> {
        if self.task.is_empty() {
            return SAMPLE_DAY.iter().map(|line| line.parse()).collect();
        }
        self.task.iter().map(|line| line.parse()).collect()
    }

    pub fn now(&self) -> Result<Option<NaiveTime>, TaskParseError> {
        self.now.as_deref().map(parse_time).transpose()
    }
}
