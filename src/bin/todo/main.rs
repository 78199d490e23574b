use std::process::ExitCode;

use log::{debug, error, info};

use todo_heap::priority_queue::PriorityQueue;
use todo_heap::task::{take_overdue, Task};

use crate::args::Arguments;

mod args;

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let tasks = match args.tasks() {
        Ok(tasks) => tasks,
        Err(err) => {
            error!("failed to parse a task: {err}");
            return ExitCode::FAILURE;
        }
    };
    let now = match args.now() {
        Ok(now) => now,
        Err(err) => {
            error!("failed to parse --now: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut todo: PriorityQueue<Task> = PriorityQueue::with_capacity(tasks.len());
    todo.extend(tasks);
    debug!("loaded {} tasks", todo.len());

    if let Some(now) = now {
        let overdue = take_overdue(&mut todo, now);
        if !overdue.is_empty() {
            info!("{} tasks are overdue at {}", overdue.len(), now.format("%H:%M"));
        }
        for task in overdue {
            println!("Overdue: {task}");
        }
    }

    if args.all {
        for (i, task) in todo.drain_ordered().enumerate() {
            println!("{}. {task}", i + 1);
        }
    } else {
        match todo.take_next() {
            Some(task) => println!("Next task is: {task}"),
            None => println!("Nothing left to do"),
        }
    }

    ExitCode::SUCCESS
}
