/// CLI argument parsing and command handling.
use std::{cell::RefCell, rc::Rc, time::Duration};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use randkit::{
    color, event,
    time::{Clock, ManualClock, Scheduler, SystemClock},
};

#[derive(Parser)]
#[command(
    name = "randkit",
    version,
    about = "randkit - shuffle, pick, random colors, debounce and throttle"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the items in random order
    Shuffle { items: Vec<String> },
    /// Pick one item; each argument is a comma-separated group
    Pick { groups: Vec<String> },
    /// Print random #rrggbb colors, or check one with --check
    Color {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
        #[arg(long = "check")]
        check: Option<String>,
    },
    /// Replay calls at the given millisecond offsets through a wrapper
    Simulate {
        #[command(subcommand)]
        command: SimulateCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SimulateCommand {
    Debounce {
        #[arg(short = 'w', long = "wait", default_value_t = 300)]
        wait: u64,
        #[arg(long = "live")]
        live: bool,
        at: Vec<String>,
    },
    Throttle {
        #[arg(short = 'w', long = "wait", default_value_t = 300)]
        wait: u64,
        #[arg(long = "live")]
        live: bool,
        at: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wrapper {
    Debounce,
    Throttle,
}

/// Execute a CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Shuffle { mut items } => handle_shuffle(&mut items),
        Command::Pick { groups } => handle_pick(groups),
        Command::Color { count, check } => handle_color(count, check),
        Command::Simulate {
            command: SimulateCommand::Debounce { wait, live, at },
        } => {
            handle_simulate(Wrapper::Debounce, wait, live, at)?;
        }
        Command::Simulate {
            command: SimulateCommand::Throttle { wait, live, at },
        } => {
            handle_simulate(Wrapper::Throttle, wait, live, at)?;
        }
    }
    Ok(())
}

fn handle_shuffle(items: &mut [String]) {
    println!("{}", randkit::shuffle_array(items).join(" "));
}

fn handle_pick(groups: Vec<String>) {
    match randkit::pick_random(split_groups(&groups)) {
        Some(item) => println!("{item}"),
        None => println!("(none)"),
    }
}

fn handle_color(count: usize, check: Option<String>) {
    if let Some(c) = check {
        match color::parse_hex(&c).filter(|_| color::is_valid_hex(&c)) {
            Some((r, g, b)) => println!("{c}: rgb({r}, {g}, {b})"),
            None => println!("Invalid color format. Please provide a hex code like #RRGGBB."),
        }
        return;
    }
    for _ in 0..count {
        println!("{}", randkit::random_color());
    }
}

/// Returns the call numbers that made it through the wrapper, in firing order.
fn handle_simulate(
    wrapper: Wrapper,
    wait_ms: u64,
    live: bool,
    at: Vec<String>,
) -> Result<Vec<usize>> {
    let offsets = parse_offsets(&at)?;
    let wait = Duration::from_millis(wait_ms);
    let clock: Rc<dyn Clock> = if live {
        Rc::new(SystemClock::new())
    } else {
        Rc::new(ManualClock::new())
    };
    let scheduler = Rc::new(Scheduler::new(clock.clone()));

    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = fired.clone();
    let stamp_clock = clock.clone();
    let report = move |call: usize| {
        let at = stamp_clock.now().as_millis();
        if live {
            println!("[{}] call #{call} fired at {at}ms", Local::now().format("%H:%M:%S%.3f"));
        } else {
            println!("call #{call} fired at {at}ms");
        }
        sink.borrow_mut().push(call);
    };

    // The wrapper must outlive the loop: dropping a debouncer cancels its pending call.
    match wrapper {
        Wrapper::Debounce => {
            let debounced = Rc::new(randkit::debounce(&scheduler, wait, report));
            let target = debounced.clone();
            replay(&scheduler, &offsets, Rc::new(move |call| target.call(call)));
        }
        Wrapper::Throttle => {
            let throttled = Rc::new(randkit::throttle(clock.clone(), wait, report));
            let target = throttled.clone();
            replay(
                &scheduler,
                &offsets,
                Rc::new(move |call| {
                    target.call(call);
                }),
            );
        }
    }

    let fired = fired.borrow().clone();
    println!(
        "{wrapper:?}: {} calls, {} invocations",
        offsets.len(),
        fired.len()
    );
    Ok(fired)
}

/// Queue call number `n` at each offset, then drain the loop.
fn replay(scheduler: &Scheduler, offsets: &[u64], entry: Rc<dyn Fn(usize)>) {
    for (index, offset) in offsets.iter().enumerate() {
        let entry = entry.clone();
        scheduler.schedule(Duration::from_millis(*offset), move || entry(index + 1));
    }
    event::run(scheduler);
}

/// Every argument may hold several comma-separated entries; blanks are skipped.
fn split_groups(groups: &[String]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| {
            group
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn parse_offsets(values: &[String]) -> Result<Vec<u64>> {
    let mut offsets = Vec::new();
    for item in split_groups(values).into_iter().flatten() {
        let offset = item
            .parse::<u64>()
            .with_context(|| format!("invalid call offset '{item}', expected milliseconds"))?;
        offsets.push(offset);
    }
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn groups_are_split_on_commas() {
        let groups = split_groups(&strings(&["a,b", "c", " , "]));
        assert_eq!(
            groups,
            vec![strings(&["a", "b"]), strings(&["c"]), Vec::<String>::new()]
        );
    }

    #[test]
    fn offsets_accept_lists_and_reject_garbage() {
        assert_eq!(
            parse_offsets(&strings(&["0,10", "20"])).unwrap(),
            vec![0, 10, 20]
        );
        assert!(parse_offsets(&strings(&["5ms"])).is_err());
    }

    #[test]
    fn simulate_commands_parse() {
        let cli = Cli::parse_from(["randkit", "simulate", "throttle", "-w", "100", "0", "50,150"]);
        match cli.command {
            Command::Simulate {
                command: SimulateCommand::Throttle { wait, live, at },
            } => {
                assert_eq!(wait, 100);
                assert!(!live);
                assert_eq!(at, strings(&["0", "50,150"]));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn debounce_simulation_fires_last_call_of_burst() {
        let fired =
            handle_simulate(Wrapper::Debounce, 300, false, strings(&["0,10,20,30,40"])).unwrap();
        assert_eq!(fired, vec![5]);
    }

    #[test]
    fn debounce_simulation_fires_once_per_burst() {
        let fired =
            handle_simulate(Wrapper::Debounce, 100, false, strings(&["0,20", "500"])).unwrap();
        assert_eq!(fired, vec![2, 3]);
    }

    #[test]
    fn throttle_simulation_drops_early_calls() {
        let fired =
            handle_simulate(Wrapper::Throttle, 300, false, strings(&["0", "299", "300"])).unwrap();
        assert_eq!(fired, vec![1, 3]);
    }

    #[test]
    fn simulation_without_calls_fires_nothing() {
        let fired = handle_simulate(Wrapper::Debounce, 300, false, Vec::new()).unwrap();
        assert!(fired.is_empty());
    }
}
