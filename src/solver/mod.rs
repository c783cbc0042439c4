mod a_star;
mod bfs;
mod ida_star;
mod nodes;
mod stats;

use std::fmt::{self, Debug, Formatter};
use std::time::{Duration, Instant};

use separator::Separatable;

use crate::config::{Config, Method};
use crate::moves::Moves;
use crate::state::PuzzleState;
use crate::Solve;

pub use self::stats::Stats;

/// How a single search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchResult {
    Solved(Moves),
    /// The whole reachable space was explored without reaching the goal.
    NoSolution,
    TimedOut,
}

/// Wall clock budget, checked once per expanded state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    pub(crate) fn new(limit: Duration) -> Self {
        Deadline {
            started: Instant::now(),
            limit,
        }
    }

    pub(crate) fn expired(&self) -> bool {
        self.started.elapsed() >= self.limit
    }
}

pub struct SolverOk {
    /// `None` if no solution was found (or the search ran out of time).
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub method: Method,
    /// `None` if the search was aborted because it exceeded the time limit.
    pub elapsed: Option<Duration>,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method, elapsed: Option<Duration>) -> Self {
        Self {
            moves,
            stats,
            method,
            elapsed,
        }
    }

    pub fn timed_out(&self) -> bool {
        self.elapsed.is_none()
    }

    pub fn visited(&self) -> u64 {
        self.stats.total_visited()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None if self.timed_out() => writeln!(f, "{}: time limit exceeded", self.method)?,
            None => writeln!(f, "{}: no solution", self.method)?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves.move_cnt())?,
        }
        if let Some(elapsed) = self.elapsed {
            writeln!(
                f,
                "Elapsed: {} ms",
                (elapsed.as_millis() as u64).separated_string()
            )?;
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for PuzzleState {
    fn solve(&self, method: Method, config: &Config) -> SolverOk {
        solve(self, method, config)
    }
}

pub(crate) fn solve(initial_state: &PuzzleState, method: Method, config: &Config) -> SolverOk {
    debug!("Solving using {}", method);

    let started = Instant::now();
    let mut stats = Stats::new();
    let result = match method {
        Method::Bfs => bfs::search(initial_state, config, &mut stats),
        Method::AStar => a_star::search(initial_state, config, &mut stats),
        Method::IdaStar => ida_star::search(initial_state, config, &mut stats),
    };
    let elapsed = started.elapsed();

    match result {
        SearchResult::Solved(moves) => {
            debug!("Found solution with {} moves", moves.move_cnt());
            SolverOk::new(Some(moves), stats, method, Some(elapsed))
        }
        SearchResult::NoSolution => {
            info!("{}: no solution", method);
            SolverOk::new(None, stats, method, Some(elapsed))
        }
        SearchResult::TimedOut => {
            info!(
                "{}: time limit of {} s exceeded after visiting {} states",
                method,
                config.time_limit.as_secs(),
                stats.total_visited().separated_string()
            );
            SolverOk::new(None, stats, method, None)
        }
    }
}
