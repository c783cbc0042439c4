#[macro_use]
extern crate prettytable;

use std::env;
use std::process;
use std::time::Duration;

use clap::{value_t, App, AppSettings, Arg, ArgGroup, ArgMatches};
use prettytable::Table;
use rand::rngs::StdRng;
use rand::SeedableRng;
use separator::Separatable;

use sliding_puzzle_solver::config::{Config, Method, DEFAULT_TIME_LIMIT};
use sliding_puzzle_solver::solver::SolverOk;
use sliding_puzzle_solver::{create_puzzle, shuffle, LoadPuzzle, PuzzleState, Solve, MAX_SIZE};

const DEFAULT_SIZE: u8 = 3;
const DEFAULT_SHUFFLES: usize = 20;

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the N x N sliding tile puzzle using BFS, A* or IDA*")
        .setting(AppSettings::ColoredHelp)
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("breadth-first search"),
        )
        .arg(
            Arg::with_name("a-star")
                .short("a")
                .long("a-star")
                .help("A* with Manhattan distance (default)"),
        )
        .arg(
            Arg::with_name("ida-star")
                .short("i")
                .long("ida-star")
                .help("iterative deepening A* with Manhattan distance"),
        )
        .arg(
            Arg::with_name("all")
                .long("all")
                .help("run all methods and compare them"),
        )
        .group(ArgGroup::with_name("method").args(&["bfs", "a-star", "ida-star", "all"]))
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .takes_value(true)
                .value_name("N")
                .conflicts_with("file")
                .help("board size when not loading from a file [default: 3]"),
        )
        .arg(
            Arg::with_name("shuffle")
                .short("k")
                .long("shuffle")
                .takes_value(true)
                .value_name("MOVES")
                .help("random moves applied to the initial board [default: 20, 0 with FILE]"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("seed for reproducible shuffling"),
        )
        .arg(
            Arg::with_name("time-limit")
                .short("t")
                .long("time-limit")
                .takes_value(true)
                .value_name("SECONDS")
                .help("give up after this long [default: 600]"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the board after every move of the solution"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats whenever the search reaches a new depth or bound"),
        )
        .arg(Arg::with_name("file").help("board to solve, one row per line, _ or 0 is empty"))
        .get_matches();

    let methods = parse_methods(&matches);
    let config = Config {
        time_limit: parse_time_limit(&matches),
        print_status: matches.is_present("status"),
    };

    let (start, default_shuffles) = match matches.value_of("file") {
        Some(path) => {
            let puzzle = path.load_puzzle().unwrap_or_else(|err| {
                let current_dir = env::current_dir().unwrap_or_default();
                eprintln!("Can't load puzzle {} in {}: {}", path, current_dir.display(), err);
                process::exit(1);
            });
            (puzzle, 0)
        }
        None => (create_puzzle(parse_size(&matches)), DEFAULT_SHUFFLES),
    };

    let shuffles = if matches.is_present("shuffle") {
        value_t!(matches, "shuffle", usize).unwrap_or_else(|e| e.exit())
    } else {
        default_shuffles
    };
    let initial_state = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        shuffle(&start, shuffles, &mut StdRng::seed_from_u64(seed))
    } else {
        shuffle(&start, shuffles, &mut rand::thread_rng())
    };

    println!("Initial board:");
    print!("{}", initial_state);
    println!("Heuristic: {}", initial_state.heuristic());
    println!();

    let mut solutions = Vec::new();
    for method in methods {
        println!("Solving using {}...", method);
        let solution = initial_state.solve(method, &config);
        print_solution(&initial_state, &solution, matches.is_present("steps"));
        solutions.push(solution);
    }

    if solutions.len() > 1 {
        print_comparison(&solutions);
    }
}

fn parse_methods(matches: &ArgMatches<'_>) -> Vec<Method> {
    if matches.is_present("all") {
        Method::ALL.to_vec()
    } else if matches.is_present("bfs") {
        vec![Method::Bfs]
    } else if matches.is_present("ida-star") {
        vec![Method::IdaStar]
    } else {
        vec![Method::AStar]
    }
}

fn parse_size(matches: &ArgMatches<'_>) -> u8 {
    if !matches.is_present("size") {
        return DEFAULT_SIZE;
    }
    let size = value_t!(matches, "size", u8).unwrap_or_else(|e| e.exit());
    if size == 0 || size > MAX_SIZE {
        eprintln!("Size must be between 1 and {}", MAX_SIZE);
        process::exit(1);
    }
    size
}

fn parse_time_limit(matches: &ArgMatches<'_>) -> Duration {
    if matches.is_present("time-limit") {
        let secs = value_t!(matches, "time-limit", f64).unwrap_or_else(|e| e.exit());
        Duration::try_from_secs_f64(secs).unwrap_or_else(|_| {
            eprintln!("Time limit must be a non-negative number of seconds");
            process::exit(1);
        })
    } else {
        DEFAULT_TIME_LIMIT
    }
}

fn print_solution(initial_state: &PuzzleState, solution: &SolverOk, steps: bool) {
    print!("{}", solution.stats);
    println!();

    match solution.moves {
        Some(ref moves) => {
            println!("Found solution:");
            if steps {
                print!("{}", initial_state.format_solution(moves));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
        None if solution.timed_out() => println!("Time limit exceeded"),
        None => println!("No solution"),
    }
    if let Some(elapsed) = solution.elapsed {
        println!("Elapsed: {} ms", (elapsed.as_millis() as u64).separated_string());
    }
    println!();
}

fn print_comparison(solutions: &[SolverOk]) {
    let mut table = Table::new();
    table.set_titles(row!["Method", "Moves", "Visited", "Created", "Time (ms)"]);
    for solution in solutions {
        let moves = solution
            .moves
            .as_ref()
            .map_or_else(|| "-".to_owned(), |moves| moves.move_cnt().to_string());
        let time = solution.elapsed.map_or_else(
            || "time limit".to_owned(),
            |elapsed| (elapsed.as_millis() as u64).separated_string(),
        );
        table.add_row(row![
            solution.method,
            moves,
            solution.visited().separated_string(),
            solution.stats.total_created().separated_string(),
            time
        ]);
    }
    table.printstd();
}
