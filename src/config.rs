use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Budget after which every search method gives up.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10 * 60);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfs,
    AStar,
    IdaStar,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Bfs, Method::AStar, Method::IdaStar];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "bfs"),
            Method::AStar => write!(f, "a-star"),
            Method::IdaStar => write!(f, "ida-star"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Method::Bfs),
            "a-star" | "astar" => Ok(Method::AStar),
            "ida-star" | "idastar" => Ok(Method::IdaStar),
            _ => Err(format!("Unknown method: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub time_limit: Duration,
    /// Print stats whenever the search reaches a new depth or bound.
    pub print_status: bool,
}

impl Config {
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Config {
            time_limit,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: DEFAULT_TIME_LIMIT,
            print_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        for &method in &Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
        assert_eq!("astar".parse::<Method>().unwrap(), Method::AStar);
        assert!("dfs".parse::<Method>().is_err());
    }

    #[test]
    fn default_budget() {
        let config = Config::default();
        assert_eq!(config.time_limit, Duration::from_secs(600));
        assert!(!config.print_status);

        let short = Config::with_time_limit(Duration::from_millis(5));
        assert_eq!(short.time_limit, Duration::from_millis(5));
    }
}
