use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counts of states by depth (path cost).
///
/// A state is *created* when it's generated, *visited* when it's expanded
/// and a *reached duplicate* when it's thrown away because an equal board
/// was already seen at the same or better cost.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    bounds: Vec<u32>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum::<u64>()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    /// f-value bounds tried by IDA*, empty for the other methods.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true if this is the first state visited at this depth.
    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_bound(&mut self, bound: u32) {
        self.bounds.push(bound);
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped - A* can expand deep states first
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }

    pub(crate) fn print_depth(&self, depth: u32) {
        println!("Visited new depth: {}", depth);
        self.print_totals();
    }

    pub(crate) fn print_bound(&self, bound: u32) {
        println!("Searching with bound: {}", bound);
        self.print_totals();
    }

    fn print_totals(&self) {
        println!("total created / visited / reached duplicates:");
        println!(
            "{:<16}{:<16}{}",
            self.total_created(),
            self.total_visited(),
            self.total_reached_duplicates()
        );
        println!();
    }

    fn left(&self, depth: usize) -> u64 {
        let created = self.created_states.get(depth).cloned().unwrap_or(0);
        let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
        let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
        created.saturating_sub(visited + duplicates)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        if !self.bounds.is_empty() {
            writeln!(f, "bounds: {:?}", self.bounds)?;
        }
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created.saturating_sub(visited + duplicates);
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        if !self.bounds.is_empty() {
            let bounds: Vec<_> = self.bounds.iter().map(|b| b.to_string()).collect();
            writeln!(f, "Bounds: {}", bounds.join(" "))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Visited", "Duplicates", "Unknown (not reached)"
        )?;
        let depths = self
            .created_states
            .len()
            .max(self.visited_states.len())
            .max(self.duplicate_states.len());
        for i in 0..depths {
            let depth = format!("{}:", i);
            let created = self.created_states.get(i).cloned().unwrap_or(0);
            let visited = self.visited_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                depth,
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                self.left(i).separated_string()
            )?;
        }
        Ok(())
    }
}
