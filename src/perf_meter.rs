use log::trace;
use std::time::{Duration, Instant};

/// Snapshot of the counters of a `PerfMeter` along with the elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerfReport {
    /// Wall-clock time between meter creation and the snapshot
    pub elapsed: Duration,
    /// Number of nodes entered
    pub entered: u64,
    /// Number of nodes exited as a leaf
    pub leaf_exits: u64,
    /// Number of nodes exited because the bound could not beat the best score
    pub break_exits: u64,
    /// Number of nodes exited after exploring their children
    pub propagate_exits: u64
}

impl PerfReport {
    /// Total exits of any kind; after a completed search this equals `entered`
    pub fn exits(&self) -> u64 {
        self.leaf_exits + self.break_exits + self.propagate_exits
    }
}

impl std::fmt::Display for PerfReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Time elapsed: \t{:9.2} secs", self.elapsed.as_secs_f64())?;
        writeln!(f, "#ENTRY\t \t{}", self.entered)?;
        writeln!(f, "#EXIT by")?;
        writeln!(f, "  \tleaf \t{}", self.leaf_exits)?;
        writeln!(f, "  \tbreak\t{}", self.break_exits)?;
        write!(f, "  \tpropg\t{}", self.propagate_exits)
    }
}

/// Counts how search nodes are entered and exited for one search run.
/// Every visited node should register exactly one enter and exactly one of the three exits.
/// Once finished, the meter is frozen and any further counting is a programming error.
#[derive(Debug)]
pub struct PerfMeter {
    /// When the meter was created
    start: Instant,
    /// When the meter was finished, if it has been
    end: Option<Instant>,
    entered: u64,
    leaf_exits: u64,
    break_exits: u64,
    propagate_exits: u64
}

impl Default for PerfMeter {
    fn default() -> Self {
        PerfMeter::new()
    }
}

impl PerfMeter {
    /// Creates a new meter, the clock starts now
    pub fn new() -> PerfMeter {
        PerfMeter {
            start: Instant::now(),
            end: None,
            entered: 0,
            leaf_exits: 0,
            break_exits: 0,
            propagate_exits: 0
        }
    }

    fn assert_active(&self) {
        assert!(self.end.is_none(), "PerfMeter already finished");
    }

    /// Counts a node entry
    pub fn count_enter(&mut self) -> u64 {
        self.assert_active();
        self.entered += 1;
        self.entered
    }

    /// Counts a leaf exit
    pub fn count_leaf(&mut self) -> u64 {
        self.assert_active();
        self.leaf_exits += 1;
        self.leaf_exits
    }

    /// Counts an exit due to pruning
    pub fn count_break(&mut self) -> u64 {
        self.assert_active();
        self.break_exits += 1;
        self.break_exits
    }

    /// Counts an exit after exploring children
    pub fn count_propagate(&mut self) -> u64 {
        self.assert_active();
        self.propagate_exits += 1;
        self.propagate_exits
    }

    /// Stops the clock and returns the final report.
    /// # Panics
    /// * if the meter was already finished
    pub fn finish(&mut self) -> PerfReport {
        self.assert_active();
        self.end = Some(Instant::now());
        trace!("PerfMeter finished after {} entries", self.entered);
        self.report()
    }

    /// Returns a report; if the meter is still running, the elapsed time is measured up to now
    pub fn report(&self) -> PerfReport {
        let end = self.end.unwrap_or_else(Instant::now);
        PerfReport {
            elapsed: end.duration_since(self.start),
            entered: self.entered,
            leaf_exits: self.leaf_exits,
            break_exits: self.break_exits,
            propagate_exits: self.propagate_exits
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_counts() {
        let mut perf = PerfMeter::new();
        assert_eq!(perf.count_enter(), 1);
        assert_eq!(perf.count_enter(), 2);
        assert_eq!(perf.count_leaf(), 1);
        assert_eq!(perf.count_break(), 1);

        let report = perf.report();
        assert_eq!(report.entered, 2);
        assert_eq!(report.exits(), 2);
        assert!(!perf.is_finished());

        // still counting after a report
        perf.count_enter();
        perf.count_propagate();
        let report = perf.finish();
        assert_eq!(report.entered, 3);
        assert_eq!(report.propagate_exits, 1);
        assert!(perf.is_finished());

        // a frozen report does not move
        assert_eq!(perf.report(), report);
    }

    #[test]
    fn test_report_display() {
        let report = PerfReport {
            elapsed: Duration::from_millis(1500),
            entered: 7,
            leaf_exits: 4,
            break_exits: 1,
            propagate_exits: 2
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Time elapsed: \t     1.50 secs");
        assert_eq!(lines[1], "#ENTRY\t \t7");
        assert_eq!(lines[3], "  \tleaf \t4");
        assert_eq!(lines[5], "  \tpropg\t2");
    }

    #[test]
    #[should_panic(expected = "PerfMeter already finished")]
    fn test_count_after_finish() {
        let mut perf = PerfMeter::new();
        perf.finish();
        perf.count_enter();
    }

    #[test]
    #[should_panic(expected = "PerfMeter already finished")]
    fn test_double_finish() {
        let mut perf = PerfMeter::new();
        perf.finish();
        perf.finish();
    }
}
