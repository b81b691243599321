/*!
This module provides the `ConsensusSearch`, a depth-first branch-and-bound search over consensus symbols.
Each level of the tree assigns the next window column one of the four symbols, and a completed consensus is scored by sliding every sequence across it.

# Example usage
```rust
use motif_bnb::consensus_search::ConsensusSearch;
use motif_bnb::motif_problem::MotifProblem;
use motif_bnb::perf_meter::PerfMeter;
use motif_bnb::projection::render_consensus;
use motif_bnb::search_config::SearchConfig;
use motif_bnb::sequence::Sequence;

let sequences: Vec<Sequence> = ["AAG", "GCC", "CGC", "AGC", "GCT"].iter().enumerate()
    .map(|(i, s)| Sequence::new(&format!("S{i}"), s.as_bytes()).unwrap())
    .collect();
let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();

let mut perf = PerfMeter::new();
let result = ConsensusSearch::new(&problem).search(&mut perf).unwrap();
assert_eq!(result.score(), 13);
assert_eq!(render_consensus(result.consensus()), "AAGCT");
```
*/

use itertools::Itertools;
use log::{debug, trace};

use crate::bounding::should_prune;
use crate::motif_problem::MotifProblem;
use crate::perf_meter::PerfMeter;
use crate::search_node::{ConsensusNode, SearchNode};
use crate::symbol::Symbol;

/// A completed consensus and its score
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsensusScore {
    /// The sum over sequences of their best match count against the consensus
    score: usize,
    /// One symbol per window column
    consensus: Vec<Symbol>
}

impl ConsensusScore {
    /// Constructor
    pub fn new(score: usize, consensus: Vec<Symbol>) -> ConsensusScore {
        ConsensusScore { score, consensus }
    }

    // Getters
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn consensus(&self) -> &[Symbol] {
        &self.consensus
    }
}

impl std::fmt::Display for ConsensusScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};:{}", self.consensus.iter().join(";"), self.score)
    }
}

/// Branch-and-bound search for the highest scoring consensus over the window.
/// The cutoff is threaded through siblings: once a child returns a result, later siblings must at least match it.
#[derive(Debug)]
pub struct ConsensusSearch<'a> {
    /// The shared search context
    problem: &'a MotifProblem<'a>
}

impl<'a> ConsensusSearch<'a> {
    /// Constructor
    pub fn new(problem: &'a MotifProblem<'a>) -> ConsensusSearch<'a> {
        ConsensusSearch { problem }
    }

    /// Searches the whole tree, starting from an unassigned consensus with a cutoff of 0.
    /// Only returns None if the tree is empty, which cannot happen for a valid problem.
    /// # Arguments
    /// * `perf` - the meter that counts node entries and exits
    pub fn search(&self, perf: &mut PerfMeter) -> Option<ConsensusScore> {
        let root = ConsensusNode::new_root(self.problem);
        let result = self.find_consensus(root, 0, perf);
        let report = perf.report();
        debug!("Consensus search: best = {:?}, entered = {}, breaks = {}", result.as_ref().map(|r| r.score()), report.entered, report.break_exits);
        result
    }

    /// Recursively searches below `node` for the best consensus scoring at least `cutoff`.
    /// Returns None if nothing below this node reaches the cutoff.
    /// # Arguments
    /// * `node` - the partial consensus to extend
    /// * `cutoff` - the score a result must reach to be reported
    /// * `perf` - the meter that counts node entries and exits
    pub fn find_consensus(&self, node: ConsensusNode, cutoff: usize, perf: &mut PerfMeter) -> Option<ConsensusScore> {
        perf.count_enter();

        let actual = node.score(self.problem);
        if node.is_leaf() {
            perf.count_leaf();
            if actual < cutoff {
                return None;
            }
            trace!("Leaf {:?} => {actual}", node.prefix());
            return node.consensus().map(|consensus| ConsensusScore::new(actual, consensus));
        }

        if self.problem.bounding() && should_prune(node.upper_bound(self.problem, actual), cutoff) {
            perf.count_break();
            return None;
        }

        let mut cutoff = cutoff;
        let mut best = None;
        for child in node.expand(self.problem) {
            if let Some(result) = self.find_consensus(child, cutoff, perf) {
                // anything returned is at least as good as the current cutoff
                cutoff = result.score();
                best = Some(result);
            }
        }
        perf.count_propagate();
        best
    }
}
