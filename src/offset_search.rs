/*!
This module provides the `OffsetSearch`, a depth-first branch-and-bound search over sequence placements.
Each level of the tree places the next sequence in the window, and a placement is scored through the majority consensus of its profile.
It solves the same problem as `ConsensusSearch` from the other side, so both report the same optimal score.

# Example usage
```rust
use motif_bnb::motif_problem::MotifProblem;
use motif_bnb::offset_search::OffsetSearch;
use motif_bnb::perf_meter::PerfMeter;
use motif_bnb::search_config::SearchConfigBuilder;
use motif_bnb::sequence::Sequence;

let sequences: Vec<Sequence> = ["AAG", "GCC", "CGC", "AGC", "GCT"].iter().enumerate()
    .map(|(i, s)| Sequence::new(&format!("S{i}"), s.as_bytes()).unwrap())
    .collect();
let config = SearchConfigBuilder::default().reverse_strand(true).build().unwrap();
let problem = MotifProblem::new(&sequences, &config).unwrap();

let mut perf = PerfMeter::new();
let result = OffsetSearch::new(&problem).search(&mut perf).unwrap();
assert_eq!(result.score(), 14);
```
*/

use itertools::Itertools;
use log::{debug, trace};

use crate::bounding::should_prune;
use crate::motif_problem::{MotifProblem, Placement};
use crate::perf_meter::PerfMeter;
use crate::search_node::{OffsetNode, SearchNode};

/// A completed placement of all sequences and its score
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OffsetScore {
    /// The profile score of the placement under its majority consensus
    score: usize,
    /// One placement per sequence
    placements: Vec<Placement>
}

impl OffsetScore {
    /// Constructor
    pub fn new(score: usize, placements: Vec<Placement>) -> OffsetScore {
        OffsetScore { score, placements }
    }

    // Getters
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

impl std::fmt::Display for OffsetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};:{}", self.placements.iter().join(";"), self.score)
    }
}

/// Branch-and-bound search for the highest scoring placement of the sequences.
/// Unlike `ConsensusSearch`, the bound is checked against the best score seen anywhere in the search so far.
/// That best score is raised by partial nodes too, since adding sequences never lowers a profile score.
#[derive(Debug)]
pub struct OffsetSearch<'a> {
    /// The shared search context
    problem: &'a MotifProblem<'a>,
    /// Best exact score of any node visited so far
    current_best: usize
}

impl<'a> OffsetSearch<'a> {
    /// Constructor
    pub fn new(problem: &'a MotifProblem<'a>) -> OffsetSearch<'a> {
        OffsetSearch {
            problem,
            current_best: 0
        }
    }

    /// Searches the whole tree, starting with no sequence placed.
    /// # Arguments
    /// * `perf` - the meter that counts node entries and exits
    pub fn search(&mut self, perf: &mut PerfMeter) -> Option<OffsetScore> {
        self.current_best = 0;
        let root = OffsetNode::new_root(self.problem);
        let result = self.find_offsets(root, perf);
        let report = perf.report();
        debug!("Offset search: best = {:?}, entered = {}, breaks = {}", result.as_ref().map(|r| r.score()), report.entered, report.break_exits);
        result
    }

    /// Recursively searches below `node` for the best complete placement.
    /// Returns None if every branch below this node was pruned.
    /// # Arguments
    /// * `node` - the partial placement to extend
    /// * `perf` - the meter that counts node entries and exits
    pub fn find_offsets(&mut self, node: OffsetNode, perf: &mut PerfMeter) -> Option<OffsetScore> {
        perf.count_enter();

        let actual = node.score(self.problem);
        if actual > self.current_best {
            self.current_best = actual;
        }

        if node.is_leaf() {
            perf.count_leaf();
            trace!("Leaf {:?} => {actual}", node.assignment());
            return node.placements().map(|placements| OffsetScore::new(actual, placements));
        }

        if self.problem.bounding() && should_prune(node.upper_bound(self.problem, actual), self.current_best) {
            perf.count_break();
            return None;
        }

        let mut best: Option<OffsetScore> = None;
        for child in node.expand(self.problem) {
            if let Some(result) = self.find_offsets(child, perf) {
                if best.as_ref().map_or(true, |b| result.score() > b.score()) {
                    best = Some(result);
                }
            }
        }
        perf.count_propagate();
        best
    }

    /// The best exact score seen so far
    pub fn current_best(&self) -> usize {
        self.current_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use crate::consensus_search::ConsensusSearch;
    use crate::example_gen::{generate_planted, generate_sequences};
    use crate::search_config::SearchConfig;
    use crate::sequence::Sequence;
    use crate::test_util::{config, load_csv_sequences};

    /// Runs a full search and checks the node accounting on the way out
    fn run_search(sequences: &[Sequence], config: &SearchConfig) -> (OffsetScore, u64) {
        let problem = MotifProblem::new(sequences, config).unwrap();
        let mut perf = PerfMeter::new();
        let result = OffsetSearch::new(&problem).search(&mut perf).unwrap();
        let report = perf.finish();
        assert_eq!(report.entered, report.exits());

        // the placements must reproduce the score through a profile
        let assignment: Vec<Option<Placement>> = result.placements().iter().cloned().map(Some).collect();
        let profile = problem.build_profile(&assignment).unwrap();
        assert_eq!(profile.score(&profile.consensus()), result.score());
        (result, report.entered)
    }

    fn to_codes(result: &OffsetScore, shifts: usize) -> Vec<usize> {
        result.placements().iter().map(|p| p.to_code(shifts)).collect()
    }

    #[test_log::test]
    fn test_find_offsets_5x3() {
        let sequences = load_csv_sequences(Path::new("./tests/cs5x3.csv"));

        let (result, _) = run_search(&sequences, &config(None, false, true));
        assert_eq!(result.score(), 13);

        let (result, _) = run_search(&sequences, &config(None, true, true));
        assert_eq!(result.score(), 14);
    }

    #[test_log::test]
    fn test_find_offsets_7x5() {
        let sequences = load_csv_sequences(Path::new("./tests/cs7x5.csv"));

        let (result, _) = run_search(&sequences, &config(Some(9), false, true));
        assert_eq!(result.score(), 29);
        assert_eq!(to_codes(&result, 5), vec![0, 0, 2, 0, 1, 4, 2]);

        let (result, _) = run_search(&sequences, &config(Some(9), true, true));
        assert_eq!(result.score(), 30);
        assert_eq!(to_codes(&result, 5), vec![0, 7, 5, 7, 6, 4, 5]);
    }

    #[test_log::test]
    fn test_find_offsets_5x10() {
        let sequences = load_csv_sequences(Path::new("./tests/cs5x10.csv"));

        // ---------GCGCGCGAAG
        // ----GCCGGGCGCG-----
        // ---AACGCAGCGC------
        // ATTAGCAAAA---------
        // TTTTGCTAAG---------
        let (result, _) = run_search(&sequences, &config(None, false, true));
        assert_eq!(result.score(), 40);

        let (result, _) = run_search(&sequences, &config(None, true, true));
        assert_eq!(result.score(), 42);
    }

    #[test]
    fn test_no_shift_window() {
        let sequences = load_csv_sequences(Path::new("./tests/cs5x3.csv"));
        let (result, _) = run_search(&sequences, &config(Some(3), false, true));
        assert_eq!(result.score(), 7);
        assert!(result.placements().iter().all(|&p| p == Placement::forward(0)));
    }

    #[test]
    fn test_bounding_disabled() {
        let sequences = load_csv_sequences(Path::new("./tests/cs5x3.csv"));
        for (reverse_strand, branching) in [(false, 3_u64), (true, 6)] {
            let (bounded, bounded_nodes) = run_search(&sequences, &config(None, reverse_strand, true));
            let (unbounded, unbounded_nodes) = run_search(&sequences, &config(None, reverse_strand, false));
            assert_eq!(bounded.score(), unbounded.score());
            assert_eq!(unbounded_nodes, (0..=5).map(|l| branching.pow(l)).sum::<u64>());
            assert!(bounded_nodes < unbounded_nodes);
        }
    }

    #[test]
    fn test_from_partial_assignment() {
        let sequences = load_csv_sequences(Path::new("./tests/cs5x3.csv"));
        let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();

        // pin the first sequence to the right edge, AAG can no longer share its As
        let node = OffsetNode::from_assignment(&problem, vec![
            Some(Placement::forward(2)), None, None, None, None
        ]).unwrap();
        let mut search = OffsetSearch::new(&problem);
        let mut perf = PerfMeter::new();
        let result = search.find_offsets(node, &mut perf).unwrap();
        assert_eq!(result.placements()[0], Placement::forward(2));
        assert!(result.score() <= 13);
        assert_eq!(search.current_best(), result.score());
    }

    #[test_log::test]
    fn test_planted_motif() {
        // identical sequences always align perfectly
        let (motif, sequences) = generate_planted(6, 5, 0.0, 7);
        assert_eq!(sequences[0].chars(crate::sequence::Strand::Forward), motif);
        let (result, _) = run_search(&sequences, &config(None, false, true));
        assert_eq!(result.score(), 30);
    }

    #[test_log::test]
    fn test_consensus_equivalence() {
        // both formulations of the problem must find the same optimum, for every valid window
        for seq_len in 2..6 {
            for num_sequences in 2..5 {
                let seed = (seq_len * 10 + num_sequences) as u64;
                let sequences = generate_sequences(seq_len, num_sequences, seed);
                for window in seq_len..2 * seq_len {
                    for reverse_strand in [false, true] {
                        for bounding in [true, false] {
                            let search_config = config(Some(window), reverse_strand, bounding);
                            let problem = MotifProblem::new(&sequences, &search_config).unwrap();
                            assert_eq!(problem.window(), window);

                            let mut perf = PerfMeter::new();
                            let offsets = OffsetSearch::new(&problem).search(&mut perf).unwrap();
                            let offsets_report = perf.finish();
                            assert_eq!(offsets_report.entered, offsets_report.exits());

                            let mut perf = PerfMeter::new();
                            let consensus = ConsensusSearch::new(&problem).search(&mut perf).unwrap();
                            let consensus_report = perf.finish();
                            assert_eq!(consensus_report.entered, consensus_report.exits());

                            assert_eq!(
                                offsets.score(), consensus.score(),
                                "n={seq_len} t={num_sequences} w={window} reverse={reverse_strand} bounding={bounding}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_display() {
        let result = OffsetScore::new(14, vec![Placement::forward(0), Placement::reverse(1)]);
        assert_eq!(result.to_string(), "0;1r;:14");
    }
}
