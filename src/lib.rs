/*!
# motif_bnb
This library finds the best common motif of a set of equal-length DNA sequences with an exact branch-and-bound search.
The problem can be searched from two sides that reach the same optimal score:
* `ConsensusSearch` - assigns one symbol per column of a window of width W, scoring each sequence at its best shift
* `OffsetSearch` - assigns a placement within the window to each sequence, scoring the majority consensus of the resulting profile

Both searches can optionally place sequences by their reverse complement.

Performance notes:
* The search is exhaustive; the consensus tree has 4^W leaves and the offset tree has (W-N+1)^T leaves (doubled per level with the reverse strand)
* Pruning makes typical inputs far cheaper, but worst cases remain exponential

# Example usage
```rust
use motif_bnb::consensus_search::ConsensusSearch;
use motif_bnb::motif_problem::MotifProblem;
use motif_bnb::offset_search::OffsetSearch;
use motif_bnb::perf_meter::PerfMeter;
use motif_bnb::projection::{render_alignment, render_consensus};
use motif_bnb::search_config::SearchConfig;
use motif_bnb::sequence::Sequence;

let sequences: Vec<Sequence> = ["AAG", "GCC", "CGC", "AGC", "GCT"].iter().enumerate()
    .map(|(i, s)| Sequence::new(&format!("S{i}"), s.as_bytes()).unwrap())
    .collect();
let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();

// search over consensus symbols
let mut perf = PerfMeter::new();
let consensus = ConsensusSearch::new(&problem).search(&mut perf).unwrap();
assert_eq!(consensus.score(), 13);
assert_eq!(render_consensus(consensus.consensus()), "AAGCT");

// search over placements, same optimum
let mut perf = PerfMeter::new();
let offsets = OffsetSearch::new(&problem).search(&mut perf).unwrap();
assert_eq!(offsets.score(), 13);
assert_eq!(render_alignment(&problem, offsets.placements()).len(), 5);
```
*/

/// Bounding policy shared by both searches
pub mod bounding;
/// Branch-and-bound search over consensus symbols
pub mod consensus_search;
/// Utility for generating examples
pub mod example_gen;
/// Loading sequences from FASTA
pub mod fasta;
/// Shared search context, placements, and profile scoring
pub mod motif_problem;
/// Branch-and-bound search over sequence placements
pub mod offset_search;
/// Node entry/exit counters for a search run
pub mod perf_meter;
/// Conversion between consensus and placement results, and rendering
pub mod projection;
/// Configuration for the searches
pub mod search_config;
/// Node types for the search trees
pub mod search_node;
/// Nucleotide sequences with both strands
pub mod sequence;
/// Nucleotide symbol codec
pub mod symbol;

#[cfg(test)]
mod test_util;
