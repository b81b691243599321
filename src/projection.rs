/*!
Conversions between the two result types, plus plain-text rendering for reports.
```
use motif_bnb::motif_problem::{MotifProblem, Placement};
use motif_bnb::projection::{offsets_to_consensus, render_alignment, render_consensus};
use motif_bnb::search_config::SearchConfig;
use motif_bnb::sequence::Sequence;

let sequences = vec![
    Sequence::new("S1", b"AAG").unwrap(),
    Sequence::new("S2", b"GCC").unwrap()
];
let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();
let placements = [Placement::forward(0), Placement::forward(2)];
assert_eq!(render_alignment(&problem, &placements), vec!["AAG--", "--GCC"]);

let consensus = offsets_to_consensus(&problem, &placements).unwrap();
assert_eq!(render_consensus(&consensus), "AAGCC");
```
*/

use simple_error::bail;

use crate::motif_problem::{MotifProblem, Placement};
use crate::symbol::{char_of, Symbol, ALPHABET};

/// Gap character used to pad rendered alignments
pub const GAP: char = '-';

/// Returns the majority consensus of a complete placement, ties go to the lowest symbol.
/// # Arguments
/// * `problem` - the search context
/// * `placements` - one placement per sequence
/// # Errors
/// * if the placements do not fit the problem
pub fn offsets_to_consensus(problem: &MotifProblem, placements: &[Placement]) -> Result<Vec<Symbol>, Box<dyn std::error::Error>> {
    let assignment: Vec<Option<Placement>> = placements.iter().cloned().map(Some).collect();
    let profile = problem.build_profile(&assignment)?;
    Ok(profile.consensus())
}

/// Returns the best placement of each sequence against a complete consensus
/// # Arguments
/// * `problem` - the search context
/// * `consensus` - one symbol per window column
/// # Errors
/// * if the consensus length differs from the window width
/// * if the consensus contains a symbol outside the alphabet
pub fn consensus_to_offsets(problem: &MotifProblem, consensus: &[Symbol]) -> Result<Vec<Placement>, Box<dyn std::error::Error>> {
    if consensus.len() != problem.window() {
        bail!("Expected a consensus of width {}, but got {}", problem.window(), consensus.len());
    }
    if let Some(s) = consensus.iter().find(|&&s| s == 0 || s as usize > ALPHABET.len()) {
        bail!("Invalid symbol in consensus: {s}");
    }
    let prefix: Vec<Option<Symbol>> = consensus.iter().cloned().map(Some).collect();
    Ok(problem.score_consensus(&prefix).1)
}

/// Renders symbols as a string, anything outside the alphabet is blank
pub fn render_consensus(consensus: &[Symbol]) -> String {
    consensus.iter()
        .map(|&s| char_of(s) as char)
        .collect()
}

/// Renders each placed sequence as a row of the window, padded with `GAP`.
/// Sequences on the reverse strand are shown as their reverse complement.
/// # Arguments
/// * `problem` - the search context
/// * `placements` - one placement per sequence
pub fn render_alignment(problem: &MotifProblem, placements: &[Placement]) -> Vec<String> {
    problem.sequences().iter().zip(placements.iter())
        .map(|(sequence, placement)| {
            let start = placement.start();
            let tail = problem.window().saturating_sub(start + sequence.len());
            let mut row = String::with_capacity(problem.window());
            row.extend(std::iter::repeat(GAP).take(start));
            row.extend(sequence.chars(placement.strand()).into_iter().map(|c| c as char));
            row.extend(std::iter::repeat(GAP).take(tail));
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::consensus_search::ConsensusSearch;
    use crate::offset_search::OffsetSearch;
    use crate::perf_meter::PerfMeter;
    use crate::search_config::{SearchConfig, SearchConfigBuilder};
    use crate::sequence::Sequence;

    fn build_sequences() -> Vec<Sequence> {
        ["AAG", "GCC", "CGC", "AGC", "GCT"].iter().enumerate()
            .map(|(i, s)| Sequence::new(&format!("S{}", i + 1), s.as_bytes()).unwrap())
            .collect()
    }

    #[test]
    fn test_render_consensus() {
        assert_eq!(render_consensus(&[1, 2, 3, 4]), "ACGT");
        assert_eq!(render_consensus(&[1, 0, 4]), "A T");
    }

    #[test]
    fn test_render_alignment() {
        let sequences = build_sequences();
        let config = SearchConfigBuilder::default().reverse_strand(true).build().unwrap();
        let problem = MotifProblem::new(&sequences, &config).unwrap();
        let placements = [
            Placement::forward(0),
            Placement::forward(2),
            Placement::forward(1),
            Placement::forward(1),
            Placement::reverse(1)
        ];
        assert_eq!(render_alignment(&problem, &placements), vec![
            "AAG--", "--GCC", "-CGC-", "-AGC-", "-AGC-"
        ]);
    }

    #[test]
    fn test_consensus_to_offsets() {
        let sequences = build_sequences();
        let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();

        // AAGCT
        let placements = consensus_to_offsets(&problem, &[1, 1, 3, 2, 4]).unwrap();
        assert_eq!(placements, vec![
            Placement::forward(0),
            Placement::forward(2),
            Placement::forward(1),
            Placement::forward(1),
            Placement::forward(2)
        ]);
        assert_eq!(render_alignment(&problem, &placements), vec![
            "AAG--", "--GCC", "-CGC-", "-AGC-", "--GCT"
        ]);
    }

    #[test]
    fn test_consensus_to_offsets_errors() {
        let sequences = build_sequences();
        let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();

        // wrong width
        assert!(consensus_to_offsets(&problem, &[1, 1, 3]).is_err());
        assert!(consensus_to_offsets(&problem, &[1, 1, 3, 2, 4, 4]).is_err());
        // blank and out of range symbols
        assert!(consensus_to_offsets(&problem, &[1, 0, 3, 2, 4]).is_err());
        assert!(consensus_to_offsets(&problem, &[1, 1, 5, 2, 4]).is_err());
    }

    #[test]
    fn test_offsets_to_consensus() {
        let sequences = build_sequences();
        let problem = MotifProblem::new(&sequences, &SearchConfig::default()).unwrap();
        let placements = [
            Placement::forward(0),
            Placement::forward(2),
            Placement::forward(1),
            Placement::forward(1),
            Placement::forward(2)
        ];
        // the last column ties C and T, the lower index wins
        assert_eq!(render_consensus(&offsets_to_consensus(&problem, &placements).unwrap()), "AAGCC");

        assert!(offsets_to_consensus(&problem, &[Placement::forward(3)]).is_err());
    }

    #[test]
    fn test_round_trip_scores() {
        // projecting a search result to the other side keeps the optimal score
        let sequences = build_sequences();
        for reverse_strand in [false, true] {
            let config = SearchConfigBuilder::default().reverse_strand(reverse_strand).build().unwrap();
            let problem = MotifProblem::new(&sequences, &config).unwrap();

            let mut perf = PerfMeter::new();
            let consensus_result = ConsensusSearch::new(&problem).search(&mut perf).unwrap();
            let placements = consensus_to_offsets(&problem, consensus_result.consensus()).unwrap();
            let assignment: Vec<Option<Placement>> = placements.iter().cloned().map(Some).collect();
            let profile = problem.build_profile(&assignment).unwrap();
            assert_eq!(profile.score(&profile.consensus()), consensus_result.score());

            let mut perf = PerfMeter::new();
            let offset_result = OffsetSearch::new(&problem).search(&mut perf).unwrap();
            let consensus = offsets_to_consensus(&problem, offset_result.placements()).unwrap();
            let prefix: Vec<Option<Symbol>> = consensus.iter().cloned().map(Some).collect();
            assert_eq!(problem.score_consensus(&prefix).0, offset_result.score());
        }
    }
}
