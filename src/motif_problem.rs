/*!
This module provides the `MotifProblem`, the shared context for both searches: the sequences, the window they are placed in, and the scoring model.
Scores can be computed from a placement of the sequences (via a `Profile`) or from a consensus (by sliding each sequence across it); on complete inputs the optimal values of both agree.

# Example usage
```rust
use motif_bnb::motif_problem::{MotifProblem, Placement};
use motif_bnb::search_config::SearchConfigBuilder;
use motif_bnb::sequence::Sequence;

let sequences = vec![
    Sequence::new("S1", b"AAG").unwrap(),
    Sequence::new("S2", b"AGC").unwrap()
];
let config = SearchConfigBuilder::default().window(Some(4)).build().unwrap();
let problem = MotifProblem::new(&sequences, &config).unwrap();

// AAG-
// -AGC
let placements = [Some(Placement::forward(0)), Some(Placement::forward(1))];
let profile = problem.build_profile(&placements).unwrap();
let consensus = profile.consensus();
assert_eq!(profile.score(&consensus), 6);
```
*/

use log::debug;
use simple_error::bail;

use crate::search_config::SearchConfig;
use crate::sequence::{Sequence, Strand};
use crate::symbol::{Symbol, ALPHABET};

/// Where one sequence sits in the window: the first column it covers and which strand is read there.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Placement {
    /// First window column covered by the sequence
    start: usize,
    /// The strand whose symbols are placed
    strand: Strand
}

impl Placement {
    /// General constructor
    pub fn new(start: usize, strand: Strand) -> Placement {
        Placement { start, strand }
    }

    /// Placement of the provided strand
    pub fn forward(start: usize) -> Placement {
        Placement::new(start, Strand::Forward)
    }

    /// Placement of the reverse complement strand
    pub fn reverse(start: usize) -> Placement {
        Placement::new(start, Strand::Reverse)
    }

    /// Decodes the integer form of a placement.
    /// Codes `0..shifts` are forward starts and codes `shifts..2*shifts` are reverse starts offset by `shifts`.
    /// # Arguments
    /// * `code` - the encoded placement
    /// * `shifts` - the number of starts available in the window, i.e. W - N + 1
    pub fn from_code(code: usize, shifts: usize) -> Placement {
        if code < shifts {
            Placement::forward(code)
        } else {
            Placement::reverse(code - shifts)
        }
    }

    /// Encodes the placement into its integer form, see `from_code(...)`
    pub fn to_code(&self, shifts: usize) -> usize {
        match self.strand {
            Strand::Forward => self.start,
            Strand::Reverse => self.start + shifts
        }
    }

    // Getters
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.strand {
            Strand::Forward => write!(f, "{}", self.start),
            Strand::Reverse => write!(f, "{}r", self.start)
        }
    }
}

/// Symbol counts for each column of the window.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Profile {
    /// For each column, the count of each symbol; symbol `s` is at index `s - 1`
    columns: Vec<[usize; ALPHABET.len()]>
}

impl Profile {
    /// Creates an all-zero profile
    /// # Arguments
    /// * `width` - the number of columns
    pub fn with_width(width: usize) -> Profile {
        Profile {
            columns: vec![[0; ALPHABET.len()]; width]
        }
    }

    /// Creates a profile from explicit per-column counts
    pub fn from_columns(columns: Vec<[usize; ALPHABET.len()]>) -> Profile {
        Profile { columns }
    }

    /// Adds the symbols of one placed sequence
    /// # Arguments
    /// * `symbols` - the symbols to add
    /// * `start` - the column of the first symbol
    fn add(&mut self, symbols: &[Symbol], start: usize) {
        for (column, &symbol) in self.columns[start..start + symbols.len()].iter_mut().zip(symbols.iter()) {
            column[symbol as usize - 1] += 1;
        }
    }

    /// Returns the number of placed positions showing `symbol` in `column`
    /// # Panics
    /// * if `symbol` is not in `1..=4` or `column` is outside the profile
    pub fn count(&self, symbol: Symbol, column: usize) -> usize {
        self.columns[column][symbol as usize - 1]
    }

    /// Returns the majority symbol of every column.
    /// Ties go to the lowest symbol index, so an empty column reports `A`.
    pub fn consensus(&self) -> Vec<Symbol> {
        self.columns.iter()
            .map(|counts| {
                let mut best = 0;
                for (i, &c) in counts.iter().enumerate().skip(1) {
                    if c > counts[best] {
                        best = i;
                    }
                }
                best as Symbol + 1
            })
            .collect()
    }

    /// Sums the counts of the consensus symbol across all columns
    /// # Arguments
    /// * `consensus` - one symbol per column
    pub fn score(&self, consensus: &[Symbol]) -> usize {
        assert_eq!(consensus.len(), self.columns.len());
        self.columns.iter().zip(consensus.iter())
            .map(|(counts, &symbol)| counts[symbol as usize - 1])
            .sum()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// The shared search context: equal-length sequences placed within a window of width W.
#[derive(Clone, Debug)]
pub struct MotifProblem<'a> {
    /// The sequences, all of length `seq_len`
    sequences: &'a [Sequence],
    /// The common sequence length N
    seq_len: usize,
    /// The window width W, N <= W <= 2N - 1
    window: usize,
    /// If true, reverse complement placements are allowed
    reverse_strand: bool,
    /// If false, searches never prune
    bounding: bool
}

impl<'a> MotifProblem<'a> {
    /// Creates the search context and checks the inputs.
    /// A requested window outside of [N, 2N-1] is replaced by 2N-1.
    /// # Arguments
    /// * `sequences` - the sequences to search over
    /// * `config` - window, strand, and bounding options
    /// # Errors
    /// * if no sequences are provided
    /// * if the sequences do not all have the same length
    /// * if W or the number of sequences exceeds the configured `max_depth`
    pub fn new(sequences: &'a [Sequence], config: &SearchConfig) -> Result<MotifProblem<'a>, Box<dyn std::error::Error>> {
        if sequences.is_empty() {
            bail!("Must provide at least one sequence");
        }

        let seq_len = sequences[0].len();
        for sequence in sequences.iter() {
            if sequence.len() != seq_len {
                bail!("Sequences must have identical lengths: expected {seq_len}, found {} for {}", sequence.len(), sequence.name());
            }
        }

        let max_window = 2 * seq_len - 1;
        let window = match config.window {
            Some(w) if (seq_len..=max_window).contains(&w) => w,
            requested => {
                debug!("Window {requested:?} outside [{seq_len}, {max_window}], using {max_window}");
                max_window
            }
        };

        if window > config.max_depth || sequences.len() > config.max_depth {
            bail!("Search depth exceeds maximum of {}: W = {window}, T = {}", config.max_depth, sequences.len());
        }

        Ok(MotifProblem {
            sequences,
            seq_len,
            window,
            reverse_strand: config.reverse_strand,
            bounding: config.bounding
        })
    }

    /// Number of start positions for one strand, W - N + 1
    pub fn shifts(&self) -> usize {
        self.window - self.seq_len + 1
    }

    /// All candidate placements for one sequence, forward starts first and then reverse starts
    pub fn placements(&self) -> impl Iterator<Item = Placement> {
        let shifts = self.shifts();
        let num_codes = if self.reverse_strand { 2 * shifts } else { shifts };
        (0..num_codes).map(move |code| Placement::from_code(code, shifts))
    }

    /// Builds the profile of a (possibly partial) placement of the sequences.
    /// Unassigned sequences contribute nothing.
    /// # Arguments
    /// * `assignment` - one optional placement per sequence
    /// # Errors
    /// * if the assignment length differs from the number of sequences
    /// * if any placement would extend past the window or uses a disabled strand
    pub fn build_profile(&self, assignment: &[Option<Placement>]) -> Result<Profile, Box<dyn std::error::Error>> {
        if assignment.len() != self.sequences.len() {
            bail!("Expected {} placements, but got {}", self.sequences.len(), assignment.len());
        }
        for (i, placement) in assignment.iter().enumerate() {
            if let Some(p) = placement {
                if p.start() + self.seq_len > self.window {
                    bail!("Placement of sequence {i} at {} does not fit in window of width {}", p.start(), self.window);
                }
                if p.strand() == Strand::Reverse && !self.reverse_strand {
                    bail!("Placement of sequence {i} uses the reverse strand, but reverse strand is disabled");
                }
            }
        }
        Ok(self.profile(assignment))
    }

    /// Builds a profile without validating the placements, they must come from `placements()`.
    pub(crate) fn profile(&self, assignment: &[Option<Placement>]) -> Profile {
        let mut profile = Profile::with_width(self.window);
        for (sequence, placement) in self.sequences.iter().zip(assignment.iter()) {
            if let Some(p) = placement {
                profile.add(sequence.symbols(p.strand()), p.start());
            }
        }
        profile
    }

    /// Scores a (possibly partial) consensus by sliding every sequence across it.
    /// Only assigned columns are compared. For each sequence, the best placement is kept; a later placement only replaces it with a strictly higher score.
    /// Returns the total score and the best placement of each sequence.
    /// # Arguments
    /// * `consensus` - one optional symbol per window column
    pub fn score_consensus(&self, consensus: &[Option<Symbol>]) -> (usize, Vec<Placement>) {
        assert_eq!(consensus.len(), self.window);
        let strands: &[Strand] = if self.reverse_strand {
            &[Strand::Forward, Strand::Reverse]
        } else {
            &[Strand::Forward]
        };

        let mut total_score = 0;
        let mut best_placements = Vec::with_capacity(self.sequences.len());
        for sequence in self.sequences.iter() {
            let mut best_score = 0;
            let mut best_placement = Placement::forward(0);
            for start in 0..self.shifts() {
                let window_slice = &consensus[start..start + self.seq_len];
                for &strand in strands.iter() {
                    let score = window_slice.iter().zip(sequence.symbols(strand).iter())
                        .filter(|(c, &s)| **c == Some(s))
                        .count();
                    if score > best_score {
                        best_score = score;
                        best_placement = Placement::new(start, strand);
                    }
                }
            }
            total_score += best_score;
            best_placements.push(best_placement);
        }
        (total_score, best_placements)
    }

    /// Fraction of all sequence positions that a score represents
    pub fn score_fraction(&self, score: usize) -> f64 {
        score as f64 / (self.sequences.len() * self.seq_len) as f64
    }

    // Getters
    pub fn sequences(&self) -> &'a [Sequence] {
        self.sequences
    }

    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn reverse_strand(&self) -> bool {
        self.reverse_strand
    }

    pub fn bounding(&self) -> bool {
        self.bounding
    }
}
