/*!
Search nodes shared by the two branch-and-bound searches.
A node is a fixed-length list of optional assignments where the assigned entries always form a prefix.
`ConsensusNode` assigns one symbol per window column, while `OffsetNode` assigns one placement per sequence.
*/

use simple_error::bail;

use crate::bounding::optimistic_bound;
use crate::motif_problem::{MotifProblem, Placement};
use crate::symbol::{Symbol, ALPHABET};

/// The contract each search tree node provides to a search strategy.
pub trait SearchNode: Clone + Sized {
    /// The number of assigned entries
    fn level(&self) -> usize;

    /// The number of entries once fully assigned, i.e. the depth of the tree
    fn depth(&self) -> usize;

    /// Returns true when every entry is assigned
    fn is_leaf(&self) -> bool {
        self.level() == self.depth()
    }

    /// The exact score over the assigned entries
    fn score(&self, problem: &MotifProblem) -> usize;

    /// The largest increase in score that one more assignment can produce
    fn gain_per_step(problem: &MotifProblem) -> usize;

    /// Optimistic bound on the score of any leaf below this node
    /// # Arguments
    /// * `problem` - the search context
    /// * `actual` - the exact score of this node, see `score(...)`
    fn upper_bound(&self, problem: &MotifProblem, actual: usize) -> usize {
        optimistic_bound(actual, self.depth() - self.level(), Self::gain_per_step(problem))
    }

    /// All children of this node in exploration order, each an independent copy; empty for a leaf
    fn expand(&self, problem: &MotifProblem) -> Vec<Self>;
}

/// Returns the number of leading assigned entries
fn assigned_level<T>(entries: &[Option<T>]) -> usize {
    entries.iter().position(|e| e.is_none()).unwrap_or(entries.len())
}

/// Makes sure nothing is assigned after the first unassigned entry
fn check_prefix<T>(entries: &[Option<T>]) -> Result<(), Box<dyn std::error::Error>> {
    let level = assigned_level(entries);
    if entries[level..].iter().any(|e| e.is_some()) {
        bail!("Assigned entries must form a prefix, found an assignment after unassigned position {level}");
    }
    Ok(())
}

/// A node of the consensus search: a partially assigned consensus over the window
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ConsensusNode {
    /// One optional symbol per window column
    prefix: Vec<Option<Symbol>>,
    /// Cached number of assigned symbols
    level: usize
}

impl ConsensusNode {
    /// Creates the root node with every column unassigned
    pub fn new_root(problem: &MotifProblem) -> ConsensusNode {
        ConsensusNode {
            prefix: vec![None; problem.window()],
            level: 0
        }
    }

    /// Creates a node from an explicit prefix
    /// # Arguments
    /// * `problem` - the search context
    /// * `prefix` - one optional symbol per window column
    /// # Errors
    /// * if the prefix length is not the window width
    /// * if any symbol is outside the alphabet
    /// * if an assigned symbol follows an unassigned one
    pub fn from_prefix(problem: &MotifProblem, prefix: Vec<Option<Symbol>>) -> Result<ConsensusNode, Box<dyn std::error::Error>> {
        if prefix.len() != problem.window() {
            bail!("Expected prefix of length {}, but got {}", problem.window(), prefix.len());
        }
        if let Some(s) = prefix.iter().flatten().find(|&&s| s == 0 || s as usize > ALPHABET.len()) {
            bail!("Invalid symbol index in prefix: {s}");
        }
        check_prefix(&prefix)?;

        let level = assigned_level(&prefix);
        Ok(ConsensusNode { prefix, level })
    }

    /// Returns the completed consensus, or None if this is not a leaf
    pub fn consensus(&self) -> Option<Vec<Symbol>> {
        self.prefix.iter().cloned().collect()
    }

    pub fn prefix(&self) -> &[Option<Symbol>] {
        &self.prefix
    }
}

impl SearchNode for ConsensusNode {
    fn level(&self) -> usize {
        self.level
    }

    fn depth(&self) -> usize {
        self.prefix.len()
    }

    fn score(&self, problem: &MotifProblem) -> usize {
        problem.score_consensus(&self.prefix).0
    }

    fn gain_per_step(problem: &MotifProblem) -> usize {
        // each sequence gains at most one match per column
        problem.num_sequences()
    }

    fn expand(&self, _problem: &MotifProblem) -> Vec<ConsensusNode> {
        if self.is_leaf() {
            return vec![];
        }
        (1..=ALPHABET.len() as Symbol)
            .map(|symbol| {
                let mut child = self.clone();
                child.prefix[self.level] = Some(symbol);
                child.level += 1;
                child
            })
            .collect()
    }
}

/// A node of the offset search: a partial placement of the sequences
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OffsetNode {
    /// One optional placement per sequence
    assignment: Vec<Option<Placement>>,
    /// Cached number of placed sequences
    level: usize
}

impl OffsetNode {
    /// Creates the root node with no sequence placed
    pub fn new_root(problem: &MotifProblem) -> OffsetNode {
        OffsetNode {
            assignment: vec![None; problem.num_sequences()],
            level: 0
        }
    }

    /// Creates a node from an explicit assignment
    /// # Arguments
    /// * `problem` - the search context
    /// * `assignment` - one optional placement per sequence
    /// # Errors
    /// * if any placement does not fit the problem, see `MotifProblem::build_profile(...)`
    /// * if a placed sequence follows an unplaced one
    pub fn from_assignment(problem: &MotifProblem, assignment: Vec<Option<Placement>>) -> Result<OffsetNode, Box<dyn std::error::Error>> {
        problem.build_profile(&assignment)?;
        check_prefix(&assignment)?;

        let level = assigned_level(&assignment);
        Ok(OffsetNode { assignment, level })
    }

    /// Returns the completed placements, or None if this is not a leaf
    pub fn placements(&self) -> Option<Vec<Placement>> {
        self.assignment.iter().cloned().collect()
    }

    pub fn assignment(&self) -> &[Option<Placement>] {
        &self.assignment
    }
}

impl SearchNode for OffsetNode {
    fn level(&self) -> usize {
        self.level
    }

    fn depth(&self) -> usize {
        self.assignment.len()
    }

    fn score(&self, problem: &MotifProblem) -> usize {
        let profile = problem.profile(&self.assignment);
        profile.score(&profile.consensus())
    }

    fn gain_per_step(problem: &MotifProblem) -> usize {
        // a newly placed sequence adds at most one match per position
        problem.seq_len()
    }

    fn expand(&self, problem: &MotifProblem) -> Vec<OffsetNode> {
        if self.is_leaf() {
            return vec![];
        }
        problem.placements()
            .map(|placement| {
                let mut child = self.clone();
                child.assignment[self.level] = Some(placement);
                child.level += 1;
                child
            })
            .collect()
    }
}
