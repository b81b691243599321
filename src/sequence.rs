use simple_error::{bail, SimpleError};

use crate::symbol::{char_of, complement, index_of, Symbol};

/// Which strand of a sequence is being read
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Strand {
    /// The sequence as it was provided
    #[default]
    Forward,
    /// The reverse complement of the provided sequence
    Reverse
}

/// An immutable nucleotide sequence with both of its strands pre-converted to symbol indices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence {
    /// Name of the sequence, typically the FASTA identifier
    name: String,
    /// Symbols of the provided strand
    forward: Vec<Symbol>,
    /// Symbols of the reverse complement strand
    reverse: Vec<Symbol>
}

impl Sequence {
    /// Constructor, converts every character and builds the reverse complement.
    /// # Arguments
    /// * `name` - the name of the sequence
    /// * `residues` - the characters of the sequence, must all be in `ALPHABET`
    /// # Errors
    /// * if the sequence is empty
    /// * if any character is not a valid nucleotide
    pub fn new(name: &str, residues: &[u8]) -> Result<Sequence, SimpleError> {
        if residues.is_empty() {
            bail!("Sequence {name} is empty");
        }

        let forward = residues.iter()
            .map(|&c| index_of(c))
            .collect::<Result<Vec<Symbol>, SimpleError>>()?;
        let reverse = forward.iter().rev()
            .map(|&s| complement(s))
            .collect();

        Ok(Sequence {
            name: name.to_string(),
            forward,
            reverse
        })
    }

    /// Returns the symbol at a position of the given strand
    /// # Panics
    /// * if `position` is past the end of the sequence
    pub fn symbol(&self, position: usize, strand: Strand) -> Symbol {
        self.symbols(strand)[position]
    }

    /// Returns all symbols of the given strand
    pub fn symbols(&self, strand: Strand) -> &[Symbol] {
        match strand {
            Strand::Forward => &self.forward,
            Strand::Reverse => &self.reverse
        }
    }

    /// Returns the printable characters of the given strand
    pub fn chars(&self, strand: Strand) -> Vec<u8> {
        self.symbols(strand).iter()
            .map(|&s| char_of(s))
            .collect()
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strands() {
        let seq = Sequence::new("S1", b"AACGT").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.symbols(Strand::Forward), &[1, 1, 2, 3, 4]);
        // ACGTT
        assert_eq!(seq.symbols(Strand::Reverse), &[1, 2, 3, 4, 4]);
        assert_eq!(seq.chars(Strand::Reverse), b"ACGTT".to_vec());
        assert_eq!(seq.symbol(1, Strand::Forward), 1);
        assert_eq!(seq.symbol(1, Strand::Reverse), 2);
        assert_eq!(seq.to_string(), "S1 (5)");
    }

    #[test]
    fn test_reverse_is_complement() {
        let seq = Sequence::new("S1", b"GATTACA").unwrap();
        let n = seq.len();
        for i in 0..n {
            assert_eq!(seq.symbol(i, Strand::Reverse), 5 - seq.symbol(n - 1 - i, Strand::Forward));
        }
    }

    #[test]
    fn test_invalid_sequences() {
        let err = Sequence::new("bad", b"ACNGT").unwrap_err();
        assert_eq!(err.to_string(), "Invalid character in sequence: N");

        let err = Sequence::new("empty", b"").unwrap_err();
        assert_eq!(err.to_string(), "Sequence empty is empty");
    }
}
