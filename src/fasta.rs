/*!
Loads sequences from FASTA input.
Records that contain characters outside the nucleotide alphabet are skipped with a warning instead of failing the whole load.
```
use motif_bnb::fasta::read_fasta;
let data = b">S1 first\nAAG\n>S2\nGNC\n>S3\nCG\nC\n";
let sequences = read_fasta(&data[..], false).unwrap();
assert_eq!(sequences.len(), 2);
assert_eq!(sequences[1].name(), "S3");
```
*/

use bio::io::fasta;
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::sequence::Sequence;

/// Reads all valid sequences from a FASTA reader.
/// # Arguments
/// * `reader` - the FASTA data source
/// * `ignore_case` - if true, residues are upper-cased before conversion
/// # Errors
/// * if the FASTA data cannot be read or parsed
pub fn read_fasta<R: Read>(reader: R, ignore_case: bool) -> Result<Vec<Sequence>, Box<dyn std::error::Error>> {
    let mut sequences = vec![];
    let mut skipped: usize = 0;
    for result in fasta::Reader::new(reader).records() {
        let record = result?;
        let residues: Vec<u8> = if ignore_case {
            record.seq().to_ascii_uppercase()
        } else {
            record.seq().to_vec()
        };

        match Sequence::new(record.id(), &residues) {
            Ok(sequence) => sequences.push(sequence),
            Err(e) => {
                warn!("Ignored {}: {e}", record.id());
                skipped += 1;
            }
        }
    }
    debug!("Loaded {} sequences, skipped {skipped}", sequences.len());
    Ok(sequences)
}

/// Reads all valid sequences from a FASTA file.
/// # Arguments
/// * `filename` - the path to the FASTA file
/// * `ignore_case` - if true, residues are upper-cased before conversion
/// # Errors
/// * if the file cannot be opened or parsed
pub fn load_fasta<P: AsRef<Path>>(filename: P, ignore_case: bool) -> Result<Vec<Sequence>, Box<dyn std::error::Error>> {
    let file = File::open(filename.as_ref())?;
    read_fasta(file, ignore_case)
}
