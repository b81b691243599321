use std::path::Path;

use crate::search_config::{SearchConfig, SearchConfigBuilder};
use crate::sequence::Sequence;

#[derive(Debug, serde::Deserialize)]
struct SequenceRecord {
    name: String,
    sequence: String
}

/// Loads a test set of sequences from a csv file with columns "name" and "sequence"
pub fn load_csv_sequences(filename: &Path) -> Vec<Sequence> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(filename)
        .unwrap();
    csv_reader.deserialize()
        .map(|row| {
            let record: SequenceRecord = row.unwrap();
            Sequence::new(&record.name, record.sequence.as_bytes()).unwrap()
        })
        .collect()
}

pub fn config(window: Option<usize>, reverse_strand: bool, bounding: bool) -> SearchConfig {
    SearchConfigBuilder::default()
        .window(window)
        .reverse_strand(reverse_strand)
        .bounding(bounding)
        .build().unwrap()
}
