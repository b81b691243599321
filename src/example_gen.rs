use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

use crate::sequence::Sequence;
use crate::symbol::ALPHABET;

/// Creates a reproducible set of uniformly random sequences named `S1`, `S2`, ...
/// # Arguments
/// * `seq_len` - the length of each sequence
/// * `num_sequences` - the number of sequences to generate
/// * `seed` - seed for the random generator
pub fn generate_sequences(seq_len: usize, num_sequences: usize, seed: u64) -> Vec<Sequence> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let base_distribution = Uniform::new(0, ALPHABET.len());

    (0..num_sequences)
        .map(|i| {
            let residues: Vec<u8> = (0..seq_len)
                .map(|_j| ALPHABET[rng.sample(base_distribution)])
                .collect();
            Sequence::new(&format!("S{}", i + 1), &residues)
                .expect("generated residues are always valid")
        })
        .collect()
}

/// Creates a test set where every sequence is a noisy copy of one random motif.
/// Returns the motif characters and the sequences.
/// # Arguments
/// * `seq_len` - the length of the motif and each sequence
/// * `num_sequences` - the number of sequences to generate
/// * `error_rate` - probability that any one position is substituted
/// * `seed` - seed for the random generator
pub fn generate_planted(seq_len: usize, num_sequences: usize, error_rate: f64, seed: u64) -> (Vec<u8>, Vec<Sequence>) {
    assert!((0.0..=1.0).contains(&error_rate));

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let base_distribution = Uniform::new(0, ALPHABET.len());
    let basem1_distribution = Uniform::new(1, ALPHABET.len());
    let error_distribution = Uniform::new(0.0, 1.0);

    let motif: Vec<usize> = (0..seq_len)
        .map(|_i| rng.sample(base_distribution))
        .collect();

    let sequences = (0..num_sequences)
        .map(|i| {
            let residues: Vec<u8> = motif.iter()
                .map(|&b| {
                    if rng.sample(error_distribution) < error_rate {
                        // substitution to any other base
                        ALPHABET[(b + rng.sample(basem1_distribution)) % ALPHABET.len()]
                    } else {
                        ALPHABET[b]
                    }
                })
                .collect();
            Sequence::new(&format!("S{}", i + 1), &residues)
                .expect("generated residues are always valid")
        })
        .collect();

    let motif_chars = motif.iter().map(|&b| ALPHABET[b]).collect();
    (motif_chars, sequences)
}
