use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use motif_bnb::consensus_search::ConsensusSearch;
use motif_bnb::fasta::load_fasta;
use motif_bnb::motif_problem::MotifProblem;
use motif_bnb::offset_search::OffsetSearch;
use motif_bnb::perf_meter::PerfMeter;
use motif_bnb::projection::{consensus_to_offsets, offsets_to_consensus, render_alignment, render_consensus};
use motif_bnb::search_config::SearchConfigBuilder;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Search over consensus symbols
    Consensus,
    /// Search over sequence placements
    Offsets
}

#[derive(Parser)]
#[command(name = "motif_bnb")]
#[command(about = "Exact motif and alignment search over equal-length DNA sequences")]
#[command(version)]
struct Cli {
    /// FASTA file with the sequences
    #[arg(short, long)]
    file: PathBuf,

    /// Search method
    #[arg(short, long, value_enum)]
    method: Method,

    /// Only use the first T sequences (default: all)
    #[arg(short = 't', long)]
    limit: Option<usize>,

    /// Window width, must be in [N, 2N-1] (default: 2N-1)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Also place sequences by their reverse complement
    #[arg(short, long)]
    reverse: bool,

    /// Explore the full tree without pruning
    #[arg(long)]
    no_bound: bool,

    /// Accept lowercase residues
    #[arg(long)]
    ignore_case: bool,

    #[arg(short, long)]
    verbose: bool
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut sequences = load_fasta(&cli.file, cli.ignore_case)?;
    info!("Read {} sequences from {}", sequences.len(), cli.file.display());
    if let Some(limit) = cli.limit {
        if (1..sequences.len()).contains(&limit) {
            sequences.truncate(limit);
        }
    }

    let config = SearchConfigBuilder::default()
        .window(cli.width)
        .reverse_strand(cli.reverse)
        .bounding(!cli.no_bound)
        .build()?;
    let problem = MotifProblem::new(&sequences, &config)?;
    info!("Searching {:?} with T = {}, N = {}, W = {}", cli.method, problem.num_sequences(), problem.seq_len(), problem.window());

    let mut perf = PerfMeter::new();
    let (score, consensus, placements) = match cli.method {
        Method::Consensus => {
            let result = ConsensusSearch::new(&problem).search(&mut perf)
                .ok_or("Consensus search returned no result")?;
            let placements = consensus_to_offsets(&problem, result.consensus())?;
            (result.score(), result.consensus().to_vec(), placements)
        },
        Method::Offsets => {
            let result = OffsetSearch::new(&problem).search(&mut perf)
                .ok_or("Offset search returned no result")?;
            let consensus = offsets_to_consensus(&problem, result.placements())?;
            (result.score(), consensus, result.placements().to_vec())
        }
    };
    let report = perf.finish();

    println!("[{}]", render_consensus(&consensus));
    for row in render_alignment(&problem, &placements) {
        println!("'{row}'");
    }
    println!("Score {} ({:4.1}%)", score, 100.0 * problem.score_fraction(score));
    println!("{report}");
    Ok(())
}
