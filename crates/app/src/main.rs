//! parity-sim: command-line driver for the bitstream parity pipeline.
//!
//! Runs the full pipeline stage by stage: adapt a file into a bitstream,
//! protect it with the (11,7) parity code, optionally scramble it, verify
//! the cipher round trip, then run a corruption campaign against the
//! protected stream and print what the parity code caught.

mod config;
mod input_gen;

use config::Config;
use parity_sim_core::{adapter, cipher, corruption, metrics::SimulationMetrics, parity};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> parity_sim_core::Result<()> {
    // Resolve the input file, generating a sample when none was given.
    let path = match &config.input_file {
        Some(path) => path.clone(),
        None => {
            let path = PathBuf::from("./sample.bin");
            input_gen::write_sample_file(&path, config.seed, config.max_bytes)?;
            println!("Generated sample input: {} ({} bytes)", path.display(), config.max_bytes);
            path
        }
    };

    // Stage 1: bytes -> bitstream
    let bits = adapter::parse_file(&path, config.max_bytes)?;
    println!("Bitstream: {} bits", bits.len());

    // Stage 2: parity protection
    let protected = parity::encode(&bits)?;
    println!(
        "Protected: {} bits ({} codewords)",
        protected.len(),
        protected.len() / parity::CODE_BITS
    );

    // Stage 3: optional cipher leg, decrypted before validation
    let received = match config.cipher {
        Some(kind) => {
            let scrambled = cipher::encrypt(&protected, kind, &config.key)?;
            println!("Scrambled with {} (key {:?})", kind.name(), config.key);
            cipher::decrypt(&scrambled, kind, &config.key)?
        }
        None => protected.clone(),
    };

    let clean = parity::validate(&received)?;
    println!(
        "Clean-channel validation: {}",
        if clean { "PASSED" } else { "FAILED" }
    );

    // Stage 4: corruption campaign against the protected stream
    let mut metrics = SimulationMetrics::new();
    metrics.source_bits = bits.len() as u64;
    metrics.protected_bits = protected.len() as u64;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    corruption::run_trials(
        &protected,
        config.error_rate,
        config.trials,
        &mut rng,
        &mut metrics,
    )?;
    metrics.complete();

    if config.print_metrics {
        metrics.print_summary();
    } else {
        println!(
            "Detection rate: {:.2}% over {} corrupted trials",
            metrics.detection_rate() * 100.0,
            metrics.trials_corrupted
        );
    }

    Ok(())
}
