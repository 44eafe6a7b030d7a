//! Witness-input generator CLI.
//!
//! Generates the `input.json` artifact consumed by the circuit witness
//! generator, or prints the Poseidon hash of a preimage directly.

use clap::{Parser, Subcommand};
use poseidon_witness::{WitnessInput, WitnessResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "poseidon-witness")]
#[command(about = "Poseidon witness-input generator for BN254 circuits", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the witness input file
    Generate {
        /// Preimage elements as base-10 strings
        #[arg(num_args = 2, default_values = ["123456789", "987654321"])]
        preimage: Vec<String>,

        /// Output path for the artifact
        #[arg(long, default_value = "input.json")]
        out: PathBuf,
    },

    /// Print the Poseidon hash of a preimage
    Hash {
        /// Preimage elements as base-10 strings
        #[arg(num_args = 2)]
        preimage: Vec<String>,
    },
}

fn run(cli: Cli) -> WitnessResult<()> {
    match cli.command {
        Commands::Generate { preimage, out } => {
            let input = WitnessInput::generate(&preimage)?;
            input.write_to(&out)?;
            println!("{} generated with hash: {}", out.display(), input.hash);
        }
        Commands::Hash { preimage } => {
            let input = WitnessInput::generate(&preimage)?;
            println!("{}", input.hash);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
