//! Command-line front end: generate matrix files, multiply them, and verify
//! a product computed by another program.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use matcheck::{Matrix, compare, load_matrix, multiply, save_matrix};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a pair of random, multiplication-compatible matrix files.
    Generate {
        /// Where to write the left matrix.
        left: PathBuf,
        /// Where to write the right matrix.
        right: PathBuf,
        /// Rows of the left matrix.
        #[arg(long, default_value_t = 4)]
        rows: usize,
        /// Columns of the left matrix and rows of the right.
        #[arg(long, default_value_t = 4)]
        inner: usize,
        /// Columns of the right matrix.
        #[arg(long, default_value_t = 4)]
        cols: usize,
        /// Seed for reproducible output; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Multiply two matrix files and write the product.
    Multiply {
        left: PathBuf,
        right: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Multiply two matrix files and check the product against a third.
    ///
    /// Exits nonzero when the matrices differ.
    Verify {
        left: PathBuf,
        right: PathBuf,
        /// The product to check, as produced by some other implementation.
        expected: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Command::Generate {
            left,
            right,
            rows,
            inner,
            cols,
            seed,
        } => {
            if rows == 0 || inner == 0 || cols == 0 {
                return Err("all dimensions must be at least 1".into());
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            save_matrix(&Matrix::random(&mut rng, rows, inner), &left)?;
            save_matrix(&Matrix::random(&mut rng, inner, cols), &right)?;
            println!(
                "wrote {rows}x{inner} to {} and {inner}x{cols} to {}",
                left.display(),
                right.display()
            );
        }
        Command::Multiply {
            left,
            right,
            output,
        } => {
            let product = multiply(&load_matrix(&left)?, &load_matrix(&right)?)?;
            match output {
                Some(path) => save_matrix(&product, path)?,
                None => print!("{product}"),
            }
        }
        Command::Verify {
            left,
            right,
            expected,
        } => {
            let product = multiply(&load_matrix(&left)?, &load_matrix(&right)?)?;
            let expected = load_matrix(&expected)?;

            println!("computed product:");
            print!("{product}");
            println!("expected product:");
            print!("{expected}");

            let verdict = compare(&product, &expected);
            println!("{verdict}");
            if !verdict.is_equal() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
