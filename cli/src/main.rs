use std::path::PathBuf;
use std::process;

use boolsynth::{solve, Mode, TruthTable};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Brute-force synthesizer for layered Boolean logic circuits.
#[derive(Parser)]
#[command(name = "boolsynth")]
#[command(about = "Synthesize a layered Boolean circuit matching a truth table", long_about = None)]
#[command(version)]
struct Cli {
    /// Truth table CSV path (header line, then input[,output[,dont_care]] rows)
    #[arg(value_name = "TRUTH_TABLE")]
    truth_table: PathBuf,

    /// Comma-separated layer widths: input, zero or more hidden, output
    #[arg(short, long, value_name = "W,W,...", value_delimiter = ',', required = true)]
    layers: Vec<usize>,

    /// Comma-separated allowed gate modes (AND, OR, XOR, NAND, NOR, XNOR)
    #[arg(short, long, value_name = "MODE,MODE,...", value_delimiter = ',', required = true)]
    modes: Vec<String>,

    /// Restrict each layer to reading only its immediate predecessor
    #[arg(long)]
    balanced: bool,
}

fn parse_mode(name: &str) -> Result<Mode> {
    match name.trim().to_ascii_uppercase().as_str() {
        "AND" => Ok(Mode::And),
        "OR" => Ok(Mode::Or),
        "XOR" => Ok(Mode::Xor),
        "NAND" => Ok(Mode::Nand),
        "NOR" => Ok(Mode::Nor),
        "XNOR" => Ok(Mode::Xnor),
        other => Err(format!("unknown gate mode '{other}'").into()),
    }
}

fn run(cli: Cli) -> Result<bool> {
    let modes = cli.modes.iter().map(|m| parse_mode(m)).collect::<Result<Vec<_>>>()?;
    let table = TruthTable::read_csv(&cli.truth_table);
    log::info!("loaded {} truth table rows from {}", table.entries.len(), cli.truth_table.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    spinner.set_message("searching for a satisfying circuit...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let result = solve(&cli.layers, &table, &modes, cli.balanced)?;

    match &result {
        Some(_) => spinner.finish_with_message("found a satisfying circuit"),
        None => spinner.finish_with_message("no circuit solution found"),
    }

    match result {
        Some(circuit) => {
            print!("{circuit}");
            Ok(true)
        }
        None => {
            println!("no circuit solution found");
            Ok(false)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}
