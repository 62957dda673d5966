//! Truth tables of a full-adder sum bit and a half-adder sum bit.
//!
//! **Usage**:
//! ```bash
//! cargo run --example xor
//! cargo run --example xor -- --words --no-row-numbers
//! cargo run --example xor -- -vv
//! ```

use clap::Parser;
use color_eyre::Result;
use truth_rs::render::RenderConfig;
use truth_rs::table::TruthTable;

#[derive(Debug, Parser)]
#[command(name = "XOR truth tables")]
#[command(about = "Print the truth tables of 3-input and 2-input XOR", long_about = None)]
struct Cli {
    /// Print True/False instead of 1/0
    #[arg(long)]
    words: bool,

    /// Hide the row-number column
    #[arg(long)]
    no_row_numbers: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let f = |a: bool, b: bool, c_in: bool| a ^ b ^ c_in;
    let f1 = |a: bool, b: bool| a ^ b;

    let f_table = TruthTable::of(f)?;
    print_table(&f_table, &cli, "F", &["a", "b", "c_in", "f(x)"])?;

    let f1_table = TruthTable::of(f1)?;
    print_table(&f1_table, &cli, "F1", &["a", "b", "a ^ b"])?;

    log::info!("F has {} minterms, F1 has {}", f_table.sat_count(), f1_table.sat_count());

    Ok(())
}

fn print_table(table: &TruthTable, cli: &Cli, title: &str, labels: &[&str]) -> Result<()> {
    let mut columns = Vec::with_capacity(labels.len() + 1);
    if !cli.no_row_numbers {
        columns.push("#");
    }
    columns.extend_from_slice(labels);

    let mut config = RenderConfig::default()
        .with_columns(columns)
        .with_title(title)
        .with_row_number(!cli.no_row_numbers);
    if !cli.words {
        config = config.with_symbols("1", "0");
    }

    table.print(&config)?;
    println!();
    Ok(())
}
