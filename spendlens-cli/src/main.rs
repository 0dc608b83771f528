use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spendlens_core::analyze;
use spendlens_ingest::parse_dbs_text;
use std::path::PathBuf;

mod extract;

#[derive(Parser, Debug)]
#[command(name = "spendlens", version, about = "DBS statement parsing and spending analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one statement and print its transactions
    Parse {
        /// Statement file (.pdf, or already-extracted text)
        file: PathBuf,

        /// Emit the transactions as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse one or more statements and print monthly spending summaries
    Summary {
        /// Statement files (.pdf, or already-extracted text)
        files: Vec<PathBuf>,

        /// Emit the summaries as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { file, json } => {
            let txns = parse_file(&file)?;

            if txns.is_empty() {
                println!("No transactions found in {}", file.display());
                return Ok(());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&txns)?);
            } else {
                println!("Parsed {} transactions from {}\n", txns.len(), file.display());
                for t in &txns {
                    println!(
                        "{} | {:+10.2} | balance {:>12.2} | {:<20} | {}",
                        t.date,
                        t.signed_amount(),
                        t.balance,
                        t.category.to_string(),
                        t.description
                    );
                    if let Some(sender) = &t.sender {
                        println!("           from: {}", sender);
                    }
                }
            }
        }

        Command::Summary { files, json } => {
            if files.is_empty() {
                bail!("no statement files given");
            }

            let mut all = Vec::new();
            for file in &files {
                all.extend(parse_file(file)?);
            }

            if all.is_empty() {
                println!("No transactions found across {} file(s)", files.len());
                return Ok(());
            }

            let summaries = analyze(&all);

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for s in &summaries {
                    println!("## {}", s.month);
                    println!(
                        "  in {:.2} | out {:.2} | net {:+.2} | {} transactions",
                        s.total_income,
                        s.total_expenditure,
                        s.net_flow,
                        s.transactions.len()
                    );
                    for (category, total) in &s.category_breakdown {
                        println!("  - {:<20} {:>10.2}", category.to_string(), total);
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn parse_file(file: &PathBuf) -> Result<Vec<spendlens_core::Transaction>> {
    if !file.exists() {
        bail!("statement not found: {}", file.display());
    }

    let text = extract::read_statement_text(file)?;
    parse_dbs_text(&text).with_context(|| format!("parsing {}", file.display()))
}
