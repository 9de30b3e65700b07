use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::application::Ledger;
use crate::domain::{CATEGORIES, ExpenseRecord};
use crate::io::Exporter;

/// Dispendio - Personal Expense Tracker
#[derive(Parser)]
#[command(name = "dispendio")]
#[command(about = "A local-first expense tracker backed by a flat CSV file")]
#[command(version)]
pub struct Cli {
    /// Expense file path
    #[arg(short, long, default_value = "expenses.csv")]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent, kept verbatim (e.g. "42.50" or "42")
        amount: String,

        /// Category label: Food, Transport, Entertainment, Others
        #[arg(short, long, default_value = "Others")]
        category: String,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all recorded expenses
    List,

    /// Delete an expense by its row number
    Delete {
        /// Row number as shown by `list` (1-based)
        row: usize,
    },

    /// Export the ledger to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

impl Cli {
    fn open_ledger(&self) -> Result<Ledger> {
        let ledger = Ledger::open(&self.file)?;
        if self.verbose {
            eprintln!(
                "[ledger] {} expense(s) loaded from {}",
                ledger.len(),
                ledger.path().display()
            );
        }
        Ok(ledger)
    }

    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Add {
                amount,
                category,
                description,
                date,
            } => {
                let mut ledger = self.open_ledger()?;

                let date = match date {
                    Some(date) => date.clone(),
                    None => Local::now().format("%Y-%m-%d").to_string(),
                };

                let record = ExpenseRecord::new(
                    date,
                    amount.clone(),
                    category.clone(),
                    description.clone().unwrap_or_default(),
                );

                if self.verbose && !record.has_known_category() {
                    eprintln!(
                        "[note] '{}' is not one of the usual categories ({})",
                        record.category,
                        CATEGORIES.join(", ")
                    );
                }

                let line = format!("{} {} ({})", record.amount, record.category, record.date);
                ledger.append(record)?;

                println!("Recorded expense: {} [{} total]", line, ledger.len());
            }

            Commands::List => {
                let ledger = self.open_ledger()?;
                run_list_command(&ledger);
            }

            Commands::Delete { row } => {
                let mut ledger = self.open_ledger()?;

                let index = row.checked_sub(1).context("Row numbers start at 1")?;
                let removed = ledger.remove_at(index)?;

                println!(
                    "Deleted row {}: {} {} ({})",
                    row, removed.amount, removed.category, removed.date
                );
            }

            Commands::Export { output, format } => {
                let ledger = self.open_ledger()?;
                run_export_command(&ledger, output.as_deref(), format)?;
            }
        }

        Ok(())
    }
}

fn run_list_command(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("No expenses recorded.");
        return;
    }

    println!(
        "{:<5} {:<12} {:>10}  {:<15} {}",
        "ROW", "DATE", "AMOUNT", "CATEGORY", "DESCRIPTION"
    );
    println!("{}", "-".repeat(60));
    for (row, expense) in ledger.all().iter().enumerate() {
        println!(
            "{:<5} {:<12} {:>10}  {:<15} {}",
            row + 1,
            expense.date,
            expense.amount,
            expense.category,
            expense.description
        );
    }
}

fn run_export_command(ledger: &Ledger, output: Option<&str>, format: &str) -> Result<()> {
    use std::fs::File;
    use std::io::{Write, stdout};

    let exporter = Exporter::new(ledger);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match format {
        "csv" => {
            let count = exporter.export_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} expense(s)", count);
            }
        }
        "json" => {
            let snapshot = exporter.export_json(writer)?;
            if output.is_some() {
                eprintln!("Exported {} expense(s)", snapshot.expenses.len());
            }
        }
        other => anyhow::bail!("Unknown export format '{}'. Use csv or json", other),
    }

    Ok(())
}
