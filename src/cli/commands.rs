//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qrstash")]
#[command(about = "Keep a persisted list of QR codes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new stash
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Append a QR code record
    Add {
        /// What the code was generated for (link or product code)
        identifier: String,

        /// Generated code string (e.g. an image data URL)
        code: String,

        /// Optional price attached to the record
        #[arg(short, long, value_parser = parse_price)]
        price: Option<f64>,
    },

    /// List stored records in insertion order
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Delete the record at INDEX (later records shift down)
    Delete {
        /// Zero-based position in the list
        index: usize,
    },

    /// Remove every record and the storage entry itself
    Clear,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a price, refusing NaN and infinities
fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if price.is_finite() {
        Ok(price)
    } else {
        Err(format!("'{}' is not a finite price", s))
    }
}
