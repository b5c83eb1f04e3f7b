use clap::Parser;
use qrstash::application::{init::init, CollectionService, ConfigService};
use qrstash::cli::{format_record_json, format_record_list, Cli, Commands};
use qrstash::domain::QrRecord;
use qrstash::error::QrStashError;
use qrstash::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("QRSTASH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), QrStashError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized qrstash at {}", path.display());
            Ok(())
        }
        Commands::Add {
            identifier,
            code,
            price,
        } => {
            let mut record = QrRecord::new(identifier, code);
            if let Some(p) = price {
                record = record.with_price(p);
            }

            let service = CollectionService::new(FileSystemRepository::discover()?);
            let index = service.add(record)?;
            println!("Added record #{}", index);
            Ok(())
        }
        Commands::List { json } => {
            let service = CollectionService::new(FileSystemRepository::discover()?);
            let records = service.list()?;
            if json {
                println!("{}", format_record_json(&records)?);
            } else {
                print!("{}", format_record_list(&records));
                if records.is_empty() {
                    println!();
                }
            }
            Ok(())
        }
        Commands::Delete { index } => {
            let service = CollectionService::new(FileSystemRepository::discover()?);
            match service.delete(index)? {
                Some(record) => println!("Deleted record #{} ({})", index, record.identifier),
                None => println!("No record at index {}; nothing deleted", index),
            }
            Ok(())
        }
        Commands::Clear => {
            let service = CollectionService::new(FileSystemRepository::discover()?);
            service.clear()?;
            println!("Cleared all QR codes");
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: qrstash config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, created");
                Ok(())
            }
        }
    }
}
