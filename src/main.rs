//! Batchcheck CLI - validate a directory of CSV batch files
//!
//! ```bash
//! batchcheck --dir ./batches --id 1 --min 1000000000 \
//!     --insert-prefix INS --update-prefix UPD
//! ```
//!
//! Column indices are 1-based on the command line; `--flag 0` disables the
//! reserved flag column. Diagnostics go to stderr (`RUST_LOG` controls
//! verbosity); flagged rows and the summary go to stdout.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use batchcheck::{Config, OsDirectory, Runner};

#[derive(Parser)]
#[command(name = "batchcheck")]
#[command(about = "Validate CSV insert/update batch files", long_about = None)]
struct Cli {
    /// Directory containing the batch files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Identifier column (1-based)
    #[arg(long, default_value_t = 1)]
    id: usize,

    /// Flag column (1-based, 0 disables; reserved)
    #[arg(long, default_value_t = 0)]
    flag: usize,

    /// Filename prefix of insert files
    #[arg(long, default_value = "insert")]
    insert_prefix: String,

    /// Filename prefix of update files
    #[arg(long, default_value = "update")]
    update_prefix: String,

    /// Minimum acceptable identifier value
    #[arg(long, default_value_t = 0)]
    min: i64,
}

fn main() -> ExitCode {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "batchcheck=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.id < 1 {
        eprintln!("Error: --id must be >= 1");
        return ExitCode::FAILURE;
    }

    let cfg = Config {
        dir: cli.dir,
        id_col: cli.id - 1,
        flag_col: if cli.flag > 0 { Some(cli.flag - 1) } else { None },
        insert_prefix: cli.insert_prefix,
        update_prefix: cli.update_prefix,
        min_id: cli.min,
    };

    let mut runner = Runner::new(cfg, OsDirectory, std::io::stdout().lock());
    match runner.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
