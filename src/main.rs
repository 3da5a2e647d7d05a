use anyhow::Result;
use fass_lookup::cli::{self, Cli};
use fass_lookup::LookupError;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Every argument is a query word, flags included
    let cli = Cli::from_raw_args(std::env::args_os().skip(1));

    let query = match cli.query_text() {
        Ok(query) => query,
        Err(LookupError::MissingQuery) => {
            println!("{}", cli::usage());
            std::process::exit(1);
        }
    };

    cli::lookup::handle(&query)
}
