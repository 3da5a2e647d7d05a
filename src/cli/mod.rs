use crate::error::{LookupError, Result};
use clap::Parser;
use std::ffi::OsString;

pub mod lookup;

/// FASS lookup - quick reference for common Swedish medications
#[derive(Parser, Debug)]
#[command(name = "fass-lookup")]
#[command(author = "FASS Lookup Team")]
#[command(about = "Quick reference for common Swedish medications with FASS search links", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Medication name or phrase, e.g. paracetamol or "alvedon 500mg"
    #[arg(value_name = "MEDICATION")]
    pub query: Vec<String>,
}

impl Cli {
    /// Parse the arguments that follow the program name.
    ///
    /// A leading `--` is inserted so clap treats every argument as a value,
    /// including a user-supplied `--` or anything that looks like a flag.
    pub fn from_raw_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from("fass-lookup"), OsString::from("--")]
            .into_iter()
            .chain(args.into_iter().map(Into::into));
        Self::parse_from(argv)
    }

    /// All query words joined by single spaces
    pub fn query_text(&self) -> Result<String> {
        if self.query.is_empty() {
            return Err(LookupError::MissingQuery);
        }
        Ok(self.query.join(" "))
    }
}

/// Usage text shown when no medication is given
pub fn usage() -> String {
    [
        "Usage: fass-lookup <medication_name>",
        "Example: fass-lookup paracetamol",
        "Example: fass-lookup alvedon",
    ]
    .join("\n")
}
