use crate::directory::Directory;
use crate::lookup::lookup_medication;
use anyhow::Result;
use log::info;

/// Handle a lookup - print the report for `query` to stdout
pub fn handle(query: &str) -> Result<()> {
    info!("Looking up {:?}", query);

    let directory = Directory::builtin();
    println!("{}", lookup_medication(query, &directory));

    Ok(())
}
