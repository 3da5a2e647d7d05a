//! The lookup pipeline: match, build the FASS link, render.

use crate::directory::Directory;
use crate::formatter::format_lookup;
use crate::matcher::find_medication;
use crate::reference::ReferenceLink;

/// Run the whole lookup for a raw query and return the report text
pub fn lookup_medication(query: &str, directory: &Directory) -> String {
    let record = find_medication(query, directory);
    let link = ReferenceLink::new(query);
    format_lookup(query, record, &link)
}
