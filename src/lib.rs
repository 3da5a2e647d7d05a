// FASS medication lookup

pub mod cli;
pub mod directory;
pub mod error;
pub mod formatter;
pub mod lookup;
pub mod matcher;
pub mod reference;

pub use error::{LookupError, Result};
pub use lookup::lookup_medication;
