use fass_lookup::directory::Directory;

/// Every brand in the built-in directory paired with its owner
pub fn all_brands() -> Vec<(&'static str, &'static str)> {
    Directory::builtin()
        .iter()
        .flat_map(|record| {
            record
                .brands
                .iter()
                .map(move |brand| (*brand, record.canonical_name))
        })
        .collect()
}

/// Lookup against the built-in directory
pub fn lookup(query: &str) -> String {
    fass_lookup::lookup_medication(query, &Directory::builtin())
}
