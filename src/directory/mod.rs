//! Built-in quick reference of common Swedish medications.
//!
//! The table is constant data: every record is created by
//! [`Directory::builtin`] and never mutated afterwards.

use std::fmt;

/// Prescription status of a medication in Sweden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtcStatus {
    /// Sold without prescription (receptfritt)
    OverTheCounter,
    /// Prescription only (receptbelagt)
    PrescriptionOnly,
    /// Mixed status, e.g. depending on strength
    Qualified(&'static str),
}

impl fmt::Display for OtcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverTheCounter => f.write_str("Yes (receptfritt)"),
            Self::PrescriptionOnly => f.write_str("No (receptbelagt)"),
            Self::Qualified(note) => f.write_str(note),
        }
    }
}

/// A single medication entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationRecord {
    /// Lowercase generic name, unique within a directory
    pub canonical_name: &'static str,
    pub brands: &'static [&'static str],
    pub indication: &'static str,
    pub dosage: &'static str,
    pub otc: OtcStatus,
    pub warnings: &'static str,
}

impl MedicationRecord {
    /// Case-insensitive exact match against one of the brand names.
    /// `normalized` must already be trimmed and lowercased.
    pub fn matches_brand(&self, normalized: &str) -> bool {
        self.brands
            .iter()
            .any(|brand| brand.to_lowercase() == normalized)
    }
}

/// Ordered collection of medication records keyed by canonical name
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<MedicationRecord>,
}

impl Directory {
    /// Build a directory from records, keeping their order.
    pub fn new(records: Vec<MedicationRecord>) -> Self {
        Self { records }
    }

    /// The eight reference medications
    pub fn builtin() -> Self {
        Self::new(vec![
            MedicationRecord {
                canonical_name: "paracetamol",
                brands: &["Alvedon", "Panodil", "Pamol"],
                indication: "Pain relief, fever reduction",
                dosage: "Adult: 500-1000mg every 4-6h, max 4g/day",
                otc: OtcStatus::OverTheCounter,
                warnings: "Avoid with liver disease, limit alcohol",
            },
            MedicationRecord {
                canonical_name: "ibuprofen",
                brands: &["Ipren", "Ibumetin", "Brufen"],
                indication: "Pain, inflammation, fever",
                dosage: "Adult: 200-400mg every 4-6h, max 1200mg/day (OTC)",
                otc: OtcStatus::OverTheCounter,
                warnings: "Take with food, avoid if stomach ulcers or kidney issues",
            },
            MedicationRecord {
                canonical_name: "omeprazol",
                brands: &["Losec", "Omeprazol"],
                indication: "Acid reflux, stomach ulcers, GERD",
                dosage: "Adult: 20mg once daily",
                otc: OtcStatus::Qualified("Low dose OTC, higher doses Rx"),
                warnings: "Long-term use may affect B12/magnesium",
            },
            MedicationRecord {
                canonical_name: "sertralin",
                brands: &["Zoloft", "Sertralin"],
                indication: "Depression, anxiety, OCD, PTSD",
                dosage: "Adult: Start 50mg/day, may increase",
                otc: OtcStatus::PrescriptionOnly,
                warnings: "Takes 2-4 weeks for effect, do not stop abruptly",
            },
            MedicationRecord {
                canonical_name: "metformin",
                brands: &["Metformin", "Glucophage"],
                indication: "Type 2 diabetes",
                dosage: "Adult: Start 500mg 1-2x/day with food",
                otc: OtcStatus::PrescriptionOnly,
                warnings: "Monitor kidney function, stop before contrast imaging",
            },
            MedicationRecord {
                canonical_name: "atorvastatin",
                brands: &["Lipitor", "Atorvastatin"],
                indication: "High cholesterol, cardiovascular prevention",
                dosage: "Adult: 10-80mg once daily",
                otc: OtcStatus::PrescriptionOnly,
                warnings: "Report muscle pain, avoid grapefruit",
            },
            MedicationRecord {
                canonical_name: "loratadin",
                brands: &["Clarityn", "Loratadin"],
                indication: "Allergies, hay fever, hives",
                dosage: "Adult: 10mg once daily",
                otc: OtcStatus::OverTheCounter,
                warnings: "Non-drowsy antihistamine",
            },
            MedicationRecord {
                canonical_name: "cetirizin",
                brands: &["Zyrtec", "Cetirizin"],
                indication: "Allergies, hay fever, hives",
                dosage: "Adult: 10mg once daily",
                otc: OtcStatus::OverTheCounter,
                warnings: "May cause slight drowsiness",
            },
        ])
    }

    /// Exact lookup by canonical name
    pub fn get(&self, canonical_name: &str) -> Option<&MedicationRecord> {
        self.records
            .iter()
            .find(|record| record.canonical_name == canonical_name)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MedicationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_eight_entries_in_order() {
        let directory = Directory::builtin();
        let names: Vec<_> = directory.iter().map(|r| r.canonical_name).collect();
        assert_eq!(
            names,
            vec![
                "paracetamol",
                "ibuprofen",
                "omeprazol",
                "sertralin",
                "metformin",
                "atorvastatin",
                "loratadin",
                "cetirizin",
            ]
        );
        assert_eq!(directory.len(), 8);
        assert!(!directory.is_empty());
    }

    #[test]
    fn test_canonical_names_are_lowercase_and_brands_non_empty() {
        for record in Directory::builtin().iter() {
            assert_eq!(record.canonical_name, record.canonical_name.to_lowercase());
            assert!(!record.brands.is_empty(), "{} has no brands", record.canonical_name);
        }
    }

    #[test]
    fn test_otc_display() {
        assert_eq!(OtcStatus::OverTheCounter.to_string(), "Yes (receptfritt)");
        assert_eq!(OtcStatus::PrescriptionOnly.to_string(), "No (receptbelagt)");
        assert_eq!(
            OtcStatus::Qualified("Low dose OTC, higher doses Rx").to_string(),
            "Low dose OTC, higher doses Rx"
        );
    }

    #[test]
    fn test_get_and_brand_match() {
        let directory = Directory::builtin();
        let record = directory.get("ibuprofen").unwrap();
        assert!(record.matches_brand("ipren"));
        assert!(!record.matches_brand("Ipren"));
        assert!(!record.matches_brand("ipr"));
        assert!(directory.get("Ibuprofen").is_none());
    }
}
