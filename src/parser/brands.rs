use std::collections::{HashMap, HashSet};

use super::lines::title_case;
use crate::error::{CatalogError, Result};

/// Section headers as they appear in the brochure, matched verbatim.
pub const BRAND_TOKENS: &[&str] = &[
    "ABARTH",
    "AGRALE",
    "ALFA",
    "ASIA",
    "AUDI",
    "BMW",
    "BMW MOTOS",
    "BYD",
    "CADILLAC",
    "CHANA",
    "CHERY",
    "CHEVROLET",
    "CHRYSLER",
    "CITROEN",
    "CN AUTO",
    "DAEWOO",
    "DAFRA",
    "DAIHATSU",
    "DODGE",
    "EFFA",
    "FERRARI",
    "FIAT",
    "FORD",
    "GEELY",
    "GWM",
    "HAFEI",
    "HARLEY DAVIDSON MOTOS",
    "HAVAL",
    "HONDA",
    "HONDA MOTOS",
    "HUMMER",
    "HYUNDAI",
    "INFINITI",
    "IVECO",
    "JAC",
    "JAGUAR",
    "JEEP",
    "JINBEI",
    "KAWASAKI MOTOS",
    "KIA",
    "LADA",
    "LAND ROVER",
    "LEXUS",
    "LIFAN",
    "MAHINDRA",
    "MASERATI",
    "MAZDA",
    "MERCEDES BENZ",
    "MINI",
    "MITSUBISHI",
    "NISSAN",
    "PEUGEOT",
    "PORSCHE",
    "RAM",
    "RELY",
    "RENAULT",
    "ROYAL ENFIELD MOTOS",
    "SEAT",
    "SMART",
    "SSANGYONG",
    "SUBARU",
    "SUZUKI",
    "SUZUKI MOTOS",
    "TOYOTA",
    "TRIUMPH",
    "TROLLER",
    "VOLKSWAGEN",
    "VOLVO",
    "YAMAHA MOTOS",
];

/// Sub-brands folded into a parent, or tokens whose display name differs.
/// Both sides must be present in [`BRAND_TOKENS`] or be the parent's full name.
pub const BRAND_REMAP: &[(&str, &str)] = &[
    ("ABARTH", "FIAT"),
    ("RELY", "CHERY"),
    ("HAVAL", "GWM"),
    ("ALFA", "ALFA ROMEO"),
    ("MERCEDES BENZ", "MERCEDES-BENZ"),
];

/// Remap targets that are display names rather than brochure tokens.
const DISPLAY_ONLY: &[&str] = &["ALFA ROMEO", "MERCEDES-BENZ"];

#[derive(Debug, Clone)]
pub struct BrandTable {
    tokens: HashSet<&'static str>,
    canonical: HashMap<&'static str, String>,
}

impl BrandTable {
    /// Build the table from the static lists, failing if they disagree.
    pub fn builtin() -> Result<Self> {
        Self::new(BRAND_TOKENS, BRAND_REMAP)
    }

    pub fn new(tokens: &[&'static str], remap: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut set = HashSet::with_capacity(tokens.len());
        for &token in tokens {
            if token.trim() != token || token.is_empty() {
                return Err(CatalogError::brand_table(format!(
                    "token {:?} is empty or has surrounding whitespace",
                    token
                )));
            }
            if !set.insert(token) {
                return Err(CatalogError::brand_table(format!("duplicate token {}", token)));
            }
        }

        let mut canonical: HashMap<&'static str, String> =
            set.iter().map(|&t| (t, title_case(t))).collect();

        for &(from, to) in remap {
            if !set.contains(from) {
                return Err(CatalogError::brand_table(format!(
                    "{} is remapped but not a known brand",
                    from
                )));
            }
            if !set.contains(to) && !DISPLAY_ONLY.contains(&to) {
                return Err(CatalogError::brand_table(format!(
                    "{} remaps to unknown brand {}",
                    from, to
                )));
            }
            canonical.insert(from, title_case(to));
        }

        Ok(BrandTable {
            tokens: set,
            canonical,
        })
    }

    pub fn is_brand(&self, line: &str) -> bool {
        self.tokens.contains(line)
    }

    /// Display name for a brochure token, e.g. `ABARTH` -> `Fiat`.
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.canonical.get(token).map(String::as_str)
    }

    pub fn is_motorcycle(&self, canonical: &str) -> bool {
        canonical.to_uppercase().contains("MOTOS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_consistent() {
        let table = BrandTable::builtin().unwrap();
        assert!(BRAND_TOKENS.iter().all(|t| table.is_brand(t)));
        assert!(BRAND_TOKENS.iter().all(|t| table.canonical(t).is_some()));
    }

    #[test]
    fn remap_folds_sub_brand() {
        let table = BrandTable::builtin().unwrap();
        assert_eq!(table.canonical("ABARTH"), Some("Fiat"));
        assert_eq!(table.canonical("FIAT"), Some("Fiat"));
        assert_eq!(table.canonical("MERCEDES BENZ"), Some("Mercedes-Benz"));
        assert_eq!(table.canonical("LAND ROVER"), Some("Land Rover"));
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let table = BrandTable::builtin().unwrap();
        assert!(table.is_brand("FIAT"));
        assert!(!table.is_brand("Fiat"));
        assert!(!table.is_brand("FIAT "));
        assert!(!table.is_brand("FIAT PULSE"));
        assert_eq!(table.canonical("Fiat"), None);
    }

    #[test]
    fn motorcycle_brands() {
        let table = BrandTable::builtin().unwrap();
        let honda_motos = table.canonical("HONDA MOTOS").unwrap();
        assert!(table.is_motorcycle(honda_motos));
        assert!(!table.is_motorcycle(table.canonical("HONDA").unwrap()));
    }

    #[test]
    fn remap_of_unknown_token_fails() {
        let err = BrandTable::new(&["FIAT"], &[("ABARTH", "FIAT")]).unwrap_err();
        assert!(err.to_string().contains("ABARTH"));
    }

    #[test]
    fn remap_to_unknown_target_fails() {
        let err = BrandTable::new(&["ABARTH"], &[("ABARTH", "FIAT")]).unwrap_err();
        assert!(err.to_string().contains("unknown brand FIAT"));
    }

    #[test]
    fn duplicate_token_fails() {
        assert!(BrandTable::new(&["FIAT", "FIAT"], &[]).is_err());
    }
}
