use std::collections::{BTreeMap, BTreeSet};

use super::blocks::RawVehicle;

/// Final catalog entry: one per distinct (brand, model).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedVehicle {
    pub brand: String,
    pub model: String,
    pub engines: Vec<String>,
    pub years: Vec<u16>,
}

#[derive(Default)]
struct Group {
    engines: BTreeSet<String>,
    years: BTreeSet<u16>,
}

/// Union engines and years of every occurrence of a (brand, model) pair.
/// Output is ordered by brand, then model; engines and years ascending.
pub fn merge_vehicles(raw: &[RawVehicle]) -> Vec<MergedVehicle> {
    let mut groups: BTreeMap<(&str, &str), Group> = BTreeMap::new();

    for v in raw {
        let group = groups
            .entry((v.brand.as_str(), v.model.as_str()))
            .or_default();
        group
            .engines
            .extend(v.engines.iter().filter(|e| !e.is_empty()).cloned());
        group.years.extend(v.years.iter().copied());
    }

    groups
        .into_iter()
        .map(|((brand, model), group)| MergedVehicle {
            brand: brand.to_string(),
            model: model.to_string(),
            engines: group.engines.into_iter().collect(),
            years: group.years.into_iter().collect(),
        })
        .collect()
}
