pub mod blocks;
pub mod brands;
pub mod lines;
pub mod merge;

use blocks::{BlockAccumulator, ParseStats, RawVehicle};
use brands::BrandTable;
use merge::MergedVehicle;

use crate::pdf::PageLines;

/// Everything one brochure yields: per-block occurrences, the merged
/// catalog, and counters for what was dropped along the way.
#[derive(Debug)]
pub struct Catalog {
    pub raw: Vec<RawVehicle>,
    pub vehicles: Vec<MergedVehicle>,
    pub stats: ParseStats,
}

impl Catalog {
    pub fn from_accumulator(acc: BlockAccumulator<'_>) -> Self {
        let (raw, stats) = acc.finish();
        let vehicles = merge::merge_vehicles(&raw);
        Catalog {
            raw,
            vehicles,
            stats,
        }
    }
}

/// Two-pass pipeline: page lines → raw vehicles (classify + aggregate) → merged
/// catalog. One accumulator spans the whole document, so a block may continue
/// across a page break. `on_page` runs after each page is consumed.
pub fn parse_pages<F>(pages: &[PageLines], brands: &BrandTable, mut on_page: F) -> Catalog
where
    F: FnMut(&PageLines),
{
    let mut acc = BlockAccumulator::new(brands);
    for page in pages {
        acc.push_lines(&page.lines);
        on_page(page);
    }
    Catalog::from_accumulator(acc)
}

// ── Tests ──
