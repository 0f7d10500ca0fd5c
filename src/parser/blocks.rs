use tracing::debug;

use super::brands::BrandTable;
use super::lines::{classify_line, parse_years, simplify_engine, split_model_line, Line};

/// One (brand, model) occurrence found in a single brand block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVehicle {
    pub brand: String,
    pub model: String,
    pub engines: Vec<String>,
    pub years: Vec<u16>,
}

/// What happened to every block the accumulator closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub blocks: usize,
    pub vehicles: usize,
    pub missing_model: usize,
    pub missing_year: usize,
    /// Non-noise lines seen before the first brand header.
    pub orphan_lines: usize,
}

impl ParseStats {
    pub fn dropped(&self) -> usize {
        self.missing_model + self.missing_year
    }
}

/// Per-block parsing state, fed one line at a time.
///
/// A block starts at a brand header and ends at the next header or at
/// [`BlockAccumulator::finish`]. The first model candidate of a block wins;
/// the last year line wins.
#[derive(Debug)]
pub struct BlockAccumulator<'a> {
    brands: &'a BrandTable,
    brand: Option<String>,
    model: Option<String>,
    engine_parts: Vec<String>,
    year_line: Option<String>,
    vehicles: Vec<RawVehicle>,
    stats: ParseStats,
}

impl<'a> BlockAccumulator<'a> {
    pub fn new(brands: &'a BrandTable) -> Self {
        BlockAccumulator {
            brands,
            brand: None,
            model: None,
            engine_parts: Vec::new(),
            year_line: None,
            vehicles: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.stats.lines += 1;
        let line = classify_line(line, self.brands);

        if self.brand.is_none() && !matches!(line, Line::Brand(_) | Line::Noise) {
            self.stats.orphan_lines += 1;
        }

        match line {
            Line::Brand(name) => {
                self.close_block();
                self.brand = Some(name);
            }
            Line::Year(text) => self.year_line = Some(text),
            Line::Engine(text) => self.engine_parts.push(text),
            Line::ModelCandidate(text) if self.model.is_none() => {
                let split = split_model_line(&text);
                // No model name: the line and its engine hint are both skipped
                if split.model.is_empty() {
                    return;
                }
                self.model = Some(split.model);
                if let Some(hint) = split.engine_hint {
                    self.engine_parts.push(hint);
                }
            }
            Line::ModelCandidate(_) | Line::Noise => {}
        }
    }

    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Close the last block and return everything found.
    pub fn finish(mut self) -> (Vec<RawVehicle>, ParseStats) {
        self.close_block();
        (self.vehicles, self.stats)
    }

    fn close_block(&mut self) {
        let brand = self.brand.take();
        let model = self.model.take();
        let engine_parts = std::mem::take(&mut self.engine_parts);
        let year_line = self.year_line.take();

        let Some(brand) = brand else {
            return;
        };
        self.stats.blocks += 1;

        let Some(model) = model else {
            debug!(brand = %brand, "dropping block: no model line");
            self.stats.missing_model += 1;
            return;
        };

        let years = year_line.as_deref().map(parse_years).unwrap_or_default();
        if years.is_empty() {
            debug!(brand = %brand, model = %model, "dropping block: no parseable year");
            self.stats.missing_year += 1;
            return;
        }

        let engines: Vec<String> = simplify_engine(&engine_parts).into_iter().collect();
        debug!(brand = %brand, model = %model, ?engines, ?years, "vehicle");
        self.stats.vehicles += 1;
        self.vehicles.push(RawVehicle {
            brand,
            model,
            engines,
            years,
        });
    }
}

// ── Tests ──
