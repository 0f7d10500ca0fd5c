use std::sync::LazyLock;

use regex::Regex;

use super::brands::BrandTable;

static ANO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bANO\b").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static DISPLACEMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d\.\d").unwrap());

/// Lines starting with one of these never name a model.
const NON_MODEL_PREFIXES: &[&str] = &[
    "MOTOR",
    "CÂMBIO",
    "CAMBIO",
    "TRAÇÃO",
    "TRACAO",
    "MODELO",
    "VERSÃO",
    "VERSAO",
    "CHASSIS",
    "TRANSMISSÃO",
    "TRANSMISSAO",
    "VISUALIZAR",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Brochure brand header, carrying the canonical display name.
    Brand(String),
    Year(String),
    Engine(String),
    ModelCandidate(String),
    Noise,
}

/// Tag a single trimmed line. Checks run in a fixed order:
/// brand, year, engine, model candidate.
pub fn classify_line(line: &str, brands: &BrandTable) -> Line {
    if let Some(name) = brands.canonical(line) {
        return Line::Brand(name.to_string());
    }

    let upper = line.to_uppercase();

    if is_year_line(&upper) {
        return Line::Year(line.to_string());
    }

    if upper.contains("MOTOR") {
        return Line::Engine(line.to_string());
    }

    if !line.is_empty()
        && !NON_MODEL_PREFIXES.iter().any(|p| upper.starts_with(p))
        && !brands.is_brand(line)
        && line.chars().any(|c| c.is_ascii_digit())
    {
        return Line::ModelCandidate(line.to_string());
    }

    Line::Noise
}

fn is_year_line(upper: &str) -> bool {
    (ANO_RE.is_match(upper) && upper.chars().any(|c| c.is_ascii_digit()))
        || YEAR_RE.find_iter(upper).take(2).count() == 2
}

/// Years covered by a year line. The first and last 4-digit numbers bound an
/// inclusive range, walked in the direction they appear.
pub fn parse_years(line: &str) -> Vec<u16> {
    let found: Vec<u16> = YEAR_RE
        .captures_iter(line)
        .filter_map(|c| c[1].parse().ok())
        .collect();

    match found.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] if first <= last => (*first..=*last).collect(),
        [first, .., last] => (*last..=*first).rev().collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLine {
    pub model: String,
    pub engine_hint: Option<String>,
}

/// Split "PULSE 1.3 16V TURBO" into model `Pulse` and engine hint `1.3 16V TURBO`
/// at the first token that contains a digit.
pub fn split_model_line(line: &str) -> ModelLine {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens
        .iter()
        .position(|t| t.chars().any(|c| c.is_ascii_digit()))
    {
        Some(idx) => ModelLine {
            model: title_case(&tokens[..idx].join(" ")),
            engine_hint: Some(tokens[idx..].join(" ").to_uppercase()),
        },
        None => ModelLine {
            model: title_case(&tokens.join(" ")),
            engine_hint: None,
        },
    }
}

/// Collapse all engine fragments of a block into one short label such as
/// `1.3 TURBO` or `2.0`. Falls back to the title-cased text when no
/// displacement is present.
pub fn simplify_engine(parts: &[String]) -> Option<String> {
    let joined = parts.join(" / ");
    if joined.trim().is_empty() {
        return None;
    }

    let displacement = DISPLACEMENT_RE.find(&joined).map(|m| m.as_str());
    let turbo = joined.to_uppercase().contains("TURBO");

    let label = match (displacement, turbo) {
        (Some(d), true) => format!("{} TURBO", d),
        (Some(d), false) => d.to_string(),
        (None, _) => title_case(&joined),
    };
    Some(label)
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest:
/// `MERCEDES-BENZ` -> `Mercedes-Benz`, `1.3 16v` -> `1.3 16V`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

// ── Tests ──
