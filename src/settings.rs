use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

const CONFIG_FILE: &str = "catalog";
const ENV_PREFIX: &str = "CATALOG";

/// Resolved run settings. Later sources win:
/// defaults < `catalog.toml` < `CATALOG_*` env vars < CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub pdf_path: PathBuf,
    pub output_path: PathBuf,
    /// Name of the generated record type.
    pub type_name: String,
    /// Name of the generated array constant.
    pub const_name: String,
}

/// Values passed on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Default)]
pub struct Overrides {
    pub pdf_path: Option<String>,
    pub output_path: Option<String>,
}

impl Settings {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let settings = Config::builder()
            .set_default("pdf_path", "carros.pdf")?
            .set_default("output_path", "src/lib/vehicle-data.ts")?
            .set_default("type_name", "Vehicle")?
            .set_default("const_name", "vehicles")?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("pdf_path", overrides.pdf_path.clone())?
            .set_override_option("output_path", overrides.output_path.clone())?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
