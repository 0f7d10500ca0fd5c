use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("PDF not found: {} (set CATALOG_PDF_PATH or pass --pdf)", path.display())]
    MissingInput { path: PathBuf },

    #[error("could not extract text from {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("brand table is inconsistent: {message}")]
    BrandTable { message: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn brand_table(msg: impl Into<String>) -> Self {
        Self::BrandTable {
            message: msg.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_path() {
        let err = CatalogError::MissingInput {
            path: PathBuf::from("docs/carros.pdf"),
        };
        assert!(err.to_string().contains("docs/carros.pdf"));
    }

    #[test]
    fn brand_table_message() {
        let err = CatalogError::brand_table("ABARTH remaps to unknown brand");
        assert_eq!(
            err.to_string(),
            "brand table is inconsistent: ABARTH remaps to unknown brand"
        );
    }
}
