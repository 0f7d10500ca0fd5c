use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::parser::merge::MergedVehicle;

/// Names used in the generated TypeScript module.
#[derive(Debug, Clone)]
pub struct ModuleNames<'a> {
    pub type_name: &'a str,
    pub const_name: &'a str,
    /// Shown in the header so readers know where the data came from.
    pub source: &'a str,
}

pub fn render_module(vehicles: &[MergedVehicle], names: &ModuleNames<'_>) -> String {
    let ModuleNames {
        type_name,
        const_name,
        source,
    } = names;
    let records: String = vehicles
        .iter()
        .map(|v| format!("  {},\n", record_literal(v)))
        .collect();
    let lookup = lookup_fn_name(const_name);

    format!(
        "// -----------------------------------------------------------------
// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Source: {source}
// Regenerate by running `vehicle_catalog` after updating the PDF.
// -----------------------------------------------------------------

export type {type_name} = {{
  readonly brand: string;
  readonly model: string;
  readonly engines: readonly string[];
  readonly years: readonly number[];
}};

export type {type_name}List = readonly {type_name}[];

export const {const_name}: {type_name}List = [
{records}] as const;

export function {lookup}(brand: string): {type_name}List {{
  const wanted = brand.toLowerCase();
  return {const_name}.filter((v) => v.brand.toLowerCase() === wanted);
}}

export default {const_name};
"
    )
}

/// `vehicles` -> `getVehiclesByBrand`.
fn lookup_fn_name(const_name: &str) -> String {
    let mut chars = const_name.chars();
    match chars.next() {
        Some(first) => format!("get{}{}ByBrand", first.to_uppercase(), chars.as_str()),
        None => "getByBrand".to_string(),
    }
}

fn record_literal(v: &MergedVehicle) -> String {
    let engines: Vec<String> = v.engines.iter().map(|e| js_string(e)).collect();
    let years: Vec<String> = v.years.iter().map(|y| y.to_string()).collect();
    format!(
        "{{ brand: {}, model: {}, engines: [{}], years: [{}] }}",
        js_string(&v.brand),
        js_string(&v.model),
        engines.join(", "),
        years.join(", ")
    )
}

/// Double-quoted literal; JSON string escaping is valid TypeScript.
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Write the module, creating missing parent directories.
pub fn write_module(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| CatalogError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> ModuleNames<'static> {
        ModuleNames {
            type_name: "Vehicle",
            const_name: "vehicles",
            source: "carros.pdf",
        }
    }

    fn pulse() -> MergedVehicle {
        MergedVehicle {
            brand: "Fiat".into(),
            model: "Pulse".into(),
            engines: vec!["1.0".into(), "1.3 TURBO".into()],
            years: vec![2021, 2022],
        }
    }

    #[test]
    fn header_marks_file_generated() {
        let ts = render_module(&[], &names());
        assert!(ts.starts_with("// ---"));
        assert!(ts.contains("AUTO-GENERATED FILE. DO NOT EDIT BY HAND."));
        assert!(ts.contains("// Source: carros.pdf"));
    }

    #[test]
    fn declares_type_and_const() {
        let ts = render_module(&[pulse()], &names());
        assert!(ts.contains("export type Vehicle = {"));
        assert!(ts.contains("readonly engines: readonly string[];"));
        assert!(ts.contains("readonly years: readonly number[];"));
        assert!(ts.contains("export type VehicleList = readonly Vehicle[];"));
        assert!(ts.contains("export const vehicles: VehicleList = ["));
        assert!(ts.contains("] as const;"));
        assert!(ts.contains("export function getVehiclesByBrand(brand: string): VehicleList {"));
        assert!(ts.trim_end().ends_with("export default vehicles;"));
    }

    #[test]
    fn record_shape() {
        let ts = render_module(&[pulse()], &names());
        assert!(ts.contains(
            r#"  { brand: "Fiat", model: "Pulse", engines: ["1.0", "1.3 TURBO"], years: [2021, 2022] },"#
        ));
    }

    #[test]
    fn empty_engines_render_as_empty_array() {
        let mut v = pulse();
        v.engines.clear();
        let ts = render_module(&[v], &names());
        assert!(ts.contains("engines: [], years: [2021, 2022]"));
    }

    #[test]
    fn strings_are_escaped() {
        let v = MergedVehicle {
            brand: "Fiat".into(),
            model: r#"Uno "Way" \ Mille"#.into(),
            engines: vec![],
            years: vec![2010],
        };
        let ts = render_module(&[v], &names());
        assert!(ts.contains(r#"model: "Uno \"Way\" \\ Mille""#));
    }

    #[test]
    fn custom_names() {
        let n = ModuleNames {
            type_name: "CatalogEntry",
            const_name: "catalogEntries",
            source: "tabela.pdf",
        };
        let ts = render_module(&[], &n);
        assert!(ts.contains("export const catalogEntries: CatalogEntryList = ["));
        assert!(ts.contains("export function getCatalogEntriesByBrand(brand: string): CatalogEntryList {"));
        assert!(ts.contains("return catalogEntries.filter("));
    }

    #[test]
    fn empty_catalog_is_an_empty_array() {
        let ts = render_module(&[], &names());
        assert!(ts.contains("export const vehicles: VehicleList = [\n] as const;"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src/lib/vehicle-data.ts");
        let ts = render_module(&[pulse()], &names());
        write_module(&path, &ts).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ts);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vehicle-data.ts");
        std::fs::write(&path, "old contents that are longer than the new ones").unwrap();
        write_module(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
