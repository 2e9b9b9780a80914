use crate::models::substrate::{Manifest, SUBSTRATES_DIR};
use crate::utils::style::get_builtin_gradient;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub heading: String,
    pub key: String,
    pub label: String,
    pub palette: Option<String>,
    pub has_overlay: bool,
    pub has_colorbar: bool,
}

/// Which manifest entries have their images on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetReport {
    pub rows: Vec<AssetRow>,
    /// PNG stems in the substrates folder no manifest entry refers to.
    pub orphans: Vec<String>,
}

impl AssetReport {
    pub fn scan(root: &Path, manifest: &Manifest) -> Self {
        let dir = root.join(SUBSTRATES_DIR);
        let present: BTreeSet<String> = WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("png"))
                    .unwrap_or(false)
            })
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .collect();

        let mut referenced = BTreeSet::new();
        let mut rows = Vec::new();
        for heading in &manifest.headings {
            for item in &heading.items {
                let colorbar = format!("cbar_{}", item.key);
                rows.push(AssetRow {
                    heading: heading.heading.clone(),
                    key: item.key.clone(),
                    label: item.label.clone(),
                    palette: item.palette.clone(),
                    has_overlay: present.contains(&item.key),
                    has_colorbar: present.contains(&colorbar),
                });
                referenced.insert(item.key.clone());
                referenced.insert(colorbar);
            }
        }

        let orphans = present.difference(&referenced).cloned().collect();
        Self { rows, orphans }
    }

    pub fn missing_overlays(&self) -> impl Iterator<Item = &AssetRow> {
        self.rows.iter().filter(|r| !r.has_overlay)
    }
}

pub fn print_asset_summary(report: &AssetReport, default_palette: Option<&str>) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Heading").add_attribute(Attribute::Bold),
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Label").add_attribute(Attribute::Bold),
            Cell::new("Overlay")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colourbar").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for row in &report.rows {
        let bar = if row.has_colorbar {
            "file".to_string()
        } else {
            let palette = row.palette.as_deref().or(default_palette);
            format!("generated {}", terminal_ramp(palette))
        };
        let status = if row.has_overlay { "✅" } else { "⚠️" };
        table.add_row(vec![
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(&row.heading),
            Cell::new(&row.key),
            Cell::new(&row.label),
            Cell::new(if row.has_overlay { "yes" } else { "missing" })
                .set_alignment(CellAlignment::Center),
            Cell::new(bar),
        ]);
    }

    println!("\nSubstrate summary:\n{}", table);

    for row in report.missing_overlays() {
        warn!(key = %row.key, "Overlay image is missing, selecting it will show a broken image");
    }
    for orphan in &report.orphans {
        warn!(file = %orphan, "Image is not referenced by the substrate manifest");
    }
}

fn terminal_ramp(palette: Option<&str>) -> String {
    let gradient = palette.and_then(get_builtin_gradient);
    let n = 10;
    let mut s = String::new();
    for i in 0..n {
        let t = i as f32 / (n - 1) as f32;
        let [r, g, b, _] = crate::utils::style::palette_colour(gradient.as_deref(), t);
        s.push_str(&format!("\x1b[38;2;{};{};{}m█\x1b[0m", r, g, b));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_reports_missing_and_orphans() {
        let dir = tempfile::tempdir().unwrap();
        let substrates = dir.path().join(SUBSTRATES_DIR);
        fs::create_dir_all(&substrates).unwrap();
        for name in ["x.png", "cbar_x.png", "y.png", "old.png", "notes.txt"] {
            fs::write(substrates.join(name), b"").unwrap();
        }

        let manifest = Manifest::from_json(
            "m",
            br#"[{"heading": "A", "items": [
                {"key": "x", "label": "X", "unit": ""},
                {"key": "y", "label": "Y", "unit": ""},
                {"key": "z", "label": "Z", "unit": ""}]}]"#,
        )
        .unwrap();

        let report = AssetReport::scan(dir.path(), &manifest);
        let flags: Vec<(&str, bool, bool)> = report
            .rows
            .iter()
            .map(|r| (r.key.as_str(), r.has_overlay, r.has_colorbar))
            .collect();
        assert_eq!(
            flags,
            vec![("x", true, true), ("y", true, false), ("z", false, false)]
        );
        assert_eq!(report.orphans, vec!["old".to_string()]);
        let missing: Vec<&str> = report.missing_overlays().map(|r| r.key.as_str()).collect();
        assert_eq!(missing, vec!["z"]);
    }

    #[test]
    fn test_scan_without_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let report = AssetReport::scan(dir.path(), &Manifest::default());
        assert_eq!(report, AssetReport::default());
    }
}
