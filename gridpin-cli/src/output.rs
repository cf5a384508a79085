//! Loading inputs and formatting computed styles.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use gridpin::{
    ColorContext, OverflowState, Palette, PinTheme, StaticPalette, StickyColumnStyler,
    StyleDescriptor, TableConfig, ThemeConfig,
};
use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Overflow assumed when the table has no viewport and no flags are given.
const ASSUMED_OVERFLOW: OverflowState = OverflowState::new(true, false);

#[derive(Serialize)]
struct ColumnStyle<'a, S> {
    column: &'a str,
    style: S,
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_table(path: &Path) -> Result<TableConfig, CliError> {
    TableConfig::from_json(&read(path)?).map_err(|e| CliError::config(path, e))
}

pub fn load_theme(path: &Path) -> Result<PinTheme, CliError> {
    ThemeConfig::from_json(&read(path)?)
        .and_then(ThemeConfig::into_theme)
        .map_err(|e| CliError::config(path, e))
}

pub fn load_palette(path: &Path) -> Result<StaticPalette, CliError> {
    let entries: HashMap<String, String> =
        serde_json::from_str(&read(path)?).map_err(|e| CliError::config(path, e))?;
    StaticPalette::from_strings(entries).map_err(|e| CliError::config(path, e))
}

/// Measured overflow with per-axis overrides applied.
pub fn resolve_overflow(
    measured: Option<OverflowState>,
    horizontal: Option<bool>,
    vertical: Option<bool>,
) -> OverflowState {
    let base = measured.unwrap_or(ASSUMED_OVERFLOW);
    OverflowState::new(
        horizontal.unwrap_or(base.horizontal),
        vertical.unwrap_or(base.vertical),
    )
}

/// Compute and format styles for every column of `table`.
pub fn render(
    table: &TableConfig,
    table_path: &Path,
    styler: &StickyColumnStyler,
    palette: Option<&dyn Palette>,
    overflow: (Option<bool>, Option<bool>),
    format: Format,
) -> Result<String, CliError> {
    let layout = table.layout().map_err(|e| CliError::config(table_path, e))?;
    let overflow = resolve_overflow(table.overflow(&layout), overflow.0, overflow.1);
    log::info!(
        "Rendering {} columns with overflow {:?}",
        layout.len(),
        overflow
    );

    let cx = palette.map(ColorContext::new);
    let styles: Vec<ColumnStyle<'_, StyleDescriptor>> = styler
        .compute_layout(&layout, overflow)
        .into_iter()
        .map(|(column, style)| ColumnStyle {
            column,
            style: match &cx {
                Some(cx) => cx.resolve_style(&style),
                None => style,
            },
        })
        .collect();

    match format {
        Format::Json => {
            let entries = styles
                .iter()
                .map(|entry| {
                    Ok(ColumnStyle {
                        column: entry.column,
                        style: entry.style.to_json()?,
                    })
                })
                .collect::<Result<Vec<_>, CliError>>()?;
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        Format::Css => Ok(styles
            .iter()
            .map(|entry| format!("{}: {}", entry.column, entry.style.to_inline_css()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use gridpin::{Color, ColumnDef, Length, Pin, Size};

    use super::*;

    fn table(viewport: Option<Size>) -> TableConfig {
        TableConfig {
            columns: vec![
                ColumnDef::new("name", 120.0).pin(Pin::Left),
                ColumnDef::new("email", 240.0),
            ],
            viewport,
            content_height: None,
        }
    }

    fn render_css(table: &TableConfig, overflow: (Option<bool>, Option<bool>)) -> String {
        render(
            table,
            Path::new("table.json"),
            &StickyColumnStyler::default(),
            None,
            overflow,
            Format::Css,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_overflow() {
        assert_eq!(resolve_overflow(None, None, None), ASSUMED_OVERFLOW);
        assert_eq!(
            resolve_overflow(Some(OverflowState::none()), None, Some(true)),
            OverflowState::new(false, true)
        );
        assert_eq!(
            resolve_overflow(Some(OverflowState::new(true, true)), Some(false), None),
            OverflowState::new(false, true)
        );
    }

    #[test]
    fn test_render_css_assumes_overflow() {
        let output = render_css(&table(None), (None, None));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("name: position: sticky; left: 0px;"));
        assert_eq!(
            lines[1],
            "email: position: relative; z-index: 0; width: 240px; opacity: 1;"
        );
    }

    #[test]
    fn test_render_css_wide_viewport() {
        let output = render_css(&table(Some(Size::new(1000.0, 100.0))), (None, None));
        assert!(output.lines().all(|line| line.contains("position: relative")));
    }

    #[test]
    fn test_render_css_flag_overrides_viewport() {
        let output = render_css(&table(Some(Size::new(1000.0, 100.0))), (Some(true), None));
        assert!(output.starts_with("name: position: sticky;"));
    }

    #[test]
    fn test_render_json_with_palette() {
        let palette = StaticPalette::new().with("background", Color::rgb(255, 255, 255));
        let output = render(
            &table(None),
            Path::new("table.json"),
            &StickyColumnStyler::default(),
            Some(&palette),
            (None, None),
            Format::Json,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["column"], "name");
        assert_eq!(json[0]["style"]["background"], "rgb(255, 255, 255)");
        assert_eq!(json[0]["style"]["boxShadow"], "-4px 0 4px -4px var(--border) inset");
        assert_eq!(json[1]["column"], "email");
        assert_eq!(json[1]["style"]["background"], "");
    }

    #[test]
    fn test_render_duplicate_columns() {
        let mut table = table(None);
        table.columns.push(ColumnDef::new("name", 10.0));

        let err = render(
            &table,
            Path::new("table.json"),
            &StickyColumnStyler::default(),
            None,
            (None, None),
            Format::Json,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "table.json: Duplicate column id 'name'");
    }

    #[test]
    fn test_load_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{ "border": "rgba(0, 0, 0, 0.1)", "radius": "6px" }"#).unwrap();

        let theme = load_theme(&path).unwrap();

        assert!(matches!(theme.border, Color::Rgba { r: 0, g: 0, b: 0, .. }));
        assert_eq!(theme.radius, Length::px(6.0));
        assert_eq!(theme.background, PinTheme::default().background);
    }

    #[test]
    fn test_load_theme_bad_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{ "background": "paper" }"#).unwrap();

        let err = load_theme(&path).unwrap_err();

        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().ends_with("Invalid color: 'paper'"));
    }

    #[test]
    fn test_load_palette_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        fs::write(
            &path,
            r##"{ "--border": "#000", "background": "white", "muted": "var(--border)" }"##,
        )
        .unwrap();

        let palette = load_palette(&path).unwrap();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.resolve("border"), Some(&Color::rgb(0, 0, 0)));
        assert_eq!(palette.resolve("--border"), None);
        assert_eq!(palette.resolve("background"), Some(&Color::rgb(255, 255, 255)));
        assert_eq!(
            ColorContext::new(&palette).resolve(&Color::var("muted")),
            Color::rgb(0, 0, 0)
        );
    }

    #[test]
    fn test_render_with_loaded_files() {
        let dir = tempfile::tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        let palette_path = dir.path().join("palette.json");
        fs::write(
            &table_path,
            r#"{ "columns": [ { "id": "name", "width": 120, "pin": "left" } ] }"#,
        )
        .unwrap();
        fs::write(&palette_path, r#"{ "--background": "white" }"#).unwrap();

        let table = load_table(&table_path).unwrap();
        let palette = load_palette(&palette_path).unwrap();
        let output = render(
            &table,
            &table_path,
            &StickyColumnStyler::default(),
            Some(&palette),
            (None, None),
            Format::Css,
        )
        .unwrap();

        assert!(output.contains("background: rgb(255, 255, 255);"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_table(Path::new("/nonexistent/gridpin/table.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
