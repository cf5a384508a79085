//! Serializable table and theme configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValueError};
use crate::layout::{ColumnDef, OverflowState, PinnedLayout, Size};
use crate::types::PinTheme;

/// Theme overrides as written in a config file. Absent fields keep the
/// [`PinTheme`] defaults.
///
/// ```json
/// { "background": "#ffffff", "border": "oklch(0.9 0 0)", "radius": "6px" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub background: Option<String>,
    pub border: Option<String>,
    pub radius: Option<String>,
    pub shadow_size: Option<f32>,
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse every present field and apply it over the default theme.
    pub fn into_theme(self) -> Result<PinTheme, ConfigError> {
        let mut theme = PinTheme::default();

        if let Some(background) = self.background {
            theme.background = parse_field("background", &background)?;
        }
        if let Some(border) = self.border {
            theme.border = parse_field("border", &border)?;
        }
        if let Some(radius) = self.radius {
            theme.radius = parse_field("radius", &radius)?;
        }
        if let Some(size) = self.shadow_size {
            theme.shadow_size = size;
        }

        log::debug!("Theme resolved: {:?}", theme);
        Ok(theme)
    }
}

fn parse_field<T>(field: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ValueError>,
{
    value
        .parse()
        .map_err(|source| ConfigError::Theme { field, source })
}

/// A table definition: columns plus the optional viewport it renders in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub columns: Vec<ColumnDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Size>,
    /// Height of the rendered rows; compared against the viewport height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_height: Option<f32>,
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn layout(&self) -> Result<PinnedLayout, ConfigError> {
        Ok(PinnedLayout::new(self.columns.clone())?)
    }

    /// Overflow of `layout` inside the configured viewport. The content is as
    /// wide as all columns combined. `None` when no viewport is configured.
    pub fn overflow(&self, layout: &PinnedLayout) -> Option<OverflowState> {
        let viewport = self.viewport?;
        let content = Size::new(layout.total_width(), self.content_height.unwrap_or(0.0));
        Some(OverflowState::measure(viewport, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Length, Pin};

    #[test]
    fn test_theme_defaults() {
        let theme = ThemeConfig::default().into_theme().unwrap();
        assert_eq!(theme, PinTheme::default());
    }

    #[test]
    fn test_theme_overrides() {
        let config = ThemeConfig::from_json(
            r##"{ "background": "white", "border": "oklch(1 0 0 / 10%)", "radius": "6px", "shadow_size": 2 }"##,
        )
        .unwrap();
        let theme = config.into_theme().unwrap();

        assert_eq!(theme.background, Color::rgb(255, 255, 255));
        let Color::Rgba { a, .. } = theme.border else {
            panic!("expected translucent border, got {:?}", theme.border);
        };
        assert!((a - 0.1).abs() < 0.005);
        assert_eq!(theme.radius, Length::px(6.0));
        assert_eq!(theme.shadow_size, 2.0);
    }

    #[test]
    fn test_theme_rgba_border() {
        let theme = ThemeConfig::from_json(r#"{ "border": "rgba(0, 0, 0, 0.1)" }"#)
            .unwrap()
            .into_theme()
            .unwrap();

        assert!(matches!(theme.border, Color::Rgba { r: 0, g: 0, b: 0, .. }));
        assert_eq!(theme.background, Color::var("background"));
    }

    #[test]
    fn test_theme_bad_field() {
        let config = ThemeConfig {
            border: Some("solid".to_string()),
            ..Default::default()
        };
        let err = config.into_theme().unwrap_err();
        assert!(matches!(err, ConfigError::Theme { field: "border", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid theme field 'border': Invalid color: 'solid'"
        );
    }

    #[test]
    fn test_theme_unknown_field() {
        assert!(matches!(
            ThemeConfig::from_json(r##"{ "colour": "#fff" }"##),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_table_pin_default() {
        let table = TableConfig::from_json(
            r#"{ "columns": [ { "id": "a", "width": 10 }, { "id": "b", "width": 20, "pin": "right" } ] }"#,
        )
        .unwrap();

        assert_eq!(table.columns[0].pin, Pin::None);
        assert_eq!(table.columns[1].pin, Pin::Right);
        assert_eq!(table.viewport, None);
        assert_eq!(table.overflow(&table.layout().unwrap()), None);
    }

    #[test]
    fn test_table_overflow() {
        let table = TableConfig::from_json(
            r#"{
                "columns": [ { "id": "a", "width": 300 }, { "id": "b", "width": 300 } ],
                "viewport": { "width": 500, "height": 400 },
                "content_height": 200
            }"#,
        )
        .unwrap();
        let layout = table.layout().unwrap();

        assert_eq!(table.overflow(&layout), Some(OverflowState::new(true, false)));
    }

    #[test]
    fn test_table_duplicate_column() {
        let table = TableConfig::from_json(
            r#"{ "columns": [ { "id": "a", "width": 1 }, { "id": "a", "width": 1 } ] }"#,
        )
        .unwrap();
        assert!(matches!(table.layout(), Err(ConfigError::Layout(_))));
    }
}
