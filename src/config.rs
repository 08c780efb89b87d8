//! Sheet configuration, loadable from JSON.

use crate::error::LabelError;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use shiplabel_types::Size;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions_pt();
        Size::new(width, height)
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => {
                if width > 0.0 && height > 0.0 {
                    Ok(PageSize::Custom { width, height })
                } else {
                    Err(de::Error::custom(format!("Page size must be positive, got {}x{}", width, height)))
                }
            }
        }
    }
}

/// What a build does when it receives no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Write a valid document with zero sheets.
    #[default]
    EmptyDocument,
    /// Fail with [`LabelError::EmptyInput`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub page_size: PageSize,
    /// Horizontal space left free in each quadrant; label width is the
    /// quadrant width minus this margin.
    pub label_margin: f32,
    pub empty_input: EmptyInputPolicy,
    /// Parent of the per-build scratch directory. `None` means the system
    /// temporary directory.
    pub scratch_dir: Option<PathBuf>,
    pub sequence_ring: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            label_margin: 30.0,
            empty_input: EmptyInputPolicy::EmptyDocument,
            scratch_dir: None,
            sequence_ring: true,
        }
    }
}

impl SheetConfig {
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        let config: SheetConfig =
            serde_json::from_str(json).map_err(|e| LabelError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| LabelError::io("reading configuration", path, e))?;
        Self::from_json(&json)
    }

    pub fn sheet_size(&self) -> Size {
        self.page_size.size()
    }

    /// Width every label block is laid out at.
    pub fn label_width(&self) -> f32 {
        self.sheet_size().width / 2.0 - self.label_margin
    }

    pub fn scratch_parent(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if !self.label_margin.is_finite() || self.label_margin < 0.0 {
            return Err(LabelError::Config(format!(
                "label_margin must be a non-negative number, got {}",
                self.label_margin
            )));
        }
        if self.label_width() <= 0.0 {
            return Err(LabelError::Config(format!(
                "label_margin {} leaves no room for a label on a {:?} sheet",
                self.label_margin, self.page_size
            )));
        }
        Ok(())
    }
}
