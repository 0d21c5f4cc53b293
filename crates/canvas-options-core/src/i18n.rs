use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;

const ENGLISH: &str = include_str!("../locales/en.toml");

/// Label keys used by the options panel, namespaced like `options:tileSize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LabelKey {
    ScaleBeforeProcessing,
    ScaledWidth,
    ScaledHeight,
    InpaintReplace,
    InfillMethod,
    TileSize,
}

impl LabelKey {
    pub const ALL: &[Self] = &[
        Self::ScaleBeforeProcessing,
        Self::ScaledWidth,
        Self::ScaledHeight,
        Self::InpaintReplace,
        Self::InfillMethod,
        Self::TileSize,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::ScaleBeforeProcessing => "options:scaleBeforeProcessing",
            Self::ScaledWidth => "options:scaledWidth",
            Self::ScaledHeight => "options:scaledHeight",
            Self::InpaintReplace => "options:inpaintReplace",
            Self::InfillMethod => "options:infillMethod",
            Self::TileSize => "options:tileSize",
        }
    }
}

/// Label lookup. Implementations decide what a missing key looks like.
pub trait Localizer {
    fn translate(&self, key: LabelKey) -> Cow<'_, str>;
}

/// Flat `namespace:key -> text` table read from a TOML locale file where
/// each top-level table is a namespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// The bundled English strings.
    pub fn english() -> Self {
        // The bundled file is covered by tests; an empty catalog still
        // renders raw keys.
        Self::from_toml_str(ENGLISH).unwrap_or_default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let namespaces: HashMap<String, HashMap<String, String>> = toml::from_str(content)?;
        let entries = namespaces
            .into_iter()
            .flat_map(|(ns, table)| {
                table
                    .into_iter()
                    .map(move |(key, text)| (format!("{ns}:{key}"), text))
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Catalog {
    fn translate(&self, key: LabelKey) -> Cow<'_, str> {
        match self.get(key.key()) {
            Some(text) => Cow::Borrowed(text),
            None => {
                warn!(key = key.key(), "missing translation");
                Cow::Borrowed(key.key())
            }
        }
    }
}
