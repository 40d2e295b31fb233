use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::debug;

use crate::style::{StyleError, StyleMap};

/// Runtime switches shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reduces terminal output. `1` drops headers, `2` prints results only.
    pub quiet: u8,
    /// Prefix used when formatting node names. Empty keeps the plain name.
    pub prefix: String,
    /// Lab name inserted between prefix and node name.
    pub lab_name: String,
}

/// Where interface labels sit relative to their anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAlignment {
    Left,
    Right,
    #[default]
    Center,
}

impl FromStr for LabelAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(LabelAlignment::Left),
            "right" => Ok(LabelAlignment::Right),
            "center" => Ok(LabelAlignment::Center),
            _ => Err(format!("invalid label alignment: {s}")),
        }
    }
}

/// Visual parameters applied to nodes and links when a topology is built.
///
/// Per-kind custom styles are merged over [`Theme::base_style`] when they are
/// registered, so a kind's style only needs to list the keys it changes.
#[derive(Debug, Clone)]
pub struct Theme {
    pub node_width: i64,
    pub node_height: i64,
    pub base_style: String,
    pub link_style: String,
    pub src_label_style: String,
    pub trgt_label_style: String,
    pub label_offset: f64,
    pub label_width: f64,
    pub label_height: f64,
    pub label_alignment: LabelAlignment,
    /// Kind-specific styles, already merged over `base_style`. Filled by
    /// [`Theme::with_custom_style`].
    pub custom_styles: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            node_width: 75,
            node_height: 75,
            base_style: String::new(),
            link_style: String::new(),
            src_label_style: String::new(),
            trgt_label_style: String::new(),
            label_offset: 20.0,
            label_width: 19.0,
            label_height: 14.0,
            label_alignment: LabelAlignment::default(),
            custom_styles: BTreeMap::new(),
        }
    }
}

impl Theme {
    /// Registers the custom style of a node `kind`, merged over the base style.
    pub fn with_custom_style(mut self, kind: &str, style: &str) -> Result<Self, StyleError> {
        let base: StyleMap = self.base_style.parse()?;
        let custom: StyleMap = style.parse()?;
        let merged = base.merged_with(&custom);

        debug!("Registered style for kind '{kind}' ({} keys)", merged.len());
        self.custom_styles.insert(kind.to_string(), format!("{merged};"));
        Ok(self)
    }

    /// The merged custom style of `kind`, or an empty fragment when none is registered.
    pub fn custom_style_for(&self, kind: &str) -> &str {
        self.custom_styles.get(kind).map(String::as_str).unwrap_or("")
    }
}
