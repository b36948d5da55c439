//! Scheme documents: the base16/base24 palette mapping plus its metadata.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::Error;

/// Slot names of a base16 palette.
pub const BASE16_SLOTS: [&str; 16] =
    ["base00", "base01", "base02", "base03", "base04", "base05",
     "base06", "base07", "base08", "base09", "base0A", "base0B",
     "base0C", "base0D", "base0E", "base0F"];

/// Slot names added by the base24 derivation.
pub const BASE24_EXTRA_SLOTS: [&str; 8] =
    ["base10", "base11", "base12", "base13",
     "base14", "base15", "base16", "base17"];

/// Light/dark orientation of a scheme.
///
/// Only affects the two background-derived slots (`base10`, `base11`):
/// light schemes brighten them, dark schemes darken them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn is_light(self) -> bool { matches!(self, Variant::Light) }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "light" => Ok(Variant::Light),
            "dark" => Ok(Variant::Dark),
            _ => Err(Error::InvalidVariant { value: s.to_string() }),
        }
    }
}

/// An ordered slot → color mapping.
///
/// Insertion order is preserved so a serialized scheme keeps its slots
/// in document order, with derived slots appended at the end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(IndexMap<String, HexColor>);

impl Palette {
    /// Look the slot up, or `None` if it is absent.
    pub fn get(&self, slot: &str) -> Option<HexColor> {
        self.0.get(slot).copied()
    }

    /// Look the slot up, failing with [`Error::MissingSourceColor`].
    pub fn color(&self, slot: &'static str) -> Result<HexColor, Error> {
        self.get(slot).ok_or(Error::MissingSourceColor { slot })
    }

    /// Insert or replace a slot.
    pub fn insert(&mut self, slot: impl Into<String>, color: HexColor) {
        self.0.insert(slot.into(), color);
    }

    /// Remove a slot, keeping the remaining slots in document order.
    pub fn remove(&mut self, slot: &str) -> Option<HexColor> {
        self.0.shift_remove(slot)
    }

    pub fn contains(&self, slot: &str) -> bool { self.0.contains_key(slot) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Slot names in document order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Colors in document order.
    pub fn colors(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.0.values().copied()
    }
}

/// A scheme document as stored on disk.
///
/// `variant` is kept as the raw document string and parsed when the
/// derivation runs, so an unrecognized value surfaces as
/// [`Error::InvalidVariant`] rather than a YAML type error.  Fields this
/// crate does not interpret (name, author, …) pass through `extra`
/// untouched, so a converted scheme loses none of its metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    /// Scheme kind marker: `"base16"` on input, `"base24"` after
    /// derivation.
    #[serde(default)]
    pub system: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yml::Value>,
    #[serde(default)]
    pub variant: String,
    pub palette: Palette,
}

impl Scheme {
    /// Deserialize a scheme from YAML text.
    pub fn from_yaml(text: &str) -> Result<Scheme, Error> {
        Ok(serde_yml::from_str(text)?)
    }

    /// Serialize the scheme back to YAML.
    ///
    /// Palette entries come out as lowercase `#rrggbb`, whatever case or
    /// prefix the input used.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEME: &str = "\
system: base16
name: Ashes
author: Jannik Siebert
variant: dark
palette:
  base00: \"1C2023\"
  base01: \"#393F45\"
  base02: \"4E5A65\"
";

    #[test]
    fn variant_parses_known_values_only() {
        assert_eq!("light".parse::<Variant>().unwrap(), Variant::Light);
        assert_eq!("dark".parse::<Variant>().unwrap(), Variant::Dark);
        for bad in ["Dark", "LIGHT", "midtone", ""] {
            assert!(matches!(bad.parse::<Variant>(),
                             Err(Error::InvalidVariant { .. })));
        }
    }

    #[test]
    fn scheme_round_trips_through_yaml() {
        let scheme = Scheme::from_yaml(SCHEME).unwrap();
        assert_eq!(scheme.system, "base16");
        assert_eq!(scheme.variant, "dark");
        assert_eq!(scheme.palette.len(), 3);

        let text = scheme.to_yaml().unwrap();
        let reparsed = Scheme::from_yaml(&text).unwrap();
        assert_eq!(scheme, reparsed);
        // Untouched metadata survives the rewrite.
        assert!(text.contains("Jannik Siebert"));
    }

    #[test]
    fn palette_preserves_document_order() {
        let scheme = Scheme::from_yaml(SCHEME).unwrap();
        let slots: Vec<_> = scheme.palette.slots().collect();
        assert_eq!(slots, ["base00", "base01", "base02"]);
    }

    #[test]
    fn palette_values_normalize_on_output() {
        let scheme = Scheme::from_yaml(SCHEME).unwrap();
        let text = scheme.to_yaml().unwrap();
        // Bare uppercase input comes back prefixed and lowercase.
        assert!(text.contains("#1c2023"));
        assert!(text.contains("#393f45"));
    }

    #[test]
    fn malformed_palette_color_is_rejected() {
        let bad = SCHEME.replace("4E5A65", "4E5A6");
        assert!(Scheme::from_yaml(&bad).is_err());
    }

    #[test]
    fn missing_palette_color_lookup_fails() {
        let scheme = Scheme::from_yaml(SCHEME).unwrap();
        assert!(matches!(scheme.palette.color("base0D"),
                         Err(Error::MissingSourceColor { slot: "base0D" })));
    }
}
