//! Element attribute access
//!
//! Attribute names are written in kebab-case; the older snake_case
//! spelling of every name is accepted too.

use std::borrow::Cow;

use crate::error::{CodeError, Result};

const TRUE_VALUES: &[&str] = &["true", "t", "1", "True", "T", "TRUE", "yes", "y", "Yes", "Y", "YES"];
const FALSE_VALUES: &[&str] = &["false", "f", "0", "False", "F", "FALSE", "no", "n", "No", "N", "NO"];

/// Named colors of the course palette
const NAMED_COLORS: &[(&str, &str)] = &[
    ("red1", "#ffccbc"),
    ("red2", "#ff6c5c"),
    ("red3", "#c72c1c"),
    ("pink1", "#ffbcd8"),
    ("pink2", "#fa5c98"),
    ("pink3", "#ba1c58"),
    ("purple1", "#dcc6e0"),
    ("purple2", "#9b59b6"),
    ("purple3", "#5e147d"),
    ("blue1", "#39d5ff"),
    ("blue2", "#1297e0"),
    ("blue3", "#0057a0"),
    ("turquoise1", "#5efaf7"),
    ("turquoise2", "#27cbc0"),
    ("turquoise3", "#008b80"),
    ("green1", "#8effc1"),
    ("green2", "#2ecc71"),
    ("green3", "#008c31"),
    ("yellow1", "#fde3a7"),
    ("yellow2", "#f5ab35"),
    ("yellow3", "#d87400"),
    ("orange1", "#ffdcb5"),
    ("orange2", "#ff926b"),
    ("orange3", "#c3522b"),
    ("brown1", "#f6c4a3"),
    ("brown2", "#ce9c7b"),
    ("brown3", "#8e5c3b"),
    ("gray1", "#e0e0e0"),
    ("gray2", "#909090"),
    ("gray3", "#505050"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

/// Legacy spelling of an attribute name
fn legacy_name(name: &str) -> Cow<'_, str> {
    if name.contains('-') {
        Cow::Owned(name.replace('-', "_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Parse a boolean attribute value
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    if TRUE_VALUES.contains(&value) {
        Ok(true)
    } else if FALSE_VALUES.contains(&value) {
        Ok(false)
    } else {
        Err(CodeError::InvalidBoolean {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Look up a color of the named palette
pub fn named_color(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(color, _)| color.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Three groups of one or two hex digits, i.e. `#` plus 3 to 6 digits
fn is_css_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| (3..=6).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Parse a color attribute: CSS hex as written, or a named color as hex
pub fn parse_color(name: &str, value: &str) -> Result<String> {
    if is_css_hex(value) {
        return Ok(value.to_string());
    }
    named_color(value)
        .map(str::to_string)
        .ok_or_else(|| CodeError::InvalidColor {
            name: name.to_string(),
            value: value.to_string(),
        })
}

/// Attributes of one element, in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Check that every attribute is one of `allowed` (in either spelling)
    pub fn check(&self, allowed: &[&str]) -> Result<()> {
        for (name, _) in &self.entries {
            let known = allowed
                .iter()
                .any(|a| *a == name.as_str() || legacy_name(a) == name.as_str());
            if !known {
                return Err(CodeError::UnknownAttribute(name.clone()));
            }
        }
        Ok(())
    }

    /// Check if an attribute is present in either spelling
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Raw value of an attribute, preferring the kebab-case spelling
    pub fn get(&self, name: &str) -> Option<&str> {
        let lookup = |wanted: &str| {
            self.entries
                .iter()
                .find(|(n, _)| n == wanted)
                .map(|(_, v)| v.as_str())
        };
        lookup(name).or_else(|| lookup(legacy_name(name).as_ref()))
    }

    /// Boolean attribute, or `default` when absent
    pub fn get_bool(&self, name: &str, default: bool) -> Result<bool> {
        match self.get(name) {
            Some(value) => parse_bool(name, value),
            None => Ok(default),
        }
    }

    /// Color attribute, or `default` when absent
    ///
    /// The default is used as given; callers resolve it with [`parse_color`].
    pub fn get_color(&self, name: &str, default: Option<&str>) -> Result<Option<String>> {
        match self.get(name) {
            Some(value) => parse_color(name, value).map(Some),
            None => Ok(default.map(str::to_string)),
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}
