use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{Length, Scalar};

/// Map key that targets every viewport width, like a zero-width breakpoint.
pub const DEFAULT_KEY: &str = "default";

/// A named viewport width above which a style override applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    /// Minimum viewport width in pixels.
    #[serde(deserialize_with = "de_threshold")]
    pub min_width: f32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: f32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }

    /// Base breakpoints apply at every width, so their rules need no media query.
    pub fn is_base(&self) -> bool {
        self.min_width <= 0.
    }

    pub fn scope(&self) -> Scope {
        if self.is_base() {
            Scope::Base
        } else {
            Scope::MinWidth(self.min_width)
        }
    }
}

/// Where a rule applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scope {
    /// Unconditionally.
    Base,
    /// When the viewport is at least this many pixels wide.
    MinWidth(f32),
}

impl Scope {
    pub fn min_width(&self) -> f32 {
        match self {
            Scope::Base => 0.,
            Scope::MinWidth(width) => *width,
        }
    }

    pub fn applies_at(&self, viewport_width: f32) -> bool {
        viewport_width >= self.min_width()
    }

    /// The media query gating this scope, `None` for unscoped rules.
    pub fn media_query(&self) -> Option<String> {
        match self {
            Scope::Base => None,
            Scope::MinWidth(width) => Some(format!("@media (min-width: {width}px)")),
        }
    }
}

/// Breakpoints ordered ascending by minimum width.
///
/// Deserializes from either a list of `{ "name", "min_width" }` objects or
/// an object mapping names to thresholds. Thresholds are pixel numbers or
/// strings in `px`, `em` or `rem`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBreakpoints")]
pub struct Breakpoints {
    entries: SmallVec<[Breakpoint; 6]>,
}

impl Breakpoints {
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> Result<Self, BreakpointError> {
        let mut entries: SmallVec<[Breakpoint; 6]> = entries.into_iter().collect();

        if entries.is_empty() {
            return Err(BreakpointError::Empty);
        }

        for (index, breakpoint) in entries.iter().enumerate() {
            if breakpoint.name == DEFAULT_KEY {
                return Err(BreakpointError::ReservedName);
            }
            if !breakpoint.min_width.is_finite() || breakpoint.min_width < 0. {
                return Err(BreakpointError::InvalidThreshold(breakpoint.name.clone()));
            }
            if entries[..index].iter().any(|b| b.name == breakpoint.name) {
                return Err(BreakpointError::Duplicate(breakpoint.name.clone()));
            }
        }

        entries.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|breakpoint| breakpoint.name == name)
    }

    /// The breakpoint at `index` in ascending order.
    pub fn nth(&self, index: usize) -> Option<&Breakpoint> {
        self.entries.get(index)
    }

    /// Whether `key` names a breakpoint or is the [`DEFAULT_KEY`].
    pub fn contains_key(&self, key: &str) -> bool {
        key == DEFAULT_KEY || self.get(key).is_some()
    }

    /// The scope of rules written for map key `key`.
    pub fn scope_of(&self, key: &str) -> Option<Scope> {
        if key == DEFAULT_KEY {
            return Some(Scope::Base);
        }
        self.get(key).map(Breakpoint::scope)
    }

    /// The widest breakpoint whose threshold `viewport_width` reaches.
    pub fn active(&self, viewport_width: f32) -> Option<&Breakpoint> {
        self.entries
            .iter()
            .rev()
            .find(|breakpoint| breakpoint.min_width <= viewport_width)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            entries: SmallVec::from_buf([
                Breakpoint::new("xs", 0.),
                Breakpoint::new("sm", 576.),
                Breakpoint::new("md", 768.),
                Breakpoint::new("lg", 992.),
                Breakpoint::new("xl", 1200.),
                Breakpoint::new("xxl", 1400.),
            ]),
        }
    }
}

impl Serialize for Breakpoints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreakpointError {
    #[error("at least one breakpoint needs to be provided")]
    Empty,
    #[error("`default` is reserved and can't name a breakpoint")]
    ReservedName,
    #[error("breakpoint `{0}` is defined more than once")]
    Duplicate(String),
    #[error("breakpoint `{0}` needs a finite, non-negative width")]
    InvalidThreshold(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBreakpoints {
    List(Vec<Breakpoint>),
    Map(#[serde(deserialize_with = "de_threshold_map")] IndexMap<String, f32>),
}

impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = BreakpointError;

    fn try_from(value: RawBreakpoints) -> Result<Self, Self::Error> {
        match value {
            RawBreakpoints::List(list) => Breakpoints::new(list),
            RawBreakpoints::Map(map) => Breakpoints::new(
                map.into_iter()
                    .map(|(name, min_width)| Breakpoint::new(name, min_width)),
            ),
        }
    }
}

fn threshold_from_scalar(value: &Scalar) -> Result<f32, String> {
    Length::try_from(value)
        .map_err(|err| err.to_string())?
        .to_pixels()
        .ok_or_else(|| format!("`{value}` can't be used as a breakpoint width"))
}

fn de_threshold<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Scalar::deserialize(deserializer)?;
    threshold_from_scalar(&value).map_err(serde::de::Error::custom)
}

fn de_threshold_map<'de, D>(deserializer: D) -> Result<IndexMap<String, f32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    IndexMap::<String, Scalar>::deserialize(deserializer)?
        .into_iter()
        .map(|(name, value)| {
            threshold_from_scalar(&value)
                .map(|width| (name, width))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoints() -> Breakpoints {
        Breakpoints::new([
            Breakpoint::new("base", 0.),
            Breakpoint::new("md", 768.),
            Breakpoint::new("lg", 1024.),
        ])
        .unwrap()
    }

    #[test]
    fn test_breakpoints_are_sorted_ascending() {
        let breakpoints = Breakpoints::new([
            Breakpoint::new("lg", 1024.),
            Breakpoint::new("base", 0.),
            Breakpoint::new("md", 768.),
        ])
        .unwrap();

        let names: Vec<_> = breakpoints.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["base", "md", "lg"]);
    }

    #[test]
    fn test_invalid_breakpoints_are_rejected() {
        assert_eq!(
            Breakpoints::new(Vec::new()),
            Err(BreakpointError::Empty)
        );
        assert_eq!(
            Breakpoints::new([Breakpoint::new("md", 768.), Breakpoint::new("md", 900.)]),
            Err(BreakpointError::Duplicate("md".into()))
        );
        assert_eq!(
            Breakpoints::new([Breakpoint::new("default", 0.)]),
            Err(BreakpointError::ReservedName)
        );
        assert_eq!(
            Breakpoints::new([Breakpoint::new("sm", -1.)]),
            Err(BreakpointError::InvalidThreshold("sm".into()))
        );
    }

    #[test]
    fn test_scopes() {
        let breakpoints = breakpoints();
        assert_eq!(breakpoints.scope_of("base"), Some(Scope::Base));
        assert_eq!(breakpoints.scope_of(DEFAULT_KEY), Some(Scope::Base));
        assert_eq!(breakpoints.scope_of("md"), Some(Scope::MinWidth(768.)));
        assert_eq!(breakpoints.scope_of("huge"), None);

        assert_eq!(
            Scope::MinWidth(768.).media_query().as_deref(),
            Some("@media (min-width: 768px)")
        );
        assert!(Scope::MinWidth(768.).applies_at(768.));
        assert!(!Scope::MinWidth(768.).applies_at(767.));
    }

    #[test]
    fn test_active_breakpoint() {
        let breakpoints = breakpoints();
        assert_eq!(breakpoints.active(320.).unwrap().name, "base");
        assert_eq!(breakpoints.active(768.).unwrap().name, "md");
        assert_eq!(breakpoints.active(5000.).unwrap().name, "lg");

        let no_base = Breakpoints::new([Breakpoint::new("md", 768.)]).unwrap();
        assert!(no_base.active(500.).is_none());
    }

    #[test]
    fn test_breakpoints_from_json_map() {
        let breakpoints: Breakpoints =
            serde_json::from_str(r#"{ "base": 0, "md": "48em", "lg": "1024px" }"#).unwrap();

        assert_eq!(breakpoints.get("md").unwrap().min_width, 768.);
        assert_eq!(breakpoints.get("lg").unwrap().min_width, 1024.);
    }

    #[test]
    fn test_breakpoints_from_json_list() {
        let breakpoints: Breakpoints = serde_json::from_str(
            r#"[{ "name": "md", "min_width": 768 }, { "name": "base", "min_width": 0 }]"#,
        )
        .unwrap();

        let expected =
            Breakpoints::new([Breakpoint::new("base", 0.), Breakpoint::new("md", 768.)]).unwrap();
        assert_eq!(breakpoints, expected);
    }

    #[test]
    fn test_breakpoints_serialize_as_list() {
        let json = serde_json::to_string(&breakpoints()).unwrap();
        let parsed: Breakpoints = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakpoints());
    }

    #[test]
    fn test_breakpoints_json_rejects_percentages() {
        let result = serde_json::from_str::<Breakpoints>(r#"{ "md": "50%" }"#);
        assert!(result.is_err());
    }
}
