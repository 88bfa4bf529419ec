use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use thiserror::Error;

use crate::{Breakpoints, ResponsiveValue, Scalar};

/// A responsive value normalized against a set of breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resolved {
    /// The same value at every width.
    #[serde(rename = "singleValue")]
    Single(Scalar),
    /// Values keyed by breakpoint name (or `default`).
    Map(IndexMap<String, Scalar>),
}

impl Resolved {
    /// Sentinel for an optional property that was left unset.
    pub fn none() -> Self {
        Resolved::Single(Scalar::Text("none".into()))
    }

    pub fn single(&self) -> Option<&Scalar> {
        match self {
            Resolved::Single(value) => Some(value),
            Resolved::Map(_) => None,
        }
    }

    pub fn map(&self) -> Option<&IndexMap<String, Scalar>> {
        match self {
            Resolved::Single(_) => None,
            Resolved::Map(map) => Some(map),
        }
    }
}

/// What a responsive value configures, which decides how its scalars are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyKind {
    /// A CSS length such as a gutter or max-width.
    #[default]
    Length,
    /// A column count, which must be a positive whole number.
    Columns,
}

impl PropertyKind {
    fn check(&self, value: &Scalar) -> Result<(), ResolveError> {
        match self {
            PropertyKind::Length => Ok(()),
            PropertyKind::Columns => match value.as_count() {
                Some(_) => Ok(()),
                None => Err(ResolveError::InvalidColumnCount(value.clone())),
            },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("responsive value has no entries")]
    Empty,
    #[error("{len} values were given but only {available} breakpoints are defined")]
    SequenceTooLong { len: usize, available: usize },
    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),
    #[error("`{0}` is not a valid column count")]
    InvalidColumnCount(Scalar),
}

/// Resolves `value` against `breakpoints`, failing on the first problem.
///
/// Scalars resolve to [`Resolved::Single`]. Sequences map position `i` to the
/// `i`-th breakpoint in ascending order, and maps are passed through after
/// their keys are checked.
pub fn resolve(
    value: &ResponsiveValue,
    breakpoints: &Breakpoints,
    kind: PropertyKind,
) -> Result<Resolved, ResolveError> {
    let (resolved, mut errors) = resolve_collecting(value, breakpoints, kind);

    if !errors.is_empty() {
        return Err(errors.swap_remove(0));
    }

    resolved.ok_or(ResolveError::Empty)
}

/// Like [`resolve`], but an absent value resolves to [`Resolved::none`].
pub fn resolve_optional(
    value: Option<&ResponsiveValue>,
    breakpoints: &Breakpoints,
    kind: PropertyKind,
) -> Result<Resolved, ResolveError> {
    match value {
        Some(value) => resolve(value, breakpoints, kind),
        None => Ok(Resolved::none()),
    }
}

/// Resolves `value`, logging every problem and dropping only the entries at fault.
///
/// Returns `None` when no usable entry remains.
pub fn resolve_or_skip(
    value: &ResponsiveValue,
    breakpoints: &Breakpoints,
    kind: PropertyKind,
    property: &str,
) -> Option<Resolved> {
    let (resolved, errors) = resolve_collecting(value, breakpoints, kind);

    for error in errors {
        warn!("grid debugger: skipping part of `{property}`: {error}");
    }

    resolved
}

fn resolve_collecting(
    value: &ResponsiveValue,
    breakpoints: &Breakpoints,
    kind: PropertyKind,
) -> (Option<Resolved>, Vec<ResolveError>) {
    let mut errors = Vec::new();

    let resolved = match value {
        ResponsiveValue::Scalar(scalar) => match kind.check(scalar) {
            Ok(()) => Some(Resolved::Single(scalar.clone())),
            Err(error) => {
                errors.push(error);
                None
            }
        },

        ResponsiveValue::Sequence(values) => {
            if values.len() > breakpoints.len() {
                errors.push(ResolveError::SequenceTooLong {
                    len: values.len(),
                    available: breakpoints.len(),
                });
            }

            let map = values
                .iter()
                .zip(breakpoints.iter())
                .filter_map(|(value, breakpoint)| match kind.check(value) {
                    Ok(()) => Some((breakpoint.name.clone(), value.clone())),
                    Err(error) => {
                        errors.push(error);
                        None
                    }
                })
                .collect();

            non_empty(map, values.is_empty(), &mut errors)
        }

        ResponsiveValue::BreakpointMap(entries) => {
            let map = entries
                .iter()
                .filter_map(|(key, value)| {
                    if !breakpoints.contains_key(key) {
                        errors.push(ResolveError::UnknownBreakpoint(key.clone()));
                        return None;
                    }

                    match kind.check(value) {
                        Ok(()) => Some((key.clone(), value.clone())),
                        Err(error) => {
                            errors.push(error);
                            None
                        }
                    }
                })
                .collect();

            non_empty(map, entries.is_empty(), &mut errors)
        }
    };

    (resolved, errors)
}

fn non_empty(
    map: IndexMap<String, Scalar>,
    input_was_empty: bool,
    errors: &mut Vec<ResolveError>,
) -> Option<Resolved> {
    if input_was_empty {
        errors.push(ResolveError::Empty);
    }

    (!map.is_empty()).then_some(Resolved::Map(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Breakpoint;

    fn breakpoints() -> Breakpoints {
        Breakpoints::new([
            Breakpoint::new("base", 0.),
            Breakpoint::new("md", 768.),
            Breakpoint::new("lg", 1024.),
        ])
        .unwrap()
    }

    fn map(entries: &[(&str, Scalar)]) -> IndexMap<String, Scalar> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_scalar_resolves_to_single_value() {
        for value in ["16px", "2rem", "none"] {
            let resolved = resolve(&value.into(), &breakpoints(), PropertyKind::Length);
            assert_eq!(resolved, Ok(Resolved::Single(value.into())));
        }

        let resolved = resolve(&24f64.into(), &breakpoints(), PropertyKind::Length);
        assert_eq!(resolved, Ok(Resolved::Single(Scalar::Number(24.))));
    }

    #[test]
    fn test_sequence_follows_ascending_breakpoints() {
        let value: ResponsiveValue = [4u32, 8, 12].into_iter().collect();
        let resolved = resolve(&value, &breakpoints(), PropertyKind::Columns).unwrap();

        assert_eq!(
            resolved,
            Resolved::Map(map(&[
                ("base", 4u32.into()),
                ("md", 8u32.into()),
                ("lg", 12u32.into()),
            ]))
        );
    }

    #[test]
    fn test_short_sequence_covers_smallest_breakpoints() {
        let value: ResponsiveValue = ["8px", "16px"].into_iter().collect();
        let resolved = resolve(&value, &breakpoints(), PropertyKind::Length).unwrap();

        let keys: Vec<_> = resolved.map().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["base", "md"]);
    }

    #[test]
    fn test_map_passes_through_unchanged() {
        let value = ResponsiveValue::map([("lg", "40px"), ("default", "10px"), ("md", "20px")]);
        let resolved = resolve(&value, &breakpoints(), PropertyKind::Length).unwrap();

        assert_eq!(
            resolved,
            Resolved::Map(map(&[
                ("lg", "40px".into()),
                ("default", "10px".into()),
                ("md", "20px".into()),
            ]))
        );
    }

    #[test]
    fn test_sequence_longer_than_breakpoints_is_an_error() {
        let value: ResponsiveValue = [1u32, 2, 3, 4].into_iter().collect();
        assert_eq!(
            resolve(&value, &breakpoints(), PropertyKind::Columns),
            Err(ResolveError::SequenceTooLong {
                len: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_unknown_breakpoint_is_an_error() {
        let value = ResponsiveValue::map([("md", "20px"), ("huge", "40px")]);
        assert_eq!(
            resolve(&value, &breakpoints(), PropertyKind::Length),
            Err(ResolveError::UnknownBreakpoint("huge".into()))
        );
    }

    #[test]
    fn test_invalid_column_counts() {
        assert_eq!(
            resolve(&"wide".into(), &breakpoints(), PropertyKind::Columns),
            Err(ResolveError::InvalidColumnCount("wide".into()))
        );
        assert_eq!(
            resolve(&0u32.into(), &breakpoints(), PropertyKind::Columns),
            Err(ResolveError::InvalidColumnCount(0u32.into()))
        );
    }

    #[test]
    fn test_empty_values_are_errors() {
        let empty: ResponsiveValue = Vec::<Scalar>::new().into_iter().collect();
        assert_eq!(
            resolve(&empty, &breakpoints(), PropertyKind::Length),
            Err(ResolveError::Empty)
        );
        assert_eq!(
            resolve(
                &ResponsiveValue::BreakpointMap(IndexMap::new()),
                &breakpoints(),
                PropertyKind::Length
            ),
            Err(ResolveError::Empty)
        );
    }

    #[test]
    fn test_missing_optional_value_is_none() {
        let resolved = resolve_optional(None, &breakpoints(), PropertyKind::Length);
        assert_eq!(resolved, Ok(Resolved::none()));
        assert_eq!(Resolved::none().single(), Some(&Scalar::from("none")));
    }

    #[test]
    fn test_resolve_or_skip_keeps_valid_entries() {
        let value = ResponsiveValue::map([("md", "20px"), ("huge", "40px")]);
        let resolved =
            resolve_or_skip(&value, &breakpoints(), PropertyKind::Length, "gutter").unwrap();
        assert_eq!(resolved, Resolved::Map(map(&[("md", "20px".into())])));

        let value: ResponsiveValue = [4u32, 8, 12, 16].into_iter().collect();
        let resolved =
            resolve_or_skip(&value, &breakpoints(), PropertyKind::Columns, "numCols").unwrap();
        assert_eq!(resolved.map().unwrap().len(), 3);
    }

    #[test]
    fn test_resolve_or_skip_with_nothing_usable() {
        let value = ResponsiveValue::map([("huge", 4u32)]);
        assert_eq!(
            resolve_or_skip(&value, &breakpoints(), PropertyKind::Columns, "numCols"),
            None
        );
        assert_eq!(
            resolve_or_skip(&"many".into(), &breakpoints(), PropertyKind::Columns, "numCols"),
            None
        );
    }
}
