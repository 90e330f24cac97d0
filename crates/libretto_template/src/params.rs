//! Request parameter resolution.

use libretto_core::Params;

/// Merge per-step parameter overrides onto port defaults.
///
/// Keys in `overrides` win; keys only in `defaults` are kept; keys only in
/// `overrides` are added. Values are not validated here; interpreting them
/// is the completion port's job.
///
/// # Examples
///
/// ```
/// use libretto_core::Params;
/// use libretto_template::merge;
///
/// let defaults = Params::from([
///     ("a".to_string(), "1".to_string()),
///     ("b".to_string(), "2".to_string()),
/// ]);
/// let overrides = Params::from([("b".to_string(), "9".to_string())]);
///
/// let merged = merge(&defaults, &overrides);
/// assert_eq!(merged.get("a").map(String::as_str), Some("1"));
/// assert_eq!(merged.get("b").map(String::as_str), Some("9"));
/// ```
pub fn merge(defaults: &Params, overrides: &Params) -> Params {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
