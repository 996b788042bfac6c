//! Parsing of the `filter` and `sort` query string parameters.
//!
//! Both parameters are flat, comma separated lists of clauses:
//!
//! - filter: `field=value` or a bare `field` meaning "field is not null"
//! - sort: `field=direction` or a bare `field` meaning ascending
//!
//! Parsing never looks at the target entity; field names are checked when the select
//! statement is built.

/// Right-hand side of a filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// `true` or `false`, case-insensitive.
    Bool(bool),
    Text(String),
    /// Bare field name, matches rows where the column is not null.
    Exists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordered field → value mapping parsed from the `filter` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec(Vec<(String, FilterValue)>);

/// Ordered field → direction mapping parsed from the `sort` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec(Vec<(String, SortDirection)>);

impl FilterSpec {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl SortSpec {
    pub fn iter(&self) -> impl Iterator<Item = (&str, SortDirection)> {
        self.0.iter().map(|(field, direction)| (field.as_str(), *direction))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Parses a raw `filter` parameter.
///
/// A field repeated in several clauses keeps the position of its first occurrence and
/// the value of its last one. Empty clauses are skipped.
///
/// # Arguments
/// - `raw` - Raw parameter value, `None` when the parameter is absent
///
/// # Returns
/// - `FilterSpec` - Parsed clauses in input order
pub fn parse_filter(raw: Option<&str>) -> FilterSpec {
    let mut entries = Vec::new();

    for (field, value) in clauses(raw) {
        let value = match value {
            None => FilterValue::Exists,
            Some(v) if v.eq_ignore_ascii_case("true") => FilterValue::Bool(true),
            Some(v) if v.eq_ignore_ascii_case("false") => FilterValue::Bool(false),
            Some(v) => FilterValue::Text(v.to_string()),
        };
        upsert(&mut entries, field, value);
    }

    FilterSpec(entries)
}

/// Parses a raw `sort` parameter.
///
/// Only `desc` (case-insensitive) sorts descending, any other direction is ascending.
pub fn parse_sort(raw: Option<&str>) -> SortSpec {
    let mut entries = Vec::new();

    for (field, direction) in clauses(raw) {
        let direction = match direction {
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        upsert(&mut entries, field, direction);
    }

    SortSpec(entries)
}

/// Splits a raw parameter into trimmed `(field, value)` pairs, dropping empty clauses.
fn clauses(raw: Option<&str>) -> impl Iterator<Item = (&str, Option<&str>)> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .filter_map(|clause| match clause.split_once('=') {
            Some((field, value)) => {
                let field = field.trim();
                (!field.is_empty()).then_some((field, Some(value.trim())))
            }
            None => Some((clause, None)),
        })
}

fn upsert<V>(entries: &mut Vec<(String, V)>, field: &str, value: V) {
    match entries.iter_mut().find(|(existing, _)| existing == field) {
        Some(entry) => entry.1 = value,
        None => entries.push((field.to_string(), value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_booleans_and_existence() {
        let clauses = parse_filter(Some("name=Night ride,active=TRUE,deleted=false,description"));

        let parsed: Vec<_> = clauses.iter().collect();
        assert_eq!(
            parsed,
            vec![
                ("name", &FilterValue::Text("Night ride".to_string())),
                ("active", &FilterValue::Bool(true)),
                ("deleted", &FilterValue::Bool(false)),
                ("description", &FilterValue::Exists),
            ]
        );
    }

    #[test]
    fn repeated_field_keeps_first_position_and_last_value() {
        let clauses = parse_filter(Some("team_id=1,name=a,team_id=2"));

        let parsed: Vec<_> = clauses.iter().collect();
        assert_eq!(
            parsed,
            vec![
                ("team_id", &FilterValue::Text("2".to_string())),
                ("name", &FilterValue::Text("a".to_string())),
            ]
        );
    }

    #[test]
    fn skips_empty_clauses_and_trims() {
        let clauses = parse_filter(Some(" name = Ride , ,"));

        assert_eq!(clauses.len(), 1);
        assert_eq!(
            clauses.iter().next(),
            Some(("name", &FilterValue::Text("Ride".to_string())))
        );
    }

    #[test]
    fn absent_parameters_are_empty() {
        assert!(parse_filter(None).is_empty());
        assert!(parse_sort(None).is_empty());
        assert!(parse_sort(Some("")).is_empty());
    }

    #[test]
    fn sort_direction_defaults_to_ascending() {
        let clauses = parse_sort(Some("name,start_date=DESC,id=sideways"));

        let parsed: Vec<_> = clauses.iter().collect();
        assert_eq!(
            parsed,
            vec![
                ("name", SortDirection::Asc),
                ("start_date", SortDirection::Desc),
                ("id", SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn does_not_validate_field_names() {
        let clauses = parse_filter(Some("bogus_field=1"));

        assert_eq!(
            clauses.iter().next(),
            Some(("bogus_field", &FilterValue::Text("1".to_string())))
        );
    }
}
