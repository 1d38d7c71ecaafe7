//! Parsing helpers for PostgreSQL constraint violation messages.
//!
//! Postgres reports constraint violations with conventional constraint names
//! (`{table}_{column}_key`, `{table}_{column}_fkey`, ...) and a `DETAIL:` line
//! carrying the offending key/value pair. This module extracts structured
//! information from both so the error converter can build precise variants.

use std::sync::OnceLock;

use regex::Regex;

/// Utility for extracting entity/field/value triples from constraint messages.
pub struct ConstraintParser;

/// Compiled regex patterns, cached for reuse across conversions.
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    constraint_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in DETAIL lines
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Anchored on this schema's table names so multi-word tables
            // such as camping_spots split correctly; a naive split on the
            // first underscore would yield ("camping", "spots_...").
            constraint_name: Regex::new(
                r"^(users|camping_spots|bookings|reviews|availability)_(.+)_(?:fkey|key|check|idx)$",
            )
            .unwrap(),
        }
    }
}

/// Global regex patterns cache
static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a conventional constraint name into (table, column).
    ///
    /// Handles the `_key`, `_fkey`, `_check` and `_idx` suffixes produced by
    /// Postgres defaults and diesel migrations. Foreign key constraints with
    /// an `_id` column report the referenced entity name without the suffix
    /// (`bookings_user_id_fkey` -> ("bookings", "user")).
    pub fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let caps = Self::patterns().constraint_name.captures(constraint)?;
        let table = caps.get(1)?.as_str().to_string();
        let column = caps.get(2)?.as_str();
        let column = column.strip_suffix("_id").unwrap_or(column);
        Some((table, column.to_string()))
    }

    /// Extracts the `Key (field)=(value)` pair from a `DETAIL:` message line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        let caps = Self::patterns().key_value.captures(message)?;
        let field = caps.get(1)?.as_str().to_string();
        let value = caps.get(2)?.as_str().to_string();
        Some((field, value))
    }

    /// Extracts a quoted column name from a message line.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Parses a unique violation into (entity, field, value).
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value_from_message(message)
            .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));

        let entity = constraint_name
            .and_then(Self::parse_constraint_name)
            .map(|(table, _)| table)?;

        Some((entity, field, value))
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        // Message form: null value in column "email" violates not-null constraint
        let column = Self::extract_column_from_message(message);

        match (column, constraint_name.and_then(Self::parse_constraint_name)) {
            (Some(column), Some((table, _))) => Some((table, column)),
            (Some(column), None) => Some(("record".to_string(), column)),
            _ => None,
        }
    }

    /// Parses a foreign key violation into (referenced entity, field, value).
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value_from_message(message)?;
        let entity = constraint_name
            .and_then(Self::parse_constraint_name)
            .map_or_else(|| "record".to_string(), |(_, column)| column);
        Some((entity, field, value))
    }

    /// Parses a check violation into (entity, field).
    pub fn parse_check_violation(
        _message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        constraint_name.and_then(Self::parse_constraint_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unique_key_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("users_email_key"),
            Some(("users".to_string(), "email".to_string()))
        );
    }

    #[test]
    fn parses_fkey_constraint_name_strips_id_suffix() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("bookings_user_id_fkey"),
            Some(("bookings".to_string(), "user".to_string()))
        );
    }

    #[test]
    fn parses_multi_word_table_constraint_names() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("camping_spots_owner_id_fkey"),
            Some(("camping_spots".to_string(), "owner".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("reviews_camping_spot_id_fkey"),
            Some(("reviews".to_string(), "camping_spot".to_string()))
        );
    }

    #[test]
    fn rejects_unsuffixed_constraint_name() {
        assert_eq!(ConstraintParser::parse_constraint_name("whatever"), None);
    }

    #[test]
    fn rejects_constraint_name_for_unknown_table() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("orders_total_check"),
            None
        );
    }

    #[test]
    fn extracts_key_value_from_detail_line() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(test@example.com) already exists.";
        assert_eq!(
            ConstraintParser::extract_key_value_from_message(message),
            Some(("email".to_string(), "test@example.com".to_string()))
        );
    }

    #[test]
    fn parses_unique_violation_triple() {
        let message = "duplicate key value violates unique constraint \"availability_camping_spot_id_date_key\"\nDETAIL: Key (camping_spot_id, date)=(1, 2025-07-10) already exists.";
        let parsed =
            ConstraintParser::parse_unique_violation(message, Some("availability_camping_spot_id_date_key"));
        assert_eq!(
            parsed,
            Some((
                "availability".to_string(),
                "camping_spot_id, date".to_string(),
                "1, 2025-07-10".to_string()
            ))
        );
    }

    #[test]
    fn parses_not_null_violation_without_constraint_name() {
        let message = "null value in column \"email\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message, None),
            Some(("record".to_string(), "email".to_string()))
        );
    }

    #[test]
    fn parses_foreign_key_violation_on_multi_word_table() {
        let message = "insert or update on table \"reviews\" violates foreign key constraint \"reviews_camping_spot_id_fkey\"\nDETAIL: Key (camping_spot_id)=(999) is not present in table \"camping_spots\".";
        assert_eq!(
            ConstraintParser::parse_foreign_key_violation(
                message,
                Some("reviews_camping_spot_id_fkey")
            ),
            Some((
                "camping_spot".to_string(),
                "camping_spot_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn caches_compiled_patterns() {
        let first = ConstraintParser::patterns();
        let second = ConstraintParser::patterns();
        assert!(std::ptr::eq(first, second));
    }
}
