use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;

/// Explicit per-date availability override for a spot.
///
/// Absence of a row for a date means "unconstrained", which the conflict
/// resolver treats as bookable. Only an explicit `is_available = false`
/// row blocks a date.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::availability)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AvailabilityEntry {
    pub id: i32,
    pub camping_spot_id: i32,
    pub date: NaiveDate,
    pub is_available: bool,
}

/// Insertable availability row, upserted on (camping_spot_id, date).
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::availability)]
pub struct NewAvailabilityEntry {
    pub camping_spot_id: i32,
    pub date: NaiveDate,
    pub is_available: bool,
}
