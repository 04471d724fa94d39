//! Sector rate lookup.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{RateTable, SectorRisk, builtin_office_sector};
use crate::models::Sector;

/// Resolves a sector identifier to its rate-table entry.
///
/// Never fails: an unknown identifier, or a sector the table does not list,
/// resolves to the office entry.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::lookup_sector;
/// use employer_cost_engine::config::builtin_rate_table;
/// use employer_cost_engine::models::Sector;
///
/// let table = builtin_rate_table();
/// assert_eq!(lookup_sector(table, "construction").sector, Sector::Construction);
/// assert_eq!(lookup_sector(table, "fishing").sector, Sector::Office);
/// ```
pub fn lookup_sector<'a>(table: &'a RateTable, sector_id: &str) -> &'a SectorRisk {
    if let Some(entry) = Sector::from_id(sector_id).and_then(|sector| find_entry(table, sector)) {
        return entry;
    }

    debug!(sector_id, "Unrecognised sector, falling back to office");
    find_entry(table, Sector::Office).unwrap_or_else(|| builtin_office_sector())
}

fn find_entry(table: &RateTable, sector: Sector) -> Option<&SectorRisk> {
    table.sectors().iter().find(|entry| entry.sector == sector)
}

/// Returns the accident-insurance rate for a sector identifier, with the
/// same office fallback as [`lookup_sector`].
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::sector_rate;
/// use employer_cost_engine::config::builtin_rate_table;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sector_rate(builtin_rate_table(), "transport"), Decimal::new(37, 3));
/// assert_eq!(sector_rate(builtin_rate_table(), ""), Decimal::new(15, 3));
/// ```
pub fn sector_rate(table: &RateTable, sector_id: &str) -> Decimal {
    lookup_sector(table, sector_id).rate
}
