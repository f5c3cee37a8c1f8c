use crate::catalog::Catalog;
use crate::models::MarketInsight;

/// Returns the job-market insight record for a career.
///
/// Exact-match lookup against the static insight table; careers absent from
/// the table get the "N/A" fallback record rather than an error.
pub fn lookup(catalog: &Catalog, career_name: &str) -> MarketInsight {
    catalog
        .insight(career_name)
        .cloned()
        .unwrap_or_else(MarketInsight::unavailable)
}
