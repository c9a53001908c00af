//! Role dataset loading.
//!
//! The dataset is a JSON array of role objects. Loading sorts it newest first
//! by end year and decorates every record with its zone theme, a display year
//! range and a stable id.
//!
//! [`load_roles`] never fails: any load error is logged and an empty list is
//! returned so the page still renders. [`try_load_roles`] surfaces the error.

use serde_json::Value;

use crate::config::DatasetSource;
use crate::error::{CareerMapError, CareerMapResult};
use crate::types::{format_years, DecoratedRole, RoleEntry, RoleId};
use crate::zones::{theme_for, UNKNOWN_ZONE};

/// Parse a dataset document into raw role entries.
///
/// The document must be a JSON array. Each record is decoded on its own: a
/// record that is not an object is skipped with a warning, so one bad entry
/// never hides the rest.
pub fn parse_roles(body: &str) -> CareerMapResult<Vec<RoleEntry>> {
    let value: Value = serde_json::from_str(body)?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(CareerMapError::InvalidDataset(format!(
                "expected a JSON array of roles, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let kind = json_kind(&record);
        match serde_json::from_value::<RoleEntry>(record) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!(index, found = kind, error = %e, "Skipping unreadable role record"),
        }
    }
    Ok(entries)
}

/// Sort entries newest first and decorate them.
///
/// Entries without an end year sort as year zero, so they come last. The sort
/// is stable: entries with equal end years keep their dataset order. Fallback
/// ids are indices in the sorted order.
pub fn decorate_roles(mut entries: Vec<RoleEntry>) -> Vec<DecoratedRole> {
    entries.sort_by_key(|entry| std::cmp::Reverse(entry.end_year.unwrap_or(0)));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decorate(entry, index))
        .collect()
}

fn decorate(entry: RoleEntry, index: usize) -> DecoratedRole {
    let zone_id = entry
        .zone_ids
        .as_ref()
        .and_then(|ids| ids.first())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_ZONE.to_string());

    DecoratedRole {
        id: RoleId::from_raw(entry.id.as_ref(), index),
        title: entry.title.unwrap_or_default(),
        company: entry.company.unwrap_or_default(),
        years: format_years(entry.start_year, entry.end_year),
        location: entry.location.unwrap_or_default(),
        summary: entry.summary.unwrap_or_default(),
        theme: theme_for(&zone_id),
        zone_id,
        position: entry.position,
    }
}

/// Fetch, parse and decorate the dataset, surfacing any failure.
pub async fn try_load_roles(source: &DatasetSource) -> CareerMapResult<Vec<DecoratedRole>> {
    let body = source.read_to_string().await?;
    let roles = decorate_roles(parse_roles(&body)?);

    let unplaced = roles.iter().filter(|r| !r.is_placeable()).count();
    tracing::info!(
        source = %source,
        roles = roles.len(),
        unplaced,
        "Loaded role dataset"
    );
    Ok(roles)
}

/// Fetch the dataset, degrading to an empty list on any failure.
pub async fn load_roles(source: &DatasetSource) -> Vec<DecoratedRole> {
    match try_load_roles(source).await {
        Ok(roles) => roles,
        Err(e) => {
            tracing::error!(source = %source, error = %e, "Failed to load roles");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
