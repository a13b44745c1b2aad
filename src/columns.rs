//! The fixed column set of a contact export and header resolution.
//!
//! Column names are resolved to positions once, at the header row, so that a
//! schema mismatch fails before any row is mapped or any file is written.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::{ConvertError, Result};

pub const FAMILY_NAME: &str = "Family Name";
pub const GIVEN_NAME: &str = "Given Name";
pub const ADDITIONAL_NAME: &str = "Additional Name";
pub const NAME_PREFIX: &str = "Name Prefix";
pub const NAME_SUFFIX: &str = "Name Suffix";
pub const ORGANIZATION_NAME: &str = "Organization 1 - Name";
pub const ORGANIZATION_DEPARTMENT: &str = "Organization 1 - Department";
pub const ORGANIZATION_TITLE: &str = "Organization 1 - Title";
pub const NOTES: &str = "Notes";
pub const GROUP_MEMBERSHIP: &str = "Group Membership";

/// Number of numbered phone slots in an export.
pub const PHONE_SLOTS: usize = 5;
/// Email, address, website and IM only ever use their first slot.
pub const SINGLE_SLOT: usize = 1;

pub const PHONE: &str = "Phone";
pub const EMAIL: &str = "E-mail";
pub const ADDRESS: &str = "Address";
pub const WEBSITE: &str = "Website";
pub const IM: &str = "IM";

pub const ADDRESS_PARTS: [&str; 5] = ["Street", "City", "Region", "Postal Code", "Country"];

/// Builds the `<group> <index> - <field>` column name used by numbered slots.
pub fn slot_column(group: &str, index: usize, field: &str) -> String {
    format!("{group} {index} - {field}")
}

/// Every column the mapper reads, in export order.
pub fn required_columns() -> Vec<String> {
    let mut columns: Vec<String> = [
        FAMILY_NAME,
        GIVEN_NAME,
        ADDITIONAL_NAME,
        NAME_PREFIX,
        NAME_SUFFIX,
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();

    for index in 1..=PHONE_SLOTS {
        columns.push(slot_column(PHONE, index, "Type"));
        columns.push(slot_column(PHONE, index, "Value"));
    }
    for index in 1..=SINGLE_SLOT {
        columns.push(slot_column(EMAIL, index, "Type"));
        columns.push(slot_column(EMAIL, index, "Value"));
        columns.push(slot_column(ADDRESS, index, "Type"));
        for part in ADDRESS_PARTS {
            columns.push(slot_column(ADDRESS, index, part));
        }
        columns.push(slot_column(WEBSITE, index, "Type"));
        columns.push(slot_column(WEBSITE, index, "Value"));
        columns.push(slot_column(IM, index, "Type"));
        columns.push(slot_column(IM, index, "Value"));
    }

    columns.extend(
        [
            ORGANIZATION_NAME,
            ORGANIZATION_DEPARTMENT,
            ORGANIZATION_TITLE,
            NOTES,
            GROUP_MEMBERSHIP,
        ]
        .iter()
        .map(|name| name.to_string()),
    );
    columns
}

/// Positions of the required columns within a concrete header row.
///
/// Extra columns in the export are ignored. A duplicated header name resolves
/// to its last occurrence.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        let seen: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();

        let mut positions = HashMap::new();
        let mut missing = Vec::new();
        for column in required_columns() {
            match seen.get(column.as_str()) {
                Some(&idx) => {
                    positions.insert(column, idx);
                }
                None => missing.push(column),
            }
        }

        if missing.is_empty() {
            Ok(ColumnIndex { positions })
        } else {
            Err(ConvertError::Schema { missing })
        }
    }

    /// Reads a required column from `record`.
    ///
    /// Only names returned by [`required_columns`] are valid here; the reader
    /// rejects rows whose length differs from the header, so every resolved
    /// position is in range.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&idx| record.get(idx))
            .unwrap_or("")
    }
}
