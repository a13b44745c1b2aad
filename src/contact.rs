//! Fixed-schema contact rows and the CSV reader that produces them.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use csv::StringRecord;
use log::debug;

use crate::{
    columns::{self, ColumnIndex, slot_column},
    error::{ConvertError, Result},
    io_utils,
};

/// A `<kind>`/`<value>` pair from a numbered slot such as `Phone 2 - *`.
///
/// An empty `kind` marks the slot as unused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedSlot {
    pub kind: String,
    pub value: String,
}

impl TypedSlot {
    pub fn is_used(&self) -> bool {
        !self.kind.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSlot {
    pub kind: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressSlot {
    pub fn is_used(&self) -> bool {
        !self.kind.is_empty()
    }
}

/// One row of a contact export. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub family_name: String,
    pub given_name: String,
    pub additional_name: String,
    pub name_prefix: String,
    pub name_suffix: String,
    pub phones: [TypedSlot; columns::PHONE_SLOTS],
    pub emails: [TypedSlot; columns::SINGLE_SLOT],
    pub addresses: [AddressSlot; columns::SINGLE_SLOT],
    pub websites: [TypedSlot; columns::SINGLE_SLOT],
    pub instant_messengers: [TypedSlot; columns::SINGLE_SLOT],
    pub organization: String,
    pub department: String,
    pub title: String,
    pub notes: String,
    pub group_membership: String,
}

impl ContactRecord {
    pub fn from_record(index: &ColumnIndex, record: &StringRecord) -> Self {
        let field = |column: &str| index.get(record, column).to_string();
        let typed = |group: &str, slot: usize| TypedSlot {
            kind: field(&slot_column(group, slot + 1, "Type")),
            value: field(&slot_column(group, slot + 1, "Value")),
        };
        let address = |slot: usize| {
            let part = |name: &str| field(&slot_column(columns::ADDRESS, slot + 1, name));
            AddressSlot {
                kind: part("Type"),
                street: part("Street"),
                city: part("City"),
                region: part("Region"),
                postal_code: part("Postal Code"),
                country: part("Country"),
            }
        };

        ContactRecord {
            family_name: field(columns::FAMILY_NAME),
            given_name: field(columns::GIVEN_NAME),
            additional_name: field(columns::ADDITIONAL_NAME),
            name_prefix: field(columns::NAME_PREFIX),
            name_suffix: field(columns::NAME_SUFFIX),
            phones: std::array::from_fn(|slot| typed(columns::PHONE, slot)),
            emails: std::array::from_fn(|slot| typed(columns::EMAIL, slot)),
            addresses: std::array::from_fn(address),
            websites: std::array::from_fn(|slot| typed(columns::WEBSITE, slot)),
            instant_messengers: std::array::from_fn(|slot| typed(columns::IM, slot)),
            organization: field(columns::ORGANIZATION_NAME),
            department: field(columns::ORGANIZATION_DEPARTMENT),
            title: field(columns::ORGANIZATION_TITLE),
            notes: field(columns::NOTES),
            group_membership: field(columns::GROUP_MEMBERSHIP),
        }
    }
}

/// Reads every contact row of `path`, preserving row order.
pub fn read_contacts(path: &Path, delimiter: u8) -> Result<Vec<ContactRecord>> {
    let file = File::open(path).map_err(|err| ConvertError::file_access(path, err))?;
    read_contacts_from(BufReader::new(file), delimiter)
}

/// Reads contact rows from any byte source.
///
/// A leading UTF-8 BOM is dropped and any other invalid UTF-8 is an error.
/// Input with no header row at all holds no contacts.
pub fn read_contacts_from<R: Read>(reader: R, delimiter: u8) -> Result<Vec<ContactRecord>> {
    let mut reader = io_utils::open_csv_reader(io_utils::utf8_reader(reader), delimiter);
    let headers = reader.byte_headers().map_err(ConvertError::parse)?.clone();
    if headers.is_empty() {
        debug!("Input has no header row");
        return Ok(Vec::new());
    }
    let index = ColumnIndex::resolve(&io_utils::decode_record(&headers)?)?;

    let mut contacts = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(ConvertError::parse)?;
        let record = io_utils::decode_record(&record)?;
        contacts.push(ContactRecord::from_record(&index, &record));
    }
    debug!("Parsed {} contact row(s)", contacts.len());
    Ok(contacts)
}
