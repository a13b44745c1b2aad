//! The subset of the vCard 3.0 object model a contact export maps onto.

/// vCard version written in the `VERSION` property.
pub const VERSION: &str = "3.0";

/// Structured `N` value: family;given;additional;prefix;suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub additional: String,
    pub prefix: String,
    pub suffix: String,
}

/// Structured `ADR` value. The post-office box and extended address
/// components are always written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// A value carrying a `TYPE` parameter, e.g. `TEL;TYPE=Mobile:555-1234`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed<T> {
    pub kind: String,
    pub value: T,
}

impl<T> Typed<T> {
    pub fn new(kind: impl Into<String>, value: T) -> Self {
        Typed {
            kind: kind.into(),
            value,
        }
    }
}

/// A single contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    pub name: StructuredName,
    pub formatted_name: String,
    /// Organization name followed by optional organizational units.
    pub organization: Vec<String>,
    pub title: String,
    pub note: String,
    pub phones: Vec<Typed<String>>,
    pub emails: Vec<Typed<String>>,
    pub addresses: Vec<Typed<Address>>,
    pub urls: Vec<Typed<String>>,
    pub impps: Vec<Typed<String>>,
    pub categories: Vec<String>,
}
