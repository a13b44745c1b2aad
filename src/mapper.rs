//! Maps a contact row onto a vCard.
//!
//! Numbered slots are read in order and the first slot whose type is empty
//! ends the list: later slots are never looked at, even when filled in.

use crate::{
    contact::{AddressSlot, ContactRecord, TypedSlot},
    vcard::{Address, StructuredName, Typed, VCard},
};

pub fn map_contact(contact: &ContactRecord) -> VCard {
    VCard {
        name: StructuredName {
            family: contact.family_name.clone(),
            given: contact.given_name.clone(),
            additional: contact.additional_name.clone(),
            prefix: contact.name_prefix.clone(),
            suffix: contact.name_suffix.clone(),
        },
        formatted_name: formatted_name(contact),
        organization: organization(contact),
        title: contact.title.clone(),
        note: contact.notes.clone(),
        phones: typed_values(&contact.phones),
        emails: typed_values(&contact.emails),
        addresses: addresses(&contact.addresses),
        urls: typed_values(&contact.websites),
        impps: typed_values(&contact.instant_messengers),
        categories: vec![contact.group_membership.clone()],
    }
}

/// Prefix, given and family name joined by single spaces.
///
/// Empty parts are kept, so a missing prefix yields a leading space.
fn formatted_name(contact: &ContactRecord) -> String {
    [
        contact.name_prefix.as_str(),
        contact.given_name.as_str(),
        contact.family_name.as_str(),
    ]
    .join(" ")
}

fn organization(contact: &ContactRecord) -> Vec<String> {
    let mut units = vec![contact.organization.clone()];
    if !contact.department.is_empty() {
        units.push(contact.department.clone());
    }
    units
}

fn typed_values(slots: &[TypedSlot]) -> Vec<Typed<String>> {
    slots
        .iter()
        .take_while(|slot| slot.is_used())
        .map(|slot| Typed::new(slot.kind.clone(), slot.value.clone()))
        .collect()
}

fn addresses(slots: &[AddressSlot]) -> Vec<Typed<Address>> {
    slots
        .iter()
        .take_while(|slot| slot.is_used())
        .map(|slot| {
            Typed::new(
                slot.kind.clone(),
                Address {
                    street: slot.street.clone(),
                    city: slot.city.clone(),
                    region: slot.region.clone(),
                    postal_code: slot.postal_code.clone(),
                    country: slot.country.clone(),
                },
            )
        })
        .collect()
}
