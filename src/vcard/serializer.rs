//! vCard 3.0 serialization.

use itertools::Itertools;

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use super::model::{Address, StructuredName, Typed, VCard, VERSION};

/// Serializes one card.
///
/// Properties are always written in the same order, so identical cards give
/// byte-identical output. Lines end in CRLF and are folded at 75 octets.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();

    push_line(&mut output, "BEGIN:VCARD");
    push_line(&mut output, &format!("VERSION:{VERSION}"));

    push_property(&mut output, "N", None, &structured_name(&card.name));
    push_property(&mut output, "FN", None, &escape_text(&card.formatted_name));
    push_property(&mut output, "ORG", None, &join_components(&card.organization, ";"));
    push_property(&mut output, "TITLE", None, &escape_text(&card.title));
    push_property(&mut output, "NOTE", None, &escape_text(&card.note));

    push_typed_text(&mut output, "TEL", &card.phones);
    push_typed_text(&mut output, "EMAIL", &card.emails);
    for address in &card.addresses {
        push_property(
            &mut output,
            "ADR",
            Some(address.kind.as_str()),
            &structured_address(&address.value),
        );
    }
    push_typed_text(&mut output, "URL", &card.urls);
    push_typed_text(&mut output, "IMPP", &card.impps);

    push_property(&mut output, "CATEGORIES", None, &join_components(&card.categories, ","));

    push_line(&mut output, "END:VCARD");
    output
}

fn push_typed_text(output: &mut String, name: &str, entries: &[Typed<String>]) {
    for entry in entries {
        push_property(output, name, Some(entry.kind.as_str()), &escape_text(&entry.value));
    }
}

fn push_property(output: &mut String, name: &str, kind: Option<&str>, value: &str) {
    let mut line = String::from(name);

    if let Some(kind) = kind {
        let (escaped, needs_quotes) = escape_param_value(kind);
        line.push_str(";TYPE=");
        if needs_quotes {
            line.push('"');
            line.push_str(&escaped);
            line.push('"');
        } else {
            line.push_str(&escaped);
        }
    }

    line.push(':');
    line.push_str(value);
    push_line(output, &fold_line(&line));
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push_str("\r\n");
}

fn join_components(values: &[String], separator: &str) -> String {
    values.iter().map(|value| escape_text(value)).join(separator)
}

fn structured_name(name: &StructuredName) -> String {
    [
        &name.family,
        &name.given,
        &name.additional,
        &name.prefix,
        &name.suffix,
    ]
    .iter()
    .map(|part| escape_text(part))
    .join(";")
}

fn structured_address(address: &Address) -> String {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    let parts: [&str; 7] = [
        "",
        "",
        &address.street,
        &address.city,
        &address.region,
        &address.postal_code,
        &address.country,
    ];
    parts.iter().map(|part| escape_text(part)).join(";")
}
