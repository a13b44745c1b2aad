//! vCard 3.0 model and serialization.
//!
//! Only the properties a contact export produces are modelled: `N`, `FN`,
//! `ORG`, `TITLE`, `NOTE`, typed `TEL`/`EMAIL`/`ADR`/`URL`/`IMPP`, and
//! `CATEGORIES`.
//!
//! - Line folding at 75 octets on UTF-8 boundaries
//! - Text escaping of `\`, newline, `,` and `;`
//! - Fixed property order for deterministic output

mod escape;
mod fold;
mod model;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use model::{Address, StructuredName, Typed, VCard, VERSION};
pub use serializer::serialize_single;
