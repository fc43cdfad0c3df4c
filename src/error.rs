//! Module defining the errors which are exposed to the users of the crate

use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error rate outside of `[0, 1]`
    #[error("invalid error rate {0}: expected a value in [0, 1]")]
    InvalidErrorRate(f64),

    /// Malformed XML document
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute list on an XML element
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// Well-formed XML lacking an attribute the record layout requires
    #[error("element <{element}> has no `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An `Item` nested in another `Item`, or a `property` outside of any `Item`
    #[error("element <{element}> is not allowed {context}")]
    MisplacedElement {
        element: &'static str,
        context: &'static str,
    },

    /// A named field is absent from a property bag (strict mapping only)
    #[error("record has no `{0}` field")]
    MissingField(&'static str),

    /// A field is present but does not hold a base-10 integer (strict mapping only)
    #[error("field `{field}` holds malformed number {value:?}: {source}")]
    MalformedNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub(crate) fn malformed_number(
    field: &'static str,
    value: impl Into<String>,
    source: ParseIntError,
) -> Error {
    Error::MalformedNumber {
        field,
        value: value.into(),
        source,
    }
}
