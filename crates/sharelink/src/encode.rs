//! Query string rendering for share links.

use libs::percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sharelink_model::{NetworkTemplate, ShareRequest};

/// Characters left untouched when encoding a single URI component. Matches
/// what browsers keep unescaped in `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Joins the non-empty request fields into `name=value` pairs in the order
/// the template declares them.
pub fn query(template: &NetworkTemplate, request: &ShareRequest) -> String {
    template
        .params
        .iter()
        .filter_map(|(name, field)| {
            request
                .field(*field)
                .map(|value| format!("{}={}", name, encode_component(value)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn render(template: &NetworkTemplate, request: &ShareRequest) -> String {
    format!("{}{}", template.domain, query(template, request))
}
