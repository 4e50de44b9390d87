//! Typed endpoint definitions for the Open Cloud APIs.
//!
//! One module per endpoint, grouped by service. Each endpoint is a parameter
//! struct implementing [`cairn_common::ApiRequest`]; identifying fields
//! (universe, store name, scope, key) are carried explicitly and assembled
//! into the resource path, everything else serializes into the query string.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

pub mod datastores;
pub mod messaging;
pub mod ordered;

/// Characters percent-encoded inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\');

/// Percent-encode a value for use as one path segment.
pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("plain-id_01"), "plain-id_01");
        assert_eq!(path_segment("a/b c%d"), "a%2Fb%20c%25d");
    }
}
