//! Location tracking for type mismatches.
//!
//! `serde_path_to_error` records the path of a failure only while the deserializer it wraps
//! is in use. Nodes that buffer their input into a `serde_json::Value` before choosing a
//! shape (`$ref` or inline, bool or schema, one or many) start a fresh deserializer, so
//! they forward the inner location inside the error message instead. The top-level
//! decoder splits it back out and joins it onto the outer location.

use serde::de::{DeserializeOwned, Error as DeError};
use serde_json::Value;

const ROOT: &str = ".";
const MARKER: char = '\u{1f}';

fn is_root(path: &str) -> bool {
    path.is_empty() || path == ROOT
}

/// Joins a location and a location relative to it, in the `a.b[0].c` notation.
pub(crate) fn join(parent: &str, child: &str) -> String {
    match (is_root(parent), is_root(child)) {
        (true, true) => ROOT.to_owned(),
        (true, false) => child.to_owned(),
        (false, true) => parent.to_owned(),
        (false, false) if child.starts_with('[') => format!("{parent}{child}"),
        (false, false) => format!("{parent}.{child}"),
    }
}

fn wrap(path: &str, message: &str) -> String {
    format!("{MARKER}{path}{MARKER}{message}")
}

/// Separates a forwarded location from its message. Plain messages are located at the root.
pub(crate) fn split(message: &str) -> (&str, &str) {
    match message
        .strip_prefix(MARKER)
        .and_then(|rest| rest.split_once(MARKER))
    {
        Some((path, message)) => (path, message),
        None => (ROOT, message),
    }
}

/// Resolves a tracked failure into its full location and the underlying message.
pub(crate) fn locate(error: serde_path_to_error::Error<serde_json::Error>) -> (String, String) {
    let outer = error.path().to_string();
    let inner = error.into_inner().to_string();
    let (nested, message) = split(&inner);
    (join(&outer, nested), message.to_owned())
}

/// Deserializes a buffered node, forwarding the location of any failure to the caller.
pub(crate) fn deserialize_nested<T, E>(value: Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeError,
{
    serde_path_to_error::deserialize(value).map_err(|error| {
        let (path, message) = locate(error);
        E::custom(wrap(&path, &message))
    })
}
