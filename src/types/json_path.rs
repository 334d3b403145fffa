use crate::{ENCODED_SLASH, ENCODED_TILDE, FRAGMENT_SEPARATOR, PATH_SEPARATOR, TILDE};
use percent_encoding::percent_decode_str;

/// A JSON pointer (RFC 6901) held as unescaped segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPath(pub Vec<String>);

impl JsonPath {
    pub fn new() -> Self {
        JsonPath(Vec::new())
    }

    pub fn add(&mut self, segment: impl AsRef<str>) -> &mut Self {
        self.0.push(segment.as_ref().to_owned());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Parses a pointer such as `/components/schemas/Pet` or the percent-encoded fragment
    /// of a `$ref` (without the leading `#`).
    pub fn parse(pointer: &str) -> Self {
        let decoded = percent_decode_str(pointer).decode_utf8_lossy();
        if decoded.is_empty() {
            return JsonPath::new();
        }

        let pointer = decoded.strip_prefix(PATH_SEPARATOR).unwrap_or(&decoded);
        JsonPath(pointer.split(PATH_SEPARATOR).map(Self::unescape).collect())
    }

    /// Joins the escaped segments with `/`, without a leading separator.
    pub fn format_path(&self) -> String {
        self.0
            .iter()
            .map(|segment| Self::escape(segment))
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// Formats the path as a same-document `$ref` target, e.g. `#/definitions/Pet`.
    pub fn to_fragment(&self) -> String {
        format!("{}{}{}", FRAGMENT_SEPARATOR, PATH_SEPARATOR, self.format_path())
    }

    fn escape(segment: &str) -> String {
        if segment.contains(TILDE) || segment.contains(PATH_SEPARATOR) {
            segment
                .replace(TILDE, ENCODED_TILDE)
                .replace(PATH_SEPARATOR, ENCODED_SLASH)
        } else {
            segment.to_owned()
        }
    }

    fn unescape(segment: &str) -> String {
        segment
            .replace(ENCODED_SLASH, PATH_SEPARATOR)
            .replace(ENCODED_TILDE, TILDE)
    }
}

#[cfg(test)]
mod test {
    use crate::types::json_path::JsonPath;
    use crate::{ENCODED_SLASH, ENCODED_TILDE};

    #[test]
    fn test_new_json_path() {
        let path = JsonPath::new();
        assert!(path.segments().is_empty());
        assert_eq!(path.format_path(), "");
    }

    #[test]
    fn test_add_multiple_segments() {
        let mut path = JsonPath::new();
        path.add("components").add("schemas").add("User");
        assert_eq!(path.segments(), ["components", "schemas", "User"]);
        assert_eq!(path.format_path(), "components/schemas/User");
        assert_eq!(path.to_fragment(), "#/components/schemas/User");
    }

    #[test]
    fn test_add_segment_with_tilde_and_slash() {
        let mut path = JsonPath::new();
        path.add("user~/profile");

        // Segments stay raw, only the formatted pointer is escaped.
        assert_eq!(path.segments()[0], "user~/profile");
        let expected = "user".to_string() + ENCODED_TILDE + ENCODED_SLASH + "profile";
        assert_eq!(path.format_path(), expected);
    }

    #[test]
    fn test_format_path_with_path_template() {
        let mut path = JsonPath::new();
        path.add("paths").add("/users/{id}").add("get");
        assert_eq!(path.format_path(), "paths/~1users~1{id}/get");
    }

    #[test]
    fn test_parse_pointer() {
        let path = JsonPath::parse("/components/schemas/Error");
        assert_eq!(path.segments(), ["components", "schemas", "Error"]);
    }

    #[test]
    fn test_parse_escaped_segments() {
        let path = JsonPath::parse("/paths/~1pets~1{id}/a~0b");
        assert_eq!(path.segments(), ["paths", "/pets/{id}", "a~b"]);
    }

    #[test]
    fn test_parse_unescapes_slash_before_tilde() {
        // "~01" is an escaped "~" followed by "1", never a "/".
        let path = JsonPath::parse("/a~01");
        assert_eq!(path.segments(), ["a~1"]);
    }

    #[test]
    fn test_parse_percent_encoded_fragment() {
        let path = JsonPath::parse("/components/schemas/Pet%20Owner");
        assert_eq!(path.segments(), ["components", "schemas", "Pet Owner"]);
    }

    #[test]
    fn test_parse_empty_pointer() {
        assert!(JsonPath::parse("").segments().is_empty());
        assert_eq!(JsonPath::parse("/").segments(), [""]);
    }

    #[test]
    fn test_parse_then_format_is_stable() {
        let pointer = "definitions/a~1b~0c/properties";
        assert_eq!(JsonPath::parse(pointer).format_path(), pointer);
    }
}
