pub mod codec;
pub mod document;
pub mod error;
pub mod openapi_common;
pub mod openapi_v200;
pub mod openapi_v303;
pub mod openapi_v3_draft;
pub mod types;

pub use crate::codec::{Codec, CodecBuilder, Format};
pub use crate::document::{AnyDocument, Document};
pub use crate::error::{ModelError, ModelErrorKind};
pub use crate::openapi_common::{
    AdditionalProperties, Extensions, OneOrMany, Paths, RefOr, Reference, Responses,
};
pub use crate::types::json_path::JsonPath;
pub use crate::types::version::SpecVersion;

use serde::Serialize;

const OPENAPI_FIELD: &str = "openapi";
const SWAGGER_FIELD: &str = "swagger";
const REF_FIELD: &str = "$ref";
const COMPONENTS_FIELD: &str = "components";
const DEFINITIONS_FIELD: &str = "definitions";
const EXTENSION_PREFIX: &str = "x-";
const PATH_SEPARATOR: &str = "/";
const FRAGMENT_SEPARATOR: &str = "#";
const TILDE: &str = "~";
const ENCODED_SLASH: &str = "~1";
const ENCODED_TILDE: &str = "~0";

/// Decodes a JSON or YAML document into the model `D`.
///
/// The wire format is sniffed from the input. Use a [`Codec`] to pin the format.
///
/// # Arguments
///
/// * `input` - The raw document text.
///
/// # Returns
///
/// * `Ok(D)` - The decoded document tree.
/// * `Err(ModelError::MalformedInput)` - The text is not well-formed JSON or YAML.
/// * `Err(ModelError::TypeMismatch)` - A known key holds a value of the wrong shape.
pub fn decode<D>(input: impl AsRef<[u8]>) -> Result<D, ModelError>
where
    D: Document,
{
    Codec::new().decode(input.as_ref())
}

/// Detects the declared version of a document and decodes it into the matching model.
pub fn decode_any(input: impl AsRef<[u8]>) -> Result<AnyDocument, ModelError> {
    Codec::new().decode_any(input.as_ref())
}

/// Encodes a document tree as compact JSON, omitting every absent field.
pub fn encode<T>(document: &T) -> Result<Vec<u8>, ModelError>
where
    T: Serialize,
{
    Codec::new().encode(document)
}

#[cfg(test)]
mod test {
    use crate::openapi_v303::OpenApi;
    use crate::{decode, decode_any, encode, AnyDocument, ModelErrorKind, SpecVersion};
    use serde_json::{json, Value};

    const MINIMAL_303: &str = r#"{"openapi":"3.0.3","info":{"title":"T","version":"1"},"paths":{"/x":{"get":{"responses":{"200":{"description":"ok"}}}}}}"#;

    #[test]
    fn test_decode_minimal_document() {
        let document: OpenApi = decode(MINIMAL_303).unwrap();
        let get = document.paths["/x"].get.as_ref().unwrap();
        let response = get.responses["200"].item().unwrap();
        assert_eq!(response.description, "ok");
    }

    #[test]
    fn test_reencode_minimal_document() {
        let document: OpenApi = decode(MINIMAL_303).unwrap();
        let encoded = encode(&document).unwrap();

        let original: Value = serde_json::from_str(MINIMAL_303).unwrap();
        let reencoded: Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(original, reencoded);
    }

    #[test]
    fn test_decode_any_dispatches_on_version() {
        let document = decode_any(MINIMAL_303).unwrap();
        assert_eq!(document.version(), SpecVersion::OpenApi303);
        assert!(matches!(document, AnyDocument::OpenApi303(_)));

        let swagger = json!({
            "swagger": "2.0",
            "info": {"title": "T", "version": "1"},
            "paths": {}
        });
        let document = decode_any(swagger.to_string()).unwrap();
        assert_eq!(document.version(), SpecVersion::Swagger2);
    }

    #[test]
    fn test_decode_any_unknown_version() {
        let result = decode_any(r#"{"openapi":"4.0.0","info":{"title":"T","version":"1"}}"#);
        assert_eq!(result.unwrap_err().kind(), ModelErrorKind::UnknownVersion);
    }

    #[test]
    fn test_decode_malformed_json() {
        let result = decode::<OpenApi>(r#"{"openapi": "3.0.3", "#);
        assert_eq!(result.unwrap_err().kind(), ModelErrorKind::MalformedInput);
    }
}
