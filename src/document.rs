use crate::codec::Codec;
use crate::error::ModelError;
use crate::types::version::SpecVersion;
use crate::{openapi_v200, openapi_v303, openapi_v3_draft};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Root object of one of the document trees.
pub trait Document: Serialize + DeserializeOwned {
    /// The model family this root belongs to.
    const MODEL: SpecVersion;

    /// The version string the document declares in its `openapi` or `swagger` field.
    fn declared_version(&self) -> &str;

    fn title(&self) -> &str;
}

impl Document for openapi_v200::Swagger {
    const MODEL: SpecVersion = SpecVersion::Swagger2;

    fn declared_version(&self) -> &str {
        &self.swagger
    }

    fn title(&self) -> &str {
        &self.info.title
    }
}

impl Document for openapi_v3_draft::OpenApi {
    const MODEL: SpecVersion = SpecVersion::OpenApi3Draft;

    fn declared_version(&self) -> &str {
        &self.openapi
    }

    fn title(&self) -> &str {
        &self.info.title
    }
}

impl Document for openapi_v303::OpenApi {
    const MODEL: SpecVersion = SpecVersion::OpenApi303;

    fn declared_version(&self) -> &str {
        &self.openapi
    }

    fn title(&self) -> &str {
        &self.info.title
    }
}

/// A decoded document of any supported version.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDocument {
    Swagger2(Box<openapi_v200::Swagger>),
    OpenApi3Draft(Box<openapi_v3_draft::OpenApi>),
    OpenApi303(Box<openapi_v303::OpenApi>),
}

impl AnyDocument {
    pub(crate) fn from_value(version: SpecVersion, value: Value) -> Result<Self, ModelError> {
        let document = match version {
            SpecVersion::Swagger2 => AnyDocument::Swagger2(Codec::from_value(value)?),
            SpecVersion::OpenApi3Draft => AnyDocument::OpenApi3Draft(Codec::from_value(value)?),
            SpecVersion::OpenApi303 => AnyDocument::OpenApi303(Codec::from_value(value)?),
        };
        Ok(document)
    }

    pub fn version(&self) -> SpecVersion {
        match self {
            AnyDocument::Swagger2(_) => SpecVersion::Swagger2,
            AnyDocument::OpenApi3Draft(_) => SpecVersion::OpenApi3Draft,
            AnyDocument::OpenApi303(_) => SpecVersion::OpenApi303,
        }
    }

    pub fn declared_version(&self) -> &str {
        match self {
            AnyDocument::Swagger2(document) => document.declared_version(),
            AnyDocument::OpenApi3Draft(document) => document.declared_version(),
            AnyDocument::OpenApi303(document) => document.declared_version(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            AnyDocument::Swagger2(document) => document.title(),
            AnyDocument::OpenApi3Draft(document) => document.title(),
            AnyDocument::OpenApi303(document) => document.title(),
        }
    }

    pub fn as_swagger2(&self) -> Option<&openapi_v200::Swagger> {
        match self {
            AnyDocument::Swagger2(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_openapi3_draft(&self) -> Option<&openapi_v3_draft::OpenApi> {
        match self {
            AnyDocument::OpenApi3Draft(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_openapi303(&self) -> Option<&openapi_v303::OpenApi> {
        match self {
            AnyDocument::OpenApi303(document) => Some(document),
            _ => None,
        }
    }
}

impl Serialize for AnyDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AnyDocument::Swagger2(document) => document.serialize(serializer),
            AnyDocument::OpenApi3Draft(document) => document.serialize(serializer),
            AnyDocument::OpenApi303(document) => document.serialize(serializer),
        }
    }
}

impl From<openapi_v200::Swagger> for AnyDocument {
    fn from(document: openapi_v200::Swagger) -> Self {
        AnyDocument::Swagger2(Box::new(document))
    }
}

impl From<openapi_v3_draft::OpenApi> for AnyDocument {
    fn from(document: openapi_v3_draft::OpenApi) -> Self {
        AnyDocument::OpenApi3Draft(Box::new(document))
    }
}

impl From<openapi_v303::OpenApi> for AnyDocument {
    fn from(document: openapi_v303::OpenApi) -> Self {
        AnyDocument::OpenApi303(Box::new(document))
    }
}

#[cfg(test)]
mod test {
    use crate::codec::Codec;
    use crate::document::{AnyDocument, Document};
    use crate::openapi_v303::OpenApi;
    use crate::types::version::SpecVersion;
    use serde_json::{json, Value};

    #[test]
    fn test_decode_any_fixtures() {
        let codec = Codec::new();

        let document = codec.decode_any_file("test/petstore-v200.yaml").unwrap();
        assert_eq!(document.version(), SpecVersion::Swagger2);
        assert_eq!(document.declared_version(), "2.0");
        assert!(document.as_swagger2().is_some());
        assert!(document.as_openapi303().is_none());

        let document = codec.decode_any_file("test/petstore-v303.json").unwrap();
        assert_eq!(document.version(), SpecVersion::OpenApi303);
        assert_eq!(document.title(), "Swagger Petstore");

        let document = codec.decode_any_file("test/petstore-v3-draft.json").unwrap();
        assert_eq!(document.version(), SpecVersion::OpenApi3Draft);
        assert_eq!(document.declared_version(), "3.0.0-rc0");
        assert!(document.as_openapi3_draft().is_some());
    }

    #[test]
    fn test_any_document_encodes_inner_tree() {
        let wire = json!({
            "openapi": "3.0.1",
            "info": {"title": "T", "version": "1"},
            "paths": {}
        });
        let document = crate::decode_any(wire.to_string()).unwrap();
        assert_eq!(document.version(), SpecVersion::OpenApi303);
        assert_eq!(document.declared_version(), "3.0.1");

        let encoded: Value = serde_json::from_slice(&crate::encode(&document).unwrap()).unwrap();
        assert_eq!(encoded, wire);
    }

    #[test]
    fn test_from_root() {
        let root: OpenApi = crate::decode(r#"{"openapi":"3.0.3","info":{"title":"T","version":"1"},"paths":{}}"#).unwrap();
        assert_eq!(OpenApi::MODEL, SpecVersion::OpenApi303);

        let document = AnyDocument::from(root.clone());
        assert_eq!(document.as_openapi303(), Some(&root));
    }
}
