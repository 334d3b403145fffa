use crate::error::ModelError;
use crate::{OPENAPI_FIELD, SWAGGER_FIELD};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

const SWAGGER_2: &str = "2.0";
const OPENAPI_303_RELEASES: [&str; 4] = ["3.0.0", "3.0.1", "3.0.2", "3.0.3"];
const OPENAPI_3_DRAFT_RELEASES: [&str; 3] = ["3.0.0-rc0", "3.0.0-rc1", "3.0.0-rc2"];

/// The document model family a raw document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    Swagger2,
    OpenApi3Draft,
    OpenApi303,
}

impl Display for SpecVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecVersion::Swagger2 => write!(f, "Swagger 2.0"),
            SpecVersion::OpenApi3Draft => write!(f, "OpenAPI 3.0 draft"),
            SpecVersion::OpenApi303 => write!(f, "OpenAPI 3.0.3"),
        }
    }
}

impl SpecVersion {
    /// Maps the value of a `swagger` field onto a model.
    pub fn from_swagger(version: &str) -> Result<Self, ModelError> {
        if version == SWAGGER_2 {
            Ok(SpecVersion::Swagger2)
        } else {
            Err(ModelError::unknown_version(version))
        }
    }

    /// Maps the value of an `openapi` field onto a model.
    ///
    /// Every 3.0 patch release shares the 3.0.3 grammar; the `-rcN` pre-releases use the
    /// draft grammar.
    pub fn from_openapi(version: &str) -> Result<Self, ModelError> {
        if OPENAPI_303_RELEASES.contains(&version) {
            Ok(SpecVersion::OpenApi303)
        } else if OPENAPI_3_DRAFT_RELEASES.contains(&version) {
            Ok(SpecVersion::OpenApi3Draft)
        } else {
            Err(ModelError::unknown_version(version))
        }
    }

    /// Picks the model for a parsed document by its declared version.
    ///
    /// # Arguments
    ///
    /// * `document` - The document as a generic JSON value. The `openapi` field is
    ///   consulted first, then `swagger`.
    ///
    /// # Returns
    ///
    /// * `Ok(SpecVersion)` - The model matching the declared version.
    /// * `Err(ModelError::UnknownVersion)` - The declared version matches no model.
    /// * `Err(ModelError::MissingVersion)` - Neither field is present.
    /// * `Err(ModelError::TypeMismatch)` - The version field is neither a string nor a number.
    pub fn detect(document: &Value) -> Result<Self, ModelError> {
        if let Some(version) = document.get(OPENAPI_FIELD) {
            return Self::from_openapi(&Self::version_str(OPENAPI_FIELD, version)?);
        }

        if let Some(version) = document.get(SWAGGER_FIELD) {
            return Self::from_swagger(&Self::version_str(SWAGGER_FIELD, version)?);
        }

        Err(ModelError::MissingVersion)
    }

    fn version_str<'a>(field: &str, version: &'a Value) -> Result<Cow<'a, str>, ModelError> {
        match version_text(version) {
            Some(version) => Ok(version),
            None => Err(ModelError::type_mismatch(
                field,
                format!("expected a version string, found {}", version),
            )),
        }
    }

    /// The root key that carries the version string for this model.
    pub fn version_field(&self) -> &'static str {
        match self {
            SpecVersion::Swagger2 => SWAGGER_FIELD,
            SpecVersion::OpenApi3Draft | SpecVersion::OpenApi303 => OPENAPI_FIELD,
        }
    }
}

/// Reads a version field. Unquoted YAML such as `swagger: 2.0` arrives as a number and is
/// read back in its written form.
fn version_text(version: &Value) -> Option<Cow<'_, str>> {
    match version {
        Value::String(version) => Some(Cow::Borrowed(version)),
        Value::Number(version) => Some(Cow::Owned(version.to_string())),
        _ => None,
    }
}

/// Deserializes a version field that may have been written as a bare number.
pub(crate) fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match version_text(&value) {
        Some(version) => Ok(version.into_owned()),
        None => Err(D::Error::custom(format!(
            "expected a version string, found {}",
            value
        ))),
    }
}

#[cfg(test)]
mod test {
    use crate::error::{ModelError, ModelErrorKind};
    use crate::types::version::SpecVersion;
    use serde_json::json;

    #[test]
    fn test_detect_swagger_2() {
        let version = SpecVersion::detect(&json!({"swagger": "2.0"})).unwrap();
        assert_eq!(version, SpecVersion::Swagger2);
        assert_eq!(version.version_field(), "swagger");
    }

    #[test]
    fn test_detect_openapi_303() {
        let version = SpecVersion::detect(&json!({"openapi": "3.0.3"})).unwrap();
        assert_eq!(version, SpecVersion::OpenApi303);
        assert_eq!(version.version_field(), "openapi");
    }

    #[test]
    fn test_detect_openapi_patch_releases() {
        for release in ["3.0.0", "3.0.1", "3.0.2"] {
            let version = SpecVersion::detect(&json!({ "openapi": release })).unwrap();
            assert_eq!(version, SpecVersion::OpenApi303);
        }
    }

    #[test]
    fn test_detect_draft() {
        let version = SpecVersion::detect(&json!({"openapi": "3.0.0-rc1"})).unwrap();
        assert_eq!(version, SpecVersion::OpenApi3Draft);
    }

    #[test]
    fn test_detect_unknown_versions() {
        for document in [
            json!({"openapi": "3.1.0"}),
            json!({"openapi": "2.0"}),
            json!({"swagger": "1.2"}),
            json!({"swagger": "3.0.3"}),
        ] {
            let error = SpecVersion::detect(&document).unwrap_err();
            assert!(matches!(error, ModelError::UnknownVersion(_)));
        }
    }

    #[test]
    fn test_detect_missing_version() {
        let error = SpecVersion::detect(&json!({"info": {}})).unwrap_err();
        assert!(matches!(error, ModelError::MissingVersion));
        assert_eq!(error.kind(), ModelErrorKind::UnknownVersion);
    }

    #[test]
    fn test_detect_non_string_version() {
        let error = SpecVersion::detect(&json!({"swagger": true})).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("swagger"));
    }

    #[test]
    fn test_detect_unquoted_swagger_version() {
        let version = SpecVersion::detect(&json!({"swagger": 2.0})).unwrap();
        assert_eq!(version, SpecVersion::Swagger2);

        let error = SpecVersion::detect(&json!({"swagger": 2})).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::UnknownVersion);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpecVersion::Swagger2.to_string(), "Swagger 2.0");
        assert_eq!(SpecVersion::OpenApi3Draft.to_string(), "OpenAPI 3.0 draft");
        assert_eq!(SpecVersion::OpenApi303.to_string(), "OpenAPI 3.0.3");
    }
}
