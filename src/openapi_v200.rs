//! Document tree for Swagger 2.0 (<https://swagger.io/specification/v2/>).

use crate::openapi_common::{
    AdditionalProperties, Extensions, OneOrMany, Paths, RefOr, Responses, deserialize_present,
};
use crate::types::version::deserialize_version;
use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root object of a Swagger 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swagger {
    /// Always `2.0`. An unquoted YAML `2.0` is read as the string `"2.0"`
    #[serde(deserialize_with = "deserialize_version")]
    pub swagger: String,
    /// Metadata about the API
    pub info: Info,
    /// Host, and optionally port, serving the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Base path of the API relative to the host, beginning with `/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Transfer protocols: `http`, `https`, `ws` or `wss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    /// MIME types the API can consume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    /// MIME types the API can produce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// Available paths and operations for the API
    pub paths: Paths<PathItem>,
    /// Data types produced and consumed by operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<IndexMap<String, RefOr<Schema>>>,
    /// Parameters shared across operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
    /// Responses shared across operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
    /// Security schemes available to the operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<IndexMap<String, SecurityScheme>>,
    /// Security schemes applied to the whole API, any one of which is sufficient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Tags with additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Additional external documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl Swagger {
    pub fn operation(&self, path: &str, method: &Method) -> Option<&Operation> {
        self.paths.get(path)?.operation(method)
    }

    /// Every operation in the document as `(path, method, operation)`, in document order.
    pub fn operations(&self) -> Vec<(&str, Method, &Operation)> {
        self.paths
            .iter()
            .flat_map(|(path, item)| {
                item.operations()
                    .into_iter()
                    .map(move |(method, operation)| (path.as_str(), method, operation))
            })
            .collect()
    }

    pub fn definition(&self, name: &str) -> Option<&RefOr<Schema>> {
        self.definitions.as_ref()?.get(name)
    }
}

/// Metadata about the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// The title of the application
    pub title: String,
    /// A short description of the application. GFM syntax may be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The Terms of Service for the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information for the exposed API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information for the exposed API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// The version of the application API, distinct from the grammar version
    pub version: String,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Contact information for the exposed API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// The identifying name of the contact person or organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URL pointing to the contact information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The email address of the contact person or organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// License information for the exposed API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// The license name used for the API
    pub name: String,
    /// A URL to the license used for the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Metadata for a tag used by operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The name of the tag
    pub name: String,
    /// A short description of the tag. GFM syntax may be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A reference to external documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    /// A short description of the target documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL of the target documentation
    pub url: String,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// The operations available on a single path. Swagger 2.0 has no TRACE operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// An external definition of this path item
    #[serde(rename = "$ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// A summary intended to apply to all operations in this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A description intended to apply to all operations in this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A GET operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// A PUT operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// A POST operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// A DELETE operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// An OPTIONS operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// A HEAD operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// A PATCH operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// Parameters shared by all operations on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl PathItem {
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match method.as_str() {
            "GET" => self.get.as_ref(),
            "PUT" => self.put.as_ref(),
            "POST" => self.post.as_ref(),
            "DELETE" => self.delete.as_ref(),
            "OPTIONS" => self.options.as_ref(),
            "HEAD" => self.head.as_ref(),
            "PATCH" => self.patch.as_ref(),
            _ => None,
        }
    }

    pub fn operations(&self) -> Vec<(Method, &Operation)> {
        [
            (Method::GET, &self.get),
            (Method::PUT, &self.put),
            (Method::POST, &self.post),
            (Method::DELETE, &self.delete),
            (Method::OPTIONS, &self.options),
            (Method::HEAD, &self.head),
            (Method::PATCH, &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, operation)| operation.as_ref().map(|operation| (method, operation)))
        .collect()
    }
}

/// A single API operation on a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tags for grouping the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// A short summary of what the operation does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Unique string identifying the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Overrides the document level `consumes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    /// Overrides the document level `produces`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// Parameters for the operation, overriding those of the path item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// Possible responses keyed by status code or `default`
    pub responses: Responses<Response>,
    /// Transfer protocols, overriding the document level `schemes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    /// Whether the operation is deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Security schemes for this operation, overriding the document level `security`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A single operation parameter.
///
/// A `body` parameter describes its payload with `schema`. Every other location describes
/// a primitive or array value inline with `type`, `format`, `items` and the bound fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The name of the parameter
    pub name: String,
    /// `query`, `header`, `path`, `formData` or `body`
    #[serde(rename = "in")]
    pub location: String,
    /// A brief description of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter is mandatory. Always true for `path` parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// The payload of a `body` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// The type of a non-body parameter
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Extended format of the type, e.g. `int64` or `date-time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Whether an empty value may be sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    /// Type of the array items when `type` is `array`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// `csv`, `ssv`, `tsv`, `pipes` or `multi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,
    /// Value assumed when none is sent
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Inclusive upper bound unless `exclusiveMaximum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `maximum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Inclusive lower bound unless `exclusiveMinimum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether `minimum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Maximum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array items must be unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// The values allowed
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// The value must be a multiple of this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl Items {
    /// The array format under whichever key the document used.
    pub fn array_format(&self) -> Option<&str> {
        self.collection_format
            .as_deref()
            .or(self.legacy_collection_format.as_deref())
    }
}

impl Response {
    /// The examples for `mime_type`, under whichever key the document used.
    pub fn example(&self, mime_type: &str) -> Option<&Value> {
        [&self.examples, &self.legacy_examples]
            .into_iter()
            .flatten()
            .find_map(|examples| examples.get(mime_type))
    }
}

impl Parameter {
    const BODY: &'static str = "body";

    pub fn is_body(&self) -> bool {
        self.location == Self::BODY
    }
}

/// Type of the items of an array parameter or header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Items {
    /// The internal type of the array
    #[serde(rename = "type")]
    pub item_type: String,
    /// Extended format of the type, e.g. `int64` or `date-time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Whether an empty value may be sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    /// Type of the array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Items>>,
    /// Array format: `csv`, `ssv`, `tsv`, `pipes` or `multi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,
    /// Array format written under the legacy `collection_format` key
    #[serde(rename = "collection_format")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_collection_format: Option<String>,
    /// Value assumed when none is sent
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Inclusive upper bound unless `exclusiveMaximum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `maximum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Inclusive lower bound unless `exclusiveMinimum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether `minimum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Maximum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array items must be unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// The values allowed
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// The value must be a multiple of this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A header sent with a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// A short description of the header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The type of the header
    #[serde(rename = "type")]
    pub header_type: String,
    /// Extended format of the type, e.g. `int64` or `date-time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Type of the array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// Array format: `csv`, `ssv`, `tsv`, `pipes` or `multi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,
    /// Value assumed when none is sent
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Inclusive upper bound unless `exclusiveMaximum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `maximum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Inclusive lower bound unless `exclusiveMinimum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether `minimum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Maximum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array items must be unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// The values allowed
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// The value must be a multiple of this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A single response from an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// A short description of the response
    pub description: String,
    /// The structure of the response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// Headers sent with the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    /// Example payloads keyed by MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Value>>,
    /// Example payloads written under the legacy `example` key
    #[serde(rename = "example")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_examples: Option<IndexMap<String, Value>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A data type definition, based on JSON Schema Draft 4.
///
/// `discriminator` names the property that tells subtypes apart. `items` may be one schema
/// or a list of schemas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Extended format of `type`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// A short title for the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A description of the schema. GFM syntax may be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value assumed when none is sent
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// The value must be a multiple of this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Inclusive upper bound unless `exclusiveMaximum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `maximum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Inclusive lower bound unless `exclusiveMinimum` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether `minimum` is exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Maximum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array items must be unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Maximum number of properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum number of properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Properties that must be present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// The values allowed
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// The JSON type of the value
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Schema of the array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<OneOrMany<RefOr<Schema>>>,
    /// Schemas the value must all match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<RefOr<Schema>>>,
    /// Schemas of the object properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RefOr<Schema>>>,
    /// Whether, or how, properties outside `properties` are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties<Schema>>,
    /// The property that tells subtypes apart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Whether the property is only sent in responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// XML representation hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
    /// Additional external documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// An example instance of the schema
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Hints for the XML representation of a schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Xml {
    /// Replaces the element or attribute name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URI of the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The prefix used for the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether the property is an attribute rather than an element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    /// Whether arrays are wrapped in an element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A security scheme: `basic`, `apiKey` or `oauth2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// The type of the scheme
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// A short description of the scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The name of the header or query parameter holding an API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The location of the API key: `query` or `header`
    #[serde(rename = "in")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `implicit`, `password`, `application` or `accessCode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    /// The authorization URL of an OAuth2 flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// The token URL of an OAuth2 flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Available OAuth2 scopes with a short description of each
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<IndexMap<String, String>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}
