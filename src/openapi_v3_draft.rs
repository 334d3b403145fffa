//! Document tree for the OpenAPI 3.0 pre-release grammar (`3.0.0-rcN`).
//!
//! The draft differs from 3.0.3 in a few shapes: `security` is a single requirement object
//! rather than a list, parameter `examples` is a list, schema `items` may be a list, and
//! callbacks carry no structure beyond their extensions.

use crate::openapi_common::{
    AdditionalProperties, Extensions, OneOrMany, Paths, RefOr, Responses, deserialize_present,
};
use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root object of an OpenAPI 3.0 draft document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi {
    /// The semantic version of the grammar the document uses
    pub openapi: String,
    /// Metadata about the API
    pub info: Info,
    /// Connectivity information for the target servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Available paths and operations for the API
    pub paths: Paths<PathItem>,
    /// Reusable objects for different aspects of the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    // FIXME: a single requirement object here, where 3.0.3 and Swagger 2.0 hold a list.
    // Confirm the shape against the 3.0.0-rc grammar before changing it.
    /// Security requirement applied across the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirement>,
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

impl OpenApi {
    pub fn operation(&self, path: &str, method: &Method) -> Option<&Operation> {
        self.paths.get(path)?.operation(method)
    }

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
}

/// Metadata about the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// The title of the API
    pub title: String,
    /// A short description of the API. CommonMark syntax may be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A URL to the Terms of Service for the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information for the exposed API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information for the exposed API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// The version of the API document, distinct from the grammar version
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

/// A server hosting the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// URL to the target host, possibly relative and possibly holding `{variables}`
    pub url: String,
    /// Describes the host designated by the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Values substituted into the URL template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, ServerVariable>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A variable for server URL template substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// The values the variable is limited to
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// The value used when no other is supplied
    pub default: String,
    /// A description of the variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// The operations available on a single path
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
    /// A TRACE operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    /// Alternative servers for all operations in this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Alternative servers written under the legacy `server` key
    #[serde(rename = "server")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_servers: Option<Vec<Server>>,
    /// Parameters shared by all operations on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl PathItem {
    pub fn server_overrides(&self) -> Option<&[Server]> {
        self.servers
            .as_deref()
            .or(self.legacy_servers.as_deref())
    }

    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match method.as_str() {
            "GET" => self.get.as_ref(),
            "PUT" => self.put.as_ref(),
            "POST" => self.post.as_ref(),
            "DELETE" => self.delete.as_ref(),
            "OPTIONS" => self.options.as_ref(),
            "HEAD" => self.head.as_ref(),
            "PATCH" => self.patch.as_ref(),
            "TRACE" => self.trace.as_ref(),
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
            (Method::TRACE, &self.trace),
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
    /// Tags for logical grouping of operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// A short summary of what the operation does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation for this operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Unique string used to identify the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameters applicable for this operation, overriding those of the path item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// The request body applicable for this operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<RequestBody>>,
    /// The possible responses, keyed by status code or `default`
    pub responses: Responses<Response>,
    /// Out-of-band callbacks related to the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, RefOr<Callback>>>,
    /// Declares this operation to be deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Single requirement object, see [`OpenApi::security`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirement>,
    /// Alternative servers for this operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Additional external documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    /// A description of the target documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL for the target documentation
    pub url: String,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Metadata for a single tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The name of the tag
    pub name: String,
    /// A short description for the tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation for this tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A single operation parameter, unique by name and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// The name of the parameter
    pub name: String,
    /// The location of the parameter: `query`, `header`, `path` or `cookie`
    #[serde(rename = "in")]
    pub location: String,
    /// A brief description of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter is mandatory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Declares this parameter to be deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Whether an empty query value may be sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    /// How the parameter value is serialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Whether array and object values generate separate parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// Whether reserved characters are sent without percent-encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
    /// The schema defining the type used for the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// Example of the parameter's potential value
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// A list in the draft grammar, a named map from 3.0.0 on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<RefOr<Example>>>,
    /// Representation of the parameter for complex values, holding a single entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A single request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// A brief description of the request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The content of the request body, keyed by media type or media type range
    pub content: IndexMap<String, MediaType>,
    /// Determines if the request body is required in the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Schema and examples for one media type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    /// The schema defining the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    /// Example of the media type
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Examples of the media type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    /// Encoding of individual properties, for multipart and form bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<IndexMap<String, Encoding>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Encoding applied to a single schema property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    /// The Content-Type for the property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Additional headers for multipart bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    /// How the property value is serialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Whether array and object values generate separate parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// Whether reserved characters are sent without percent-encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// An example value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Short description for the example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Long description for the example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embedded literal example
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// A URL that points to the literal example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A header, shaped like a parameter without `name` and `in`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Definition of input and output data types
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// A title for the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The value must be a multiple of this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Upper bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether the upper bound itself is excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Lower bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Whether the lower bound itself is excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// ECMA 262 regular expression the string must match
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
    /// Maximum number of object properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum number of object properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Property names that must be present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// The values the instance is limited to
    #[serde(rename = "enum")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// The value type: `string`, `number`, `integer`, `boolean`, `array` or `object`
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// The instance must match all of these schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<RefOr<Schema>>>,
    /// The instance must match exactly one of these schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<RefOr<Schema>>>,
    /// The instance must match at least one of these schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<RefOr<Schema>>>,
    /// The instance must not match this schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<RefOr<Schema>>>,
    /// One schema, or one schema per position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<OneOrMany<RefOr<Schema>>>,
    /// Schemas of the object properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RefOr<Schema>>>,
    /// Whether, or how, properties not listed in `properties` are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties<Schema>>,
    /// A description of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Format hint refining `type`, e.g. `date-time`, `email` or `int64`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// The value assumed when none is provided
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Whether `null` is allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Aids in telling apart the schemas of a composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    /// The property is only sent in responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// The property is only sent in requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    /// XML representation details of this property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
    /// Additional external documentation for this schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// A free-form example of an instance
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Declares this schema to be deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Names the property that tells the alternatives of a composition apart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    /// The name of the property holding the discriminating value
    pub property_name: String,
    /// Maps discriminating values onto schema names or references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<IndexMap<String, String>>,
}

/// XML representation details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Xml {
    /// Replaces the name of the element or attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URI of the namespace definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The prefix used for the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether the property is an attribute instead of an element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    /// Whether an array is wrapped in an enclosing element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Pools of reusable objects
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Reusable schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, RefOr<Schema>>>,
    /// Reusable schemas written under the legacy `schema` key
    #[serde(rename = "schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_schemas: Option<IndexMap<String, RefOr<Schema>>>,
    /// Reusable responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, RefOr<Response>>>,
    /// Reusable parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, RefOr<Parameter>>>,
    /// Reusable examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    /// Reusable request bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_bodies: Option<IndexMap<String, RefOr<RequestBody>>>,
    /// Reusable headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    /// Reusable security schemes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<IndexMap<String, RefOr<SecurityScheme>>>,
    /// Reusable links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, RefOr<Link>>>,
    /// Reusable callbacks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, RefOr<Callback>>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A security scheme usable by the operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// The type of the scheme: `apiKey`, `http`, `oauth2` or `openIdConnect`
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// A short description of the scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The name of the header, query or cookie parameter holding an API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The location of the API key: `query`, `header` or `cookie`
    #[serde(rename = "in")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The HTTP Authorization scheme, e.g. `bearer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// A hint to how a bearer token is formatted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// The flows supported by an OAuth2 scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
    /// OpenID Connect URL to discover OAuth2 configuration values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// The supported OAuth flows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Configuration details for a supported OAuth flow
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    /// The authorization URL, for the `implicit` and `authorizationCode` flows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// The token URL, for the `password`, `clientCredentials` and `authorizationCode` flows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// The URL for obtaining refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// Available scopes, mapped to a short description
    pub scopes: IndexMap<String, String>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A single response from an API operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// A short description of the response
    pub description: String,
    /// Headers sent with the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,
    /// Potential response payloads, keyed by media type or media type range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
    /// Operation links that can be followed from the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, RefOr<Link>>>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// A possible design-time link for a response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// A relative or absolute reference to an operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,
    /// The name of an existing operation, exclusive with `operationRef`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameters to pass to the linked operation, as constants or runtime expressions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Value>>,
    /// A literal value or runtime expression used as the request body
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// A description of the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A server object to be used by the target operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

/// Placeholder for a callback. Only its extensions are kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Callback {
    /// Specification extensions
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

#[cfg(test)]
mod test {
    use crate::codec::Codec;
    use crate::error::ModelErrorKind;
    use crate::openapi_common::OneOrMany;
    use crate::openapi_v3_draft::{OpenApi, Schema};
    use http::Method;
    use serde_json::{json, Value};
    use std::fs;

    fn load_fixture() -> String {
        fs::read_to_string("test/petstore-v3-draft.json").unwrap()
    }

    #[test]
    fn test_draft_round_trip() {
        let content = load_fixture();
        let document: OpenApi = crate::decode(&content).unwrap();
        assert_eq!(document.openapi, "3.0.0-rc0");

        let original: Value = serde_json::from_str(&content).unwrap();
        let reencoded: Value = serde_json::from_slice(&crate::encode(&document).unwrap()).unwrap();
        assert_eq!(original, reencoded);
    }

    #[test]
    fn test_security_is_a_single_object() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();
        let security = document.security.as_ref().unwrap();
        assert_eq!(security["api_key"], Vec::<String>::new());

        let operation = document.operation("/pets", &Method::POST).unwrap();
        let security = operation.security.as_ref().unwrap();
        assert_eq!(security["petstore_auth"], ["write:pets"]);
    }

    #[test]
    fn test_security_list_is_a_type_mismatch() {
        let wire = json!({
            "openapi": "3.0.0-rc1",
            "info": {"title": "T", "version": "1"},
            "paths": {},
            "security": [{"api_key": []}]
        });
        let error = Codec::from_value::<OpenApi>(wire).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("security"));
    }

    #[test]
    fn test_callback_keeps_only_extensions() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();
        let operation = document.operation("/pets", &Method::POST).unwrap();
        let callbacks = operation.callbacks.as_ref().unwrap();
        let callback = callbacks["onCreated"].item().unwrap();
        assert_eq!(callback.extensions.get("x-expression"), Some(&json!("{$request.body#/url}")));

        let wire = json!({"{$request.body#/url}": {"post": {"responses": {}}}, "x-note": 1});
        let callback: crate::openapi_v3_draft::Callback = Codec::from_value(wire).unwrap();
        assert_eq!(serde_json::to_value(&callback).unwrap(), json!({"x-note": 1}));
    }

    #[test]
    fn test_parameter_examples_list() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();
        let operation = document.operation("/pets", &Method::GET).unwrap();
        let limit = operation.parameters.as_ref().unwrap()[0].item().unwrap();
        let examples = limit.examples.as_ref().unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].item().unwrap().value, Some(json!(10)));
        assert!(examples[1].is_ref());
    }

    #[test]
    fn test_schema_items_list() {
        let schema: Schema = Codec::from_value(json!({
            "type": "array",
            "items": [{"type": "string"}, {"type": "integer"}]
        }))
        .unwrap();
        assert!(matches!(schema.items, Some(OneOrMany::Many(ref items)) if items.len() == 2));
    }

    #[test]
    fn test_discriminator_is_an_object() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();
        let components = document.components.as_ref().unwrap();
        let pet = components.schemas.as_ref().unwrap()["Pet"].item().unwrap();
        let discriminator = pet.discriminator.as_ref().unwrap();
        assert_eq!(discriminator.property_name, "petType");

        let error = Codec::from_value::<Schema>(json!({"discriminator": "petType"})).unwrap_err();
        assert_eq!(error.path(), Some("discriminator"));
    }

    #[test]
    fn test_legacy_keys_round_trip_unchanged() {
        let wire = json!({
            "openapi": "3.0.0-rc2",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"server": [{"url": "https://pets.example.com"}]}},
            "components": {"schema": {"Pet": {"type": "object"}}}
        });
        let document: OpenApi = Codec::from_value(wire.clone()).unwrap();
        assert_eq!(document.paths["/pets"].server_overrides().unwrap().len(), 1);
        let components = document.components.as_ref().unwrap();
        assert!(components.legacy_schemas.as_ref().unwrap().contains_key("Pet"));

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_unknown_keys_do_not_change_the_tree() {
        let plain = json!({
            "openapi": "3.0.0-rc0",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"get": {"responses": {"200": {"description": "ok"}}}}}
        });
        let mut noisy = plain.clone();
        noisy["info"]["audience"] = json!("internal");
        noisy["paths"]["/pets"]["get"]["retries"] = json!(3);

        let expected: OpenApi = Codec::from_value(plain).unwrap();
        let decoded: OpenApi = Codec::from_value(noisy).unwrap();
        assert_eq!(decoded, expected);
    }
}
