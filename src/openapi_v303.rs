//! Document tree for OpenAPI 3.0.3 (<https://spec.openapis.org/oas/v3.0.3>).
//!
//! Every 3.0.x patch release shares this grammar. Fields the grammar marks as required are
//! plain values, everything else is optional so that an absent field and an explicit
//! `false` or empty value stay distinct through a round-trip.

use crate::openapi_common::{
    AdditionalProperties, Extensions, Paths, RefOr, Responses, deserialize_entries,
    deserialize_present, serialize_entries,
};
use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Names of the security schemes an operation may use, each with the scopes it needs.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root object of an OpenAPI 3.0.3 document
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
    /// Security mechanisms that can be used across the API, any one of which is sufficient
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

impl OpenApi {
    /// Looks up the operation bound to `method` on `path`. References are not followed.
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
///
/// A path item may carry its own `$ref`. The referenced item is not merged in.
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
    /// Servers overriding the document servers, under whichever key the document used.
    pub fn server_overrides(&self) -> Option<&[Server]> {
        self.servers
            .as_deref()
            .or(self.legacy_servers.as_deref())
    }

    /// The operation bound to `method`, if any.
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

    /// The defined operations paired with their methods, in field order.
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
    /// Security mechanisms for this operation, overriding the document level declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
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
    /// The Content-Type written under the legacy `content_type` key
    #[serde(rename = "content_type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_content_type: Option<String>,
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
    /// Examples of the parameter's potential value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    /// Representation of the parameter for complex values, holding a single entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
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

/// Definition of input and output data types
///
/// An extended subset of JSON Schema Specification Wright Draft 00. Numeric bounds keep
/// their written form, so `10` and `10.5` both survive a round-trip unchanged.
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
    /// Schema of the array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<RefOr<Schema>>>,
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

impl Schema {
    /// Looks up an inline or referenced property schema by name.
    pub fn property(&self, name: &str) -> Option<&RefOr<Schema>> {
        self.properties.as_ref()?.get(name)
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|name| name == property))
    }
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

impl Components {
    /// Looks `name` up under `schemas`, then under the legacy `schema` key.
    pub fn schema(&self, name: &str) -> Option<&RefOr<Schema>> {
        [&self.schemas, &self.legacy_schemas]
            .into_iter()
            .flatten()
            .find_map(|schemas| schemas.get(name))
    }
}

impl Encoding {
    /// The Content-Type under whichever key the document used.
    pub fn media_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .or(self.legacy_content_type.as_deref())
    }
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
    pub allow_reserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
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

/// Out-of-band requests the API may make, keyed by the runtime expression that yields
/// their URL, e.g. `{$request.body#/callbackUrl}`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Callback {
    pub expressions: IndexMap<String, PathItem>,
    pub extensions: Extensions,
}

impl Callback {
    pub fn get(&self, expression: &str) -> Option<&PathItem> {
        self.expressions.get(expression)
    }
}

impl Serialize for Callback {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, &self.expressions, &self.extensions)
    }
}

impl<'de> Deserialize<'de> for Callback {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (expressions, extensions) = deserialize_entries(deserializer, "a map of callbacks")?;
        Ok(Callback {
            expressions,
            extensions,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::codec::Codec;
    use crate::error::ModelErrorKind;
    use crate::openapi_common::{AdditionalProperties, RefOr};
    use crate::openapi_v303::{OpenApi, Schema};
    use http::Method;
    use serde_json::{json, Number, Value};
    use std::fs;

    fn load_fixture() -> String {
        fs::read_to_string("test/petstore-v303.json").unwrap()
    }

    fn decode(value: Value) -> OpenApi {
        Codec::from_value(value).unwrap()
    }

    fn document_with_operation(operation: Value) -> Value {
        json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"get": operation}}
        })
    }

    #[test]
    fn test_petstore_round_trip() {
        let content = load_fixture();
        let document: OpenApi = crate::decode(&content).unwrap();
        let encoded = crate::encode(&document).unwrap();

        let original: Value = serde_json::from_str(&content).unwrap();
        let reencoded: Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(original, reencoded);
    }

    #[test]
    fn test_petstore_navigation() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();

        let operation = document.operation("/pets", &Method::GET).unwrap();
        assert_eq!(operation.operation_id.as_deref(), Some("listPets"));
        assert!(document.operation("/pets", &Method::PATCH).is_none());
        assert!(document.operation("/owners", &Method::GET).is_none());

        let operations = document.operations();
        let ids = operations
            .iter()
            .map(|(path, method, _)| format!("{} {}", method, path))
            .collect::<Vec<_>>();
        assert_eq!(ids, ["GET /pets", "POST /pets", "GET /pets/{petId}"]);

        let components = document.components.as_ref().unwrap();
        let pet = components.schema("Pet").unwrap().item().unwrap();
        assert!(pet.is_required("name"));
        assert!(!pet.is_required("tag"));
        assert!(pet.property("id").is_some());
    }

    #[test]
    fn test_petstore_references() {
        let document: OpenApi = crate::decode(load_fixture()).unwrap();
        let operation = document.operation("/pets/{petId}", &Method::GET).unwrap();
        let response = operation.responses["200"].item().unwrap();
        let schema = response.content.as_ref().unwrap()["application/json"]
            .schema
            .as_ref()
            .unwrap();

        let reference = schema.reference().unwrap();
        assert_eq!(reference.component_name().as_deref(), Some("Pet"));
        assert_eq!(
            reference.pointer_segments().unwrap().segments(),
            ["components", "schemas", "Pet"]
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let wire = document_with_operation(json!({"responses": {"200": {"description": "ok"}}}));
        let document = decode(wire.clone());
        let operation = document.operation("/pets", &Method::GET).unwrap();
        assert!(operation.deprecated.is_none());
        assert!(operation.parameters.is_none());

        let encoded = serde_json::to_value(&document).unwrap();
        assert_eq!(encoded, wire);
        assert!(encoded["paths"]["/pets"]["get"].get("deprecated").is_none());
    }

    #[test]
    fn test_explicit_false_survives() {
        let wire = document_with_operation(json!({
            "deprecated": false,
            "parameters": [{"name": "limit", "in": "query", "required": false}],
            "responses": {"200": {"description": "ok"}}
        }));
        let document = decode(wire.clone());
        let operation = document.operation("/pets", &Method::GET).unwrap();
        assert_eq!(operation.deprecated, Some(false));

        let parameters = operation.parameters.as_ref().unwrap();
        let limit = parameters[0].item().unwrap();
        assert_eq!(limit.location, "query");
        assert_eq!(limit.required, Some(false));

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1", "logo": "pets.png"},
            "paths": {"/pets": {"get": {"responses": {}, "rateLimit": 10}}},
            "webhooks": {}
        });
        let document = decode(wire);
        let encoded = serde_json::to_value(&document).unwrap();
        assert!(encoded.get("webhooks").is_none());
        assert!(encoded["info"].get("logo").is_none());
        assert!(encoded["paths"]["/pets"]["get"].get("rateLimit").is_none());

        let expected = decode(json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"get": {"responses": {}}}}
        }));
        assert_eq!(document, expected);
    }

    #[test]
    fn test_extensions_round_trip() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1", "x-logo": {"url": "pets.png"}},
            "paths": {
                "/pets": {"x-internal": true, "get": {"responses": {"x-cache": "none"}}},
                "x-group": "pets"
            },
            "x-audience": "public"
        });
        let document = decode(wire.clone());
        assert_eq!(document.extensions.get("x-audience"), Some(&json!("public")));
        assert_eq!(document.paths.extensions.get("x-group"), Some(&json!("pets")));
        assert_eq!(document.paths.len(), 1);
        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_type_mismatch_path_through_references() {
        let wire = document_with_operation(json!({
            "parameters": [{"name": "limit", "in": "query", "schema": "integer"}],
            "responses": {}
        }));
        let error = Codec::from_value::<OpenApi>(wire).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("paths./pets.get.parameters[0].schema"));
    }

    #[test]
    fn test_type_mismatch_path_inside_schema() {
        let wire = document_with_operation(json!({
            "responses": {"200": {"description": "ok", "content": {"application/json": {
                "schema": {"type": "object", "properties": {"id": {"maxLength": "ten"}}}
            }}}}
        }));
        let error = Codec::from_value::<OpenApi>(wire).unwrap_err();
        assert_eq!(
            error.path(),
            Some("paths./pets.get.responses.200.content.application/json.schema.properties.id.maxLength")
        );
    }

    #[test]
    fn test_missing_required_field() {
        let wire = json!({"openapi": "3.0.3", "info": {"title": "T"}, "paths": {}});
        let error = Codec::from_value::<OpenApi>(wire).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("info"));
        assert!(error.to_string().contains("version"));
    }

    #[test]
    fn test_bad_path_key() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {"pets": {}}
        });
        let error = Codec::from_value::<OpenApi>(wire).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("paths"));
    }

    #[test]
    fn test_reference_siblings_survive() {
        let wire = document_with_operation(json!({
            "responses": {"200": {"$ref": "#/components/responses/Ok", "description": "sibling"}}
        }));
        let document = decode(wire.clone());
        let operation = document.operation("/pets", &Method::GET).unwrap();
        let reference = operation.responses["200"].reference().unwrap();
        assert!(reference.has_siblings());
        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_numeric_bounds_are_real_numbers() {
        let schema: Schema = Codec::from_value(json!({
            "type": "number",
            "minimum": 0,
            "maximum": 10.5,
            "multipleOf": 0.25,
            "exclusiveMaximum": true
        }))
        .unwrap();
        assert_eq!(schema.minimum, Some(Number::from(0)));
        assert_eq!(schema.maximum.as_ref().and_then(Number::as_f64), Some(10.5));
        assert_eq!(schema.multiple_of.as_ref().and_then(Number::as_f64), Some(0.25));

        let encoded = serde_json::to_value(&schema).unwrap();
        assert_eq!(encoded["minimum"], json!(0));
        assert_eq!(encoded["maximum"], json!(10.5));
    }

    #[test]
    fn test_schema_composition_and_additional_properties() {
        let wire = json!({
            "oneOf": [{"$ref": "#/components/schemas/Cat"}, {"$ref": "#/components/schemas/Dog"}],
            "discriminator": {"propertyName": "petType", "mapping": {"cat": "#/components/schemas/Cat"}},
            "additionalProperties": false,
            "not": {"type": "null"},
            "items": {"type": "string"}
        });
        let schema: Schema = Codec::from_value(wire.clone()).unwrap();
        assert_eq!(schema.one_of.as_ref().unwrap().len(), 2);
        assert_eq!(schema.discriminator.as_ref().unwrap().property_name, "petType");
        assert_eq!(schema.additional_properties, Some(AdditionalProperties::Allowed(false)));
        assert!(matches!(schema.items.as_deref(), Some(RefOr::Item(_))));
        assert_eq!(serde_json::to_value(&schema).unwrap(), wire);
    }

    #[test]
    fn test_explicit_null_example_is_kept() {
        let schema: Schema = Codec::from_value(json!({"type": "string", "nullable": true, "default": null})).unwrap();
        assert_eq!(schema.default, Some(Value::Null));
        assert_eq!(schema.example, None);

        let encoded = serde_json::to_value(&schema).unwrap();
        assert_eq!(encoded["default"], Value::Null);
        assert!(encoded.get("example").is_none());
    }

    #[test]
    fn test_callbacks() {
        let wire = document_with_operation(json!({
            "callbacks": {
                "onEvent": {
                    "{$request.body#/callbackUrl}": {
                        "post": {"responses": {"200": {"description": "received"}}}
                    },
                    "x-retry": 3
                },
                "shared": {"$ref": "#/components/callbacks/Shared"}
            },
            "responses": {}
        }));
        let document = decode(wire.clone());
        let operation = document.operation("/pets", &Method::GET).unwrap();
        let callbacks = operation.callbacks.as_ref().unwrap();

        let callback = callbacks["onEvent"].item().unwrap();
        let item = callback.get("{$request.body#/callbackUrl}").unwrap();
        assert!(item.operation(&Method::POST).is_some());
        assert_eq!(callback.extensions.get("x-retry"), Some(&json!(3)));
        assert!(callbacks["shared"].is_ref());

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_security_requirements_list() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {},
            "security": [{"petstore_auth": ["write:pets", "read:pets"]}, {}],
            "components": {"securitySchemes": {"petstore_auth": {
                "type": "oauth2",
                "flows": {"implicit": {
                    "authorizationUrl": "https://example.com/oauth",
                    "scopes": {"write:pets": "modify pets", "read:pets": "read pets"}
                }}
            }}}
        });
        let document = decode(wire.clone());
        let security = document.security.as_ref().unwrap();
        assert_eq!(security.len(), 2);
        assert_eq!(security[0]["petstore_auth"], ["write:pets", "read:pets"]);
        assert!(security[1].is_empty());

        let schemes = document.components.as_ref().unwrap().security_schemes.as_ref().unwrap();
        let scheme = schemes["petstore_auth"].item().unwrap();
        assert_eq!(scheme.scheme_type, "oauth2");
        let implicit = scheme.flows.as_ref().unwrap().implicit.as_ref().unwrap();
        assert_eq!(implicit.scopes.len(), 2);

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_legacy_keys_round_trip_unchanged() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {
                "server": [{"url": "https://pets.example.com"}],
                "post": {
                    "requestBody": {"content": {"multipart/form-data": {
                        "encoding": {"avatar": {"content_type": "image/png"}}
                    }}},
                    "responses": {"201": {"description": "created"}}
                }
            }},
            "components": {"schema": {"Pet": {"type": "object"}}}
        });
        let document = decode(wire.clone());

        let item = &document.paths["/pets"];
        assert!(item.servers.is_none());
        assert_eq!(item.server_overrides().unwrap().len(), 1);
        let body = item.post.as_ref().unwrap().request_body.as_ref().unwrap();
        let media = &body.item().unwrap().content["multipart/form-data"];
        let encoding = &media.encoding.as_ref().unwrap()["avatar"];
        assert_eq!(encoding.media_type(), Some("image/png"));

        let components = document.components.as_ref().unwrap();
        assert!(components.schemas.is_none());
        assert!(components.schema("Pet").is_some());

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_published_keys_round_trip_unchanged() {
        let wire = json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"servers": [{"url": "https://pets.example.com"}]}},
            "components": {"schemas": {"Pet": {"type": "object"}}}
        });
        let document = decode(wire.clone());
        assert!(document.paths["/pets"].legacy_servers.is_none());
        assert_eq!(document.paths["/pets"].server_overrides().unwrap().len(), 1);
        assert!(document.components.as_ref().unwrap().schema("Pet").is_some());

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }
}
