//! Wire-level building blocks shared by the three document trees.

use crate::codec::path;
use crate::error::ModelError;
use crate::types::json_path::JsonPath;
use crate::{
    COMPONENTS_FIELD, DEFINITIONS_FIELD, EXTENSION_PREFIX, FRAGMENT_SEPARATOR, PATH_SEPARATOR,
    REF_FIELD,
};
use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer, Error as DeError, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ops::Index;

pub(crate) fn is_extension(key: &str) -> bool {
    key.starts_with(EXTENSION_PREFIX)
}

/// Specification extensions: the `x-` keys of an object, in wire order.
///
/// Only `x-` keys are ever stored, so only `x-` keys are ever emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Extensions(IndexMap::new())
    }

    /// Stores an extension. Keys without the `x-` prefix are rejected and `false` is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if !is_extension(&key) {
            log::trace!("Ignoring non-extension key '{}'", key);
            return false;
        }
        self.0.insert(key, value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ExtensionsVisitor;

impl<'de> Visitor<'de> for ExtensionsVisitor {
    type Value = Extensions;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a map of specification extensions")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut extensions = Extensions::new();
        while let Some(key) = map.next_key::<String>()? {
            if is_extension(&key) {
                let value = map.next_value::<Value>()?;
                extensions.0.insert(key, value);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(extensions)
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExtensionsVisitor)
    }
}

/// A `$ref` node.
///
/// Keys written next to `$ref` carry no meaning, but they are kept verbatim in `siblings`
/// so that nothing is lost when the document is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
    #[serde(flatten, skip_serializing_if = "IndexMap::is_empty")]
    pub siblings: IndexMap<String, Value>,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Reference {
            reference: reference.into(),
            siblings: IndexMap::new(),
        }
    }

    /// Points at a pooled component of an OpenAPI 3 document, e.g.
    /// `#/components/schemas/Pet`.
    pub fn component(kind: &str, name: &str) -> Self {
        let mut path = JsonPath::new();
        path.add(COMPONENTS_FIELD).add(kind).add(name);
        Reference::new(path.to_fragment())
    }

    /// Points at a schema definition of a Swagger 2.0 document, e.g. `#/definitions/Pet`.
    pub fn definition(name: &str) -> Self {
        let mut path = JsonPath::new();
        path.add(DEFINITIONS_FIELD).add(name);
        Reference::new(path.to_fragment())
    }

    /// True for references into the same document (`#/...`).
    pub fn is_local(&self) -> bool {
        self.reference.starts_with(FRAGMENT_SEPARATOR)
    }

    /// The part of the reference before the fragment, empty for local references.
    pub fn document(&self) -> &str {
        match self.reference.split_once(FRAGMENT_SEPARATOR) {
            Some((document, _)) => document,
            None => &self.reference,
        }
    }

    /// Decodes the JSON pointer in the fragment. `None` when there is no fragment.
    pub fn pointer_segments(&self) -> Option<JsonPath> {
        let (_, fragment) = self.reference.split_once(FRAGMENT_SEPARATOR)?;
        Some(JsonPath::parse(fragment))
    }

    /// The last pointer segment, which names the component being referenced.
    pub fn component_name(&self) -> Option<String> {
        self.pointer_segments()?.0.pop()
    }

    pub fn has_siblings(&self) -> bool {
        !self.siblings.is_empty()
    }
}

/// A node that is either a `$ref` or an inline value.
///
/// A mapping with a `$ref` key is always a reference. Anything else decodes as `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    Ref(Reference),
    Item(T),
}

impl<T> RefOr<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }

    pub fn item_mut(&mut self) -> Option<&mut T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            RefOr::Ref(reference) => Some(reference),
            RefOr::Item(_) => None,
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(item: T) -> Self {
        RefOr::Item(item)
    }
}

impl<T> Serialize for RefOr<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RefOr::Ref(reference) => reference.serialize(serializer),
            RefOr::Item(item) => item.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for RefOr<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get(REF_FIELD).is_some() {
            path::deserialize_nested(value).map(RefOr::Ref)
        } else {
            path::deserialize_nested(value).map(RefOr::Item)
        }
    }
}

/// A value the grammar allows either once or as a list, e.g. schema `items`.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(Box<T>),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// The single value, or the first of the list.
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.first(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(&**item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        OneOrMany::One(Box::new(item))
    }
}

impl<T> Serialize for OneOrMany<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OneOrMany::One(item) => item.serialize(serializer),
            OneOrMany::Many(items) => items.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for OneOrMany<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            path::deserialize_nested(value).map(OneOrMany::Many)
        } else {
            path::deserialize_nested(value).map(|item| OneOrMany::One(Box::new(item)))
        }
    }
}

/// `additionalProperties`: a flag or a schema every extra property must match.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties<S> {
    Allowed(bool),
    Schema(Box<RefOr<S>>),
}

impl<S> AdditionalProperties<S> {
    /// False only for an explicit `false`.
    pub fn allows_any(&self) -> bool {
        !matches!(self, AdditionalProperties::Allowed(false))
    }

    pub fn schema(&self) -> Option<&RefOr<S>> {
        match self {
            AdditionalProperties::Schema(schema) => Some(schema),
            AdditionalProperties::Allowed(_) => None,
        }
    }
}

impl<S> Serialize for AdditionalProperties<S>
where
    S: Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        match self {
            AdditionalProperties::Allowed(allowed) => serializer.serialize_bool(*allowed),
            AdditionalProperties::Schema(schema) => schema.serialize(serializer),
        }
    }
}

impl<'de, S> Deserialize<'de> for AdditionalProperties<S>
where
    S: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(allowed) => Ok(AdditionalProperties::Allowed(allowed)),
            value => path::deserialize_nested(value)
                .map(|schema| AdditionalProperties::Schema(Box::new(schema))),
        }
    }
}

/// Splits a map into its entries and its `x-` keys, checking every entry key first.
struct EntriesVisitor<T> {
    expecting: &'static str,
    check_key: fn(&str) -> Result<(), String>,
    marker: PhantomData<T>,
}

impl<T> EntriesVisitor<T> {
    fn new(expecting: &'static str, check_key: fn(&str) -> Result<(), String>) -> Self {
        EntriesVisitor {
            expecting,
            check_key,
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for EntriesVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = (IndexMap<String, T>, Extensions);

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        let mut extensions = Extensions::new();
        while let Some(key) = map.next_key::<String>()? {
            if is_extension(&key) {
                let value = map.next_value::<Value>()?;
                extensions.0.insert(key, value);
                continue;
            }

            (self.check_key)(&key).map_err(A::Error::custom)?;
            let value = map.next_value::<T>()?;
            entries.insert(key, value);
        }
        Ok((entries, extensions))
    }
}

/// Reads a map whose non-`x-` keys are free-form, e.g. a callback's runtime expressions.
pub(crate) fn deserialize_entries<'de, D, T>(
    deserializer: D,
    expecting: &'static str,
) -> Result<(IndexMap<String, T>, Extensions), D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_map(EntriesVisitor::new(expecting, accept_any_key))
}

/// Keeps an explicit `null` as `Some(Value::Null)` for fields holding arbitrary values.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub(crate) fn serialize_entries<S, T>(
    serializer: S,
    entries: &IndexMap<String, T>,
    extensions: &Extensions,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len() + extensions.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    for (key, value) in extensions.iter() {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn check_path_key(key: &str) -> Result<(), String> {
    if key.starts_with(PATH_SEPARATOR) {
        Ok(())
    } else {
        Err(format!("path '{}' must begin with '{}'", key, PATH_SEPARATOR))
    }
}

fn accept_any_key(_: &str) -> Result<(), String> {
    Ok(())
}

/// The `paths` object: path template to path item, in wire order.
///
/// Every path key begins with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths<T> {
    entries: IndexMap<String, T>,
    pub extensions: Extensions,
}

impl<T> Default for Paths<T> {
    fn default() -> Self {
        Paths {
            entries: IndexMap::new(),
            extensions: Extensions::new(),
        }
    }
}

impl<T> Paths<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a path item.
    ///
    /// # Returns
    ///
    /// * `Ok(Option<T>)` - The item previously stored under `path`, if any.
    /// * `Err(ModelError::InvalidPath)` - `path` does not begin with `/`.
    pub fn insert(&mut self, path: impl Into<String>, item: T) -> Result<Option<T>, ModelError> {
        let path = path.into();
        if check_path_key(&path).is_err() {
            return Err(ModelError::InvalidPath(path));
        }
        Ok(self.entries.insert(path, item))
    }

    pub fn get(&self, path: &str) -> Option<&T> {
        self.entries.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut T> {
        self.entries.get_mut(path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<T> {
        self.entries.shift_remove(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Index<&str> for Paths<T> {
    type Output = T;

    fn index(&self, path: &str) -> &T {
        &self.entries[path]
    }
}

impl<T> Serialize for Paths<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, &self.entries, &self.extensions)
    }
}

impl<'de, T> Deserialize<'de> for Paths<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitor = EntriesVisitor::new("a map of paths", check_path_key);
        let (entries, extensions) = deserializer.deserialize_map(visitor)?;
        Ok(Paths {
            entries,
            extensions,
        })
    }
}

/// The `responses` object of an operation: status code (or `default`) to response.
#[derive(Debug, Clone, PartialEq)]
pub struct Responses<T> {
    entries: IndexMap<String, RefOr<T>>,
    pub extensions: Extensions,
}

impl<T> Default for Responses<T> {
    fn default() -> Self {
        Responses {
            entries: IndexMap::new(),
            extensions: Extensions::new(),
        }
    }
}

impl<T> Responses<T> {
    const DEFAULT: &'static str = "default";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, status: impl Into<String>, response: RefOr<T>) -> Option<RefOr<T>> {
        self.entries.insert(status.into(), response)
    }

    pub fn get(&self, status: &str) -> Option<&RefOr<T>> {
        self.entries.get(status)
    }

    /// The `default` response, covering every status code not listed explicitly.
    pub fn default_response(&self) -> Option<&RefOr<T>> {
        self.entries.get(Self::DEFAULT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RefOr<T>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Index<&str> for Responses<T> {
    type Output = RefOr<T>;

    fn index(&self, status: &str) -> &RefOr<T> {
        &self.entries[status]
    }
}

impl<T> Serialize for Responses<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, &self.entries, &self.extensions)
    }
}

impl<'de, T> Deserialize<'de> for Responses<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitor = EntriesVisitor::new("a map of responses", accept_any_key);
        let (entries, extensions) = deserializer.deserialize_map(visitor)?;
        Ok(Responses {
            entries,
            extensions,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::codec::Codec;
    use crate::error::{ModelError, ModelErrorKind};
    use crate::openapi_common::{
        AdditionalProperties, Extensions, OneOrMany, Paths, RefOr, Reference, Responses,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Node {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
        #[serde(flatten)]
        extensions: Extensions,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        node: RefOr<Node>,
        #[serde(skip_serializing_if = "Option::is_none")]
        extra: Option<AdditionalProperties<Node>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        items: Option<OneOrMany<RefOr<Node>>>,
    }

    fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ModelError> {
        Codec::from_value(value)
    }

    #[test]
    fn test_extensions_keep_only_x_keys() {
        let node: Node = decode(json!({"name": "a", "x-owner": {"team": 1}, "other": true})).unwrap();
        assert_eq!(node.extensions.len(), 1);
        assert_eq!(node.extensions.get("x-owner"), Some(&json!({"team": 1})));

        let encoded = serde_json::to_value(&node).unwrap();
        assert_eq!(encoded, json!({"name": "a", "x-owner": {"team": 1}}));
    }

    #[test]
    fn test_extensions_reject_plain_keys() {
        let mut extensions = Extensions::new();
        assert!(extensions.insert("x-rate-limit", 10));
        assert!(!extensions.insert("rate-limit", 10));
        assert_eq!(extensions.len(), 1);
        assert!(extensions.contains_key("x-rate-limit"));
        assert_eq!(extensions.remove("x-rate-limit"), Some(json!(10)));
        assert!(extensions.is_empty());
    }

    #[test]
    fn test_ref_or_reference() {
        let holder: Holder = decode(json!({"node": {"$ref": "#/components/schemas/Node"}})).unwrap();
        let reference = holder.node.reference().unwrap();
        assert_eq!(reference.reference, "#/components/schemas/Node");
        assert!(!reference.has_siblings());
        assert!(holder.node.item().is_none());
    }

    #[test]
    fn test_ref_or_item() {
        let holder: Holder = decode(json!({"node": {"name": "inline"}})).unwrap();
        assert_eq!(holder.node.item().unwrap().name, "inline");
        assert!(!holder.node.is_ref());
    }

    #[test]
    fn test_reference_siblings_are_kept() {
        let wire = json!({"node": {"$ref": "#/definitions/Node", "description": "ignored", "x-a": 1}});
        let holder: Holder = decode(wire.clone()).unwrap();
        let reference = holder.node.reference().unwrap();
        assert!(reference.has_siblings());
        assert_eq!(reference.siblings["description"], json!("ignored"));

        assert_eq!(serde_json::to_value(&holder).unwrap(), wire);
    }

    #[test]
    fn test_mismatch_inside_ref_or_is_located() {
        let error = decode::<Holder>(json!({"node": {"name": 5}})).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("node.name"));

        let error = decode::<Holder>(json!({"node": {"$ref": 5}})).unwrap_err();
        assert_eq!(error.path(), Some("node.$ref"));
    }

    #[test]
    fn test_mismatch_through_nested_buffers_is_located() {
        let wire = json!({"node": {"name": "a"}, "items": [{"name": "b"}, {"name": "c", "count": "x"}]});
        let error = decode::<Holder>(wire).unwrap_err();
        assert_eq!(error.path(), Some("items[1].count"));

        let wire = json!({"node": {"name": "a"}, "extra": {"count": 1}});
        let error = decode::<Holder>(wire).unwrap_err();
        assert_eq!(error.path(), Some("extra"));
        assert!(error.to_string().contains("name"));
    }

    #[test]
    fn test_additional_properties_shapes() {
        let holder: Holder = decode(json!({"node": {"name": "a"}, "extra": false})).unwrap();
        let extra = holder.extra.as_ref().unwrap();
        assert_eq!(extra, &AdditionalProperties::Allowed(false));
        assert!(!extra.allows_any());

        let holder: Holder = decode(json!({"node": {"name": "a"}, "extra": {"$ref": "#/x"}})).unwrap();
        let extra = holder.extra.as_ref().unwrap();
        assert!(extra.allows_any());
        assert!(extra.schema().unwrap().is_ref());

        let encoded = serde_json::to_value(&holder).unwrap();
        assert_eq!(encoded["extra"], json!({"$ref": "#/x"}));
    }

    #[test]
    fn test_one_or_many_shapes() {
        let holder: Holder = decode(json!({"node": {"name": "a"}, "items": {"name": "one"}})).unwrap();
        let items = holder.items.as_ref().unwrap();
        assert!(matches!(items, OneOrMany::One(_)));
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().item().unwrap().name, "one");

        let holder: Holder = decode(json!({"node": {"name": "a"}, "items": [{"name": "b"}, {"$ref": "#/c"}]})).unwrap();
        let items = holder.items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().nth(1).unwrap().is_ref());
        assert_eq!(
            serde_json::to_value(&holder).unwrap()["items"],
            json!([{"name": "b"}, {"$ref": "#/c"}])
        );
    }

    #[test]
    fn test_reference_builders() {
        let reference = Reference::component("schemas", "Pet/Owner");
        assert_eq!(reference.reference, "#/components/schemas/Pet~1Owner");
        assert_eq!(reference.component_name().as_deref(), Some("Pet/Owner"));
        assert!(reference.is_local());
        assert_eq!(reference.document(), "");

        let reference = Reference::definition("Pet");
        assert_eq!(reference.reference, "#/definitions/Pet");
        assert_eq!(
            reference.pointer_segments().unwrap().segments(),
            ["definitions", "Pet"]
        );
    }

    #[test]
    fn test_remote_reference() {
        let reference = Reference::new("common.yaml#/components/schemas/Error");
        assert!(!reference.is_local());
        assert_eq!(reference.document(), "common.yaml");
        assert_eq!(reference.component_name().as_deref(), Some("Error"));

        let reference = Reference::new("common.yaml");
        assert!(reference.pointer_segments().is_none());
        assert_eq!(reference.document(), "common.yaml");
    }

    #[test]
    fn test_paths_preserve_order_and_extensions() {
        let wire = json!({"/b": {"name": "b"}, "/a": {"name": "a"}, "x-group": "pets"});
        let paths: Paths<Node> = decode(wire.clone()).unwrap();
        assert_eq!(paths.keys().collect::<Vec<_>>(), ["/b", "/a"]);
        assert_eq!(paths["/a"].name, "a");
        assert_eq!(paths.extensions.get("x-group"), Some(&json!("pets")));

        let encoded = serde_json::to_string(&paths).unwrap();
        assert!(encoded.find("/b").unwrap() < encoded.find("/a").unwrap());
        assert_eq!(serde_json::from_str::<Value>(&encoded).unwrap(), wire);
    }

    #[test]
    fn test_paths_reject_relative_key() {
        let error = decode::<Paths<Node>>(json!({"pets": {"name": "a"}})).unwrap_err();
        assert_eq!(error.kind(), ModelErrorKind::TypeMismatch);
        assert!(error.to_string().contains("must begin with '/'"));
    }

    #[test]
    fn test_paths_insert() {
        let mut paths = Paths::new();
        let node = Node {
            name: "a".to_string(),
            count: None,
            extensions: Extensions::new(),
        };
        assert!(paths.insert("/a", node.clone()).unwrap().is_none());
        assert!(paths.insert("/a", node.clone()).unwrap().is_some());

        let error = paths.insert("a", node).unwrap_err();
        assert!(matches!(error, ModelError::InvalidPath(ref path) if path == "a"));
        assert_eq!(paths.len(), 1);
        assert!(paths.contains_path("/a"));
    }

    #[test]
    fn test_responses() {
        let wire = json!({"200": {"name": "ok"}, "default": {"$ref": "#/r"}, "x-note": 1});
        let responses: Responses<Node> = decode(wire.clone()).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses["200"].item().unwrap().name, "ok");
        assert!(responses.default_response().unwrap().is_ref());
        assert_eq!(serde_json::to_value(&responses).unwrap(), wire);
    }

    #[test]
    fn test_responses_mismatch_is_located() {
        let error = decode::<Responses<Node>>(json!({"404": {"name": []}})).unwrap_err();
        assert_eq!(error.path(), Some("404.name"));
    }
}
