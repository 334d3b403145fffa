mod builder;
pub(crate) mod path;

pub use crate::codec::builder::CodecBuilder;

use crate::document::{AnyDocument, Document};
use crate::error::ModelError;
use crate::types::version::SpecVersion;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Structured text surface a document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

impl Format {
    /// Guesses the format from the first non-blank byte: `{` or `[` is JSON, anything else
    /// is treated as YAML.
    pub fn detect(input: &[u8]) -> Format {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        match input.iter().find(|byte| !byte.is_ascii_whitespace()) {
            Some(b'{') | Some(b'[') => Format::Json,
            _ => Format::Yaml,
        }
    }

    /// Maps a `.json`, `.yaml` or `.yml` extension onto a format.
    pub fn from_path(path: &Path) -> Option<Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Decodes raw documents into the typed trees and encodes them back.
///
/// A codec without a pinned format sniffs the input on decode and writes JSON on encode.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    format: Option<Format>,
    pretty: bool,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn input_format(&self, input: &[u8]) -> Format {
        self.format.unwrap_or_else(|| Format::detect(input))
    }

    fn output_format(&self) -> Format {
        self.format.unwrap_or(Format::Json)
    }

    /// Parses raw text into a generic structured value without applying any model.
    ///
    /// Unpinned input that looks like JSON but does not parse as JSON is retried as YAML,
    /// so flow-style YAML such as `{openapi: 3.0.3}` is accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed value.
    /// * `Err(ModelError::MalformedInput)` - The text is not well-formed in the chosen format.
    pub fn parse(&self, input: &[u8]) -> Result<Value, ModelError> {
        let format = self.input_format(input);
        let parsed = Self::parse_as(format, input);

        match (parsed, self.format) {
            (Ok(value), _) => Ok(value),
            (Err(message), None) if format == Format::Json => {
                log::trace!("Input is not JSON ({}), retrying as YAML", message);
                Self::parse_as(Format::Yaml, input)
                    .map_err(|_| ModelError::malformed_input(format, &message))
            }
            (Err(message), _) => Err(ModelError::malformed_input(format, &message)),
        }
    }

    fn parse_as(format: Format, input: &[u8]) -> Result<Value, String> {
        match format {
            Format::Json => serde_json::from_slice(input).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_slice(input).map_err(|e| e.to_string()),
        }
    }

    /// Decodes raw text into the document model `D`.
    ///
    /// Unknown keys are dropped, `x-` extensions are kept. No semantic validation is done.
    ///
    /// # Returns
    ///
    /// * `Ok(D)` - The decoded tree.
    /// * `Err(ModelError::MalformedInput)` - The text is not well-formed.
    /// * `Err(ModelError::TypeMismatch)` - A known key holds a value of the wrong shape; the
    ///   error names the offending location.
    pub fn decode<D>(&self, input: &[u8]) -> Result<D, ModelError>
    where
        D: Document,
    {
        let document: D = Self::from_value(self.parse(input)?)?;
        log::debug!(
            "Decoded {} document declaring version '{}'",
            D::MODEL,
            document.declared_version()
        );
        Ok(document)
    }

    /// Detects the declared version and decodes into the matching model.
    pub fn decode_any(&self, input: &[u8]) -> Result<AnyDocument, ModelError> {
        let value = self.parse(input)?;
        let version = SpecVersion::detect(&value)?;
        log::debug!("Detected {} document", version);
        AnyDocument::from_value(version, value)
    }

    /// Reads and decodes a document from disk.
    ///
    /// Without a pinned format the file extension decides, falling back to sniffing.
    pub fn decode_file<D>(&self, path: impl AsRef<Path>) -> Result<D, ModelError>
    where
        D: Document,
    {
        let (codec, content) = self.load_file(path.as_ref())?;
        codec.decode(&content)
    }

    pub fn decode_any_file(&self, path: impl AsRef<Path>) -> Result<AnyDocument, ModelError> {
        let (codec, content) = self.load_file(path.as_ref())?;
        codec.decode_any(&content)
    }

    fn load_file(&self, path: &Path) -> Result<(Codec, Vec<u8>), ModelError> {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                return Err(ModelError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let format = self.format.or_else(|| Format::from_path(path));
        match format {
            Some(format) => log::trace!("Loaded '{}' as {}", path.display(), format),
            None => log::trace!("Loaded '{}', format left to detection", path.display()),
        }

        let codec = Codec {
            format,
            pretty: self.pretty,
        };
        Ok((codec, content))
    }

    /// Encodes a tree in the codec's output format. Absent fields are omitted.
    pub fn encode<T>(&self, document: &T) -> Result<Vec<u8>, ModelError>
    where
        T: Serialize,
    {
        let format = self.output_format();
        let encoded = match (format, self.pretty) {
            (Format::Json, true) => serde_json::to_vec_pretty(document).map_err(|e| e.to_string()),
            (Format::Json, false) => serde_json::to_vec(document).map_err(|e| e.to_string()),
            (Format::Yaml, _) => serde_yaml::to_string(document)
                .map(String::into_bytes)
                .map_err(|e| e.to_string()),
        };

        match encoded {
            Ok(bytes) => Ok(bytes),
            Err(message) => Err(ModelError::encode_failed(format, &message)),
        }
    }

    pub fn encode_to_string<T>(&self, document: &T) -> Result<String, ModelError>
    where
        T: Serialize,
    {
        let bytes = self.encode(document)?;
        // Both serializers only ever emit UTF-8.
        String::from_utf8(bytes).map_err(|e| ModelError::encode_failed(self.output_format(), &e))
    }

    /// Applies a model to an already parsed value, reporting mismatches with their location.
    pub(crate) fn from_value<T>(value: Value) -> Result<T, ModelError>
    where
        T: DeserializeOwned,
    {
        match serde_path_to_error::deserialize(value) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                let (path, message) = path::locate(e);
                Err(ModelError::type_mismatch(path, message))
            }
        }
    }
}
