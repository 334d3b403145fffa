use crate::codec::{Codec, Format};

/// Configures a [`Codec`].
///
/// ```
/// use oas_model::{Codec, Format};
///
/// let codec = Codec::builder().format(Format::Yaml).build();
/// assert_eq!(codec.format(), Some(Format::Yaml));
/// ```
#[derive(Debug, Default)]
pub struct CodecBuilder {
    format: Option<Format>,
    pretty: bool,
}

impl CodecBuilder {
    pub fn new() -> Self {
        Self {
            format: None,
            pretty: false,
        }
    }

    /// Pins the format used for both decoding and encoding.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Pins the format from a file extension. Unknown extensions leave the format unpinned.
    pub fn format_for_extension(mut self, extension: impl AsRef<str>) -> Self {
        let name = format!("document.{}", extension.as_ref());
        self.format = Format::from_path(std::path::Path::new(&name));
        self
    }

    /// Indents JSON output. YAML output is always block style.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn build(self) -> Codec {
        Codec {
            format: self.format,
            pretty: self.pretty,
        }
    }
}
