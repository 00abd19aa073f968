use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatsError, Result};

/// MIME type of images returned by the API. The server always serves JPEG.
pub const JPEG_MIME: &str = "image/jpeg";

/// Requested square pixel dimension of a returned image.
///
/// Serializes to the bare pixel count (`"1024"`, `"512"`, ...) as the API
/// expects. The default is the largest size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    #[default]
    S1024,
    S512,
    S256,
    S128,
    S64,
    S32,
    S16,
}

impl Size {
    /// All sizes the API accepts, largest first.
    pub const ALL: [Size; 7] = [
        Size::S1024,
        Size::S512,
        Size::S256,
        Size::S128,
        Size::S64,
        Size::S32,
        Size::S16,
    ];

    /// The query-parameter token for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::S1024 => "1024",
            Size::S512 => "512",
            Size::S256 => "256",
            Size::S128 => "128",
            Size::S64 => "64",
            Size::S32 => "32",
            Size::S16 => "16",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named visual style applied to generated images.
///
/// Used both as a filter on search/random requests and as a field in
/// returned metadata. Serde round-trips the variant name verbatim
/// (`"NewYear"`, not `"new_year"`), matching the API's wire tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Default,
    Spring,
    Summer,
    Autumn,
    Winter,
    Halloween,
    Xmas,
    NewYear,
    Easter,
}

impl Theme {
    /// The query-parameter token for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Spring => "Spring",
            Theme::Summer => "Summer",
            Theme::Autumn => "Autumn",
            Theme::Winter => "Winter",
            Theme::Halloween => "Halloween",
            Theme::Xmas => "Xmas",
            Theme::NewYear => "NewYear",
            Theme::Easter => "Easter",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to one image in the catalog, as returned by search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque identifier assigned by the service (UUID-like).
    pub id: String,
    /// Fully-qualified link to the underlying image.
    pub url: String,
}

/// Descriptive metadata for one image, fetched by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatInfo {
    pub id: String,
    /// Creation time in unix-epoch milliseconds.
    #[serde(rename = "dateCreated")]
    pub date_created: i64,
    /// The prompt the image was generated from.
    pub prompt: String,
    pub theme: Theme,
}

/// Output shape requested for an image download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Raw bytes tagged with their MIME type.
    #[default]
    Blob,
    /// Raw bytes with no type information.
    ArrayBuffer,
    /// Standard base64 text, padded, no line breaks.
    Base64,
    /// A `data:image/jpeg;base64,...` URL.
    DataUrl,
}

/// An image payload in the representation the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageData {
    Blob { mime_type: String, bytes: Vec<u8> },
    ArrayBuffer(Vec<u8>),
    Base64(String),
    DataUrl(String),
}

impl ImageData {
    /// Convert a raw response body into the requested shape.
    ///
    /// Base64 output is byte-exact: decoding it reproduces the input.
    pub fn shape(bytes: Vec<u8>, kind: ResponseType) -> Self {
        match kind {
            ResponseType::Blob => ImageData::Blob {
                mime_type: JPEG_MIME.to_string(),
                bytes,
            },
            ResponseType::ArrayBuffer => ImageData::ArrayBuffer(bytes),
            ResponseType::Base64 => ImageData::Base64(STANDARD.encode(&bytes)),
            ResponseType::DataUrl => ImageData::DataUrl(format!(
                "data:{};base64,{}",
                JPEG_MIME,
                STANDARD.encode(&bytes)
            )),
        }
    }

    /// Borrow the raw bytes, if this shape carries them unencoded.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ImageData::Blob { bytes, .. } => Some(bytes),
            ImageData::ArrayBuffer(bytes) => Some(bytes),
            ImageData::Base64(_) | ImageData::DataUrl(_) => None,
        }
    }

    /// Recover the raw bytes from any shape, decoding base64 where needed.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            ImageData::Blob { bytes, .. } => Ok(bytes),
            ImageData::ArrayBuffer(bytes) => Ok(bytes),
            ImageData::Base64(text) => STANDARD
                .decode(&text)
                .map_err(|e| CatsError::InvalidResponse(format!("invalid base64 image: {e}"))),
            ImageData::DataUrl(url) => {
                let b64 = url.split_once("base64,").map(|(_, rest)| rest).ok_or_else(|| {
                    CatsError::InvalidResponse("data URL missing base64 payload".to_string())
                })?;
                STANDARD
                    .decode(b64)
                    .map_err(|e| CatsError::InvalidResponse(format!("invalid data URL: {e}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens() {
        assert_eq!(Size::S1024.as_str(), "1024");
        assert_eq!(Size::S16.as_str(), "16");
        assert_eq!(Size::default(), Size::S1024);
        let tokens: Vec<_> = Size::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(tokens, ["1024", "512", "256", "128", "64", "32", "16"]);
    }

    #[test]
    fn test_theme_wire_tokens() {
        assert_eq!(Theme::NewYear.as_str(), "NewYear");
        let json = serde_json::to_string(&Theme::NewYear).unwrap();
        assert_eq!(json, "\"NewYear\"");
        let back: Theme = serde_json::from_str("\"Halloween\"").unwrap();
        assert_eq!(back, Theme::Halloween);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result: std::result::Result<Theme, _> = serde_json::from_str("\"Summerween\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_cat_info_parses_date_created() {
        let info: CatInfo = serde_json::from_str(
            r#"{
                "id": "3a7c9f2e-1b4d-4e8a-9c6f-d5e2a8b71c90",
                "dateCreated": 1714000000000,
                "prompt": "a cat wearing a pumpkin hat",
                "theme": "Halloween"
            }"#,
        )
        .unwrap();
        assert_eq!(info.date_created, 1714000000000);
        assert_eq!(info.theme, Theme::Halloween);
    }

    #[test]
    fn test_blob_is_default_shape() {
        let shaped = ImageData::shape(vec![0xFF, 0xD8, 0xFF], ResponseType::default());
        match shaped {
            ImageData::Blob { mime_type, bytes } => {
                assert_eq!(mime_type, "image/jpeg");
                assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
            }
            other => panic!("expected Blob, got {:?}", other),
        }
    }

    #[test]
    fn test_base64_round_trip() {
        let original: Vec<u8> = (0..=255).collect();
        let shaped = ImageData::shape(original.clone(), ResponseType::Base64);
        let ImageData::Base64(text) = &shaped else {
            panic!("expected Base64");
        };
        assert!(!text.contains('\n'));
        assert_eq!(shaped.into_bytes().unwrap(), original);
    }

    #[test]
    fn test_data_url_round_trip() {
        let original = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let shaped = ImageData::shape(original.clone(), ResponseType::DataUrl);
        let ImageData::DataUrl(url) = &shaped else {
            panic!("expected DataUrl");
        };
        assert!(url.starts_with("data:image/jpeg;base64,"));
        let b64 = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(STANDARD.decode(b64).unwrap(), original);
        assert_eq!(shaped.into_bytes().unwrap(), original);
    }

    #[test]
    fn test_as_bytes_only_for_binary_shapes() {
        let raw = vec![1, 2, 3];
        assert!(ImageData::shape(raw.clone(), ResponseType::ArrayBuffer)
            .as_bytes()
            .is_some());
        assert!(ImageData::shape(raw, ResponseType::Base64)
            .as_bytes()
            .is_none());
    }
}
