/// Encoding and newline preservation
///
/// Localized string tables ship with a UTF-8 byte order mark and some excel
/// tables use CRLF line endings; both are detected on read and reproduced on
/// write so the game sees files shaped like its own.
use crate::formats::FormatError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf8Bom,
    Latin1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    Crlf,
}

impl Newline {
    pub fn detect(content: &[u8]) -> Self {
        if content.windows(2).any(|window| window == b"\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl Encoding {
    pub fn detect(content: &[u8]) -> Self {
        if content.starts_with(&UTF8_BOM) {
            Self::Utf8Bom
        } else if std::str::from_utf8(content).is_ok() {
            Self::Utf8
        } else {
            Self::Latin1
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String, FormatError> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| FormatError::EncodingError(e.to_string())),
            Self::Utf8Bom => {
                let content = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
                String::from_utf8(content.to_vec())
                    .map_err(|e| FormatError::EncodingError(e.to_string()))
            }
            // Bytes 0x80..=0xFF map to U+0080..=U+00FF.
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    pub fn encode(self, text: &str) -> Result<Vec<u8>, FormatError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf8Bom => {
                let mut bytes = UTF8_BOM.to_vec();
                bytes.extend_from_slice(text.as_bytes());
                Ok(bytes)
            }
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        FormatError::EncodingError(format!("{c:?} cannot be written as Latin-1"))
                    })
                })
                .collect(),
        }
    }
}

/// Decode raw file bytes, returning the text and the encoding to write it back with.
pub fn read_text(bytes: &[u8]) -> Result<(String, Encoding), FormatError> {
    let encoding = Encoding::detect(bytes);
    Ok((encoding.decode(bytes)?, encoding))
}
