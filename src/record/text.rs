//! Text records, well-known type `"T"`.
//!
//! The payload starts with a status byte: bit 7 selects UTF-16 over
//! UTF-8, bit 6 is reserved, and the low six bits give the length of the
//! ASCII language tag that follows. The rest of the payload is the text
//! itself in the declared encoding.

use packed_struct::prelude::*;
use thiserror::Error;

use crate::record::{NdefRecord, RecordError, RecordInfo, Rtd};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text payload is empty")]
    EmptyPayload,
    #[error("status byte has the reserved bit set")]
    ReservedBit,
    #[error("language tag runs past the end of the payload")]
    Truncated,
    #[error("language tag is not ASCII")]
    BadLanguageTag,
    #[error("language tag is too long, maximum length is 63 bytes")]
    LanguageTagTooLong,
    #[error("text is not valid UTF-8")]
    InvalidUtf8,
    #[error("text is not valid UTF-16")]
    InvalidUtf16,
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Text payload encoding, bit 7 of the status byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
}

/// Text record status byte
#[derive(PackedStruct, Clone, Debug, PartialEq)]
#[packed_struct(size_bytes = "1", bit_numbering = "lsb0")]
struct TextStatus {
    #[packed_field(bits = "0..6")]
    lang_len: u8,
    #[packed_field(bits = "6")]
    reserved: bool,
    #[packed_field(bits = "7")]
    utf16: bool,
}

/// A decoded Text record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRecord {
    text: String,
    lang: String,
    encoding: TextEncoding,
}

impl TextRecord {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The language tag, lowercased.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub(crate) fn decode(payload: &[u8]) -> Result<Self, TextError> {
        let (&status, rest) = payload.split_first().ok_or(TextError::EmptyPayload)?;
        let status = TextStatus::unpack(&[status]).map_err(|_| TextError::ReservedBit)?;
        if status.reserved {
            return Err(TextError::ReservedBit);
        }
        let lang_len = usize::from(status.lang_len);
        if rest.len() < lang_len {
            return Err(TextError::Truncated);
        }
        let (lang, text) = rest.split_at(lang_len);
        if !lang.is_ascii() {
            return Err(TextError::BadLanguageTag);
        }
        let lang = std::str::from_utf8(lang)
            .map_err(|_| TextError::BadLanguageTag)?
            .to_ascii_lowercase();
        let (text, encoding) = if status.utf16 {
            (decode_utf16(text)?, TextEncoding::Utf16)
        } else {
            let text = std::str::from_utf8(text).map_err(|_| TextError::InvalidUtf8)?;
            (text.to_owned(), TextEncoding::Utf8)
        };
        Ok(TextRecord { text, lang, encoding })
    }

    /// Status byte, language tag, then the text in the chosen encoding.
    pub(crate) fn encode_payload(
        text: &str,
        lang: &str,
        encoding: TextEncoding,
    ) -> Result<Vec<u8>, TextError> {
        if !lang.is_ascii() {
            return Err(TextError::BadLanguageTag);
        }
        if lang.len() > 0x3f {
            return Err(TextError::LanguageTagTooLong);
        }
        let status = TextStatus {
            lang_len: lang.len() as u8,
            reserved: false,
            utf16: encoding == TextEncoding::Utf16,
        };
        let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
        payload.push(status.pack().map_err(|_| TextError::LanguageTagTooLong)?[0]);
        payload.extend_from_slice(lang.as_bytes());
        match encoding {
            TextEncoding::Utf8 => payload.extend_from_slice(text.as_bytes()),
            TextEncoding::Utf16 => {
                for unit in text.encode_utf16() {
                    payload.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
        Ok(payload)
    }
}

/// Big-endian unless a leading byte order mark says otherwise; the BOM is
/// not part of the text.
fn decode_utf16(bytes: &[u8]) -> Result<String, TextError> {
    if bytes.len() % 2 != 0 {
        return Err(TextError::InvalidUtf16);
    }
    let (big_endian, body) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (true, rest),
        [0xFF, 0xFE, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };
    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| TextError::InvalidUtf16)
}

impl NdefRecord {
    /// Builds a well-known `"T"` record.
    ///
    /// The language tag must be non-empty ASCII of at most 63 bytes; it
    /// is kept lowercased on the decoded view, like a re-parse would
    /// produce.
    pub fn new_text(text: &str, lang: &str, encoding: TextEncoding) -> Result<Self, TextError> {
        if lang.is_empty() {
            return Err(TextError::BadLanguageTag);
        }
        let payload = TextRecord::encode_payload(text, lang, encoding)?;
        let info = RecordInfo::Text(TextRecord {
            text: text.to_owned(),
            lang: lang.to_ascii_lowercase(),
            encoding,
        });
        Ok(NdefRecord::new_well_known(Rtd::Text, b"T", &payload, info)?)
    }
}
