//! URI records, well-known type `"U"`.
//!
//! The payload is a one-byte abbreviation index followed by the UTF-8
//! remainder of the URI. The index selects a well-known prefix; index 0
//! means no abbreviation.

use thiserror::Error;

use crate::record::{NdefRecord, RecordError, RecordInfo, Rtd};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("URI payload is empty")]
    EmptyPayload,
    #[error("URI abbreviation 0x{0:02x} is out of range")]
    BadAbbreviation(u8),
    #[error("URI suffix is not valid UTF-8")]
    InvalidUtf8,
    #[error("URI is empty")]
    EmptyUri,
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Abbreviation table from the NFC Forum URI RTD. The payload index byte
/// selects the prefix; anything past the end of the table is reserved.
const PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// A decoded URI record: the fully expanded URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UriRecord {
    uri: String,
}

impl UriRecord {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Expands the abbreviated payload into the full URI.
    ///
    /// Fails on an empty payload, an abbreviation index past the table,
    /// a non-UTF-8 suffix, or an expansion that comes out empty (index 0
    /// with no suffix).
    pub(crate) fn decode(payload: &[u8]) -> Result<Self, UriError> {
        let (&index, suffix) = payload.split_first().ok_or(UriError::EmptyPayload)?;
        let prefix = *PREFIXES
            .get(usize::from(index))
            .ok_or(UriError::BadAbbreviation(index))?;
        let suffix = std::str::from_utf8(suffix).map_err(|_| UriError::InvalidUtf8)?;
        if prefix.is_empty() && suffix.is_empty() {
            return Err(UriError::EmptyUri);
        }
        Ok(UriRecord { uri: format!("{prefix}{suffix}") })
    }

    /// Abbreviates the URI: the longest matching prefix's index byte,
    /// then the remainder.
    fn encode(uri: &str) -> Vec<u8> {
        let mut best = 0;
        for (index, prefix) in PREFIXES.iter().enumerate().skip(1) {
            if prefix.len() > PREFIXES[best].len() && uri.starts_with(prefix) {
                best = index;
            }
        }
        let suffix = &uri[PREFIXES[best].len()..];
        let mut payload = Vec::with_capacity(1 + suffix.len());
        payload.push(best as u8);
        payload.extend_from_slice(suffix.as_bytes());
        payload
    }
}

impl NdefRecord {
    /// Builds a well-known `"U"` record from a full URI.
    pub fn new_uri(uri: &str) -> Result<Self, UriError> {
        if uri.is_empty() {
            return Err(UriError::EmptyUri);
        }
        let payload = UriRecord::encode(uri);
        let info = RecordInfo::Uri(UriRecord { uri: uri.to_owned() });
        Ok(NdefRecord::new_well_known(Rtd::Uri, b"U", &payload, info)?)
    }
}
