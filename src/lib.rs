//! # NDEF codec
//!
//! This crate is a codec for NFC Data Exchange Format (NDEF) messages:
//! the record streams exchanged with NFC tags and peers, and the TLV
//! container wrapping them in NFC Forum Type-2-Tag memory.
//!
//! ## Features
//! - **NDEF message** parsing into reference-counted, immutable records.
//! - **Type-2-Tag TLV** scanning, with multi-message ingestion.
//! - **Well-known record types**: URI, Text and Smart Poster records are
//!   decoded into typed variants and can be built programmatically.
//!
//! Parsing is best effort where the format allows it: a well-known record
//! whose typed decode fails is kept as a generic record, and a broken
//! message inside a TLV sequence is skipped without failing the rest.
//! A malformed or chunked record inside a single message rejects that
//! whole message.
//!
//! ## Example Usage
//!
//! Decoding a URI record read from a tag:
//!
//! ```ignore
//! use nfcdef::{parse_tlv, RecordInfo};
//!
//! let records = parse_tlv(&tag_memory);
//! for record in &records {
//!     if let RecordInfo::Uri(uri) = record.info() {
//!         println!("{}", uri.uri());
//!     }
//! }
//! ```
//!
//! Building a Smart Poster:
//!
//! ```ignore
//! use nfcdef::{Action, SmartPoster};
//!
//! let record = SmartPoster::new("https://www.sailfishos.org")
//!     .title("Sailfish OS")
//!     .lang("en")
//!     .action(Action::Open)
//!     .build()?;
//! let bytes = record.raw();
//! ```
//!
//! ## Concurrency
//!
//! Every call is synchronous and CPU bound, operating on caller-provided
//! buffers; outputs own their bytes. The only shared state is the
//! [`SystemLocale`] hook consulted during Smart Poster decoding, which
//! callers parsing concurrently must keep re-entrant.

pub mod locale;
pub mod mediatype;
pub mod record;
pub mod tlv;

pub use locale::{EnvLocale, SystemLocale};
pub use mediatype::valid_mediatype;
pub use record::smart_poster::{
    Action, Media, SmartPoster, SmartPosterError, SmartPosterRecord,
};
pub use record::text::{TextEncoding, TextError, TextRecord};
pub use record::uri::{UriError, UriRecord};
pub use record::{
    encode_message, NdefRecord, RecordError, RecordFlags, RecordHeader, RecordInfo, Rtd,
    TypeNameFormat,
};

use bytes::Bytes;
use log::debug;

/// Parses a contiguous NDEF message into its records, using the ambient
/// [`EnvLocale`] for Smart Poster title selection.
pub fn parse_message(bytes: &[u8]) -> Result<Vec<NdefRecord>, RecordError> {
    parse_message_with(bytes, &EnvLocale)
}

/// Parses a contiguous NDEF message with an explicit locale hook.
pub fn parse_message_with(
    bytes: &[u8],
    locale: &dyn SystemLocale,
) -> Result<Vec<NdefRecord>, RecordError> {
    NdefRecord::parse_message(Bytes::copy_from_slice(bytes), locale)
}

/// Scans a Type-2-Tag region and parses every NDEF-message TLV found,
/// concatenating the record lists.
///
/// A message that fails to parse is skipped; the scan continues with the
/// next TLV. The terminator ends the scan.
pub fn parse_tlv(bytes: &[u8]) -> Vec<NdefRecord> {
    parse_tlv_with(bytes, &EnvLocale)
}

/// [`parse_tlv`] with an explicit locale hook.
pub fn parse_tlv_with(bytes: &[u8], locale: &dyn SystemLocale) -> Vec<NdefRecord> {
    let mut records = Vec::new();
    for block in tlv::TlvIter::new(bytes) {
        let block = match block {
            Ok(block) => block,
            Err(err) => {
                debug!("giving up on TLV sequence: {err}");
                break;
            }
        };
        if block.tag != tlv::Tag::NdefMessage as u8 {
            continue;
        }
        match parse_message_with(block.value, locale) {
            Ok(parsed) => records.extend(parsed),
            Err(err) => debug!("skipping unparseable NDEF message: {err}"),
        }
    }
    records
}
