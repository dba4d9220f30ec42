//! NDEF record decoding and encoding.
//!
//! An NDEF message is a contiguous run of records. Each record starts
//! with a header byte (message boundary flags, short-record and id-length
//! flags, and the three-bit Type Name Format), followed by the type,
//! payload and optional id lengths, and then the type, id and payload
//! bytes themselves.
//!
//! [`NdefRecord`] keeps the exact encoded form of a record in a
//! reference-counted buffer and exposes the type, id and payload fields
//! as sub-slices of it. Well-known record types are promoted to typed
//! variants on decode; see [`RecordInfo`].

use bitflags::bitflags;
use bytes::Bytes;
use log::debug;
use packed_struct::prelude::*;
use thiserror::Error;

use crate::locale::SystemLocale;
use crate::mediatype::valid_mediatype;
use crate::record::smart_poster::SmartPosterRecord;
use crate::record::text::TextRecord;
use crate::record::uri::UriRecord;

pub mod smart_poster;
pub mod text;
pub mod uri;

/// Record decode and build errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record header or declared lengths run past the end of the buffer")]
    Truncated,
    #[error("chunked records are not supported")]
    Chunked,
    #[error("invalid record header")]
    InvalidHeader,
    #[error("record type is too long, maximum length is 255 bytes")]
    TypeTooLong,
    #[error("record id is too long, maximum length is 255 bytes")]
    IdTooLong,
    #[error("record payload is too long, maximum length is 4 GB")]
    PayloadTooLong,
    #[error("{0:?} is not a valid media type")]
    InvalidMediatype(String),
}

/// Type Name Format field, the low three bits of the record header.
#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeNameFormat {
    Empty = 0x00,
    WellKnown = 0x01,
    MediaType = 0x02,
    AbsoluteUri = 0x03,
    External = 0x04,
    Unknown = 0x05,
    Unchanged = 0x06,
    /// Reserved by the NFC Forum. Remapped to [`TypeNameFormat::Empty`]
    /// during decode; never present on a parsed record.
    Reserved = 0x07,
}

/// Well-known record type discriminant, derived from TNF=WellKnown plus
/// the exact type bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rtd {
    Unknown,
    /// `"U"`
    Uri,
    /// `"T"`
    Text,
    /// `"Sp"`
    SmartPoster,
}

impl Rtd {
    fn classify(tnf: TypeNameFormat, record_type: &[u8]) -> Self {
        if tnf != TypeNameFormat::WellKnown {
            return Rtd::Unknown;
        }
        match record_type {
            b"U" => Rtd::Uri,
            b"T" => Rtd::Text,
            b"Sp" => Rtd::SmartPoster,
            _ => Rtd::Unknown,
        }
    }
}

bitflags! {
    /// Position of a record within its message.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RecordFlags: u8 {
        const FIRST = 1 << 0;
        const LAST = 1 << 1;
    }
}

/// NDEF record header byte
#[derive(PackedStruct, Clone, Debug, PartialEq)]
#[packed_struct(size_bytes = "1", bit_numbering = "lsb0")]
pub struct RecordHeader {
    /// Type Name Format field that defines how to interpret the type field
    #[packed_field(bits = "0..3", ty = "enum")]
    pub tnf: TypeNameFormat,
    /// Indicates whether the record contains an id field
    #[packed_field(bits = "3")]
    pub id_present: bool,
    /// The Short Record (SR) flag selects a one-byte payload length
    /// instead of the four-byte big-endian form.
    #[packed_field(bits = "4")]
    pub short: bool,
    /// The Chunk Flag marks a partial record. Chunked records are
    /// rejected by this codec.
    #[packed_field(bits = "5")]
    pub chunk: bool,
    /// The Message End flag marks the last record of a message.
    #[packed_field(bits = "6")]
    pub message_end: bool,
    /// The Message Begin flag marks the first record of a message.
    #[packed_field(bits = "7")]
    pub message_begin: bool,
}

const MB_FLAG: u8 = 0x80;
const ME_FLAG: u8 = 0x40;

/// Typed view of a record, produced by variant promotion during decode.
///
/// Promotion is best effort: a well-known record whose typed decode fails
/// stays [`RecordInfo::Generic`] with the raw bytes intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordInfo {
    Generic,
    Uri(UriRecord),
    Text(TextRecord),
    SmartPoster(SmartPosterRecord),
}

/// A single NDEF record.
///
/// Owns a reference-counted copy of its exact encoded form; the type, id
/// and payload accessors return disjoint sub-slices of it. Records are
/// immutable once constructed and cheap to clone.
///
/// Equality is structural: two records compare equal when their TNF,
/// type, id, payload, position flags and typed view match, regardless of
/// the message boundary bits in the raw header.
#[derive(Clone, Debug)]
pub struct NdefRecord {
    tnf: TypeNameFormat,
    rtd: Rtd,
    flags: RecordFlags,
    raw: Bytes,
    type_off: usize,
    type_len: usize,
    id_off: usize,
    id_len: usize,
    payload_off: usize,
    payload_len: usize,
    info: RecordInfo,
}

impl PartialEq for NdefRecord {
    fn eq(&self, other: &Self) -> bool {
        self.tnf == other.tnf
            && self.rtd == other.rtd
            && self.flags == other.flags
            && self.record_type() == other.record_type()
            && self.id() == other.id()
            && self.payload() == other.payload()
            && self.info == other.info
    }
}

impl Eq for NdefRecord {}

impl NdefRecord {
    pub fn tnf(&self) -> TypeNameFormat {
        self.tnf
    }

    pub fn rtd(&self) -> Rtd {
        self.rtd
    }

    pub fn flags(&self) -> RecordFlags {
        self.flags
    }

    pub fn info(&self) -> &RecordInfo {
        &self.info
    }

    /// The exact encoded form of this record.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The record type bytes, e.g. `b"U"` or a media type.
    pub fn record_type(&self) -> &[u8] {
        &self.raw[self.type_off..self.type_off + self.type_len]
    }

    /// The record id; empty when the IL flag was clear.
    pub fn id(&self) -> &[u8] {
        &self.raw[self.id_off..self.id_off + self.id_len]
    }

    pub fn payload(&self) -> &[u8] {
        &self.raw[self.payload_off..self.payload_off + self.payload_len]
    }

    /// The payload as a sub-slice sharing this record's buffer.
    pub fn payload_bytes(&self) -> Bytes {
        self.raw.slice(self.payload_off..self.payload_off + self.payload_len)
    }

    pub fn as_uri(&self) -> Option<&UriRecord> {
        match &self.info {
            RecordInfo::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextRecord> {
        match &self.info {
            RecordInfo::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_smart_poster(&self) -> Option<&SmartPosterRecord> {
        match &self.info {
            RecordInfo::SmartPoster(sp) => Some(sp),
            _ => None,
        }
    }

    /// The empty-NDEF special case: a record with nothing in it.
    fn empty() -> Self {
        NdefRecord {
            tnf: TypeNameFormat::Empty,
            rtd: Rtd::Unknown,
            flags: RecordFlags::empty(),
            raw: Bytes::new(),
            type_off: 0,
            type_len: 0,
            id_off: 0,
            id_len: 0,
            payload_off: 0,
            payload_len: 0,
            info: RecordInfo::Generic,
        }
    }

    /// Decodes the record starting at `start`, without variant promotion.
    /// Returns the record and the offset of the byte following it.
    fn decode_raw(msg: &Bytes, start: usize) -> Result<(Self, usize), RecordError> {
        // Header byte, type length and a short payload length at minimum.
        if msg.len() < start + 3 {
            return Err(RecordError::Truncated);
        }
        let header =
            RecordHeader::unpack(&[msg[start]]).map_err(|_| RecordError::InvalidHeader)?;
        if header.chunk {
            return Err(RecordError::Chunked);
        }

        let type_len = usize::from(msg[start + 1]);
        let mut off = start + 2;
        let payload_len = if header.short {
            let len = usize::from(msg[off]);
            off += 1;
            len
        } else {
            if msg.len() < off + 4 {
                return Err(RecordError::Truncated);
            }
            let mut len_bytes = [0u8; 4];
            len_bytes.copy_from_slice(&msg[off..off + 4]);
            off += 4;
            u32::from_be_bytes(len_bytes) as usize
        };
        let id_len = if header.id_present {
            if msg.len() <= off {
                return Err(RecordError::Truncated);
            }
            let len = usize::from(msg[off]);
            off += 1;
            len
        } else {
            0
        };

        let type_off = off;
        let id_off = type_off + type_len;
        let payload_off = id_off + id_len;
        let end = payload_off.checked_add(payload_len).ok_or(RecordError::Truncated)?;
        if end > msg.len() {
            return Err(RecordError::Truncated);
        }

        // Reserved TNF is tolerated: the record is kept as an empty one.
        let tnf = match header.tnf {
            TypeNameFormat::Reserved => TypeNameFormat::Empty,
            tnf => tnf,
        };
        let record = NdefRecord {
            tnf,
            rtd: Rtd::classify(tnf, &msg[type_off..id_off]),
            flags: RecordFlags::empty(),
            raw: msg.slice(start..end),
            type_off: type_off - start,
            type_len,
            id_off: id_off - start,
            id_len,
            payload_off: payload_off - start,
            payload_len,
            info: RecordInfo::Generic,
        };
        Ok((record, end))
    }

    /// Attempts to promote a raw well-known record to its typed variant.
    /// Failure is not an error; the record stays generic.
    fn promote(mut self, locale: &dyn SystemLocale) -> Self {
        self.info = match self.rtd {
            Rtd::Uri => match UriRecord::decode(self.payload()) {
                Ok(uri) => RecordInfo::Uri(uri),
                Err(err) => {
                    debug!("not a URI record: {err}");
                    RecordInfo::Generic
                }
            },
            Rtd::Text => match TextRecord::decode(self.payload()) {
                Ok(text) => RecordInfo::Text(text),
                Err(err) => {
                    debug!("not a Text record: {err}");
                    RecordInfo::Generic
                }
            },
            Rtd::SmartPoster => match SmartPosterRecord::decode(self.payload_bytes(), locale) {
                Ok(sp) => RecordInfo::SmartPoster(sp),
                Err(err) => {
                    debug!("not a Smart Poster record: {err}");
                    RecordInfo::Generic
                }
            },
            Rtd::Unknown => RecordInfo::Generic,
        };
        self
    }

    /// Parses a complete NDEF message into its records, in order.
    ///
    /// An empty region is the empty-NDEF special case and yields a single
    /// record with TNF=Empty. Any mid-stream failure, including a chunked
    /// record, rejects the whole message.
    pub(crate) fn parse_message(
        msg: Bytes,
        locale: &dyn SystemLocale,
    ) -> Result<Vec<NdefRecord>, RecordError> {
        let mut records = Vec::new();
        if msg.is_empty() {
            records.push(NdefRecord::empty());
        } else {
            let mut pos = 0;
            while pos < msg.len() {
                let (record, next) = NdefRecord::decode_raw(&msg, pos)?;
                records.push(record.promote(locale));
                pos = next;
            }
        }
        if let Some(first) = records.first_mut() {
            first.flags |= RecordFlags::FIRST;
        }
        if let Some(last) = records.last_mut() {
            last.flags |= RecordFlags::LAST;
        }
        Ok(records)
    }

    /// Assembles a single record with MB and ME set. The short payload
    /// form is chosen whenever the payload fits in one length byte.
    fn build(
        tnf: TypeNameFormat,
        rtd: Rtd,
        record_type: &[u8],
        id: &[u8],
        payload: &[u8],
        info: RecordInfo,
    ) -> Result<Self, RecordError> {
        if record_type.len() > usize::from(u8::MAX) {
            return Err(RecordError::TypeTooLong);
        }
        if id.len() > usize::from(u8::MAX) {
            return Err(RecordError::IdTooLong);
        }
        let payload_len =
            u32::try_from(payload.len()).map_err(|_| RecordError::PayloadTooLong)?;
        let short = payload.len() <= usize::from(u8::MAX);
        let header = RecordHeader {
            tnf,
            id_present: !id.is_empty(),
            short,
            chunk: false,
            message_end: true,
            message_begin: true,
        };

        let mut raw = Vec::with_capacity(7 + record_type.len() + id.len() + payload.len());
        raw.push(header.pack().map_err(|_| RecordError::InvalidHeader)?[0]);
        raw.push(record_type.len() as u8);
        if short {
            raw.push(payload.len() as u8);
        } else {
            raw.extend_from_slice(&payload_len.to_be_bytes());
        }
        if !id.is_empty() {
            raw.push(id.len() as u8);
        }
        let type_off = raw.len();
        raw.extend_from_slice(record_type);
        let id_off = raw.len();
        raw.extend_from_slice(id);
        let payload_off = raw.len();
        raw.extend_from_slice(payload);

        Ok(NdefRecord {
            tnf,
            rtd,
            flags: RecordFlags::FIRST | RecordFlags::LAST,
            raw: Bytes::from(raw),
            type_off,
            type_len: record_type.len(),
            id_off,
            id_len: id.len(),
            payload_off,
            payload_len: payload.len(),
            info,
        })
    }

    pub(crate) fn new_well_known(
        rtd: Rtd,
        record_type: &[u8],
        payload: &[u8],
        info: RecordInfo,
    ) -> Result<Self, RecordError> {
        Self::build(TypeNameFormat::WellKnown, rtd, record_type, &[], payload, info)
    }

    /// Builds a TNF=MediaType record carrying an arbitrary payload.
    ///
    /// The media type must be a concrete (non-wildcard) `type/subtype`
    /// of at most 255 bytes.
    pub fn new_mediatype(mediatype: &str, payload: &[u8]) -> Result<Self, RecordError> {
        if !valid_mediatype(mediatype, false) {
            return Err(RecordError::InvalidMediatype(mediatype.to_owned()));
        }
        Self::build(
            TypeNameFormat::MediaType,
            Rtd::Unknown,
            mediatype.as_bytes(),
            &[],
            payload,
            RecordInfo::Generic,
        )
    }
}

/// Serializes a message: the records' encoded forms back to back, with
/// the Message Begin and Message End header bits patched to match each
/// record's position.
pub fn encode_message(records: &[NdefRecord]) -> Vec<u8> {
    let mut out = Vec::with_capacity(records.iter().map(|r| r.raw().len()).sum());
    let last = records.len().saturating_sub(1);
    for (index, record) in records.iter().enumerate() {
        let start = out.len();
        out.extend_from_slice(record.raw());
        if let Some(header) = out.get_mut(start) {
            let mut boundary = 0;
            if index == 0 {
                boundary |= MB_FLAG;
            }
            if index == last {
                boundary |= ME_FLAG;
            }
            *header = (*header & !(MB_FLAG | ME_FLAG)) | boundary;
        }
    }
    out
}
