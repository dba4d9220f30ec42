//! Smart Poster records, well-known type `"Sp"`.
//!
//! A Smart Poster payload is itself an NDEF message. Decoding aggregates
//! the child records: exactly one URI, an optional title picked by
//! locale, and optional action, size, media type and icon children.

use bytes::Bytes;
use log::debug;
use thiserror::Error;

use crate::locale::SystemLocale;
use crate::mediatype::valid_mediatype;
use crate::record::text::{TextEncoding, TextError, TextRecord};
use crate::record::uri::UriError;
use crate::record::{encode_message, NdefRecord, RecordError, RecordInfo, Rtd, TypeNameFormat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmartPosterError {
    #[error("Smart Poster has no URI record")]
    MissingUri,
    #[error("Smart Poster has more than one URI record")]
    DuplicateUri,
    #[error("{0:?} is not a valid Smart Poster media type")]
    InvalidMediatype(String),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Uri(#[from] UriError),
    #[error(transparent)]
    Text(#[from] TextError),
}

/// Suggested handling of the Smart Poster URI, from the "act" child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// No "act" child was present.
    #[default]
    Default,
    Open,
    Save,
    Edit,
}

impl Action {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Action::Open),
            1 => Some(Action::Save),
            2 => Some(Action::Edit),
            _ => None,
        }
    }

    fn wire_value(self) -> Option<u8> {
        match self {
            Action::Default => None,
            Action::Open => Some(0),
            Action::Save => Some(1),
            Action::Edit => Some(2),
        }
    }
}

/// Icon attachment: a media type and the image or video bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Media {
    pub mediatype: String,
    pub data: Bytes,
}

/// A decoded Smart Poster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmartPosterRecord {
    uri: String,
    title: Option<String>,
    lang: Option<String>,
    mediatype: Option<String>,
    size: u32,
    act: Action,
    icon: Option<Media>,
}

impl SmartPosterRecord {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The locale-selected title, if any Text child was usable.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Language tag of the selected title.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Media type of the linked content, from the "t" child.
    pub fn mediatype(&self) -> Option<&str> {
        self.mediatype.as_deref()
    }

    /// Size of the linked content in bytes; 0 when unspecified.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn act(&self) -> Action {
        self.act
    }

    pub fn icon(&self) -> Option<&Media> {
        self.icon.as_ref()
    }

    /// Parses the payload as a child message and aggregates the children.
    ///
    /// TNF=Empty children and children whose typed decode failed are
    /// ignored. Exactly one URI child is required. For the act, size and
    /// media type children the first valid one wins and invalid ones are
    /// skipped; icons must carry an `image/` or `video/` media type and
    /// image beats video regardless of order.
    pub(crate) fn decode(
        payload: Bytes,
        locale: &dyn SystemLocale,
    ) -> Result<Self, SmartPosterError> {
        let children = NdefRecord::parse_message(payload, locale)?;

        let mut uri = None;
        let mut titles = Vec::new();
        let mut act = Action::Default;
        let mut have_act = false;
        let mut size = 0;
        let mut have_size = false;
        let mut mediatype = None;
        let mut image = None;
        let mut video = None;

        for child in &children {
            match child.tnf() {
                TypeNameFormat::WellKnown => match child.record_type() {
                    b"U" => {
                        if let RecordInfo::Uri(child_uri) = child.info() {
                            if uri.is_some() {
                                return Err(SmartPosterError::DuplicateUri);
                            }
                            uri = Some(child_uri.uri().to_owned());
                        }
                    }
                    b"T" => {
                        if let RecordInfo::Text(text) = child.info() {
                            titles.push(text);
                        }
                    }
                    b"act" => {
                        if !have_act && child.payload().len() == 1 {
                            if let Some(action) = Action::from_byte(child.payload()[0]) {
                                act = action;
                                have_act = true;
                            }
                        }
                    }
                    b"s" => {
                        if !have_size && child.payload().len() == 4 {
                            let mut len_bytes = [0u8; 4];
                            len_bytes.copy_from_slice(child.payload());
                            size = u32::from_be_bytes(len_bytes);
                            have_size = true;
                        }
                    }
                    b"t" => {
                        if mediatype.is_none() {
                            if let Ok(mtype) = std::str::from_utf8(child.payload()) {
                                if valid_mediatype(mtype, false) {
                                    mediatype = Some(mtype.to_owned());
                                }
                            }
                        }
                    }
                    other => debug!("ignoring Smart Poster child {other:02x?}"),
                },
                TypeNameFormat::MediaType => {
                    let Ok(mtype) = std::str::from_utf8(child.record_type()) else {
                        continue;
                    };
                    if !valid_mediatype(mtype, false) {
                        continue;
                    }
                    let slot = if mtype.starts_with("image/") {
                        &mut image
                    } else if mtype.starts_with("video/") {
                        &mut video
                    } else {
                        continue;
                    };
                    if slot.is_none() {
                        *slot = Some(Media {
                            mediatype: mtype.to_owned(),
                            data: child.payload_bytes(),
                        });
                    }
                }
                _ => {}
            }
        }

        let uri = uri.ok_or(SmartPosterError::MissingUri)?;
        let (title, lang) = select_title(&titles, locale);
        Ok(SmartPosterRecord {
            uri,
            title,
            lang,
            mediatype,
            size,
            act,
            icon: image.or(video),
        })
    }
}

/// Picks the title best matching the system locale: an exact language
/// match first, then a primary-subtag match, then the first candidate.
fn select_title(
    titles: &[&TextRecord],
    locale: &dyn SystemLocale,
) -> (Option<String>, Option<String>) {
    let Some(&first) = titles.first() else {
        return (None, None);
    };
    let pick = locale
        .system_locale()
        .filter(|locale| !locale.is_empty())
        .map(|locale| locale.to_ascii_lowercase())
        .and_then(|locale| {
            if let Some(&exact) = titles.iter().find(|t| t.lang() == locale.as_str()) {
                return Some(exact);
            }
            let primary = locale.split('-').next().unwrap_or_default();
            titles
                .iter()
                .find(|t| t.lang().split('-').next() == Some(primary))
                .copied()
        })
        .unwrap_or(first);
    (Some(pick.text().to_owned()), Some(pick.lang().to_owned()))
}

/// Parameters for building a Smart Poster record.
///
/// Only the URI is required. Children are emitted in a fixed order: URI,
/// title, action, size, media type, icon.
#[derive(Clone, Debug, Default)]
pub struct SmartPoster {
    uri: String,
    title: Option<String>,
    lang: Option<String>,
    mediatype: Option<String>,
    size: u32,
    act: Action,
    icon: Option<Media>,
}

impl SmartPoster {
    pub fn new(uri: impl Into<String>) -> Self {
        SmartPoster { uri: uri.into(), ..Default::default() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Language tag of the title; ignored without one.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Media type of the linked content.
    pub fn mediatype(mut self, mediatype: impl Into<String>) -> Self {
        self.mediatype = Some(mediatype.into());
        self
    }

    /// Size of the linked content in bytes; 0 means unspecified.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn action(mut self, act: Action) -> Self {
        self.act = act;
        self
    }

    /// Icon child; the media type must be `image/...` or `video/...`.
    pub fn icon(mut self, mediatype: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.icon = Some(Media { mediatype: mediatype.into(), data: data.into() });
        self
    }

    /// Encodes the children and wraps them in a well-known `"Sp"` record.
    pub fn build(self) -> Result<NdefRecord, SmartPosterError> {
        let mut children = Vec::new();
        children.push(NdefRecord::new_uri(&self.uri)?);
        let lang = self.lang.clone().unwrap_or_default();
        if let Some(title) = &self.title {
            let payload = TextRecord::encode_payload(title, &lang, TextEncoding::Utf8)?;
            children.push(NdefRecord::new_well_known(
                Rtd::Text,
                b"T",
                &payload,
                RecordInfo::Generic,
            )?);
        }
        if let Some(act) = self.act.wire_value() {
            children.push(NdefRecord::new_well_known(
                Rtd::Unknown,
                b"act",
                &[act],
                RecordInfo::Generic,
            )?);
        }
        if self.size != 0 {
            children.push(NdefRecord::new_well_known(
                Rtd::Unknown,
                b"s",
                &self.size.to_be_bytes(),
                RecordInfo::Generic,
            )?);
        }
        if let Some(mediatype) = &self.mediatype {
            if !valid_mediatype(mediatype, false) {
                return Err(SmartPosterError::InvalidMediatype(mediatype.clone()));
            }
            children.push(NdefRecord::new_well_known(
                Rtd::Unknown,
                b"t",
                mediatype.as_bytes(),
                RecordInfo::Generic,
            )?);
        }
        if let Some(icon) = &self.icon {
            if !icon.mediatype.starts_with("image/") && !icon.mediatype.starts_with("video/") {
                return Err(SmartPosterError::InvalidMediatype(icon.mediatype.clone()));
            }
            children.push(NdefRecord::new_mediatype(&icon.mediatype, &icon.data)?);
        }

        // The decoded view mirrors what a re-parse of the encoded record
        // would produce.
        let info = RecordInfo::SmartPoster(SmartPosterRecord {
            uri: self.uri,
            lang: self.title.as_ref().map(|_| lang.to_ascii_lowercase()),
            title: self.title,
            mediatype: self.mediatype,
            size: self.size,
            act: self.act,
            icon: self.icon,
        });
        NdefRecord::new_well_known(Rtd::SmartPoster, b"Sp", &encode_message(&children), info)
            .map_err(SmartPosterError::from)
    }
}

impl NdefRecord {
    /// Builds a well-known `"Sp"` record from the given parameters.
    pub fn new_smart_poster(params: SmartPoster) -> Result<Self, SmartPosterError> {
        params.build()
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use test_log::test;

    use super::{Action, SmartPoster, SmartPosterRecord};
    use crate::parse_message_with;
    use crate::record::uri::UriError;
    use crate::record::{NdefRecord, RecordInfo, Rtd};

    /// Table 4 of the Smart Poster RTD: a simple URI.
    const TABLE4: &[u8] = &hex!(
        "d1 02 12 53 70"                            // "Sp", 18 byte payload
        "d1 01 0e 55"                               // URI record
        "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67" // "http://www." nfc-forum.org
    );

    /// Table 5 of the Smart Poster RTD: URI (long form), action and two
    /// titles in different languages.
    const TABLE5: &[u8] = &hex!(
        "d1 02 49 53 70"                            // "Sp", 73 byte payload
        "81 01 00 00 00 0e 55"                      // URI record, long form
        "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
        "11 03 01 61 63 74 00"                      // act = Open
        "11 01 12 54"                               // Text record
        "05 65 6e 2d 55 53"                         // UTF-8, "en-US"
        "48 65 6c 6c 6f 2c 20 77 6f 72 6c 64"       // "Hello, world"
        "51 01 13 54"                               // Text record
        "02 66 69"                                  // UTF-8, "fi"
        "4d 6f 72 6a 65 6e 73 2c 20 6d 61 61 69 6c 6d 61" // "Morjens, maailma"
    );

    /// Table 5 extended with a Spanish title in the middle.
    const TABLE5_ES: &[u8] = &hex!(
        "d1 02 57 53 70"
        "91 01 0e 55"
        "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
        "11 03 01 61 63 74 00"
        "11 01 12 54"
        "05 65 6e 2d 55 53"
        "48 65 6c 6c 6f 2c 20 77 6f 72 6c 64"
        "11 01 0d 54"
        "02 65 73"                                  // "es"
        "48 6f 6c 61 20 4d 75 6e 64 6f"             // "Hola Mundo"
        "51 01 13 54"
        "02 66 69"
        "4d 6f 72 6a 65 6e 73 2c 20 6d 61 61 69 6c 6d 61"
    );

    const SAILFISH_URI: &[u8] = &hex!(
        "91 01 0f 55"
        "02 73 61 69 6c 66 69 73 68 6f 73 2e 6f 72 67"  // "https://www." sailfishos.org
    );

    fn decode(data: &[u8], locale: Option<&str>) -> SmartPosterRecord {
        let locale = locale.map(str::to_owned);
        let hook = move || locale.clone();
        let records = parse_message_with(data, &hook).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rtd(), Rtd::SmartPoster);
        records[0].as_smart_poster().expect("not a Smart Poster").clone()
    }

    fn decode_generic(data: &[u8]) {
        let records = parse_message_with(data, &|| None::<String>).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(*records[0].info(), RecordInfo::Generic);
    }

    /// Splices a trailing child record into the sailfishos.org poster.
    fn sailfish_poster(tail: &[u8]) -> Vec<u8> {
        let payload_len = SAILFISH_URI.len() + tail.len();
        let mut data = vec![0xd1, 0x02, payload_len as u8, b'S', b'p'];
        data.extend_from_slice(SAILFISH_URI);
        data.extend_from_slice(tail);
        data
    }

    #[test]
    fn test_table4() {
        let sp = decode(TABLE4, None);
        assert_eq!(sp.uri(), "http://www.nfc-forum.org");
        assert_eq!(sp.title(), None);
        assert_eq!(sp.lang(), None);
        assert_eq!(sp.act(), Action::Default);
        assert_eq!(sp.size(), 0);
        assert_eq!(sp.mediatype(), None);
        assert!(sp.icon().is_none());
    }

    #[test]
    fn test_table5_no_locale() {
        let sp = decode(TABLE5, None);
        assert_eq!(sp.uri(), "http://www.nfc-forum.org");
        assert_eq!(sp.act(), Action::Open);
        // No locale: the first candidate wins.
        assert_eq!(sp.title(), Some("Hello, world"));
        assert_eq!(sp.lang(), Some("en-us"));
    }

    #[test]
    fn test_table5_primary_subtag_match() {
        let sp = decode(TABLE5, Some("en"));
        assert_eq!(sp.title(), Some("Hello, world"));
        assert_eq!(sp.lang(), Some("en-us"));
        let sp = decode(TABLE5, Some("en-GB"));
        assert_eq!(sp.title(), Some("Hello, world"));
    }

    #[test]
    fn test_table5_exact_match() {
        let sp = decode(TABLE5, Some("fi"));
        assert_eq!(sp.title(), Some("Morjens, maailma"));
        assert_eq!(sp.lang(), Some("fi"));
    }

    #[test]
    fn test_exact_match_beats_earlier_candidates() {
        let sp = decode(TABLE5_ES, Some("es"));
        assert_eq!(sp.title(), Some("Hola Mundo"));
        assert_eq!(sp.lang(), Some("es"));
    }

    #[test]
    fn test_unknown_child_ignored() {
        // A well-known 'x' child carries nothing we know about.
        let data = sailfish_poster(&hex!("51 01 00 78"));
        let sp = decode(&data, None);
        assert_eq!(sp.uri(), "https://www.sailfishos.org");
        assert_eq!(sp.title(), None);
    }

    #[test]
    fn test_empty_child_ignored() {
        let data = sailfish_poster(&hex!("50 00 00"));
        let sp = decode(&data, None);
        assert_eq!(sp.uri(), "https://www.sailfishos.org");
    }

    #[test]
    fn test_bad_icon_types_ignored() {
        // Not a media type at all.
        let sp = decode(&sailfish_poster(&hex!("52 03 00 66 6f 6f")), None);
        assert!(sp.icon().is_none());
        // A separator in the type token.
        let sp = decode(&sailfish_poster(&hex!("52 01 03 20 62 61 72")), None);
        assert!(sp.icon().is_none());
        // Valid media type but neither image nor video.
        let sp = decode(
            &sailfish_poster(&hex!("52 07 03 66 6f 6f 2f 62 61 72 66 6f 6f")),
            None,
        );
        assert!(sp.icon().is_none());
    }

    #[test]
    fn test_icon_image() {
        let tail = hex!("52 09 03 69 6d 61 67 65 2f 66 6f 6f 66 6f 6f");
        let sp = decode(&sailfish_poster(&tail), None);
        let icon = sp.icon().unwrap();
        assert_eq!(icon.mediatype, "image/foo");
        assert_eq!(&icon.data[..], b"foo");
    }

    #[test]
    fn test_icon_video() {
        let tail = hex!("52 09 03 76 69 64 65 6f 2f 66 6f 6f 66 6f 6f");
        let sp = decode(&sailfish_poster(&tail), None);
        assert_eq!(sp.icon().unwrap().mediatype, "video/foo");
    }

    #[test]
    fn test_icon_image_beats_video() {
        let tail = hex!(
            "12 09 03 69 6d 61 67 65 2f 66 6f 6f 66 6f 6f"
            "52 09 03 76 69 64 65 6f 2f 66 6f 6f 66 6f 6f"
        );
        let sp = decode(&sailfish_poster(&tail), None);
        assert_eq!(sp.icon().unwrap().mediatype, "image/foo");
    }

    #[test]
    fn test_size_child() {
        let data = hex!(
            "d1 02 29 53 70"
            "91 01 0e 55"
            "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
            "11 01 03 73 01 02 03"        // 3 byte payload, invalid
            "11 01 04 73 01 02 03 04"     // first valid "s" wins
            "51 01 04 73 00 01 02 03"     // ignored
        );
        let sp = decode(&data, None);
        assert_eq!(sp.size(), 0x01020304);
    }

    #[test]
    fn test_actions() {
        let act = |tail: &[u8]| {
            let data = hex!(
                "91 01 0e 55"
                "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
            );
            let mut msg = vec![0xd1, 0x02, (data.len() + tail.len()) as u8, b'S', b'p'];
            msg.extend_from_slice(&data);
            msg.extend_from_slice(tail);
            decode(&msg, None).act()
        };
        assert_eq!(act(&hex!("51 03 01 61 63 74 01")), Action::Save);
        assert_eq!(act(&hex!("51 03 01 61 63 74 02")), Action::Edit);
        // The first valid action wins.
        assert_eq!(
            act(&hex!("11 03 01 61 63 74 01" "51 03 01 61 63 74 02")),
            Action::Save
        );
        // Out-of-range value and wrong payload length are ignored.
        assert_eq!(act(&hex!("51 03 01 61 63 74 03")), Action::Default);
        assert_eq!(act(&hex!("51 03 02 61 63 74 00 01")), Action::Default);
    }

    #[test]
    fn test_type_child() {
        let data = hex!(
            "d1 02 2d 53 70"
            "91 01 0e 55"
            "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
            "11 01 01 74 20"                    // " ", not a media type
            "11 01 07 74 66 6f 6f 2f 62 61 72"  // "foo/bar", first valid wins
            "51 01 07 74 62 61 72 2f 66 6f 6f"  // ignored
        );
        let sp = decode(&data, None);
        assert_eq!(sp.mediatype(), Some("foo/bar"));
    }

    #[test]
    fn test_no_uri_child_fails() {
        decode_generic(&hex!("d1 02 04 53 70" "d1 01 00 78"));
    }

    #[test]
    fn test_two_uri_children_fail() {
        decode_generic(&hex!(
            "d1 02 25 53 70"
            "91 01 0f 55"
            "02 73 61 69 6c 66 69 73 68 6f 73 2e 6f 72 67"
            "51 01 0e 55"
            "01 6e 66 63 2d 66 6f 72 75 6d 2e 6f 72 67"
        ));
    }

    #[test]
    fn test_build_minimal() {
        let rec = SmartPoster::new("http://www.nfc-forum.org").build().unwrap();
        assert_eq!(rec.rtd(), Rtd::SmartPoster);
        assert_eq!(rec.record_type(), b"Sp");
        let reparsed = parse_message_with(rec.raw(), &|| None::<String>).unwrap();
        assert_eq!(reparsed[0], rec);
        let sp = reparsed[0].as_smart_poster().unwrap();
        assert_eq!(sp.uri(), "http://www.nfc-forum.org");
        assert_eq!(sp.act(), Action::Default);
        assert_eq!(sp.size(), 0);
    }

    #[test]
    fn test_build_full() {
        let rec = SmartPoster::new("https://www.sailfishos.org")
            .title("Hello, world")
            .lang("en-US")
            .action(Action::Open)
            .size(0x01020304)
            .mediatype("text/html")
            .icon("image/foo", &b"foo"[..])
            .build()
            .unwrap();
        let reparsed = parse_message_with(rec.raw(), &|| None::<String>).unwrap();
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0], rec);
        let sp = reparsed[0].as_smart_poster().unwrap();
        assert_eq!(sp.uri(), "https://www.sailfishos.org");
        assert_eq!(sp.title(), Some("Hello, world"));
        assert_eq!(sp.lang(), Some("en-us"));
        assert_eq!(sp.act(), Action::Open);
        assert_eq!(sp.size(), 0x01020304);
        assert_eq!(sp.mediatype(), Some("text/html"));
        assert_eq!(sp.icon().unwrap().mediatype, "image/foo");
        assert_eq!(&sp.icon().unwrap().data[..], b"foo");
    }

    #[test]
    fn test_build_localized_title() {
        let rec = SmartPoster::new("http://www.nfc-forum.org")
            .title("Morjens, maailma")
            .lang("fi")
            .action(Action::Open)
            .build()
            .unwrap();
        let locale = || Some("fi".to_string());
        let reparsed = parse_message_with(rec.raw(), &locale).unwrap();
        let sp = reparsed[0].as_smart_poster().unwrap();
        assert_eq!(sp.title(), Some("Morjens, maailma"));
        assert_eq!(sp.lang(), Some("fi"));
    }

    #[test]
    fn test_build_errors() {
        assert_eq!(
            SmartPoster::new("").build(),
            Err(super::SmartPosterError::Uri(UriError::EmptyUri))
        );
        assert!(matches!(
            SmartPoster::new("http://x.org").mediatype("image/*").build(),
            Err(super::SmartPosterError::InvalidMediatype(_))
        ));
        assert!(matches!(
            SmartPoster::new("http://x.org").icon("foo/bar", &b"x"[..]).build(),
            Err(super::SmartPosterError::InvalidMediatype(_))
        ));
    }

    #[test]
    fn test_locale_hook_called_at_most_once() {
        use std::cell::Cell;
        let calls = Cell::new(0u32);
        let hook = || {
            calls.set(calls.get() + 1);
            Some("fi".to_string())
        };
        parse_message_with(TABLE5, &hook).unwrap();
        assert_eq!(calls.get(), 1);
        // No title candidates: the hook is not consulted at all.
        calls.set(0);
        parse_message_with(TABLE4, &hook).unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_nested_smart_poster_children() {
        // A Smart Poster may nest another one; the inner poster is just
        // an unknown child for aggregation purposes.
        let inner = SmartPoster::new("tel:+123456").build().unwrap();
        let mut children = vec![NdefRecord::new_uri("http://www.nfc-forum.org").unwrap()];
        children.push(inner);
        let payload = crate::encode_message(&children);
        let mut data = vec![0xd1, 0x02, payload.len() as u8, b'S', b'p'];
        data.extend_from_slice(&payload);
        let sp = decode(&data, None);
        assert_eq!(sp.uri(), "http://www.nfc-forum.org");
    }
}
