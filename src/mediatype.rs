//! Media type validation.
//!
//! NDEF uses RFC 2045 style media types in two places: the type field of
//! TNF=MediaType records and the payload of a Smart Poster "t" child.

/// Checks `s` against the `type "/" subtype` grammar.
///
/// Each token is a non-empty run of printable US-ASCII characters
/// excluding the separators `()<>@,;:\"/[]?=`. With `allow_wildcard`, `*`
/// is additionally accepted as the subtype or as both tokens; without it
/// any `*` is rejected. A wildcard type with a concrete subtype (`*/bar`)
/// is never valid.
pub fn valid_mediatype(s: &str, allow_wildcard: bool) -> bool {
    let Some((mtype, subtype)) = s.split_once('/') else {
        return false;
    };
    match (mtype, subtype) {
        ("*", "*") => allow_wildcard,
        (mtype, "*") => allow_wildcard && valid_token(mtype),
        ("*", _) => false,
        (mtype, subtype) => valid_token(mtype) && valid_token(subtype),
    }
}

fn valid_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(valid_token_byte)
}

fn valid_token_byte(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7e) && !b"()<>@,;:\\\"/[]?=*".contains(&byte)
}
