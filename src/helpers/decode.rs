use encoding_rs::UTF_8;

/// UTF-8 byte order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes raw file bytes as strict UTF-8, tolerating a leading BOM.
///
/// Returns `None` when the bytes are not valid UTF-8; malformed input must
/// surface as a decode failure rather than be silently replaced.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
