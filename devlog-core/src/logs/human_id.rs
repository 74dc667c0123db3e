use crate::logs::constants::HUMAN_ID_GLYPHS;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Maps raw bytes to a visual alphabet.
pub trait GlyphAlphabet {
    fn glyphs(&self, bytes: &[u8]) -> Vec<char>;
}

/// One pictograph per byte value, starting at U+1F400 (🐀).
#[derive(Debug, Default, Clone, Copy)]
pub struct Pictographs;

impl Pictographs {
    const BASE: u32 = 0x1F400;

    fn glyph(byte: u8) -> char {
        char::from_u32(Self::BASE + u32::from(byte)).unwrap_or('?')
    }
}

impl GlyphAlphabet for Pictographs {
    fn glyphs(&self, bytes: &[u8]) -> Vec<char> {
        bytes.iter().copied().map(Self::glyph).collect()
    }
}

/// Decorative short label for a group id.
///
/// The id is decoded as base64 (falling back to its raw bytes), mapped
/// through `alphabet`, and the first glyphs are joined with spaces. The
/// result always ends with a space.
pub fn human_id(id: &str, alphabet: &dyn GlyphAlphabet) -> String {
    let bytes = decode_id(id);
    let glyphs: Vec<String> = alphabet
        .glyphs(&bytes)
        .into_iter()
        .take(HUMAN_ID_GLYPHS)
        .map(String::from)
        .collect();

    format!("{} ", glyphs.join(" "))
}

fn decode_id(id: &str) -> Vec<u8> {
    STANDARD_LENIENT
        .decode(id)
        .or_else(|_| URL_SAFE_LENIENT.decode(id))
        .ok()
        .filter(|bytes| !bytes.is_empty())
        .unwrap_or_else(|| id.as_bytes().to_vec())
}
