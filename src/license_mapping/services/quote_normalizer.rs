/// Replacement used when no other is given: the ASCII apostrophe.
pub const DEFAULT_REPLACEMENT: char = '\'';

/// Quotation-mark and prime variants folded onto one replacement character.
pub const QUOTE_CHARACTERS: [char; 14] = [
    '\u{2018}', // LEFT SINGLE QUOTATION MARK
    '\u{2019}', // RIGHT SINGLE QUOTATION MARK
    '\u{201A}', // SINGLE LOW-9 QUOTATION MARK
    '\u{201B}', // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    '\u{2032}', // PRIME
    '\u{FF07}', // FULLWIDTH APOSTROPHE
    '\u{201C}', // LEFT DOUBLE QUOTATION MARK
    '\u{201D}', // RIGHT DOUBLE QUOTATION MARK
    '\u{201E}', // DOUBLE LOW-9 QUOTATION MARK
    '\u{201F}', // DOUBLE HIGH-REVERSED-9 QUOTATION MARK
    '\u{2033}', // DOUBLE PRIME
    '\u{00AB}', // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    '\u{00BB}', // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    '\u{FF02}', // FULLWIDTH QUOTATION MARK
];

/// QuoteNormalizer service for canonicalizing quote glyphs before lookup
///
/// License names copied from PDFs, OCR output or different keyboard layouts
/// carry visually identical but distinct quote characters. Folding them onto
/// one character lets an exact-match lookup succeed without fuzzy matching.
///
/// Works on `char`s; multi-code-point glyphs get no special handling.
pub struct QuoteNormalizer;

impl QuoteNormalizer {
    pub fn is_quote_character(c: char) -> bool {
        QUOTE_CHARACTERS.contains(&c)
    }

    /// Replaces every quote character with `'`.
    pub fn normalize_quotes(input: &str) -> String {
        Self::normalize_quotes_with(input, DEFAULT_REPLACEMENT)
    }

    /// Replaces every quote character with `replacement`; other characters pass through.
    /// The output has as many `char`s as the input.
    pub fn normalize_quotes_with(input: &str, replacement: char) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut normalized = String::with_capacity(input.len());
        for c in input.chars() {
            if Self::is_quote_character(c) {
                normalized.push(replacement);
            } else {
                normalized.push(c);
            }
        }
        normalized
    }
}
