// File: crates/akshara-shift-core/src/text/mapping.rs

use std::fmt;

/// Malayalam vowel killer (virama, U+0D4D).
///
/// Absorbed on its own; only meaningful as the middle of a conjunct key.
pub const VIRAMA: char = '\u{0D4D}';

/// Number of codepoints in every conjunct key (consonant + virama + consonant).
pub const CONJUNCT_LEN: usize = 3;

/// Target legacy font encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EncodingTag {
    Ml,
    Fml,
}

impl EncodingTag {
    pub const ALL: [EncodingTag; 2] = [EncodingTag::Ml, EncodingTag::Fml];

    pub fn as_str(self) -> &'static str {
        match self {
            EncodingTag::Ml => "ML",
            EncodingTag::Fml => "FML",
        }
    }

    /// Raw table data for this encoding.
    #[must_use]
    pub fn tables(self) -> EncodingTables {
        match self {
            EncodingTag::Ml => EncodingTables {
                codepoints: ML_CODEPOINTS,
                conjuncts: ML_CONJUNCTS,
            },
            EncodingTag::Fml => EncodingTables {
                codepoints: FML_CODEPOINTS,
                conjuncts: FML_CONJUNCTS,
            },
        }
    }
}

impl fmt::Display for EncodingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated static tables for one encoding.
///
/// Turned into an [`EncodingProfile`](super::profile::EncodingProfile) at startup.
#[derive(Copy, Clone, Debug)]
pub struct EncodingTables {
    pub codepoints: &'static [(char, &'static str)],
    pub conjuncts: &'static [(&'static str, &'static str)],
}

const ML_CODEPOINTS: &[(char, &str)] = &[
    // independent vowels
    ('അ', "a"),
    ('ആ', "A"),
    ('ഇ', "i"),
    ('ഈ', "I"),
    ('ഉ', "u"),
    ('ഊ', "U"),
    ('ഋ', "R"),
    ('ഌ', "L"),
    ('എ', "e"),
    ('ഏ', "E"),
    ('ഐ', "Y"),
    ('ഒ', "o"),
    ('ഓ', "O"),
    ('ഔ', "W"),
    ('ഽ', "^"),
    // consonants
    ('ക', "k"),
    ('ഖ', "K"),
    ('ഗ', "g"),
    ('ഘ', "G"),
    ('ങ', "N"),
    ('ച', "c"),
    ('ഛ', "C"),
    ('ജ', "j"),
    ('ഝ', "J"),
    ('ഞ', "~"),
    ('ട', "t"),
    ('ഠ', "T"),
    ('ഡ', "d"),
    ('ഢ', "D"),
    ('ണ', "n"),
    ('ത', "th"),
    ('ഥ', "Th"),
    ('ദ', "dh"),
    ('ധ', "Dh"),
    ('ന', "N"),
    ('പ', "p"),
    ('ഫ', "P"),
    ('ബ', "b"),
    ('ഭ', "B"),
    ('മ', "m"),
    ('യ', "y"),
    ('ര', "r"),
    ('റ', "R"),
    ('ല', "l"),
    ('ള', "L"),
    ('ഴ', "Z"),
    ('വ', "v"),
    ('ശ', "s"),
    ('ഷ', "S"),
    ('സ', "c"),
    ('ഹ', "h"),
    // dependent vowel signs
    ('\u{0D3E}', "aa"), // ാ
    ('\u{0D3F}', "i"),  // ി
    ('\u{0D40}', "ii"), // ീ
    ('\u{0D41}', "u"),  // ു
    ('\u{0D42}', "uu"), // ൂ
    ('\u{0D43}', "r"),  // ൃ
    ('\u{0D44}', "rr"), // ൄ
    ('\u{0D45}', "l"),  // not assigned in Unicode
    ('\u{0D46}', "e"),  // െ
    ('\u{0D47}', "ee"), // േ
    ('\u{0D48}', "y"),  // ൈ
    ('\u{0D49}', "o"),  // not assigned in Unicode
    ('\u{0D4B}', "o"),  // ോ
    ('\u{0D4C}', "w"),  // ൌ
    ('\u{0D4E}', "m"),  // ൎ
    // virama, anusvara, visarga
    (VIRAMA, ""),
    ('\u{0D02}', "m"), // ം
    ('\u{0D03}', "h"), // ഃ
    // chillus
    ('ൻ', "n"),
    ('ർ', "r"),
    ('ൽ', "l"),
    ('ൾ', "L"),
    ('ൿ', "k"),
    // digits
    ('൦', "0"),
    ('൧', "1"),
    ('൨', "2"),
    ('൩', "3"),
    ('൪', "4"),
    ('൫', "5"),
    ('൬', "6"),
    ('൭', "7"),
    ('൮', "8"),
    ('൯', "9"),
    // punctuation
    ('।', "."),
    ('॥', "|"),
    ('؟', "?"),
];

const FML_CODEPOINTS: &[(char, &str)] = &[
    // independent vowels
    ('അ', "a"),
    ('ആ', "A"),
    ('ഇ', "i"),
    ('ഈ', "I"),
    ('ഉ', "u"),
    ('ഊ', "U"),
    ('ഋ', "R"),
    ('ഌ', "L"),
    ('എ', "e"),
    ('ഏ', "E"),
    ('ഐ', "@"),
    ('ഒ', "o"),
    ('ഓ', "O"),
    ('ഔ', "#"),
    ('ഽ', ":"),
    // consonants
    ('ക', "k"),
    ('ഖ', "K"),
    ('ഗ', "g"),
    ('ഘ', "G"),
    ('ങ', "`"),
    ('ച', "c"),
    ('ഛ', "C"),
    ('ജ', "z"),
    ('ഝ', "Z"),
    ('ഞ', "~"),
    ('ട', "t"),
    ('ഠ', "T"),
    ('ഡ', "d"),
    ('ഢ', "D"),
    ('ണ', "N"),
    ('ത', "q"),
    ('ഥ', "Q"),
    ('ദ', "w"),
    ('ധ', "W"),
    ('ന', "n"),
    ('പ', "p"),
    ('ഫ', "P"),
    ('ബ', "b"),
    ('ഭ', "B"),
    ('മ', "m"),
    ('യ', "y"),
    ('ര', "r"),
    ('റ', "f"),
    ('ല', "l"),
    ('ള', "M"),
    ('ഴ', "Z"),
    ('വ', "v"),
    ('ശ', "s"),
    ('ഷ', "S"),
    ('സ', "x"),
    ('ഹ', "h"),
    // dependent vowel signs
    ('\u{0D3E}', "a"), // ാ
    ('\u{0D3F}', "i"), // ി
    ('\u{0D40}', "I"), // ീ
    ('\u{0D41}', "u"), // ു
    ('\u{0D42}', "U"), // ൂ
    ('\u{0D43}', "r"), // ൃ
    ('\u{0D44}', "R"), // ൄ
    ('\u{0D45}', "l"), // not assigned in Unicode
    ('\u{0D46}', "e"), // െ
    ('\u{0D47}', "E"), // േ
    ('\u{0D48}', "@"), // ൈ
    ('\u{0D49}', "o"), // not assigned in Unicode
    ('\u{0D4B}', "O"), // ോ
    ('\u{0D4C}', "#"), // ൌ
    ('\u{0D4E}', "-"), // ൎ
    // virama, anusvara, visarga
    (VIRAMA, ""),
    ('\u{0D02}', "m"), // ം
    ('\u{0D03}', "H"), // ഃ
    // chillus
    ('ൻ', "n"),
    ('ർ', "r"),
    ('ൽ', "l"),
    ('ൾ', "M"),
    ('ൿ', "k"),
    // digits
    ('൦', "0"),
    ('൧', "1"),
    ('൨', "2"),
    ('൩', "3"),
    ('൪', "4"),
    ('൫', "5"),
    ('൬', "6"),
    ('൭', "7"),
    ('൮', "8"),
    ('൯', "9"),
    // punctuation
    ('।', "."),
    ('॥', "|"),
    ('؟', "?"),
];

const ML_CONJUNCTS: &[(&str, &str)] = &[
    ("ക്ക", "kk"),
    ("ങ്ങ", "Ng"),
    ("ച്ച", "cc"),
    ("ഞ്ഞ", "~~"),
    ("ട്ട", "tt"),
    ("ണ്ണ", "nn"),
    ("ദ്ധ", "ddh"),
    ("ന്ന", "nn"),
    ("പ്പ", "pp"),
    ("ബ്ബ", "bb"),
    ("മ്മ", "mm"),
    ("യ്യ", "yy"),
    ("ര്ര", "rr"),
    ("ല്ല", "ll"),
    ("വ്വ", "vv"),
    ("ശ്ശ", "ss"),
    ("സ്സ", "ss"),
    ("ഹ്ഹ", "hh"),
];

const FML_CONJUNCTS: &[(&str, &str)] = &[
    ("ക്ക", "kk"),
    ("ങ്ങ", "``"),
    ("ച്ച", "cc"),
    ("ഞ്ഞ", "~~"),
    ("ട്ട", "tt"),
    ("ണ്ണ", "NN"),
    ("ദ്ധ", "ww"),
    ("ന്ന", "nn"),
    ("പ്പ", "pp"),
    ("ബ്ബ", "bb"),
    ("മ്മ", "mm"),
    ("യ്യ", "yy"),
    ("ര്ര", "rr"),
    ("ല്ല", "ll"),
    ("വ്വ", "vv"),
    ("ശ്ശ", "ss"),
    ("സ്സ", "xx"),
    ("ഹ്ഹ", "hh"),
];

/// Returns `true` for codepoints in the Malayalam Unicode block (U+0D00..=U+0D7F).
#[must_use]
pub const fn is_malayalam(ch: char) -> bool {
    matches!(ch, '\u{0D00}'..='\u{0D7F}')
}
