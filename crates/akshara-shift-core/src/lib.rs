//! Unicode Malayalam to legacy ML/FML font transliteration.
//!
//! The tables are plain data keyed by [`EncodingTag`]; [`ProfileSet::builtin`] validates
//! them once and [`convert`] runs the longest-match conversion.

pub mod text;

pub use text::{
    convert::{ConversionStats, convert},
    mapping::{CONJUNCT_LEN, EncodingTables, EncodingTag, VIRAMA, is_malayalam},
    profile::{ConjunctKey, EncodingProfile, ProfileError, ProfileSet},
};
