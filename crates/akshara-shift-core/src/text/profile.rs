use std::{collections::HashMap, error::Error, fmt};

use super::{
    convert::{ConversionStats, convert},
    mapping::{CONJUNCT_LEN, EncodingTables, EncodingTag},
};

/// A conjunct key: consonant, virama, consonant.
pub type ConjunctKey = [char; CONJUNCT_LEN];

/// Table inconsistency detected while building an [`EncodingProfile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileError {
    DuplicateCodepoint {
        encoding: EncodingTag,
        key: char,
    },
    DuplicateConjunct {
        encoding: EncodingTag,
        key: String,
    },
    ConjunctArity {
        encoding: EncodingTag,
        key: String,
        len: usize,
    },
    EmptyConjunct {
        encoding: EncodingTag,
        key: String,
    },
    NonAsciiOutput {
        encoding: EncodingTag,
        value: String,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCodepoint { encoding, key } => {
                write!(f, "{encoding}: duplicate codepoint key U+{:04X}", u32::from(*key))
            }
            Self::DuplicateConjunct { encoding, key } => {
                write!(f, "{encoding}: duplicate conjunct key {key:?}")
            }
            Self::ConjunctArity { encoding, key, len } => write!(
                f,
                "{encoding}: conjunct key {key:?} has {len} codepoints, expected {CONJUNCT_LEN}"
            ),
            Self::EmptyConjunct { encoding, key } => {
                write!(f, "{encoding}: conjunct {key:?} maps to an empty string")
            }
            Self::NonAsciiOutput { encoding, value } => {
                write!(f, "{encoding}: output {value:?} is not ASCII")
            }
        }
    }
}

impl Error for ProfileError {}

/// Validated lookup tables for one legacy encoding.
#[derive(Debug)]
pub struct EncodingProfile {
    tag: EncodingTag,
    codepoints: HashMap<char, &'static str>,
    conjuncts: HashMap<ConjunctKey, &'static str>,
}

impl EncodingProfile {
    /// Builds a profile from raw tables, rejecting inconsistent data.
    pub fn from_tables(tag: EncodingTag, tables: EncodingTables) -> Result<Self, ProfileError> {
        let mut codepoints = HashMap::with_capacity(tables.codepoints.len());
        for &(key, value) in tables.codepoints {
            ensure_ascii(tag, value)?;
            if codepoints.insert(key, value).is_some() {
                return Err(ProfileError::DuplicateCodepoint { encoding: tag, key });
            }
        }

        let mut conjuncts = HashMap::with_capacity(tables.conjuncts.len());
        for &(key, value) in tables.conjuncts {
            let chars: Vec<char> = key.chars().collect();
            let window = ConjunctKey::try_from(chars.as_slice()).map_err(|_| {
                ProfileError::ConjunctArity {
                    encoding: tag,
                    key: key.to_owned(),
                    len: chars.len(),
                }
            })?;
            if value.is_empty() {
                return Err(ProfileError::EmptyConjunct {
                    encoding: tag,
                    key: key.to_owned(),
                });
            }
            ensure_ascii(tag, value)?;
            if conjuncts.insert(window, value).is_some() {
                return Err(ProfileError::DuplicateConjunct {
                    encoding: tag,
                    key: key.to_owned(),
                });
            }
        }

        Ok(Self {
            tag,
            codepoints,
            conjuncts,
        })
    }

    /// Builds the compiled-in profile for `tag`.
    pub fn builtin(tag: EncodingTag) -> Result<Self, ProfileError> {
        Self::from_tables(tag, tag.tables())
    }

    pub fn tag(&self) -> EncodingTag {
        self.tag
    }

    #[inline]
    pub fn codepoint(&self, ch: char) -> Option<&'static str> {
        self.codepoints.get(&ch).copied()
    }

    #[inline]
    pub fn conjunct(&self, window: &ConjunctKey) -> Option<&'static str> {
        self.conjuncts.get(window).copied()
    }

    pub fn codepoint_count(&self) -> usize {
        self.codepoints.len()
    }

    pub fn conjunct_count(&self) -> usize {
        self.conjuncts.len()
    }
}

fn ensure_ascii(tag: EncodingTag, value: &str) -> Result<(), ProfileError> {
    if value.is_ascii() {
        Ok(())
    } else {
        Err(ProfileError::NonAsciiOutput {
            encoding: tag,
            value: value.to_owned(),
        })
    }
}

/// One validated profile per [`EncodingTag`].
///
/// Built once at startup and only read afterwards.
#[derive(Debug)]
pub struct ProfileSet {
    ml: EncodingProfile,
    fml: EncodingProfile,
}

impl ProfileSet {
    /// Builds and validates every compiled-in profile.
    pub fn builtin() -> Result<Self, ProfileError> {
        Ok(Self {
            ml: EncodingProfile::builtin(EncodingTag::Ml)?,
            fml: EncodingProfile::builtin(EncodingTag::Fml)?,
        })
    }

    #[must_use]
    pub fn get(&self, tag: EncodingTag) -> &EncodingProfile {
        match tag {
            EncodingTag::Ml => &self.ml,
            EncodingTag::Fml => &self.fml,
        }
    }

    #[must_use]
    pub fn convert(&self, input: &str, tag: EncodingTag) -> String {
        convert(input, self.get(tag))
    }

    #[must_use]
    pub fn stats(&self, input: &str, tag: EncodingTag) -> ConversionStats {
        ConversionStats::collect(input, self.get(tag))
    }
}
