use super::{
    mapping::{CONJUNCT_LEN, is_malayalam},
    profile::{ConjunctKey, EncodingProfile},
};

/// Converts Unicode Malayalam text into the legacy encoding described by `profile`.
///
/// Greedy longest match over codepoints, left to right:
/// - a 3-codepoint conjunct window wins when present in the conjunct table
/// - otherwise the single codepoint is looked up
/// - unmapped codepoints are copied through unchanged
///
/// Total over all inputs; the virama outside a conjunct maps to nothing.
#[must_use]
pub fn convert(input: &str, profile: &EncodingProfile) -> String {
    let chars: Vec<char> = input.chars().collect();
    // Output is ASCII for Malayalam (3 UTF-8 bytes each), so the byte length is an upper bound.
    let mut out = String::with_capacity(input.len());

    let mut i = 0;
    while i < chars.len() {
        if let Some(value) = conjunct_at(&chars, i, profile) {
            out.push_str(value);
            i += CONJUNCT_LEN;
            continue;
        }

        let ch = chars[i];
        match profile.codepoint(ch) {
            Some(value) => out.push_str(value),
            None => out.push(ch),
        }
        i += 1;
    }

    out
}

fn conjunct_at(chars: &[char], at: usize, profile: &EncodingProfile) -> Option<&'static str> {
    let window = chars.get(at..at + CONJUNCT_LEN)?;
    let key = ConjunctKey::try_from(window).ok()?;
    profile.conjunct(&key)
}

/// Read-only diagnostic summary of one conversion.
///
/// Lengths are counted in Unicode scalar values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionStats {
    pub input_len: usize,
    pub output_len: usize,
    pub output: String,
    pub malayalam_chars: usize,
}

impl ConversionStats {
    #[must_use]
    pub fn collect(input: &str, profile: &EncodingProfile) -> Self {
        let output = convert(input, profile);
        Self {
            input_len: input.chars().count(),
            output_len: output.chars().count(),
            malayalam_chars: input.chars().filter(|&c| is_malayalam(c)).count(),
            output,
        }
    }
}
