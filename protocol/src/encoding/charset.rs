//! # Symbol Alphabet
//!
//! Maps 5-bit words to the 32 characters of the address alphabet and back.
//! The order of [`CHARSET`] is part of the wire format. Output is always
//! lowercase. Lookups accept either case, but a string that mixes cases is
//! rejected outright.

use super::error::CodecError;

/// The alphabet, indexed by word value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse table over ASCII: word value for each alphabet character (both
/// cases), `-1` everywhere else. Built at compile time.
const CHARSET_REV: [i8; 128] = build_reverse_table();

const fn build_reverse_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        let c = CHARSET[i];
        table[c as usize] = i as i8;
        table[c.to_ascii_uppercase() as usize] = i as i8;
        i += 1;
    }
    table
}

/// Render a word as its alphabet character.
pub fn symbol_to_char(word: u8) -> Result<char, CodecError> {
    CHARSET
        .get(word as usize)
        .map(|&c| c as char)
        .ok_or(CodecError::InvalidWord(word))
}

/// Look up the word value of an alphabet character, ignoring case.
pub fn char_to_symbol(c: char) -> Result<u8, CodecError> {
    if !c.is_ascii() {
        return Err(CodecError::InvalidCharacter(c));
    }
    match CHARSET_REV[c as usize] {
        -1 => Err(CodecError::InvalidCharacter(c)),
        v => Ok(v as u8),
    }
}

/// Fail with [`CodecError::MixedCase`] if `s` contains both an uppercase
/// and a lowercase letter. Digits and punctuation are caseless.
pub fn check_case(s: &str) -> Result<(), CodecError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CodecError::MixedCase);
    }
    Ok(())
}

/// Render a word sequence as a lowercase string.
pub fn words_to_string(words: &[u8]) -> Result<String, CodecError> {
    words.iter().map(|&w| symbol_to_char(w)).collect()
}

/// Parse a body into word values. Case must already have been checked.
pub fn string_to_words(body: &str) -> Result<Vec<u8>, CodecError> {
    body.chars().map(char_to_symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_roundtrips() {
        for w in 0u8..32 {
            let c = symbol_to_char(w).unwrap();
            assert_eq!(char_to_symbol(c).unwrap(), w);
            assert_eq!(char_to_symbol(c.to_ascii_uppercase()).unwrap(), w);
        }
    }

    #[test]
    fn alphabet_order_is_fixed() {
        assert_eq!(symbol_to_char(0).unwrap(), 'q');
        assert_eq!(symbol_to_char(1).unwrap(), 'p');
        assert_eq!(symbol_to_char(31).unwrap(), 'l');
    }

    #[test]
    fn word_out_of_range_rejected() {
        assert_eq!(symbol_to_char(32), Err(CodecError::InvalidWord(32)));
    }

    #[test]
    fn excluded_characters_rejected() {
        // '1', 'b', 'i' and 'o' are deliberately left out of the alphabet.
        for c in ['1', 'b', 'i', 'o', 'B', ':', ' ', 'é'] {
            assert_eq!(char_to_symbol(c), Err(CodecError::InvalidCharacter(c)));
        }
    }

    #[test]
    fn mixed_case_detected() {
        assert!(check_case("qpzry9x8").is_ok());
        assert!(check_case("QPZRY9X8").is_ok());
        assert!(check_case("12345:").is_ok());
        assert_eq!(check_case("qpzRy9x8"), Err(CodecError::MixedCase));
    }

    #[test]
    fn string_conversion() {
        assert_eq!(words_to_string(&[0, 1, 2, 3]).unwrap(), "qpzr");
        assert_eq!(string_to_words("QPZR").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            string_to_words("qp1r"),
            Err(CodecError::InvalidCharacter('1'))
        );
    }
}
