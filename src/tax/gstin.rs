//! GSTIN (GST Identification Number) format validation and state decoding
//!
//! A GSTIN is 15 characters: a 2-digit state code, the holder's 10-character
//! PAN, an entity number, the literal `Z` and a check character. Validation is
//! purely structural; no registry is consulted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of every well-formed GSTIN
pub const GSTIN_LEN: usize = 15;

/// State and union territory codes used as the first two GSTIN characters.
/// Sorted by code for binary search.
pub static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu & Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra & Nagar Haveli and Daman & Diu"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman & Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh (New)"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

/// Check whether `gstin` is a structurally valid GSTIN.
///
/// The input must already be normalized: no surrounding whitespace and
/// upper-case letters only.
pub fn validate_gstin(gstin: &str) -> bool {
    let b = gstin.as_bytes();
    if b.len() != GSTIN_LEN {
        return false;
    }

    let upper = |c: &u8| c.is_ascii_uppercase();
    let digit = |c: &u8| c.is_ascii_digit();

    b[..2].iter().all(digit)
        && b[2..7].iter().all(upper)
        && b[7..11].iter().all(digit)
        && upper(&b[11])
        && (matches!(b[12], b'1'..=b'9') || upper(&b[12]))
        && b[13] == b'Z'
        && (digit(&b[14]) || upper(&b[14]))
}

/// Name of the state or territory for a 2-digit code, if the code is assigned
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|idx| STATE_CODES[idx].1)
}

/// Decode the state embedded in a GSTIN.
///
/// Returns an empty string when the GSTIN is malformed or its state code is
/// not assigned.
pub fn state_from_gstin(gstin: &str) -> &'static str {
    if !validate_gstin(gstin) {
        return "";
    }
    state_name(&gstin[..2]).unwrap_or("")
}

/// A GSTIN that has passed [`validate_gstin`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    /// Parse a normalized GSTIN, returning `None` if it is malformed
    pub fn parse(value: &str) -> Option<Self> {
        validate_gstin(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-digit state code
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The holder's PAN (characters 3 to 12)
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    /// Decoded state name, empty for unassigned codes
    pub fn state(&self) -> &'static str {
        state_name(self.state_code()).unwrap_or("")
    }
}

impl TryFrom<String> for Gstin {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_gstin(&value) {
            Ok(Self(value))
        } else {
            Err(format!("invalid GSTIN '{}'", value))
        }
    }
}

impl From<Gstin> for String {
    fn from(gstin: Gstin) -> Self {
        gstin.0
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gstin_for(code: &str) -> String {
        format!("{}AAPFU0939F1ZV", code)
    }

    #[test]
    fn test_every_state_code_round_trips() {
        for (code, name) in STATE_CODES {
            let gstin = gstin_for(code);
            assert!(validate_gstin(&gstin), "{} should be valid", gstin);
            assert_eq!(state_from_gstin(&gstin), *name);
        }
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(STATE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(STATE_CODES.len(), 39);
    }

    #[test]
    fn test_valid_gstins() {
        assert!(validate_gstin("22AAAAA0000A1Z5"));
        assert!(validate_gstin("29ABCDE1234FZZA"));
        assert!(validate_gstin("07AAACB2894G1Z0"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!validate_gstin(""));
        assert!(!validate_gstin("22AAAAA0000A1Z"));
        assert!(!validate_gstin("22AAAAA0000A1Z55"));
    }

    #[test]
    fn test_rejects_lowercase_and_whitespace() {
        assert!(!validate_gstin("22aaaaa0000a1z5"));
        assert!(!validate_gstin(" 22AAAAA0000A1Z5"));
        assert!(!validate_gstin("22AAAAA0000A1Z5 "));
    }

    #[test]
    fn test_rejects_wrong_literal_and_entity_char() {
        // position 14 must be 'Z'
        assert!(!validate_gstin("22AAAAA0000A1X5"));
        // entity number cannot be zero
        assert!(!validate_gstin("22AAAAA0000A0Z5"));
        // digits where letters are expected
        assert!(!validate_gstin("2212345000001Z5"));
        assert!(!validate_gstin("22AAAAA0000A1Z-"));
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert!(!validate_gstin("22AAAAA0000A1Z₹"));
        assert_eq!(state_from_gstin("₹₹₹₹₹"), "");
    }

    #[test]
    fn test_unassigned_code_yields_empty_state() {
        assert!(validate_gstin(&gstin_for("25")));
        assert_eq!(state_from_gstin(&gstin_for("25")), "");
        assert_eq!(state_from_gstin(&gstin_for("00")), "");
        assert_eq!(state_from_gstin(&gstin_for("98")), "");
    }

    #[test]
    fn test_invalid_gstin_yields_empty_state() {
        assert_eq!(state_from_gstin("27AAPFU0939F1Z"), "");
        assert_eq!(state_from_gstin("not a gstin"), "");
    }

    #[test]
    fn test_parsed_gstin_parts() {
        let gstin = Gstin::parse("33AAPFU0939F1ZV").unwrap();
        assert_eq!(gstin.state_code(), "33");
        assert_eq!(gstin.pan(), "AAPFU0939F");
        assert_eq!(gstin.state(), "Tamil Nadu");
        assert!(Gstin::parse("33aapfu0939f1zv").is_none());
    }

    #[test]
    fn test_gstin_serde_rejects_malformed() {
        let gstin: Gstin = serde_json::from_str(r#""07AAACB2894G1Z0""#).unwrap();
        assert_eq!(gstin.state(), "Delhi");
        assert!(serde_json::from_str::<Gstin>(r#""07AAACB2894G1Y0""#).is_err());
    }
}
