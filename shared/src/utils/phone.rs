//! Phone number utilities
//!
//! All outbound SMS traffic targets Ghanaian numbers. Gateways expect the
//! international form without a leading `+`: `233` followed by the nine
//! local digits.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ghana country calling code
pub const COUNTRY_CODE: &str = "233";

/// Length of a normalized number (`233` + 9 local digits)
pub const NORMALIZED_LENGTH: usize = 12;

/// Network prefixes (without the trunk `0`) assigned to Ghanaian mobile operators
pub const NETWORK_PREFIXES: [&str; 14] = [
    "20", "23", "24", "25", "26", "27", "28", // Vodafone, AirtelTigo
    "50", "53", "54", "55", "56", "57", "59", // MTN
];

// Characters users commonly type as separators
static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-()]").unwrap());

static DIGITS_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Normalize a phone number to the `233XXXXXXXXX` gateway format.
///
/// Strips every non-digit character, replaces a leading trunk `0` with the
/// country code and prepends the country code when it is missing. Returns
/// `None` unless the result is exactly 12 digits.
///
/// # Example
///
/// ```
/// use fs_shared::utils::phone::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("024 123 4567").as_deref(), Some("233241234567"));
/// assert_eq!(normalize_phone_number("123"), None);
/// ```
pub fn normalize_phone_number(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let mut normalized = match digits.strip_prefix('0') {
        Some(local) => format!("{}{}", COUNTRY_CODE, local),
        None => digits,
    };

    if !normalized.starts_with(COUNTRY_CODE) {
        normalized = format!("{}{}", COUNTRY_CODE, normalized);
    }

    if normalized.len() != NORMALIZED_LENGTH {
        return None;
    }

    Some(normalized)
}

/// Outcome of validating a user-entered phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidation {
    /// Number is valid; `formatted` is the international form (`233XXXXXXXXX`)
    Valid { formatted: String },
    /// Number was rejected
    Invalid { reason: PhoneRejection },
}

/// Reason a phone number failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRejection {
    Required,
    LengthAfterCountryCode,
    LocalLength,
    InvalidPrefix,
    UnrecognizedFormat,
}

impl PhoneRejection {
    /// User-facing message for the rejection
    pub fn message(&self) -> &'static str {
        match self {
            PhoneRejection::Required => "Phone number is required",
            PhoneRejection::LengthAfterCountryCode => {
                "Phone number must be 9 digits after country code"
            }
            PhoneRejection::LocalLength => "Phone number must be 10 digits (e.g., 0241234567)",
            PhoneRejection::InvalidPrefix => "Invalid phone number prefix",
            PhoneRejection::UnrecognizedFormat => {
                "Invalid phone number format. Use: 0241234567"
            }
        }
    }
}

impl PhoneValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneValidation::Valid { .. })
    }

    /// The international form, if valid
    pub fn formatted(&self) -> Option<&str> {
        match self {
            PhoneValidation::Valid { formatted } => Some(formatted),
            PhoneValidation::Invalid { .. } => None,
        }
    }
}

/// Validate a Ghanaian mobile number.
///
/// Accepts `0241234567`, `233241234567` and `+233241234567`; spaces, dashes
/// and parentheses are ignored. Unlike [`normalize_phone_number`] this also
/// checks the operator prefix, so it is the stricter check used on request
/// input.
pub fn validate_ghana_phone(phone: &str) -> PhoneValidation {
    let cleaned = SEPARATOR_REGEX.replace_all(phone.trim(), "");
    let number = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    if number.is_empty() {
        return invalid(PhoneRejection::Required);
    }
    if !DIGITS_ONLY_REGEX.is_match(number) {
        return invalid(PhoneRejection::UnrecognizedFormat);
    }

    if let Some(local) = number.strip_prefix(COUNTRY_CODE) {
        if local.len() != 9 {
            return invalid(PhoneRejection::LengthAfterCountryCode);
        }
        if !has_network_prefix(local) {
            return invalid(PhoneRejection::InvalidPrefix);
        }
        return PhoneValidation::Valid {
            formatted: number.to_string(),
        };
    }

    if let Some(local) = number.strip_prefix('0') {
        if number.len() != 10 {
            return invalid(PhoneRejection::LocalLength);
        }
        if !has_network_prefix(local) {
            return invalid(PhoneRejection::InvalidPrefix);
        }
        return PhoneValidation::Valid {
            formatted: format!("{}{}", COUNTRY_CODE, local),
        };
    }

    invalid(PhoneRejection::UnrecognizedFormat)
}

fn invalid(reason: PhoneRejection) -> PhoneValidation {
    PhoneValidation::Invalid { reason }
}

fn has_network_prefix(local: &str) -> bool {
    NETWORK_PREFIXES.iter().any(|prefix| local.starts_with(prefix))
}

/// Check if a phone number passes [`validate_ghana_phone`]
pub fn is_valid_phone(phone: &str) -> bool {
    validate_ghana_phone(phone).is_valid()
}

/// Format a phone number for display in local form (`0XXXXXXXXX`).
///
/// Invalid input is returned unchanged.
pub fn format_for_display(phone: &str) -> String {
    match validate_ghana_phone(phone) {
        PhoneValidation::Valid { formatted } => match formatted.strip_prefix(COUNTRY_CODE) {
            Some(local) => format!("0{}", local),
            None => formatted,
        },
        PhoneValidation::Invalid { .. } => phone.to_string(),
    }
}

/// Mask a phone number for logs (e.g., 233*****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 8 {
        format!(
            "{}{}{}",
            &digits[0..3],
            "*".repeat(digits.len() - 7),
            &digits[digits.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("0241234567").as_deref(), Some("233241234567"));
        assert_eq!(normalize_phone_number("233241234567").as_deref(), Some("233241234567"));
        assert_eq!(normalize_phone_number("241234567").as_deref(), Some("233241234567"));
        assert_eq!(normalize_phone_number("+233 24-123-4567").as_deref(), Some("233241234567"));
        assert_eq!(normalize_phone_number("(024) 123 4567").as_deref(), Some("233241234567"));
    }

    #[test]
    fn test_normalize_phone_number_rejects_bad_length() {
        assert_eq!(normalize_phone_number("123"), None);
        assert_eq!(normalize_phone_number(""), None);
        assert_eq!(normalize_phone_number("abc"), None);
        assert_eq!(normalize_phone_number("02412345678"), None);
        assert_eq!(normalize_phone_number("2332412345678"), None);
    }

    #[test]
    fn test_validate_ghana_phone() {
        assert_eq!(
            validate_ghana_phone("0241234567"),
            PhoneValidation::Valid { formatted: "233241234567".to_string() }
        );
        assert_eq!(
            validate_ghana_phone("+233 55 123 4567").formatted(),
            Some("233551234567")
        );
        assert!(is_valid_phone("233201234567"));
    }

    #[test]
    fn test_validate_ghana_phone_rejections() {
        let cases = [
            ("", PhoneRejection::Required),
            ("   ", PhoneRejection::Required),
            ("02412345", PhoneRejection::LocalLength),
            ("23324123", PhoneRejection::LengthAfterCountryCode),
            ("0211234567", PhoneRejection::InvalidPrefix),
            ("233991234567", PhoneRejection::InvalidPrefix),
            ("441234567890", PhoneRejection::UnrecognizedFormat),
            ("024abc4567", PhoneRejection::UnrecognizedFormat),
        ];

        for (input, expected) in cases {
            assert_eq!(
                validate_ghana_phone(input),
                PhoneValidation::Invalid { reason: expected },
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display("233241234567"), "0241234567");
        assert_eq!(format_for_display("+233 24 123 4567"), "0241234567");
        assert_eq!(format_for_display("not a phone"), "not a phone");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("233241234567"), "233*****4567");
        assert_eq!(mask_phone_number("0241234567"), "024***4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
