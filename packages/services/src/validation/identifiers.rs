use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

// U+FEFF counts as whitespace alongside `\s`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern compiles")
});

// Parentheses and separators are optional, the two area-code digits are not.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?[0-9]{2}\)?[\s\x{FEFF}-]?[0-9]{4,5}-?[0-9]{4}$")
        .expect("phone pattern compiles")
});

/// Kind of Brazilian taxpayer identifier a string denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    /// Individual taxpayer (11 digits)
    Cpf,
    /// Company taxpayer (14 digits)
    Cnpj,
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxIdKind::Cpf => write!(f, "CPF"),
            TaxIdKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// Keeps only the ASCII digits of `input`, as numeric values
pub fn normalize_digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_identical(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn cpf_check_digit(digits: &[u32]) -> u32 {
    // Weights run from len+1 down to 2.
    let start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (start - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Validates a CPF, ignoring any punctuation or spacing around the digits.
///
/// Sequences of a single repeated digit are rejected even though some of them
/// satisfy the checksum.
pub fn validate_cpf(input: &str) -> bool {
    let digits = normalize_digits(input);
    if digits.len() != 11 || all_identical(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Validates a CNPJ, ignoring any punctuation or spacing around the digits.
pub fn validate_cnpj(input: &str) -> bool {
    let digits = normalize_digits(input);
    if digits.len() != 14 || all_identical(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS) == digits[13]
}

pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

pub fn validate_phone(input: &str) -> bool {
    PHONE_PATTERN.is_match(input)
}

/// Returns which identifier `input` denotes, if it is a valid CNPJ or CPF
pub fn classify_tax_id(input: &str) -> Option<TaxIdKind> {
    if validate_cnpj(input) {
        Some(TaxIdKind::Cnpj)
    } else if validate_cpf(input) {
        Some(TaxIdKind::Cpf)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_known_valid() {
        assert!(validate_cpf("111.444.777-35"));
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf(" 529 982 247 25 "));
    }

    #[test]
    fn test_cpf_wrong_check_digits() {
        assert!(!validate_cpf("111.444.777-36"));
        assert!(!validate_cpf("111.444.777-45"));
        assert!(!validate_cpf("529.982.247-52"));
    }

    #[test]
    fn test_cpf_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("1114447773"));
        assert!(!validate_cpf("111444777350"));
        assert!(!validate_cpf("abc.def.ghi-jk"));
    }

    #[test]
    fn test_cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!validate_cpf(&cpf), "{} should be rejected", cpf);
        }
        // Passes the checksum, still rejected
        assert!(!validate_cpf("111.111.111-11"));
    }

    #[test]
    fn test_cpf_remainder_ten_maps_to_zero() {
        // 123.456.789-09: first check digit comes from a remainder of 10
        assert!(validate_cpf("123.456.789-09"));
        assert!(!validate_cpf("123.456.789-0A"));
    }

    #[test]
    fn test_cnpj_known_valid() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11222333000181"));
        assert!(validate_cnpj("00.623.904/0001-73"));
    }

    #[test]
    fn test_cnpj_wrong_check_digits() {
        assert!(!validate_cnpj("11.222.333/0001-80"));
        assert!(!validate_cnpj("11.222.333/0001-91"));
    }

    #[test]
    fn test_cnpj_low_remainder_maps_to_zero() {
        // Both weighted sums are multiples of 11.
        assert!(validate_cnpj("11.222.333/0019-00"));
        assert!(validate_cnpj("11222333001900"));
        assert!(!validate_cnpj("11.222.333/0019-01"));
        assert!(!validate_cnpj("11.222.333/0019-10"));
    }

    #[test]
    fn test_cnpj_wrong_length_and_repeated() {
        assert!(!validate_cnpj(""));
        assert!(!validate_cnpj("11.222.333/0001-8"));
        assert!(!validate_cnpj("111.444.777-35"));
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(14);
            assert!(!validate_cnpj(&cnpj), "{} should be rejected", cnpj);
        }
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not treated as digits
        assert!(normalize_digits("١٢٣").is_empty());
        assert_eq!(normalize_digits("1a2-3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("contato@empresa.com.br"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("@b.com"));
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(!validate_email("a\u{FEFF}@b.co"));
        assert!(!validate_email("a@b.\u{FEFF}co"));
        assert!(validate_phone("(11)\u{FEFF}91234-5678"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(validate_phone("(11) 91234-5678"));
        assert!(validate_phone("11912345678"));
        assert!(validate_phone("(11)1234-5678"));
        assert!(validate_phone("11-1234-5678"));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone(""));
        assert!(!validate_phone("(11) 91234-567"));
        assert!(!validate_phone("+55 (11) 91234-5678"));
    }

    #[test]
    fn test_classify_tax_id() {
        assert_eq!(classify_tax_id("11.222.333/0001-81"), Some(TaxIdKind::Cnpj));
        assert_eq!(classify_tax_id("111.444.777-35"), Some(TaxIdKind::Cpf));
        assert_eq!(classify_tax_id("123"), None);
        assert_eq!(TaxIdKind::Cnpj.to_string(), "CNPJ");
    }
}
