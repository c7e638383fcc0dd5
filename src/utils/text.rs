//! Token normalization for free-text and enumerated field values.

use regex::Regex;
use std::sync::LazyLock;
use strsim::jaro_winkler;

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"-?\d+(?:\.\d+)?").expect("static number pattern is valid")
});

/// Sentinels meaning "the field was left unanswered", already normalized.
const NOT_REPORTED_SENTINELS: &[&str] = &["not reported", "no reportado", "no reporta"];

/// Fold an accented Latin letter to its ASCII base letter.
#[must_use]
pub const fn fold_diacritics(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' | 'Į' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ő' | 'ø' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ō' | 'Ő' | 'Ø' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ç' | 'ć' | 'č' => 'c',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        'š' | 'ś' => 's',
        'Š' | 'Ś' => 'S',
        'ž' | 'ź' | 'ż' => 'z',
        'Ž' | 'Ź' | 'Ż' => 'Z',
        'ř' => 'r',
        'Ř' => 'R',
        'ł' => 'l',
        'Ł' => 'L',
        'ď' => 'd',
        'Ď' => 'D',
        'ť' => 't',
        'Ť' => 'T',
        other => other,
    }
}

/// Normalize a raw value into a comparable token.
///
/// Diacritics are stripped, text is lower-cased, separators become spaces,
/// a comma between two digits becomes a decimal point, and whitespace runs
/// collapse to a single space.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().map(fold_diacritics).collect();
    let mut cleaned = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let next_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        let mapped = if c.is_alphanumeric() {
            c
        } else if (c == ',' || c == '.') && prev_digit && next_digit {
            '.'
        } else if c == '-' && next_digit && !(i > 0 && chars[i - 1].is_alphanumeric()) {
            // sign; "10-20" and "semi-2" are still split
            '-'
        } else {
            ' '
        };
        cleaned.extend(mapped.to_lowercase());
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when a normalized token is the "not reported" sentinel.
#[must_use]
pub fn is_not_reported(normalized: &str) -> bool {
    NOT_REPORTED_SENTINELS.contains(&normalized)
}

/// First number appearing in a normalized token, e.g. `"aprox 12.5 m"` → 12.5.
#[must_use]
pub fn parse_leading_number(normalized: &str) -> Option<f64> {
    FIRST_NUMBER
        .find(normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Closest candidate by Jaro-Winkler similarity, for "did you mean" hints.
#[must_use]
pub fn closest_token<'a>(token: &str, candidates: &[&'a str]) -> Option<(&'a str, f64)> {
    candidates
        .iter()
        .map(|candidate| (*candidate, jaro_winkler(token, candidate)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_token("  Escorrentía   Superficial "), "escorrentia superficial");
        assert_eq!(normalize_token("Sin conexión"), "sin conexion");
        assert_eq!(normalize_token("CAUCE_EFÍMERO"), "cauce efimero");
        assert_eq!(normalize_token("Semi-confinado"), "semi confinado");
    }

    #[test]
    fn test_normalize_keeps_decimal_comma_between_digits() {
        assert_eq!(normalize_token("12,5 m"), "12.5 m");
        assert_eq!(normalize_token("arena, grava"), "arena grava");
        assert_eq!(normalize_token("0.35"), "0.35");
    }

    #[test]
    fn test_not_reported_sentinel() {
        assert!(is_not_reported(&normalize_token("Not Reported")));
        assert!(is_not_reported(&normalize_token("No reportado")));
        assert!(!is_not_reported(&normalize_token("no")));
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("12.5 m"), Some(12.5));
        assert_eq!(parse_leading_number("aprox 40 m"), Some(40.0));
        assert_eq!(parse_leading_number("profundo"), None);
    }

    #[test]
    fn test_negative_numbers_keep_their_sign() {
        assert_eq!(normalize_token("-2 m"), "-2 m");
        assert_eq!(parse_leading_number(&normalize_token("-2")), Some(-2.0));
        assert_eq!(parse_leading_number(&normalize_token("nivel: -3,5 m")), Some(-3.5));
        // a range is not a negative number
        assert_eq!(parse_leading_number(&normalize_token("10-20 m")), Some(10.0));
        assert_eq!(normalize_token("Semi-confinado"), "semi confinado");
    }

    #[test]
    fn test_closest_token_suggests_near_match() {
        let (best, similarity) =
            closest_token("confinad", &["libre", "confinado", "semiconfinado"]).expect("non-empty");
        assert_eq!(best, "confinado");
        assert!(similarity > 0.9);
        assert!(closest_token("x", &[]).is_none());
    }
}
