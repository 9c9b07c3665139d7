//! Area code extraction and the built-in table of well-known codes.

use super::entities::CityLocation;

/// Fallback table: area code -> (city, state).
const WELL_KNOWN: &[(&str, &str, &str)] = &[
    ("602", "Phoenix", "Arizona"),
    ("480", "Tempe", "Arizona"),
    ("212", "Manhattan", "New York"),
    ("415", "San Francisco", "California"),
];

/// First three digits of `phone` after dropping non-digits.
/// Returns `None` when fewer than three digits are present.
pub fn extract_area_code(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).take(3).collect();
    (digits.len() == 3).then_some(digits)
}

/// Lookup in the built-in table.
pub fn well_known(area_code: &str) -> Option<CityLocation> {
    WELL_KNOWN
        .iter()
        .find(|(code, _, _)| *code == area_code)
        .map(|(_, city, state)| CityLocation::new(*city, Some(state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_formatting() {
        assert_eq!(extract_area_code("(602) 555-1234").as_deref(), Some("602"));
        assert_eq!(extract_area_code("415.555.0000").as_deref(), Some("415"));
        // Country code is not stripped: first three digits win.
        assert_eq!(extract_area_code("+1 212 555 0000").as_deref(), Some("121"));
    }

    #[test]
    fn test_extract_too_short() {
        assert_eq!(extract_area_code("55"), None);
        assert_eq!(extract_area_code("5-5"), None);
        assert_eq!(extract_area_code(""), None);
        assert_eq!(extract_area_code("call me"), None);
    }

    #[test]
    fn test_well_known_table() {
        let loc = well_known("480").unwrap();
        assert_eq!(loc.city, "Tempe");
        assert_eq!(loc.state.as_deref(), Some("Arizona"));
        assert!(well_known("999").is_none());
    }
}
