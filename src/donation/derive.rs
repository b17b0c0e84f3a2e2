//! Numbers pulled out of free-text donation fields, only used for sorting.

/// Hours assigned to an expiry text the heuristic does not understand,
/// large enough to sort after any realistic duration.
pub const UNKNOWN_EXPIRY_HOURS: i64 = 999_999;

/// Convert an expiry text such as `4 hours`, `tomorrow` or `2-3 days` into hours.
///
/// Keywords are checked in order `hour`, `today`, `tomorrow`, `day`, `week`, `month`.
/// Ranges are not understood: `2-3 days` is two days.
pub fn expiry_hours(expiry: &str) -> i64 {
    let scaled = |factor: i64| {
        leading_integer(expiry).map_or(UNKNOWN_EXPIRY_HOURS, |n| n.saturating_mul(factor))
    };

    if expiry.contains("hour") {
        scaled(1)
    } else if expiry.contains("today") {
        24
    } else if expiry.contains("tomorrow") {
        48
    } else if expiry.contains("day") {
        scaled(24)
    } else if expiry.contains("week") {
        scaled(24 * 7)
    } else if expiry.contains("month") {
        scaled(24 * 30)
    } else {
        UNKNOWN_EXPIRY_HOURS
    }
}

/// The first number inside a quantity text such as `25 kg mixed`, 0 if there is none.
pub fn quantity_magnitude(quantity: &str) -> u64 {
    let Some(start) = quantity.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };
    let digits = &quantity[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse().unwrap_or(u64::MAX)
}

/// Integer prefix of a text after leading whitespace, with an optional sign.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);

    if digits_len == 0 {
        return None;
    }

    text[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_keywords() {
        assert_eq!(expiry_hours("4 hours"), 4);
        assert_eq!(expiry_hours("1 hour"), 1);
        assert_eq!(expiry_hours("before end of today"), 24);
        assert_eq!(expiry_hours("tomorrow evening"), 48);
        assert_eq!(expiry_hours("3 days"), 72);
        assert_eq!(expiry_hours("2 weeks"), 336);
        assert_eq!(expiry_hours("2-6 months"), 1440);
    }

    #[test]
    fn expiry_range_takes_lower_bound() {
        assert_eq!(expiry_hours("2-3 days"), 48);
    }

    #[test]
    fn expiry_hour_wins_over_day() {
        // "hour" is checked first even when "day" also appears
        assert_eq!(expiry_hours("12 hours (half a day)"), 12);
    }

    #[test]
    fn expiry_unrecognized() {
        assert_eq!(expiry_hours("long shelf life"), UNKNOWN_EXPIRY_HOURS);
        assert_eq!(expiry_hours(""), UNKNOWN_EXPIRY_HOURS);
        assert_eq!(expiry_hours("a few hours"), UNKNOWN_EXPIRY_HOURS);
        // matching is case sensitive
        assert_eq!(expiry_hours("4 HOURS"), UNKNOWN_EXPIRY_HOURS);
    }

    #[test]
    fn expiry_leading_whitespace_and_sign() {
        assert_eq!(expiry_hours("  6 hours"), 6);
        assert_eq!(expiry_hours("+2 days"), 48);
        assert_eq!(expiry_hours("-1 days"), -24);
    }

    #[test]
    fn quantity_first_number() {
        assert_eq!(quantity_magnitude("20 servings"), 20);
        assert_eq!(quantity_magnitude("about 25 kg, 3 boxes"), 25);
        assert_eq!(quantity_magnitude("plenty"), 0);
        assert_eq!(quantity_magnitude(""), 0);
        assert_eq!(quantity_magnitude("99999999999999999999999 grains"), u64::MAX);
    }
}
