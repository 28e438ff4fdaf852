/// Convert a free-text lease length into a comparable number of months.
///
/// The leading whitespace-delimited token must be a number; the unit is
/// matched case-insensitively anywhere in the text. Years convert at 12
/// months, weeks at 4 per month (floor division).
///
/// Absent or unparseable input yields 0 ("no duration information"), so a
/// malformed value degrades instead of failing a ranking call.
#[inline]
pub fn lease_months(length: Option<&str>) -> u32 {
    let Some(text) = length else {
        return 0;
    };
    let text = text.to_lowercase();

    let Some(count) = text
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
    else {
        return 0;
    };

    if text.contains("month") {
        count
    } else if text.contains("year") {
        // A year count too large to express in months degrades like any
        // other unusable duration.
        count.checked_mul(12).unwrap_or(0)
    } else if text.contains("week") {
        count / 4
    } else {
        0
    }
}
