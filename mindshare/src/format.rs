//! Number formatting shared by the table and the CSV export.

/// Text used wherever a number could not be read.
pub const NOT_A_NUMBER: &str = "NaN";

/// Formats a mindshare fraction as a percentage with exactly 4 decimals.
///
/// The value is rounded to the nearest representable 4-digit decimal of the
/// exact binary value, which is what `{:.4}` does. Exact ties go to the even
/// digit. NaN gives `NaN%`, and negative zero prints as `0.0000%`.
///
/// ```
/// assert_eq!(mindshare::format::percent_text(0.07295892783565214), "7.2959%");
/// ```
pub fn percent_text(fraction: f64) -> String {
    let mut pct = fraction * 100.0;
    if pct.is_nan() {
        return format!("{}%", NOT_A_NUMBER);
    }
    if pct == 0.0 {
        pct = 0.0;
    }
    format!("{:.4}%", pct)
}

/// Groups the digits of an integer by thousands with commas: `52400` -> `52,400`.
pub fn group_digits(n: impl Into<i128>) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The grouped display form of a count that may be missing.
pub fn grouped_count_text(n: Option<i64>) -> String {
    n.map(group_digits)
        .unwrap_or_else(|| NOT_A_NUMBER.to_string())
}

/// The raw, ungrouped form of a count that may be missing.
pub fn raw_count_text(n: Option<i64>) -> String {
    n.map(|x| x.to_string())
        .unwrap_or_else(|| NOT_A_NUMBER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_has_four_decimals() {
        assert_eq!(percent_text(0.07295892783565214), "7.2959%");
        assert_eq!(percent_text(0.05295892783565214), "5.2959%");
        assert_eq!(percent_text(1.0), "100.0000%");
        assert_eq!(percent_text(0.0), "0.0000%");
        assert_eq!(percent_text(0.123456789), "12.3457%");
        // Halfway case: the tie goes to the even digit.
        assert_eq!(percent_text(0.0003125), "0.0312%");
    }

    #[test]
    fn percent_negative_zero() {
        assert_eq!(percent_text(-0.0), "0.0000%");
        assert_eq!(percent_text(-0.5), "-50.0000%");
    }

    #[test]
    fn percent_not_clamped() {
        assert_eq!(percent_text(1.5), "150.0000%");
    }

    #[test]
    fn percent_nan() {
        assert_eq!(percent_text(f64::NAN), "NaN%");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(52400), "52,400");
        assert_eq!(group_digits(1234567), "1,234,567");
        assert_eq!(group_digits(-1234567), "-1,234,567");
        assert_eq!(group_digits(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(group_digits(6 * i128::from(i64::MAX)), "55,340,232,221,128,654,842");
    }

    #[test]
    fn missing_counts() {
        assert_eq!(grouped_count_text(None), "NaN");
        assert_eq!(raw_count_text(None), "NaN");
        assert_eq!(grouped_count_text(Some(35400)), "35,400");
        assert_eq!(raw_count_text(Some(35400)), "35400");
    }
}
