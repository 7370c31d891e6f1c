/// Insert `,` every three digits of an unsigned digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut out, (i, c)| {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
            out
        })
}

/// Whole-currency amount with thousands separators: `$1,234`, `-$40,000`.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-${}", group_thousands(&digits))
    } else {
        format!("${}", group_thousands(&digits))
    }
}

/// Signed amount without currency, used for deltas: `+37,000`, `-3,000`.
pub fn format_signed_amount(amount: f64) -> String {
    let rounded = amount.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{digits}")
    } else if rounded > 0.0 {
        format!("+{digits}")
    } else {
        digits
    }
}

/// One decimal and a percent sign: `-6.2%`.
pub fn format_percent(value: f64) -> String {
    let formatted = format!("{value:.1}");
    // avoid "-0.0%" for tiny negatives
    if formatted == "-0.0" {
        "0.0%".to_string()
    } else {
        format!("{formatted}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("760000"), "760,000");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(600000.0), "$600,000");
        assert_eq!(format_money(-40000.0), "-$40,000");
        assert_eq!(format_money(294285.714), "$294,286");
        assert_eq!(format_money(-0.2), "$0");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount(37000.0), "+37,000");
        assert_eq!(format_signed_amount(-3000.0), "-3,000");
        assert_eq!(format_signed_amount(0.0), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(-6.24), "-6.2%");
        assert_eq!(format_percent(-6.26), "-6.3%");
        assert_eq!(format_percent(10.19), "10.2%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-0.01), "0.0%");
    }
}
