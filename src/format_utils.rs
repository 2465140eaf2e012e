/// Volume labels round to the nearest whole unit and group thousands with
/// commas, matching the axis typography.
pub fn format_volume(volume: f64) -> String {
    if !volume.is_finite() {
        return "0".to_string();
    }
    let rounded = volume.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative { format!("-{grouped}") } else { grouped }
}

/// Fallback price formatter when the host supplies none.
pub fn default_price_format(price: f64) -> String {
    format!("{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(950.0), "950");
        assert_eq!(format_volume(1000.0), "1,000");
        assert_eq!(format_volume(1234567.0), "1,234,567");
    }

    #[test]
    fn rounds_before_grouping() {
        assert_eq!(format_volume(999.6), "1,000");
        assert_eq!(format_volume(12.4), "12");
    }

    #[test]
    fn negative_volume_keeps_sign() {
        assert_eq!(format_volume(-1500.0), "-1,500");
    }

    #[test]
    fn non_finite_degrades_to_zero() {
        assert_eq!(format_volume(f64::NAN), "0");
        assert_eq!(format_volume(f64::INFINITY), "0");
    }

    #[test]
    fn default_price_format_two_decimals() {
        assert_eq!(default_price_format(101.5), "101.50");
        assert_eq!(default_price_format(0.125), "0.13");
    }
}
