// Small numeric and formatting helpers shared by the report and console code.
use num_format::{Locale, ToFormattedString};

/// Round to two decimal places, halves away from zero.
///
/// `1/3` becomes `0.33`, `1/2` stays `0.5`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a rounded ratio in its shortest decimal form, keeping at least one
/// fractional digit (`1.0`, `0.5`, `0.33`). No zero padding is added.
pub fn format_percentage(value: f64) -> String {
    // `Debug` for f64 is the shortest round-trip form and always keeps the
    // decimal point, unlike `Display`.
    format!("{:?}", value)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Counts in console messages, e.g. `32,434,489 order lines`.
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(7.0 / 100.0), 0.07);
    }

    #[test]
    fn percentage_keeps_natural_form() {
        assert_eq!(format_percentage(1.0), "1.0");
        assert_eq!(format_percentage(0.0), "0.0");
        assert_eq!(format_percentage(round2(0.5)), "0.5");
        assert_eq!(format_percentage(round2(1.0 / 3.0)), "0.33");
        assert_eq!(format_percentage(round2(0.1 + 0.2)), "0.3");
    }

    #[test]
    fn int_has_separators() {
        assert_eq!(format_int(1_234_567usize), "1,234,567");
        assert_eq!(format_int(12usize), "12");
    }
}
