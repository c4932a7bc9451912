//! Fixed-precision rounding and number formatting for emitted documents.
//!
//! Every number that reaches the output document is quantized to 4 decimal
//! places at the point where it is derived; the emitters below never round
//! again.

/// Round to 4 decimal places.
#[inline]
pub fn round4(v: f32) -> f32 {
    (v * 10_000.0).round() / 10_000.0
}

/// Format an already-quantized number for a code fragment.
/// Shortest decimal form: `2` rather than `2.0`, `0.0125` as-is.
pub fn fmt_num(v: f32) -> String {
    let r = round4(v);
    if r == 0.0 {
        // normalize -0.0
        return "0".to_string();
    }
    format!("{r}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round4_quantizes() {
        assert_eq!(round4(0.123_449), 0.1234);
        assert_eq!(round4(0.123_45), 0.1235);
        assert_eq!(round4(90.000_21), 90.0002);
    }

    #[test]
    fn fmt_num_shortest_form() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(1.0417), "1.0417");
        assert_eq!(fmt_num(0.0125), "0.0125");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-1.5), "-1.5");
    }
}
