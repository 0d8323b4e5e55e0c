//! Number rendering for report lines.
//!
//! Values print as the shortest string that round-trips, always with a
//! fractional part or an exponent so a float never looks like an integer:
//! `2.0`, `1234.5`, `0.0001`, `1e-05`, `1.2345678901234568e+17`.

/// Decimal exponents in `[-4, 16)` print positionally, the rest in
/// scientific notation.
const POSITIONAL_MIN_EXP: i32 = -4;
const POSITIONAL_MAX_EXP: i32 = 16;

pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }

    let sign = if v.is_sign_negative() { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(POSITIONAL_MIN_EXP..POSITIONAL_MAX_EXP).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = if exp < 0 {
        format!("0.{}{digits}", "0".repeat((-exp - 1) as usize))
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };

    format!("{sign}{body}")
}
