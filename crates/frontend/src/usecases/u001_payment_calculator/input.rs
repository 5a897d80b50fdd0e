//! Lenient number parsing for the calculator fields.
//!
//! Values are read the way browsers read them from text inputs: leading
//! whitespace is skipped, the longest numeric prefix is used, and anything
//! unreadable counts as zero.

fn skip_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Longest decimal prefix of `raw` (`"12.5%"` reads as 12.5). Zero when there is none.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (_, unsigned) = skip_sign(trimmed);
    let sign_len = trimmed.len() - unsigned.len();

    let int_len = digits_len(unsigned);
    let mut end = int_len;
    let mut frac_len = 0;
    if unsigned[end..].starts_with('.') {
        frac_len = digits_len(&unsigned[end + 1..]);
        end += 1 + frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return 0.0;
    }

    let rest = &unsigned[end..];
    if let Some(exp) = rest.strip_prefix(&['e', 'E'][..]) {
        let (_, exp_digits) = skip_sign(exp);
        let exp_len = digits_len(exp_digits);
        if exp_len > 0 {
            end += 1 + (exp.len() - exp_digits.len()) + exp_len;
        }
    }

    trimmed[..sign_len + end].parse().unwrap_or(0.0)
}

/// Leading whole number of months (`"12.7"` reads as 12). Negative or unreadable is zero;
/// digit runs too long for `u32` saturate at `u32::MAX`.
pub fn parse_term(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = skip_sign(trimmed);
    let len = digits_len(unsigned);
    if negative || len == 0 {
        return 0;
    }
    unsigned[..len].parse().unwrap_or(u32::MAX)
}
