//! Display formatting for money amounts

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Formats `value` for display without currency symbol or grouping.
///
/// Full mode always shows two decimals. Abbreviated mode drops needless
/// decimals and compacts thousands and millions with `K` and `M`. The
/// thresholds use the magnitude; the sign is carried through, so `-1500`
/// becomes `-1.5K`.
pub fn format_currency(value: Option<f64>, abbreviated: bool) -> String {
    let Some(value) = value else {
        return String::new();
    };

    if !abbreviated {
        return fixed(value, 2);
    }

    let magnitude = value.abs();
    if magnitude < THOUSAND {
        if is_integral(value) || fixed(value, 2).ends_with(".00") {
            whole(value)
        } else {
            fixed(value, 1)
        }
    } else if magnitude < MILLION {
        compact(value / THOUSAND, 'K')
    } else {
        compact(value / MILLION, 'M')
    }
}

fn compact(quotient: f64, suffix: char) -> String {
    if is_integral(quotient) {
        format!("{}{suffix}", whole(quotient))
    } else {
        format!("{}{suffix}", fixed(quotient, 1))
    }
}

fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}

/// Integer part, truncated toward zero.
fn whole(value: f64) -> String {
    without_negative_zero(format!("{:.0}", value.trunc()))
}

/// Rounds the exact binary value to `places` decimals, ties away from zero.
fn fixed(value: f64, places: usize) -> String {
    let text = if is_tie(value, places) {
        round_tie_away(value, places)
    } else {
        format!("{value:.places$}")
    };
    without_negative_zero(text)
}

/// True when `value` lies exactly halfway between two `places`-decimal numbers.
///
/// That happens iff `value * 2^(places + 1)` is an odd integer; scaling by a
/// power of two is exact.
fn is_tie(value: f64, places: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let scaled = value * 2f64.powi(places as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 != 0.0
}

/// A tie has an exact expansion of `places + 1` digits ending in 5; drop the 5
/// and bump the last kept digit.
fn round_tie_away(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", places + 1, value.abs());
    let mut digits: Vec<u8> = exact.into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let magnitude = String::from_utf8_lossy(&digits).into_owned();
    if value < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

fn without_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}
