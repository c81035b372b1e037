use log::debug;

/// Clean floating-point noise out of a decimal string
///
/// Applies only to strings with exactly one `.`. Scientific notation in the
/// fractional part is rescaled to plain decimal form. A run of `999` or
/// `000` anywhere marks the value as suspect: values of magnitude above 1
/// are rounded to 3 decimal places, the rest go through the trailing-run
/// formatter. Anything else is returned unchanged.
pub fn clean(text: &str) -> String {
    let dot_parts: Vec<&str> = text.split('.').collect();
    if dot_parts.len() != 2 {
        return text.to_string();
    }
    let (integer, after_dot) = (dot_parts[0], dot_parts[1]);

    let e_parts: Vec<&str> = after_dot.split('e').collect();
    match e_parts.len() {
        1 => {
            if !text.contains("999") && !text.contains("000") {
                return text.to_string();
            }
            let Ok(number) = text.parse::<f64>() else {
                return text.to_string();
            };
            if number > 1.0 || number < -1.0 {
                let rounded = (number * 1000.0).round() / 1000.0;
                debug!("Rounding noisy '{}' to '{}'", text, rounded);
                format!("{}", rounded)
            } else {
                trim_trailing_run(text)
            }
        }
        2 => match rescale(integer, e_parts[0], e_parts[1]) {
            Some(rescaled) => {
                debug!("Rescaled '{}' to '{}'", text, rescaled);
                rescaled
            }
            None => text.to_string(),
        },
        _ => text.to_string(),
    }
}

/// Strip a trailing `.0` so integral results print without a decimal point
pub fn strip_dot_zero(text: &str) -> &str {
    text.strip_suffix(".0").unwrap_or(text)
}

/// Shift the decimal point out of `<integer>.<fraction>e<shift>` notation
///
/// A positive shift appends zeros past the fraction digits; a non-positive
/// shift produces a `0.`-prefixed form (sign preserved) and defers to the
/// trailing-run formatter. Returns `None` when the mantissa fraction is not
/// all digits or the shift is not an integer.
fn rescale(integer: &str, fraction: &str, multiplier: &str) -> Option<String> {
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let shift: i64 = multiplier.parse().ok()?;
    if shift > 0 {
        let zeros = (shift as usize).saturating_sub(fraction.len());
        return Some(format!("{}{}{}", integer, fraction, "0".repeat(zeros)));
    }
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let padding = ((-shift) as usize).saturating_sub(digits.len());
    let shifted = format!("{}0.{}{}{}", sign, "0".repeat(padding), digits, fraction);
    Some(trim_trailing_run(&shifted))
}

/// Drop a trailing run of `9`s or `0`s, along with the final character
///
/// The final character is skipped, then the scan walks backward while
/// characters are `9` or `0`, stopping at a decimal point or any other
/// character. An empty run is a no-op. A `9`-run carries into the digit
/// just before it (across the decimal point if needed); a `0`-run is simply
/// cut. A bare trailing `.` left by the cut is removed.
pub(crate) fn trim_trailing_run(text: &str) -> String {
    let bytes = text.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return text.to_string();
    }
    let mut run_lo = n - 1;
    while run_lo > 0 && matches!(bytes[run_lo - 1], b'9' | b'0') {
        run_lo -= 1;
    }
    if run_lo == n - 1 || run_lo == 0 {
        return text.to_string();
    }
    if bytes[run_lo] == b'9' {
        carry_into(&bytes[..run_lo])
    } else {
        trim_bare_point(&text[..run_lo])
    }
}

/// Increment the last digit of a truncated prefix, cascading through `9`s
/// and across the decimal point
fn carry_into(prefix: &[u8]) -> String {
    let mut digits = prefix.to_vec();
    let mut index = digits.len();
    loop {
        if index == 0 {
            digits.insert(0, b'1');
            break;
        }
        index -= 1;
        match digits[index] {
            b'.' => {}
            b'-' => {
                digits.insert(index + 1, b'1');
                break;
            }
            b'9' => digits[index] = b'0',
            digit => {
                digits[index] = digit + 1;
                break;
            }
        }
    }
    trim_bare_point(&String::from_utf8_lossy(&digits))
}

fn trim_bare_point(text: &str) -> String {
    text.strip_suffix('.').unwrap_or(text).to_string()
}
