//! Number and text formatting for cards, badges and table cells.

/// `92.0` renders as `92%`, `85.5` as `85.5%`.
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Rounds halves towards positive infinity, the way browser `Math.round` does.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Digit grouping with commas, keeping at most three fraction digits.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

pub fn rupees(value: f64) -> String {
    format!("₹{}", thousands(value))
}

pub fn dollars(value: f64) -> String {
    format!("${}", thousands(value))
}

/// `70123.0` renders as `$70K`.
pub fn dollars_short(value: f64) -> String {
    format!("${:.0}K", value / 1000.0)
}

/// Keeps the first `max_chars` characters.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
