/// What the advisor can read out of a free-text stipend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StipendValue {
    /// Mentions "unpaid" anywhere, or is exactly "0".
    Unpaid,
    /// First run of digits found in the text, e.g. `15000` for "INR 15000/month".
    Amount(u64),
    /// Paid or unknown, with no digits to go on.
    Unspecified,
}

pub fn parse_stipend(raw: &str) -> StipendValue {
    let text = raw.trim().to_lowercase();
    if text.contains("unpaid") || text == "0" {
        return StipendValue::Unpaid;
    }

    match first_digit_run(&text) {
        Some(amount) => StipendValue::Amount(amount),
        None => StipendValue::Unspecified,
    }
}

/// Value of the first maximal run of ASCII digits. Absurdly long runs saturate.
fn first_digit_run(text: &str) -> Option<u64> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let amount = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            let value = u64::from(digit as u8 - b'0');
            acc.saturating_mul(10).saturating_add(value)
        });
    Some(amount)
}
