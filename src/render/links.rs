//! Detection of URLs and phone numbers inside field values.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http`/`https` links; the last character must not be sentence punctuation.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[A-Za-z0-9_/.-]*[A-Za-z0-9_/-]").expect("URL pattern is valid")
});

/// Replace every URL in `text` with `format(url)`, scanning left to right.
///
/// Text outside the matches is copied unchanged.
pub fn replace_urls<F>(text: &str, mut format: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for m in URL_PATTERN.find_iter(text) {
        output.push_str(&text[last..m.start()]);
        output.push_str(&format(m.as_str()));
        last = m.end();
    }
    output.push_str(&text[last..]);
    output
}

/// Split a ten-digit phone number into area code, exchange and line number.
///
/// Returns `None` for anything other than exactly ten ASCII digits.
pub fn phone_parts(phone: &str) -> Option<(&str, &str, &str)> {
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&phone[0..3], &phone[3..6], &phone[6..10]))
}
