//! Printable-ASCII filtering for string leaves.

/// `true` for `' '..='~'` (0x20 through 0x7E).
#[inline]
pub fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

#[inline]
fn is_printable_byte(b: u8) -> bool {
    matches!(b, b' '..=b'~')
}

/// Keep only printable-ASCII characters of `s`, in order.
///
/// Every byte of a multi-byte UTF-8 sequence is >= 0x80, so filtering bytes
/// drops whole non-ASCII characters and never splits one.
pub fn trim_str(s: &str) -> String {
    s.bytes()
        .filter(|&b| is_printable_byte(b))
        .map(char::from)
        .collect()
}

/// Owned variant of [`trim_str`]; returns `s` unchanged when nothing needs removing.
pub fn trim_string(s: String) -> String {
    if s.bytes().all(is_printable_byte) {
        s
    } else {
        trim_str(&s)
    }
}
