//! Arabic-Indic numerals for verse-end marks.

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace every ASCII digit in `s` with its Arabic-Indic counterpart.
///
/// This is a per-glyph substitution: digit order is preserved and any
/// non-digit character passes through unchanged.
pub fn arabic_indic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Render `n` in Arabic-Indic digits, e.g. `123` -> `"١٢٣"`.
pub fn to_arabic_indic(n: u32) -> String {
    arabic_indic_digits(&n.to_string())
}
