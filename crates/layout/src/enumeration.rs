//! Row labels: `1.`, `2.` for top-level rows and `a.`, `b.` below them.

/// Bijective base-26 letters: 1 → `a`, 26 → `z`, 27 → `aa`.
pub fn alphabetic(number: u32) -> String {
    let mut letters = Vec::new();
    let mut n = number;
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Label drawn in front of a row, empty for unnumbered rows.
pub fn enumeration_label(sequence_number: Option<u32>, depth: usize) -> String {
    match sequence_number {
        None | Some(0) => String::new(),
        Some(n) if depth == 0 => format!("{}.", n),
        Some(n) => format!("{}.", alphabetic(n)),
    }
}
