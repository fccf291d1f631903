//! Cifra de César sobre letras ASCII.
//!
//! Letras maiúsculas e minúsculas giram dentro do próprio alfabeto; qualquer
//! outro caractere (espaços, pontuação, dígitos, acentos) é preservado.

const ALPHABET_LEN: i64 = 26;

/// Apply a Caesar shift of `shift` positions to every ASCII letter of `text`.
///
/// Negative shifts decode: `caesar(&caesar(s, k), -k) == s`.
pub fn caesar(text: &str, shift: i64) -> String {
    // Always in 0..26, e.g. -30 becomes 22.
    let shift = shift.rem_euclid(ALPHABET_LEN) as u8;
    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate(c, b'A', shift),
            'a'..='z' => rotate(c, b'a', shift),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    let position = c as u8 - base;
    (base + (position + shift) % ALPHABET_LEN as u8) as char
}
