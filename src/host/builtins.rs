//! Builtin English symbol pronunciations.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Spoken names for punctuation and whitespace, lazily initialized.
pub static BUILTIN_SYMBOLS: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    [
        // ==================== Whitespace ====================
        (' ', "space"),
        ('\t', "tab"),
        ('\n', "line feed"),
        ('\r', "carriage return"),
        ('\u{a0}', "no-break space"),
        ('\u{ad}', "soft hyphen"),
        // ==================== Punctuation ====================
        ('!', "bang"),
        ('"', "quote"),
        ('#', "number"),
        ('$', "dollar"),
        ('%', "percent"),
        ('&', "and"),
        ('\'', "tick"),
        ('(', "left paren"),
        (')', "right paren"),
        ('*', "star"),
        ('+', "plus"),
        (',', "comma"),
        ('-', "dash"),
        ('.', "dot"),
        ('/', "slash"),
        (':', "colon"),
        (';', "semi"),
        ('<', "less"),
        ('=', "equals"),
        ('>', "greater"),
        ('?', "question"),
        ('@', "at"),
        ('[', "left bracket"),
        ('\\', "backslash"),
        (']', "right bracket"),
        ('^', "caret"),
        ('_', "line"),
        ('`', "graav"),
        ('{', "left brace"),
        ('|', "bar"),
        ('}', "right brace"),
        ('~', "tilda"),
        // ==================== Typography ====================
        ('\u{2018}', "left tick"),
        ('\u{2019}', "right tick"),
        ('\u{201c}', "left quote"),
        ('\u{201d}', "right quote"),
        ('\u{2013}', "en dash"),
        ('\u{2014}', "em dash"),
        ('\u{2026}', "dot dot dot"),
        ('\u{2022}', "bullet"),
        ('\u{a7}', "section"),
        ('\u{b6}', "pilcrow"),
        ('\u{a9}', "copyright"),
        ('\u{ae}', "registered"),
        ('\u{2122}', "trademark"),
        ('\u{b0}', "degrees"),
        ('\u{20ac}', "euro"),
        ('\u{a3}', "pound"),
    ]
    .into_iter()
    .collect()
});

/// Spoken name of `symbol`, if it has a builtin one.
pub fn builtin_symbol(symbol: char) -> Option<&'static str> {
    BUILTIN_SYMBOLS.get(&symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_has_names() {
        assert_eq!(builtin_symbol('.'), Some("dot"));
        assert_eq!(builtin_symbol(' '), Some("space"));
        assert_eq!(builtin_symbol('\u{2026}'), Some("dot dot dot"));
    }

    #[test]
    fn letters_and_digits_have_none() {
        assert_eq!(builtin_symbol('a'), None);
        assert_eq!(builtin_symbol('Z'), None);
        assert_eq!(builtin_symbol('7'), None);
    }
}
