//! Inline substitutions applied to every piece of text the block formatter
//! emits.
//!
//! Rules run in a fixed order (bold, emphasis, hash, strip). Each rule is a
//! single left-to-right sweep with non-greedy, non-overlapping matches over
//! the output of the previous rule. Unclosed delimiters are left verbatim.

use md5::{Digest, Md5};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
static EMPHASIS_REGEX: OnceLock<Regex> = OnceLock::new();
static HASH_REGEX: OnceLock<Regex> = OnceLock::new();
static STRIP_REGEX: OnceLock<Regex> = OnceLock::new();

fn bold_regex() -> &'static Regex {
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"))
}

fn emphasis_regex() -> &'static Regex {
    EMPHASIS_REGEX.get_or_init(|| Regex::new(r"__(.*?)__").expect("Invalid emphasis regex"))
}

fn hash_regex() -> &'static Regex {
    HASH_REGEX.get_or_init(|| Regex::new(r"\[\[(.*?)\]\]").expect("Invalid hash regex"))
}

fn strip_regex() -> &'static Regex {
    STRIP_REGEX.get_or_init(|| Regex::new(r"\(\((.*?)\)\)").expect("Invalid strip regex"))
}

/// Applies every inline rule to `text`.
///
/// Text containing none of `**`, `__`, `[[` or `((` comes back unchanged; no
/// HTML escaping is performed.
pub fn format_inline(text: &str) -> String {
    let text = bold(text);
    let text = emphasis(&text);
    let text = hash_substitution(&text);
    strip_c(&text).into_owned()
}

/// `**X**` becomes `<b>X</b>`.
pub fn bold(text: &str) -> Cow<'_, str> {
    bold_regex().replace_all(text, "<b>$1</b>")
}

/// `__X__` becomes `<em>X</em>`.
pub fn emphasis(text: &str) -> Cow<'_, str> {
    emphasis_regex().replace_all(text, "<em>$1</em>")
}

/// `[[X]]` becomes the lowercase hex MD5 digest of `X`.
pub fn hash_substitution(text: &str) -> Cow<'_, str> {
    hash_regex().replace_all(text, |caps: &Captures| md5_hex(&caps[1]))
}

/// `((X))` becomes `X` with every `c` and `C` removed.
pub fn strip_c(text: &str) -> Cow<'_, str> {
    strip_regex().replace_all(text, |caps: &Captures| {
        caps[1]
            .chars()
            .filter(|&ch| ch != 'c' && ch != 'C')
            .collect::<String>()
    })
}

/// Lowercase, 32 character hex MD5 digest of the UTF-8 bytes of `input`.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}
