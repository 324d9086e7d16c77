use std::sync::LazyLock;

use regex::Regex;

static FORBIDDEN_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    // Everything outside the allowed set becomes a single hyphen,
    // one hyphen per character, before collapsing.
    Regex::new(r"[^a-z0-9\-_.]").unwrap()
});

static MULTI_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Token substitutions applied to the base segment, in this order.
/// `%` intentionally has no trailing hyphen, unlike the other three.
const SPECIAL_REPLACEMENTS: [(&str, &str); 4] = [
    ("/", "-or-"),
    ("&", "-and-"),
    ("@", "-at-"),
    ("%", "-percent"),
];

/// Normalize a filename into lowercase, hyphen-delimited ASCII.
///
/// The directory part of a path is never passed here; callers hand in a
/// basename only. The extension (from the last interior `.`) is lowercased
/// but otherwise untouched; all other stages apply to the base segment.
///
/// Known limitation: a name whose only `.` is the leading character (e.g.
/// `".bashrc"`, `".Hidden File"`) is classified as all-extension, so it is
/// only lowercased. Spaces and other characters survive in that case. This
/// matches long-standing behavior that callers depend on, so the splitting
/// rule must not be "fixed" to special-case leading dots.
pub fn normalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let (base, ext) = split_extension(name);

    let base = base
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .trim_matches('.');
    let base = base.replace(' ', "-");
    let base = base.to_lowercase();
    let base = substitute_special(&base);
    let base = transliterate(&base);
    let base = FORBIDDEN_CHARS.replace_all(&base, "-");
    let base = MULTI_HYPHEN.replace_all(&base, "-");
    // Leading hyphens only; trailing hyphens are kept.
    let base = base.trim_start_matches('-');

    format!("{}{}", base, ext.to_lowercase())
}

/// Split a name into (base, extension), extension including its dot.
///
/// A lone trailing dot is not an extension, and that rule wins for `"."`
/// itself (whole string becomes the base and the dot-trim empties it). A
/// leading dot with no other dot makes the whole name the extension (the
/// hidden-file case).
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos == name.len() - 1 => (name, ""),
        Some(0) => ("", name),
        Some(pos) => name.split_at(pos),
        None => (name, ""),
    }
}

fn substitute_special(base: &str) -> String {
    let mut result = base.to_string();
    for (from, to) in SPECIAL_REPLACEMENTS {
        result = result.replace(from, to);
    }
    result
}

/// Map accented Latin letters and typographic punctuation to ASCII.
/// Runs after lowercasing, so the table is lowercase-keyed. Unmapped
/// characters pass through for the forbidden-character filter to handle.
fn transliterate(base: &str) -> String {
    let mut result = String::with_capacity(base.len());
    for ch in base.chars() {
        match transliterate_char(ch) {
            Some(mapped) => result.push_str(mapped),
            None => result.push(ch),
        }
    }
    result
}

fn transliterate_char(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => "a",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => "o",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'ñ' => "n",
        'ç' => "c",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{2018}' | '\u{2019}' => "'",
        '\u{201C}' | '\u{201D}' => "\"",
        _ => return None,
    };
    Some(mapped)
}
