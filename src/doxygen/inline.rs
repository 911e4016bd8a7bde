//! Inline escapes and word commands inside prose and tag bodies.

/// Backslash escapes. `\<` and `\>` emit the entity followed by the literal
/// character.
const ESCAPES: &[(char, &str)] = &[
    ('<', "&lt;<"),
    ('>', "&gt;>"),
    ('\\', "\\"),
    ('@', "@"),
    ('&', "&"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Italic,
    Strong,
}

/// Commands that format the following word.
const WORD_COMMANDS: &[(&str, Emphasis)] = &[
    ("a", Emphasis::Italic),
    ("e", Emphasis::Italic),
    ("em", Emphasis::Italic),
    ("p", Emphasis::Italic),
    ("c", Emphasis::Italic),
    ("b", Emphasis::Strong),
];

/// True when `name` is an inline word command rather than a paragraph tag.
pub fn is_word_command(name: &str) -> bool {
    WORD_COMMANDS.iter().any(|(n, _)| *n == name)
}

/// Render one line of prose or tag text.
pub fn render(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            if let Some(&next) = chars.get(i + 1) {
                if let Some((_, html)) = ESCAPES.iter().find(|(e, _)| *e == next) {
                    out.push_str(html);
                    i += 2;
                    continue;
                }
            }
        }
        if (c == '\\' || c == '@') && (i == 0 || chars[i - 1].is_whitespace()) {
            if let Some(next) = word_command(&chars, i, &mut out) {
                i = next;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Try to expand a word command starting at `start`; returns the index just
/// past the formatted word.
fn word_command(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let name_end = scan(chars, start + 1, |c| c.is_ascii_alphabetic());
    let name: String = chars[start + 1..name_end].iter().collect();
    let (_, emphasis) = WORD_COMMANDS.iter().find(|(n, _)| *n == name)?;

    let word_start = scan(chars, name_end, |c| c == ' ' || c == '\t');
    if word_start == name_end && name_end < chars.len() {
        // `\bold` is not `\b old`
        return None;
    }
    let word_end = scan(chars, word_start, |c| {
        c.is_alphanumeric() || c == '_' || c == ':'
    });
    if word_end == word_start {
        return None;
    }

    let word: String = chars[word_start..word_end].iter().collect();
    match emphasis {
        Emphasis::Italic => out.push_str(&format!("<i>{}</i>", word)),
        Emphasis::Strong => out.push_str(&format!("<strong>{}</strong>", word)),
    }
    Some(word_end)
}

fn scan(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = from;
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}
