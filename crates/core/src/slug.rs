use std::collections::HashMap;

/// Recognizes an explicit `{#custom-id}` suffix on heading text.
///
/// Returns the cleaned text and the id when the suffix is present and the
/// id is made of ASCII alphanumerics, hyphens, or underscores.
///
/// # Examples
///
/// ```
/// use cjkmd_core::slug::extract_custom_id;
///
/// assert_eq!(
///     extract_custom_id("My Heading {#my-heading}"),
///     Some(("My Heading", "my-heading"))
/// );
/// assert_eq!(extract_custom_id("Plain heading"), None);
/// ```
pub fn extract_custom_id(text: &str) -> Option<(&str, &str)> {
    let trimmed = text.trim_end();
    let rest = trimmed.strip_suffix('}')?;
    let open = rest.rfind("{#")?;
    let id = &rest[open + 2..];
    if id.is_empty()
        || !id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return None;
    }
    Some((trimmed[..open].trim_end(), id))
}

/// One-shot slug generation with github-slugger's algorithm:
/// lowercase, drop everything that is neither alphanumeric, `-`, `_`,
/// nor a combining mark, turn spaces into hyphens. No hyphen collapsing
/// or trimming.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' ' => slug.push('-'),
            _ if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' => {
                slug.push(ch.to_ascii_lowercase());
            }
            _ if !ch.is_ascii() && (ch.is_alphanumeric() || is_combining_mark(ch)) => {
                slug.extend(ch.to_lowercase());
            }
            _ => {}
        }
    }
    // Anchors must not be empty.
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

/// Slug generator that keeps per-document state so repeated heading text
/// gets `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next unique slug for the given heading text.
    pub fn slug(&mut self, text: &str) -> String {
        self.dedupe(slugify(text))
    }

    /// Reserves an explicit id so later generated slugs will not collide
    /// with it.
    pub fn reserve(&mut self, id: &str) {
        *self.seen.entry(id.to_string()).or_insert(0) += 1;
    }

    fn dedupe(&mut self, mut slug: String) -> String {
        let count = self.seen.entry(slug.clone()).or_insert(0);
        if *count > 0 {
            slug = format!("{slug}-{count}");
        }
        *count += 1;
        slug
    }
}

/// True for combining marks that must survive slugging (diacritics, kana
/// voicing marks, ideographic tone marks).
fn is_combining_mark(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x0300..=0x036F      // combining diacritical marks
        | 0x1AB0..=0x1AFF    // extended
        | 0x1DC0..=0x1DFF    // supplement
        | 0x20D0..=0x20FF    // marks for symbols
        | 0x302A..=0x302F    // ideographic tone marks
        | 0x3099..=0x309A    // kana voicing marks
        | 0xFE20..=0xFE2F    // half marks
    )
}
