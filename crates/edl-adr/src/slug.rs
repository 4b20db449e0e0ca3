//! Filename derivation.

use deunicode::deunicode;

/// Slug used when a title transliterates to no letters or digits at all.
const EMPTY_SLUG: &str = "untitled";

/// Transliterate `title` to ASCII, lower-case it, and collapse every run of
/// characters other than letters and digits into a single `-`, with no
/// leading or trailing `-`.
pub fn slugify(title: &str) -> String {
  let ascii = deunicode(title);
  let mut slug = String::with_capacity(ascii.len());
  let mut pending_dash = false;

  for c in ascii.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_dash && !slug.is_empty() {
        slug.push('-');
      }
      pending_dash = false;
      slug.push(c.to_ascii_lowercase());
    } else {
      pending_dash = true;
    }
  }

  if slug.is_empty() {
    EMPTY_SLUG.to_owned()
  } else {
    slug
  }
}

/// `{id:04}-{slug}.md` — unique per decision because ids are.
pub fn filename(id: i64, title: &str) -> String {
  format!("{id:04}-{}.md", slugify(title))
}
