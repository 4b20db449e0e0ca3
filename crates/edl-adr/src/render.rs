//! The ADR template.
//!
//! Section order and headings are fixed; documentation tooling that parses
//! the generated files relies on them.

use crate::{AdrDocument, Error, Result};

// ─── Section helpers ──────────────────────────────────────────────────────────

fn heading(out: &mut String, level: usize, text: &str) {
  out.push_str(&"#".repeat(level));
  out.push(' ');
  out.push_str(text);
  out.push_str("\n\n");
}

fn bullets(out: &mut String, items: &[String]) {
  for item in items {
    out.push_str(&format!("* {item}\n"));
  }
  if !items.is_empty() {
    out.push('\n');
  }
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Render `doc` as a Markdown ADR.
///
/// Fails with [`Error::MissingField`] when `doc.date` is unset. Empty
/// driver, option and pros/cons lists leave their section headings with no
/// body.
pub fn render(doc: &AdrDocument) -> Result<String> {
  let date = doc.date.as_deref().ok_or(Error::MissingField("date"))?;
  let mut out = String::new();

  heading(&mut out, 1, &format!("{}-{}", doc.id, doc.title));
  out.push_str(&format!("* Status: {}\n* Date: {date}\n\n", doc.status));

  heading(&mut out, 2, "Context and Problem Statement");
  out.push_str(&doc.context);
  out.push_str("\n\n");

  heading(&mut out, 2, "Decision Drivers");
  bullets(&mut out, &doc.drivers);

  heading(&mut out, 2, "Considered Options");
  bullets(&mut out, &doc.options);

  heading(&mut out, 2, "Decision Outcome");
  out.push_str(&format!(
    "Chosen option: \"{}\", because {}\n\n",
    doc.chosen_option, doc.rationale
  ));

  heading(&mut out, 3, "Consequences");
  out.push_str(&format!(
    "* Good: {}\n* Bad: {}\n\n",
    doc.consequences_good, doc.consequences_bad
  ));

  heading(&mut out, 2, "Pros and Cons of the Options");
  for option in &doc.pros_cons {
    heading(&mut out, 3, &option.name);
    out.push_str(&format!(
      "* Good, because {}\n* Bad, because {}\n\n",
      option.pros, option.cons
    ));
  }

  // One trailing newline, whatever the last section was.
  let trimmed = out.trim_end_matches('\n').len();
  out.truncate(trimmed);
  out.push('\n');
  Ok(out)
}
