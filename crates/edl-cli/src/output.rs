//! Console rendering: plain-text tables, the detail view, and JSON.

use edl_core::Decision;

/// Print `rows` under `headers` with left-aligned, space-padded columns.
pub fn table(title: &str, headers: &[&str], rows: &[Vec<String>]) {
  let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
  for row in rows {
    for (w, cell) in widths.iter_mut().zip(row) {
      *w = (*w).max(cell.chars().count());
    }
  }

  let line = |cells: &[String]| {
    cells
      .iter()
      .zip(&widths)
      .map(|(c, &w)| format!("{c:<w$}"))
      .collect::<Vec<_>>()
      .join("  ")
      .trim_end()
      .to_string()
  };

  println!("{title}");
  println!();
  let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
  println!("{}", line(&header_cells));
  let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
  println!("{}", line(&rule));
  for row in rows {
    println!("{}", line(row));
  }
}

/// Full detail view of one decision.
pub fn detail(d: &Decision) {
  println!("Decision #{}: {}", d.id, d.title);
  println!("Status: {}", d.status);
  println!("Date: {}", d.date);
  println!("\nContext:\n{}", d.context);
  if !d.drivers.is_empty() {
    println!("\nDrivers:");
    for driver in &d.drivers {
      println!("  * {driver}");
    }
  }
  if !d.options.is_empty() {
    println!("\nConsidered Options:");
    for option in &d.options {
      println!("  * {option}");
    }
  }
  println!("\nChosen Option: {}", d.chosen_option);
  println!("\nRationale:\n{}", d.rationale);
  if !d.consequences_good.is_empty() || !d.consequences_bad.is_empty() {
    println!("\nConsequences:");
    println!("  Good: {}", d.consequences_good);
    println!("  Bad: {}", d.consequences_bad);
  }
  if let Some(hash) = &d.commit_hash {
    println!("\nCommit Hash: {hash}");
  }
}

pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
