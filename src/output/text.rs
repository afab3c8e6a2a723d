//! Plain-text report.
//!
//! # Layout
//!
//! ```text
//! ------------------------------
//! RESULTS
//! ------------------------------
//! Folders             : 2
//! Files               : 3
//! Dups Found          : 1
//! ------------------------------
//! 5D41402ABC4B2A76B9719D911017C592
//!
//! /data/a.txt
//! /data/sub/c.txt
//! ------------------------------
//! ```
//!
//! Rendering is a pure function of the groups and counters. Writing the
//! text anywhere is the caller's job.

use std::fmt::Write;

use crate::duplicates::DuplicateGroup;
use crate::scanner::Counters;

/// Width of summary labels.
const LABEL_WIDTH: usize = 20;
/// Width of separator rules.
const RULE_WIDTH: usize = 30;
const RULE_CHAR: char = '-';

/// Render the report for `groups` and `counters`.
///
/// # Example
///
/// ```
/// use dupcheck::output::text::render;
/// use dupcheck::scanner::Counters;
///
/// let counters = Counters { files: 2, directories: 1, skipped_files: 0 };
/// let report = render(&[], &counters);
/// assert!(report.contains("Dups Found          : 0"));
/// ```
#[must_use]
pub fn render(groups: &[DuplicateGroup], counters: &Counters) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = render_into(&mut out, groups, counters);
    out
}

fn render_into(
    out: &mut String,
    groups: &[DuplicateGroup],
    counters: &Counters,
) -> std::fmt::Result {
    let rule = RULE_CHAR.to_string().repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "RESULTS")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<width$}: {}",
        "Folders",
        counters.directories,
        width = LABEL_WIDTH
    )?;
    writeln!(
        out,
        "{:<width$}: {}",
        "Files",
        counters.files,
        width = LABEL_WIDTH
    )?;
    writeln!(
        out,
        "{:<width$}: {}",
        "Dups Found",
        groups.len(),
        width = LABEL_WIDTH
    )?;
    writeln!(out, "{rule}")?;

    for group in groups {
        writeln!(out, "{}", group.fingerprint)?;
        writeln!(out)?;
        for path in &group.paths {
            writeln!(out, "{}", path.display())?;
        }
        writeln!(out, "{rule}")?;
    }

    Ok(())
}
