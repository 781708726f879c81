// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::io::{self, Write};

use crate::analyze::Stats;

/// One printable section of the report, identified by the number the user
/// types at the menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Section {
    Lines = 1,
    Chars = 2,
    EmptyLines = 3,
    Frequency = 4,
}

impl Section {
    // Digit tokens only, but leading zeros are fine ("01" selects 1)
    fn from_id(id: &str) -> Option<Section> {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match id.parse::<u32>() {
            Ok(1) => Some(Section::Lines),
            Ok(2) => Some(Section::Chars),
            Ok(3) => Some(Section::EmptyLines),
            Ok(4) => Some(Section::Frequency),
            _ => None,
        }
    }
}

/// Parse a selection like `"1 3,4"` into a deduplicated section list in
/// report order. Tokens that are not section numbers are ignored.
pub(crate) fn parse_selection(input: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if let Some(section) = Section::from_id(token) {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
    }
    sections.sort_by_key(|s| *s as u8);
    sections
}

/// Render the selected sections. The frequency table is sorted by
/// descending count, ties by character, so output is deterministic.
pub(crate) fn write_report<W: Write>(
    w: &mut W,
    stats: &Stats,
    sections: &[Section],
) -> io::Result<()> {
    for section in sections {
        match section {
            Section::Lines => writeln!(w, "Lines: {}", stats.line_count)?,
            Section::Chars => writeln!(w, "Characters: {}", stats.char_count)?,
            Section::EmptyLines => writeln!(w, "Empty lines: {}", stats.empty_line_count)?,
            Section::Frequency => {
                writeln!(w, "Character frequencies (character -> count):")?;
                let mut freq = stats
                    .char_freq
                    .iter()
                    .map(|(c, n)| (*c, *n))
                    .collect::<Vec<_>>();
                freq.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
                for (c, n) in freq {
                    writeln!(w, "  {:<4} -> {}", escape_char(c), n)?;
                }
            }
        }
    }
    Ok(())
}

fn escape_char(c: char) -> String {
    match c {
        '\n' => "\\n".to_owned(),
        '\t' => "\\t".to_owned(),
        ' ' => "' '".to_owned(),
        _ => c.to_string(),
    }
}
