// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::fs;
use std::io;
use std::path::Path;

use fnv::FnvHashMap;

/// Statistics for one piece of text. A line is a `\n`-terminated chunk of
/// text, plus a possible unterminated final chunk. A line is empty when it
/// is blank after trimming whitespace.
#[derive(Debug)]
pub(crate) struct Stats {
    pub(crate) line_count: usize,
    pub(crate) char_count: usize,
    pub(crate) empty_line_count: usize,
    pub(crate) char_freq: FnvHashMap<char, usize>,
}

impl Stats {
    pub(crate) fn from_text(text: &str) -> Stats {
        let mut line_count = 0;
        let mut empty_line_count = 0;
        for line in text.split_inclusive('\n') {
            line_count += 1;
            if line.trim().is_empty() {
                empty_line_count += 1;
            }
        }
        let mut char_count = 0;
        let mut char_freq = FnvHashMap::default();
        for c in text.chars() {
            char_count += 1;
            *char_freq.entry(c).or_insert(0) += 1;
        }
        Stats {
            line_count,
            char_count,
            empty_line_count,
            char_freq,
        }
    }
}

pub(crate) fn analyze_file<P: AsRef<Path>>(path: P) -> io::Result<Stats> {
    let text = fs::read_to_string(path)?;
    Ok(Stats::from_text(&text))
}
