use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        4
    } else {
        UnicodeWidthStr::width(g)
    }
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for g in s.graphemes(true) {
        let gw = grapheme_display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(g);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Byte offset where the line containing `byte_offset` starts.
pub fn line_start(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Byte offset where the line containing `byte_offset` ends (before its `\n`).
pub fn line_end(s: &str, byte_offset: usize) -> usize {
    s[byte_offset..]
        .find('\n')
        .map_or(s.len(), |i| byte_offset + i)
}

/// Line index and display column of `byte_offset`.
pub fn line_and_col(s: &str, byte_offset: usize) -> (usize, usize) {
    let line = s[..byte_offset].matches('\n').count();
    let start = line_start(s, byte_offset);
    (line, display_width(&s[start..byte_offset]))
}

/// Byte offset for display column `col` on line `line`, snapping to a
/// grapheme boundary. Past the last line, returns `s.len()`.
pub fn offset_at_line_col(s: &str, line: usize, col: usize) -> usize {
    let mut start = 0;
    for _ in 0..line {
        match s[start..].find('\n') {
            Some(i) => start += i + 1,
            None => return s.len(),
        }
    }
    let end = line_end(s, start);
    let mut width = 0;
    for (i, g) in s[start..end].grapheme_indices(true) {
        let gw = grapheme_display_width(g);
        if width + gw > col {
            return start + i;
        }
        width += gw;
    }
    end
}
