//! Document model - the ordered rows of the open file and its dirty state

use std::path::{Path, PathBuf};

use super::row::{Row, DEFAULT_TAB_STOP};

/// Document state - the text rows and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// Rows in file line order
    rows: Vec<Row>,
    /// Count of content-changing operations since the last load or save
    pub dirty: usize,
    /// Path to the file on disk (None for a new, unnamed document)
    pub file_path: Option<PathBuf>,
    /// Tab stop used when rendering every row
    tab_stop: usize,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_tab_stop(DEFAULT_TAB_STOP)
    }

    /// Create a new empty document with a custom tab stop
    pub fn with_tab_stop(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            file_path: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Create a document from already-split lines
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self::new();
        for line in lines {
            doc.append_row(line.as_ref());
        }
        doc.dirty = 0;
        doc
    }

    /// Parse file content into rows
    ///
    /// Lines are split on `\n` and lose any trailing run of `\r`/`\n`. A final
    /// line without a terminator is kept; empty input yields no rows.
    pub fn from_bytes(content: &[u8], tab_stop: usize) -> Self {
        let mut doc = Self::with_tab_stop(tab_stop);
        let mut rest = content;
        while !rest.is_empty() {
            let (line, tail) = match rest.iter().position(|&b| b == b'\n') {
                Some(idx) => (&rest[..idx + 1], &rest[idx + 1..]),
                None => (rest, &rest[rest.len()..]),
            };
            doc.append_row(strip_line_ending(line));
            rest = tail;
        }
        doc.dirty = 0;
        doc
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the path given on the command line does not exist yet.
    /// The file will be created when the user saves.
    pub fn new_with_path(path: PathBuf, tab_stop: usize) -> Self {
        let mut doc = Self::with_tab_stop(tab_stop);
        doc.file_path = Some(path);
        doc
    }

    /// Get the display name for the status bar
    pub fn display_name(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "[No Name]".to_string(),
        }
    }

    /// Path to the file on disk, if any
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Number of real rows (the cursor may also sit on the virtual row `num_rows()`)
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the document has no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether there are unsaved changes
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Get a row by index
    #[inline]
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Length of the raw row at `idx` (0 for the virtual row)
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::size)
    }

    #[inline]
    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Append a row with exactly the given bytes
    pub fn append_row(&mut self, bytes: &[u8]) {
        self.rows.push(Row::new(bytes, self.tab_stop));
        self.dirty += 1;
    }

    /// Remove the row at `idx`; later rows shift up by one
    fn delete_row(&mut self, idx: usize) {
        if idx >= self.rows.len() {
            return;
        }
        self.rows.remove(idx);
        self.dirty += 1;
    }

    /// Insert a byte at `(cy, cx)`
    ///
    /// Inserting on the virtual row first appends an empty row.
    pub fn insert_char(&mut self, cy: usize, cx: usize, ch: u8) {
        if cy == self.rows.len() {
            self.append_row(b"");
        }
        let tab_stop = self.tab_stop;
        let Some(row) = self.rows.get_mut(cy) else {
            return;
        };
        row.insert_byte(cx, ch, tab_stop);
        self.dirty += 1;
    }

    /// Delete the byte before `(cy, cx)`, joining rows at column 0
    ///
    /// Returns the new cursor position `(cy, cx)`, or `None` when nothing was
    /// deleted (virtual row, or the very start of the document).
    pub fn delete_char(&mut self, cy: usize, cx: usize) -> Option<(usize, usize)> {
        if cy >= self.rows.len() {
            return None;
        }
        let cx = cx.min(self.rows[cy].size());
        if cx == 0 && cy == 0 {
            return None;
        }
        let tab_stop = self.tab_stop;

        if cx > 0 {
            if self.rows[cy].delete_byte(cx - 1, tab_stop) {
                self.dirty += 1;
            }
            return Some((cy, cx - 1));
        }

        let joined_at = self.rows[cy - 1].size();
        let moved = self.rows[cy].chars().to_vec();
        self.rows[cy - 1].append_bytes(&moved, tab_stop);
        self.dirty += 1;
        self.delete_row(cy);
        Some((cy - 1, joined_at))
    }

    /// Serialize rows to the on-disk format: every row followed by `\n`
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.size() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(row.chars());
            buf.push(b'\n');
        }
        buf
    }

    /// Mark the document as matching what is on disk
    pub fn mark_saved(&mut self) {
        self.dirty = 0;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}
