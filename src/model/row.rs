//! Row model - one line of the document plus its tab-expanded render

/// Default tab stop for rendering
pub const DEFAULT_TAB_STOP: usize = 8;

/// A single line of text
///
/// `chars` holds the raw bytes exactly as they will be saved. `render` is
/// derived from `chars` by tab expansion and is rebuilt by every mutating
/// method, so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// Create a row from raw bytes
    pub fn new(bytes: &[u8], tab_stop: usize) -> Self {
        let mut row = Self {
            chars: bytes.to_vec(),
            render: Vec::new(),
        };
        row.update_render(tab_stop);
        row
    }

    /// Raw bytes of the row
    #[inline]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Rendered (tab-expanded) bytes of the row
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length of the raw bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Length of the rendered bytes
    #[inline]
    pub fn rsize(&self) -> usize {
        self.render.len()
    }

    /// Rebuild `render` from `chars`
    ///
    /// A tab always emits at least one space and then pads to the next
    /// multiple of `tab_stop`. Every other byte is copied through.
    pub fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.chars.iter().filter(|&&b| b == b'\t').count();

        self.render.clear();
        self.render.reserve(self.chars.len() + tabs * (tab_stop - 1));

        for &byte in &self.chars {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
    }

    /// Convert a raw column to a rendered column
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| {
                if byte == b'\t' {
                    rx + (tab_stop - 1) - (rx % tab_stop) + 1
                } else {
                    rx + 1
                }
            })
    }

    /// Insert a byte at `at`, shifting the tail one position right
    ///
    /// Positions past the end append.
    pub fn insert_byte(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update_render(tab_stop);
    }

    /// Remove the byte at `at`, shifting the tail one position left
    ///
    /// Returns false when `at` is out of range.
    pub fn delete_byte(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update_render(tab_stop);
        true
    }

    /// Append raw bytes to the end of the row
    pub fn append_bytes(&mut self, bytes: &[u8], tab_stop: usize) {
        self.chars.extend_from_slice(bytes);
        self.update_render(tab_stop);
    }
}
