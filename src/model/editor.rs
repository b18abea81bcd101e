//! Editor state - cursor position, viewport, and scrolling

use super::document::Document;
use crate::messages::Direction;

/// Cursor position in the document
///
/// `cy` may equal `num_rows()`: the virtual row past the last line, where the
/// next inserted character creates a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Raw column (byte index into the row)
    pub cx: usize,
    /// Row index (0-indexed)
    pub cy: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at a specific position
    pub fn at(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }
}

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row
    pub rowoff: usize,
    /// First visible rendered column
    pub coloff: usize,
    /// Number of text rows that fit on screen (excludes status and message bars)
    pub screenrows: usize,
    /// Number of columns that fit on screen
    pub screencols: usize,
}

impl Viewport {
    /// Create a new viewport with the given text-area dimensions
    pub fn new(screenrows: usize, screencols: usize) -> Self {
        Self {
            rowoff: 0,
            coloff: 0,
            screenrows,
            screencols,
        }
    }

    /// Build a viewport from the full terminal size, reserving two rows
    /// for the status bar and the message bar
    pub fn for_terminal(rows: usize, cols: usize) -> Self {
        Self::new(rows.saturating_sub(2), cols)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(22, 80)
    }
}

/// Editor state - cursor and viewport over the single open document
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor: Cursor,
    /// Rendered column of the cursor, recomputed by `scroll`
    pub rx: usize,
    pub viewport: Viewport,
}

impl EditorState {
    /// Create an editor state with the cursor at the origin
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cursor: Cursor::new(),
            rx: 0,
            viewport,
        }
    }

    /// Move the cursor one step, clamping the column to the new row
    pub fn move_cursor(&mut self, document: &Document, direction: Direction) {
        let num_rows = document.num_rows();
        let on_real_row = self.cursor.cy < num_rows;

        match direction {
            Direction::Left => {
                if self.cursor.cx != 0 {
                    self.cursor.cx -= 1;
                } else if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                    self.cursor.cx = document.row_len(self.cursor.cy);
                }
            }
            Direction::Right => {
                if on_real_row {
                    let len = document.row_len(self.cursor.cy);
                    if self.cursor.cx < len {
                        self.cursor.cx += 1;
                    } else {
                        self.cursor.cy += 1;
                        self.cursor.cx = 0;
                    }
                }
            }
            Direction::Up => {
                self.cursor.cy = self.cursor.cy.saturating_sub(1);
            }
            Direction::Down => {
                if self.cursor.cy < num_rows {
                    self.cursor.cy += 1;
                }
            }
        }

        self.clamp_cursor_column(document);
    }

    /// Clamp `cx` to the length of the cursor's row (0 on the virtual row)
    pub fn clamp_cursor_column(&mut self, document: &Document) {
        let len = document.row_len(self.cursor.cy);
        if self.cursor.cx > len {
            self.cursor.cx = len;
        }
    }

    /// Move to the start of the current row
    pub fn move_cursor_line_start(&mut self) {
        self.cursor.cx = 0;
    }

    /// Move to the end of the current row (no-op on the virtual row)
    pub fn move_cursor_line_end(&mut self, document: &Document) {
        if let Some(row) = document.row(self.cursor.cy) {
            self.cursor.cx = row.size();
        }
    }

    /// Jump a screen up: to the top of the viewport, then one screen further
    ///
    /// With no text rows on screen there is no page to move by.
    pub fn page_up(&mut self, document: &Document) {
        if self.viewport.screenrows == 0 {
            return;
        }
        self.cursor.cy = self.viewport.rowoff.min(document.num_rows());
        self.clamp_cursor_column(document);
        for _ in 0..self.viewport.screenrows {
            self.move_cursor(document, Direction::Up);
        }
    }

    /// Jump a screen down: to the bottom of the viewport, then one screen further
    pub fn page_down(&mut self, document: &Document) {
        if self.viewport.screenrows == 0 {
            return;
        }
        let bottom = self.viewport.rowoff + self.viewport.screenrows - 1;
        self.cursor.cy = bottom.min(document.num_rows());
        self.clamp_cursor_column(document);
        for _ in 0..self.viewport.screenrows {
            self.move_cursor(document, Direction::Down);
        }
    }

    /// Recompute `rx` and pull the viewport offsets toward the cursor
    ///
    /// Afterwards `rowoff <= cy < rowoff + screenrows` and
    /// `coloff <= rx < coloff + screencols` (for a non-empty text area).
    pub fn scroll(&mut self, document: &Document) {
        self.rx = document
            .row(self.cursor.cy)
            .map_or(0, |row| row.cx_to_rx(self.cursor.cx, document.tab_stop()));

        let vp = &mut self.viewport;
        let cy = self.cursor.cy;
        if cy < vp.rowoff {
            vp.rowoff = cy;
        }
        if vp.screenrows > 0 && cy >= vp.rowoff + vp.screenrows {
            vp.rowoff = cy + 1 - vp.screenrows;
        }

        let rx = self.rx;
        if rx < vp.coloff {
            vp.coloff = rx;
        }
        if vp.screencols > 0 && rx >= vp.coloff + vp.screencols {
            vp.coloff = rx + 1 - vp.screencols;
        }
    }

    /// Update viewport dimensions (e.g., after the terminal was resized)
    pub fn resize_viewport(&mut self, screenrows: usize, screencols: usize) {
        self.viewport.screenrows = screenrows;
        self.viewport.screencols = screencols;
    }

    /// Assert cursor invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, document: &Document) {
        debug_assert!(
            self.cursor.cy <= document.num_rows(),
            "cursor row {} past virtual row {}",
            self.cursor.cy,
            document.num_rows()
        );
        debug_assert!(
            self.cursor.cx <= document.row_len(self.cursor.cy),
            "cursor column {} past row length {}",
            self.cursor.cx,
            document.row_len(self.cursor.cy)
        );
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self, _document: &Document) {}
}
