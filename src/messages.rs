//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor one step in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a byte at cursor
    InsertChar(u8),
    /// Delete byte before cursor, joining lines at column 0 (Backspace)
    DeleteBackward,
    /// Delete byte at cursor (Delete)
    DeleteForward,
}

/// App-level messages (file operations, lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Terminal resized to (rows, cols)
    Resize(usize, usize),
    /// Save current file
    SaveFile,
    /// File save completed with the number of bytes written
    SaveCompleted(Result<usize, String>),
    /// Quit the application (subject to unsaved-changes confirmation)
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editor messages (cursor movement)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// App messages (file operations, quit)
    App(AppMsg),
    /// A recognised key with no action (Escape, Enter, Ctrl-L)
    Noop,
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: u8) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }
}
