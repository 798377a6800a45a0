//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend` and
//! inspected as text, cell by cell.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! let area = term.area();
//! term.render_widget(SiteHeader::new(icons), area);
//! assert!(term.buffer_contains("Q Tech Digital LLC"));
//! ```

use qtech_app::config::Settings;
use qtech_app::AppState;
use qtech_core::Route;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a ratatui terminal backed by `TestBackend`.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a whole frame, e.g. `term.draw_with(|frame| view(frame, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string on any single line
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.line(line).contains(text)
    }

    /// Text of row `y`, one symbol per cell
    pub fn line(&self, y: u16) -> String {
        get_line_content(self.buffer(), y)
    }

    /// Cell position where `text` starts, scanning rows top to bottom
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            let mut starts = Vec::with_capacity(usize::from(buffer.area.width));
            for x in 0..buffer.area.width {
                starts.push(line.len());
                line.push_str(buffer[(x, y)].symbol());
            }
            if let Some(byte_index) = line.find(text) {
                let x = starts.iter().rposition(|start| *start <= byte_index)?;
                return Some((x as u16, y));
            }
        }
        None
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState on the given route with default settings
pub fn state_at(route: Route) -> AppState {
    AppState::with_settings(Settings::default(), route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));

        let term = TestTerminal::compact();
        assert_eq!(term.area(), Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), Rect::new(0, 0, 20, 5));

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_find_reports_cell_position() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("\n  ▶ target"), Rect::new(0, 0, 20, 5));

        assert_eq!(term.find("target"), Some((4, 1)));
        assert_eq!(term.find("missing"), None);
    }
}
