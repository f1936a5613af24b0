use terminal_size::{Width, terminal_size};

const ELLIPSIS: char = '…';

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn visible_width(&self, s: &str) -> usize {
        s.chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            let mut out = String::with_capacity(s.len() + (width - w));
            out.push_str(s);
            out.extend(std::iter::repeat_n(' ', width - w));
            out
        }
    }

    /// Cuts `s` to at most `max` characters, marking the cut with an ellipsis.
    pub fn truncate_visible(&self, s: &str, max: usize) -> String {
        if self.visible_width(s) <= max {
            return s.to_string();
        }
        if max == 0 {
            return String::new();
        }
        let mut out: String = s.chars().take(max - 1).collect();
        out.push(ELLIPSIS);
        out
    }

    /// Best-effort terminal width, `None` when output is not a terminal.
    pub fn terminal_width(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}
