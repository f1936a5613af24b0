use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Width of the rule printed after each section.
pub const SEPARATOR_WIDTH: usize = 40;

/// Screen-level helpers (banner, greeting, section rules).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn render_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!("B I K E S H A R E (v{version})");
        let subtitle = "US bikeshare trip statistics";
        writeln!(out, "╭{}╮", "─".repeat(INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(&title, INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(subtitle, INNER_WIDTH))?;
        writeln!(out, "╰{}╯", "─".repeat(INNER_WIDTH))
    }

    pub fn render_greeting<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Hello! Let's explore some US bikeshare data!")
    }

    pub fn render_separator<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    /// Writes the prompt without a newline so the answer is typed after it.
    pub fn render_prompt<W: Write + ?Sized>(&self, prompt: &str, out: &mut W) -> io::Result<()> {
        write!(out, "{prompt}")?;
        out.flush()
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
