use inksac::prelude::*;

use crate::core::config::ColorMode;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl SyntaxHighlighter {
    pub fn new(mode: ColorMode) -> Self {
        let support = match mode {
            ColorMode::Auto => check_color_support().unwrap_or(ColorSupport::NoColor),
            ColorMode::Never => ColorSupport::NoColor,
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled() {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Colors the command word by whether `known` accepts it and flags in
    /// yellow. Spacing is preserved so the editor cursor stays aligned.
    pub fn highlight_command(&self, input: &str, known: &dyn Fn(&str) -> bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let command_style = Style::builder().foreground(Color::Cyan).bold().build();
        let unknown_style = Style::builder().foreground(Color::Red).build();
        let flag_style = Style::builder().foreground(Color::Yellow).build();

        let mut seen_command = false;
        input
            .split(' ')
            .map(|part| {
                if part.is_empty() {
                    String::new()
                } else if !seen_command {
                    seen_command = true;
                    let style = if known(&part.to_lowercase()) {
                        command_style.clone()
                    } else {
                        unknown_style.clone()
                    };
                    part.style(style).to_string()
                } else if part.starts_with('-') {
                    part.style(flag_style.clone()).to_string()
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        self.paint(error, Style::builder().foreground(Color::Red).bold().build())
    }

    pub fn highlight_success(&self, message: &str) -> String {
        self.paint(message, Style::builder().foreground(Color::Green).build())
    }

    pub fn highlight_info(&self, message: &str) -> String {
        self.paint(message, Style::builder().foreground(Color::Cyan).build())
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        self.paint(hint, Style::builder().foreground(Color::RGB(128, 128, 128)).build())
    }
}
