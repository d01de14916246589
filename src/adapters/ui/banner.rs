//! Startup banner: figlet "DONS" painted top-to-bottom from violet to gold.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stderr};
use tracing::debug;

/// Vertical two-stop gradient over the rows of a text block.
#[derive(Debug, Clone, Copy)]
struct Gradient {
    top: (u8, u8, u8),
    bottom: (u8, u8, u8),
}

/// Deep violet (#5b2a86) to warm gold (#f2c14e).
const BANNER_GRADIENT: Gradient = Gradient {
    top: (0x5b, 0x2a, 0x86),
    bottom: (0xf2, 0xc1, 0x4e),
};

impl Gradient {
    /// Color for `row` of `rows`; the first row is `top`, the last is `bottom`.
    fn color_at(&self, row: usize, rows: usize) -> Color {
        let span = rows.saturating_sub(1).max(1) as i32;
        let step = row.min(span as usize) as i32;
        let mix = |from: u8, to: u8| {
            let (from, to) = (i32::from(from), i32::from(to));
            (from + (to - from) * step / span) as u8
        };
        Color::Rgb {
            r: mix(self.top.0, self.bottom.0),
            g: mix(self.top.1, self.bottom.1),
            b: mix(self.top.2, self.bottom.2),
        }
    }

    fn bottom_color(&self) -> Color {
        let (r, g, b) = self.bottom;
        Color::Rgb { r, g, b }
    }
}

/// Queue every line of `text` in its gradient color. Returns the number of lines.
fn paint<W: Write>(out: &mut W, text: &str, gradient: Gradient) -> io::Result<usize> {
    let lines: Vec<&str> = text.lines().collect();
    for (row, line) in lines.iter().enumerate() {
        queue!(
            out,
            SetForegroundColor(gradient.color_at(row, lines.len())),
            Print(line),
            ResetColor,
            Print("\r\n")
        )?;
    }
    Ok(lines.len())
}

/// Prints the banner and version to stderr so JSON reports on stdout stay clean.
pub fn print_welcome() {
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("DONS").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "DONS".to_string());
    let subtitle = format!("Perfil de Dons Espirituais v{}", env!("CARGO_PKG_VERSION"));

    let mut out = stderr().lock();
    let printed = paint(&mut out, &art, BANNER_GRADIENT)
        .and_then(|_| {
            queue!(
                out,
                SetForegroundColor(BANNER_GRADIENT.bottom_color()),
                Print(subtitle),
                ResetColor,
                Print("\r\n")
            )
        })
        .and_then(|_| out.flush());
    if let Err(e) = printed {
        debug!(error = %e, "banner not printed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(
            BANNER_GRADIENT.color_at(0, 5),
            Color::Rgb { r: 0x5b, g: 0x2a, b: 0x86 }
        );
        assert_eq!(BANNER_GRADIENT.color_at(4, 5), BANNER_GRADIENT.bottom_color());
        // Single-line text gets the top color; out-of-range rows clamp to the bottom.
        assert_eq!(BANNER_GRADIENT.color_at(0, 1), BANNER_GRADIENT.color_at(0, 5));
        assert_eq!(BANNER_GRADIENT.color_at(9, 5), BANNER_GRADIENT.bottom_color());
    }

    #[test]
    fn test_paint_colors_each_line() {
        let mut buf = Vec::new();
        let lines = paint(&mut buf, "uno\ndos\ntres", BANNER_GRADIENT).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert_eq!(lines, 3);
        assert_eq!(out.matches("\x1b[38;2;").count(), 3);
        assert!(out.starts_with("\x1b[38;2;91;42;134m"));
        assert!(out.contains("\x1b[38;2;242;193;78mtres"));
        assert_eq!(out.matches("\r\n").count(), 3);
    }

    #[test]
    fn test_paint_empty_text() {
        let mut buf = Vec::new();
        assert_eq!(paint(&mut buf, "", BANNER_GRADIENT).unwrap(), 0);
        assert!(buf.is_empty());
    }
}
