//! Colored terminal output for publish runs

use std::io::Write;
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.tagged("✓", Color::Green, true, message, false)
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.tagged("⚠", Color::Yellow, true, message, true)
    }

    /// Print a progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.tagged("⋯", Color::Magenta, false, message, false)
    }

    /// Print an error message to stderr (always shown)
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        if write_tagged(&mut buffer, "✗", Color::Red, true, message, true).is_err()
            || bufwtr.print(&buffer).is_err()
        {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer)?;
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(&mut buffer, "═══ {} ═══", title)?;
        buffer.reset()?;
        self.bufwtr.print(&buffer)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.plain(&format!("    {}", message))
    }

    /// Print a plain message (respects quiet mode)
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        self.plain(message)
    }

    fn plain(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.bufwtr.print(&buffer)
    }

    fn tagged(
        &self,
        symbol: &str,
        color: Color,
        bold: bool,
        message: &str,
        color_message: bool,
    ) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        write_tagged(&mut buffer, symbol, color, bold, message, color_message)?;
        self.bufwtr.print(&buffer)
    }
}

fn write_tagged(
    buffer: &mut Buffer,
    symbol: &str,
    color: Color,
    bold: bool,
    message: &str,
    color_message: bool,
) -> std::io::Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(buffer, "{}", symbol)?;
    buffer.reset()?;
    if color_message {
        buffer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    }
    writeln!(buffer, " {}", message)?;
    buffer.reset()
}
