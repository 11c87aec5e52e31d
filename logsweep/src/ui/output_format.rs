// logsweep/src/ui/output_format.rs
//! Themed status messages written to any `Write` sink, usually stderr.

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    label: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{}{}", label, message);
    writeln!(writer, "{}", paint(&line, entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "Warning: ", message, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "Error: ", message, ThemeEntry::Error, theme_map, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_messages_carry_labels() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", &theme, false).unwrap();
        print_error_message(&mut out, "broken", &theme, false).unwrap();
        print_info_message(&mut out, "fyi", &theme, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Warning: careful\nError: broken\nfyi\n"
        );
    }
}
