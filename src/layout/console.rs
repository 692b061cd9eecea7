// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Write;

#[cfg(feature = "colored")]
use colored::Color;
#[cfg(feature = "colored")]
use colored::Colorize;
use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::layout::zoned_time;
use crate::record::Level;
use crate::record::Record;

/// A layout for the console: time of day only, with the level optionally colored.
///
/// Output format:
///
/// ```text
/// 22:44:57 ERROR src/main.rs:51: Hello error!
/// 22:44:57 WARN  src/main.rs:52: Hello warn!
/// 22:44:57 INFO  src/main.rs:53: Hello info!
/// ```
///
/// With the `colored` feature, the level is colored per [`LevelColor`] and the source location
/// is dimmed. Call [`ConsoleLayout::no_color`] to turn it off.
///
/// # Examples
///
/// ```
/// use fanlog::layout::ConsoleLayout;
///
/// let layout = ConsoleLayout::default().no_color();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleLayout {
    #[cfg(feature = "colored")]
    colors: LevelColor,
    no_color: bool,
    tz: Option<TimeZone>,
}

impl ConsoleLayout {
    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Default to the system timezone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Customize the color of each level.
    #[cfg(feature = "colored")]
    pub fn colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    #[cfg(feature = "colored")]
    fn level_and_location(&self, level: Level, location: String) -> (String, String) {
        let color = self.colors.color(level);
        let level = format!("{level:<5}");
        if self.no_color {
            return (level, location);
        }

        (
            level.color(color).to_string(),
            location.bright_black().to_string(),
        )
    }

    #[cfg(not(feature = "colored"))]
    fn level_and_location(&self, level: Level, location: String) -> (String, String) {
        (format!("{level:<5}"), location)
    }
}

impl Layout for ConsoleLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let time = zoned_time(record, self.tz.as_ref());
        let time = time.strftime("%H:%M:%S");
        let location = format!("{}:{}:", record.file(), record.line());
        let (level, location) = self.level_and_location(record.level(), location);
        let message = record.payload();

        let mut text = String::new();
        write!(&mut text, "{time} {level} {location} {message}")
            .map_err(Error::from_fmt_error)?;
        Ok(text.into_bytes())
    }
}

/// Customize the color of each log level.
#[cfg(feature = "colored")]
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for trace level logs.
    pub trace: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for warn level logs.
    pub warn: Color,
    /// Color for error level logs.
    pub error: Color,
    /// Color for fatal level logs.
    pub fatal: Color,
}

#[cfg(feature = "colored")]
impl Default for LevelColor {
    fn default() -> Self {
        Self {
            trace: Color::BrightBlue,
            debug: Color::Cyan,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            fatal: Color::Magenta,
        }
    }
}

#[cfg(feature = "colored")]
impl LevelColor {
    /// The color of the given level.
    pub fn color(&self, level: Level) -> Color {
        match level {
            Level::Trace => self.trace,
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warn => self.warn,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn record_at(level: Level) -> Record<'static> {
        let time = date(2024, 3, 9).at(21, 15, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        Record::builder()
            .level(level)
            .file("x.c")
            .line(10)
            .payload("boom 7")
            .time(time)
            .build()
    }

    #[test]
    fn test_console_layout_no_color() {
        let layout = ConsoleLayout::default().no_color();
        let bytes = layout.format(&record_at(Level::Error)).unwrap();
        insta::assert_snapshot!(String::from_utf8(bytes).unwrap(), @"21:15:00 ERROR x.c:10: boom 7");

        let bytes = layout.format(&record_at(Level::Info)).unwrap();
        insta::assert_snapshot!(String::from_utf8(bytes).unwrap(), @"21:15:00 INFO  x.c:10: boom 7");
    }

    #[cfg(feature = "colored")]
    #[test]
    fn test_console_layout_colored() {
        colored::control::set_override(true);
        let bytes = ConsoleLayout::default()
            .format(&record_at(Level::Warn))
            .unwrap();
        colored::control::unset_override();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "21:15:00 \u{1b}[33mWARN \u{1b}[0m \u{1b}[90mx.c:10:\u{1b}[0m boom 7"
        );
    }

    #[cfg(feature = "colored")]
    #[test]
    fn test_default_colors() {
        let colors = LevelColor::default();
        assert_eq!(colors.color(Level::Trace), Color::BrightBlue);
        assert_eq!(colors.color(Level::Fatal), Color::Magenta);
    }
}
