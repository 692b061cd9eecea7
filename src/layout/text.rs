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

use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::layout::zoned_time;
use crate::record::Record;

/// A layout that formats log records as dated, uncolored text.
///
/// This is the layout of every destination other than the console.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57 ERROR src/main.rs:51: Hello error!
/// 2024-08-11 22:44:57 WARN  src/main.rs:52: Hello warn!
/// 2024-08-11 22:44:57 INFO  src/main.rs:53: Hello info!
/// ```
///
/// # Examples
///
/// ```
/// use fanlog::layout::TextLayout;
///
/// let layout = TextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    tz: Option<TimeZone>,
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// Default to the system timezone.
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::layout::TextLayout;
    /// use jiff::tz::TimeZone;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let time = zoned_time(record, self.tz.as_ref());
        let time = time.strftime("%Y-%m-%d %H:%M:%S");
        let level = record.level();
        let file = record.file();
        let line = record.line();
        let message = record.payload();

        let mut text = String::new();
        write!(&mut text, "{time} {level:<5} {file}:{line}: {message}")
            .map_err(Error::from_fmt_error)?;
        Ok(text.into_bytes())
    }
}
