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

//! Layouts for formatting log records.

use std::borrow::Cow;
use std::fmt;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;
use crate::record::Record;

mod console;
mod custom;
mod text;

pub use self::console::ConsoleLayout;
#[cfg(feature = "colored")]
pub use self::console::LevelColor;
pub use self::custom::CustomLayout;
pub use self::text::TextLayout;

/// A layout for formatting log records.
///
/// A layout renders one line without the trailing newline; appenders terminate and flush it.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record.
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

// the record's time, converted to `tz` if one is given
fn zoned_time<'r>(record: &'r Record, tz: Option<&TimeZone>) -> Cow<'r, Zoned> {
    match tz {
        Some(tz) => Cow::Owned(record.time().with_time_zone(tz.clone())),
        None => Cow::Borrowed(record.time()),
    }
}
