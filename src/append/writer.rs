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

use std::fmt;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::layout::TextLayout;
use crate::record::Record;

/// An appender that writes log records to any [`Write`] destination, such as an open file.
///
/// Each record is written as one line and flushed before [`append`](Append::append) returns.
/// Writes from concurrent log calls are serialized on the destination.
///
/// # Examples
///
/// ```
/// use fanlog::append::Writer;
///
/// let file = tempfile::tempfile().unwrap();
/// let file_appender = Writer::new(file);
/// ```
pub struct Writer<W: Write + Send + 'static> {
    layout: Box<dyn Layout>,
    writer: Mutex<W>,
}

impl<W: Write + Send + 'static> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("layout", &self.layout)
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: Write + Send + 'static> Writer<W> {
    /// Create a new appender writing to `writer` with the [`TextLayout`].
    pub fn new(writer: W) -> Self {
        Self {
            layout: Box::new(TextLayout::default()),
            writer: Mutex::new(writer),
        }
    }

    /// Set the layout for the [`Writer`] appender.
    ///
    /// Default to [`TextLayout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::append::Writer;
    /// use fanlog::layout::ConsoleLayout;
    ///
    /// let appender = Writer::new(Vec::<u8>::new()).with_layout(ConsoleLayout::default());
    /// ```
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl Writer<File> {
    /// Open `path` for appending, creating the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Return an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", path.display())
                    .with_source(err)
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send + 'static> Append for Writer<W> {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&bytes).map_err(Error::from_io_error)?;
        writer.flush().map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush().map_err(Error::from_io_error)
    }
}
