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

//! The process-wide default dispatcher and shortcuts operating on it.

use std::io::Write;
use std::sync::OnceLock;

use crate::Append;
use crate::Dispatcher;
use crate::Error;
use crate::record::Level;

static DEFAULT_DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Return the default dispatcher.
///
/// If none has been set, a dispatcher with the default configuration is installed: console
/// level [`DEFAULT_LEVEL`](crate::DEFAULT_LEVEL), not quiet, no sinks.
pub fn dispatcher() -> &'static Dispatcher {
    DEFAULT_DISPATCHER.get_or_init(Dispatcher::default)
}

/// Install `dispatcher` as the default dispatcher.
///
/// # Errors
///
/// Return the given dispatcher back if a default dispatcher is already in place.
pub fn set_default_dispatcher(dispatcher: Dispatcher) -> Result<(), Dispatcher> {
    DEFAULT_DISPATCHER.set(dispatcher)
}

/// Set the console level of the default dispatcher.
pub fn set_level(level: Level) {
    dispatcher().set_level(level);
}

/// Mute or unmute the console of the default dispatcher.
pub fn set_quiet(quiet: bool) {
    dispatcher().set_quiet(quiet);
}

/// Register a sink with the default dispatcher.
///
/// # Errors
///
/// Return an error if the registry of the default dispatcher is full.
pub fn add_sink(append: impl Into<Box<dyn Append>>, level: Level) -> Result<(), Error> {
    dispatcher().add_sink(append, level)
}

/// Register a file sink with the default dispatcher.
///
/// # Errors
///
/// Return an error if the registry of the default dispatcher is full.
///
/// # Examples
///
/// ```
/// use fanlog::record::Level;
///
/// let file = tempfile::tempfile().unwrap();
/// fanlog::add_file_sink(file, Level::Warn).unwrap();
/// fanlog::warn!("written to the file");
/// ```
pub fn add_file_sink<W>(file: W, level: Level) -> Result<(), Error>
where
    W: Write + Send + 'static,
{
    dispatcher().add_file_sink(file, level)
}

/// Flush the console and every sink of the default dispatcher.
pub fn flush() {
    dispatcher().flush();
}
