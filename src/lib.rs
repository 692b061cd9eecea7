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

//! Fanlog is a small leveled logging dispatcher. Each log call renders its message once and fans
//! it out to the console and to a bounded list of registered sinks.
//!
//! # Overview
//!
//! * The console (stderr) is gated by a global minimum level and a quiet flag.
//! * Every sink carries its own minimum level, independent of the console settings.
//! * Sinks are visited in registration order, and a registry holds at most
//!   [`DEFAULT_CAPACITY`] sinks unless configured otherwise.
//! * A failing sink never interrupts the program; its error goes to a [`Trap`].
//!
//! # Examples
//!
//! Log through the default dispatcher:
//!
//! ```
//! use fanlog::record::Level;
//!
//! fanlog::set_level(Level::Info);
//! fanlog::info!("starting with {} workers", 4);
//! fanlog::debug!("not shown on the console");
//! ```
//!
//! Add a file next to the console:
//!
//! ```
//! use fanlog::append;
//! use fanlog::record::Level;
//!
//! let file = tempfile::NamedTempFile::new().unwrap();
//!
//! fanlog::builder()
//!     .level(Level::Warn)
//!     .sink(append::Writer::open(file.path()).unwrap(), Level::Debug)
//!     .apply();
//!
//! fanlog::debug!("written to the file only");
//! fanlog::error!("written to the file and the console");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod record;
pub mod trap;

pub use append::Append;
pub use layout::Layout;
pub use trap::Trap;

mod error;
pub use self::error::Error;

mod logger;
pub use self::logger::*;

mod macros;

#[cfg(feature = "bridge-log")]
mod bridge {
    mod log;
}
