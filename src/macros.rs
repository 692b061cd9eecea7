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

//! Logging macros.
//!
//! Every macro binds `file!()` and `line!()` at the call site and goes to the default
//! dispatcher, unless a `dispatcher: expr,` argument comes first.

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// use fanlog::record::Level;
///
/// let port = 8080;
/// fanlog::log!(Level::Info, "listening on {port}");
///
/// let dispatcher = fanlog::Dispatcher::default();
/// fanlog::log!(dispatcher: dispatcher, Level::Warn, "retrying");
/// ```
#[macro_export]
macro_rules! log {
    (dispatcher: $dispatcher:expr, $level:expr, $($arg:tt)+) => {
        ($dispatcher).log_args(
            $level,
            ::std::file!(),
            ::std::line!(),
            ::std::format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::dispatcher().log_args(
            $level,
            ::std::file!(),
            ::std::line!(),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log a message at the trace level.
#[macro_export]
macro_rules! trace {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Trace, $($arg)+)
    };
}

/// Log a message at the debug level.
#[macro_export]
macro_rules! debug {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Debug, $($arg)+)
    };
}

/// Log a message at the info level.
#[macro_export]
macro_rules! info {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Info, $($arg)+)
    };
}

/// Log a message at the warn level.
#[macro_export]
macro_rules! warn {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Warn, $($arg)+)
    };
}

/// Log a message at the error level.
#[macro_export]
macro_rules! error {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Error, $($arg)+)
    };
}

/// Log a message at the fatal level.
///
/// This only logs; it does not stop the program.
#[macro_export]
macro_rules! fatal {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log!(dispatcher: $dispatcher, $crate::record::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::record::Level::Fatal, $($arg)+)
    };
}
