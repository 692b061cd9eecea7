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

use crate::Append;
use crate::Dispatcher;
use crate::Error;
use crate::Trap;
use crate::append;
use crate::logger::dispatcher::DEFAULT_CAPACITY;
use crate::logger::dispatcher::DEFAULT_LEVEL;
use crate::logger::global::set_default_dispatcher;
use crate::record::Level;
use crate::trap::DefaultTrap;

/// Create a new [`DispatcherBuilder`] instance for configuring a dispatcher.
///
/// # Examples
///
/// ```
/// use fanlog::append;
/// use fanlog::record::Level;
///
/// let dispatcher = fanlog::builder()
///     .level(Level::Info)
///     .sink(append::Testing::default(), Level::Warn)
///     .build()
///     .unwrap();
/// ```
pub fn builder() -> DispatcherBuilder {
    DispatcherBuilder {
        level: DEFAULT_LEVEL,
        quiet: false,
        capacity: DEFAULT_CAPACITY,
        console: None,
        trap: None,
        sinks: vec![],
    }
}

/// A builder for configuring a dispatcher and setting up the default dispatcher.
///
/// # Examples
///
/// ```
/// use fanlog::append;
/// use fanlog::record::Level;
///
/// fanlog::builder()
///     .level_from_env("MY_APP_LOG")
///     .sink(append::Stdout::default(), Level::Debug)
///     .apply();
/// ```
#[must_use = "call `apply` to set the default dispatcher or `build` to construct a dispatcher"]
#[derive(Debug)]
pub struct DispatcherBuilder {
    level: Level,
    quiet: bool,
    capacity: usize,
    console: Option<Box<dyn Append>>,
    trap: Option<Box<dyn Trap>>,

    // registered in order on build
    sinks: Vec<(Box<dyn Append>, Level)>,
}

impl DispatcherBuilder {
    /// Set the minimum level of the console.
    ///
    /// Default to [`DEFAULT_LEVEL`].
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Read the console level from the environment variable `name`.
    ///
    /// The variable holds a level name such as `warn`, or a `RUST_LOG`-style directive list
    /// such as `my_app=debug,warn`. Records carry no target, so a directive list sets the most
    /// verbose level it names, and `off` mutes the console. A missing or malformed value leaves
    /// the configuration unchanged.
    pub fn level_from_env(mut self, name: &str) -> Self {
        let Ok(value) = std::env::var(name) else {
            return self;
        };

        if let Ok(level) = value.parse::<Level>() {
            self.level = level;
        } else if value.contains(['=', ',']) {
            let filter = env_filter::Builder::new().parse(&value).build().filter();
            match filter.as_str().parse::<Level>() {
                Ok(level) => self.level = level,
                Err(_) => self.quiet = true,
            }
        }
        self
    }

    /// Mute or unmute the console.
    ///
    /// Default to unmuted.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set the maximum number of sinks.
    ///
    /// Default to [`DEFAULT_CAPACITY`].
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the console destination.
    ///
    /// Default to [`append::Stderr`] with a colored [`ConsoleLayout`](crate::layout::ConsoleLayout).
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::append;
    /// use fanlog::layout::ConsoleLayout;
    ///
    /// let dispatcher = fanlog::builder()
    ///     .console(append::Stderr::default().with_layout(ConsoleLayout::default().no_color()))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn console(mut self, console: impl Into<Box<dyn Append>>) -> Self {
        self.console = Some(console.into());
        self
    }

    /// Set the trap receiving errors raised by destinations.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Register a sink receiving every record at `level` or above.
    pub fn sink(mut self, append: impl Into<Box<dyn Append>>, level: Level) -> Self {
        self.sinks.push((append.into(), level));
        self
    }

    /// Build the [`Dispatcher`].
    ///
    /// # Errors
    ///
    /// Return an error if more sinks were registered than the capacity allows.
    pub fn build(self) -> Result<Dispatcher, Error> {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(append::Stderr::default()));
        let trap = self
            .trap
            .unwrap_or_else(|| Box::new(DefaultTrap::default()));

        let dispatcher = Dispatcher::new(console, trap, self.level, self.quiet, self.capacity);
        for (append, level) in self.sinks {
            dispatcher.add_sink(append, level)?;
        }
        Ok(dispatcher)
    }

    /// Set up the default dispatcher.
    ///
    /// This should be called early in the execution of a Rust program. Log calls made before
    /// go to a dispatcher with the default configuration, which then stays in place.
    ///
    /// # Errors
    ///
    /// Return an error if the dispatcher cannot be built or if a default dispatcher has already
    /// been set.
    pub fn try_apply(self) -> Result<(), Error> {
        let dispatcher = self.build()?;
        set_default_dispatcher(dispatcher)
            .map_err(|_| Error::new("default dispatcher has already been set"))
    }

    /// Set up the default dispatcher.
    ///
    /// # Panics
    ///
    /// Panic if the dispatcher cannot be built or if the default dispatcher has already been set.
    pub fn apply(self) {
        self.try_apply()
            .expect("DispatcherBuilder::apply must be called before the default dispatcher initialized");
    }

    /// Set up the default dispatcher and install it as the [`log`] crate's logger.
    ///
    /// The default dispatcher is installed first. If another `log` logger has already been set,
    /// this returns an error but the default dispatcher stays in place, so `fanlog` macros keep
    /// using it.
    ///
    /// # Errors
    ///
    /// Return an error if [`try_apply`](DispatcherBuilder::try_apply) fails or if another
    /// `log` logger has already been set.
    #[cfg(feature = "bridge-log")]
    pub fn try_apply_log(self) -> Result<(), Error> {
        self.try_apply()?;
        log::set_logger(crate::dispatcher())
            .map_err(|err| Error::new("failed to set the log crate logger").with_source(err))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    /// Set up the default dispatcher and install it as the [`log`] crate's logger.
    ///
    /// # Panics
    ///
    /// Panic if [`try_apply_log`](DispatcherBuilder::try_apply_log) fails.
    #[cfg(feature = "bridge-log")]
    pub fn apply_log(self) {
        self.try_apply_log()
            .expect("DispatcherBuilder::apply_log must be called before any logger initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trap::IgnoreTrap;

    #[test]
    fn test_build_with_sinks() {
        let dispatcher = builder()
            .level(Level::Error)
            .quiet(true)
            .capacity(2)
            .trap(IgnoreTrap::default())
            .sink(append::Testing::default(), Level::Info)
            .sink(append::Testing::default(), Level::Warn)
            .build()
            .unwrap();

        assert_eq!(dispatcher.level(), Level::Error);
        assert!(dispatcher.quiet());
        assert_eq!(dispatcher.len(), 2);
        assert!(dispatcher.add_sink(append::Testing::default(), Level::Info).is_err());
    }

    #[test]
    fn test_build_over_capacity() {
        let err = builder()
            .capacity(1)
            .sink(append::Testing::default(), Level::Info)
            .sink(append::Testing::default(), Level::Info)
            .build()
            .unwrap_err();
        assert_eq!(err.context("capacity"), Some("1"));
    }

    #[test]
    fn test_level_from_env() {
        // SAFETY: the variable is unique to this test
        unsafe { std::env::set_var("FANLOG_TEST_LEVEL_FROM_ENV", "warn") };
        let dispatcher = builder()
            .level_from_env("FANLOG_TEST_LEVEL_FROM_ENV")
            .build()
            .unwrap();
        assert_eq!(dispatcher.level(), Level::Warn);

        // SAFETY: the variable is unique to this test
        unsafe { std::env::set_var("FANLOG_TEST_LEVEL_FROM_ENV", "loud") };
        let dispatcher = builder()
            .level(Level::Debug)
            .level_from_env("FANLOG_TEST_LEVEL_FROM_ENV")
            .build()
            .unwrap();
        assert_eq!(dispatcher.level(), Level::Debug);
    }

    #[test]
    fn test_level_from_env_directives() {
        // SAFETY: the variable is unique to this test
        unsafe { std::env::set_var("FANLOG_TEST_LEVEL_DIRECTIVES", "fanlog=debug,warn") };
        let dispatcher = builder()
            .level_from_env("FANLOG_TEST_LEVEL_DIRECTIVES")
            .build()
            .unwrap();
        assert_eq!(dispatcher.level(), Level::Debug);
        assert!(!dispatcher.quiet());

        // SAFETY: the variable is unique to this test
        unsafe { std::env::set_var("FANLOG_TEST_LEVEL_DIRECTIVES", "fanlog=off,off") };
        let dispatcher = builder()
            .level(Level::Info)
            .level_from_env("FANLOG_TEST_LEVEL_DIRECTIVES")
            .build()
            .unwrap();
        assert_eq!(dispatcher.level(), Level::Info);
        assert!(dispatcher.quiet());
    }

    #[test]
    fn test_unbounded_capacity() {
        let dispatcher = builder()
            .capacity(usize::MAX)
            .quiet(true)
            .sink(append::Testing::default(), Level::Info)
            .build()
            .unwrap();
        assert_eq!(dispatcher.capacity(), usize::MAX);
        assert_eq!(dispatcher.len(), 1);

        let dispatcher = builder().capacity(1 << 40).build().unwrap();
        assert!(dispatcher.is_empty());
    }
}
