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
use std::io::Write;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::Append;
use crate::Error;
use crate::Trap;
use crate::append;
use crate::record::Level;
use crate::record::Record;
use crate::trap::DefaultTrap;

/// The number of sinks a dispatcher accepts unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 32;

/// The console level of a fresh dispatcher.
pub const DEFAULT_LEVEL: Level = Level::Trace;

/// A dispatcher fans each log record out to the console and to a bounded list of sinks.
///
/// The console is gated by the dispatcher's level and quiet flag. Every registered sink carries
/// its own minimum level, which is checked independently of the console settings. Sinks are
/// visited in registration order.
///
/// # Examples
///
/// ```
/// use fanlog::Dispatcher;
/// use fanlog::append;
/// use fanlog::record::Level;
///
/// let dispatcher = Dispatcher::default();
/// dispatcher.set_level(Level::Warn);
/// dispatcher
///     .add_sink(append::Testing::default(), Level::Info)
///     .unwrap();
///
/// fanlog::info!(dispatcher: dispatcher, "reaches the testing sink only");
/// ```
pub struct Dispatcher {
    console: Box<dyn Append>,
    trap: Box<dyn Trap>,
    capacity: usize,
    state: RwLock<State>,
}

#[derive(Debug)]
struct State {
    level: Level,
    quiet: bool,
    // swapped on registration so that log calls iterate without holding the lock
    sinks: Arc<Vec<Sink>>,
}

#[derive(Debug, Clone)]
struct Sink {
    level: Level,
    append: Arc<dyn Append>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("console", &self.console)
            .field("trap", &self.trap)
            .field("capacity", &self.capacity)
            .field("state", &*self.read_state())
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(
            Box::new(append::Stderr::default()),
            Box::new(DefaultTrap::default()),
            DEFAULT_LEVEL,
            false,
            DEFAULT_CAPACITY,
        )
    }
}

impl Dispatcher {
    pub(super) fn new(
        console: Box<dyn Append>,
        trap: Box<dyn Trap>,
        level: Level,
        quiet: bool,
        capacity: usize,
    ) -> Self {
        Self {
            console,
            trap,
            capacity,
            state: RwLock::new(State {
                level,
                quiet,
                sinks: Arc::new(Vec::new()),
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the minimum level of the console.
    ///
    /// Registered sinks are not affected.
    pub fn set_level(&self, level: Level) {
        self.write_state().level = level;
    }

    /// The minimum level of the console.
    pub fn level(&self) -> Level {
        self.read_state().level
    }

    /// Mute or unmute the console.
    ///
    /// Registered sinks are not affected.
    pub fn set_quiet(&self, quiet: bool) {
        self.write_state().quiet = quiet;
    }

    /// Whether the console is muted.
    pub fn quiet(&self) -> bool {
        self.read_state().quiet
    }

    /// The maximum number of sinks this dispatcher accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of registered sinks.
    pub fn len(&self) -> usize {
        self.read_state().sinks.len()
    }

    /// Whether no sink is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a sink receiving every record at `level` or above.
    ///
    /// The sink is appended after all previously registered sinks. Sinks can never be updated or
    /// removed once registered.
    ///
    /// # Errors
    ///
    /// Return an error, leaving the registry untouched, if the registry is already full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fanlog::Dispatcher;
    /// use fanlog::append;
    /// use fanlog::record::Level;
    ///
    /// let dispatcher = Dispatcher::default();
    /// dispatcher
    ///     .add_sink(append::Stdout::default(), Level::Debug)
    ///     .unwrap();
    /// assert_eq!(dispatcher.len(), 1);
    /// ```
    pub fn add_sink(&self, append: impl Into<Box<dyn Append>>, level: Level) -> Result<(), Error> {
        let append: Box<dyn Append> = append.into();
        let append = Arc::<dyn Append>::from(append);

        let mut state = self.write_state();
        if state.sinks.len() >= self.capacity {
            return Err(Error::registry_full(self.capacity));
        }
        Arc::make_mut(&mut state.sinks).push(Sink { level, append });
        Ok(())
    }

    /// Register a sink writing dated, uncolored lines to `file`.
    ///
    /// This is a shortcut for [`add_sink`](Dispatcher::add_sink) with an
    /// [`append::Writer`] using the default [`TextLayout`](crate::layout::TextLayout).
    ///
    /// # Errors
    ///
    /// Return an error, leaving the registry untouched, if the registry is already full.
    pub fn add_file_sink<W>(&self, file: W, level: Level) -> Result<(), Error>
    where
        W: Write + Send + 'static,
    {
        self.add_sink(append::Writer::new(file), level)
    }

    /// Whether a record at `level` would reach at least one destination.
    pub fn enabled(&self, level: Level) -> bool {
        let state = self.read_state();
        (!state.quiet && level >= state.level) || state.sinks.iter().any(|s| level >= s.level)
    }

    /// Dispatch a record to the console and every sink that accepts its level.
    ///
    /// Failures of individual destinations are handed to the trap; they never stop the dispatch
    /// nor reach the caller.
    pub fn log(&self, record: &Record) {
        let (level, quiet, sinks) = {
            let state = self.read_state();
            (state.level, state.quiet, Arc::clone(&state.sinks))
        };

        if !quiet && record.level() >= level {
            if let Err(err) = self.console.append(record) {
                self.trap.trap(&err.with_context("sink", "console"));
            }
        }

        for (index, sink) in sinks.iter().enumerate() {
            if record.level() >= sink.level {
                if let Err(err) = sink.append.append(record) {
                    self.trap.trap(&err.with_context("sink", index));
                }
            }
        }
    }

    /// Render `args` once and dispatch it as a record from `file:line`.
    ///
    /// Nothing is rendered when no destination accepts `level`. This is what the logging macros
    /// expand to.
    pub fn log_args(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let record = Record::builder()
            .level(level)
            .file(file)
            .line(line)
            .args(args)
            .build();
        self.log(&record);
    }

    /// Flush the console and all sinks.
    pub fn flush(&self) {
        if let Err(err) = self.console.flush() {
            self.trap.trap(&err.with_context("sink", "console"));
        }

        let sinks = Arc::clone(&self.read_state().sinks);
        for (index, sink) in sinks.iter().enumerate() {
            if let Err(err) = sink.append.flush() {
                self.trap.trap(&err.with_context("sink", index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use jiff::Zoned;

    use super::*;
    use crate::layout::ConsoleLayout;
    use crate::layout::CustomLayout;

    #[derive(Clone, Default)]
    struct Lines(Arc<Mutex<Vec<String>>>);

    impl Lines {
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl io::Write for Lines {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let line = String::from_utf8_lossy(buf).trim_end().to_string();
            self.0.lock().unwrap().push(line);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Trapped(Arc<Mutex<Vec<String>>>);

    impl Trap for Trapped {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Append for Failing {
        fn append(&self, _: &Record) -> Result<(), Error> {
            Err(Error::new("destination is gone"))
        }
    }

    fn dispatcher_with_console(console: &Lines, trap: &Trapped) -> Dispatcher {
        let console =
            append::Writer::new(console.clone()).with_layout(ConsoleLayout::default().no_color());
        Dispatcher::new(
            Box::new(console),
            Box::new(trap.clone()),
            DEFAULT_LEVEL,
            false,
            DEFAULT_CAPACITY,
        )
    }

    fn tagged(tag: &'static str, order: &Lines) -> append::Writer<Lines> {
        append::Writer::new(order.clone()).with_layout(CustomLayout::new(move |r: &Record| {
            Ok(format!("{tag} {}", r.payload()).into_bytes())
        }))
    }

    #[test]
    fn test_sink_threshold_is_inclusive() {
        for (i, threshold) in Level::ALL.into_iter().enumerate() {
            let console = Lines::default();
            let trap = Trapped::default();
            let dispatcher = dispatcher_with_console(&console, &trap);
            dispatcher.set_quiet(true);

            let sink = Lines::default();
            dispatcher.add_sink(tagged("s", &sink), threshold).unwrap();

            for (j, level) in Level::ALL.into_iter().enumerate() {
                dispatcher.log_args(level, "t.rs", 1, format_args!("{level}"));
                let received = sink.take();
                if j >= i {
                    assert_eq!(received, vec![format!("s {level}")]);
                } else {
                    assert!(received.is_empty(), "{threshold} got {level}");
                }
            }
            assert!(console.take().is_empty());
        }
    }

    #[test]
    fn test_capacity_is_enforced() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_quiet(true);

        let order = Lines::default();
        for i in 0..DEFAULT_CAPACITY {
            let tag: &'static str = Box::leak(i.to_string().into_boxed_str());
            dispatcher.add_sink(tagged(tag, &order), Level::Trace).unwrap();
        }
        assert_eq!(dispatcher.len(), DEFAULT_CAPACITY);

        let err = dispatcher
            .add_sink(tagged("overflow", &order), Level::Trace)
            .unwrap_err();
        assert_eq!(err.message(), "sink registry is full");
        assert_eq!(dispatcher.len(), DEFAULT_CAPACITY);

        dispatcher.log_args(Level::Info, "t.rs", 1, format_args!("x"));
        let expected = (0..DEFAULT_CAPACITY)
            .map(|i| format!("{i} x"))
            .collect::<Vec<_>>();
        assert_eq!(order.take(), expected);
    }

    #[test]
    fn test_quiet_mutes_console_only() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        let sink = Lines::default();
        dispatcher.add_sink(tagged("s", &sink), Level::Trace).unwrap();

        dispatcher.set_quiet(true);
        for level in Level::ALL {
            dispatcher.log_args(level, "t.rs", 1, format_args!("m"));
        }
        assert!(console.take().is_empty());
        assert_eq!(sink.take().len(), Level::ALL.len());
    }

    #[test]
    fn test_console_level() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_level(Level::Warn);

        dispatcher.log_args(Level::Info, "t.rs", 1, format_args!("info"));
        assert!(console.take().is_empty());

        dispatcher.log_args(Level::Warn, "t.rs", 2, format_args!("warn"));
        dispatcher.log_args(Level::Error, "t.rs", 3, format_args!("error"));
        let lines = console.take();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WARN  t.rs:2: warn"), "{lines:?}");
        assert!(lines[1].ends_with("ERROR t.rs:3: error"), "{lines:?}");
    }

    #[test]
    fn test_console_settings_do_not_gate_sinks() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_level(Level::Fatal);

        let sink = Lines::default();
        dispatcher.add_sink(tagged("s", &sink), Level::Debug).unwrap();

        dispatcher.log_args(Level::Debug, "t.rs", 1, format_args!("d"));
        assert!(console.take().is_empty());
        assert_eq!(sink.take(), vec!["s d".to_string()]);
    }

    #[test]
    fn test_dispatch_order() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_quiet(true);

        let order = Lines::default();
        dispatcher.add_sink(tagged("A", &order), Level::Info).unwrap();
        dispatcher.add_sink(tagged("B", &order), Level::Info).unwrap();

        dispatcher.log_args(Level::Info, "t.rs", 1, format_args!("go"));
        assert_eq!(order.take(), vec!["A go".to_string(), "B go".to_string()]);
    }

    #[test]
    fn test_timestamp_shared_across_sinks() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_quiet(true);

        let seen = Arc::new(Mutex::new(Vec::<Zoned>::new()));
        for _ in 0..3 {
            let seen = seen.clone();
            let layout = CustomLayout::new(move |r: &Record| {
                seen.lock().unwrap().push(r.time().clone());
                Ok(vec![])
            });
            dispatcher
                .add_sink(append::Writer::new(io::sink()).with_layout(layout), Level::Trace)
                .unwrap();
        }

        dispatcher.log_args(Level::Info, "t.rs", 1, format_args!("tick"));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|t| t == &seen[0]));
    }

    #[test]
    fn test_timestamp_not_resolved_without_destination() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_quiet(true);
        dispatcher.add_sink(tagged("s", &console), Level::Error).unwrap();

        let record = Record::builder().level(Level::Info).build();
        dispatcher.log(&record);
        assert!(!record.time_resolved());
    }

    #[test]
    fn test_failing_sink_does_not_stop_dispatch() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);
        dispatcher.set_quiet(true);

        let sink = Lines::default();
        dispatcher.add_sink(Failing, Level::Trace).unwrap();
        dispatcher.add_sink(tagged("s", &sink), Level::Trace).unwrap();

        dispatcher.log_args(Level::Error, "t.rs", 1, format_args!("still here"));
        assert_eq!(sink.take(), vec!["s still here".to_string()]);
        assert_eq!(
            trap.0.lock().unwrap().as_slice(),
            ["destination is gone, context: { sink: 0 }".to_string()]
        );
    }

    #[test]
    fn test_default_state() {
        let dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.level(), DEFAULT_LEVEL);
        assert!(!dispatcher.quiet());
        assert!(dispatcher.is_empty());
        assert_eq!(dispatcher.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_error_reaches_console_only() {
        let console = Lines::default();
        let trap = Trapped::default();
        let dispatcher = dispatcher_with_console(&console, &trap);

        let n = 7;
        dispatcher.log_args(Level::Error, "x.c", 10, format_args!("boom {n}"));
        let lines = console.take();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" ERROR x.c:10: boom 7"), "{lines:?}");
        assert!(trap.0.lock().unwrap().is_empty());
    }
}
