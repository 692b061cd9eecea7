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

use std::fs::File;

use fanlog::append;
use fanlog::record::Level;
use jiff::civil::DateTime;

#[test]
fn test_file_sink_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.log");

    let dispatcher = fanlog::builder()
        .console(append::Testing::default())
        .build()
        .unwrap();
    dispatcher
        .add_file_sink(File::create(&path).unwrap(), Level::Warn)
        .unwrap();

    fanlog::info!(dispatcher: dispatcher, "frame {} took {}ms", 12, 40);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    fanlog::warn!(dispatcher: dispatcher, "frame {} took {}ms", 13, 95);
    let content = std::fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1, "{content}");
    assert!(content.ends_with('\n'));

    let line = lines[0];
    DateTime::strptime("%Y-%m-%d %H:%M:%S", &line[..19]).unwrap();
    let rest = &line[19..];
    assert!(rest.starts_with(" WARN  tests/file_sink.rs:"), "{line}");
    assert!(rest.ends_with(": frame 13 took 95ms"), "{line}");
}

#[test]
fn test_file_lines_have_no_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.log");

    let dispatcher = fanlog::builder()
        .quiet(true)
        .sink(append::Writer::open(&path).unwrap(), Level::Trace)
        .build()
        .unwrap();

    for level in Level::ALL {
        fanlog::log!(dispatcher: dispatcher, level, "at {level}");
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), Level::ALL.len());
    assert!(!content.contains('\u{1b}'));
    for (line, level) in content.lines().zip(Level::ALL) {
        assert!(line.contains(&format!(" {:<5} ", level.as_str())), "{line}");
        assert!(line.ends_with(&format!("at {level}")), "{line}");
    }
}
