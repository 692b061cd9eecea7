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

use fanlog::append;
use fanlog::layout::ConsoleLayout;
use fanlog::layout::CustomLayout;
use fanlog::record::Level;
use fanlog::record::Record;

fn main() {
    let layout = CustomLayout::new(|record: &Record| {
        let time = record.time().strftime("%s");
        Ok(format!("{time}|{}|{}", record.level(), record.payload()).into_bytes())
    });

    fanlog::builder()
        .level(Level::Info)
        .console(append::Stderr::default().with_layout(ConsoleLayout::default().no_color()))
        .sink(append::Stdout::default().with_layout(layout), Level::Debug)
        .apply();

    fanlog::debug!("stdout only");
    fanlog::info!("stdout and stderr");

    fanlog::set_quiet(true);
    fanlog::error!("stdout only again");
}
