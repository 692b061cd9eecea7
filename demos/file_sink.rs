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
use fanlog::record::Level;

fn main() {
    fanlog::builder()
        .level_from_env("FANLOG_LEVEL")
        .sink(
            append::Writer::open("fanlog-demo.log").expect("failed to open log file"),
            Level::Warn,
        )
        .apply();

    let args = std::env::args().collect::<Vec<_>>();
    fanlog::debug!("argc = {}", args.len());
    for (i, arg) in args.iter().enumerate() {
        fanlog::trace!("argv[{i}] = {arg}");
    }

    fanlog::info!("Hello info!");
    fanlog::warn!("Hello warn!");
    fanlog::error!("Hello error!");
    fanlog::fatal!("Hello fatal!");
}
