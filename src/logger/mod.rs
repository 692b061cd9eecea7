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

mod builder;
pub use self::builder::DispatcherBuilder;
pub use self::builder::builder;

mod dispatcher;
pub use self::dispatcher::DEFAULT_CAPACITY;
pub use self::dispatcher::DEFAULT_LEVEL;
pub use self::dispatcher::Dispatcher;

mod global;
pub use self::global::add_file_sink;
pub use self::global::add_sink;
pub use self::global::dispatcher;
pub use self::global::flush;
pub use self::global::set_default_dispatcher;
pub use self::global::set_level;
pub use self::global::set_quiet;
