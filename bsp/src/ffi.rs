// Copyright (c) 2025 vivo Mobile Communication Co., Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Glue for C callers.

use crate::exti::{self, ExtiRoute};
use core::ffi::{c_int, c_uint};

/// Returned by `get_exti_line_irqn` for lines that do not exist. Reads as
/// `0xFFFF_FFFF` from C.
pub const NO_IRQN: c_int = -1;

pub fn irqn_or_sentinel(routes: &[ExtiRoute], index: c_uint) -> c_int {
    match exti::line_irqn(routes, index) {
        Some(irq) => c_int::from(irq.number()),
        None => NO_IRQN,
    }
}
