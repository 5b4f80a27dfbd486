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

//! ARM Cortex-M hardware support.

pub mod fault;
pub mod interrupt;
pub mod startup;
pub mod vector;

#[cfg(cortex_m)]
pub use startup::reset_handler_inner;

pub struct Arch;

/// Profile of the core this crate is compiled for.
#[cfg(armv6m)]
pub const CORE_PROFILE: vector::CoreProfile = vector::CoreProfile::Baseline;
#[cfg(not(armv6m))]
pub const CORE_PROFILE: vector::CoreProfile = vector::CoreProfile::Mainline;

/// Spins forever. Every path that must not return ends here.
#[inline(never)]
pub fn park() -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}
