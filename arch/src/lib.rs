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

//! Cortex-M core support: vector table entries, the reset routine and the
//! default exception handlers shared by every STM32 family.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(cortex_m, feature(linkage))]

pub mod arm_cortex_m;
pub use crate::arm_cortex_m as arch;
pub use arm_cortex_m::{
    interrupt::{encode_priority, IrqNumber},
    park,
    vector::{CoreProfile, Vector},
};

// #[link_section] is only usable from the root crate.
// See https://github.com/rust-lang/rust/issues/67209.
#[cfg(cortex_m)]
include!("arm_cortex_m/handlers.rs");
