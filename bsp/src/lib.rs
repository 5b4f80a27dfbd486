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

//! Board support for STM32 families: device vector tables and EXTI dispatch.
//!
//! Select the MCU major type with exactly one of the `stm32f4xx`,
//! `stm32g0xx` or `stm32wlxx` features. The chosen family is re-exported as
//! [`device`].

#![cfg_attr(not(test), no_std)]
#![cfg_attr(cortex_m, feature(linkage))]
#![allow(non_snake_case)]

#[cfg(any(has_family, test))]
#[macro_use]
mod macros;

pub mod assert;
pub mod error;
pub mod exti;
pub mod ffi;
#[cfg(any(has_family, test))]
mod static_ref;
pub mod sys_config;

pub use error::Error;
pub use stm_utils_arch as arch;

#[cfg(any(feature = "stm32f4xx", test))]
pub mod stm32f4xx;
#[cfg(any(feature = "stm32g0xx", test))]
pub mod stm32g0xx;
#[cfg(any(feature = "stm32wlxx", test))]
pub mod stm32wlxx;

#[cfg(feature = "stm32f4xx")]
pub use stm32f4xx as device;
#[cfg(feature = "stm32g0xx")]
pub use stm32g0xx as device;
#[cfg(feature = "stm32wlxx")]
pub use stm32wlxx as device;

#[cfg(any(
    all(feature = "stm32f4xx", feature = "stm32g0xx"),
    all(feature = "stm32f4xx", feature = "stm32wlxx"),
    all(feature = "stm32g0xx", feature = "stm32wlxx"),
))]
compile_error!("Unknown MCU major type: more than one STM32 family feature is enabled");

#[cfg(all(cortex_m, not(has_family)))]
compile_error!("Unknown MCU major type: enable one of `stm32f4xx`, `stm32g0xx` or `stm32wlxx`");

#[cfg(has_family)]
mod selected {
    use crate::{arch::IrqNumber, device, exti, Error};

    /// NVIC interrupt serving EXTI line `line` on the selected family.
    pub fn exti_irq(line: u32) -> Result<IrqNumber, Error> {
        exti::line_irqn(&device::EXTI_ROUTES, line).ok_or(Error::InvalidExtiLine(line))
    }

    /// Unmasks the NVIC interrupt serving EXTI line `line`.
    #[cfg(cortex_m)]
    pub fn enable_exti_line(line: u32) -> Result<IrqNumber, Error> {
        let irq = exti_irq(line)?;
        crate::arch::arch::interrupt::enable_irq(irq);
        Ok(irq)
    }

    /// Sets the priority of the interrupt serving EXTI line `line`, then
    /// unmasks it. Lines sharing a group share the priority.
    #[cfg(cortex_m)]
    pub fn enable_exti_line_with_priority(line: u32, level: u8) -> Result<IrqNumber, Error> {
        let irq = exti_irq(line)?;
        crate::arch::arch::interrupt::set_irq_priority(
            irq,
            crate::arch::encode_priority(level, device::NVIC_PRIO_BITS),
        );
        crate::arch::arch::interrupt::enable_irq(irq);
        Ok(irq)
    }

    /// Masks the NVIC interrupt serving EXTI line `line`. Other lines of the
    /// same group are masked with it.
    #[cfg(cortex_m)]
    pub fn disable_exti_line(line: u32) -> Result<IrqNumber, Error> {
        let irq = exti_irq(line)?;
        crate::arch::arch::interrupt::disable_irq(irq);
        Ok(irq)
    }

    // C callers expect the NVIC number, or the 0xFFFF_FFFF sentinel.
    #[cfg_attr(cortex_m, no_mangle)]
    pub extern "C" fn get_exti_line_irqn(index: core::ffi::c_uint) -> core::ffi::c_int {
        crate::ffi::irqn_or_sentinel(&device::EXTI_ROUTES, index)
    }
}

#[cfg(has_family)]
pub use selected::*;

/// Default body of every device interrupt nobody claimed.
#[cfg(any(has_family, test))]
#[cold]
#[inline(never)]
pub(crate) fn unhandled(name: &str) -> ! {
    log::error!("unhandled interrupt {}", name);
    arch::park()
}

#[cfg(all(test, has_family))]
mod tests {
    use super::*;

    #[test]
    fn selected_family_lookup() {
        for line in 0..exti::EXTI_LINES as u32 {
            let irq = exti_irq(line).unwrap();
            assert_eq!(Some(irq), device::exti_line_irqn(line));
            assert_eq!(get_exti_line_irqn(line), irq.number() as core::ffi::c_int);
        }
        assert_eq!(exti_irq(16), Err(Error::InvalidExtiLine(16)));
        assert_eq!(get_exti_line_irqn(16), ffi::NO_IRQN);
    }
}
