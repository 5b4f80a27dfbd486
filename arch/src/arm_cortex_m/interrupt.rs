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

//! Device interrupt numbers and NVIC access.

#[cfg(cortex_m)]
use super::Arch;
#[cfg(cortex_m)]
use core::sync::atomic::{compiler_fence, Ordering};
#[cfg(cortex_m)]
use cortex_m::interrupt::InterruptNumber;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct IrqNumber(u16);

impl IrqNumber {
    #[inline]
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    #[inline]
    pub const fn number(self) -> u16 {
        self.0
    }

    /// Position of the interrupt in the device part of the vector table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<IrqNumber> for usize {
    fn from(irq: IrqNumber) -> Self {
        irq.index()
    }
}

// SAFETY: get the number of the interrupt is safe
#[cfg(cortex_m)]
unsafe impl InterruptNumber for IrqNumber {
    #[inline]
    fn number(self) -> u16 {
        self.0
    }
}

/// Places `level` in the implemented upper bits of the 8-bit NVIC priority
/// field. Levels past the lowest implemented one saturate to it, and at most
/// 8 priority bits are implemented.
#[inline]
pub const fn encode_priority(level: u8, prio_bits: u8) -> u8 {
    let prio_bits = if prio_bits > 8 { 8 } else { prio_bits };
    let lowest = (1u16 << prio_bits) - 1;
    let level = if (level as u16) > lowest {
        lowest
    } else {
        level as u16
    };
    (level << (8 - prio_bits)) as u8
}

#[cfg(cortex_m)]
impl Arch {
    #[inline]
    pub fn disable_interrupts() -> usize {
        let state = cortex_m::register::primask::read().is_active();
        cortex_m::interrupt::disable();
        // cortex-m 0.7 does not fence around cpsid.
        compiler_fence(Ordering::SeqCst);
        state as usize
    }

    #[inline]
    pub fn enable_interrupts(state: usize) {
        compiler_fence(Ordering::SeqCst);
        if state != 0 {
            // SAFETY: restores the state saved by disable_interrupts.
            unsafe { cortex_m::interrupt::enable() };
        }
    }

    #[inline]
    pub fn is_in_interrupt() -> bool {
        cortex_m::peripheral::SCB::vect_active()
            != cortex_m::peripheral::scb::VectActive::ThreadMode
    }

    #[inline]
    pub fn sys_reset() -> ! {
        cortex_m::peripheral::SCB::sys_reset()
    }
}

#[cfg(cortex_m)]
pub fn enable_irq(irq: IrqNumber) {
    unsafe { cortex_m::peripheral::NVIC::unmask(irq) };
}

#[cfg(cortex_m)]
pub fn disable_irq(irq: IrqNumber) {
    cortex_m::peripheral::NVIC::mask(irq);
}

#[cfg(cortex_m)]
pub fn is_irq_enabled(irq: IrqNumber) -> bool {
    cortex_m::peripheral::NVIC::is_enabled(irq)
}

// IABR does not exist on ARMv6-M.
#[cfg(all(cortex_m, not(armv6m)))]
pub fn is_irq_active(irq: IrqNumber) -> bool {
    cortex_m::peripheral::NVIC::is_active(irq)
}

#[cfg(cortex_m)]
pub fn is_irq_pending(irq: IrqNumber) -> bool {
    cortex_m::peripheral::NVIC::is_pending(irq)
}

#[cfg(cortex_m)]
pub fn pend_irq(irq: IrqNumber) {
    cortex_m::peripheral::NVIC::pend(irq);
}

#[cfg(cortex_m)]
pub fn unpend_irq(irq: IrqNumber) {
    cortex_m::peripheral::NVIC::unpend(irq);
}

#[cfg(cortex_m)]
pub fn get_irq_priority(irq: IrqNumber) -> u8 {
    cortex_m::peripheral::NVIC::get_priority(irq)
}

#[cfg(cortex_m)]
pub fn set_irq_priority(irq: IrqNumber, priority: u8) {
    // SAFETY: priority changes only affect preemption order.
    unsafe {
        cortex_m::Peripherals::steal()
            .NVIC
            .set_priority(irq, priority)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irq_number_index() {
        let irq = IrqNumber::new(23);
        assert_eq!(irq.number(), 23);
        assert_eq!(irq.index(), 23);
        assert_eq!(usize::from(irq), 23);
    }

    #[test]
    fn priority_uses_upper_bits() {
        assert_eq!(encode_priority(0, 4), 0x00);
        assert_eq!(encode_priority(1, 4), 0x10);
        assert_eq!(encode_priority(15, 4), 0xF0);
        assert_eq!(encode_priority(1, 2), 0x40);
        assert_eq!(encode_priority(3, 2), 0xC0);
    }

    #[test]
    fn priority_saturates_at_lowest() {
        assert_eq!(encode_priority(200, 4), 0xF0);
        assert_eq!(encode_priority(4, 2), 0xC0);
        assert_eq!(encode_priority(255, 8), 0xFF);
    }

    #[test]
    fn priority_bits_capped_at_eight() {
        assert_eq!(encode_priority(3, 9), encode_priority(3, 8));
        assert_eq!(encode_priority(255, 12), 0xFF);
        assert_eq!(encode_priority(7, u8::MAX), 7);
    }
}
