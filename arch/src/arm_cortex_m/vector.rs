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

//! Hardware vector table entries.
//!
//! The table read by the core on reset is laid out as
//!
//! | word    | content                          |
//! |---------|----------------------------------|
//! | 0       | initial main stack pointer       |
//! | 1       | reset handler                    |
//! | 2..=15  | core exceptions ([`Exception`])  |
//! | 16..    | device interrupts (IRQ `n` at `n + 16`) |
//!
//! The first three parts form [`ExceptionTable`] and live in
//! `.vector_table.exceptions`; the device part is provided by the board
//! support crate in `.vector_table.interrupts`.

/// Number of core exception slots following the reset vector.
pub const EXCEPTION_SLOTS: usize = 14;

/// Vector number of the first device interrupt.
pub const FIRST_IRQ_VECTOR: usize = 16;

pub type Handler = unsafe extern "C" fn();

#[derive(Clone, Copy)]
#[repr(C)]
pub union Vector {
    pub handler: Handler,
    pub reserved: usize,
}

impl Vector {
    pub const RESERVED: Vector = Vector { reserved: 0 };

    #[inline]
    pub const fn handler(handler: Handler) -> Self {
        Vector { handler }
    }

    /// Returns the raw word stored in the table.
    #[inline]
    pub fn address(&self) -> usize {
        // SAFETY: both variants are one machine word wide.
        unsafe { self.reserved }
    }

    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.address() == 0
    }

    /// Returns true if this entry points at `handler`.
    #[inline]
    pub fn points_to(&self, handler: Handler) -> bool {
        self.address() == handler as usize
    }
}

/// Initial value of the main stack pointer.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct StackTop(*const u32);

impl StackTop {
    pub const fn new(top: *const u32) -> Self {
        Self(top)
    }

    pub const fn as_ptr(&self) -> *const u32 {
        self.0
    }
}

// SAFETY: the stack top is an immutable address emitted once into flash.
unsafe impl Sync for StackTop {}

/// Head of the hardware vector table: stack pointer, reset vector and the
/// core exception vectors.
#[repr(C)]
pub struct ExceptionTable {
    pub stack_top: StackTop,
    pub reset: unsafe extern "C" fn() -> !,
    pub exceptions: [Vector; EXCEPTION_SLOTS],
}

/// Core exceptions with a configurable handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exception {
    NonMaskableInt = 2,
    HardFault = 3,
    MemoryManagement = 4,
    BusFault = 5,
    UsageFault = 6,
    SVCall = 11,
    DebugMonitor = 12,
    PendSV = 14,
    SysTick = 15,
}

impl Exception {
    pub const ALL: [Exception; 9] = [
        Exception::NonMaskableInt,
        Exception::HardFault,
        Exception::MemoryManagement,
        Exception::BusFault,
        Exception::UsageFault,
        Exception::SVCall,
        Exception::DebugMonitor,
        Exception::PendSV,
        Exception::SysTick,
    ];

    /// Architectural vector number.
    #[inline]
    pub const fn number(self) -> usize {
        self as usize
    }

    /// Index into [`ExceptionTable::exceptions`].
    #[inline]
    pub const fn slot(self) -> usize {
        self as usize - 2
    }

    /// Whether the exception exists on cores of the given profile.
    pub const fn exists_on(self, profile: CoreProfile) -> bool {
        match profile {
            CoreProfile::Mainline => true,
            CoreProfile::Baseline => !matches!(
                self,
                Exception::MemoryManagement
                    | Exception::BusFault
                    | Exception::UsageFault
                    | Exception::DebugMonitor
            ),
        }
    }
}

/// Architecture profile of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreProfile {
    /// ARMv6-M: Cortex-M0 and Cortex-M0+.
    Baseline,
    /// ARMv7-M and ARMv7E-M: Cortex-M3, Cortex-M4 and Cortex-M7.
    Mainline,
}

pub struct CoreHandlers {
    pub nmi: Handler,
    pub hard_fault: Handler,
    pub mem_manage: Handler,
    pub bus_fault: Handler,
    pub usage_fault: Handler,
    pub svcall: Handler,
    pub debug_monitor: Handler,
    pub pendsv: Handler,
    pub systick: Handler,
}

impl CoreHandlers {
    const fn get(&self, exception: Exception) -> Handler {
        match exception {
            Exception::NonMaskableInt => self.nmi,
            Exception::HardFault => self.hard_fault,
            Exception::MemoryManagement => self.mem_manage,
            Exception::BusFault => self.bus_fault,
            Exception::UsageFault => self.usage_fault,
            Exception::SVCall => self.svcall,
            Exception::DebugMonitor => self.debug_monitor,
            Exception::PendSV => self.pendsv,
            Exception::SysTick => self.systick,
        }
    }
}

// See https://developer.arm.com/documentation/ddi0403/latest/ B1.5.2.
pub const fn exception_vectors(
    profile: CoreProfile,
    handlers: &CoreHandlers,
) -> [Vector; EXCEPTION_SLOTS] {
    let mut tbl = [Vector::RESERVED; EXCEPTION_SLOTS];
    let mut i = 0;
    while i < Exception::ALL.len() {
        let exception = Exception::ALL[i];
        if exception.exists_on(profile) {
            tbl[exception.slot()] = Vector::handler(handlers.get(exception));
        }
        i += 1;
    }
    tbl
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn nmi() {}
    unsafe extern "C" fn hard_fault() {}
    unsafe extern "C" fn mem_manage() {}
    unsafe extern "C" fn bus_fault() {}
    unsafe extern "C" fn usage_fault() {}
    unsafe extern "C" fn svcall() {}
    unsafe extern "C" fn debug_monitor() {}
    unsafe extern "C" fn pendsv() {}
    unsafe extern "C" fn systick() {}

    const HANDLERS: CoreHandlers = CoreHandlers {
        nmi,
        hard_fault,
        mem_manage,
        bus_fault,
        usage_fault,
        svcall,
        debug_monitor,
        pendsv,
        systick,
    };

    const ALWAYS_RESERVED: [usize; 5] = [7, 8, 9, 10, 13];

    #[test]
    fn vector_is_one_word() {
        assert_eq!(core::mem::size_of::<Vector>(), core::mem::size_of::<usize>());
        assert!(Vector::RESERVED.is_reserved());
        assert!(!Vector::handler(nmi).is_reserved());
    }

    #[test]
    fn exception_table_layout() {
        let word = core::mem::size_of::<usize>();
        assert_eq!(
            core::mem::size_of::<ExceptionTable>(),
            (2 + EXCEPTION_SLOTS) * word
        );
        assert_eq!(core::mem::offset_of!(ExceptionTable, reset), word);
        assert_eq!(core::mem::offset_of!(ExceptionTable, exceptions), 2 * word);
    }

    #[test]
    fn slots_match_vector_numbers() {
        assert_eq!(Exception::NonMaskableInt.slot(), 0);
        assert_eq!(Exception::HardFault.slot(), 1);
        assert_eq!(Exception::SVCall.slot(), 9);
        assert_eq!(Exception::SysTick.slot(), EXCEPTION_SLOTS - 1);
        for exception in Exception::ALL {
            assert_eq!(exception.slot() + 2, exception.number());
        }
    }

    #[test]
    fn mainline_table() {
        let tbl = exception_vectors(CoreProfile::Mainline, &HANDLERS);
        assert!(tbl[Exception::NonMaskableInt.slot()].points_to(nmi));
        assert!(tbl[Exception::HardFault.slot()].points_to(hard_fault));
        assert!(tbl[Exception::MemoryManagement.slot()].points_to(mem_manage));
        assert!(tbl[Exception::BusFault.slot()].points_to(bus_fault));
        assert!(tbl[Exception::UsageFault.slot()].points_to(usage_fault));
        assert!(tbl[Exception::SVCall.slot()].points_to(svcall));
        assert!(tbl[Exception::DebugMonitor.slot()].points_to(debug_monitor));
        assert!(tbl[Exception::PendSV.slot()].points_to(pendsv));
        assert!(tbl[Exception::SysTick.slot()].points_to(systick));
        for number in ALWAYS_RESERVED {
            assert!(tbl[number - 2].is_reserved(), "vector {} in use", number);
        }
    }

    #[test]
    fn baseline_table_drops_mainline_faults() {
        let tbl = exception_vectors(CoreProfile::Baseline, &HANDLERS);
        assert!(tbl[Exception::NonMaskableInt.slot()].points_to(nmi));
        assert!(tbl[Exception::HardFault.slot()].points_to(hard_fault));
        assert!(tbl[Exception::SVCall.slot()].points_to(svcall));
        assert!(tbl[Exception::PendSV.slot()].points_to(pendsv));
        assert!(tbl[Exception::SysTick.slot()].points_to(systick));
        for exception in [
            Exception::MemoryManagement,
            Exception::BusFault,
            Exception::UsageFault,
            Exception::DebugMonitor,
        ] {
            assert!(tbl[exception.slot()].is_reserved(), "{:?} in use", exception);
        }
        for number in ALWAYS_RESERVED {
            assert!(tbl[number - 2].is_reserved());
        }
    }
}
