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

//! STM32G0 series (Cortex-M0+).
//!
//! No EXTI line owns a vector: `EXTI0_1`, `EXTI2_3` and `EXTI4_15` cover all
//! sixteen. A line is pending when its rising or falling edge flag is set.

pub mod irq;

use crate::{
    arch::{IrqNumber, Vector},
    exti::{self, ExtiRoute, LineHandler, EXTI_LINES},
    static_ref::StaticRef,
    sys_config,
};
use tock_registers::{interfaces::Readable, register_structs, registers::ReadWrite};

pub const NVIC_PRIO_BITS: u8 = 2;
pub const TICK_INT_PRIORITY: u8 = sys_config::lowest_priority(NVIC_PRIO_BITS);

pub const INTERRUPT_COUNT: usize = 32;

register_structs! {
    ExtiRegisters {
        (0x00 => _reserved0),
        /// Rising edge pending register 1.
        (0x0C => rpr1: ReadWrite<u32>),
        /// Falling edge pending register 1.
        (0x10 => fpr1: ReadWrite<u32>),
        (0x14 => @END),
    }
}

const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(0x4002_1800 as *const ExtiRegisters) };

fn pending_of(exti: &ExtiRegisters) -> u32 {
    exti.rpr1.get() | exti.fpr1.get()
}

/// Runs the handlers of the lines of `route` pending in `exti`. The pending
/// register is read once, before the first handler runs.
unsafe fn dispatch_from(
    exti: &ExtiRegisters,
    route: &ExtiRoute,
    handlers: &[LineHandler; EXTI_LINES],
) {
    exti::dispatch(pending_of(exti), route, handlers)
}

default_irq_handlers!(
    ISR_WWDG, ISR_RTC_TAMP, ISR_FLASH, ISR_RCC, ISR_DMA1_Channel1, ISR_DMA1_Channel2_3,
    ISR_DMA1_Ch4_5_DMAMUX1_OVR, ISR_ADC1, ISR_TIM1_BRK_UP_TRG_COM, ISR_TIM1_CC, ISR_TIM3,
    ISR_TIM14, ISR_TIM16, ISR_TIM17, ISR_I2C1, ISR_I2C2, ISR_SPI1, ISR_SPI2, ISR_USART1,
    ISR_USART2,
);

// Per-line handlers called by the group dispatchers.
default_irq_handlers!(
    ISR_EXTI0, ISR_EXTI1, ISR_EXTI2, ISR_EXTI3, ISR_EXTI4, ISR_EXTI5, ISR_EXTI6, ISR_EXTI7,
    ISR_EXTI8, ISR_EXTI9, ISR_EXTI10, ISR_EXTI11, ISR_EXTI12, ISR_EXTI13, ISR_EXTI14,
    ISR_EXTI15,
);

pub const EXTI0_1_ROUTE: ExtiRoute = ExtiRoute::new(irq::EXTI0_1_IRQn, 0, 1);
pub const EXTI2_3_ROUTE: ExtiRoute = ExtiRoute::new(irq::EXTI2_3_IRQn, 2, 3);
pub const EXTI4_15_ROUTE: ExtiRoute = ExtiRoute::new(irq::EXTI4_15_IRQn, 4, 15);

exti_dispatchers!(
    ISR_EXTI0_1 => EXTI0_1_ROUTE,
    ISR_EXTI2_3 => EXTI2_3_ROUTE,
    ISR_EXTI4_15 => EXTI4_15_ROUTE,
);

pub const EXTI_ROUTES: [ExtiRoute; 3] = [
    EXTI0_1_ROUTE,
    EXTI2_3_ROUTE,
    EXTI4_15_ROUTE,
];

pub const LINE_HANDLERS: [LineHandler; EXTI_LINES] = [
    ISR_EXTI0, ISR_EXTI1, ISR_EXTI2, ISR_EXTI3, ISR_EXTI4, ISR_EXTI5, ISR_EXTI6, ISR_EXTI7,
    ISR_EXTI8, ISR_EXTI9, ISR_EXTI10, ISR_EXTI11, ISR_EXTI12, ISR_EXTI13, ISR_EXTI14,
    ISR_EXTI15,
];

/// NVIC interrupt serving EXTI line `line`.
pub fn exti_line_irqn(line: u32) -> Option<IrqNumber> {
    exti::line_irqn(&EXTI_ROUTES, line)
}

pub const INTERRUPTS: [Vector; INTERRUPT_COUNT] = {
    let mut tbl = [Vector::RESERVED; INTERRUPT_COUNT];
    tbl[irq::WWDG_IRQn.index()] = Vector::handler(ISR_WWDG);
    tbl[irq::RTC_TAMP_IRQn.index()] = Vector::handler(ISR_RTC_TAMP);
    tbl[irq::FLASH_IRQn.index()] = Vector::handler(ISR_FLASH);
    tbl[irq::RCC_IRQn.index()] = Vector::handler(ISR_RCC);
    tbl[irq::EXTI0_1_IRQn.index()] = Vector::handler(ISR_EXTI0_1);
    tbl[irq::EXTI2_3_IRQn.index()] = Vector::handler(ISR_EXTI2_3);
    tbl[irq::EXTI4_15_IRQn.index()] = Vector::handler(ISR_EXTI4_15);
    tbl[irq::DMA1_Channel1_IRQn.index()] = Vector::handler(ISR_DMA1_Channel1);
    tbl[irq::DMA1_Channel2_3_IRQn.index()] = Vector::handler(ISR_DMA1_Channel2_3);
    tbl[irq::DMA1_Ch4_5_DMAMUX1_OVR_IRQn.index()] = Vector::handler(ISR_DMA1_Ch4_5_DMAMUX1_OVR);
    tbl[irq::ADC1_IRQn.index()] = Vector::handler(ISR_ADC1);
    tbl[irq::TIM1_BRK_UP_TRG_COM_IRQn.index()] = Vector::handler(ISR_TIM1_BRK_UP_TRG_COM);
    tbl[irq::TIM1_CC_IRQn.index()] = Vector::handler(ISR_TIM1_CC);
    tbl[irq::TIM3_IRQn.index()] = Vector::handler(ISR_TIM3);
    tbl[irq::TIM14_IRQn.index()] = Vector::handler(ISR_TIM14);
    tbl[irq::TIM16_IRQn.index()] = Vector::handler(ISR_TIM16);
    tbl[irq::TIM17_IRQn.index()] = Vector::handler(ISR_TIM17);
    tbl[irq::I2C1_IRQn.index()] = Vector::handler(ISR_I2C1);
    tbl[irq::I2C2_IRQn.index()] = Vector::handler(ISR_I2C2);
    tbl[irq::SPI1_IRQn.index()] = Vector::handler(ISR_SPI1);
    tbl[irq::SPI2_IRQn.index()] = Vector::handler(ISR_SPI2);
    tbl[irq::USART1_IRQn.index()] = Vector::handler(ISR_USART1);
    tbl[irq::USART2_IRQn.index()] = Vector::handler(ISR_USART2);
    tbl
};

#[cfg(cortex_m)]
#[doc(hidden)]
#[used]
#[link_section = ".vector_table.interrupts"]
#[no_mangle]
pub static __INTERRUPTS: [Vector; INTERRUPT_COUNT] = INTERRUPTS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exti::tests::{assert_covers_all_lines, recorded};
    use tock_registers::interfaces::Writeable;

    const RESERVED: [usize; 9] = [1, 8, 15, 17, 18, 20, 29, 30, 31];

    #[test]
    fn reserved_slots() {
        for (n, vector) in INTERRUPTS.iter().enumerate() {
            assert_eq!(vector.is_reserved(), RESERVED.contains(&n), "IRQ {}", n);
        }
    }

    #[test]
    fn dispatchers_in_group_slots() {
        assert_eq!(irq::EXTI0_1_IRQn.number(), 5);
        assert_eq!(irq::EXTI2_3_IRQn.number(), 6);
        assert_eq!(irq::EXTI4_15_IRQn.number(), 7);
        assert!(INTERRUPTS[irq::EXTI0_1_IRQn.index()].points_to(ISR_EXTI0_1));
        assert!(INTERRUPTS[irq::EXTI2_3_IRQn.index()].points_to(ISR_EXTI2_3));
        assert!(INTERRUPTS[irq::EXTI4_15_IRQn.index()].points_to(ISR_EXTI4_15));
    }

    #[test]
    fn routes_cover_every_line() {
        assert_covers_all_lines(&EXTI_ROUTES);
        for route in EXTI_ROUTES {
            let vector = &INTERRUPTS[route.irq.index()];
            assert!(!vector.is_reserved());
            if !route.is_shared() {
                assert!(vector.points_to(LINE_HANDLERS[route.first as usize]));
            }
        }
    }

    fn set_pending(regs: &ExtiRegisters, flags: u32) {
        // Split the lines between both edge registers.
        regs.rpr1.set(flags & 0x5555);
        regs.fpr1.set(flags & !0x5555);
    }

    #[test]
    fn group_dispatch_runs_own_lines() {
        let shared = EXTI_ROUTES.iter().filter(|route| route.is_shared()).count();
        assert_eq!(DISPATCHERS.len(), shared);

        // SAFETY: every field is a plain u32 cell.
        let regs: ExtiRegisters = unsafe { core::mem::zeroed() };
        for &(handler, route) in DISPATCHERS {
            assert!(INTERRUPTS[route.irq.index()].points_to(handler));

            set_pending(&regs, 0xFFFF);
            let lines = recorded(|handlers| unsafe { dispatch_from(&regs, &route, handlers) });
            assert_eq!(lines, route.lines().collect::<Vec<_>>());

            set_pending(&regs, 0xFFFF & !route.mask());
            let lines = recorded(|handlers| unsafe { dispatch_from(&regs, &route, handlers) });
            assert!(lines.is_empty(), "{:?} ran {:?}", route, lines);

            set_pending(&regs, 1 << route.last);
            let lines = recorded(|handlers| unsafe { dispatch_from(&regs, &route, handlers) });
            assert_eq!(lines, vec![route.last]);
        }
    }

    #[test]
    fn line_to_irqn() {
        assert_eq!(exti_line_irqn(0), Some(irq::EXTI0_1_IRQn));
        assert_eq!(exti_line_irqn(1), Some(irq::EXTI0_1_IRQn));
        assert_eq!(exti_line_irqn(4), Some(irq::EXTI4_15_IRQn));
        assert_eq!(exti_line_irqn(5), Some(irq::EXTI4_15_IRQn));
        assert_eq!(exti_line_irqn(9), Some(irq::EXTI4_15_IRQn));
        assert_eq!(exti_line_irqn(10), Some(irq::EXTI4_15_IRQn));
        assert_eq!(exti_line_irqn(15), Some(irq::EXTI4_15_IRQn));
        assert_eq!(exti_line_irqn(16), None);
        assert_eq!(exti_line_irqn(u32::MAX), None);
    }

    #[test]
    fn pending_register() {
        // SAFETY: every field is a plain u32 cell.
        let regs: ExtiRegisters = unsafe { core::mem::zeroed() };
        assert_eq!(pending_of(&regs), 0);
        regs.rpr1.set(1 << 3);
        regs.fpr1.set((1 << 3) | (1 << 12));
        assert_eq!(pending_of(&regs), (1 << 3) | (1 << 12));
    }
}
