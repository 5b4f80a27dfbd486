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

//! STM32WL series, CPU1 (Cortex-M4).
//!
//! Same EXTI layout as the F4: lines 0 to 4 have a vector each, 5 to 9 and
//! 10 to 15 are grouped and read back from `EXTI_PR1`.

pub mod irq;

use crate::{
    arch::{IrqNumber, Vector},
    exti::{self, ExtiRoute, LineHandler, EXTI_LINES},
    static_ref::StaticRef,
    sys_config,
};
use tock_registers::{interfaces::Readable, register_structs, registers::ReadWrite};

pub const NVIC_PRIO_BITS: u8 = 4;
pub const TICK_INT_PRIORITY: u8 = sys_config::lowest_priority(NVIC_PRIO_BITS);

pub const INTERRUPT_COUNT: usize = 62;

register_structs! {
    ExtiRegisters {
        (0x00 => _reserved0),
        /// Pending register 1, write 1 to clear.
        (0x0C => pr1: ReadWrite<u32>),
        (0x10 => @END),
    }
}

const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(0x5800_0800 as *const ExtiRegisters) };

fn pending_of(exti: &ExtiRegisters) -> u32 {
    exti.pr1.get()
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
    ISR_WWDG, ISR_PVD_PVM, ISR_TAMP_STAMP_LSECSS_SSRU, ISR_RTC_WKUP, ISR_FLASH, ISR_RCC,
    ISR_EXTI0, ISR_EXTI1, ISR_EXTI2, ISR_EXTI3, ISR_EXTI4, ISR_DMA1_Channel1, ISR_DMA1_Channel2,
    ISR_DMA1_Channel3, ISR_DMA1_Channel4, ISR_DMA1_Channel5, ISR_DMA1_Channel6,
    ISR_DMA1_Channel7, ISR_ADC, ISR_DAC, ISR_C2SEV_PWR_C2H, ISR_COMP, ISR_TIM1_BRK, ISR_TIM1_UP,
    ISR_TIM1_TRG_COM, ISR_TIM1_CC, ISR_TIM2, ISR_TIM16, ISR_TIM17, ISR_I2C1_EV, ISR_I2C1_ER,
    ISR_I2C2_EV, ISR_I2C2_ER, ISR_SPI1, ISR_SPI2, ISR_USART1, ISR_USART2, ISR_LPUART1,
    ISR_LPTIM1, ISR_LPTIM2, ISR_RTC_Alarm, ISR_LPTIM3, ISR_SUBGHZSPI, ISR_IPCC_C1_RX,
    ISR_IPCC_C1_TX, ISR_HSEM, ISR_I2C3_EV, ISR_I2C3_ER, ISR_SUBGHZ_Radio, ISR_AES, ISR_RNG,
    ISR_PKA, ISR_DMA2_Channel1, ISR_DMA2_Channel2, ISR_DMA2_Channel3, ISR_DMA2_Channel4,
    ISR_DMA2_Channel5, ISR_DMA2_Channel6, ISR_DMA2_Channel7, ISR_DMAMUX1_OVR,
);

// Per-line handlers called by the group dispatchers.
default_irq_handlers!(
    ISR_EXTI5, ISR_EXTI6, ISR_EXTI7, ISR_EXTI8, ISR_EXTI9, ISR_EXTI10, ISR_EXTI11, ISR_EXTI12,
    ISR_EXTI13, ISR_EXTI14, ISR_EXTI15,
);

pub const EXTI9_5_ROUTE: ExtiRoute = ExtiRoute::new(irq::EXTI9_5_IRQn, 5, 9);
pub const EXTI15_10_ROUTE: ExtiRoute = ExtiRoute::new(irq::EXTI15_10_IRQn, 10, 15);

exti_dispatchers!(
    ISR_EXTI9_5 => EXTI9_5_ROUTE,
    ISR_EXTI15_10 => EXTI15_10_ROUTE,
);

pub const EXTI_ROUTES: [ExtiRoute; 7] = [
    ExtiRoute::single(irq::EXTI0_IRQn, 0),
    ExtiRoute::single(irq::EXTI1_IRQn, 1),
    ExtiRoute::single(irq::EXTI2_IRQn, 2),
    ExtiRoute::single(irq::EXTI3_IRQn, 3),
    ExtiRoute::single(irq::EXTI4_IRQn, 4),
    EXTI9_5_ROUTE,
    EXTI15_10_ROUTE,
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
    tbl[irq::PVD_PVM_IRQn.index()] = Vector::handler(ISR_PVD_PVM);
    tbl[irq::TAMP_STAMP_LSECSS_SSRU_IRQn.index()] = Vector::handler(ISR_TAMP_STAMP_LSECSS_SSRU);
    tbl[irq::RTC_WKUP_IRQn.index()] = Vector::handler(ISR_RTC_WKUP);
    tbl[irq::FLASH_IRQn.index()] = Vector::handler(ISR_FLASH);
    tbl[irq::RCC_IRQn.index()] = Vector::handler(ISR_RCC);
    tbl[irq::EXTI0_IRQn.index()] = Vector::handler(ISR_EXTI0);
    tbl[irq::EXTI1_IRQn.index()] = Vector::handler(ISR_EXTI1);
    tbl[irq::EXTI2_IRQn.index()] = Vector::handler(ISR_EXTI2);
    tbl[irq::EXTI3_IRQn.index()] = Vector::handler(ISR_EXTI3);
    tbl[irq::EXTI4_IRQn.index()] = Vector::handler(ISR_EXTI4);
    tbl[irq::DMA1_Channel1_IRQn.index()] = Vector::handler(ISR_DMA1_Channel1);
    tbl[irq::DMA1_Channel2_IRQn.index()] = Vector::handler(ISR_DMA1_Channel2);
    tbl[irq::DMA1_Channel3_IRQn.index()] = Vector::handler(ISR_DMA1_Channel3);
    tbl[irq::DMA1_Channel4_IRQn.index()] = Vector::handler(ISR_DMA1_Channel4);
    tbl[irq::DMA1_Channel5_IRQn.index()] = Vector::handler(ISR_DMA1_Channel5);
    tbl[irq::DMA1_Channel6_IRQn.index()] = Vector::handler(ISR_DMA1_Channel6);
    tbl[irq::DMA1_Channel7_IRQn.index()] = Vector::handler(ISR_DMA1_Channel7);
    tbl[irq::ADC_IRQn.index()] = Vector::handler(ISR_ADC);
    tbl[irq::DAC_IRQn.index()] = Vector::handler(ISR_DAC);
    tbl[irq::C2SEV_PWR_C2H_IRQn.index()] = Vector::handler(ISR_C2SEV_PWR_C2H);
    tbl[irq::COMP_IRQn.index()] = Vector::handler(ISR_COMP);
    tbl[irq::EXTI9_5_IRQn.index()] = Vector::handler(ISR_EXTI9_5);
    tbl[irq::TIM1_BRK_IRQn.index()] = Vector::handler(ISR_TIM1_BRK);
    tbl[irq::TIM1_UP_IRQn.index()] = Vector::handler(ISR_TIM1_UP);
    tbl[irq::TIM1_TRG_COM_IRQn.index()] = Vector::handler(ISR_TIM1_TRG_COM);
    tbl[irq::TIM1_CC_IRQn.index()] = Vector::handler(ISR_TIM1_CC);
    tbl[irq::TIM2_IRQn.index()] = Vector::handler(ISR_TIM2);
    tbl[irq::TIM16_IRQn.index()] = Vector::handler(ISR_TIM16);
    tbl[irq::TIM17_IRQn.index()] = Vector::handler(ISR_TIM17);
    tbl[irq::I2C1_EV_IRQn.index()] = Vector::handler(ISR_I2C1_EV);
    tbl[irq::I2C1_ER_IRQn.index()] = Vector::handler(ISR_I2C1_ER);
    tbl[irq::I2C2_EV_IRQn.index()] = Vector::handler(ISR_I2C2_EV);
    tbl[irq::I2C2_ER_IRQn.index()] = Vector::handler(ISR_I2C2_ER);
    tbl[irq::SPI1_IRQn.index()] = Vector::handler(ISR_SPI1);
    tbl[irq::SPI2_IRQn.index()] = Vector::handler(ISR_SPI2);
    tbl[irq::USART1_IRQn.index()] = Vector::handler(ISR_USART1);
    tbl[irq::USART2_IRQn.index()] = Vector::handler(ISR_USART2);
    tbl[irq::LPUART1_IRQn.index()] = Vector::handler(ISR_LPUART1);
    tbl[irq::LPTIM1_IRQn.index()] = Vector::handler(ISR_LPTIM1);
    tbl[irq::LPTIM2_IRQn.index()] = Vector::handler(ISR_LPTIM2);
    tbl[irq::EXTI15_10_IRQn.index()] = Vector::handler(ISR_EXTI15_10);
    tbl[irq::RTC_Alarm_IRQn.index()] = Vector::handler(ISR_RTC_Alarm);
    tbl[irq::LPTIM3_IRQn.index()] = Vector::handler(ISR_LPTIM3);
    tbl[irq::SUBGHZSPI_IRQn.index()] = Vector::handler(ISR_SUBGHZSPI);
    tbl[irq::IPCC_C1_RX_IRQn.index()] = Vector::handler(ISR_IPCC_C1_RX);
    tbl[irq::IPCC_C1_TX_IRQn.index()] = Vector::handler(ISR_IPCC_C1_TX);
    tbl[irq::HSEM_IRQn.index()] = Vector::handler(ISR_HSEM);
    tbl[irq::I2C3_EV_IRQn.index()] = Vector::handler(ISR_I2C3_EV);
    tbl[irq::I2C3_ER_IRQn.index()] = Vector::handler(ISR_I2C3_ER);
    tbl[irq::SUBGHZ_Radio_IRQn.index()] = Vector::handler(ISR_SUBGHZ_Radio);
    tbl[irq::AES_IRQn.index()] = Vector::handler(ISR_AES);
    tbl[irq::RNG_IRQn.index()] = Vector::handler(ISR_RNG);
    tbl[irq::PKA_IRQn.index()] = Vector::handler(ISR_PKA);
    tbl[irq::DMA2_Channel1_IRQn.index()] = Vector::handler(ISR_DMA2_Channel1);
    tbl[irq::DMA2_Channel2_IRQn.index()] = Vector::handler(ISR_DMA2_Channel2);
    tbl[irq::DMA2_Channel3_IRQn.index()] = Vector::handler(ISR_DMA2_Channel3);
    tbl[irq::DMA2_Channel4_IRQn.index()] = Vector::handler(ISR_DMA2_Channel4);
    tbl[irq::DMA2_Channel5_IRQn.index()] = Vector::handler(ISR_DMA2_Channel5);
    tbl[irq::DMA2_Channel6_IRQn.index()] = Vector::handler(ISR_DMA2_Channel6);
    tbl[irq::DMA2_Channel7_IRQn.index()] = Vector::handler(ISR_DMA2_Channel7);
    tbl[irq::DMAMUX1_OVR_IRQn.index()] = Vector::handler(ISR_DMAMUX1_OVR);
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

    const RESERVED: [usize; 0] = [];

    #[test]
    fn reserved_slots() {
        for (n, vector) in INTERRUPTS.iter().enumerate() {
            assert_eq!(vector.is_reserved(), RESERVED.contains(&n), "IRQ {}", n);
        }
    }

    #[test]
    fn dispatchers_in_group_slots() {
        assert_eq!(irq::EXTI9_5_IRQn.number(), 22);
        assert_eq!(irq::EXTI15_10_IRQn.number(), 41);
        assert!(INTERRUPTS[irq::EXTI9_5_IRQn.index()].points_to(ISR_EXTI9_5));
        assert!(INTERRUPTS[irq::EXTI15_10_IRQn.index()].points_to(ISR_EXTI15_10));
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
        regs.pr1.set(flags);
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
        assert_eq!(exti_line_irqn(0), Some(irq::EXTI0_IRQn));
        assert_eq!(exti_line_irqn(1), Some(irq::EXTI1_IRQn));
        assert_eq!(exti_line_irqn(4), Some(irq::EXTI4_IRQn));
        assert_eq!(exti_line_irqn(5), Some(irq::EXTI9_5_IRQn));
        assert_eq!(exti_line_irqn(9), Some(irq::EXTI9_5_IRQn));
        assert_eq!(exti_line_irqn(10), Some(irq::EXTI15_10_IRQn));
        assert_eq!(exti_line_irqn(15), Some(irq::EXTI15_10_IRQn));
        assert_eq!(exti_line_irqn(16), None);
        assert_eq!(exti_line_irqn(u32::MAX), None);
    }

    #[test]
    fn pending_register() {
        // SAFETY: every field is a plain u32 cell.
        let regs: ExtiRegisters = unsafe { core::mem::zeroed() };
        assert_eq!(pending_of(&regs), 0);
        regs.pr1.set(1 << 15);
        assert_eq!(pending_of(&regs), 1 << 15);
    }
}
