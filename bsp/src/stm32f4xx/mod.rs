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

//! STM32F4 series (Cortex-M4F).
//!
//! EXTI lines 0 to 4 have a vector each. Lines 5 to 9 share `EXTI9_5` and
//! lines 10 to 15 share `EXTI15_10`; both are demultiplexed from `EXTI_PR`.
//!
//! Handler symbols keep the names the C startup code exported (`ISR_Tamper`,
//! `ISR_USART4`, ...) so existing overrides keep linking. The [`irq`] numbers
//! use the CMSIS names.

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

pub const INTERRUPT_COUNT: usize = 86;

register_structs! {
    ExtiRegisters {
        (0x00 => _reserved0),
        /// Pending register, write 1 to clear.
        (0x14 => pr: ReadWrite<u32>),
        (0x18 => @END),
    }
}

const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(0x4001_3C00 as *const ExtiRegisters) };

fn pending_of(exti: &ExtiRegisters) -> u32 {
    exti.pr.get()
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
    ISR_WWDG, ISR_PVD, ISR_Tamper, ISR_RTC_Wakeup, ISR_FLASH, ISR_RCC, ISR_EXTI0, ISR_EXTI1,
    ISR_EXTI2, ISR_EXTI3, ISR_EXTI4, ISR_DMA1_Stream0, ISR_DMA1_Stream1, ISR_DMA1_Stream2,
    ISR_DMA1_Stream3, ISR_DMA1_Stream4, ISR_DMA1_Stream5, ISR_DMA1_Stream6, ISR_ADC,
    ISR_CAN1_TX, ISR_CAN1_RX0, ISR_CAN1_RX1, ISR_CAN1_SCE, ISR_TIM1_Break_TIM9,
    ISR_TIM1_Update_TIM10, ISR_TIM1_TRG_COM_TIM11, ISR_TIM1_CC, ISR_TIM2, ISR_TIM3, ISR_TIM4,
    ISR_I2C1_EV, ISR_I2C1_ER, ISR_I2C2_EV, ISR_I2C2_ER, ISR_SPI1, ISR_SPI2, ISR_USART1,
    ISR_USART2, ISR_USART3, ISR_RTC_Alarm, ISR_USB_Wakeup, ISR_TIM8_Break_TIM12,
    ISR_TIM8_Update_TIM13, ISR_TIM8_TRG_COM_TIM14, ISR_TIM8_CC, ISR_DMA1_Stream7, ISR_FSMC,
    ISR_SDIO, ISR_TIM5, ISR_SPI3, ISR_USART4, ISR_USART5, ISR_TIM6_DAC, ISR_TIM7,
    ISR_DMA2_Stream0, ISR_DMA2_Stream1, ISR_DMA2_Stream2, ISR_DMA2_Stream3, ISR_DMA2_Stream4,
    ISR_ETH, ISR_ETH_Wakeup, ISR_CAN2_TX, ISR_CAN2_RX0, ISR_CAN2_RX1, ISR_CAN2_SCE, ISR_OTG_FS,
    ISR_DMA2_Stream5, ISR_DMA2_Stream6, ISR_DMA2_Stream7, ISR_USART6, ISR_I2C3_EV, ISR_I2C3_ER,
    ISR_OTG_HS_EP1_Out, ISR_OTG_HS_EP1_In, ISR_OTG_HS_Wakeup, ISR_OTG_HS, ISR_DCMI_isr_vector,
    ISR_Cryp, ISR_Hash_RNG, ISR_FPU, ISR_SPI4, ISR_SPI5,
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
    tbl[irq::PVD_IRQn.index()] = Vector::handler(ISR_PVD);
    tbl[irq::TAMP_STAMP_IRQn.index()] = Vector::handler(ISR_Tamper);
    tbl[irq::RTC_WKUP_IRQn.index()] = Vector::handler(ISR_RTC_Wakeup);
    tbl[irq::FLASH_IRQn.index()] = Vector::handler(ISR_FLASH);
    tbl[irq::RCC_IRQn.index()] = Vector::handler(ISR_RCC);
    tbl[irq::EXTI0_IRQn.index()] = Vector::handler(ISR_EXTI0);
    tbl[irq::EXTI1_IRQn.index()] = Vector::handler(ISR_EXTI1);
    tbl[irq::EXTI2_IRQn.index()] = Vector::handler(ISR_EXTI2);
    tbl[irq::EXTI3_IRQn.index()] = Vector::handler(ISR_EXTI3);
    tbl[irq::EXTI4_IRQn.index()] = Vector::handler(ISR_EXTI4);
    tbl[irq::DMA1_Stream0_IRQn.index()] = Vector::handler(ISR_DMA1_Stream0);
    tbl[irq::DMA1_Stream1_IRQn.index()] = Vector::handler(ISR_DMA1_Stream1);
    tbl[irq::DMA1_Stream2_IRQn.index()] = Vector::handler(ISR_DMA1_Stream2);
    tbl[irq::DMA1_Stream3_IRQn.index()] = Vector::handler(ISR_DMA1_Stream3);
    tbl[irq::DMA1_Stream4_IRQn.index()] = Vector::handler(ISR_DMA1_Stream4);
    tbl[irq::DMA1_Stream5_IRQn.index()] = Vector::handler(ISR_DMA1_Stream5);
    tbl[irq::DMA1_Stream6_IRQn.index()] = Vector::handler(ISR_DMA1_Stream6);
    tbl[irq::ADC_IRQn.index()] = Vector::handler(ISR_ADC);
    tbl[irq::CAN1_TX_IRQn.index()] = Vector::handler(ISR_CAN1_TX);
    tbl[irq::CAN1_RX0_IRQn.index()] = Vector::handler(ISR_CAN1_RX0);
    tbl[irq::CAN1_RX1_IRQn.index()] = Vector::handler(ISR_CAN1_RX1);
    tbl[irq::CAN1_SCE_IRQn.index()] = Vector::handler(ISR_CAN1_SCE);
    tbl[irq::EXTI9_5_IRQn.index()] = Vector::handler(ISR_EXTI9_5);
    tbl[irq::TIM1_BRK_TIM9_IRQn.index()] = Vector::handler(ISR_TIM1_Break_TIM9);
    tbl[irq::TIM1_UP_TIM10_IRQn.index()] = Vector::handler(ISR_TIM1_Update_TIM10);
    tbl[irq::TIM1_TRG_COM_TIM11_IRQn.index()] = Vector::handler(ISR_TIM1_TRG_COM_TIM11);
    tbl[irq::TIM1_CC_IRQn.index()] = Vector::handler(ISR_TIM1_CC);
    tbl[irq::TIM2_IRQn.index()] = Vector::handler(ISR_TIM2);
    tbl[irq::TIM3_IRQn.index()] = Vector::handler(ISR_TIM3);
    tbl[irq::TIM4_IRQn.index()] = Vector::handler(ISR_TIM4);
    tbl[irq::I2C1_EV_IRQn.index()] = Vector::handler(ISR_I2C1_EV);
    tbl[irq::I2C1_ER_IRQn.index()] = Vector::handler(ISR_I2C1_ER);
    tbl[irq::I2C2_EV_IRQn.index()] = Vector::handler(ISR_I2C2_EV);
    tbl[irq::I2C2_ER_IRQn.index()] = Vector::handler(ISR_I2C2_ER);
    tbl[irq::SPI1_IRQn.index()] = Vector::handler(ISR_SPI1);
    tbl[irq::SPI2_IRQn.index()] = Vector::handler(ISR_SPI2);
    tbl[irq::USART1_IRQn.index()] = Vector::handler(ISR_USART1);
    tbl[irq::USART2_IRQn.index()] = Vector::handler(ISR_USART2);
    tbl[irq::USART3_IRQn.index()] = Vector::handler(ISR_USART3);
    tbl[irq::EXTI15_10_IRQn.index()] = Vector::handler(ISR_EXTI15_10);
    tbl[irq::RTC_Alarm_IRQn.index()] = Vector::handler(ISR_RTC_Alarm);
    tbl[irq::OTG_FS_WKUP_IRQn.index()] = Vector::handler(ISR_USB_Wakeup);
    tbl[irq::TIM8_BRK_TIM12_IRQn.index()] = Vector::handler(ISR_TIM8_Break_TIM12);
    tbl[irq::TIM8_UP_TIM13_IRQn.index()] = Vector::handler(ISR_TIM8_Update_TIM13);
    tbl[irq::TIM8_TRG_COM_TIM14_IRQn.index()] = Vector::handler(ISR_TIM8_TRG_COM_TIM14);
    tbl[irq::TIM8_CC_IRQn.index()] = Vector::handler(ISR_TIM8_CC);
    tbl[irq::DMA1_Stream7_IRQn.index()] = Vector::handler(ISR_DMA1_Stream7);
    tbl[irq::FSMC_IRQn.index()] = Vector::handler(ISR_FSMC);
    tbl[irq::SDIO_IRQn.index()] = Vector::handler(ISR_SDIO);
    tbl[irq::TIM5_IRQn.index()] = Vector::handler(ISR_TIM5);
    tbl[irq::SPI3_IRQn.index()] = Vector::handler(ISR_SPI3);
    tbl[irq::UART4_IRQn.index()] = Vector::handler(ISR_USART4);
    tbl[irq::UART5_IRQn.index()] = Vector::handler(ISR_USART5);
    tbl[irq::TIM6_DAC_IRQn.index()] = Vector::handler(ISR_TIM6_DAC);
    tbl[irq::TIM7_IRQn.index()] = Vector::handler(ISR_TIM7);
    tbl[irq::DMA2_Stream0_IRQn.index()] = Vector::handler(ISR_DMA2_Stream0);
    tbl[irq::DMA2_Stream1_IRQn.index()] = Vector::handler(ISR_DMA2_Stream1);
    tbl[irq::DMA2_Stream2_IRQn.index()] = Vector::handler(ISR_DMA2_Stream2);
    tbl[irq::DMA2_Stream3_IRQn.index()] = Vector::handler(ISR_DMA2_Stream3);
    tbl[irq::DMA2_Stream4_IRQn.index()] = Vector::handler(ISR_DMA2_Stream4);
    tbl[irq::ETH_IRQn.index()] = Vector::handler(ISR_ETH);
    tbl[irq::ETH_WKUP_IRQn.index()] = Vector::handler(ISR_ETH_Wakeup);
    tbl[irq::CAN2_TX_IRQn.index()] = Vector::handler(ISR_CAN2_TX);
    tbl[irq::CAN2_RX0_IRQn.index()] = Vector::handler(ISR_CAN2_RX0);
    tbl[irq::CAN2_RX1_IRQn.index()] = Vector::handler(ISR_CAN2_RX1);
    tbl[irq::CAN2_SCE_IRQn.index()] = Vector::handler(ISR_CAN2_SCE);
    tbl[irq::OTG_FS_IRQn.index()] = Vector::handler(ISR_OTG_FS);
    tbl[irq::DMA2_Stream5_IRQn.index()] = Vector::handler(ISR_DMA2_Stream5);
    tbl[irq::DMA2_Stream6_IRQn.index()] = Vector::handler(ISR_DMA2_Stream6);
    tbl[irq::DMA2_Stream7_IRQn.index()] = Vector::handler(ISR_DMA2_Stream7);
    tbl[irq::USART6_IRQn.index()] = Vector::handler(ISR_USART6);
    tbl[irq::I2C3_EV_IRQn.index()] = Vector::handler(ISR_I2C3_EV);
    tbl[irq::I2C3_ER_IRQn.index()] = Vector::handler(ISR_I2C3_ER);
    tbl[irq::OTG_HS_EP1_OUT_IRQn.index()] = Vector::handler(ISR_OTG_HS_EP1_Out);
    tbl[irq::OTG_HS_EP1_IN_IRQn.index()] = Vector::handler(ISR_OTG_HS_EP1_In);
    tbl[irq::OTG_HS_WKUP_IRQn.index()] = Vector::handler(ISR_OTG_HS_Wakeup);
    tbl[irq::OTG_HS_IRQn.index()] = Vector::handler(ISR_OTG_HS);
    tbl[irq::DCMI_IRQn.index()] = Vector::handler(ISR_DCMI_isr_vector);
    tbl[irq::CRYP_IRQn.index()] = Vector::handler(ISR_Cryp);
    tbl[irq::HASH_RNG_IRQn.index()] = Vector::handler(ISR_Hash_RNG);
    tbl[irq::FPU_IRQn.index()] = Vector::handler(ISR_FPU);
    tbl[irq::SPI4_IRQn.index()] = Vector::handler(ISR_SPI4);
    tbl[irq::SPI5_IRQn.index()] = Vector::handler(ISR_SPI5);
    tbl
};

#[cfg(cortex_m)]
#[doc(hidden)]
#[used]
#[link_section = ".vector_table.interrupts"]
#[no_mangle]
pub static __INTERRUPTS: [Vector; INTERRUPT_COUNT] = INTERRUPTS;
