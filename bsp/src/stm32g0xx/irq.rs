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

#![allow(dead_code)]
#![allow(non_upper_case_globals)]
use crate::arch::IrqNumber;

// Names follow the STM32G0 CMSIS device header.
pub const WWDG_IRQn: IrqNumber = IrqNumber::new(0);
pub const RTC_TAMP_IRQn: IrqNumber = IrqNumber::new(2);
pub const FLASH_IRQn: IrqNumber = IrqNumber::new(3);
pub const RCC_IRQn: IrqNumber = IrqNumber::new(4);
pub const EXTI0_1_IRQn: IrqNumber = IrqNumber::new(5);
pub const EXTI2_3_IRQn: IrqNumber = IrqNumber::new(6);
pub const EXTI4_15_IRQn: IrqNumber = IrqNumber::new(7);
pub const DMA1_Channel1_IRQn: IrqNumber = IrqNumber::new(9);
pub const DMA1_Channel2_3_IRQn: IrqNumber = IrqNumber::new(10);
pub const DMA1_Ch4_5_DMAMUX1_OVR_IRQn: IrqNumber = IrqNumber::new(11);
pub const ADC1_IRQn: IrqNumber = IrqNumber::new(12);
pub const TIM1_BRK_UP_TRG_COM_IRQn: IrqNumber = IrqNumber::new(13);
pub const TIM1_CC_IRQn: IrqNumber = IrqNumber::new(14);
pub const TIM3_IRQn: IrqNumber = IrqNumber::new(16);
pub const TIM14_IRQn: IrqNumber = IrqNumber::new(19);
pub const TIM16_IRQn: IrqNumber = IrqNumber::new(21);
pub const TIM17_IRQn: IrqNumber = IrqNumber::new(22);
pub const I2C1_IRQn: IrqNumber = IrqNumber::new(23);
pub const I2C2_IRQn: IrqNumber = IrqNumber::new(24);
pub const SPI1_IRQn: IrqNumber = IrqNumber::new(25);
pub const SPI2_IRQn: IrqNumber = IrqNumber::new(26);
pub const USART1_IRQn: IrqNumber = IrqNumber::new(27);
pub const USART2_IRQn: IrqNumber = IrqNumber::new(28);
