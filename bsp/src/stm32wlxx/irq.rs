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

// Names follow the STM32WL CMSIS device header (CPU1).
pub const WWDG_IRQn: IrqNumber = IrqNumber::new(0);
pub const PVD_PVM_IRQn: IrqNumber = IrqNumber::new(1);
pub const TAMP_STAMP_LSECSS_SSRU_IRQn: IrqNumber = IrqNumber::new(2);
pub const RTC_WKUP_IRQn: IrqNumber = IrqNumber::new(3);
pub const FLASH_IRQn: IrqNumber = IrqNumber::new(4);
pub const RCC_IRQn: IrqNumber = IrqNumber::new(5);
pub const EXTI0_IRQn: IrqNumber = IrqNumber::new(6);
pub const EXTI1_IRQn: IrqNumber = IrqNumber::new(7);
pub const EXTI2_IRQn: IrqNumber = IrqNumber::new(8);
pub const EXTI3_IRQn: IrqNumber = IrqNumber::new(9);
pub const EXTI4_IRQn: IrqNumber = IrqNumber::new(10);
pub const DMA1_Channel1_IRQn: IrqNumber = IrqNumber::new(11);
pub const DMA1_Channel2_IRQn: IrqNumber = IrqNumber::new(12);
pub const DMA1_Channel3_IRQn: IrqNumber = IrqNumber::new(13);
pub const DMA1_Channel4_IRQn: IrqNumber = IrqNumber::new(14);
pub const DMA1_Channel5_IRQn: IrqNumber = IrqNumber::new(15);
pub const DMA1_Channel6_IRQn: IrqNumber = IrqNumber::new(16);
pub const DMA1_Channel7_IRQn: IrqNumber = IrqNumber::new(17);
pub const ADC_IRQn: IrqNumber = IrqNumber::new(18);
pub const DAC_IRQn: IrqNumber = IrqNumber::new(19);
pub const C2SEV_PWR_C2H_IRQn: IrqNumber = IrqNumber::new(20);
pub const COMP_IRQn: IrqNumber = IrqNumber::new(21);
pub const EXTI9_5_IRQn: IrqNumber = IrqNumber::new(22);
pub const TIM1_BRK_IRQn: IrqNumber = IrqNumber::new(23);
pub const TIM1_UP_IRQn: IrqNumber = IrqNumber::new(24);
pub const TIM1_TRG_COM_IRQn: IrqNumber = IrqNumber::new(25);
pub const TIM1_CC_IRQn: IrqNumber = IrqNumber::new(26);
pub const TIM2_IRQn: IrqNumber = IrqNumber::new(27);
pub const TIM16_IRQn: IrqNumber = IrqNumber::new(28);
pub const TIM17_IRQn: IrqNumber = IrqNumber::new(29);
pub const I2C1_EV_IRQn: IrqNumber = IrqNumber::new(30);
pub const I2C1_ER_IRQn: IrqNumber = IrqNumber::new(31);
pub const I2C2_EV_IRQn: IrqNumber = IrqNumber::new(32);
pub const I2C2_ER_IRQn: IrqNumber = IrqNumber::new(33);
pub const SPI1_IRQn: IrqNumber = IrqNumber::new(34);
pub const SPI2_IRQn: IrqNumber = IrqNumber::new(35);
pub const USART1_IRQn: IrqNumber = IrqNumber::new(36);
pub const USART2_IRQn: IrqNumber = IrqNumber::new(37);
pub const LPUART1_IRQn: IrqNumber = IrqNumber::new(38);
pub const LPTIM1_IRQn: IrqNumber = IrqNumber::new(39);
pub const LPTIM2_IRQn: IrqNumber = IrqNumber::new(40);
pub const EXTI15_10_IRQn: IrqNumber = IrqNumber::new(41);
pub const RTC_Alarm_IRQn: IrqNumber = IrqNumber::new(42);
pub const LPTIM3_IRQn: IrqNumber = IrqNumber::new(43);
pub const SUBGHZSPI_IRQn: IrqNumber = IrqNumber::new(44);
pub const IPCC_C1_RX_IRQn: IrqNumber = IrqNumber::new(45);
pub const IPCC_C1_TX_IRQn: IrqNumber = IrqNumber::new(46);
pub const HSEM_IRQn: IrqNumber = IrqNumber::new(47);
pub const I2C3_EV_IRQn: IrqNumber = IrqNumber::new(48);
pub const I2C3_ER_IRQn: IrqNumber = IrqNumber::new(49);
pub const SUBGHZ_Radio_IRQn: IrqNumber = IrqNumber::new(50);
pub const AES_IRQn: IrqNumber = IrqNumber::new(51);
pub const RNG_IRQn: IrqNumber = IrqNumber::new(52);
pub const PKA_IRQn: IrqNumber = IrqNumber::new(53);
pub const DMA2_Channel1_IRQn: IrqNumber = IrqNumber::new(54);
pub const DMA2_Channel2_IRQn: IrqNumber = IrqNumber::new(55);
pub const DMA2_Channel3_IRQn: IrqNumber = IrqNumber::new(56);
pub const DMA2_Channel4_IRQn: IrqNumber = IrqNumber::new(57);
pub const DMA2_Channel5_IRQn: IrqNumber = IrqNumber::new(58);
pub const DMA2_Channel6_IRQn: IrqNumber = IrqNumber::new(59);
pub const DMA2_Channel7_IRQn: IrqNumber = IrqNumber::new(60);
pub const DMAMUX1_OVR_IRQn: IrqNumber = IrqNumber::new(61);
