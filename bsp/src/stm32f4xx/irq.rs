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

// Names follow the STM32F4 CMSIS device header.
pub const WWDG_IRQn: IrqNumber = IrqNumber::new(0);
pub const PVD_IRQn: IrqNumber = IrqNumber::new(1);
pub const TAMP_STAMP_IRQn: IrqNumber = IrqNumber::new(2);
pub const RTC_WKUP_IRQn: IrqNumber = IrqNumber::new(3);
pub const FLASH_IRQn: IrqNumber = IrqNumber::new(4);
pub const RCC_IRQn: IrqNumber = IrqNumber::new(5);
pub const EXTI0_IRQn: IrqNumber = IrqNumber::new(6);
pub const EXTI1_IRQn: IrqNumber = IrqNumber::new(7);
pub const EXTI2_IRQn: IrqNumber = IrqNumber::new(8);
pub const EXTI3_IRQn: IrqNumber = IrqNumber::new(9);
pub const EXTI4_IRQn: IrqNumber = IrqNumber::new(10);
pub const DMA1_Stream0_IRQn: IrqNumber = IrqNumber::new(11);
pub const DMA1_Stream1_IRQn: IrqNumber = IrqNumber::new(12);
pub const DMA1_Stream2_IRQn: IrqNumber = IrqNumber::new(13);
pub const DMA1_Stream3_IRQn: IrqNumber = IrqNumber::new(14);
pub const DMA1_Stream4_IRQn: IrqNumber = IrqNumber::new(15);
pub const DMA1_Stream5_IRQn: IrqNumber = IrqNumber::new(16);
pub const DMA1_Stream6_IRQn: IrqNumber = IrqNumber::new(17);
pub const ADC_IRQn: IrqNumber = IrqNumber::new(18);
pub const CAN1_TX_IRQn: IrqNumber = IrqNumber::new(19);
pub const CAN1_RX0_IRQn: IrqNumber = IrqNumber::new(20);
pub const CAN1_RX1_IRQn: IrqNumber = IrqNumber::new(21);
pub const CAN1_SCE_IRQn: IrqNumber = IrqNumber::new(22);
pub const EXTI9_5_IRQn: IrqNumber = IrqNumber::new(23);
pub const TIM1_BRK_TIM9_IRQn: IrqNumber = IrqNumber::new(24);
pub const TIM1_UP_TIM10_IRQn: IrqNumber = IrqNumber::new(25);
pub const TIM1_TRG_COM_TIM11_IRQn: IrqNumber = IrqNumber::new(26);
pub const TIM1_CC_IRQn: IrqNumber = IrqNumber::new(27);
pub const TIM2_IRQn: IrqNumber = IrqNumber::new(28);
pub const TIM3_IRQn: IrqNumber = IrqNumber::new(29);
pub const TIM4_IRQn: IrqNumber = IrqNumber::new(30);
pub const I2C1_EV_IRQn: IrqNumber = IrqNumber::new(31);
pub const I2C1_ER_IRQn: IrqNumber = IrqNumber::new(32);
pub const I2C2_EV_IRQn: IrqNumber = IrqNumber::new(33);
pub const I2C2_ER_IRQn: IrqNumber = IrqNumber::new(34);
pub const SPI1_IRQn: IrqNumber = IrqNumber::new(35);
pub const SPI2_IRQn: IrqNumber = IrqNumber::new(36);
pub const USART1_IRQn: IrqNumber = IrqNumber::new(37);
pub const USART2_IRQn: IrqNumber = IrqNumber::new(38);
pub const USART3_IRQn: IrqNumber = IrqNumber::new(39);
pub const EXTI15_10_IRQn: IrqNumber = IrqNumber::new(40);
pub const RTC_Alarm_IRQn: IrqNumber = IrqNumber::new(41);
pub const OTG_FS_WKUP_IRQn: IrqNumber = IrqNumber::new(42);
pub const TIM8_BRK_TIM12_IRQn: IrqNumber = IrqNumber::new(43);
pub const TIM8_UP_TIM13_IRQn: IrqNumber = IrqNumber::new(44);
pub const TIM8_TRG_COM_TIM14_IRQn: IrqNumber = IrqNumber::new(45);
pub const TIM8_CC_IRQn: IrqNumber = IrqNumber::new(46);
pub const DMA1_Stream7_IRQn: IrqNumber = IrqNumber::new(47);
pub const FSMC_IRQn: IrqNumber = IrqNumber::new(48);
pub const SDIO_IRQn: IrqNumber = IrqNumber::new(49);
pub const TIM5_IRQn: IrqNumber = IrqNumber::new(50);
pub const SPI3_IRQn: IrqNumber = IrqNumber::new(51);
pub const UART4_IRQn: IrqNumber = IrqNumber::new(52);
pub const UART5_IRQn: IrqNumber = IrqNumber::new(53);
pub const TIM6_DAC_IRQn: IrqNumber = IrqNumber::new(54);
pub const TIM7_IRQn: IrqNumber = IrqNumber::new(55);
pub const DMA2_Stream0_IRQn: IrqNumber = IrqNumber::new(56);
pub const DMA2_Stream1_IRQn: IrqNumber = IrqNumber::new(57);
pub const DMA2_Stream2_IRQn: IrqNumber = IrqNumber::new(58);
pub const DMA2_Stream3_IRQn: IrqNumber = IrqNumber::new(59);
pub const DMA2_Stream4_IRQn: IrqNumber = IrqNumber::new(60);
pub const ETH_IRQn: IrqNumber = IrqNumber::new(61);
pub const ETH_WKUP_IRQn: IrqNumber = IrqNumber::new(62);
pub const CAN2_TX_IRQn: IrqNumber = IrqNumber::new(63);
pub const CAN2_RX0_IRQn: IrqNumber = IrqNumber::new(64);
pub const CAN2_RX1_IRQn: IrqNumber = IrqNumber::new(65);
pub const CAN2_SCE_IRQn: IrqNumber = IrqNumber::new(66);
pub const OTG_FS_IRQn: IrqNumber = IrqNumber::new(67);
pub const DMA2_Stream5_IRQn: IrqNumber = IrqNumber::new(68);
pub const DMA2_Stream6_IRQn: IrqNumber = IrqNumber::new(69);
pub const DMA2_Stream7_IRQn: IrqNumber = IrqNumber::new(70);
pub const USART6_IRQn: IrqNumber = IrqNumber::new(71);
pub const I2C3_EV_IRQn: IrqNumber = IrqNumber::new(72);
pub const I2C3_ER_IRQn: IrqNumber = IrqNumber::new(73);
pub const OTG_HS_EP1_OUT_IRQn: IrqNumber = IrqNumber::new(74);
pub const OTG_HS_EP1_IN_IRQn: IrqNumber = IrqNumber::new(75);
pub const OTG_HS_WKUP_IRQn: IrqNumber = IrqNumber::new(76);
pub const OTG_HS_IRQn: IrqNumber = IrqNumber::new(77);
pub const DCMI_IRQn: IrqNumber = IrqNumber::new(78);
pub const CRYP_IRQn: IrqNumber = IrqNumber::new(79);
pub const HASH_RNG_IRQn: IrqNumber = IrqNumber::new(80);
pub const FPU_IRQn: IrqNumber = IrqNumber::new(81);
pub const SPI4_IRQn: IrqNumber = IrqNumber::new(84);
pub const SPI5_IRQn: IrqNumber = IrqNumber::new(85);
