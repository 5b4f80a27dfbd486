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

//! Board-level constants shared by every family: supply voltage, oscillator
//! frequencies and their start-up timeouts, external audio clocks and the
//! flash/cache switches the vendor HAL reads.

/// Value of VDD in mV.
pub const VDD_VALUE: u32 = 3300;

/// External high-speed oscillator, in Hz.
pub const HSE_VALUE: u32 = 8_000_000;
/// HSE start-up timeout, in ms.
pub const HSE_STARTUP_TIMEOUT: u32 = 100;

/// Internal high-speed oscillator, in Hz.
pub const HSI_VALUE: u32 = 16_000_000;
pub const HSI_STARTUP_TIMEOUT: u32 = 5000;

/// Internal 14 MHz oscillator of the ADC, in Hz.
pub const HSI14_VALUE: u32 = 14_000_000;

/// Internal 48 MHz oscillator (USB, RNG), in Hz.
pub const HSI48_VALUE: u32 = 48_000_000;

/// Internal low-speed oscillator, in Hz.
pub const LSI_VALUE: u32 = 32_000;
pub const LSI_STARTUP_TIMEOUT: u32 = 5000;

/// External low-speed oscillator, in Hz.
pub const LSE_VALUE: u32 = 32_768;
pub const LSE_STARTUP_TIMEOUT: u32 = 5000;

/// External clock fed to the I2S PLL input pin, in Hz.
pub const EXTERNAL_CLOCK_VALUE: u32 = EXTERNAL_I2S1_CLOCK_VALUE;
pub const EXTERNAL_I2S1_CLOCK_VALUE: u32 = 12_288_000;
pub const EXTERNAL_I2S2_CLOCK_VALUE: u32 = 48_000;

/// External SAI clocks, in Hz.
pub const EXTERNAL_SAI1_CLOCK_VALUE: u32 = 48_000;
pub const EXTERNAL_SAI2_CLOCK_VALUE: u32 = 48_000;

/// The HAL tick is not driven by an RTOS.
pub const USE_RTOS: bool = false;
pub const USE_FULL_ASSERT: bool = cfg!(feature = "full_assert");

// Flash accelerator and cache switches, all left at reset state.
pub const PREFETCH_ENABLE: bool = false;
pub const INSTRUCTION_CACHE_ENABLE: bool = false;
pub const DATA_CACHE_ENABLE: bool = false;
pub const PREREAD_ENABLE: bool = false;
pub const BUFFER_CACHE_DISABLE: bool = false;

/// Least urgent priority level a core with `prio_bits` priority bits
/// implements. The NVIC field has 8 bits at most.
pub const fn lowest_priority(prio_bits: u8) -> u8 {
    let prio_bits = if prio_bits > 8 { 8 } else { prio_bits };
    ((1u16 << prio_bits) - 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_levels() {
        assert_eq!(lowest_priority(2), 3);
        assert_eq!(lowest_priority(4), 15);
        assert_eq!(lowest_priority(8), 255);
    }

    #[test]
    fn priority_bits_capped_at_eight() {
        assert_eq!(lowest_priority(9), 255);
        assert_eq!(lowest_priority(12), 255);
        assert_eq!(lowest_priority(u8::MAX), 255);
    }

    #[test]
    fn hal_switches() {
        assert_eq!(EXTERNAL_CLOCK_VALUE, EXTERNAL_I2S1_CLOCK_VALUE);
        assert_eq!(HSI14_VALUE, 14_000_000);
        assert_eq!(USE_FULL_ASSERT, cfg!(feature = "full_assert"));
        assert!(!USE_RTOS);
        assert!(!PREFETCH_ENABLE && !INSTRUCTION_CACHE_ENABLE && !DATA_CACHE_ENABLE);
    }
}
