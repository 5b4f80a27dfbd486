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

use core::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaultStatus {
    pub cfsr: u32,  // Configurable Fault Status Register
    pub hfsr: u32,  // Hard Fault Status Register
    pub mmfar: u32, // Memory Management Fault Address Register
    pub bfar: u32,  // Bus Fault Address Register
}

impl FaultStatus {
    #[cfg(all(cortex_m, not(armv6m)))]
    pub fn from_scb() -> Self {
        // SAFETY: SCB::PTR comes from cortex_m crate and is a valid pointer
        let scb = unsafe { &*cortex_m::peripheral::SCB::PTR };

        Self {
            cfsr: scb.cfsr.read(),
            hfsr: scb.hfsr.read(),
            mmfar: scb.mmfar.read(),
            bfar: scb.bfar.read(),
        }
    }

    // ARMv6-M has no fault status registers.
    #[cfg(all(cortex_m, armv6m))]
    pub fn from_scb() -> Self {
        Self::default()
    }
}

impl fmt::Display for FaultStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.hfsr == 0 && self.cfsr == 0 {
            return Ok(());
        }
        writeln!(f, "\nHFSR: 0x{:08x}", self.hfsr)?;
        if self.hfsr & (1 << 1) != 0 {
            writeln!(f, "  - Vector Table Read Fault")?;
        }
        if self.hfsr & (1 << 30) != 0 {
            writeln!(f, "  - Forced Hard Fault")?;
        }
        if self.hfsr & (1 << 31) != 0 {
            writeln!(f, "  - Debug Event")?;
        }
        writeln!(f, "CFSR: 0x{:08x}", self.cfsr)?;
        // MMFSR, CFSR[7:0]
        if self.cfsr & 0xFF != 0 {
            writeln!(f, "  Memory Management Fault:")?;
            if self.cfsr & (1 << 0) != 0 {
                writeln!(f, "    - Instruction access violation")?;
            }
            if self.cfsr & (1 << 1) != 0 {
                writeln!(f, "    - Data access violation")?;
            }
            if self.cfsr & (1 << 3) != 0 {
                writeln!(f, "    - Unstacking error")?;
            }
            if self.cfsr & (1 << 4) != 0 {
                writeln!(f, "    - Stacking error")?;
            }
            if self.cfsr & (1 << 5) != 0 {
                writeln!(f, "    - Lazy floating-point state preservation error")?;
            }
            if self.cfsr & (1 << 7) != 0 {
                writeln!(f, "    - Fault Address: 0x{:08x}", self.mmfar)?;
            }
        }
        // BFSR, CFSR[15:8]
        if self.cfsr & 0xFF00 != 0 {
            writeln!(f, "  Bus Fault:")?;
            if self.cfsr & (1 << 8) != 0 {
                writeln!(f, "    - Instruction bus error")?;
            }
            if self.cfsr & (1 << 9) != 0 {
                writeln!(f, "    - Precise error")?;
            }
            if self.cfsr & (1 << 10) != 0 {
                writeln!(f, "    - Imprecise error")?;
            }
            if self.cfsr & (1 << 11) != 0 {
                writeln!(f, "    - Unstack error")?;
            }
            if self.cfsr & (1 << 12) != 0 {
                writeln!(f, "    - Stacking error")?;
            }
            if self.cfsr & (1 << 13) != 0 {
                writeln!(f, "    - Lazy state preservation error")?;
            }
            if self.cfsr & (1 << 15) != 0 {
                writeln!(f, "    - Fault Address: 0x{:08x}", self.bfar)?;
            }
        }
        // UFSR, CFSR[31:16]
        if self.cfsr & 0xFFFF_0000 != 0 {
            writeln!(f, "  Usage Fault:")?;
            if self.cfsr & (1 << 16) != 0 {
                writeln!(f, "    - Undefined instruction")?;
            }
            if self.cfsr & (1 << 17) != 0 {
                writeln!(f, "    - Invalid state")?;
            }
            if self.cfsr & (1 << 18) != 0 {
                writeln!(f, "    - Invalid PC load")?;
            }
            if self.cfsr & (1 << 19) != 0 {
                writeln!(f, "    - No coprocessor")?;
            }
            if self.cfsr & (1 << 24) != 0 {
                writeln!(f, "    - Unaligned access")?;
            }
            if self.cfsr & (1 << 25) != 0 {
                writeln!(f, "    - Divide by zero")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_status_prints_nothing() {
        assert_eq!(FaultStatus::default().to_string(), "");
    }

    #[test]
    fn forced_precise_bus_fault() {
        let status = FaultStatus {
            hfsr: 1 << 30,
            cfsr: (1 << 9) | (1 << 15),
            bfar: 0x2002_0000,
            ..Default::default()
        };
        let text = status.to_string();
        assert!(text.contains("HFSR: 0x40000000"));
        assert!(text.contains("Forced Hard Fault"));
        assert!(text.contains("Bus Fault:"));
        assert!(text.contains("Precise error"));
        assert!(text.contains("Fault Address: 0x20020000"));
        assert!(!text.contains("Usage Fault"));
        assert!(!text.contains("Memory Management Fault"));
    }

    #[test]
    fn usage_fault_bits() {
        let status = FaultStatus {
            hfsr: 1 << 30,
            cfsr: (1 << 25) | (1 << 24) | (1 << 19),
            ..Default::default()
        };
        let text = status.to_string();
        assert!(text.contains("Usage Fault:"));
        assert!(text.contains("Divide by zero"));
        assert!(text.contains("Unaligned access"));
        assert!(text.contains("No coprocessor"));
        assert!(!text.contains("Bus Fault"));
    }

    #[test]
    fn mem_manage_address_only_when_valid() {
        let status = FaultStatus {
            cfsr: 1 << 1,
            mmfar: 0xdead_beef,
            ..Default::default()
        };
        let text = status.to_string();
        assert!(text.contains("Data access violation"));
        assert!(!text.contains("0xdeadbeef"));

        let status = FaultStatus {
            cfsr: (1 << 1) | (1 << 7),
            ..status
        };
        assert!(status.to_string().contains("Fault Address: 0xdeadbeef"));
    }
}
