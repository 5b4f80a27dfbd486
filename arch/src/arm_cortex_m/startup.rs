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

use core::ptr;

pub type InitFn = unsafe extern "C" fn();

/// Steps of the reset sequence, called by [`run`] in declaration order.
pub struct StartupHooks {
    pub early_cpu_setup: unsafe fn(),
    pub init_memory: unsafe fn(),
    pub startup_extension: unsafe fn(),
    pub constructors: unsafe fn(),
    pub main: unsafe fn() -> i32,
    pub destructors: unsafe fn(),
    pub exit_extension: unsafe fn(),
}

/// Runs the reset sequence and returns the status of `main`.
///
/// # Safety
///
/// Must run once, from the reset vector, before anything touches `.data` or
/// `.bss`.
pub unsafe fn run(hooks: &StartupHooks) -> i32 {
    (hooks.early_cpu_setup)();
    (hooks.init_memory)();
    (hooks.startup_extension)();
    (hooks.constructors)();
    let status = (hooks.main)();
    (hooks.destructors)();
    (hooks.exit_extension)();
    status
}

/// Copies words from `src` to `dst` until `dst` reaches `end`.
///
/// # Safety
///
/// `dst..end` must be writable, `src` readable for as many words, and the
/// regions must not overlap.
pub unsafe fn copy_words(mut src: *const u32, mut dst: *mut u32, end: *mut u32) {
    while dst < end {
        ptr::write_volatile(dst, ptr::read_volatile(src));
        dst = dst.add(1);
        src = src.add(1);
    }
}

/// Zero-fills the words in `dst..end`.
///
/// # Safety
///
/// `dst..end` must be writable.
pub unsafe fn zero_words(mut dst: *mut u32, end: *mut u32) {
    while dst < end {
        ptr::write_volatile(dst, 0);
        dst = dst.add(1);
    }
}

/// Calls every function of `start..end` in order.
///
/// # Safety
///
/// Every entry in the range must be a valid function pointer.
pub unsafe fn run_array(start: *const InitFn, end: *const InitFn) {
    let mut entry = start;
    while entry < end {
        (*entry)();
        entry = entry.add(1);
    }
}

/// Calls every function of `start..end` from last to first.
///
/// # Safety
///
/// Every entry in the range must be a valid function pointer.
pub unsafe fn run_array_reverse(start: *const InitFn, end: *const InitFn) {
    let mut entry = end;
    while entry > start {
        entry = entry.sub(1);
        (*entry)();
    }
}

/// Runs after RAM initialization, before the constructors. C code overrides
/// it as `startupExtension`.
#[export_name = "startupExtension"]
#[cfg_attr(cortex_m, linkage = "weak")]
pub extern "C" fn startup_extension() {}

/// Runs after the destructors. C code overrides it as `exitExtension`.
#[export_name = "exitExtension"]
#[cfg_attr(cortex_m, linkage = "weak")]
pub extern "C" fn exit_extension() {}

#[cfg(cortex_m)]
mod target {
    use super::*;
    use core::ptr::{addr_of, addr_of_mut};
    use cortex_m::peripheral::SCB;

    extern "C" {
        static _sidata: u32;
        static mut _sdata: u32;
        static mut _edata: u32;
        static mut _sbss: u32;
        static mut _ebss: u32;

        static __preinit_array_start: InitFn;
        static __preinit_array_end: InitFn;
        static __init_array_start: InitFn;
        static __init_array_end: InitFn;
        static __fini_array_start: InitFn;
        static __fini_array_end: InitFn;

        #[cfg(not(armv6m))]
        static __vector_table: u32;

        fn main() -> i32;
    }

    unsafe fn early_cpu_setup() {
        #[cfg(any(has_fpu, not(armv6m)))]
        let scb = &*SCB::PTR;

        #[cfg(not(armv6m))]
        scb.vtor.write(addr_of!(__vector_table) as u32);

        // Full access to CP10 and CP11.
        #[cfg(has_fpu)]
        scb.cpacr.modify(|r| r | (0b1111 << 20));

        #[cfg(all(feature = "unaligned_support_disable", not(armv6m)))]
        {
            const SCB_CCR_UNALIGN_TRP_MASK: u32 = 1 << 3;
            scb.ccr.modify(|r| r | SCB_CCR_UNALIGN_TRP_MASK);
        }

        #[cfg(all(feature = "div_by_zero_trap", not(armv6m)))]
        {
            const SCB_CCR_DIV_0_TRP_MASK: u32 = 1 << 4;
            scb.ccr.modify(|r| r | SCB_CCR_DIV_0_TRP_MASK);
        }

        cortex_m::asm::dsb();
        cortex_m::asm::isb();
    }

    unsafe fn init_memory() {
        copy_words(
            addr_of!(_sidata),
            addr_of_mut!(_sdata),
            addr_of_mut!(_edata),
        );
        zero_words(addr_of_mut!(_sbss), addr_of_mut!(_ebss));
    }

    unsafe fn constructors() {
        run_array(addr_of!(__preinit_array_start), addr_of!(__preinit_array_end));
        run_array(addr_of!(__init_array_start), addr_of!(__init_array_end));
    }

    unsafe fn destructors() {
        run_array_reverse(addr_of!(__fini_array_start), addr_of!(__fini_array_end));
    }

    unsafe fn call_startup_extension() {
        startup_extension();
    }

    unsafe fn call_exit_extension() {
        exit_extension();
    }

    unsafe fn call_main() -> i32 {
        main()
    }

    pub(super) static HOOKS: StartupHooks = StartupHooks {
        early_cpu_setup,
        init_memory,
        startup_extension: call_startup_extension,
        constructors,
        main: call_main,
        destructors,
        exit_extension: call_exit_extension,
    };
}

#[cfg(cortex_m)]
#[no_mangle]
pub unsafe extern "C" fn reset_handler_inner() -> ! {
    let _status = run(&target::HOOKS);
    super::park()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    static TRACE: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

    fn record(step: &'static str) {
        TRACE.lock().unwrap().push(step);
    }

    unsafe fn early_cpu_setup() {
        record("early_cpu_setup");
    }
    unsafe fn init_memory() {
        record("init_memory");
    }
    unsafe fn startup_extension() {
        record("startup_extension");
    }
    unsafe fn constructors() {
        record("constructors");
    }
    unsafe fn main() -> i32 {
        record("main");
        7
    }
    unsafe fn destructors() {
        record("destructors");
    }
    unsafe fn exit_extension() {
        record("exit_extension");
    }

    #[test]
    fn reset_sequence_order() {
        let hooks = StartupHooks {
            early_cpu_setup,
            init_memory,
            startup_extension,
            constructors,
            main,
            destructors,
            exit_extension,
        };
        let status = unsafe { run(&hooks) };
        assert_eq!(status, 7);
        assert_eq!(
            *TRACE.lock().unwrap(),
            [
                "early_cpu_setup",
                "init_memory",
                "startup_extension",
                "constructors",
                "main",
                "destructors",
                "exit_extension",
            ]
        );
    }

    #[test]
    fn extension_hooks_link_under_c_names() {
        extern "C" {
            #[link_name = "startupExtension"]
            fn c_startup_extension();
            #[link_name = "exitExtension"]
            fn c_exit_extension();
        }
        // The defaults do nothing; resolving the C names is the point.
        unsafe {
            c_startup_extension();
            c_exit_extension();
        }
    }

    #[test]
    fn copy_data_section() {
        let flash = [0xdead_beef_u32, 1, 2, 3];
        let mut ram = [0u32; 6];
        unsafe {
            let dst = ram.as_mut_ptr();
            copy_words(flash.as_ptr(), dst, dst.add(flash.len()));
        }
        assert_eq!(ram, [0xdead_beef, 1, 2, 3, 0, 0]);
    }

    #[test]
    fn zero_bss_section() {
        let mut ram = [0xa5a5_a5a5_u32; 5];
        unsafe {
            let start = ram.as_mut_ptr().add(1);
            zero_words(start, start.add(3));
        }
        assert_eq!(ram, [0xa5a5_a5a5, 0, 0, 0, 0xa5a5_a5a5]);
    }

    #[test]
    fn empty_sections_are_untouched() {
        let flash = [1u32];
        let mut ram = [9u32; 2];
        unsafe {
            let dst = ram.as_mut_ptr();
            copy_words(flash.as_ptr(), dst, dst);
            zero_words(dst, dst);
        }
        assert_eq!(ram, [9, 9]);
    }

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn push_one() {
        let v = CALLS.load(Ordering::SeqCst);
        CALLS.store(v * 10 + 1, Ordering::SeqCst);
    }
    unsafe extern "C" fn push_two() {
        let v = CALLS.load(Ordering::SeqCst);
        CALLS.store(v * 10 + 2, Ordering::SeqCst);
    }
    unsafe extern "C" fn push_three() {
        let v = CALLS.load(Ordering::SeqCst);
        CALLS.store(v * 10 + 3, Ordering::SeqCst);
    }

    #[test]
    fn init_and_fini_arrays() {
        let array: [InitFn; 3] = [push_one, push_two, push_three];
        let range = array.as_ptr_range();

        CALLS.store(0, Ordering::SeqCst);
        unsafe { run_array(range.start, range.end) };
        assert_eq!(CALLS.load(Ordering::SeqCst), 123);

        CALLS.store(0, Ordering::SeqCst);
        unsafe { run_array_reverse(range.start, range.end) };
        assert_eq!(CALLS.load(Ordering::SeqCst), 321);

        CALLS.store(0, Ordering::SeqCst);
        unsafe {
            run_array(range.start, range.start);
            run_array_reverse(range.end, range.end);
        }
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }
}
