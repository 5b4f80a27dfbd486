use crate::arch::{
    fault::FaultStatus,
    park, reset_handler_inner,
    vector::{exception_vectors, CoreHandlers, ExceptionTable, StackTop},
    CORE_PROFILE,
};
use core::ptr::addr_of;
use cortex_m::asm;

extern "C" {
    static _estack: u32;
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn Reset_Handler() -> ! {
    asm::bootstrap(addr_of!(_estack), reset_handler_inner as *const u32)
}

#[link_section = ".text.vector_handlers"]
#[no_mangle]
pub unsafe extern "C" fn Default_Handler() {
    park()
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn NMI_Handler() {
    Default_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn HardFault_Handler() {
    log::error!("hard fault{}", FaultStatus::from_scb());
    Default_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn MemManage_Handler() {
    HardFault_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn BusFault_Handler() {
    HardFault_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn UsageFault_Handler() {
    HardFault_Handler();
}

// SVC, PendSV and SysTick follow the RTX5 naming so the RTOS can claim them.
#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn SVC_Handler() {
    Default_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn DebugMon_Handler() {
    Default_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn PendSV_Handler() {
    Default_Handler();
}

#[link_section = ".text.vector_handlers"]
#[linkage = "weak"]
#[no_mangle]
pub unsafe extern "C" fn SysTick_Handler() {
    Default_Handler();
}

#[doc(hidden)]
#[used]
#[link_section = ".vector_table.exceptions"]
#[no_mangle]
pub static __EXCEPTIONS: ExceptionTable = ExceptionTable {
    stack_top: StackTop::new(unsafe { addr_of!(_estack) }),
    reset: Reset_Handler,
    exceptions: exception_vectors(
        CORE_PROFILE,
        &CoreHandlers {
            nmi: NMI_Handler,
            hard_fault: HardFault_Handler,
            mem_manage: MemManage_Handler,
            bus_fault: BusFault_Handler,
            usage_fault: UsageFault_Handler,
            svcall: SVC_Handler,
            debug_monitor: DebugMon_Handler,
            pendsv: PendSV_Handler,
            systick: SysTick_Handler,
        },
    ),
};
