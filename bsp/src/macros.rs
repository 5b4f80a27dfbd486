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

/// Weak default handlers. Each logs its own name and parks the core until an
/// application supplies a strong symbol of the same name.
macro_rules! default_irq_handlers {
    ($($handler_name:ident),* $(,)?) => {
        $(
            #[cfg_attr(cortex_m, link_section = ".text.vector_handlers")]
            #[cfg_attr(cortex_m, linkage = "weak")]
            #[cfg_attr(cortex_m, no_mangle)]
            pub unsafe extern "C" fn $handler_name() {
                $crate::unhandled(stringify!($handler_name))
            }
        )*
    };
}

/// Strong handlers of the EXTI groups, each bound to the route it serves.
///
/// Also emits `DISPATCHERS`, the same handler/route pairs as data, so the
/// binding can be checked against the vector table.
macro_rules! exti_dispatchers {
    ($($handler_name:ident => $route:expr),* $(,)?) => {
        $(
            #[cfg_attr(cortex_m, link_section = ".text.vector_handlers")]
            #[cfg_attr(cortex_m, no_mangle)]
            pub unsafe extern "C" fn $handler_name() {
                dispatch_from(&EXTI_BASE, &$route, &LINE_HANDLERS)
            }
        )*

        pub const DISPATCHERS: &[(LineHandler, ExtiRoute)] = &[$(($handler_name, $route)),*];
    };
}
