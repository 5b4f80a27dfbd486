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

//! Routing of the GPIO external interrupt lines (EXTI0..EXTI15) to NVIC
//! interrupts, and software dispatch of the lines that share one.
//!
//! Most families give only a few lines a vector of their own and fold the
//! rest into groups (EXTI9_5, EXTI15_10, EXTI4_15, ...). The group's handler
//! snapshots the pending register once and calls the per-line handler of
//! each pending line in ascending order. Pending bits are left set: clearing
//! them is the per-line handler's job.

use crate::arch::IrqNumber;
use core::ops::RangeInclusive;

/// Number of GPIO-backed EXTI lines.
pub const EXTI_LINES: usize = 16;

pub type LineHandler = unsafe extern "C" fn();

/// One NVIC interrupt and the EXTI lines it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtiRoute {
    pub irq: IrqNumber,
    pub first: u8,
    pub last: u8,
}

impl ExtiRoute {
    pub const fn new(irq: IrqNumber, first: u8, last: u8) -> Self {
        assert!(first <= last && (last as usize) < EXTI_LINES);
        Self { irq, first, last }
    }

    /// A line with a vector of its own.
    pub const fn single(irq: IrqNumber, line: u8) -> Self {
        Self::new(irq, line, line)
    }

    /// Whether more than one line is folded into the interrupt.
    #[inline]
    pub const fn is_shared(&self) -> bool {
        self.first != self.last
    }

    #[inline]
    pub const fn contains(&self, line: u32) -> bool {
        line >= self.first as u32 && line <= self.last as u32
    }

    /// Pending-register bits owned by the route.
    #[inline]
    pub const fn mask(&self) -> u32 {
        let width = (self.last - self.first + 1) as u32;
        ((1u32 << width) - 1) << self.first
    }

    #[inline]
    pub fn lines(&self) -> RangeInclusive<u8> {
        self.first..=self.last
    }
}

/// Lines past bit 31 are never pending.
#[inline]
pub const fn is_pending(flags: u32, line: u8) -> bool {
    line < u32::BITS as u8 && flags & (1 << line) != 0
}

/// Lines of `route` set in `flags`, lowest first.
pub fn pending_lines(flags: u32, route: &ExtiRoute) -> impl Iterator<Item = u8> {
    let flags = flags & route.mask();
    route.lines().filter(move |&line| is_pending(flags, line))
}

/// Calls the handler of every line of `route` pending in `flags`.
///
/// # Safety
///
/// Every handler must be safe to call from the context of `route.irq`.
pub unsafe fn dispatch(flags: u32, route: &ExtiRoute, handlers: &[LineHandler; EXTI_LINES]) {
    for line in pending_lines(flags, route) {
        log::trace!("EXTI{} pending on IRQ {}", line, route.irq.number());
        handlers[line as usize]();
    }
}

pub fn route_for_line(routes: &[ExtiRoute], line: u32) -> Option<&ExtiRoute> {
    routes.iter().find(|route| route.contains(line))
}

/// NVIC interrupt serving EXTI line `line`, if the line exists.
pub fn line_irqn(routes: &[ExtiRoute], line: u32) -> Option<IrqNumber> {
    route_for_line(routes, line).map(|route| route.irq)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Checks that `routes` serve lines 0..=15 once each.
    pub(crate) fn assert_covers_all_lines(routes: &[ExtiRoute]) {
        let mut seen = 0u32;
        for route in routes {
            assert_eq!(seen & route.mask(), 0, "overlapping route {:?}", route);
            seen |= route.mask();
        }
        assert_eq!(seen, 0xFFFF);
    }

    static CALLED: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    // Held while a recording runs; tests of every module share CALLED.
    static RECORDING: Mutex<()> = Mutex::new(());

    macro_rules! recorders {
        ($($name:ident = $line:literal),* $(,)?) => {
            $(
                unsafe extern "C" fn $name() {
                    CALLED.lock().unwrap().push($line);
                }
            )*
        };
    }

    recorders!(
        l0 = 0, l1 = 1, l2 = 2, l3 = 3, l4 = 4, l5 = 5, l6 = 6, l7 = 7,
        l8 = 8, l9 = 9, l10 = 10, l11 = 11, l12 = 12, l13 = 13, l14 = 14, l15 = 15,
    );

    const RECORDERS: [LineHandler; EXTI_LINES] = [
        l0, l1, l2, l3, l4, l5, l6, l7, l8, l9, l10, l11, l12, l13, l14, l15,
    ];

    /// Runs `run` with per-line handlers that record their line, and returns
    /// the lines in call order.
    pub(crate) fn recorded(run: impl FnOnce(&[LineHandler; EXTI_LINES])) -> Vec<u8> {
        let _guard = RECORDING.lock().unwrap_or_else(|e| e.into_inner());
        CALLED.lock().unwrap().clear();
        run(&RECORDERS);
        let calls = CALLED.lock().unwrap().clone();
        calls
    }

    fn dispatched(flags: u32, route: &ExtiRoute) -> Vec<u8> {
        recorded(|handlers| unsafe { dispatch(flags, route, handlers) })
    }

    #[test]
    fn route_mask() {
        let route = ExtiRoute::new(IrqNumber::new(23), 5, 9);
        assert_eq!(route.mask(), 0b11_1110_0000);
        assert!(route.is_shared());
        assert!(route.contains(5) && route.contains(9));
        assert!(!route.contains(4) && !route.contains(10));

        let route = ExtiRoute::single(IrqNumber::new(6), 0);
        assert_eq!(route.mask(), 1);
        assert!(!route.is_shared());

        let route = ExtiRoute::new(IrqNumber::new(7), 4, 15);
        assert_eq!(route.mask(), 0xFFF0);
    }

    #[test]
    fn pending_helper() {
        assert!(is_pending(0b100, 2));
        assert!(!is_pending(0b100, 1));
        assert!(is_pending(1 << 15, 15));
        assert!(is_pending(1 << 31, 31));
        assert!(!is_pending(u32::MAX, 32));
        assert!(!is_pending(u32::MAX, u8::MAX));
    }

    #[test]
    fn dispatch_group() {
        let route = ExtiRoute::new(IrqNumber::new(40), 10, 15);

        assert_eq!(dispatched(0, &route), Vec::<u8>::new());
        assert_eq!(dispatched(1 << 12, &route), vec![12]);
        assert_eq!(
            dispatched((1 << 15) | (1 << 10) | (1 << 13), &route),
            vec![10, 13, 15]
        );
        // Lines of other routes are ignored.
        assert_eq!(dispatched((1 << 9) | (1 << 16) | (1 << 11), &route), vec![11]);
        assert_eq!(
            dispatched(u32::MAX, &route),
            vec![10, 11, 12, 13, 14, 15]
        );

        let route = ExtiRoute::new(IrqNumber::new(5), 0, 1);
        assert_eq!(dispatched(0b11, &route), vec![0, 1]);
        assert_eq!(dispatched(0b110, &route), vec![1]);
    }

    #[test]
    fn pending_lines_are_ascending() {
        let route = ExtiRoute::new(IrqNumber::new(7), 4, 15);
        let lines: Vec<u8> = pending_lines(0b1001_0000_0011_0000, &route).collect();
        assert_eq!(lines, vec![4, 5, 12, 15]);
    }

    #[test]
    fn lookup() {
        let routes = [
            ExtiRoute::new(IrqNumber::new(5), 0, 1),
            ExtiRoute::new(IrqNumber::new(6), 2, 3),
            ExtiRoute::new(IrqNumber::new(7), 4, 15),
        ];
        assert_covers_all_lines(&routes);
        assert_eq!(line_irqn(&routes, 0), Some(IrqNumber::new(5)));
        assert_eq!(line_irqn(&routes, 3), Some(IrqNumber::new(6)));
        assert_eq!(line_irqn(&routes, 15), Some(IrqNumber::new(7)));
        assert_eq!(line_irqn(&routes, 16), None);
        assert_eq!(line_irqn(&routes, u32::MAX), None);
        assert_eq!(route_for_line(&routes, 9), Some(&routes[2]));
    }
}
