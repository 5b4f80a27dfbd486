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

//! HAL-style parameter checks. With `full_assert`, a failed check reports its
//! location through [`assert_failed`]; otherwise `assert_param!` compiles to
//! nothing and its argument is never evaluated.

use core::ffi::{c_char, CStr};

/// Readable form of the C file name handed to [`assert_failed`].
///
/// # Safety
///
/// `file` must be null or point to a NUL-terminated string that outlives
/// `'a`.
pub unsafe fn source_file<'a>(file: *const c_char) -> &'a str {
    if file.is_null() {
        return "<unknown>";
    }
    CStr::from_ptr(file).to_str().unwrap_or("<non-utf8>")
}

/// Called by `assert_param` when a HAL argument check fails.
///
/// # Safety
///
/// `file` must be null or point to a NUL-terminated string.
#[cfg(feature = "full_assert")]
#[cfg_attr(cortex_m, linkage = "weak")]
#[cfg_attr(cortex_m, no_mangle)]
pub unsafe extern "C" fn assert_failed(file: *const c_char, line: u32) {
    log::error!("assertion failed at {}:{}", source_file(file), line);
    crate::arch::park()
}

/// Checks a HAL-style parameter condition, reporting the caller's location
/// through [`assert_failed`].
#[cfg(feature = "full_assert")]
#[macro_export]
macro_rules! assert_param {
    ($cond:expr) => {
        if !$cond {
            unsafe {
                $crate::assert::assert_failed(
                    concat!(file!(), "\0").as_ptr().cast(),
                    line!(),
                )
            }
        }
    };
}

/// Parameter checks are compiled out without `full_assert`.
#[cfg(not(feature = "full_assert"))]
#[macro_export]
macro_rules! assert_param {
    ($cond:expr) => {};
}
