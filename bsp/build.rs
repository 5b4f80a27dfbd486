use std::env;

const FAMILIES: [&str; 3] = ["stm32f4xx", "stm32g0xx", "stm32wlxx"];

fn main() {
    let target = env::var("TARGET").unwrap_or_default();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(cortex_m)");
    println!("cargo:rustc-check-cfg=cfg(has_family)");

    if target.starts_with("thumbv") {
        println!("cargo:rustc-cfg=cortex_m");
    }

    let selected: Vec<&str> = FAMILIES
        .iter()
        .copied()
        .filter(|family| env::var(format!("CARGO_FEATURE_{}", family.to_uppercase())).is_ok())
        .collect();
    if !selected.is_empty() {
        println!("cargo:rustc-cfg=has_family");
    }
    if selected.len() > 1 {
        println!(
            "cargo:warning=several MCU families selected: {}",
            selected.join(", ")
        );
    }
}
