use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// sRGB channel to linear light, using the WCAG 2.x breakpoint (0.03928).
fn srgb_to_linear_wcag(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("srgb_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value, exact f64 (Debug output round-trips).
    writeln!(file, "/// Lookup table for 8-bit sRGB channel to linear light").unwrap();
    writeln!(file, "/// Index: channel value, Value: linearized channel in 0.0..=1.0").unwrap();
    writeln!(file, "pub static SRGB_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256u32 {
        let linear = srgb_to_linear_wcag(i as f64 / 255.0);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
