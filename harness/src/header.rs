//! C header serialization of test vectors
//!
//! Each header declares the input signal and the expected real and imaginary outputs as
//! `static const float` arrays, followed by the `fft_test(...)` call that the on-device test
//! runner expands when it `#include`s the file.
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `fft-test-{name}.h` inside `dir`.
pub fn header_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("fft-test-{name}.h"))
}

/// `static const float {name}[{len}] = {v0, v1, ...};` followed by a newline.
pub fn c_decl(name: &str, data: &[f32]) -> String {
    let values: Vec<String> = data.iter().map(|v| format!("{v:?}")).collect();
    format!(
        "static const float {name}[{}] = {{{}}};\n",
        data.len(),
        values.join(", ")
    )
}

/// Writes the full header for one test case.
///
/// # Panics
///
/// Panics if `input`, `real` and `imag` differ in length.
pub fn write_test_header<W: Write>(
    out: &mut W,
    name: &str,
    input: &[f32],
    real: &[f32],
    imag: &[f32],
) -> io::Result<()> {
    assert!(input.len() == real.len() && real.len() == imag.len());

    writeln!(out, "/* AUTOGENERATED FILE -- DO NOT EDIT */")?;
    out.write_all(c_decl(&format!("{name}_input"), input).as_bytes())?;
    out.write_all(c_decl(&format!("{name}_real"), real).as_bytes())?;
    out.write_all(c_decl(&format!("{name}_imag"), imag).as_bytes())?;
    writeln!(
        out,
        "fft_test(\"{name}\", {}, {name}_input, {name}_real, {name}_imag);",
        input.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_format() {
        assert_eq!(
            c_decl("x", &[1.0, -0.5, 4096.0]),
            "static const float x[3] = {1.0, -0.5, 4096.0};\n"
        );
    }

    #[test]
    fn full_header() {
        let mut out = Vec::new();
        write_test_header(&mut out, "dc", &[1.0, 1.0], &[2.0, 0.0], &[0.0, 0.0]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "/* AUTOGENERATED FILE -- DO NOT EDIT */\n\
             static const float dc_input[2] = {1.0, 1.0};\n\
             static const float dc_real[2] = {2.0, 0.0};\n\
             static const float dc_imag[2] = {0.0, 0.0};\n\
             fft_test(\"dc\", 2, dc_input, dc_real, dc_imag);\n"
        );
    }

    #[test]
    fn path_follows_naming_scheme() {
        assert_eq!(
            header_path(Path::new("out"), "noise"),
            PathBuf::from("out/fft-test-noise.h")
        );
    }
}
