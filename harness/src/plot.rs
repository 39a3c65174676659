//! Magnitude plots as a `.vz` command stream
//!
//! Each line is one command for a line-oriented terminal chart viewer: `cn`, `sn`, `xn` and `yn`
//! name the chart, series and axes; `xs` sets the x coordinates and must precede the matching
//! `ys`, which triggers a redraw.
use std::io::{self, Write};

use num_complex::Complex64;

/// Magnitude of every bin.
pub fn magnitudes(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|z| z.norm()).collect()
}

fn write_list<W, I>(out: &mut W, cmd: &str, values: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = f64>,
{
    let values: Vec<String> = values.map(|v| v.to_string()).collect();
    writeln!(out, ".vz {cmd} [{}]", values.join(", "))
}

/// Writes one chart holding every `(series name, ys)` pair, plotted against the bin index.
pub fn write_chart<W: Write>(
    out: &mut W,
    chart_name: &str,
    series: &[(&str, &[f64])],
) -> io::Result<()> {
    writeln!(out, ".vz cn {chart_name}")?;
    writeln!(out, ".vz xn bin")?;
    writeln!(out, ".vz yn magnitude")?;

    for (name, ys) in series {
        writeln!(out, ".vz sn {name}")?;
        write_list(out, "xs", (0..ys.len()).map(|x| x as f64))?;
        write_list(out, "ys", ys.iter().copied())?;
    }
    Ok(())
}
