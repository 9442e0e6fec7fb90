//! Command-line NDVI analysis for local band files.

use std::env;
use std::fs;
use std::process;

use greenband::{classify, compute_ndvi, read_band, render_ndvi_png, Result};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: greenband <red-band-file> <nir-band-file> [output.png]");
        process::exit(2);
    }

    let red_bytes = fs::read(&args[1])?;
    let nir_bytes = fs::read(&args[2])?;

    let red = read_band(&red_bytes, &args[1])?;
    let nir = read_band(&nir_bytes, &args[2])?;
    println!("Loaded bands: RED {}, NIR {}", red.dimensions(), nir.dimensions());

    let ndvi = compute_ndvi(&red, &nir)?;
    let stats = classify(&ndvi)?;

    println!("\nNDVI summary ({} valid pixels):", stats.total_valid_pixels);
    println!("  healthy:  {:>6.2}%", stats.healthy_vegetation_percent);
    println!("  moderate: {:>6.2}%", stats.moderate_vegetation_percent);
    println!("  stressed: {:>6.2}%", stats.stressed_vegetation_percent);
    println!("  bare:     {:>6.2}%", stats.bare_land_percent);
    println!("  mean {} / std {}", stats.mean_ndvi, stats.std_ndvi);
    println!("  range [{}, {}]", stats.min_ndvi, stats.max_ndvi);

    if let Some(output) = args.get(3) {
        fs::write(output, render_ndvi_png(&ndvi)?)?;
        println!("\nWrote visualization to {}", output);
    }

    Ok(())
}
