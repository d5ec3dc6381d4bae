extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{Color, Raster, Renderer, ViewParameters};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const SIZE: &str = "size";
const SHIFT: &str = "shift";
const ZOOM: &str = "zoom";
const ITERATIONS: &str = "iterations";

// Darkest to brightest.  Black, which includes the inside of the set,
// prints as a blank.
const DENSITY: &[u8] = b" .:-=+*#%@";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Prints a Mandelbrot preview to the terminal")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("80x40")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse preview size"))
                .help("Columns and rows of the preview"),
        )
        .arg(
            Arg::with_name(SHIFT)
                .required(false)
                .long(SHIFT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Point of the complex plane at the center of the preview"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        ::std::f64::MAX,
                        "Could not parse zoom",
                        "Zoom must be greater than zero",
                    )
                })
                .help("Magnification"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Maximum iterations per point"),
        )
        .get_matches()
}

fn density(color: &Color) -> char {
    let steps = (DENSITY.len() - 1) as u16;
    let index = (color.brightness() * steps + 764) / 765;
    DENSITY[index as usize] as char
}

fn main() {
    env_logger::init();
    let matches = args();

    // The validators have already vetted every value.
    let size = parse_pair::<u32>(matches.value_of(SIZE).unwrap_or_default(), 'x');
    let shift = parse_pair::<f64>(matches.value_of(SHIFT).unwrap_or_default(), ',');
    let zoom = matches.value_of(ZOOM).and_then(|s| f64::from_str(s).ok());
    let iterations = matches
        .value_of(ITERATIONS)
        .and_then(|s| u32::from_str(s).ok());

    let (size, shift, zoom, iterations) = match (size, shift, zoom, iterations) {
        (Some(size), Some(shift), Some(zoom), Some(iterations)) => (size, shift, zoom, iterations),
        _ => {
            eprintln!("Could not read the command line.");
            std::process::exit(1);
        }
    };

    let renderer = ViewParameters::new(shift.0, shift.1, zoom, iterations)
        .and_then(|view| Renderer::new(Raster(size.0, size.1), &view));
    let renderer = match renderer {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    info!("previewing {}x{} around {:?}", size.0, size.1, shift);
    let frame = renderer.render();
    let mut out = String::with_capacity((size.0 as usize + 1) * size.1 as usize);
    for (x, _, px) in frame.enumerate_pixels() {
        out.push(density(&Color::from(*px)));
        if x + 1 == size.0 {
            out.push('\n');
        }
    }
    print!("{}", out);
}
