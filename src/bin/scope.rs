extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;
extern crate orbitscope;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use num::Complex;
use std::str::FromStr;

use orbitscope::{Explorer, FractalKind, RasterSurface, RenderParams};

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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const FRACTAL: &str = "fractal";
const SEED: &str = "seed";
const TRACE: &str = "trace";
const POINTER: &str = "pointer";

fn args<'a>() -> ArgMatches<'a> {
    App::new("scope")
        .version("0.1.0")
        .about("Renders one frame of the escape-orbit explorer to a PPM file")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (binary PPM)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse frame size"))
                .help("Frame size in pixels, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .required(false)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrot")
                .possible_values(&["mandelbrot", "julia"])
                .help("Which arrangement of the quadratic map to iterate"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("z")
                .takes_value(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse seed point"))
                .help("Seed point, RE,IM"),
        )
        .arg(
            Arg::with_name(TRACE)
                .required(false)
                .long(TRACE)
                .short("i")
                .takes_value(true)
                .default_value("10")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse trace length",
                        "Trace length must be between 1 and 1000000",
                    )
                })
                .help("Iteration bound for the pointer trajectory"),
        )
        .arg(
            Arg::with_name(POINTER)
                .required(false)
                .long(POINTER)
                .short("p")
                .takes_value(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse pointer position"))
                .help("Pointer position in screen pixels, X,Y; draws the trajectory overlay"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let size = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .ok_or_else(|| err_msg("Error parsing frame size"))?;
    let kind = FractalKind::from_str(matches.value_of(FRACTAL).unwrap()).map_err(err_msg)?;
    let seed = parse_complex(matches.value_of(SEED).unwrap())
        .ok_or_else(|| err_msg("Error parsing seed point"))?;
    let trace_limit = usize::from_str(matches.value_of(TRACE).unwrap())?;

    let params = RenderParams {
        kind,
        seed,
        trace_limit,
    };
    let session = Explorer::new(size.0, size.1, params).map_err(err_msg)?;

    let frame = match matches.value_of(POINTER) {
        Some(raw) => {
            let (px, py) = parse_pair::<f64>(raw, ',')
                .ok_or_else(|| err_msg("Error parsing pointer position"))?;
            session.pointer(px, py)
        }
        None => session.frame(),
    };

    let outfile = matches.value_of(OUTPUT).unwrap();
    let mut surface = RasterSurface::new(size.0, size.1);
    frame.paint(&mut surface);
    surface.write_pnm(outfile)?;
    info!("wrote {}x{} frame to {}", size.0, size.1, outfile);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(&args()) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
