extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate julia_set;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use env_logger::{Builder, Env};
use failure::Error;
use julia_set::{tga, JuliaRenderer};
use num::Complex;
use std::str::FromStr;
use std::time::Instant;

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

fn validate_positive(
    s: &str,
    isnotanumber_err: &str,
    isnotpositive_err: &str,
) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(x) => {
            if x.is_finite() && x > 0.0 {
                Ok(())
            } else {
                Err(isnotpositive_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const SCALE: &str = "scale";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const CONSTANT: &str = "constant";
const ITERATIONS: &str = "iterations";
const THRESHOLD: &str = "threshold";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("julia_set.tga")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(SCALE)
                .required(false)
                .long(SCALE)
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        64,
                        "Could not parse scale factor",
                        "Scale factor must be between 1 and 64",
                    )
                })
                .help("Multiplier applied to both output dimensions"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.5,-1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the rendered region"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.5,1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the rendered region"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.8,0.156")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the constant"))
                .help("The constant c of the iterator z*z + c"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Number of iterations before a point is declared a member"),
        )
        .arg(
            Arg::with_name(THRESHOLD)
                .required(false)
                .long(THRESHOLD)
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse divergence threshold",
                        "Divergence threshold must be a positive number",
                    )
                })
                .help("Squared-magnitude threshold past which a point has escaped"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with [default: all cores]"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let scale =
        usize::from_str(matches.value_of(SCALE).unwrap()).expect("Error parsing scale factor");
    let (width, height) = (size.0 * scale, size.1 * scale);
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let constant =
        parse_complex(matches.value_of(CONSTANT).unwrap()).expect("Error parsing the constant");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Error parsing iteration count");
    let threshold = f64::from_str(matches.value_of(THRESHOLD).unwrap())
        .expect("Error parsing divergence threshold");
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s).expect("Error parsing thread count"),
        None => num_cpus::get(),
    };
    let outfile = matches.value_of(OUTPUT).unwrap();

    ensure!(
        width <= tga::MAX_DIMENSION && height <= tga::MAX_DIMENSION,
        "a {}x{} render does not fit in a TGA header; dimensions stop at {}",
        width,
        height,
        tga::MAX_DIMENSION
    );

    let renderer = JuliaRenderer::new(
        width, height, leftlower, rightupper, constant, iterations, threshold,
    )?;

    info!(
        "plotting the julia set of z(k+1) = z(k)^2 + c, c = {}",
        constant
    );
    info!(
        "{}x{} pixels on ({}, {})..({}, {}), {} iterations, {} threads",
        width, height, leftlower.re, leftlower.im, rightupper.re, rightupper.im, iterations, threads
    );

    let start = Instant::now();
    let pixels = renderer.render(threads);
    let elapsed = start.elapsed();
    info!(
        "rendered in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    tga::write_file(outfile, width, height, &pixels)?;
    info!("graphics data saved as '{}'", outfile);
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("julia: {}", e);
        std::process::exit(1);
    }
}
