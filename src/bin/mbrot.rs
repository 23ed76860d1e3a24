extern crate clap;
extern crate env_logger;
extern crate mandelbrot;
extern crate num_cpus;
#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use mandelbrot::params::safe_pair;
use mandelbrot::{generate_threaded, save_png, Palette, RenderRequest, VIEW_HEIGHT, VIEW_WIDTH};
use std::str::FromStr;

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
const MX: &str = "mx";
const MY: &str = "my";
const RADIUS: &str = "radius";
const QUERY: &str = "query";
const THREADS: &str = "threads";
const SEED: &str = "seed";

const MAX_SIDE: i64 = 16_384;

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mbrot")
        .version("0.1.0")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .help("Size of output image, WxH (default 640x480)"),
        )
        .arg(
            Arg::with_name(MX)
                .long(MX)
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Real part of the view center (default 0.0)"),
        )
        .arg(
            Arg::with_name(MY)
                .long(MY)
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Imaginary part of the view center (default 0.0)"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Half the width of the view (default 2.0)"),
        )
        .arg(
            Arg::with_name(QUERY)
                .long(QUERY)
                .short("q")
                .takes_value(true)
                .conflicts_with_all(&[MX, MY, RADIUS])
                .help("Request parameters as a query string, e.g. mx=-0.75&my=0.1&radius=0.5"),
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
                .help("Number of threads to render with (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(SEED)
                .long(SEED)
                .takes_value(true)
                .validator(|s| {
                    u64::from_str(&s)
                        .map(|_| ())
                        .map_err(|_| "Could not parse palette seed".to_string())
                })
                .help("Seed for the colour palette (default: random)"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    // Bad request parameters never abort a render; they fall back to
    // their defaults.
    let request = match matches.value_of(QUERY) {
        Some(query) => RenderRequest::from_query(query),
        None => RenderRequest::from_values(
            matches.value_of(MX),
            matches.value_of(MY),
            matches.value_of(RADIUS),
        ),
    };
    let (width, height) = match matches.value_of(SIZE) {
        Some(size) => safe_pair(
            size,
            'x',
            1,
            MAX_SIDE,
            (i64::from(VIEW_WIDTH), i64::from(VIEW_HEIGHT)),
        ),
        None => (i64::from(VIEW_WIDTH), i64::from(VIEW_HEIGHT)),
    };
    let (width, height) = (width as u32, height as u32);

    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or_else(num_cpus::get);

    let palette = match matches.value_of(SEED).and_then(|s| u64::from_str(s).ok()) {
        Some(seed) => Palette::seeded(seed),
        None => Palette::random(),
    };

    let viewport = match request.viewport() {
        Ok(viewport) => viewport,
        Err(e) => {
            eprintln!("Bad viewport: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "rendering {}x{} around {} with radius {}",
        width, height, viewport.center, viewport.radius
    );

    let image = match generate_threaded(
        &palette,
        width,
        height,
        viewport.center,
        viewport.radius,
        threads,
    ) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.png");
    if let Err(e) = save_png(&image, output) {
        error!("save_png: {}", e);
        eprintln!("Could not write {}: {}", output, e);
        std::process::exit(1);
    }
    info!("wrote {}", output);
}
