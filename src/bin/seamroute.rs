use seamroute::{
    find_minimum_seam, grid_from_image, highlight_seam, read_pixels, read_seam, save_pixels,
    save_seam, PixelGrid, SeamError,
};
use std::process;

extern crate clap;
extern crate image;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

// The image decoder distinguishes "couldn't open it" from "opened it
// but it isn't an image we understand"; so do we.
fn open_image(path: &str) -> Result<image::DynamicImage, SeamError> {
    image::open(path).map_err(|cause| match cause {
        image::ImageError::IoError(cause) => SeamError::InputNotFound {
            path: path.to_string(),
            cause,
        },
        cause => SeamError::DecodeFailed {
            path: path.to_string(),
            cause,
        },
    })
}

fn extract_grid(image_path: &str) -> Result<PixelGrid, SeamError> {
    let image = open_image(image_path)?;
    grid_from_image(&image).ok_or_else(|| SeamError::DecodeFailed {
        path: image_path.to_string(),
        cause: image::ImageError::DimensionError,
    })
}

fn extract(matches: &ArgMatches) -> Result<(), SeamError> {
    let image_path = matches.value_of("image").unwrap();
    let output = matches.value_of("output").unwrap();

    let grid = extract_grid(image_path)?;
    save_pixels(&grid, output)?;
    println!(
        "Extracted {}x{} pixel matrix from {} to {}.",
        grid.rows(),
        grid.cols(),
        image_path,
        output
    );
    Ok(())
}

fn find_seam_in_grid(grid: &PixelGrid, output: &str) -> Result<Vec<u32>, SeamError> {
    println!(
        "Read pixels from file successfully. Image dimensions: {}x{}",
        grid.rows(),
        grid.cols()
    );

    let seam = find_minimum_seam(grid)?;
    print!("Calculated minimum weighted seam:");
    for column in &seam {
        print!(" {}", column);
    }
    println!();

    save_seam(&seam, output)?;
    println!("Seam saved to {} successfully.", output);
    Ok(seam)
}

fn find(matches: &ArgMatches) -> Result<(), SeamError> {
    let pixels = matches.value_of("pixels").unwrap();
    let output = matches.value_of("output").unwrap();

    let grid = read_pixels(pixels)?;
    find_seam_in_grid(&grid, output).map(|_| ())
}

fn paint(image_path: &str, seam: &[u32], output: &str) -> Result<(), SeamError> {
    let image = open_image(image_path)?;
    let painted = highlight_seam(&image, seam);
    painted
        .save(output)
        .map_err(|cause| SeamError::OutputFailed {
            path: output.to_string(),
            cause,
        })?;
    println!("Seam highlighted and output saved to {}", output);
    Ok(())
}

fn highlight(matches: &ArgMatches) -> Result<(), SeamError> {
    let image_path = matches.value_of("image").unwrap();
    let seam_path = matches.value_of("seam").unwrap();
    let output = matches.value_of("output").unwrap();

    let seam = read_seam(seam_path)?;
    paint(image_path, &seam, output)
}

// The whole historical pipeline in one shot: extract, find,
// highlight, with the intermediate text files left behind for
// whoever wants them.
fn run(matches: &ArgMatches) -> Result<(), SeamError> {
    let image_path = matches.value_of("image").unwrap();
    let pixels = matches.value_of("pixels").unwrap();
    let seam_path = matches.value_of("seam").unwrap();
    let output = matches.value_of("output").unwrap();

    let grid = extract_grid(image_path)?;
    save_pixels(&grid, pixels)?;
    let seam = find_seam_in_grid(&grid, seam_path)?;
    paint(image_path, &seam, output)
}

fn main() {
    let matches = App::new("seamroute")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Graph-based seam finding for content-aware image resizing")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("extract")
                .about("Decode an image and write its grayscale pixel matrix")
                .arg(
                    Arg::with_name("image")
                        .help("The image to decode")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("output")
                        .help("Where to write the pixel matrix")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .default_value("pixels.txt"),
                ),
        )
        .subcommand(
            SubCommand::with_name("find")
                .about("Find the minimum-energy vertical seam in a pixel matrix")
                .arg(
                    Arg::with_name("pixels")
                        .help("The pixel-matrix file to search")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("output")
                        .help("Where to write the seam")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .default_value("seam.txt"),
                ),
        )
        .subcommand(
            SubCommand::with_name("highlight")
                .about("Paint a previously computed seam onto the original image")
                .arg(
                    Arg::with_name("image")
                        .help("The original image")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("seam")
                        .help("The seam file to paint")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::with_name("output")
                        .help("Where to write the highlighted image")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .default_value("output.png"),
                ),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("Extract, find, and highlight in one invocation")
                .arg(
                    Arg::with_name("image")
                        .help("The image to run the pipeline on")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("pixels")
                        .help("Where to write the intermediate pixel matrix")
                        .long("pixels")
                        .takes_value(true)
                        .default_value("pixels.txt"),
                )
                .arg(
                    Arg::with_name("seam")
                        .help("Where to write the intermediate seam")
                        .long("seam")
                        .takes_value(true)
                        .default_value("seam.txt"),
                )
                .arg(
                    Arg::with_name("output")
                        .help("Where to write the highlighted image")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .default_value("output.png"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("extract", Some(sub)) => extract(sub),
        ("find", Some(sub)) => find(sub),
        ("highlight", Some(sub)) => highlight(sub),
        ("run", Some(sub)) => run(sub),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
