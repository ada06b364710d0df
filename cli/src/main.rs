mod commands;
mod error;
mod hit;
mod path;
mod vertices;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use commands::*;
use error::CliError;
use polyshape::math::point;
use polyshape::path::{FillRule, RegularPolygon};

use std::fs::File;
use std::io::{stdout, Write};
use std::str::FromStr;

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    let result = open_output(&matches).and_then(|output| run(&matches, output));
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("Polyshape command-line interface")
        .version("0.1")
        .about("Regular polygon outlines and vertices")
        .subcommand(
            polygon_args(SubCommand::with_name("path"))
                .about("Prints the SVG path data of a regular polygon")
                .arg(
                    Arg::with_name("DOCUMENT")
                        .short("d")
                        .long("document")
                        .help("Wraps the path in a standalone SVG document"),
                ),
        )
        .subcommand(
            SubCommand::with_name("vertices")
                .about("Prints the vertices of a regular polygon, pulled in by corner rounding")
                .arg(sides_arg())
                .arg(number_arg("RADIUS", "radius", "Distance from the center to the vertices").required(true))
                .arg(number_arg("CORNER", "corner", "Corner radius (0 by default)"))
                .arg(
                    Arg::with_name("EXACT")
                        .long("exact")
                        .help("Does not truncate the effective radius to an integer"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            SubCommand::with_name("radar")
                .about("Prints the vertices of a radar shape")
                .arg(sides_arg())
                .arg(number_arg("MAX_RADIUS", "max-radius", "Radius of a value of 1.0").required(true))
                .arg(
                    Arg::with_name("VALUES")
                        .value_name("VALUES")
                        .help("One value per side, relative to the maximum radius (comma separated)")
                        .multiple(true)
                        .use_delimiter(true)
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(json_arg()),
        )
        .subcommand(
            polygon_args(SubCommand::with_name("hit"))
                .about("Tests whether a point is inside a regular polygon")
                .arg(number_arg("X", "x", "Horizontal position of the point").required(true))
                .arg(number_arg("Y", "y", "Vertical position of the point").required(true))
                .arg(number_arg(
                    "TOLERANCE",
                    "tolerance",
                    "Sets the tolerance threshold for flattening (0.1 by default)",
                ))
                .arg(
                    Arg::with_name("NON_ZERO")
                        .long("non-zero")
                        .help("Uses the non-zero fill rule instead of even-odd"),
                ),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
        .setting(AppSettings::SubcommandRequiredElseHelp)
}

fn polygon_args(cmd: App<'static, 'static>) -> App<'static, 'static> {
    cmd.arg(sides_arg())
        .arg(number_arg("RADIUS", "radius", "Distance from the center to the vertices").required(true))
        .arg(number_arg("CORNER", "corner", "Corner radius (0 by default)"))
        .arg(number_arg("CX", "cx", "Horizontal position of the center (0 by default)"))
        .arg(number_arg("CY", "cy", "Vertical position of the center (0 by default)"))
}

fn sides_arg() -> Arg<'static, 'static> {
    Arg::with_name("SIDES")
        .short("n")
        .long("sides")
        .help("Number of sides")
        .value_name("SIDES")
        .takes_value(true)
        .required(true)
}

fn number_arg(name: &'static str, long: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(long)
        .help(help)
        .value_name(name)
        .takes_value(true)
        .allow_hyphen_values(true)
}

fn json_arg() -> Arg<'static, 'static> {
    Arg::with_name("JSON").long("json").help("Prints the vertices as JSON")
}

fn open_output(matches: &ArgMatches) -> Result<Box<dyn Write>, CliError> {
    match matches.value_of("OUTPUT") {
        Some(output_file) => {
            log::info!("Writing to {}", output_file);
            Ok(Box::new(File::create(output_file)?))
        }
        None => Ok(Box::new(stdout())),
    }
}

fn run(matches: &ArgMatches, output: Box<dyn Write>) -> Result<(), CliError> {
    match matches.subcommand() {
        ("path", Some(path_matches)) => path::path(PathCmd {
            polygon: get_polygon(path_matches)?,
            output,
            document: path_matches.is_present("DOCUMENT"),
        }),
        ("vertices", Some(vertices_matches)) => vertices::vertices(VerticesCmd {
            side_count: get_arg(vertices_matches, "SIDES", "sides")?,
            radius: get_arg(vertices_matches, "RADIUS", "radius")?,
            corner_radius: get_arg_or(vertices_matches, "CORNER", "corner", 0.0)?,
            output,
            exact: vertices_matches.is_present("EXACT"),
            json: vertices_matches.is_present("JSON"),
        }),
        ("radar", Some(radar_matches)) => vertices::radar(RadarCmd {
            dim_percentages: get_values(radar_matches)?,
            radius_max: get_arg(radar_matches, "MAX_RADIUS", "max-radius")?,
            side_count: get_arg(radar_matches, "SIDES", "sides")?,
            output,
            json: radar_matches.is_present("JSON"),
        }),
        ("hit", Some(hit_matches)) => hit::hit(HitCmd {
            polygon: get_polygon(hit_matches)?,
            point: point(
                get_arg(hit_matches, "X", "x")?,
                get_arg(hit_matches, "Y", "y")?,
            ),
            fill_rule: if hit_matches.is_present("NON_ZERO") {
                FillRule::NonZero
            } else {
                FillRule::EvenOdd
            },
            tolerance: get_arg_or(hit_matches, "TOLERANCE", "tolerance", 0.1)?,
            output,
        }),
        (name, _) => Err(CliError::Argument {
            name: "subcommand",
            value: name.to_string(),
        }),
    }
}

// Fields are checked by the commands themselves so that the error names the
// faulty value.
fn get_polygon(matches: &ArgMatches) -> Result<RegularPolygon, CliError> {
    Ok(RegularPolygon {
        side_count: get_arg(matches, "SIDES", "sides")?,
        center: point(
            get_arg_or(matches, "CX", "cx", 0.0)?,
            get_arg_or(matches, "CY", "cy", 0.0)?,
        ),
        outer_radius: get_arg(matches, "RADIUS", "radius")?,
        corner_radius: get_arg_or(matches, "CORNER", "corner", 0.0)?,
    })
}

fn get_arg<T: FromStr>(matches: &ArgMatches, name: &str, long: &'static str) -> Result<T, CliError> {
    let value = matches.value_of(name).unwrap_or("");
    parse(long, value)
}

fn get_arg_or<T: FromStr>(
    matches: &ArgMatches,
    name: &str,
    long: &'static str,
    default: T,
) -> Result<T, CliError> {
    match matches.value_of(name) {
        Some(value) => parse(long, value),
        None => Ok(default),
    }
}

fn get_values(matches: &ArgMatches) -> Result<Vec<f32>, CliError> {
    match matches.values_of("VALUES") {
        Some(values) => values.map(|value| parse("VALUES", value.trim())).collect(),
        None => Ok(Vec::new()),
    }
}

fn parse<T: FromStr>(long: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::Argument {
        name: long,
        value: value.to_string(),
    })
}
