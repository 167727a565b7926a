/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use shp2geojson::{convert, error_message, ConversionError, DecodeOptions, FileByteSource};
use shp2geojson_common::configs::get_configs;
use shp2geojson_common::utils::get_formatted_elapsed_time;
use std::env;
use std::fs;
use std::process;
use std::time::Instant;
use thiserror::Error;

/// Converts the geometry of an ESRI Shapefile (.shp) into a GeoJSON FeatureCollection.
/// Only polyline and polygon Shapefiles are supported, with up to 1000 parts per record.
///
/// The user must specify the name of the input Shapefile (`--input`). The GeoJSON is
/// written to `--output` when given and to standard output otherwise. The coordinate
/// reference system is inferred from the extent of the data; supplying one with `--crs`
/// makes the conversion fail if the two disagree.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() <= 1 || args[1].trim() == "help" {
        help();
        return;
    }

    match args[1].trim() {
        "version" => version(),
        "run" => {
            if let Err(e) = run(&args) {
                let msg = match &e {
                    RunError::Conversion(err) => error_message(err),
                    _ => serde_json::json!({ "error": e.to_string() }),
                };
                eprintln!("{}", msg);
                process::exit(1);
            }
        }
        _ => help(),
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn help() {
    let mut ext = "";
    if cfg!(target_os = "windows") {
        ext = ".exe";
    }

    let exe_name = &format!("shp2geojson{}", ext);
    let s = r#"
    shp2geojson Help

    Converts the geometry of a polyline or polygon Shapefile (.shp) into GeoJSON.

    The following commands are recognized:
    help       Prints help information.
    run        Runs the conversion.
    version    Prints the version information.

    The following flags can be used with the 'run' command:
    -i, --input    Name of the input Shapefile (.shp).
    -o, --output   Name of the output GeoJSON file; standard output if omitted.
    --crs          Expected CRS code, e.g. 4326 or EPSG:3857. Inferred when omitted.
    --metadata     Include each record's header values in a 'shapefile_related' member.
    --compact      Write single-line JSON.
    --wd           Working directory; overrides the one in settings.json.
    --quiet        Suppress progress messages.

    Input/output file names can be fully qualified, or can rely on the working directory
    contained in the settings.json file.

    Example Usage:
    >> EXE_NAME run --input=rivers.shp --output=rivers.geojson --crs=4326
    "#
    .replace("EXE_NAME", exe_name);
    println!("{}", s);
}

fn version() {
    const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
    println!("shp2geojson v{}", VERSION.unwrap_or("Unknown version"));
}

fn get_tool_name() -> String {
    String::from("ShapefileToGeoJson")
}

/// Prints progress messages in verbose mode. They go to stderr when the
/// GeoJSON itself is being written to stdout.
fn report(verbose: bool, to_stderr: bool, msg: &str) {
    if !verbose {
        return;
    }
    if to_stderr {
        eprintln!("{}", msg);
    } else {
        println!("{}", msg);
    }
}

/// The value of the flag at `args[i]`, given either as `--flag=value` or as the
/// following argument.
fn flag_value(args: &[String], i: usize, vec: &[&str], flag: &str) -> Result<String, RunError> {
    if vec.len() > 1 {
        return Ok(vec[1].to_string());
    }
    args.get(i + 1)
        .map(|s| s.replace('"', "").replace('\'', ""))
        .ok_or_else(|| RunError::Usage(format!("No value was given for {}.", flag)))
}

fn run(args: &[String]) -> Result<(), RunError> {
    let tool_name = get_tool_name();

    // Read in the environment variables and get the necessary values
    let configurations = get_configs()?;
    let mut working_directory = configurations.working_directory.clone();
    let mut verbose = configurations.verbose_mode;
    let mut pretty = configurations.pretty_print;

    // read the arguments
    let mut input_file = String::new();
    let mut output_file = String::new();
    let mut options = DecodeOptions::with_crs(&configurations.default_crs);

    for i in 2..args.len() {
        let arg = args[i].replace('"', "").replace('\'', "");
        let vec = arg.splitn(2, '=').collect::<Vec<&str>>(); // in case an equals sign was used
        let flag_val = vec[0].to_lowercase().replace("--", "-");
        if flag_val == "-i" || flag_val == "-input" {
            input_file = flag_value(args, i, &vec, &flag_val)?;
        } else if flag_val == "-o" || flag_val == "-output" {
            output_file = flag_value(args, i, &vec, &flag_val)?;
        } else if flag_val == "-crs" {
            options.crs = flag_value(args, i, &vec, &flag_val)?;
        } else if flag_val == "-wd" {
            working_directory = flag_value(args, i, &vec, &flag_val)?;
        } else if flag_val == "-metadata" {
            options.include_record_metadata =
                vec.len() == 1 || !vec[1].to_lowercase().contains("false");
        } else if flag_val == "-compact" {
            pretty = vec.len() > 1 && vec[1].to_lowercase().contains("false");
        } else if flag_val == "-quiet" {
            verbose = false;
        }
    }

    if input_file.is_empty() {
        return Err(RunError::Usage(
            "No input Shapefile was specified (--input).".to_string(),
        ));
    }

    let to_stderr = output_file.is_empty();
    if verbose {
        let welcome_len = format!("* Welcome to {} *", tool_name).len().max(28);
        report(verbose, to_stderr, &"*".repeat(welcome_len));
        report(
            verbose,
            to_stderr,
            &format!(
                "* Welcome to {} {}*",
                tool_name,
                " ".repeat(welcome_len - 15 - tool_name.len())
            ),
        );
        report(verbose, to_stderr, &"*".repeat(welcome_len));
    }

    let start = Instant::now();
    report(verbose, to_stderr, "Reading data...");
    let source = FileByteSource::new(&working_directory);
    let collection = convert(&source, &input_file, &options)?;
    report(
        verbose,
        to_stderr,
        &format!(
            "Decoded {} features (EPSG:{}, extent {})",
            collection.len(),
            collection.crs_name(),
            collection.bbox()
        ),
    );

    let json = collection.to_json_string(pretty)?;
    if output_file.is_empty() {
        println!("{}", json);
    } else {
        let output_path = source.resolve(&output_file);
        report(verbose, to_stderr, "Saving data...");
        fs::write(&output_path, json)?;
        report(
            verbose,
            to_stderr,
            &format!("Output file written to {}", output_path.display()),
        );
    }

    let elapsed_time = get_formatted_elapsed_time(start);
    report(
        verbose,
        to_stderr,
        &format!("Elapsed Time (including I/O): {}", elapsed_time),
    );

    Ok(())
}
