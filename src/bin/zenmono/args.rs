use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, info};
use zenmono::{ArrayName, Orientation};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input: PathBuf,
    pub name: ArrayName,
    pub orientation: Orientation,
}

fn parse_array_name(value: &str) -> Result<ArrayName, String> {
    ArrayName::new(value).map_err(|e| e.to_string())
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zenmono")
        .about("Convert a 1-bit BMP into a C byte array for LCD/OLED displays")
        // -h selects horizontal packing, so help is long-only
        .disable_help_flag(true)
        .arg(Arg::new("help")
            .long("help")
            .action(ArgAction::Help)
            .help("Print help"))
        .arg(Arg::new("name")
            .short('n')
            .long("name")
            .value_name("arrayName")
            .value_parser(parse_array_name)
            .default_value("image")
            .help("Name of the generated array"))
        .arg(Arg::new("vertical")
            .short('v')
            .long("vertical")
            .action(ArgAction::SetTrue)
            .help("Vertical byte orientation, 8 rows per byte (default)"))
        .arg(Arg::new("horizontal")
            .short('h')
            .long("horizontal")
            .action(ArgAction::SetTrue)
            .help("Horizontal byte orientation, 8 columns per byte"))
        .arg(Arg::new("file")
            .value_name("file_name")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("1-bit uncompressed BMP to convert"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information messages and higher"))
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let orientation = if options.get_flag("horizontal") {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    info!("Byte orientation: {orientation:?}");

    CmdOptions {
        input: options
            .get_one::<PathBuf>("file")
            .cloned()
            .unwrap_or_default(),
        name: options
            .get_one::<ArrayName>("name")
            .cloned()
            .unwrap_or_default(),
        orientation,
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("could not initialize logger: {e}");
        return;
    }
    info!("Log level: {log_level}");
}
