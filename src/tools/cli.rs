use std::{fmt::Display, fmt::Formatter, str::FromStr};

use clap::Parser;
use log::{info, warn, LevelFilter};

use crate::error::TransformError;

/// Encode or decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Mode {
    type Err = TransformError;

    /// `-` encodes, `+` decodes. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Mode::Encode),
            "+" => Ok(Mode::Decode),
            other => Err(TransformError::InvalidMode(other.to_string())),
        }
    }
}

/// Which stage (or stages) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Burrows-Wheeler transform, framed with its 32-bit key
    Bwt,
    /// Move-to-front coding, bare bytes
    Mtf,
    /// Burrows-Wheeler followed by move-to-front, framed with the key
    Pipeline,
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bwt" => Ok(Transform::Bwt),
            "mtf" => Ok(Transform::Mtf),
            "pipeline" => Ok(Transform::Pipeline),
            _ => Err(TransformError::InvalidTransform(s.to_string())),
        }
    }
}

/// Everything the binary needs to know to run one transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOpts {
    /// Encode/Decode
    pub mode: Mode,
    /// Stage(s) to run
    pub transform: Transform,
    /// Optional name of file to read for input, stdin otherwise
    pub input: Option<String>,
    /// Optional name of file to write, stdout otherwise
    pub output: Option<String>,
    /// Log level, 0 (off) to 5 (trace)
    pub verbose: u8,
}

impl TransformOpts {
    pub fn new() -> Self {
        Self {
            mode: Mode::Encode,
            transform: Transform::Bwt,
            input: None,
            output: None,
            verbose: 3,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    /// The direction token is checked here, before any input is touched.
    pub fn from_args(args: Args) -> Result<Self, TransformError> {
        let mut opts = Self::new();
        opts.mode = args.direction.parse()?;
        opts.transform = args.transform.parse()?;
        opts.input = args.filename;
        opts.output = args.output;
        opts.verbose = args.v;
        Ok(opts)
    }
}

impl Default for TransformOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Burrows-Wheeler and move-to-front transforms",
    long_about = "
    Reads a buffer, applies the Burrows-Wheeler transform, move-to-front coding, or both,
    and writes the result. The Burrows-Wheeler output is a 32-bit big-endian key followed by
    the transformed bytes. Move-to-front output is the bare ranks.

    Pass '-' to encode and '+' to decode."
)]
pub struct Args {
    /// '-' to encode, '+' to decode
    #[clap()]
    direction: String,

    /// Filename of file to process (stdin if absent)
    #[clap()]
    filename: Option<String>,

    /// Stage to run: bwt, mtf or pipeline
    #[clap(short = 't', long = "transform", default_value = "bwt")]
    transform: String,

    /// Write to this file instead of stdout
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Map the -v setting onto a log level.
pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn transform_opts_init() -> Result<TransformOpts, TransformError> {
    let opts = TransformOpts::from_args(Args::parse())?;

    log::set_max_level(level_filter(opts.verbose));

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.mode);
    info!("Transform set to {}", opts.transform);
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Reading input from stdin"),
    }
    match &opts.output {
        Some(s) => info!("Sending output to the file {}", s),
        None => info!("Sending output to stdout"),
    }
    info!("---- Initialization End ----");
    Ok(opts)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mode_test() {
        assert_eq!("-".parse::<Mode>().unwrap(), Mode::Encode);
        assert_eq!("+".parse::<Mode>().unwrap(), Mode::Decode);
        assert!(matches!(
            "x".parse::<Mode>(),
            Err(TransformError::InvalidMode(s)) if s == "x"
        ));
        assert!("".parse::<Mode>().is_err());
        assert!("--".parse::<Mode>().is_err());
    }

    #[test]
    fn transform_test() {
        assert_eq!("bwt".parse::<Transform>().unwrap(), Transform::Bwt);
        assert_eq!("MTF".parse::<Transform>().unwrap(), Transform::Mtf);
        assert_eq!("pipeline".parse::<Transform>().unwrap(), Transform::Pipeline);
        assert!("huffman".parse::<Transform>().is_err());
    }

    #[test]
    fn args_test() {
        let args = Args::try_parse_from(["bwt-mtf", "-t", "mtf", "-o", "out.bin", "+", "in.bin"]).unwrap();
        let opts = TransformOpts::from_args(args).unwrap();
        assert_eq!(opts.mode, Mode::Decode);
        assert_eq!(opts.transform, Transform::Mtf);
        assert_eq!(opts.input.as_deref(), Some("in.bin"));
        assert_eq!(opts.output.as_deref(), Some("out.bin"));
        assert_eq!(opts.verbose, 3);
    }

    #[test]
    fn default_args_test() {
        let args = Args::try_parse_from(["bwt-mtf", "-"]).unwrap();
        let opts = TransformOpts::from_args(args).unwrap();
        assert_eq!(opts, TransformOpts::new());
    }

    #[test]
    fn bad_direction_test() {
        let args = Args::try_parse_from(["bwt-mtf", "encode"]).unwrap();
        assert!(matches!(
            TransformOpts::from_args(args),
            Err(TransformError::InvalidMode(_))
        ));
    }

    #[test]
    fn level_test() {
        assert_eq!(level_filter(0), LevelFilter::Off);
        assert_eq!(level_filter(3), LevelFilter::Info);
        assert_eq!(level_filter(9), LevelFilter::Trace);
    }
}
