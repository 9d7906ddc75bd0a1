//! Locate a colored object in an image and print its position as `x,y`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use quadseek::annotate::mark_centroid;
#[cfg(not(feature = "tracing"))]
use quadseek::core::{init_with_level, level_from_verbosity};
use quadseek::detect::detect_object;
use quadseek::{ChannelOrder, DetectConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the center of a colored object in an image"
)]
struct Args {
    /// Image to search
    image: PathBuf,

    /// JSON config with optional `segment` and `search` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower HSV bound as H,S,V (hue in 0..180)
    #[arg(long, value_parser = parse_hsv)]
    lower: Option<[u8; 3]>,

    /// Upper HSV bound as H,S,V (hue in 0..180)
    #[arg(long, value_parser = parse_hsv)]
    upper: Option<[u8; 3]>,

    /// Channel order fed to the HSV conversion
    #[arg(long, value_enum)]
    channel_order: Option<OrderArg>,

    /// Report "not detected" unless more than N pixels match
    #[arg(long)]
    min_mass: Option<u64>,

    /// Save a copy of the image with a marker drawn at the result
    #[arg(long)]
    annotate: Option<PathBuf>,

    /// Print the full JSON report instead of `x,y`
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    Rgb,
    Bgr,
}

impl From<OrderArg> for ChannelOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Rgb => ChannelOrder::Rgb,
            OrderArg::Bgr => ChannelOrder::Bgr,
        }
    }
}

fn parse_hsv(raw: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let &[h, s, v] = parts.as_slice() else {
        return Err(format!("expected H,S,V, got `{raw}`"));
    };
    let channel = |name: &str, text: &str| {
        text.parse::<u8>()
            .map_err(|err| format!("invalid {name} `{text}`: {err}"))
    };
    Ok([channel("hue", h)?, channel("saturation", s)?, channel("value", v)?])
}

fn build_config(args: &Args) -> Result<DetectConfig, Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => DetectConfig::load_json(path)?,
        None => DetectConfig::default(),
    };
    if let Some(lower) = args.lower {
        cfg.segment.bounds.lower = lower;
    }
    if let Some(upper) = args.upper {
        cfg.segment.bounds.upper = upper;
    }
    if let Some(order) = args.channel_order {
        cfg.segment.channel_order = order.into();
    }
    if let Some(min_mass) = args.min_mass {
        cfg.search.min_mass = min_mass;
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    quadseek::init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    init_with_level(level_from_verbosity(args.verbose))?;

    let cfg = build_config(&args)?;
    let img = image::open(&args.image)?.to_rgb8();
    let report = detect_object(&img, &cfg)?.with_image_path(args.image.to_string_lossy());

    if let Some(out) = &args.annotate {
        let mut marked = img;
        mark_centroid(&mut marked, report.centroid);
        marked.save(out)?;
        log::info!("wrote annotated image to {}", out.display());
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", report.xy());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hsv_triples() {
        assert_eq!(parse_hsv("100,200,95"), Ok([100, 200, 95]));
        assert_eq!(parse_hsv(" 0, 0 ,255"), Ok([0, 0, 255]));
        assert!(parse_hsv("1,2").is_err());
        assert!(parse_hsv("1,2,300").is_err());
    }

    #[test]
    fn flags_override_config_defaults() {
        let args = Args::parse_from([
            "quadseek",
            "frame.png",
            "--lower",
            "0,100,100",
            "--channel-order",
            "rgb",
            "--min-mass",
            "5",
        ]);
        let cfg = build_config(&args).unwrap();
        assert_eq!(cfg.segment.bounds.lower, [0, 100, 100]);
        assert_eq!(cfg.segment.bounds.upper, [150, 255, 255]);
        assert_eq!(cfg.segment.channel_order, ChannelOrder::Rgb);
        assert_eq!(cfg.search.min_mass, 5);
    }
}
