use quadseek::detect;
use quadseek::DetectConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    quadseek::init_tracing(false);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: detect_object <image_path> [config.json]");
        return Ok(());
    };

    let cfg = match std::env::args().nth(2) {
        Some(config) => DetectConfig::load_json(config)?,
        None => DetectConfig::default(),
    };

    let report = detect::detect_object_path(&path, &cfg)?;
    if report.detected {
        println!("object at {} (mass {})", report.xy(), report.mass);
    } else {
        println!("no object (search ended at {})", report.xy());
    }

    Ok(())
}
