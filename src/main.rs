use julia_explorer::{JuliaConfig, PpmFilePresenter, SnapshotController};

const OUTPUT_PATH: &str = "output/julia.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let presenter = PpmFilePresenter::new();
    let mut controller = SnapshotController::new(presenter);

    controller.generate(JuliaConfig::default())?;

    if let Some(parent) = std::path::Path::new(OUTPUT_PATH).parent() {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(OUTPUT_PATH)?;

    log::info!("Saved to {}", OUTPUT_PATH);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
