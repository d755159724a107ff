fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = julia_explorer::RunGuiCommand::new(julia_explorer::JuliaConfig::default());

    command.execute()
}
