use anyhow::Result;

fn main() -> Result<()> {

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SVT_LOG"))
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let matches = svt::get_cli().get_matches_from(wild::args());
    let code = svt::main_cli(&matches)?;
    std::process::exit(code);
}
