use anyhow::Context;
use herald_app::functions::f;
use herald_kernel::{settings::Settings, target, Wrapper};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load herald settings")?;
    herald_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        prefix = %settings.prefix,
        "herald-app starting"
    );

    let wrapper = Wrapper::new(settings.prefix);
    wrapper
        .apply(&target!(f))
        .with_context(|| "failed to apply wrapper to f")?;

    Ok(())
}
