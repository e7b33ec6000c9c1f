mod app;
mod events;
mod ui;

fn main() -> anyhow::Result<()> {
    quicknotes_core::init_logging();
    app::run()?;
    Ok(())
}
