use anyhow::Result;

fn main() -> Result<()> {
    daybook::desktop::run(daybook::DesktopOptions::default())?;
    Ok(())
}
