use std::path::Path;

use balance_core::Scenario;

pub fn init(path: &str) -> anyhow::Result<()> {
    let output = Path::new(path);
    if output.exists() {
        anyhow::bail!("{} already exists", output.display());
    }

    std::fs::write(output, Scenario::scaffold().to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}
