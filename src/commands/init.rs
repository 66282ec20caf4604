use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Aquameter Configuration
#
# The six built-in WHO/BIS parameters (pH, DO, BOD, COD, TotalColiform, TDS)
# are always present. Declare additional monitored parameters here; reuse a
# built-in name to override its entry.
#
# policy is one of: "range-centered", "zero-ideal", "bounded-ideal"

# [standards.Nitrate]
# ideal = 0.0
# max = 45.0
# weight = 5.0
# policy = "zero-ideal"

# [standards.FecalColiform]
# ideal = 0.0
# max = 10.0
# weight = 5.0
# policy = "zero-ideal"

# [standards.Fluoride]
# ideal = 1.0
# min = 0.5
# max = 1.5
# weight = 4.0
# policy = "range-centered"

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
