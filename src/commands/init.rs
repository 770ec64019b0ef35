use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# Riskmap configuration

# Ceiling used to normalize raw scores. Use the string "catalog-sum" to
# derive it from the criteria priorities instead of a fixed value.
max_score = 24.0

# Identity references recorded on the assessment-level score.
[assessment]
area_id = "high-availability"
service_type_id = "compute"
resource_type_id = "virtual-machine"

# Evaluation criteria and their priority weights. Each criterion is
# referenced by name from the flag mapping rules; criteria nothing
# references are ignored.
[[criteria]]
name = "Single Instance"
priority = 4

[[criteria]]
name = "Availability Set"
priority = 4

[[criteria]]
name = "Virtual Machine Scale Set"
priority = 4

[[criteria]]
name = "Availability Zones"
priority = 4

[[criteria]]
name = "Standard Managed Disk (HDD)"
priority = 2

[[criteria]]
name = "Standard Managed Disk (SSD)"
priority = 2

[[criteria]]
name = "Premium Managed Disk (SSD)"
priority = 1

[[criteria]]
name = "Ultra Disk (SSD)"
priority = 1

[[criteria]]
name = "Standard Storage Account"
priority = 2

[[criteria]]
name = "Premium Storage Account"
priority = 1

[[criteria]]
name = "Azure Backup"
priority = 2

[[criteria]]
name = "Dedicated Host Group"
priority = 1

# The flag -> criterion mapping table can be overridden with [[rules]]
# entries, e.g.:
#
# [[rules]]
# flag = "single-instance"
# criterion = "Single Instance"
# trigger = "unset"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".riskmap.toml");

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created .riskmap.toml configuration file");

    Ok(())
}
