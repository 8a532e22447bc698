use serde::Deserialize;

const DEFAULT_RAM_BASE: u64 = 0x8000_0000;
const DEFAULT_RAM_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_FEATURES: &str = "RV64IMAFD";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub costs: CostsConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_features")]
    pub features: String,

    #[serde(default = "default_start_pc")]
    pub start_pc: String,

    #[serde(default)]
    pub verbose: u32,
}

impl GeneralConfig {
    pub fn start_pc_val(&self) -> u64 {
        parse_hex(&self.start_pc, DEFAULT_RAM_BASE)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            features: default_features(),
            start_pc: default_start_pc(),
            verbose: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_ram_base")]
    pub ram_base: String,

    #[serde(default = "default_ram_size")]
    pub ram_size: String,
}

impl MemoryConfig {
    pub fn ram_base_val(&self) -> u64 {
        parse_hex(&self.ram_base, DEFAULT_RAM_BASE)
    }

    pub fn ram_size_val(&self) -> usize {
        let s = self.ram_size.trim_start_matches("0x");
        usize::from_str_radix(s, 16).unwrap_or(DEFAULT_RAM_SIZE)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: default_ram_base(),
            ram_size: default_ram_size(),
        }
    }
}

/// Optional instruction-cost override table.
#[derive(Debug, Deserialize, Default)]
pub struct CostsConfig {
    /// Path to a JSON file of mnemonic-to-cost overrides.
    pub table: Option<String>,
}

fn parse_hex(s: &str, default: u64) -> u64 {
    let s = s.trim_start_matches("0x");
    u64::from_str_radix(s, 16).unwrap_or(default)
}

fn default_features() -> String {
    DEFAULT_FEATURES.to_string()
}

fn default_start_pc() -> String {
    format!("{:#x}", DEFAULT_RAM_BASE)
}

fn default_ram_base() -> String {
    format!("{:#x}", DEFAULT_RAM_BASE)
}

fn default_ram_size() -> String {
    format!("{:#x}", DEFAULT_RAM_SIZE)
}
