//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list queries.
const fn default_page_size() -> u32 {
    20
}

fn default_sort() -> String {
    String::from("id,asc")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size used by `list` when none is given.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Sort applied by `list` when none is given (`field,asc|desc`).
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            default_sort: default_sort(),
        }
    }
}
