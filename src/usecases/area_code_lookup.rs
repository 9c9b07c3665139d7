//! Area code -> city. Primary directory first, built-in table second.

use crate::domain::CityLocation;
use crate::domain::area_code::well_known;
use crate::ports::AreaCodeDirectory;
use std::sync::Arc;
use tracing::warn;

pub struct AreaCodeLookup {
    primary: Option<Arc<dyn AreaCodeDirectory>>,
}

impl AreaCodeLookup {
    /// Lookup backed only by the built-in table.
    pub fn builtin() -> Self {
        Self { primary: None }
    }

    pub fn with_primary(primary: Arc<dyn AreaCodeDirectory>) -> Self {
        Self {
            primary: Some(primary),
        }
    }

    /// Resolve a three-digit code. A failing primary is treated as a miss.
    pub async fn resolve(&self, area_code: &str) -> Option<CityLocation> {
        if let Some(primary) = &self.primary {
            match primary.lookup(area_code).await {
                Ok(Some(loc)) => return Some(loc),
                Ok(None) => {}
                Err(e) => warn!(area_code, error = %e, "area code directory failed; using built-in table"),
            }
        }
        well_known(area_code)
    }
}
