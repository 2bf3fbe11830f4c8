use crate::config::{ElementIds, MapConfig};
use crate::domain::ports::Page;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::log_safe;

/// Embedded map URL for `address`.
///
/// The address goes in as the last query value exactly as typed: no
/// percent-encoding, no validation. Downstream consumers rely on the
/// byte-exact form.
pub fn build_map_url(config: &MapConfig, address: &str) -> String {
    format!(
        "{}zoom={}&layers={}&super_search={}",
        config.base_url, config.zoom, config.layers, address
    )
}

/// Reads the address input and points the map frame at the matching URL.
///
/// A missing input or frame element is returned as `ElementNotFound`.
pub fn refresh_map<P: Page>(page: &mut P, ids: &ElementIds, config: &MapConfig) -> Result<()> {
    let address = page
        .input_value(&ids.input_id)
        .ok_or_else(|| SearchError::ElementNotFound {
            id: ids.input_id.clone(),
        })?;

    let url = build_map_url(config, &address);
    tracing::debug!("Refreshing map for address: {}", log_safe(&address));

    if !page.set_frame_src(&ids.frame_id, &url) {
        return Err(SearchError::ElementNotFound {
            id: ids.frame_id.clone(),
        });
    }

    Ok(())
}
