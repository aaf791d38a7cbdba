//! Remote structure source.
//!
//! Structures are addressed by an identifier-templated URL against a
//! fixed public repository host and fetched with a blocking GET. There
//! is no retry policy and no local caching; a failed fetch surfaces as
//! a load failure and is only retried by a fresh user selection.

use crate::error::PlasviewError;

/// Identifier-templated URL of the public structure repository.
/// `{id}` is replaced by the structure identifier.
pub const STRUCTURE_URL_TEMPLATE: &str =
    "https://files.rcsb.org/download/{id}.pdb";

/// Fetches the structure payload text for an identifier.
pub trait StructureSource {
    /// Fetch the structure payload for `identifier`.
    fn fetch(&self, identifier: &str) -> Result<String, PlasviewError>;
}

/// Structure source backed by the RCSB file repository.
#[derive(Debug, Clone)]
pub struct RcsbSource {
    url_template: String,
}

impl Default for RcsbSource {
    fn default() -> Self {
        Self::new(STRUCTURE_URL_TEMPLATE)
    }
}

impl RcsbSource {
    /// Create a source with the given URL template. `{id}` in the
    /// template is replaced by the structure identifier.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    /// Resolve the download URL for `identifier`.
    #[must_use]
    pub fn url_for(&self, identifier: &str) -> String {
        self.url_template.replace("{id}", identifier)
    }
}

impl StructureSource for RcsbSource {
    fn fetch(&self, identifier: &str) -> Result<String, PlasviewError> {
        let url = self.url_for(identifier);
        log::info!("downloading {identifier} from {url}");

        ureq::get(&url)
            .call()
            .map_err(|e| {
                PlasviewError::StructureFetch(format!(
                    "failed to download {identifier}: {e}"
                ))
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| {
                PlasviewError::StructureFetch(format!(
                    "failed to read response for {identifier}: {e}"
                ))
            })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_substitutes_the_identifier() {
        let source = RcsbSource::default();
        assert_eq!(
            source.url_for("1abc"),
            "https://files.rcsb.org/download/1abc.pdb"
        );
    }

    #[test]
    fn custom_template_is_honored() {
        let source = RcsbSource::new("https://example.org/{id}.cif");
        assert_eq!(source.url_for("2xyz"), "https://example.org/2xyz.cif");
    }
}
