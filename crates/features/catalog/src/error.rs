/// A specialized [`CatalogError`] enum of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The requested equipment category id is not part of the catalog.
    #[error("Unknown equipment category: {id}")]
    UnknownCategory { id: String },
}
