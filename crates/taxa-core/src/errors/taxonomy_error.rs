/// Taxonomy loading/validation errors. Fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("duplicate category id '{id}' in taxonomy version {version}")]
    DuplicateCategoryId { id: String, version: String },

    #[error("malformed category id '{id}': ids must be lowercase alphanumeric or underscore")]
    MalformedCategoryId { id: String },

    #[error("taxonomy document has no categories")]
    EmptyTaxonomy,

    #[error("failed to decode taxonomy document: {reason}")]
    DecodeFailed { reason: String },
}
