//! Error types for catalog construction.

/// Ways a catalog can violate its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two templates share an identifier.
    #[error("duplicate template id: {id}")]
    DuplicateTemplateId {
        /// The repeated identifier.
        id: String,
    },

    /// A dynamic time limit names a variable the template does not define.
    #[error("template {template_id} uses undefined duration variable {variable}")]
    UnknownDurationVariable {
        /// The offending template.
        template_id: String,
        /// The missing placeholder name.
        variable: String,
    },

    /// A dynamic time limit names a variable that is not a numeric range.
    #[error("template {template_id} duration variable {variable} is not a numeric range")]
    NonNumericDurationVariable {
        /// The offending template.
        template_id: String,
        /// The placeholder name.
        variable: String,
    },

    /// Level tiers are not strictly ascending.
    #[error("level tiers are not ascending at max level {max_level}")]
    UnorderedLevelTiers {
        /// First tier cap that is not above its predecessor.
        max_level: u32,
    },
}
