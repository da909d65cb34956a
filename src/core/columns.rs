//! Catalog column names recognized by the pipeline.
//!
//! Every column is optional: a stage whose column is absent from the input
//! file is skipped silently.

/// Group-leader flag, rewritten to `"true"`/`"false"`.
pub const GROUP_LEADER: &str = "group_leader";

/// Alternate spelling of the leader flag seen in some upstream exports.
/// Accepted by the image audit only.
pub const GROUP_LEADER_ALT: &str = "group-leader";

/// Variant-group identifier shared by related products.
pub const GROUP_ID: &str = "group_id";

/// Derived sibling-count label column (`"<n> Varianten"`).
pub const GROUP_COUNT: &str = "group_count";

/// Category taxonomy cell, rewritten to ` %% `/` > ` path notation.
pub const CATEGORY: &str = "category";

/// Brand name, blanked when blacklisted.
pub const BRAND: &str = "brand";

/// Certification flag overwritten on an `"ETA"` match in title/description.
pub const ETA_APPROVAL: &str = "eta-zulassung";

pub const DESCRIPTION: &str = "description";
pub const TITLE: &str = "title";

/// Image reference checked by the missing-image audit.
pub const IMAGE_LINK: &str = "image_link";

/// Row identifier reported by the missing-image audit.
pub const ID: &str = "id";

/// Derived steel-finish column (from title text).
pub const MATERIAL: &str = "material";

/// Derived screw-head-shape column (from title text).
pub const HEAD_SHAPE: &str = "kopfform";
