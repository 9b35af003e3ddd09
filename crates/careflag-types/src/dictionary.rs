//! Symbolic dictionary names
//!
//! Rules refer to concepts and programs by these names and resolve them
//! through a `ConceptResolver` once per evaluation call. The mapping from a
//! name to a backend identifier is deployment configuration; an unknown
//! name is a configuration error that fails the whole call.

/// Observation concept: the child's current HIV status.
pub const CHILDS_CURRENT_HIV_STATUS: &str = "CHILDS_CURRENT_HIV_STATUS";

/// Observation concept: HIV DNA polymerase chain reaction result
/// (quantitative reading).
pub const HIV_DNA_POLYMERASE_CHAIN_REACTION: &str = "HIV_DNA_POLYMERASE_CHAIN_REACTION";

/// Observation concept: HIV DNA polymerase chain reaction result
/// (qualitative reading).
pub const HIV_DNA_POLYMERASE_CHAIN_REACTION_QUALITATIVE: &str =
    "HIV_DNA_POLYMERASE_CHAIN_REACTION_QUALITATIVE";

/// Coded answer: the child has been exposed to HIV.
pub const EXPOSURE_TO_HIV: &str = "EXPOSURE_TO_HIV";

/// Care program: mother-child health, child services.
pub const MCH_CHILD_SERVICES: &str = "MCH_CHILD_SERVICES";
