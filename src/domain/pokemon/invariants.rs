use super::entity::Pokemon;
use crate::domain::{DomainError, DomainResult};

/// Validates all Pokemon invariants
/// These are the absolute rules that must hold for a catalog entry to be valid
pub fn validate_pokemon(pokemon: &Pokemon) -> DomainResult<()> {
    validate_id(pokemon.id)?;
    validate_name(&pokemon.name)?;
    validate_types(&pokemon.types)?;
    Ok(())
}

/// Dex numbers start at 1; the remote catalog never issues 0
fn validate_id(id: u32) -> DomainResult<()> {
    if id == 0 {
        return Err(DomainError::InvariantViolation(
            "Pokemon id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Pokemon name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Every entry carries one or two type tags, none of them blank
fn validate_types(types: &[String]) -> DomainResult<()> {
    if types.is_empty() || types.len() > 2 {
        return Err(DomainError::InvariantViolation(format!(
            "Pokemon must have 1 or 2 types, got {}",
            types.len()
        )));
    }
    if types.iter().any(|t| t.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(
            "Pokemon type tag cannot be empty".to_string(),
        ));
    }
    Ok(())
}
