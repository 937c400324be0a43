//! Named map regions.

/// A named region of the host world (the farm itself, a barn interior,
/// a town map).
///
/// Instanced interiors carry a generated `unique_name` distinguishing
/// them from every other instance sharing the same display name: two
/// barns are both displayed as `"Barn"` but resolve under distinct
/// unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Display name (e.g. `"Farm"`, `"Barn"`).
    pub name: String,
    /// Generated unique name for instanced interiors, if any.
    pub unique_name: Option<String>,
}

impl Location {
    /// Create a location with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique_name: None,
        }
    }

    /// Attach a generated unique name.
    #[must_use]
    pub fn with_unique_name(mut self, unique: impl Into<String>) -> Self {
        self.unique_name = Some(unique.into());
        self
    }

    /// The name that identifies this location: the generated unique name
    /// when present, the display name otherwise.
    #[must_use]
    pub fn name_or_unique_name(&self) -> &str {
        self.unique_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_when_no_unique_name() {
        let farm = Location::new("Farm");
        assert_eq!(farm.name_or_unique_name(), "Farm");
    }

    #[test]
    fn test_unique_name_preferred() {
        let barn = Location::new("Barn").with_unique_name("Barn#7f3a");
        assert_eq!(barn.name_or_unique_name(), "Barn#7f3a");
        assert_eq!(barn.name, "Barn");
    }
}
