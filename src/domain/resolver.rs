//! Location lookup by partial name.

use super::error::DomainError;
use super::location::Location;
use crate::port::Reporter;

/// Resolves a user-supplied snippet to one canonical location.
///
/// Matching is case-sensitive substring containment against the known
/// locations in their given order, and the first match wins. Callers that
/// need an unambiguous result must supply a discriminating snippet.
pub struct LocationResolver<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> LocationResolver<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Return the first location containing `snippet`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::LocationNotFound`] when no location contains
    /// the snippet.
    pub fn resolve(&self, snippet: &str, locations: &[Location]) -> Result<Location, DomainError> {
        match locations.iter().find(|location| location.contains(snippet)) {
            Some(location) => {
                self.reporter
                    .info(&format!("{snippet} setting location to: {location}"));
                Ok(location.clone())
            }
            None => {
                self.reporter
                    .debug(&format!("no visited location matches {snippet}"));
                Err(DomainError::LocationNotFound {
                    snippet: snippet.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recording {
        infos: RefCell<Vec<String>>,
    }

    impl Reporter for Recording {
        fn info(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }
        fn debug(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    fn locations() -> Vec<Location> {
        vec![
            Location::from("Achenar.Dawes Hub"),
            Location::from("Esumindii.Nourse City"),
            Location::from("Esumindii.Nourse Orbital"),
        ]
    }

    #[test]
    fn first_match_in_order_wins() {
        let reporter = Recording::default();
        let resolver = LocationResolver::new(&reporter);

        let location = resolver.resolve("Nourse", &locations()).unwrap();
        assert_eq!(location.as_str(), "Esumindii.Nourse City");
        assert_eq!(
            reporter.infos.borrow().as_slice(),
            ["Nourse setting location to: Esumindii.Nourse City"]
        );
    }

    #[test]
    fn discriminating_snippet_selects_later_location() {
        let reporter = Recording::default();
        let resolver = LocationResolver::new(&reporter);
        let location = resolver.resolve("Orbital", &locations()).unwrap();
        assert_eq!(location.as_str(), "Esumindii.Nourse Orbital");
    }

    #[test]
    fn resolving_a_canonical_name_returns_it_unchanged() {
        let reporter = Recording::default();
        let resolver = LocationResolver::new(&reporter);
        for location in locations() {
            let resolved = resolver.resolve(location.as_str(), &locations()).unwrap();
            assert_eq!(resolved, location);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let reporter = Recording::default();
        let resolver = LocationResolver::new(&reporter);
        let err = resolver.resolve("nourse", &locations()).unwrap_err();
        assert!(matches!(err, DomainError::LocationNotFound { snippet } if snippet == "nourse"));
        assert!(reporter.infos.borrow().is_empty());
    }

    #[test]
    fn empty_location_list_never_matches() {
        let reporter = Recording::default();
        let resolver = LocationResolver::new(&reporter);
        assert!(resolver.resolve("Sol", &[]).is_err());
    }
}
