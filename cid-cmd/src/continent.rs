//! Continent lookups from the command line.

use cid_core::continent::{self, UNKNOWN};

/// One output line: the continent, or `Unknown` followed by the failed step.
pub fn describe(name: &str) -> String {
    match continent::lookup(name) {
        Ok(continent) => format!("{}\t{}", name, continent),
        Err(e) => format!("{}\t{} ({})", name, UNKNOWN, e),
    }
}

pub fn run_continent(names: &[String]) {
    for name in names {
        println!("{}", describe(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_known_and_unknown() {
        assert_eq!(describe("Chile"), "Chile\tSouth America");
        assert_eq!(
            describe("Atlantis"),
            "Atlantis\tUnknown (No country named \"Atlantis\")"
        );
        assert!(describe("World").starts_with("World\tUnknown ("));
    }
}
