use std::fmt;

use num_bigint::Sign;

use crate::network::Network;

///
/// A single problem found in a network description.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Human readable name of the offending field.
    pub field: String,
    /// The value that was found, `null` when missing.
    pub value: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.value, self.message)
    }
}

///
/// All problems found by one [verify] run.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrorReport {
    errors: Vec<ValidationError>,
}

impl ValidationErrorReport {
    fn add(&mut self, field: &str, value: impl Into<String>, message: &str) {
        self.errors.push(ValidationError {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

///
/// Checks a network description and reports every problem found.
///
/// Never stops at the first problem. An empty report means the network can be generated.
///
pub fn verify(network: &Network) -> ValidationErrorReport {
    let mut report = ValidationErrorReport::default();

    if network.name().is_none() {
        report.add("Network name", "null", "Network name not defined.");
    }

    if network.consensus().is_none() {
        report.add("Network clique", "null", "Network clique not defined.");
    }

    if network.chain_id().sign() != Sign::Plus {
        report.add(
            "Network id",
            network.chain_id().to_string(),
            "Chain ID must be a positive, greater than zero integer.",
        );
    }

    // TODO: account and clique specific checks, e.g. duplicate signers.

    report
}
