//! Parameter Table Schema
//!
//! The table-driven dialects (GliGli and Imogen) describe a patch as an
//! ordered sequence of named parameters, each stored in one or two bytes.
//! Table order defines both the order bytes are consumed from the unpacked
//! dump and the order of the decoded output.

/// Storage width of a table-driven parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamWidth {
    /// Single byte
    One,
    /// Two bytes, little-endian (low byte first on the wire)
    Two,
}

impl ParamWidth {
    /// Number of bytes the parameter occupies in the unpacked dump
    pub const fn bytes(self) -> usize {
        match self {
            ParamWidth::One => 1,
            ParamWidth::Two => 2,
        }
    }
}

/// One entry of a parameter table: a name and a storage width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as shown to the user
    pub name: &'static str,
    /// Storage width in the dump
    pub width: ParamWidth,
}

impl ParamSpec {
    /// Shorthand for a single-byte parameter
    pub const fn one(name: &'static str) -> Self {
        ParamSpec {
            name,
            width: ParamWidth::One,
        }
    }

    /// Shorthand for a two-byte little-endian parameter
    pub const fn two(name: &'static str) -> Self {
        ParamSpec {
            name,
            width: ParamWidth::Two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bytes() {
        assert_eq!(ParamWidth::One.bytes(), 1);
        assert_eq!(ParamWidth::Two.bytes(), 2);
    }

    #[test]
    fn test_spec_shorthands() {
        assert_eq!(ParamSpec::one("Sync").width, ParamWidth::One);
        assert_eq!(ParamSpec::two("Cutoff").width, ParamWidth::Two);
        assert_eq!(ParamSpec::two("Cutoff").name, "Cutoff");
    }
}
