use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SupplierCategory {
    Maintenance,
    Cleaning,
    Security,
    Elevators,
    Gardening,
    Insurance,
    Utilities,
    Other,
}

impl SupplierCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
            Self::Security => "security",
            Self::Elevators => "elevators",
            Self::Gardening => "gardening",
            Self::Insurance => "insurance",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }
}

impl FromStr for SupplierCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "maintenance" => Ok(Self::Maintenance),
            "cleaning" => Ok(Self::Cleaning),
            "security" => Ok(Self::Security),
            "elevators" => Ok(Self::Elevators),
            "gardening" => Ok(Self::Gardening),
            "insurance" => Ok(Self::Insurance),
            "utilities" => Ok(Self::Utilities),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}
