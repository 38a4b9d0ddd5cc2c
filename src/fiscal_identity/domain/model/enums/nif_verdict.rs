/// Outcome of running a candidate string through the NIF check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NifVerdict {
    Valid,
    BadFormat,
    BadLeadingDigit,
    BadChecksum,
}

impl NifVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::BadFormat => "bad_format",
            Self::BadLeadingDigit => "bad_leading_digit",
            Self::BadChecksum => "bad_checksum",
        }
    }
}
