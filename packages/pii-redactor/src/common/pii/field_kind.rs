/// Field names the detector knows how to reason about
///
/// Detection and masking dispatch on this instead of comparing raw names, so
/// every recognized field is handled explicitly and anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `phone` or `contact`: 10-digit mobile number
    Phone,
    /// `aadhar`: 12-digit national ID
    Aadhar,
    /// `passport`: one uppercase letter and 7 digits
    Passport,
    /// `upi_id`: payment handle `user@bank`
    UpiId,
    Name,
    Email,
    Address,
    DeviceId,
    IpAddress,
    /// Any field the detector does not recognize; passed through verbatim
    Other,
}

impl FieldKind {
    /// Classify a field by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "phone" | "contact" => Self::Phone,
            "aadhar" => Self::Aadhar,
            "passport" => Self::Passport,
            "upi_id" => Self::UpiId,
            "name" => Self::Name,
            "email" => Self::Email,
            "address" => Self::Address,
            "device_id" => Self::DeviceId,
            "ip_address" => Self::IpAddress,
            _ => Self::Other,
        }
    }

    /// Kinds whose value alone, in the right format, is PII.
    pub fn is_standalone(self) -> bool {
        matches!(
            self,
            Self::Phone | Self::Aadhar | Self::Passport | Self::UpiId
        )
    }

    /// Kinds that only count as PII when the record also identifies a person.
    pub fn is_linked_identifier(self) -> bool {
        matches!(self, Self::DeviceId | Self::IpAddress)
    }
}
