use std::fmt;
use std::str::FromStr;

use super::errors::PurchaseError;

/// Identity of the booking account. Validity is the account service's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    /// Infants sit on an accompanying adult's lap.
    pub fn occupies_seat(self) -> bool {
        match self {
            TicketType::Infant => false,
            TicketType::Child | TicketType::Adult => true,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        };
        f.write_str(name)
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFANT" => Ok(TicketType::Infant),
            "CHILD" => Ok(TicketType::Child),
            "ADULT" => Ok(TicketType::Adult),
            _ => Err(PurchaseError::InvalidTicketType(s.to_string())),
        }
    }
}

/// One line item of a purchase. Several items of the same type add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    pub ticket_type: TicketType,
    pub quantity: u64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, quantity: u64) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }
}

/// Unit prices, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    pub infant: u64,
    pub child: u64,
    pub adult: u64,
}

pub const INFANT_TICKET_PRICE: u64 = 0;
pub const CHILD_TICKET_PRICE: u64 = 10;
pub const ADULT_TICKET_PRICE: u64 = 20;

impl PriceTable {
    pub const STANDARD: PriceTable = PriceTable {
        infant: INFANT_TICKET_PRICE,
        child: CHILD_TICKET_PRICE,
        adult: ADULT_TICKET_PRICE,
    };

    pub fn price_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Infant => self.infant,
            TicketType::Child => self.child,
            TicketType::Adult => self.adult,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
