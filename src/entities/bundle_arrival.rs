use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement category of an arrival, used for row highlighting and filtering.
///
/// Stored as the single-letter code; the UI labels are SS/ST/SR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum AccountType {
    #[sea_orm(string_value = "S")]
    #[serde(rename = "S")]
    S,
    #[sea_orm(string_value = "T")]
    #[serde(rename = "T")]
    T,
    #[sea_orm(string_value = "R")]
    #[serde(rename = "R")]
    R,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::S => "S",
            AccountType::T => "T",
            AccountType::R => "R",
        }
    }

    /// Two-letter display label used in tables and exports.
    pub fn display_label(&self) -> &'static str {
        match self {
            AccountType::S => "SS",
            AccountType::T => "ST",
            AccountType::R => "SR",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" | "s" => Ok(AccountType::S),
            "T" | "t" => Ok(AccountType::T),
            "R" | "r" => Ok(AccountType::R),
            other => Err(format!("Unknown account type: {other}")),
        }
    }
}

/// Settlement status of an arrival. A record may carry no status at all;
/// that unset state is represented by `None` on the model and is never
/// coerced to `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ArrivalStatus {
    #[sea_orm(string_value = "OPEN")]
    #[serde(rename = "OPEN")]
    Open,
    #[sea_orm(string_value = "PENDING")]
    #[serde(rename = "PENDING")]
    Pending,
}

impl ArrivalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrivalStatus::Open => "OPEN",
            ArrivalStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrivalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(ArrivalStatus::Open),
            "PENDING" => Ok(ArrivalStatus::Pending),
            other => Err(format!("Unknown status: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bundle_arrivals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the bundle arrived; drives balance bucketing.
    pub date: Date,
    pub lorry_type: String,
    pub lorry_no: String,
    pub city: String,
    pub party_name: String,
    pub account_type: AccountType,
    pub bundle: String,
    pub invoice_no: String,
    /// Invoice identity date, distinct from the arrival date.
    pub invoice_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub phone_no: Option<String>,
    pub status: Option<ArrivalStatus>,
    pub itemtype: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
