use std::{
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use chrono::{DateTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary amount in integer cents.
///
/// Balance arithmetic stays in the atomic unit so that shares always
/// reconstruct the original amount exactly; rounding happens once, at
/// construction from a decimal. `Display` always renders two decimal
/// places regardless of runtime locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

/// Conversion failures from decimal amounts to integer cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoneyConversionError {
    #[error("amount has sub-cent precision")]
    NonIntegral,
    #[error("amount does not fit in 64-bit cents")]
    OutOfRange,
}

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Converts a decimal amount to integer cents, rejecting sub-cent
    /// precision and values outside the `i64` range.
    pub fn try_from_decimal(amount: Decimal) -> Result<Self, MoneyConversionError> {
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(MoneyConversionError::OutOfRange)?;
        if cents.fract() != Decimal::ZERO {
            return Err(MoneyConversionError::NonIntegral);
        }
        cents
            .to_i64()
            .map(Self)
            .ok_or(MoneyConversionError::OutOfRange)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyConversionError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::try_from_decimal(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.as_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

// Decimal has inherent byte-level serialize/deserialize functions that
// shadow the serde trait methods, so the trait calls must be qualified.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.as_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::try_from_decimal(amount).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Course,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Course,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Course => "Course",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// A shared expense. Field names serialize in camelCase so snapshots
/// match the shape the web client persists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub payer_id: ParticipantId,
    pub involved_ids: Vec<ParticipantId>,
    pub date: DateTime<Utc>,
}

/// Net balance per participant: positive is owed money, negative owes.
///
/// Keyed by a BTreeMap so iteration order is stable, which the
/// settlement resolver relies on for deterministic tie-breaks.
pub type Balances = BTreeMap<ParticipantId, Money>;

/// A single directed payment from a debtor to a creditor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub total_spent: Money,
    pub settlements: Vec<Transfer>,
    pub balances: Balances,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0.00")]
    #[case::cents_only(7, "0.07")]
    #[case::whole(10_000, "100.00")]
    #[case::mixed(12_345, "123.45")]
    #[case::negative(-5_000, "-50.00")]
    #[case::negative_cents(-1, "-0.01")]
    fn money_display_is_locale_stable_two_decimals(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(Money::from_cents(cents).to_string(), expected);
    }

    #[rstest]
    #[case::whole("100", Ok(10_000))]
    #[case::two_decimals("33.34", Ok(3_334))]
    #[case::trailing_zero("12.50", Ok(1_250))]
    #[case::negative("-0.01", Ok(-1))]
    #[case::sub_cent("0.005", Err(MoneyConversionError::NonIntegral))]
    fn money_from_decimal_cases(
        #[case] amount: &str,
        #[case] expected: Result<i64, MoneyConversionError>,
    ) {
        let amount: Decimal = amount.parse().expect("test amount should parse");
        assert_eq!(
            Money::try_from_decimal(amount),
            expected.map(Money::from_cents)
        );
    }

    #[test]
    fn money_serializes_as_a_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(10_000)).expect("money serializes");
        assert_eq!(json, "\"100.00\"");
    }

    #[test]
    fn money_survives_a_serde_round_trip() {
        let original = Money::from_cents(-12_345);
        let json = serde_json::to_string(&original).expect("money serializes");
        let restored: Money = serde_json::from_str(&json).expect("money deserializes");
        assert_eq!(restored, original);
    }

    #[test]
    fn money_deserializes_from_number_and_string() {
        let from_number: Money = serde_json::from_str("100").expect("number should deserialize");
        let from_string: Money =
            serde_json::from_str("\"100.00\"").expect("string should deserialize");
        assert_eq!(from_number, Money::from_cents(10_000));
        assert_eq!(from_string, Money::from_cents(10_000));
    }

    #[test]
    fn money_rejects_sub_cent_precision_in_json() {
        let result: Result<Money, _> = serde_json::from_str("\"0.001\"");
        assert!(result.is_err());
    }

    #[test]
    fn category_names_cover_all_variants() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Food", "Travel", "Shopping", "Course", "Other"]);
    }
}
