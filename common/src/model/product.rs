use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::format_date;

/// A catalog entry as exchanged with the products API.
///
/// `date_revision` is always derived from `date_release` on the client
/// (one calendar year later); it is stored and transmitted but never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, 3 to 10 characters.
    pub id: String,
    /// Display name, 5 to 100 characters.
    pub name: String,
    /// Free text, 10 to 200 characters.
    pub description: String,
    /// Logo URL or file name. Never empty.
    pub logo: String,
    #[serde(with = "date_only")]
    pub date_release: NaiveDate,
    #[serde(with = "date_only")]
    pub date_revision: NaiveDate,
}

impl Product {
    /// String form of every field, in declaration order.
    ///
    /// Used by the catalog search, which matches a query against any field.
    pub fn field_strings(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.logo.clone(),
            format_date(self.date_release),
            format_date(self.date_revision),
        ]
    }
}

/// Serializes dates as `YYYY-MM-DD` and accepts either that or a full ISO
/// date-time on input, keeping only the calendar date (no time-zone shift).
pub(crate) mod date_only {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::validation::{format_date, parse_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or_default();
        parse_date(date_part)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "trj-crd".to_string(),
            name: "Tarjetas de Credito".to_string(),
            description: "Tarjeta de consumo bajo la modalidad de credito".to_string(),
            logo: "https://example.com/visa.png".to_string(),
            date_release: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            date_revision: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn dates_serialize_as_plain_calendar_dates() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date_release"], "2025-01-01");
        assert_eq!(json["date_revision"], "2026-01-01");
    }

    #[test]
    fn iso_timestamps_are_accepted_without_shifting_the_day() {
        let json = r#"{
            "id": "trj-crd",
            "name": "Tarjetas de Credito",
            "description": "Tarjeta de consumo bajo la modalidad de credito",
            "logo": "https://example.com/visa.png",
            "date_release": "2025-01-01T00:00:00.000+00:00",
            "date_revision": "2026-01-01T23:59:59.000-05:00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, sample());
    }

    #[test]
    fn garbage_dates_are_rejected() {
        let json = r#"{"id":"abc","name":"Name1","description":"Descripcion","logo":"l",
            "date_release":"not a date","date_revision":"2026-01-01"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
