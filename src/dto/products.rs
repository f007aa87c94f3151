use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::domain::product::Product;

/// Format used for product audit timestamps on the wire.
pub const PRODUCT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn serialize_product_date<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(PRODUCT_DATE_FORMAT))
}

/// Outbound representation of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
    #[serde(serialize_with = "serialize_product_date")]
    pub created_date: NaiveDateTime,
    #[serde(serialize_with = "serialize_product_date")]
    pub last_modified_date: NaiveDateTime,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            price: value.price.get(),
            available: value.available,
            created_date: value.created_date,
            last_modified_date: value.last_modified_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProductId, ProductName, ProductPrice};
    use chrono::NaiveDate;

    #[test]
    fn serializes_snake_case_fields_and_formatted_dates() {
        let created = NaiveDate::from_ymd_opt(2024, 8, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let modified = NaiveDate::from_ymd_opt(2024, 8, 11)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        let product = Product {
            id: ProductId::new(3).unwrap(),
            name: ProductName::new("Sample Product").unwrap(),
            price: ProductPrice::new(199.99).unwrap(),
            available: true,
            created_date: created,
            last_modified_date: modified,
        };

        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Sample Product");
        assert_eq!(json["price"], 199.99);
        assert_eq!(json["available"], true);
        assert_eq!(json["created_date"], "2024-08-10 12:00:00");
        assert_eq!(json["last_modified_date"], "2024-08-11 09:05:03");
    }
}
