use serde::{Deserialize, Deserializer};
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use crate::error::OrderError;

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_id: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub unit_price: f64,
}

impl Item {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Reads the batch of orders stored at `path`.
///
/// A missing file and a batch with no orders are both reported as errors, so
/// callers never see an empty `Vec`.
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, OrderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => OrderError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => OrderError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // A top-level `null` decodes to `None` and is treated like `[]`.
    let orders: Option<Vec<Order>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                OrderError::Read {
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                OrderError::Decode {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    match orders {
        Some(orders) if !orders.is_empty() => Ok(orders),
        _ => Err(OrderError::EmptyBatch {
            path: path.to_path_buf(),
        }),
    }
}

// `null` is read the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_orders() {
        let orders = read_orders("test-inputs/orders.json").unwrap();
        let expected_orders = vec![
            Order {
                order_id: "O1".to_string(),
                customer_name: "Acme".to_string(),
                items: vec![Item {
                    item_id: "A".to_string(),
                    quantity: 10,
                    unit_price: 60.0,
                }],
            },
            Order {
                order_id: "O2".to_string(),
                customer_name: "Bee".to_string(),
                items: vec![],
            },
            Order {
                order_id: "O3".to_string(),
                customer_name: "Cobalt Ltd".to_string(),
                items: vec![
                    Item {
                        item_id: "B".to_string(),
                        quantity: 2,
                        unit_price: 125.5,
                    },
                    Item {
                        item_id: "C".to_string(),
                        quantity: 1,
                        unit_price: 49.0,
                    },
                ],
            },
            Order {
                order_id: "O4".to_string(),
                customer_name: "Delta".to_string(),
                items: vec![],
            },
        ];

        assert_eq!(orders, expected_orders);
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");

        let err = read_orders(&path).unwrap_err();

        assert!(matches!(err, OrderError::InputNotFound { path: p } if p == path));
    }

    #[test]
    fn empty_array_is_empty_batch() {
        let err = read_orders("test-inputs/empty.json").unwrap_err();
        assert!(matches!(err, OrderError::EmptyBatch { .. }));
    }

    #[test]
    fn null_document_is_empty_batch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, "null").unwrap();

        let err = read_orders(&path).unwrap_err();

        assert!(matches!(err, OrderError::EmptyBatch { .. }));
    }

    #[test]
    fn malformed_document_is_decode_error() {
        let err = read_orders("test-inputs/malformed.json").unwrap_err();
        assert!(matches!(err, OrderError::Decode { .. }));
    }

    #[test]
    fn null_items_and_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(
            &path,
            r#"[{"orderId": "X", "items": null}, {"items": [{"quantity": -3}]}]"#,
        )
        .unwrap();

        let orders = read_orders(&path).unwrap();

        assert_eq!(orders[0].order_id, "X");
        assert_eq!(orders[0].customer_name, "");
        assert!(orders[0].items.is_empty());
        assert_eq!(orders[1].order_id, "");
        assert_eq!(
            orders[1].items,
            vec![Item {
                item_id: String::new(),
                quantity: -3,
                unit_price: 0.0,
            }]
        );
    }

    #[test]
    fn null_strings_read_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(
            &path,
            r#"[
                {"orderId": "O1", "customerName": null, "items": [{"itemId": null, "quantity": 1, "unitPrice": 5}]},
                {"orderId": null, "customerName": "Bee", "items": [{"itemId": "B", "quantity": 2, "unitPrice": 3}]}
            ]"#,
        )
        .unwrap();

        let orders = read_orders(&path).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, "O1");
        assert_eq!(orders[0].customer_name, "");
        assert_eq!(orders[0].items[0].item_id, "");
        assert_eq!(orders[1].order_id, "");
        assert_eq!(orders[1].customer_name, "Bee");
    }

    #[cfg(unix)]
    #[test]
    fn directory_input_is_read_error() {
        let dir = tempdir().unwrap();

        let err = read_orders(dir.path()).unwrap_err();

        assert!(matches!(err, OrderError::Read { .. } | OrderError::Decode { .. }));
        assert!(!matches!(err, OrderError::InputNotFound { .. }));
    }

    #[test]
    fn line_total_keeps_sign() {
        let item = Item {
            item_id: "A".to_string(),
            quantity: -2,
            unit_price: 10.25,
        };
        assert_eq!(item.line_total(), -20.5);
    }
}
