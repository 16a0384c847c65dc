//! Lenient numeric decoding.
//!
//! The analytics backend serializes decimals as JSON strings (`"19.99"`) and
//! plain counters as numbers. Both are accepted; `null`, absent, and
//! unparseable values decode to `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn as_f64(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

pub fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(as_f64))
}

pub fn opt_i64<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(as_i64))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_i64")]
        count: Option<i64>,
    }

    fn probe(v: serde_json::Value) -> Probe {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn accepts_numbers_and_decimal_strings() {
        let p = probe(json!({ "price": "19.99", "count": 3 }));
        assert_eq!(p.price, Some(19.99));
        assert_eq!(p.count, Some(3));

        let p = probe(json!({ "price": 5, "count": "12" }));
        assert_eq!(p.price, Some(5.0));
        assert_eq!(p.count, Some(12));
    }

    #[test]
    fn absent_null_and_garbage_become_none() {
        let p = probe(json!({}));
        assert!(p.price.is_none() && p.count.is_none());

        let p = probe(json!({ "price": null, "count": "many" }));
        assert!(p.price.is_none() && p.count.is_none());
    }
}
