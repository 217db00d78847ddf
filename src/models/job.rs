use serde::{Deserialize, Deserializer, Serialize};

/// A job as published by the remote endpoint.
///
/// `pay` travels with every punch but is never printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_pay")]
    pub pay: f64,
}

impl Job {
    pub fn new(id: &str, name: &str, pay: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            pay,
        }
    }

    /// Pay as a JSON value: integral amounts stay integers (`15`, not `15.0`).
    pub fn pay_value(&self) -> serde_json::Value {
        number_value(self.pay)
    }
}

/// Render a float as a JSON number, keeping whole values integral.
pub fn number_value(v: f64) -> serde_json::Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        serde_json::Value::from(v as i64)
    } else {
        serde_json::Number::from_f64(v)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Str(String),
    Num(serde_json::Number),
    Null,
}

fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(d)? {
        Loose::Str(s) => s,
        Loose::Num(n) => n.to_string(),
        Loose::Null => String::new(),
    })
}

// Spreadsheet cells come back as numbers, numeric strings or blanks; anything
// unparsable counts as 0.
fn lenient_pay<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(d)? {
        Loose::Num(n) => n.as_f64().unwrap_or(0.0),
        Loose::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Loose::Null => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids_and_string_pay() {
        let jobs: Vec<Job> =
            serde_json::from_str(r#"[{"id":7,"name":"Edging","pay":"12.5"},{"id":"J2","name":"Raking"}]"#)
                .unwrap();
        assert_eq!(jobs[0].id, "7");
        assert_eq!(jobs[0].pay, 12.5);
        assert_eq!(jobs[1].pay, 0.0);
    }

    #[test]
    fn whole_pay_stays_integral() {
        let job = Job::new("J1", "Mowing", 15.0);
        assert_eq!(job.pay_value().to_string(), "15");
        assert_eq!(Job::new("J2", "x", 12.5).pay_value().to_string(), "12.5");
    }
}
