use crate::config::CliConfig;
use serde_json::{Map, Value};
use std::io::Read;

impl CliConfig {
    fn has_field_flags(&self) -> bool {
        self.principal.is_some()
            || self.rate.is_some()
            || self.years.is_some()
            || self.frequency.is_some()
    }

    /// Builds a JSON object from whichever field flags were given. Absent
    /// flags stay absent so the service reports them as missing.
    pub fn fields_payload(&self) -> String {
        let mut object = Map::new();
        let fields = [
            ("principal", self.principal),
            ("rate", self.rate),
            ("years", self.years),
            ("frequency", self.frequency),
        ];
        for (name, value) in fields {
            if let Some(number) = value.and_then(serde_json::Number::from_f64) {
                object.insert(name.to_string(), Value::Number(number));
            }
        }
        Value::Object(object).to_string()
    }

    /// 決定要送進計算服務的請求內容：`--body` > 欄位參數 > stdin
    pub fn resolve_payload<R: Read>(&self, mut stdin: R) -> std::io::Result<Option<String>> {
        if let Some(body) = &self.body {
            return Ok(Some(body.clone()));
        }

        if self.has_field_flags() {
            return Ok(Some(self.fields_payload()));
        }

        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        let trimmed = buffer.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["compound-interest-api"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_field_flags_build_object() {
        let config = parse(&[
            "--principal",
            "1000",
            "--rate",
            "5",
            "--years",
            "10",
            "--frequency",
            "12",
        ]);
        let payload = config.resolve_payload(std::io::empty()).unwrap().unwrap();
        let value: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["principal"], 1000.0);
        assert_eq!(value["frequency"], 12.0);
    }

    #[test]
    fn test_negative_values_are_accepted_by_parser() {
        let config = parse(&[
            "--principal",
            "-5",
            "--rate",
            "5",
            "--years",
            "1",
            "--frequency",
            "1",
        ]);
        assert_eq!(config.principal, Some(-5.0));
    }

    #[test]
    fn test_non_finite_flags_rejected() {
        for (flag, value) in [
            ("--principal", "NaN"),
            ("--rate", "inf"),
            ("--years", "-inf"),
            ("--frequency", "infinity"),
        ] {
            let result = CliConfig::try_parse_from(["compound-interest-api", flag, value]);
            assert!(result.is_err(), "{flag} {value}");
        }
    }

    #[test]
    fn test_missing_flags_stay_absent() {
        let config = parse(&["--principal", "100", "--rate", "5"]);
        let value: Value = serde_json::from_str(&config.fields_payload()).unwrap();
        assert!(value.get("years").is_none());
        assert!(value.get("frequency").is_none());
    }

    #[test]
    fn test_body_takes_precedence() {
        let config = parse(&["--body", r#"{"principal":1}"#, "--rate", "5"]);
        let payload = config.resolve_payload(std::io::empty()).unwrap();
        assert_eq!(payload.as_deref(), Some(r#"{"principal":1}"#));
    }

    #[test]
    fn test_reads_stdin_when_no_flags() {
        let config = parse(&[]);
        let payload = config
            .resolve_payload("  {\"rate\": 5}\n".as_bytes())
            .unwrap();
        assert_eq!(payload.as_deref(), Some("{\"rate\": 5}"));

        let empty = config.resolve_payload("\n".as_bytes()).unwrap();
        assert!(empty.is_none());
    }
}
