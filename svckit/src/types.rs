use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::FrotaError;

/// Date format produced by `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter input shared by every report page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFormData {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub veiculo: Option<String>,
    pub motorista: Option<String>,
    pub busca: Option<String>,
}

impl ReportFormData {
    /// Build form data from raw input strings. Blank inputs become `None`.
    pub fn from_inputs(
        data_inicio: &str,
        data_fim: &str,
        veiculo: &str,
        motorista: &str,
        busca: &str,
    ) -> Result<Self, FrotaError> {
        Ok(Self {
            data_inicio: parse_date("data_inicio", data_inicio)?,
            data_fim: parse_date("data_fim", data_fim)?,
            veiculo: normalize(veiculo),
            motorista: normalize(motorista),
            busca: normalize(busca),
        })
    }

    /// Rejects an inverted date range. Open ranges are allowed.
    pub fn validate(&self) -> Result<(), FrotaError> {
        match (self.data_inicio, self.data_fim) {
            (Some(inicio), Some(fim)) if inicio > fim => Err(FrotaError::Validation(format!(
                "data inicial {} posterior à data final {}",
                inicio, fim
            ))),
            _ => Ok(()),
        }
    }

    /// Filled-in fields, in form order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(d) = self.data_inicio {
            fields.push(("data_inicio", d.format(INPUT_DATE_FORMAT).to_string()));
        }
        if let Some(d) = self.data_fim {
            fields.push(("data_fim", d.format(INPUT_DATE_FORMAT).to_string()));
        }
        if let Some(v) = &self.veiculo {
            fields.push(("veiculo", v.clone()));
        }
        if let Some(m) = &self.motorista {
            fields.push(("motorista", m.clone()));
        }
        if let Some(b) = &self.busca {
            fields.push(("busca", b.clone()));
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, FrotaError> {
    match normalize(raw) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, INPUT_DATE_FORMAT)
            .map(Some)
            .map_err(|e| FrotaError::Validation(format!("{}: data inválida '{}' ({})", field, s, e))),
    }
}

/// Body of `GET /api/maquinas`: `{ "data": { "maquinas": [...] } }`.
/// Machine entries are kept opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaquinasEnvelope {
    #[serde(default)]
    pub data: Option<MaquinasData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaquinasData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub maquinas: Vec<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MaquinasEnvelope {
    pub fn into_maquinas(self) -> Vec<Value> {
        self.data.map(|d| d.maquinas).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.data.as_ref().map(|d| d.maquinas.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inputs_trims_and_drops_blanks() {
        let data = ReportFormData::from_inputs("2024-01-01", "", "  ABC-1234 ", "   ", "").unwrap();
        assert_eq!(data.data_inicio, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(data.data_fim, None);
        assert_eq!(data.veiculo.as_deref(), Some("ABC-1234"));
        assert_eq!(data.motorista, None);
        assert_eq!(data.busca, None);
    }

    #[test]
    fn test_from_inputs_rejects_malformed_date() {
        let err = ReportFormData::from_inputs("01/02/2024", "", "", "", "").unwrap_err();
        assert!(matches!(err, FrotaError::Validation(_)));
    }

    #[test]
    fn test_validate_inverted_range() {
        let data = ReportFormData::from_inputs("2024-03-10", "2024-03-01", "", "", "").unwrap();
        assert!(data.validate().is_err());

        let same_day = ReportFormData::from_inputs("2024-03-10", "2024-03-10", "", "", "").unwrap();
        assert!(same_day.validate().is_ok());

        let open = ReportFormData::from_inputs("", "2024-03-01", "", "", "").unwrap();
        assert!(open.validate().is_ok());
    }

    #[test]
    fn test_fields_in_form_order() {
        let data = ReportFormData::from_inputs("2024-01-01", "2024-01-31", "", "João", "pneu").unwrap();
        let names: Vec<_> = data.fields().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["data_inicio", "data_fim", "motorista", "busca"]);
        assert!(ReportFormData::default().is_empty());
    }

    #[test]
    fn test_envelope_count() {
        let envelope: MaquinasEnvelope =
            serde_json::from_str(r#"{"data":{"maquinas":[{},{}]}}"#).unwrap();
        assert_eq!(envelope.count(), 2);

        let missing: MaquinasEnvelope = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(missing.count(), 0);
        assert!(missing.into_maquinas().is_empty());
    }

    #[test]
    fn test_envelope_null_maquinas_counts_zero() {
        let null_list: MaquinasEnvelope =
            serde_json::from_str(r#"{"data":{"maquinas":null}}"#).unwrap();
        assert_eq!(null_list.count(), 0);

        let null_data: MaquinasEnvelope = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(null_data.count(), 0);

        assert!(serde_json::from_str::<MaquinasEnvelope>(r#"{"data":{"maquinas":3}}"#).is_err());
    }
}
