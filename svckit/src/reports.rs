use serde::{Deserialize, Serialize};

use crate::types::ReportFormData;

/// Message shown to the user after every submission.
pub const ACK_MESSAGE: &str = "Relatório gerado com sucesso!";

/// Report types offered by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Abastecimento,
    Cerca,
    Checklist,
    Entrega,
    Financeiro,
    Frota,
    Manutencao,
    Multas,
    PontosInteresse,
    Viagens,
    VinculoVeiculoMotorista,
}

/// Static strings that distinguish one report page from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDefinition {
    pub kind: ReportKind,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub log_label: &'static str,
}

impl ReportKind {
    pub const ALL: [ReportKind; 11] = [
        ReportKind::Abastecimento,
        ReportKind::Cerca,
        ReportKind::Checklist,
        ReportKind::Entrega,
        ReportKind::Financeiro,
        ReportKind::Frota,
        ReportKind::Manutencao,
        ReportKind::Multas,
        ReportKind::PontosInteresse,
        ReportKind::Viagens,
        ReportKind::VinculoVeiculoMotorista,
    ];

    pub fn definition(self) -> ReportDefinition {
        let (slug, title, description, log_label) = match self {
            ReportKind::Abastecimento => (
                "abastecimento",
                "Relatório de Abastecimento",
                "Consumo de combustível e abastecimentos por veículo e período",
                "Gerando relatório de abastecimento",
            ),
            ReportKind::Cerca => (
                "cerca",
                "Relatório de Cerca Eletrônica",
                "Entradas e saídas de cercas eletrônicas",
                "Gerando relatório de cerca",
            ),
            ReportKind::Checklist => (
                "checklist",
                "Relatório de Checklist",
                "Checklists preenchidos pelos motoristas",
                "Gerando relatório de checklist",
            ),
            ReportKind::Entrega => (
                "entrega",
                "Relatório de Entregas",
                "Entregas realizadas, pendentes e canceladas",
                "Gerando relatório de entregas",
            ),
            ReportKind::Financeiro => (
                "financeiro",
                "Relatório Financeiro",
                "Custos operacionais da frota",
                "Gerando relatório financeiro",
            ),
            ReportKind::Frota => (
                "frota",
                "Relatório de Frota",
                "Situação geral dos veículos da frota",
                "Gerando relatório de frota",
            ),
            ReportKind::Manutencao => (
                "manutencao",
                "Relatório de Manutenção",
                "Manutenções preventivas e corretivas",
                "Gerando relatório de manutenção",
            ),
            ReportKind::Multas => (
                "multas",
                "Relatório de Multas",
                "Infrações registradas por veículo e motorista",
                "Gerando relatório de multas",
            ),
            ReportKind::PontosInteresse => (
                "pontos-interesse",
                "Relatório de Pontos de Interesse",
                "Visitas e permanência em pontos de interesse",
                "Gerando relatório de pontos de interesse",
            ),
            ReportKind::Viagens => (
                "viagens",
                "Relatório de Viagens",
                "Viagens realizadas com origem, destino e duração",
                "Gerando relatório de viagens",
            ),
            ReportKind::VinculoVeiculoMotorista => (
                "vinculo-veiculo-motorista",
                "Relatório de Vínculo Veículo/Motorista",
                "Histórico de vínculos entre veículos e motoristas",
                "Gerando relatório de vínculo veículo/motorista",
            ),
        };

        ReportDefinition {
            kind: self,
            slug,
            title,
            description,
            log_label,
        }
    }

    pub fn from_slug(slug: &str) -> Option<ReportKind> {
        Self::ALL.into_iter().find(|kind| kind.definition().slug == slug)
    }

    pub fn route(self) -> String {
        format!("/relatorios/{}", self.definition().slug)
    }
}

/// Side effects of a report submission: a labeled log line and a
/// blocking acknowledgment to the user.
pub trait Acknowledger {
    fn log_submission(&self, label: &str, data: &ReportFormData);
    fn acknowledge(&self, message: &str);
}

/// Submit handler shared by every report page. Never fails.
pub fn submit_report<A: Acknowledger + ?Sized>(kind: ReportKind, data: &ReportFormData, ack: &A) {
    let definition = kind.definition();
    ack.log_submission(definition.log_label, data);
    ack.acknowledge(ACK_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingAck {
        logs: RefCell<Vec<(String, ReportFormData)>>,
        acks: RefCell<Vec<String>>,
    }

    impl Acknowledger for RecordingAck {
        fn log_submission(&self, label: &str, data: &ReportFormData) {
            self.logs.borrow_mut().push((label.to_string(), data.clone()));
        }

        fn acknowledge(&self, message: &str) {
            self.acks.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_every_report_logs_once_and_acknowledges_once() {
        let data = ReportFormData::from_inputs("2024-05-01", "2024-05-31", "QWE-9876", "", "").unwrap();

        for kind in ReportKind::ALL {
            let ack = RecordingAck::default();
            submit_report(kind, &data, &ack);

            let logs = ack.logs.borrow();
            assert_eq!(logs.len(), 1, "{:?}", kind);
            assert_eq!(logs[0].0, kind.definition().log_label);
            assert_eq!(logs[0].1, data);
            assert_eq!(*ack.acks.borrow(), vec![ACK_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn test_empty_submission_still_acknowledged() {
        let ack = RecordingAck::default();
        submit_report(ReportKind::Multas, &ReportFormData::default(), &ack);
        assert_eq!(ack.logs.borrow().len(), 1);
        assert_eq!(ack.acks.borrow().len(), 1);
    }

    #[test]
    fn test_catalog_slugs_unique_and_resolvable() {
        let slugs: HashSet<_> = ReportKind::ALL.iter().map(|k| k.definition().slug).collect();
        assert_eq!(slugs.len(), 11);

        for kind in ReportKind::ALL {
            let def = kind.definition();
            assert_eq!(def.kind, kind);
            assert_eq!(ReportKind::from_slug(def.slug), Some(kind));
            assert!(kind.route().starts_with("/relatorios/"));
            assert!(!def.title.is_empty() && !def.description.is_empty());
        }

        assert_eq!(ReportKind::from_slug("inexistente"), None);
    }
}
