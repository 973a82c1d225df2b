use crate::common::*;

use crate::dto::appointment_record::*;
use crate::enums::{aggregation_order::*, chart_palette::*};

#[doc = r#"
    The three charts produced by a report run.

    Every kind is fully described by constants: the field it groups by, the order of
    its bars, the palette, the chart texts and the artifact file name.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    BarberCount,
    ServiceCount,
    /// Number of services booked by each client.
    ///
    /// The artifact keeps its historical "average cuts per client" title and file
    /// name, but the value drawn is a plain count per client, not a mean.
    ClientServiceCount,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::BarberCount,
        ReportKind::ServiceCount,
        ReportKind::ClientServiceCount,
    ];

    pub fn key_field(&self) -> &'static str {
        match self {
            ReportKind::BarberCount => BARBER_NAME_FIELD,
            ReportKind::ServiceCount => SERVICE_NAME_FIELD,
            ReportKind::ClientServiceCount => CLIENT_NAME_FIELD,
        }
    }

    pub fn order(&self) -> AggregationOrder {
        match self {
            ReportKind::BarberCount | ReportKind::ServiceCount => AggregationOrder::CountDesc,
            ReportKind::ClientServiceCount => AggregationOrder::KeyAsc,
        }
    }

    pub fn palette(&self) -> ChartPalette {
        match self {
            ReportKind::BarberCount => ChartPalette::Viridis,
            ReportKind::ServiceCount => ChartPalette::CoolWarm,
            ReportKind::ClientServiceCount => ChartPalette::Blues,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::BarberCount => "agendamentos_por_barbeiro.jpg",
            ReportKind::ServiceCount => "agendamentos_por_corte.jpg",
            ReportKind::ClientServiceCount => "media_cortes_por_cliente.jpg",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::BarberCount => "Número de Agendamentos por Barbeiro",
            ReportKind::ServiceCount => "Número de Agendamentos por Corte",
            ReportKind::ClientServiceCount => "Média de Cortes por Cliente",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ReportKind::BarberCount => "Barbeiro",
            ReportKind::ServiceCount => "Corte",
            ReportKind::ClientServiceCount => "Cliente",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ReportKind::BarberCount | ReportKind::ServiceCount => "Número de Agendamentos",
            ReportKind::ClientServiceCount => "Média de Cortes",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            ReportKind::BarberCount => "barber-count",
            ReportKind::ServiceCount => "service-count",
            ReportKind::ClientServiceCount => "client-service-count",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_writes_its_own_file() {
        let names: HashSet<&str> = ReportKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), ReportKind::ALL.len());
        assert!(names.iter().all(|n| n.ends_with(".jpg")));
    }

    #[test]
    fn kinds_group_by_expected_fields() {
        assert_eq!(ReportKind::BarberCount.key_field(), "barbeiro_nome");
        assert_eq!(ReportKind::ServiceCount.key_field(), "corte_nome");
        assert_eq!(ReportKind::ClientServiceCount.key_field(), "cliente_nome");
    }

    #[test]
    fn client_chart_keeps_historical_file_name() {
        assert_eq!(
            ReportKind::ClientServiceCount.file_name(),
            "media_cortes_por_cliente.jpg"
        );
        assert_eq!(ReportKind::ClientServiceCount.order(), AggregationOrder::KeyAsc);
    }
}
