//! Export column layouts for each entity.
//!
//! The headers and cell order reproduce the legacy exports exactly,
//! including the raw wire tokens for enum fields (the support UI shows
//! labels, the CSV carries tokens).

use tabular::{Cell, Row};

use super::Exportable;
use crate::domain::{Business, Incident, Payment, User};

impl Exportable for User {
    const HEADERS: &'static [&'static str] = &["ID", "Nombre", "Email", "Rol", "Estado", "Creado"];

    fn row(&self) -> Row {
        vec![
            Cell::from(self.id),
            Cell::from(self.name.as_str()),
            Cell::from(self.email.as_str()),
            Cell::from(self.role.token()),
            Cell::from(self.status.token()),
            Cell::from(self.created_on.to_string()),
        ]
    }
}

impl Exportable for Business {
    const HEADERS: &'static [&'static str] =
        &["ID", "Nombre", "Plan", "Publicaciones", "Deuda", "Owner", "Alta"];

    fn row(&self) -> Row {
        vec![
            Cell::from(self.id),
            Cell::from(self.name.as_str()),
            Cell::from(self.tier.token()),
            Cell::from(self.postings),
            Cell::from(self.debt_ars),
            Cell::from(self.owner_email.as_str()),
            Cell::from(self.joined_on.to_string()),
        ]
    }
}

impl Exportable for Incident {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Servicio",
        "Negocio",
        "Trabajador",
        "Motivo",
        "Estado",
        "Creada",
    ];

    fn row(&self) -> Row {
        vec![
            Cell::from(self.id.as_str()),
            Cell::from(self.service_id.as_str()),
            Cell::from(self.business_name.as_str()),
            Cell::from(self.worker_name.as_str()),
            Cell::from(self.reason.token()),
            Cell::from(self.status.token()),
            Cell::from(self.created_on.to_string()),
        ]
    }
}

impl Exportable for Payment {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Tipo",
        "Beneficiario",
        "Monto",
        "Método",
        "Estado",
        "Creado",
    ];

    fn row(&self) -> Row {
        vec![
            Cell::from(self.id.as_str()),
            Cell::from(self.kind.token()),
            Cell::from(self.beneficiary.as_str()),
            Cell::from(self.amount_ars),
            Cell::from(self.method.as_str()),
            Cell::from(self.status.token()),
            Cell::from(self.created_on.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use demo_data::FixtureSet;
    use tabular::filter;

    use super::*;
    use crate::convert::directory_from_fixtures;
    use crate::directory::Directory;
    use crate::export::export_csv;

    fn directory() -> Directory {
        let fixtures = FixtureSet::builtin().expect("embedded fixtures are valid");
        directory_from_fixtures(&fixtures).expect("conversion succeeds")
    }

    #[test]
    fn user_export_reproduces_the_legacy_layout() {
        let dir = directory();
        let csv = export_csv(filter(dir.users(), "carla"));

        assert_eq!(
            csv,
            "ID,Nombre,Email,Rol,Estado,Creado\n\
             1,Carla López,carla@correo.com,empleado,activo,2025-08-12"
        );
    }

    #[test]
    fn incident_export_carries_wire_tokens_not_labels() {
        let dir = directory();
        let csv = export_csv(filter(dir.incidents(), "1202"));

        assert!(csv.contains("desempeno"));
        assert!(csv.contains("en_revisión"));
        assert!(!csv.contains("En revisión"));
    }

    #[test]
    fn business_rows_align_with_their_headers() {
        let dir = directory();
        let rows: Vec<_> = dir.businesses().iter().map(Exportable::row).collect();

        for row in rows {
            assert_eq!(row.len(), Business::HEADERS.len());
        }
    }

    #[test]
    fn payment_export_includes_amount_and_method() {
        let dir = directory();
        let csv = export_csv(filter(dir.payments(), "PAY-903"));

        assert_eq!(
            csv,
            "ID,Tipo,Beneficiario,Monto,Método,Estado,Creado\n\
             PAY-903,cobro_negocio,Cafetería 9 de Julio,45800,MP,pendiente,2025-09-18"
        );
    }
}
