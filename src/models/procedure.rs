use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Descriptive content for one offered procedure.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ProcedureRecord {
    pub identifier: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub includes: &'static [&'static str],
    #[serde(rename = "forWho")]
    pub for_who: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static [&'static str]>,
}

impl ProcedureRecord {
    /// Notes that should actually be rendered (absent and empty look the same).
    pub fn visible_notes(&self) -> &'static [&'static str] {
        self.notes.unwrap_or(&[])
    }
}

/// Outcome of resolving an identifier against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a ProcedureRecord),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a ProcedureRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

static PROCEDURES: [ProcedureRecord; 3] = [
    ProcedureRecord {
        identifier: "ginecologia-integral",
        title: "Ginecología integral (placeholder)",
        subtitle: Some("Evaluación completa y seguimiento personalizado"),
        description: "Texto placeholder para la descripción larga del procedimiento. Acá va el desarrollo completo: objetivos, qué se evalúa, cómo se planifica el seguimiento y qué esperar.",
        includes: &["Historia clínica", "Evaluación", "Plan personalizado", "Seguimiento"],
        for_who: &["Chequeos preventivos", "Síntomas ginecológicos", "Seguimiento clínico"],
        notes: Some(&["La información es orientativa. Se personaliza en consulta."]),
    },
    ProcedureRecord {
        identifier: "menopausia-salud-hormonal",
        title: "Menopausia y salud hormonal (placeholder)",
        subtitle: Some("Abordaje integral para síntomas y calidad de vida"),
        description: "Texto placeholder. Acá va el detalle completo: qué incluye la evaluación, opciones de abordaje y cómo se decide el plan según cada paciente.",
        includes: &["Evaluación integral", "Opciones terapéuticas", "Controles", "Ajustes"],
        for_who: &["Perimenopausia", "Menopausia", "Síntomas (sueño/ánimo/vasomotores)"],
        notes: Some(&["Se evalúan antecedentes y objetivos para definir el plan."]),
    },
    ProcedureRecord {
        identifier: "estetica-y-funcional",
        title: "Ginecología estética y funcional (placeholder)",
        subtitle: Some("Opciones personalizadas con foco en seguridad"),
        description: "Texto placeholder. Acá va la explicación general del procedimiento y sus objetivos, sin reemplazar la consulta médica.",
        includes: &["Evaluación", "Plan", "Cuidados", "Seguimiento"],
        for_who: &["Objetivos estéticos", "Confort", "Bienestar íntimo"],
        notes: Some(&["Indicaciones y cuidados se definen según cada caso."]),
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static ProcedureRecord>> = LazyLock::new(|| {
    PROCEDURES.iter().map(|record| (record.identifier, record)).collect()
});

/// All records, in the order they are listed on the site.
pub fn table() -> &'static [ProcedureRecord] {
    &PROCEDURES
}

/// Exact-match lookup of a URL identifier. The input is not normalized.
pub fn resolve(identifier: &str) -> Lookup<'static> {
    match INDEX.get(identifier) {
        Some(&record) => Lookup::Found(record),
        None => Lookup::NotFound,
    }
}
