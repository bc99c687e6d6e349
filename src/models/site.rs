//! Static copy for the landing page: profile, quick links, procedure cards,
//! offices, products and FAQ.

use chrono::{Datelike, Local};

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub badges: &'static [&'static str],
    pub quick_info: &'static [&'static str],
    pub copy_message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Primary,
    Soft,
}

pub struct NavLink {
    pub label: &'static str,
    pub desc: Option<&'static str>,
    pub href: &'static str,
    pub kind: LinkKind,
}

impl NavLink {
    pub fn is_primary(&self) -> bool {
        self.kind == LinkKind::Primary
    }
}

pub struct ProcedureSummary {
    pub title: &'static str,
    pub duration: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub note: Option<&'static str>,
    /// Identifier of the detail page behind "Ver más".
    pub detail: &'static str,
}

impl ProcedureSummary {
    pub fn detail_href(&self) -> String {
        format!("/procedimientos/{}", self.detail)
    }
}

pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub map_url: &'static str,
}

pub struct Product {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Dra. X (placeholder)",
    initials: "MD",
    tagline: "Ginecología estética y funcional • Menopausia • Bienestar integral",
    badges: &[
        "Atención personalizada",
        "Enfoque basado en evidencia",
        "Consultas presenciales y online",
    ],
    quick_info: &[
        "Turnos: WhatsApp / formulario",
        "Horarios: (placeholder)",
        "Idiomas: ES / EN (si aplica)",
        "Obras sociales: (placeholder)",
    ],
    copy_message: "Hola! Quiero pedir un turno.",
};

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "Biografía profesional",
        desc: Some("Formación, enfoque y estilo de atención"),
        href: "#bio",
        kind: LinkKind::Primary,
    },
    NavLink {
        label: "Procedimientos",
        desc: Some("Detalle claro de cada propuesta"),
        href: "#procedimientos",
        kind: LinkKind::Soft,
    },
    NavLink {
        label: "Consultorios / sedes",
        desc: Some("Dónde atiendo y cómo llegar"),
        href: "#sedes",
        kind: LinkKind::Soft,
    },
    NavLink {
        label: "Contacto",
        desc: Some("Turnos y consultas"),
        href: "#contacto",
        kind: LinkKind::Soft,
    },
    NavLink {
        label: "Productos",
        desc: Some("Recomendados / tienda (placeholder)"),
        href: "#productos",
        kind: LinkKind::Soft,
    },
    NavLink {
        label: "Preguntas frecuentes",
        desc: Some("Dudas típicas antes de reservar"),
        href: "#faq",
        kind: LinkKind::Soft,
    },
];

pub static PROCEDURE_SUMMARIES: [ProcedureSummary; 3] = [
    ProcedureSummary {
        title: "Procedimiento A (placeholder)",
        duration: Some("Consulta: 30–45 min"),
        bullets: &[
            "Qué es: descripción breve para ubicar.",
            "Para quién: casos típicos (general).",
            "Qué incluye: evaluación + plan personalizado.",
            "Cuidados: recomendaciones generales (sin reemplazar consulta médica).",
        ],
        note: Some("Esto es un ejemplo. Luego lo reemplazamos por tu texto real."),
        detail: "ginecologia-integral",
    },
    ProcedureSummary {
        title: "Procedimiento B (placeholder)",
        duration: Some("Sesión: 20–30 min"),
        bullets: &[
            "Objetivo principal y beneficios esperables.",
            "Cómo se realiza (en términos generales).",
            "Cuántas sesiones (aprox. según caso).",
            "Preguntas frecuentes: dolor, recuperación, controles.",
        ],
        note: None,
        detail: "menopausia-salud-hormonal",
    },
    ProcedureSummary {
        title: "Procedimiento C (placeholder)",
        duration: Some("Sesión: 30–60 min"),
        bullets: &[
            "Enfoque integral: evaluación clínica + objetivos.",
            "Resultados: variables según cada paciente.",
            "Seguimiento: control y ajustes.",
            "Contraindicaciones: se evalúan en consulta.",
        ],
        note: None,
        detail: "estetica-y-funcional",
    },
];

pub static LOCATIONS: [Location; 2] = [
    Location {
        name: "Consultorio 1 (placeholder)",
        address: "Barrio/ciudad — Dirección aproximada",
        map_url: "#",
    },
    Location {
        name: "Consultorio 2 (placeholder)",
        address: "Barrio/ciudad — Dirección aproximada",
        map_url: "#",
    },
];

pub static PRODUCTS: [Product; 3] = [
    Product { name: "Producto 1", blurb: PRODUCT_BLURB },
    Product { name: "Producto 2", blurb: PRODUCT_BLURB },
    Product { name: "Producto 3", blurb: PRODUCT_BLURB },
];

const PRODUCT_BLURB: &str = "Descripción breve (placeholder). Precio, beneficios y link de compra.";

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "¿Cómo reservo un turno?",
        answer: "Por WhatsApp o por el formulario. Confirmamos disponibilidad y modalidad.",
    },
    Faq {
        question: "¿Hacés consultas online?",
        answer: "Sí (placeholder). Ideal para evaluación inicial y seguimientos.",
    },
    Faq {
        question: "¿Los resultados son iguales para todos?",
        answer: "No. Dependen de cada caso. En consulta se ajusta el plan.",
    },
    Faq {
        question: "¿Esto reemplaza una consulta médica?",
        answer: "No. La info es orientativa. Siempre se evalúa en consulta.",
    },
];

pub fn footer_year() -> i32 {
    Local::now().year()
}
