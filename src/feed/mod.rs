//! Simulated social feed and profile data. Nothing here touches the network.

use enum_assoc::Assoc;
use gpui::SharedString;

use crate::theme::ThemeAccentKind;

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn accent(&self) -> ThemeAccentKind)]
pub enum FeedEventKind {
    #[assoc(label = "Actualización de caso")]
    #[assoc(accent = ThemeAccentKind::Primary)]
    CaseUpdate,
    #[assoc(label = "Audiencia")]
    #[assoc(accent = ThemeAccentKind::Secondary)]
    Hearing,
    #[assoc(label = "Documento compartido")]
    #[assoc(accent = ThemeAccentKind::Primary)]
    DocumentShared,
    #[assoc(label = "Sentencia")]
    #[assoc(accent = ThemeAccentKind::Constructive)]
    Ruling,
    #[assoc(label = "Plazo")]
    #[assoc(accent = ThemeAccentKind::Destructive)]
    Deadline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedEvent {
    pub id: u32,
    pub kind: FeedEventKind,
    pub author: SharedString,
    pub author_role: SharedString,
    pub title: SharedString,
    pub body: SharedString,
    pub minutes_ago: u32,
    pub likes: u32,
    pub comments: u32,
}

impl FeedEvent {
    pub fn relative_time(&self) -> String {
        relative_time(self.minutes_ago)
    }
}

fn relative_time(minutes: u32) -> String {
    const HOUR: u32 = 60;
    const DAY: u32 = 24 * HOUR;

    match minutes {
        0 => "ahora".to_owned(),
        m if m < HOUR => format!("hace {m} min"),
        m if m < DAY => format!("hace {} h", m / HOUR),
        m => format!("hace {} d", m / DAY),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMetrics {
    pub active_cases: u32,
    pub resolved_cases: u32,
    pub followers: u32,
    /// Share of resolved cases with a favourable outcome, in `0.0..=1.0`.
    pub success_rate: f32,
}

impl ProfileMetrics {
    pub fn mock() -> Self {
        Self {
            active_cases: 12,
            resolved_cases: 148,
            followers: 2_340,
            success_rate: 0.87,
        }
    }

    pub fn success_percent(&self) -> u32 {
        (self.success_rate.clamp(0., 1.) * 100.).round() as u32
    }
}

/// Sample feed, newest first.
pub fn mock_feed() -> Vec<FeedEvent> {
    let mut events = vec![
        FeedEvent {
            id: 1,
            kind: FeedEventKind::Hearing,
            author: "Lucía Fernández".into(),
            author_role: "Abogada laboralista".into(),
            title: "Audiencia preliminar confirmada".into(),
            body: "El juzgado fijó la audiencia del caso Ramírez para el próximo martes a las 10:00."
                .into(),
            minutes_ago: 12,
            likes: 8,
            comments: 2,
        },
        FeedEvent {
            id: 2,
            kind: FeedEventKind::Ruling,
            author: "Martín Rojas".into(),
            author_role: "Socio, Rojas & Asociados".into(),
            title: "Sentencia favorable en segunda instancia".into(),
            body: "La cámara confirmó la indemnización por despido injustificado.".into(),
            minutes_ago: 3 * 60,
            likes: 54,
            comments: 11,
        },
        FeedEvent {
            id: 3,
            kind: FeedEventKind::DocumentShared,
            author: "Valentina Cruz".into(),
            author_role: "Paralegal".into(),
            title: "Modelo de contrato de arrendamiento".into(),
            body: "Subí una plantilla actualizada con las cláusulas de la nueva ley de alquileres."
                .into(),
            minutes_ago: 26 * 60,
            likes: 31,
            comments: 6,
        },
        FeedEvent {
            id: 4,
            kind: FeedEventKind::Deadline,
            author: "Purple Jurídico".into(),
            author_role: "Recordatorio".into(),
            title: "Vence el plazo para contestar la demanda".into(),
            body: "Quedan 2 días hábiles para presentar la contestación en el expediente 4521/24."
                .into(),
            minutes_ago: 45,
            likes: 0,
            comments: 0,
        },
        FeedEvent {
            id: 5,
            kind: FeedEventKind::CaseUpdate,
            author: "Diego Morales".into(),
            author_role: "Abogado civil".into(),
            title: "Nueva prueba incorporada".into(),
            body: "Se agregó el peritaje contable al expediente de la sucesión Gómez.".into(),
            minutes_ago: 3 * 24 * 60,
            likes: 5,
            comments: 1,
        },
    ];

    events.sort_by_key(|event| event.minutes_ago);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_is_newest_first() {
        let feed = mock_feed();
        assert!(!feed.is_empty());
        assert!(
            feed.windows(2)
                .all(|pair| pair[0].minutes_ago <= pair[1].minutes_ago)
        );
    }

    #[test]
    fn feed_ids_are_unique() {
        let feed = mock_feed();
        let mut ids: Vec<_> = feed.iter().map(|event| event.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), feed.len());
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(0), "ahora");
        assert_eq!(relative_time(59), "hace 59 min");
        assert_eq!(relative_time(60), "hace 1 h");
        assert_eq!(relative_time(24 * 60 - 1), "hace 23 h");
        assert_eq!(relative_time(24 * 60), "hace 1 d");
    }

    #[test]
    fn success_percent_rounds_and_clamps() {
        assert_eq!(ProfileMetrics::mock().success_percent(), 87);

        let metrics = ProfileMetrics {
            success_rate: 1.7,
            ..ProfileMetrics::mock()
        };
        assert_eq!(metrics.success_percent(), 100);
    }

    #[test]
    fn kinds_have_labels() {
        assert_eq!(FeedEventKind::Ruling.label(), "Sentencia");
        assert!(matches!(
            FeedEventKind::Deadline.accent(),
            ThemeAccentKind::Destructive
        ));
    }
}
