//! The one status → color table used by every screen.

/// Display color for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusColor {
    Green,
    Orange,
    Red,
    Blue,
    Grey,
    /// Used for any status the table does not know.
    #[default]
    Neutral,
}

impl StatusColor {
    pub fn hex(self) -> &'static str {
        match self {
            StatusColor::Green => "#4caf50",
            StatusColor::Orange => "#ff9800",
            StatusColor::Red => "#f44336",
            StatusColor::Blue => "#2196f3",
            StatusColor::Grey => "#9e9e9e",
            StatusColor::Neutral => "#e0e0e0",
        }
    }
}

const STATUS_COLORS: &[(&str, StatusColor)] = &[
    ("Completado", StatusColor::Green),
    ("En progreso", StatusColor::Orange),
    ("En ejecución", StatusColor::Orange),
    ("En planificación", StatusColor::Blue),
    ("En reporte", StatusColor::Blue),
    ("No iniciado", StatusColor::Grey),
    ("Suspendido", StatusColor::Red),
];

/// Looks up the badge color for a program or phase status string.
///
/// Unknown statuses get [`StatusColor::Neutral`]; this never fails.
pub fn status_color(status: &str) -> StatusColor {
    let status = status.trim();
    STATUS_COLORS
        .iter()
        .find(|(name, _)| *name == status)
        .map_or(StatusColor::Neutral, |(_, color)| *color)
}
