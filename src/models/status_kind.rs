use ansi_term::Colour;
use serde::{Deserialize, Serialize};

/// Training availability of a client. The wire strings ("Full Training", …)
/// are a compatibility contract with the status documents and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    #[serde(rename = "Full Training")]
    FullTraining,
    #[serde(rename = "Modified Training")]
    ModifiedTraining,
    #[serde(rename = "Rehab")]
    Rehab,
    #[serde(rename = "No Training")]
    NoTraining,
}

/// Display priority used by the board, the PDF report and all exports.
/// Reproduced verbatim from the coach dashboard; report consumers rely on
/// this exact order.
pub const DISPLAY_ORDER: [StatusKind; 4] = [
    StatusKind::ModifiedTraining,
    StatusKind::FullTraining,
    StatusKind::Rehab,
    StatusKind::NoTraining,
];

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::FullTraining => "Full Training",
            StatusKind::ModifiedTraining => "Modified Training",
            StatusKind::Rehab => "Rehab",
            StatusKind::NoTraining => "No Training",
        }
    }

    /// Helper: convert input code from CLI (full word or one-letter shorthand)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "full" | "f" => Some(StatusKind::FullTraining),
            "modified" | "m" => Some(StatusKind::ModifiedTraining),
            "rehab" | "r" => Some(StatusKind::Rehab),
            "none" | "no" | "n" => Some(StatusKind::NoTraining),
            _ => None,
        }
    }

    /// Terminal colour for dots and timeline bars: green, orange, purple
    /// and red, the same mapping web viewers of the documents use.
    pub fn colour(&self) -> Colour {
        match self {
            StatusKind::FullTraining => Colour::Green,
            StatusKind::ModifiedTraining => Colour::RGB(255, 153, 51), // orange
            StatusKind::Rehab => Colour::Purple,
            StatusKind::NoTraining => Colour::Red,
        }
    }

    /// RGB triple for PDF section headers.
    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            StatusKind::FullTraining => (0.13, 0.55, 0.13),
            StatusKind::ModifiedTraining => (0.95, 0.55, 0.10),
            StatusKind::Rehab => (0.50, 0.20, 0.60),
            StatusKind::NoTraining => (0.75, 0.15, 0.15),
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
