use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PovError, Result};

/// Drawing tools of the designer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand, lights every cell under the pointer
    #[default]
    Draw,
    /// Freehand, clears every cell under the pointer
    Erase,
    /// Straight line from the press point to the pointer
    Line,
    /// Circle outline around the press point through the pointer
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Draw, Tool::Erase, Tool::Line, Tool::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Draw => "draw",
            Tool::Erase => "erase",
            Tool::Line => "line",
            Tool::Circle => "circle",
        }
    }

    /// Freehand tools paint along the pointer path instead of previewing a shape
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Draw | Tool::Erase)
    }

    /// Value written by the tool; only erase writes unlit cells
    pub fn value(&self) -> bool {
        !matches!(self, Tool::Erase)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = PovError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| PovError::UnknownTool { name: s.to_string() })
    }
}
