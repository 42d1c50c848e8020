use crate::domain::model::Board;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML overrides for the run.
///
/// ```toml
/// [board]
/// width = 5
/// height = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    Board::DEFAULT_WIDTH
}

fn default_height() -> i32 {
    Board::DEFAULT_HEIGHT
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn board(&self) -> Result<Board> {
        self.validate()?;
        Board::new(self.board.width, self.board.height)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_positive("board.width", self.board.width)?;
        validate_positive("board.height", self.board.height)?;
        Ok(())
    }
}
