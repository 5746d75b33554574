//! 棋盘记谱格式
//!
//! 三行以 `/` 分隔，每行三个字符：`X`、`O` 表示棋子，`_` 或 `.` 表示空格。
//!
//! 示例：
//! `XX_/OO_/___`

use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::GameError;
use crate::piece::Cell;
use crate::validation::validate_board;

/// 空棋盘记谱
pub const EMPTY_NOTATION: &str = "___/___/___";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 解析记谱字符串，并校验局面可达
    pub fn parse(notation: &str) -> Result<Board, GameError> {
        let board = Self::parse_unchecked(notation)?;

        let validation = validate_board(&board);
        if !validation.is_valid() {
            return Err(GameError::UnreachablePosition {
                reason: validation.errors.join("; "),
            });
        }

        Ok(board)
    }

    /// 解析记谱字符串，不校验局面可达
    pub fn parse_unchecked(notation: &str) -> Result<Board, GameError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }

        let rows: Vec<&str> = notation.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                cells[row_idx * BOARD_SIZE + col_idx] =
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })?;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// 将棋盘转换为记谱字符串
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Notation::to_string(self))
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::parse(s)
    }
}
