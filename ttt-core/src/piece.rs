//! 玩家与格子定义

use serde::{Deserialize, Serialize};

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手（最大化方）
    X,
    /// 后手（最小化方）
    O,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 该玩家落子后格子的状态
    pub fn mark(&self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// 是否为最大化方
    pub fn is_maximizer(&self) -> bool {
        *self == Player::X
    }

    /// 获取记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空
    #[default]
    Empty,
    /// 先手标记
    X,
    /// 后手标记
    O,
}

impl Cell {
    /// 占据该格的玩家
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 获取记谱字符（空格为 `_`）
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '_' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}
