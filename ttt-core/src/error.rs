//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 目标格子已被占用
    #[error("Cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: u8, col: u8 },

    /// 无效的棋盘记谱字符串
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 不可能通过正常对局到达的局面
    #[error("Unreachable position: {reason}")]
    UnreachablePosition { reason: String },

    /// 对局已结束
    #[error("Game is already over")]
    GameOver,
}

/// 棋谱记录错误
#[derive(Error, Debug)]
pub enum RecordError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 棋谱中的走法不合法
    #[error("Invalid move #{index} in record: {source}")]
    IllegalMove {
        index: usize,
        #[source]
        source: GameError,
    },

    /// 走法记录与重放结果不一致
    #[error("Move #{index} does not match the replayed game: {reason}")]
    InconsistentMove { index: usize, reason: String },

    /// 坐标越界
    #[error("Move #{index} is out of bounds: ({row}, {col})")]
    OutOfBounds { index: usize, row: u8, col: u8 },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
