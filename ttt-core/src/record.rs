//! 棋谱记录格式
//!
//! 以 JSON 表示一局完整对局，便于外部驱动程序输出和回放

use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome};
use crate::error::{GameError, RecordError};
use crate::moves::Move;
use crate::notation::Notation;
use crate::piece::Player;

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 走子方
    pub player: Player,
    /// 目标位置 [row, col]
    pub cell: [u8; 2],
    /// 走子后的局面记谱
    pub notation: String,
}

/// 完整的棋谱记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 先手玩家名
    pub x_player: String,
    /// 后手玩家名
    pub o_player: String,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
    /// 对局结果（未结束时为空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
    /// 当前局面
    #[serde(skip)]
    board: Board,
}

impl GameRecord {
    /// 创建新的棋谱记录
    pub fn new(x_player: impl Into<String>, o_player: impl Into<String>) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            x_player: x_player.into(),
            o_player: o_player.into(),
            moves: Vec::new(),
            result: None,
            board: Board::empty(),
        }
    }

    /// 当前局面
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 走子并记录，对局结束后拒绝继续走子
    pub fn push(&mut self, mv: Move) -> Result<(), GameError> {
        if self.board.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.board.current_player();
        let next = self.board.apply_move(mv)?;

        self.moves.push(MoveRecord {
            player,
            cell: [mv.row(), mv.col()],
            notation: Notation::to_string(&next),
        });
        self.board = next;
        self.result = next.outcome();
        Ok(())
    }

    /// 步数
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// 按走法列表从空棋盘重放，返回最终局面
    ///
    /// 每一步的走子方和记谱须与重放结果一致。
    pub fn replay(&self) -> Result<Board, RecordError> {
        let mut board = Board::empty();

        for (index, record) in self.moves.iter().enumerate() {
            let [row, col] = record.cell;
            let mv = Move::new(row, col).ok_or(RecordError::OutOfBounds { index, row, col })?;

            if board.is_terminal() {
                return Err(RecordError::IllegalMove {
                    index,
                    source: GameError::GameOver,
                });
            }

            let player = board.current_player();
            board = board
                .apply_move(mv)
                .map_err(|source| RecordError::IllegalMove { index, source })?;

            if record.player != player {
                return Err(RecordError::InconsistentMove {
                    index,
                    reason: format!("recorded player {}, expected {}", record.player, player),
                });
            }

            let notation = Notation::to_string(&board);
            if record.notation != notation {
                return Err(RecordError::InconsistentMove {
                    index,
                    reason: format!(
                        "recorded board {}, expected {}",
                        record.notation, notation
                    ),
                });
            }
        }

        Ok(board)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 反序列化，并重放走法恢复当前局面
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let mut record: GameRecord = serde_json::from_str(json)?;
        record.board = record.replay()?;
        record.result = record.board.outcome();
        Ok(record)
    }
}
