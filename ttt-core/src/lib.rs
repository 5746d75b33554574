//! 井字棋规则库
//!
//! 包含:
//! - 棋盘、格子、玩家等核心数据结构
//! - 走法生成、走子、胜负判定与效用值
//! - 局面可达性验证
//! - 棋盘记谱格式
//! - 棋谱记录 (JSON)

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod piece;
mod record;
mod validation;

pub use board::{Board, Outcome};
pub use constants::*;
pub use error::{GameError, RecordError, Result};
pub use moves::{Move, MoveGenerator};
pub use notation::{Notation, EMPTY_NOTATION};
pub use piece::{Cell, Player};
pub use record::{GameRecord, MoveRecord, RECORD_VERSION};
pub use validation::{validate_board, BoardValidation};
