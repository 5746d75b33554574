//! 对局控制
//!
//! 两个 AI 引擎从空棋盘对弈到终局

use tracing::info;
use ttt_ai::AiEngine;
use ttt_core::{GameError, GameRecord, Player};

/// AI 对弈
pub struct MatchRunner {
    x_engine: AiEngine,
    o_engine: AiEngine,
    record: GameRecord,
}

impl MatchRunner {
    /// 创建对局，玩家名取自各自的难度
    pub fn new(x_engine: AiEngine, o_engine: AiEngine) -> Self {
        let record = GameRecord::new(
            format!("AI ({:?})", x_engine.config().difficulty),
            format!("AI ({:?})", o_engine.config().difficulty),
        );
        Self {
            x_engine,
            o_engine,
            record,
        }
    }

    /// 当前棋谱
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// 走一步，已终局时返回 false
    pub fn step(&mut self) -> Result<bool, GameError> {
        let board = *self.record.board();
        let engine = match board.current_player() {
            Player::X => &mut self.x_engine,
            Player::O => &mut self.o_engine,
        };

        let Some(mv) = engine.search(&board) else {
            return Ok(false);
        };

        self.record.push(mv)?;
        info!(
            ply = self.record.len(),
            player = %board.current_player(),
            %mv,
            board = %self.record.board(),
            "AI 走子"
        );
        Ok(true)
    }

    /// 下到终局，返回完整棋谱
    pub fn run(mut self) -> Result<GameRecord, GameError> {
        while self.step()? {}

        match self.record.result {
            Some(outcome) => info!(%outcome, plies = self.record.len(), "对局结束"),
            None => tracing::warn!("对局未分出结果"),
        }
        Ok(self.record)
    }
}
