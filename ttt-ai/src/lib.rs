//! 井字棋 AI 引擎
//!
//! 包含:
//! - 完整深度 Minimax 搜索
//! - 难度配置（按概率随机走子）
//! - 走法分析

mod search;

pub use search::{
    best_move, max_value, min_value, select_best, AiConfig, AiEngine, Difficulty, MoveScore,
};
