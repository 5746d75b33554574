//! 搜索引擎
//!
//! 实现完整深度的 Minimax 搜索（无剪枝、无置换表）

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ttt_core::{Board, Move, Player};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    /// 完美对弈
    #[default]
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 放弃最优解、随机走子的概率（0.0 ~ 1.0）
    pub blunder_rate: f32,
    /// 随机数种子，为空时使用系统熵
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let blunder_rate = match difficulty {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.1,
            Difficulty::Hard => 0.0,
        };
        Self {
            difficulty,
            blunder_rate,
            seed: None,
        }
    }

    /// 设置随机数种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 是否总是走最优解
    pub fn is_perfect(&self) -> bool {
        self.blunder_rate <= 0.0
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Hard)
    }
}

/// 单个走法的 Minimax 评估值（先手视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub mv: Move,
    pub value: i32,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
    rng: ChaCha8Rng,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            nodes_searched: 0,
            rng,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 完美对弈的引擎
    pub fn perfect() -> Self {
        Self::new(AiConfig::default())
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 按配置选择走法
    ///
    /// 以 `blunder_rate` 的概率随机走一步合法走法，否则走 Minimax 最优解。
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        if board.is_terminal() {
            return None;
        }

        if !self.config.is_perfect() && self.rng.gen::<f32>() < self.config.blunder_rate {
            let moves: Vec<Move> = board.legal_moves().into_iter().collect();
            let random_move = moves.choose(&mut self.rng).copied();
            debug!(difficulty = ?self.config.difficulty, mv = ?random_move, "随机走子");
            return random_move;
        }

        self.best_move(board)
    }

    /// 搜索最佳走法
    ///
    /// 终局时返回 None。先手取后继局面值最大的走法，后手取最小的；
    /// 值相同时保留按行主序最先遇到的走法。
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let scores = self.analyze(board);
        let player = board.current_player();
        let best = select_best(player, &scores);

        debug!(
            %player,
            best = ?best,
            nodes = self.nodes_searched,
            "minimax 搜索完成"
        );

        best.map(|score| score.mv)
    }

    /// 评估所有合法走法（按行主序），终局时返回空列表
    pub fn analyze(&mut self, board: &Board) -> Vec<MoveScore> {
        self.nodes_searched = 0;

        if board.is_terminal() {
            return Vec::new();
        }

        let player = board.current_player();
        board
            .successors()
            .map(|(mv, next)| MoveScore {
                mv,
                value: self.successor_value(player, &next),
            })
            .collect()
    }

    /// 最大化方走棋时的局面值
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes_searched = 0;
        self.max_node(board)
    }

    /// 最小化方走棋时的局面值
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes_searched = 0;
        self.min_node(board)
    }

    /// 获取上一次搜索访问的节点数（不含根节点）
    ///
    /// `max_value`/`min_value` 从传入局面开始计数，包含该局面本身。
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// `player` 走完之后，由对手走棋的后继局面值
    fn successor_value(&mut self, player: Player, next: &Board) -> i32 {
        if player.is_maximizer() {
            self.min_node(next)
        } else {
            self.max_node(next)
        }
    }

    fn max_node(&mut self, board: &Board) -> i32 {
        self.nodes_searched += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MIN;
        for (_, next) in board.successors() {
            value = value.max(self.min_node(&next));
        }
        value
    }

    fn min_node(&mut self, board: &Board) -> i32 {
        self.nodes_searched += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MAX;
        for (_, next) in board.successors() {
            value = value.min(self.max_node(&next));
        }
        value
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::perfect()
    }
}

/// 从评估结果中选出对 `player` 最优的走法
///
/// 先手取最大值，后手取最小值；值相同时保留最先出现的走法。
pub fn select_best(player: Player, scores: &[MoveScore]) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for &score in scores {
        let improves = match best {
            None => true,
            Some(current) if player.is_maximizer() => score.value > current.value,
            Some(current) => score.value < current.value,
        };
        if improves {
            best = Some(score);
        }
    }
    best
}

/// 完美对弈下的最佳走法，终局时返回 None
pub fn best_move(board: &Board) -> Option<Move> {
    AiEngine::perfect().best_move(board)
}

/// 最大化方走棋时的局面值
pub fn max_value(board: &Board) -> i32 {
    AiEngine::perfect().max_value(board)
}

/// 最小化方走棋时的局面值
pub fn min_value(board: &Board) -> i32 {
    AiEngine::perfect().min_value(board)
}
