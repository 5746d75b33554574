//! 局面分析
//!
//! `best` 命令的输出：一次 Minimax 分析得到所有走法的评估值和最佳走法。
//! 分析总是完美对弈，不受 `blunder_rate` 影响。

use ttt_ai::{select_best, AiConfig, AiEngine, MoveScore};
use ttt_core::Board;

/// 局面分析结果
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// 最佳走法，终局时为空
    pub best: Option<MoveScore>,
    /// 所有合法走法的评估值（行主序）
    pub scores: Vec<MoveScore>,
    /// 搜索的节点数（不含根节点）
    pub nodes_searched: u64,
}

/// 分析局面
///
/// 配置只用于构造引擎；走法选择不掷骰子。
pub fn analyze_position(board: &Board, config: AiConfig) -> Analysis {
    let mut engine = AiEngine::new(config);
    let scores = engine.analyze(board);
    let best = select_best(board.current_player(), &scores);

    Analysis {
        best,
        scores,
        nodes_searched: engine.nodes_searched(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_ai::Difficulty;
    use ttt_core::{Move, Notation};

    fn board(notation: &str) -> Board {
        Notation::parse(notation).unwrap()
    }

    #[test]
    fn test_analysis_ignores_blunder_rate() {
        let config = AiConfig {
            difficulty: Difficulty::Easy,
            blunder_rate: 1.0,
            seed: Some(1),
        };

        let analysis = analyze_position(&board("XX_/OO_/___"), config);
        let best = analysis.best.unwrap();
        assert_eq!(best.mv, Move::new(0, 2).unwrap());
        assert_eq!(best.value, 1);
        assert_eq!(analysis.nodes_searched, 156);
        assert_eq!(analysis.scores.len(), 5);
    }

    #[test]
    fn test_analysis_for_second_player() {
        let analysis = analyze_position(&board("XX_/OO_/X__"), AiConfig::default());
        let best = analysis.best.unwrap();
        assert_eq!(best.mv, Move::new(1, 2).unwrap());
        assert_eq!(best.value, -1);
    }

    #[test]
    fn test_analysis_of_terminal_board() {
        let analysis = analyze_position(&board("XXX/OO_/___"), AiConfig::default());
        assert_eq!(analysis.best, None);
        assert!(analysis.scores.is_empty());
        assert_eq!(analysis.nodes_searched, 0);
    }
}
