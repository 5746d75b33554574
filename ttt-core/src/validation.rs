//! 局面可达性验证

use crate::board::Board;
use crate::constants::WINNING_LINES;
use crate::piece::Player;

/// 局面验证结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardValidation {
    /// 使局面不可达的错误
    pub errors: Vec<String>,
}

impl BoardValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 验证局面能否从空棋盘经正常对局到达
pub fn validate_board(board: &Board) -> BoardValidation {
    let mut result = BoardValidation::default();

    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    // 先手方棋子数等于或比后手方多一个
    if x_count < o_count || x_count > o_count + 1 {
        result.errors.push(format!(
            "mark counts X={} O={} violate turn order",
            x_count, o_count
        ));
    }

    let x_won = has_line(board, Player::X);
    let o_won = has_line(board, Player::O);

    if x_won && o_won {
        result.errors.push("both players own a winning line".to_string());
    } else if x_won && x_count != o_count + 1 {
        // 先手获胜时最后一步必然是先手走的
        result.errors.push("X won but O has moved since".to_string());
    } else if o_won && x_count != o_count {
        result.errors.push("O won but X has moved since".to_string());
    }

    result
}

fn has_line(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}
