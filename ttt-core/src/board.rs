//! 棋盘状态与规则

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, UTILITY_DRAW, UTILITY_O_WINS, UTILITY_X_WINS, WINNING_LINES};
use crate::error::{GameError, Result};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Cell, Player};

/// 终局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方获胜
    Win(Player),
    /// 和棋
    Draw,
}

impl Outcome {
    /// 从先手方视角的效用值
    pub fn utility(&self) -> i32 {
        match self {
            Outcome::Win(Player::X) => UTILITY_X_WINS,
            Outcome::Win(Player::O) => UTILITY_O_WINS,
            Outcome::Draw => UTILITY_DRAW,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// 3x3 棋盘
///
/// 值类型：走子产生新棋盘，原棋盘不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// 索引为 row * 3 + col
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 从行主序的格子数组创建棋盘（不校验局面是否可达）
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 所有格子（行主序）
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// 获取指定位置的格子
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.to_index()]
    }

    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.to_index()] = cell;
    }

    /// 统计某方的棋子数
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// 是否已无空格
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 当前走子方
    ///
    /// 棋子较少的一方走棋，数量相同时先手走棋。
    /// 不校验局面是否可达。
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// 所有合法走法
    pub fn legal_moves(&self) -> BTreeSet<Move> {
        MoveGenerator::legal_moves(self)
    }

    /// 所有合法走法及对应的后继局面（按行主序）
    ///
    /// 走法均取自空格，直接落子，不经过 `apply_move` 的占用检查。
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> {
        let board = *self;
        let mark = board.current_player().mark();
        board.legal_moves().into_iter().map(move |mv| {
            let mut next = board;
            next.set(mv, mark);
            (mv, next)
        })
    }

    /// 走子，返回新棋盘
    ///
    /// 目标格子非空时返回 [`GameError::OccupiedCell`]。
    pub fn apply_move(&self, mv: Move) -> Result<Board> {
        if !self.get(mv).is_empty() {
            return Err(GameError::OccupiedCell {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let player = self.current_player();
        let mut next = *self;
        next.set(mv, player.mark());
        tracing::trace!(%player, %mv, "apply move");
        Ok(next)
    }

    /// 获胜方
    ///
    /// 按 [`WINNING_LINES`] 的顺序扫描，返回第一条完整连线的所有者。
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let player = self.cells[a].player()?;
            if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                Some(player)
            } else {
                None
            }
        })
    }

    /// 对局是否结束（有人获胜或棋盘已满）
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 终局结果，未结束时返回 None
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Win(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// 效用值：先手胜 +1，后手胜 -1，其余为 0
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(player) => Outcome::Win(player).utility(),
            None => UTILITY_DRAW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Cell::{Empty as E, O, X};

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.legal_moves().len(), 9);
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_apply_move_does_not_mutate() {
        let board = Board::empty().apply_move(mv(1, 1)).unwrap();
        let before = board;

        for m in board.legal_moves() {
            let next = board.apply_move(m).unwrap();
            assert_eq!(board, before);
            assert_ne!(next, board);
            assert_eq!(next.get(m), Cell::O);
        }
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::empty().apply_move(mv(0, 0)).unwrap();
        let err = board.apply_move(mv(0, 0)).unwrap_err();
        assert_eq!(err, GameError::OccupiedCell { row: 0, col: 0 });
    }

    #[test]
    fn test_current_player_alternates() {
        let sequence = [mv(1, 1), mv(0, 0), mv(2, 2), mv(0, 2), mv(0, 1), mv(2, 1)];
        let mut board = Board::empty();
        let mut expected = Player::X;

        for m in sequence {
            assert_eq!(board.current_player(), expected);
            board = board.apply_move(m).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(board.current_player(), expected);
    }

    #[test]
    fn test_current_player_equal_counts() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(board.current_player(), Player::X);

        let board = Board::from_cells([X, X, E, O, E, E, E, E, E]);
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_legal_moves_scenario() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let expected: BTreeSet<_> = [mv(0, 2), mv(1, 2), mv(2, 0), mv(2, 1), mv(2, 2)]
            .into_iter()
            .collect();
        assert_eq!(board.legal_moves(), expected);
    }

    #[test]
    fn test_winner_lines() {
        // 行
        let board = Board::from_cells([E, E, E, O, O, E, X, X, X]);
        assert_eq!(board.winner(), Some(Player::X));

        // 列
        let board = Board::from_cells([X, O, X, E, O, X, E, O, E]);
        assert_eq!(board.winner(), Some(Player::O));

        // 主对角线
        let board = Board::from_cells([X, O, E, O, X, E, E, E, X]);
        assert_eq!(board.winner(), Some(Player::X));

        // 副对角线
        let board = Board::from_cells([X, X, O, X, O, E, O, E, E]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_successors_match_apply_move() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let successors: Vec<_> = board.successors().collect();

        assert_eq!(successors.len(), 5);
        for (m, next) in successors {
            assert_eq!(next, board.apply_move(m).unwrap());
        }
        assert_eq!(board.successors().next().map(|(m, _)| m), Some(mv(0, 2)));
    }

    #[test]
    fn test_successors_of_full_board() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(board.successors().count(), 0);
    }

    #[test]
    fn test_winner_scan_order_on_synthetic_board() {
        // 双方都有连线时，按扫描顺序先找到的一方胜出
        let board = Board::from_cells([X, X, X, O, O, O, E, E, E]);
        assert_eq!(board.winner(), Some(Player::X));

        let board = Board::from_cells([O, O, O, X, X, X, E, E, E]);
        assert_eq!(board.winner(), Some(Player::O));

        // 列从左到右
        let board = Board::from_cells([O, X, E, O, X, E, O, X, E]);
        assert_eq!(board.winner(), Some(Player::O));
        let board = Board::from_cells([E, X, O, E, X, O, E, X, O]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_is_terminal() {
        // 平局满盘
        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(draw.is_terminal());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.outcome(), Some(Outcome::Draw));
        assert_eq!(draw.utility(), 0);

        // 先手三连
        let x_wins = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert!(x_wins.is_terminal());
        assert_eq!(x_wins.utility(), 1);
        assert_eq!(x_wins.outcome(), Some(Outcome::Win(Player::X)));

        // 后手三连
        let o_wins = Board::from_cells([X, X, O, X, O, E, O, E, E]);
        assert!(o_wins.is_terminal());
        assert_eq!(o_wins.utility(), -1);

        // 有空格且无连线
        let open = Board::from_cells([X, O, X, E, O, E, E, X, E]);
        assert!(!open.is_terminal());
        assert_eq!(open.utility(), 0);
        assert_eq!(open.outcome(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Some(Outcome::Win(Player::X)));
    }
}
