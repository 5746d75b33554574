//! 走法定义和生成

use std::collections::BTreeSet;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 走法：目标格子的 (行, 列) 坐标，均从 0 开始
///
/// 只能通过 [`Move::new`] 构造合法范围内的坐标。
/// 排序为行主序，`legal_moves` 的遍历顺序由此确定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// 创建新走法，坐标越界时返回 None
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新走法（不检查边界，内部使用）
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self::new_unchecked(
                (index / BOARD_SIZE) as u8,
                (index % BOARD_SIZE) as u8,
            ))
        } else {
            None
        }
    }

    /// 所有格子的坐标（行主序）
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT).map(|index| {
            Self::new_unchecked((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成所有合法走法：所有空格的坐标
    ///
    /// 棋盘已满时返回空集合。不检查对局是否已分出胜负。
    pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
        Move::all().filter(|mv| board.get(*mv).is_empty()).collect()
    }
}
