//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 所有获胜连线（按行主序索引）
///
/// 扫描顺序固定：三行（从上到下）、三列（从左到右）、主对角线、副对角线。
/// `Board::winner` 返回按此顺序找到的第一条完整连线的所有者。
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // 行
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 列
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 对角线
    [0, 4, 8],
    [2, 4, 6],
];

/// 先手方获胜的效用值
pub const UTILITY_X_WINS: i32 = 1;

/// 后手方获胜的效用值
pub const UTILITY_O_WINS: i32 = -1;

/// 和棋（或未结束）的效用值
pub const UTILITY_DRAW: i32 = 0;
