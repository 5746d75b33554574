//! 井字棋命令行驱动
//!
//! 包含:
//! - 局面分析
//! - 命令行参数
//! - AI 配置加载
//! - AI 对弈

pub mod analysis;
pub mod cli;
pub mod config;
pub mod game;

pub use analysis::{analyze_position, Analysis};
pub use cli::{Cli, Command, DifficultyArg};
pub use config::{load_config, validate_config};
pub use game::MatchRunner;
