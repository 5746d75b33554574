//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ttt_ai::Difficulty;

/// 井字棋 Minimax 求解器
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Tic-tac-toe solver using exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AI 配置文件 (JSON)，双方共用，优先于难度参数
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 给出指定局面的最佳走法和所有走法的评估值
    Best {
        /// 棋盘记谱，例如 "XX_/OO_/___"
        board: String,
    },

    /// 两个 AI 从空棋盘对弈
    Play {
        /// 先手难度
        #[arg(long, value_enum, default_value = "hard")]
        x: DifficultyArg,

        /// 后手难度
        #[arg(long, value_enum, default_value = "hard")]
        o: DifficultyArg,

        /// 随机数种子
        #[arg(long)]
        seed: Option<u64>,

        /// 以 JSON 输出棋谱
        #[arg(long)]
        json: bool,
    },
}

/// 命令行难度参数
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best() {
        let cli = Cli::try_parse_from(["ttt", "best", "XX_/OO_/___"]).unwrap();
        match cli.command {
            Command::Best { board } => assert_eq!(board, "XX_/OO_/___"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["ttt", "play"]).unwrap();
        match cli.command {
            Command::Play { x, o, seed, json } => {
                assert_eq!(x, DifficultyArg::Hard);
                assert_eq!(o, DifficultyArg::Hard);
                assert_eq!(seed, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_options() {
        let cli = Cli::try_parse_from([
            "ttt", "play", "--x", "easy", "--seed", "9", "--json", "--config", "ai.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ai.json")));
        match cli.command {
            Command::Play { x, seed, json, .. } => {
                assert_eq!(Difficulty::from(x), Difficulty::Easy);
                assert_eq!(seed, Some(9));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
