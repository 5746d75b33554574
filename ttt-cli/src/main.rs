use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_ai::{AiConfig, AiEngine};
use ttt_cli::{analyze_position, load_config, Cli, Command, DifficultyArg, MatchRunner};
use ttt_core::Notation;

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("ttt=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    match cli.command {
        Command::Best { board } => run_best(&board, file_config),
        Command::Play { x, o, seed, json } => run_play(x, o, seed, json, file_config),
    }
}

/// 输出最佳走法和所有走法的评估值
fn run_best(notation: &str, file_config: Option<AiConfig>) -> Result<()> {
    let board = Notation::parse(notation).with_context(|| format!("无效的局面: {}", notation))?;

    info!(%board, player = %board.current_player(), "开始分析");

    let analysis = analyze_position(&board, file_config.unwrap_or_default());
    let Some(best) = analysis.best else {
        let outcome = board
            .outcome()
            .map(|o| o.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("game over: {}", outcome);
        return Ok(());
    };

    println!(
        "best move: {} (value: {:+}, nodes searched: {})",
        best.mv, best.value, analysis.nodes_searched
    );
    for score in &analysis.scores {
        println!("  {} -> {:+}", score.mv, score.value);
    }
    Ok(())
}

/// AI 自我对弈
fn run_play(
    x: DifficultyArg,
    o: DifficultyArg,
    seed: Option<u64>,
    json: bool,
    file_config: Option<AiConfig>,
) -> Result<()> {
    let engine_for = |difficulty: DifficultyArg, seed: Option<u64>| {
        let mut config = file_config
            .clone()
            .unwrap_or_else(|| AiConfig::from_difficulty(difficulty.into()));
        if seed.is_some() {
            config.seed = seed;
        }
        AiEngine::new(config)
    };

    // 后手使用不同的种子，避免双方随机序列相同
    let runner = MatchRunner::new(
        engine_for(x, seed),
        engine_for(o, seed.map(|s| s.wrapping_add(1))),
    );
    let record = runner.run().context("对局失败")?;

    if json {
        println!("{}", record.to_json().context("序列化棋谱失败")?);
        return Ok(());
    }

    for (ply, mv) in record.moves.iter().enumerate() {
        println!(
            "{:>2}. {} ({}, {}) -> {}",
            ply + 1,
            mv.player,
            mv.cell[0],
            mv.cell[1],
            mv.notation
        );
    }
    match record.result {
        Some(outcome) => println!("result: {}", outcome),
        None => println!("result: unfinished"),
    }
    Ok(())
}
