//! AI 配置加载
//!
//! 从 JSON 文件读取 `AiConfig`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ttt_ai::AiConfig;

/// 从 JSON 文件加载 AI 配置
pub fn load_config(path: &Path) -> Result<AiConfig> {
    if !path.exists() {
        anyhow::bail!("配置文件不存在: {:?}", path);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("读取配置文件失败: {:?}", path))?;

    let config: AiConfig = serde_json::from_str(&content)
        .with_context(|| format!("解析配置文件失败: {:?}", path))?;

    validate_config(&config)?;
    tracing::debug!(?config, "已加载配置");
    Ok(config)
}

/// 校验配置取值范围
pub fn validate_config(config: &AiConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.blunder_rate) {
        anyhow::bail!(
            "blunder_rate 必须在 0.0 到 1.0 之间，实际为 {}",
            config.blunder_rate
        );
    }
    Ok(())
}
