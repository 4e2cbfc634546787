// apps/fa_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 验证 JSON 配置文件：非法 JSON、未知赛车型号与越界参数都以
//! 验证消息的形式呈现，不会让进程崩溃。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, warn};

use fa_io::parse_setup;
use fa_model::{CarProfile, SimulationParameters};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径
    #[arg(short, long)]
    pub setup: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("检查配置文件: {}", args.setup.display());

    let mut result = ValidationResult::default();
    validate_setup(&args.setup, &mut result)?;
    print_validation_result(&result, args.strict)
}

fn validate_setup(path: &PathBuf, result: &mut ValidationResult) -> Result<()> {
    if !path.exists() {
        result.add_error(format!("配置文件不存在: {}", path.display()));
        return Ok(());
    }

    let content = std::fs::read_to_string(path).context("无法读取配置文件")?;

    let patch = match parse_setup(&content) {
        Ok(p) => p,
        Err(e) => {
            result.add_error(format!("JSON 解析错误: {}", e));
            return Ok(());
        }
    };

    if patch.is_empty() {
        result.add_warning("配置不含任何有效字段，应用后参数不变");
    }

    // 车速检查
    if let Some(speed) = patch.speed_kmh {
        if !speed.is_finite() || speed <= 0.0 {
            result.add_error(format!("车速必须为正的有限值: {}", speed));
        } else if speed > 400.0 {
            result.add_warning(format!("车速 {} km/h 超出常规范围", speed));
        }
    }

    // 角度检查
    if let Some(angle) = patch.angle_deg {
        if !angle.is_finite() {
            result.add_error(format!("角度必须有限: {}", angle));
        } else if !(0.0..=45.0).contains(&angle) {
            result.add_error(format!("角度 {}° 超出范围 [0, 45]", angle));
        }
    }

    // 型号检查：导入本身不拒绝未知型号，但验证命令提前报告
    if let Some(car) = patch.car.as_deref() {
        if car.parse::<CarProfile>().is_err() {
            result.add_error(format!(
                "未知赛车型号 '{}', 已知: {:?}",
                car,
                CarProfile::ALL.map(|c| c.display_name())
            ));
        }
    }

    // 应用到默认参数后整体校验
    if result.is_ok() {
        let mut params = SimulationParameters::default();
        patch.apply_to(&mut params);
        if let Err(e) = params.validate() {
            result.add_error(format!("合并后参数无效: {}", e));
        }
        println!("  ✓ 配置文件格式有效");
    }

    Ok(())
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    let success = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
