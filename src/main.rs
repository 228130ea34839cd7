mod build;
mod error;
mod utils;

use build::{constants, download, ini as MyIni, template};
use chrono::Utc;
use clap::{CommandFactory, Parser, error::ErrorKind};
use error::Result;
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};
use utils::{filename, read};

/// 功能：下载 clash 配置，根据其中的 rule-providers 与 proxy-groups 生成 OpenClash 使用的 ini 订阅模板。
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    /// 源 clash 配置，网络地址或本地文件路径
    #[arg(short = 'u', long, default_value = constants::SOURCE_YAML_URL)]
    source: String,

    /// 输出目录，未指定时使用 GITHUB_WORKSPACE，否则为当前目录
    #[arg(short = 'd', long, env = "GITHUB_WORKSPACE", default_value = ".")]
    output_dir: String,

    /// 输出的 ini 文件名
    #[arg(short = 'o', long, default_value = constants::OUTPUT_INI_FILE)]
    output_file: String,

    /// 下载超时时间（秒）
    #[arg(short = 't', long, value_name = "seconds", default_value_t = 30)]
    timeout: u64,

    /// 模板更新时间使用的时区（相对 UTC 的小时数）
    #[arg(long, value_name = "hours", default_value_t = 8, allow_negative_numbers = true)]
    utc_offset: i32,

    /// 除更新时间外内容无变化时不写入文件
    #[arg(long)]
    skip_unchanged: bool,

    /// 输出到终端而不写入文件
    #[arg(long)]
    stdout: bool,
}

fn log_report(report: &MyIni::TemplateReport) {
    info!(
        "模板共 {} 条规则集，{} 个策略组",
        report.rulesets.len(),
        report.groups.len()
    );
    for ruleset in &report.rulesets {
        debug!(
            "ruleset {} -> {}{}",
            ruleset.rule_name, ruleset.net_rule_path, ruleset.final_rule
        );
    }
    for group in &report.groups {
        debug!(
            "group {} [{}] url={:?} interval={:?} timeout={:?} tolerance={:?}",
            group.name, group.select_type, group.url, group.interval, group.timeout, group.tolerance
        );
    }
    if !report.is_clean() {
        for name in &report.dangling {
            warn!("策略组未声明: {}", name);
        }
        for pattern in &report.invalid_filters {
            warn!("无效的正则表达式: {}", pattern);
        }
    }
}

async fn run(cli: Args) -> Result<()> {
    let start_time = Instant::now();

    let raw_bytes = download::fetch_source(&cli.source, Duration::from_secs(cli.timeout)).await?;
    let config = read::parse_source(&read::decode_text(&raw_bytes))?;
    info!(
        "解析完成：rule-providers {} 个，proxy-groups {} 个",
        config.rule_providers.len(),
        config.proxy_groups.len()
    );

    let meta = template::TemplateMeta {
        source_url: cli.source.clone(),
        update_time: template::format_update_time(Utc::now(), cli.utc_offset)?,
    };
    let content = template::render_template(&config, &meta);

    match MyIni::inspect_template(&content) {
        Ok(report) => log_report(&report),
        Err(e) => warn!("模板检查失败，跳过: {}", e),
    }

    if cli.stdout {
        print!("{}", content);
        return Ok(());
    }

    let output_path = filename::resolve_output_path(&cli.output_dir, &cli.output_file);
    let outcome = filename::write_template(&output_path, &content, cli.skip_unchanged)?;
    match outcome {
        filename::WriteOutcome::Unchanged => {
            info!("{} 内容无变化，未写入", output_path.display())
        }
        _ => info!("成功！转换后的模板已保存到: {}", output_path.display()),
    }
    info!("耗时: {:?}", start_time.elapsed());

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Args::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        let _ = Args::command().print_help();
        println!();
        std::process::exit(1);
    });

    info!("开始执行转换...");
    if let Err(e) = run(cli).await {
        error!("错误: 无法完成转换. {}", e);
        std::process::exit(1);
    }
}
