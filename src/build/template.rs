use crate::{
    build::{
        constants::{
            INI_FOOTER, INI_HEADER_BODY, INI_HEADER_TITLE, INI_NODE_GROUPS_HEADER,
            INI_POLICY_GROUPS_HEADER,
        },
        groups, rules,
    },
    error::{Error, Result},
    utils::read::SourceConfig,
};
use chrono::{DateTime, FixedOffset, Utc};

/// 模板头部需要填入的信息
#[derive(Debug, Clone)]
pub struct TemplateMeta {
    pub source_url: String,
    pub update_time: String,
}

/// 把 UTC 时间换算到指定时区，格式如 `2026-10-19 20:00:00 UTC+08:00`
pub fn format_update_time(now: DateTime<Utc>, offset_hours: i32) -> Result<String> {
    let offset = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or(Error::InvalidOffset(offset_hours))?;
    Ok(now
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S UTC%:z")
        .to_string())
}

// 源地址与时间原样填入，不再做二次替换
fn render_header(meta: &TemplateMeta) -> String {
    format!(
        "{}\n; 源文件: {}\n; 最后更新时间: {}\n{}",
        INI_HEADER_TITLE, meta.source_url, meta.update_time, INI_HEADER_BODY
    )
}

/// 拼接最终 ini 内容：头部、规则集、业务分流组、节点组、尾部
pub fn render_template(config: &SourceConfig, meta: &TemplateMeta) -> String {
    let header_part = render_header(meta);
    let rulesets_part = rules::generate_rulesets(config).join("\n");
    let policy_groups_part = format!(
        "{}\n{}",
        INI_POLICY_GROUPS_HEADER,
        groups::generate_policy_groups(config).join("\n")
    );
    let node_groups_part = format!("{}\n{}", INI_NODE_GROUPS_HEADER, groups::render_node_groups());

    format!(
        "{}\n{}\n{}\n{}\n{}",
        header_part, rulesets_part, policy_groups_part, node_groups_part, INI_FOOTER
    )
}
