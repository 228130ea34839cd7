use crate::{
    build::{
        constants::{
            BASE_POLICY, BLOCK_GROUP, HEALTH_CHECK_URL, OTHER_EXCLUDE_KEYWORDS, OTHER_REGION,
            REGIONS, TEST_GROUP,
        },
        sort as MySort,
    },
    utils::read::SourceConfig,
};
use log::debug;
use serde_yaml::Value as YamlValue;

const MERGE_KEY: &str = "<<";

// 自动测速参数（interval,timeout,tolerance）与故障转移参数（interval,timeout）
const URL_TEST_PARAMS: &str = "300,5,50";
const FALLBACK_PARAMS: &str = "300,5";

// 地区组名称后缀
const MANUAL: &str = "手动";
const AUTO: &str = "自动";
const FALLBACK: &str = "故转";

/// 判断代理组是否通过 `<<: *anchor` 继承了公共模板，且合并后类型为 select
fn uses_default_template(group: &YamlValue) -> bool {
    let inherits = group
        .as_mapping()
        .is_some_and(|map| map.contains_key(MERGE_KEY));
    if !inherits {
        return false;
    }

    let mut merged = group.clone();
    if let Err(e) = merged.apply_merge() {
        debug!("合并键无法展开: {}", e);
        return false;
    }
    merged.get("type").and_then(YamlValue::as_str) == Some("select")
}

/// 从 proxy-groups 生成业务分流策略组，附加 Block 与 Test，去重并排序
///
/// 凡是带有 `<<` 合并键、合并后类型为 select 的代理组都会输出一行。
/// 旧版脚本在 YAML 加载后按字符串查找 `<<: *default`，该文本已不存在，
/// 实际只会输出 Block 与 Test；此处按合并键判断，输出会比旧版多出这些业务分流组。
pub fn generate_policy_groups(config: &SourceConfig) -> Vec<String> {
    let mut groups: Vec<String> = config
        .proxy_groups
        .iter()
        .filter_map(|group| {
            let group_name = group.get("name").and_then(YamlValue::as_str)?;
            if group_name.is_empty() || !uses_default_template(group) {
                return None;
            }
            Some(format!("custom_proxy_group={}{}", group_name, BASE_POLICY))
        })
        .collect();

    groups.push(format!("custom_proxy_group={}`select`[]REJECT", BLOCK_GROUP));
    groups.push(format!("custom_proxy_group={}{}", TEST_GROUP, BASE_POLICY));

    MySort::sort_unique(groups)
}

fn fallback_line(region: &str) -> String {
    format!(
        "custom_proxy_group={r}-{FALLBACK}`fallback`[]{r}-{MANUAL}`[]{r}-{AUTO}`{HEALTH_CHECK_URL}`{FALLBACK_PARAMS}",
        r = region
    )
}

fn region_section(region: &str, filter: &str) -> String {
    [
        format!("; --- {}组 (手动->自动->故障转移) ---", region),
        fallback_line(region),
        format!("custom_proxy_group={region}-{MANUAL}`select`{filter}"),
        format!(
            "custom_proxy_group={region}-{AUTO}`url-test`{filter}`{HEALTH_CHECK_URL}`{URL_TEST_PARAMS}"
        ),
    ]
    .join("\n")
}

fn other_section(exclude: &str) -> String {
    [
        format!("; --- {}地区组 (手动->自动->故障转移) ---", OTHER_REGION),
        fallback_line(OTHER_REGION),
        format!("custom_proxy_group={OTHER_REGION}-{MANUAL}`select`.*`exclude-filter={exclude}"),
        format!(
            "custom_proxy_group={OTHER_REGION}-{AUTO}`url-test`.*`{HEALTH_CHECK_URL}`{URL_TEST_PARAMS}`exclude-filter={exclude}"
        ),
    ]
    .join("\n")
}

/// 生成固定的节点分组和 Fallback 策略组
pub fn render_node_groups() -> String {
    let builtin_exclude = "^(DIRECT|REJECT)$";
    let mut sections = vec![[
        "; --- 全局节点组 ---".to_string(),
        format!("custom_proxy_group=所有-{MANUAL}`select`.*`exclude-filter={builtin_exclude}"),
        format!(
            "custom_proxy_group=所有-{AUTO}`url-test`.*`{HEALTH_CHECK_URL}`{URL_TEST_PARAMS}`exclude-filter={builtin_exclude}"
        ),
    ]
    .join("\n")];

    for region in REGIONS {
        let filter = format!("({})", region.keywords.join("|"));
        sections.push(region_section(region.name, &filter));
    }

    let other_exclude = format!("^(DIRECT|REJECT|{})$", OTHER_EXCLUDE_KEYWORDS.join("|"));
    sections.push(other_section(&other_exclude));

    sections.join("\n\n")
}
