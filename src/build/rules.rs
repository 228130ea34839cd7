use crate::{
    build::{
        constants::{DOMAIN_MARKER, MRS_TO_LIST, PROXY_DOMAIN_REWRITES},
        sort as MySort,
    },
    utils::read::SourceConfig,
};
use log::debug;
use serde_yaml::Value as YamlValue;

/// 去掉代理加速域名，并把已知的 .mrs 规则集换成 .list 地址
pub fn rewrite_url(url: &str) -> String {
    let mut url = url.to_string();
    for (from, to) in PROXY_DOMAIN_REWRITES {
        url = url.replace(from, to);
    }

    if url.ends_with(".mrs") {
        if let Some((_, list_url)) = MRS_TO_LIST.iter().find(|(key, _)| url.contains(key)) {
            url = list_url.to_string();
        }
    }

    url
}

// 'ChatGPT / Domain' -> 'ChatGPT'
fn name_key(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// 从 rule-providers 生成 ruleset 行，只保留域名规则，去重并排序
pub fn generate_rulesets(config: &SourceConfig) -> Vec<String> {
    let rulesets: Vec<String> = config
        .rule_providers
        .iter()
        .filter_map(|(name, details)| {
            let url = details
                .get("url")
                .and_then(YamlValue::as_str)
                .map(rewrite_url)
                .unwrap_or_default();

            if name.contains(DOMAIN_MARKER) && !url.is_empty() {
                Some(format!("ruleset={},{}", name_key(name), url))
            } else {
                debug!("跳过规则集: {}", name);
                None
            }
        })
        .collect();

    MySort::sort_unique(rulesets)
}
