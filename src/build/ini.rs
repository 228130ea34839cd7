use crate::{
    build::{constants::BUILTIN_POLICIES, patterns},
    error::Result,
};

use fancy_regex::Regex as FancyRegex;
use indexmap::IndexSet;
use ini::{Ini, ParseOption};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub rule_name: String,     // 规则集对应的策略组名称
    pub net_rule_path: String, // 网络规则路径(url)
    pub final_rule: String,    // 最后兜底的规则，如 []FINAL
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectGroup {
    pub name: String,
    pub select_type: String,
    pub url: Option<String>,
    pub interval: Option<u32>,
    pub timeout: Option<u32>,
    pub tolerance: Option<u32>,
    pub proxies: Vec<String>,           // [] 引用的策略组或内置策略
    pub proxies_regexp: Option<String>, // 用于筛选节点的正则表达式
    pub exclude_filter: Option<String>, // exclude-filter= 排除节点的正则表达式
}

/// 模板检查结果
#[derive(Debug, Default)]
pub struct TemplateReport {
    pub rulesets: Vec<RuleSet>,
    pub groups: Vec<SelectGroup>,
    pub dangling: Vec<String>,        // 引用了但没有声明的策略组
    pub invalid_filters: Vec<String>, // 无法编译的正则表达式
}

impl TemplateReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.invalid_filters.is_empty()
    }
}

fn parse_ruleset(value: &str) -> Option<RuleSet> {
    let (rule_name, rule_value) = value.split_once(',')?;
    let rule_value = rule_value.trim();
    let mut ruleset = RuleSet {
        rule_name: rule_name.to_string(),
        ..Default::default()
    };
    if rule_value.contains("[]") {
        ruleset.final_rule = rule_value.to_string();
    } else {
        ruleset.net_rule_path = rule_value.to_string();
    }
    Some(ruleset)
}

fn parse_custom_proxy_group(value: &str) -> Option<SelectGroup> {
    let parts: Vec<&str> = value.split('`').collect();
    if parts.len() < 2 {
        return None;
    }

    let (interval, timeout, tolerance) = parts
        .iter()
        .find_map(|s| patterns::RE_INI_COORDS.captures(s))
        .map(|caps| {
            let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
            (number(1), number(2), number(3))
        })
        .unwrap_or((None, None, None));
    let url = parts
        .iter()
        .find(|ele| {
            ["https://", "http://", "benchmark-url="]
                .iter()
                .any(|p| ele.starts_with(p))
        })
        .map(|s| s.replacen("benchmark-url=", "", 1));
    let group_regular = parts
        .iter()
        .find(|ele| patterns::RE_INI_GROUP.is_match(ele) && !ele.starts_with("exclude-filter="))
        .map(|s| s.to_string());
    let any_regular = parts
        .iter()
        .find(|ele| ele.contains(".*"))
        .map(|s| s.to_string());
    let exclude_filter = parts
        .iter()
        .find_map(|ele| ele.strip_prefix("exclude-filter="))
        .map(str::to_string);
    let square_brackets_rules: Vec<String> = parts
        .iter()
        .filter_map(|s| s.strip_prefix("[]"))
        .map(str::to_string)
        .collect();

    Some(SelectGroup {
        name: parts[0].to_string(),
        select_type: parts[1].to_string(),
        url,
        interval,
        timeout,
        tolerance,
        proxies: square_brackets_rules,
        proxies_regexp: group_regular.or(any_regular),
        exclude_filter,
    })
}

/// 把生成的模板重新按 ini 解析，检查策略组引用是否都已声明、正则是否有效
pub fn inspect_template(content: &str) -> Result<TemplateReport> {
    // 名称可能以引号开头，按原样读取，不做引号与转义处理
    let option = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    };
    let config = Ini::load_from_str_opt(content, option)?;

    let mut report = TemplateReport::default();
    for (_sec, prop) in &config {
        for (key, value) in prop.iter() {
            match key {
                "ruleset" => report.rulesets.extend(parse_ruleset(value)),
                "custom_proxy_group" => report.groups.extend(parse_custom_proxy_group(value)),
                _ => {}
            }
        }
    }

    let declared: IndexSet<&str> = report.groups.iter().map(|g| g.name.as_str()).collect();
    let is_known = |name: &str| declared.contains(name) || BUILTIN_POLICIES.contains(&name);

    let mut dangling: IndexSet<String> = IndexSet::new();
    for group in &report.groups {
        for proxy in &group.proxies {
            if !is_known(proxy) {
                dangling.insert(proxy.clone());
            }
        }
    }
    for ruleset in &report.rulesets {
        if !is_known(&ruleset.rule_name) {
            dangling.insert(ruleset.rule_name.clone());
        }
    }

    let mut invalid_filters: IndexSet<String> = IndexSet::new();
    for group in &report.groups {
        for pattern in [&group.proxies_regexp, &group.exclude_filter]
            .into_iter()
            .flatten()
        {
            if FancyRegex::new(pattern).is_err() {
                invalid_filters.insert(pattern.clone());
            }
        }
    }

    report.dangling = dangling.into_iter().collect();
    report.invalid_filters = invalid_filters.into_iter().collect();
    Ok(report)
}
