// 默认的源配置地址
pub const SOURCE_YAML_URL: &str =
    "https://raw.githubusercontent.com/liandu2024/little/refs/heads/main/yaml/clash-fallback-all.yaml";

// 输出的 ini 文件名
pub const OUTPUT_INI_FILE: &str = "clash-template.ini";

// 节点组测速地址
pub const HEALTH_CHECK_URL: &str = "http://www.gstatic.com/generate_204";

// 模板头部：标题、源文件与更新时间行之后是固定的规则集说明
pub const INI_HEADER_TITLE: &str = "; === OpenClash 自动转换订阅模板 ===";

pub const INI_HEADER_BODY: &str = "; 本模板由 GitHub Actions 自动生成

; 1、域名规则集
ruleset=国外,https://raw.githubusercontent.com/blackmatrix7/ios_rule_script/master/rule/Clash/Global/Global.list
ruleset=国内,[]FINAL
";

pub const INI_POLICY_GROUPS_HEADER: &str = "\n; 2、策略组 - 业务分流 (为每个域名组创建独立的策略选项)";

pub const INI_NODE_GROUPS_HEADER: &str = "\n; 3、节点策略组 - 按地区筛选与策略整合";

pub const INI_FOOTER: &str = "; 4、启用规则集
enable_rule_generator=true
overwrite_original_rules=true
";

// 规则地址中的代理域名替换，按顺序执行
pub const PROXY_DOMAIN_REWRITES: &[(&str, &str)] = &[
    (
        "gh-proxy.com/raw.githubusercontent.com",
        "raw.githubusercontent.com",
    ),
    ("gh-proxy.com/github.com", "raw.githubusercontent.com"),
];

// .mrs 规则集映射到对应的 .list 地址，取第一个命中的
pub const MRS_TO_LIST: &[(&str, &str)] = &[
    (
        "geosite/openai",
        "https://raw.githubusercontent.com/metacubex/meta-rules-dat/meta/geo/geosite/openai.list",
    ),
    (
        "geosite/netflix",
        "https://raw.githubusercontent.com/metacubex/meta-rules-dat/meta/geo/geosite/netflix.list",
    ),
];

// 只有名称中含有该标记的规则集才会输出
pub const DOMAIN_MARKER: &str = "Domain";

// 业务分流组统一使用的策略选项
pub const BASE_POLICY: &str = "`select`[]DIRECT`[]所有-手动`[]所有-自动`[]香港-故转`[]台湾-故转`[]日本-故转`[]新加坡-故转`[]韩国-故转`[]美国-故转`[]英国-故转`[]其他-故转`[]REJECT";

// 规则中会用到、但源配置里不一定存在的分组
pub const BLOCK_GROUP: &str = "Block";
pub const TEST_GROUP: &str = "Test";

// 不需要声明即可引用的内置策略
pub const BUILTIN_POLICIES: &[&str] = &["DIRECT", "REJECT", "FINAL"];

/// 地区节点组：名称及匹配节点名称的关键字
pub struct Region {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const REGIONS: &[Region] = &[
    Region {
        name: "香港",
        keywords: &["广港", "香港", "HK", "Hong Kong", "🇭🇰", "HongKong"],
    },
    Region {
        name: "台湾",
        keywords: &[
            "广台", "台湾", "台灣", "TW", "Tai Wan", "🇹🇼", "🇨🇳", "TaiWan", "Taiwan",
        ],
    },
    Region {
        name: "日本",
        keywords: &[
            "广日", "日本", "JP", "川日", "东京", "大阪", "泉日", "埼玉", "沪日", "深日", "🇯🇵",
            "Japan",
        ],
    },
    Region {
        name: "新加坡",
        keywords: &["广新", "新加坡", "SG", "坡", "狮城", "🇸🇬", "Singapore"],
    },
    Region {
        name: "韩国",
        keywords: &["广韩", "韩国", "韓國", "KR", "首尔", "春川", "🇰🇷", "Korea"],
    },
    Region {
        name: "美国",
        keywords: &[
            "广美",
            "US",
            "美国",
            "纽约",
            "波特兰",
            "达拉斯",
            "俄勒",
            "凤凰城",
            "费利蒙",
            "洛杉",
            "圣何塞",
            "圣克拉",
            "西雅",
            "芝加",
            "🇺🇸",
            "United States",
        ],
    },
    Region {
        name: "英国",
        keywords: &["英国", "英", "伦敦", "UK", "United Kingdom", "🇬🇧", "London"],
    },
];

// 兜底地区，收纳所有未被上面地区匹配的节点
pub const OTHER_REGION: &str = "其他";

// 兜底地区排除的关键字，与已发布模板中的顺序保持一致（英国部分与英国组的顺序不同）
pub const OTHER_EXCLUDE_KEYWORDS: &[&str] = &[
    "广港",
    "香港",
    "HK",
    "Hong Kong",
    "🇭🇰",
    "HongKong",
    "广台",
    "台湾",
    "台灣",
    "TW",
    "Tai Wan",
    "🇹🇼",
    "🇨🇳",
    "TaiWan",
    "Taiwan",
    "广日",
    "日本",
    "JP",
    "川日",
    "东京",
    "大阪",
    "泉日",
    "埼玉",
    "沪日",
    "深日",
    "🇯🇵",
    "Japan",
    "广新",
    "新加坡",
    "SG",
    "坡",
    "狮城",
    "🇸🇬",
    "Singapore",
    "广韩",
    "韩国",
    "韓國",
    "KR",
    "首尔",
    "春川",
    "🇰🇷",
    "Korea",
    "广美",
    "US",
    "美国",
    "纽约",
    "波特兰",
    "达拉斯",
    "俄勒",
    "凤凰城",
    "费利蒙",
    "洛杉",
    "圣何塞",
    "圣克拉",
    "西雅",
    "芝加",
    "🇺🇸",
    "United States",
    "英国",
    "UK",
    "United Kingdom",
    "伦敦",
    "英",
    "London",
    "🇬🇧",
];
