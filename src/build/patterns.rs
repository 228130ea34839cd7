use once_cell::sync::Lazy;
use regex::Regex;

// 匹配测速参数: "300,5,50"、"300,5"、"300,,50" 或 "300"（依次为 interval、timeout、tolerance）
pub static RE_INI_COORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:,(\d*))?(?:,(\d+))?$").unwrap());

// 匹配 (||||) 这种 正则表达式的字符串，粗略判断是否为正则表达式
pub static RE_INI_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^|()]+(\|[^|()]+)*)\)").unwrap());

// 匹配模板中的更新时间行
pub static RE_UPDATE_TIME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^; 最后更新时间: .*$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        let caps = RE_INI_COORDS.captures("300,5,50").unwrap();
        assert_eq!(&caps[1], "300");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("5"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("50"));

        let caps = RE_INI_COORDS.captures("300,5").unwrap();
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("5"));
        assert!(caps.get(3).is_none());

        let caps = RE_INI_COORDS.captures("300,,50").unwrap();
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some(""));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("50"));

        assert!(RE_INI_COORDS.is_match("180"));
        assert!(!RE_INI_COORDS.is_match("select"));
        assert!(!RE_INI_COORDS.is_match("http://www.gstatic.com/generate_204"));
    }

    #[test]
    fn test_group_regex() {
        assert!(RE_INI_GROUP.is_match("(香港|HK|Hong Kong)"));
        assert!(!RE_INI_GROUP.is_match("[]DIRECT"));
        assert!(!RE_INI_GROUP.is_match(".*"));
    }
}
