/// 排序并去重：按 Unicode 码点顺序排列（UTF-8 字节序与码点序一致）
pub fn sort_unique(mut lines: Vec<String>) -> Vec<String> {
    lines.sort_unstable();
    lines.dedup(); // 去掉连续重复的元素
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_unique() {
        let lines = vec![
            "custom_proxy_group=油管".to_string(),
            "custom_proxy_group=Apple".to_string(),
            "custom_proxy_group=Block".to_string(),
            "custom_proxy_group=Apple".to_string(),
            "custom_proxy_group=apple".to_string(),
        ];
        assert_eq!(
            sort_unique(lines),
            vec![
                "custom_proxy_group=Apple",
                "custom_proxy_group=Block",
                "custom_proxy_group=apple",
                "custom_proxy_group=油管",
            ]
        );
    }

    #[test]
    fn test_sort_unique_empty() {
        assert!(sort_unique(Vec::new()).is_empty());
    }
}
