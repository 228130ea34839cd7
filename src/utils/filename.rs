use crate::{build::patterns, error::Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// 写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// 拼接输出文件路径
pub fn resolve_output_path<P: AsRef<Path>>(output_dir: P, file_name: &str) -> PathBuf {
    output_dir.as_ref().join(file_name)
}

// 去掉更新时间行后计算 hash，只有时间不同的两份模板视为一致
fn content_hash(content: &str) -> blake3::Hash {
    let body = patterns::RE_UPDATE_TIME_LINE.replace_all(content, "");
    blake3::hash(body.as_bytes())
}

/// 写入模板。skip_unchanged 为 true 时，本地文件与新内容（忽略更新时间）一致则不写入
pub fn write_template<P: AsRef<Path>>(
    path: P,
    content: &str,
    skip_unchanged: bool,
) -> Result<WriteOutcome> {
    let path = path.as_ref();
    if !path.exists() {
        fs::write(path, content)?;
        return Ok(WriteOutcome::Created);
    }

    if skip_unchanged {
        let local_content = fs::read(path)?;
        let local_hash = content_hash(&String::from_utf8_lossy(&local_content));
        if local_hash == content_hash(content) {
            return Ok(WriteOutcome::Unchanged);
        }
    }

    fs::write(path, content)?;
    Ok(WriteOutcome::Updated)
}
