//! 以 `/` 分隔的资源路径运算
//!
//! 文件、内嵌资源共用同一套相对路径规则：相对路径作用于当前路径的父目录。

/// 将相对路径应用到给定路径的父目录上
///
/// - `apply_relative_path("xsl/page.xsl", "common.xsl")` → `xsl/common.xsl`
/// - 当前路径不含 `/` 时直接返回相对路径
pub fn apply_relative_path(path: &str, relative_path: &str) -> String {
    match path.rfind('/') {
        Some(index) => {
            let mut new_path = path[..index].to_string();
            if !relative_path.starts_with('/') {
                new_path.push('/');
            }
            new_path.push_str(relative_path);
            new_path
        }
        None => relative_path.to_string(),
    }
}

/// 规范化路径：折叠 `.`、`..` 与重复分隔符
///
/// 超出根部的 `..` 会保留在相对路径开头。
pub fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
