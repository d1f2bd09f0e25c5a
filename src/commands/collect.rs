//! # collect 命令实现
//!
//! 汇总 vaspflow 流水线日志为单个文本文件，便于诊断。
//!
//! ## 功能
//! - 递归扫描工作目录中已知名称的日志文件
//! - 读取每个文件的尾部（限制字节数）
//! - 拼接为带分节标题的单一文本输出
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/progress.rs`
//! - 使用 `walkdir` 遍历目录

use crate::cli::collect::CollectCli;
use crate::error::{Result, RunnerError};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 流水线产出的已知日志文件名
pub const CANDIDATE_NAMES: [&str; 7] = [
    "pipeline.log",
    "pipeline_report.txt",
    "pipeline_checkpoint.json",
    "stdout",
    "stderr",
    "vasp.out",
    "vasp.log",
];

/// 执行 collect 命令
pub fn execute(args: CollectCli) -> Result<()> {
    output::print_header("Collecting vaspflow Logs");

    // 验证工作目录
    if !args.workdir.is_dir() {
        return Err(RunnerError::DirectoryNotFound {
            path: args.workdir.display().to_string(),
        });
    }

    let root = fs::canonicalize(&args.workdir).map_err(|e| RunnerError::FileReadError {
        path: args.workdir.display().to_string(),
        source: e,
    })?;

    // 扫描日志文件
    let files = find_log_files(&root);
    if files.is_empty() {
        return Err(RunnerError::NoFilesFound {
            pattern: CANDIDATE_NAMES.join(", "),
        });
    }

    output::print_info(&format!(
        "Found {} log files under '{}'",
        files.len(),
        root.display()
    ));

    let pb = progress::create_progress_bar(files.len() as u64, "Reading logs");

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        "# vaspflow log summary\nSource directory: {}\n",
        root.display()
    ));

    let mut collected = 0usize;
    for file in &files {
        let rel = file.strip_prefix(&root).unwrap_or(file);

        match read_tail(file, args.max_bytes) {
            Ok(text) => {
                parts.push(format!("\n==== {} ====\n", rel.display()));
                parts.push(text);
                collected += 1;
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!("Skipping {}: {}", rel.display(), e));
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    // 所有候选文件都读取失败时同样视为无可汇总内容
    if collected == 0 {
        return Err(RunnerError::NoFilesFound {
            pattern: CANDIDATE_NAMES.join(", "),
        });
    }

    fs::write(&args.output, parts.join("\n")).map_err(|e| RunnerError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_done(&format!(
        "Wrote {} log sections to '{}'",
        collected,
        args.output.display()
    ));

    Ok(())
}

/// 递归收集已知名称的日志文件，按路径排序去重
pub fn find_log_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_candidate(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files.dedup();
    files
}

/// 检查文件名是否属于已知日志名集合
fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| CANDIDATE_NAMES.contains(&name))
        .unwrap_or(false)
}

/// 读取文件尾部，超出 `max_bytes` 时截断并加提示行
///
/// 按字节截断可能落在多字节字符中间，损坏处由 lossy 解码替换。
pub fn read_tail(path: &Path, max_bytes: u64) -> Result<String> {
    let data = fs::read(path).map_err(|e| RunnerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let max = max_bytes as usize;
    if data.len() > max {
        let tail = &data[data.len() - max..];
        Ok(format!(
            "...(truncated, last {} bytes)\n{}",
            max,
            String::from_utf8_lossy(tail)
        ))
    } else {
        Ok(String::from_utf8_lossy(&data).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pipeline.log"), "top level log").unwrap();

        let pressure_dir = dir.path().join("0_GPa");
        fs::create_dir(&pressure_dir).unwrap();
        fs::write(pressure_dir.join("stderr"), "relax step failed").unwrap();
        fs::write(pressure_dir.join("OUTCAR"), "not a log candidate").unwrap();

        dir
    }

    #[test]
    fn test_find_log_files_filters_candidates() {
        let dir = sample_tree();
        let files = find_log_files(dir.path());

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("pipeline.log")));
        assert!(files.iter().any(|f| f.ends_with("stderr")));
        assert!(!files.iter().any(|f| f.ends_with("OUTCAR")));
    }

    #[test]
    fn test_read_tail_keeps_small_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.log");
        fs::write(&path, "short content").unwrap();

        let text = read_tail(&path, 20_000).unwrap();
        assert_eq!(text, "short content");
    }

    #[test]
    fn test_read_tail_truncates_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.log");
        fs::write(&path, "0123456789abcdef").unwrap();

        let text = read_tail(&path, 6).unwrap();
        assert!(text.starts_with("...(truncated, last 6 bytes)"));
        assert!(text.ends_with("abcdef"));
    }

    #[test]
    fn test_execute_writes_sections() {
        let dir = sample_tree();
        let out = dir.path().join("collected_logs.txt");

        let args = CollectCli {
            workdir: dir.path().to_path_buf(),
            output: out.clone(),
            max_bytes: 20_000,
        };
        execute(args).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("# vaspflow log summary"));
        assert!(content.contains("==== pipeline.log ===="));
        assert!(content.contains(&format!("==== {} ====", Path::new("0_GPa").join("stderr").display())));
        assert!(content.contains("relax step failed"));
        assert!(!content.contains("not a log candidate"));
    }

    #[test]
    fn test_execute_missing_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let args = CollectCli {
            workdir: dir.path().join("no_such_dir"),
            output: dir.path().join("out.txt"),
            max_bytes: 20_000,
        };

        let result = execute(args);
        assert!(matches!(result, Err(RunnerError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_execute_without_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("OUTCAR"), "irrelevant").unwrap();

        let args = CollectCli {
            workdir: dir.path().to_path_buf(),
            output: dir.path().join("out.txt"),
            max_bytes: 20_000,
        };

        let result = execute(args);
        assert!(matches!(result, Err(RunnerError::NoFilesFound { .. })));
    }
}
