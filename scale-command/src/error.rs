//! 命令解析统一错误定义
//!
//! 本库唯一的失败场景：输入文本不在已知命令名集合内。
//! 错误信息始终携带原始输入，便于调用方上报未识别的文本。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    /// 命令名不在已知集合内（精确匹配失败）
    #[error("invalid command string: {name}")]
    InvalidCommand { name: String },
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;
