//! 命令（Command）词汇表
//!
//! 将文本命令名解析为封闭的命令枚举，供接入层（串口协议、配置文件等）
//! 把人类可读的命令名翻译成类型安全的命令值：
//! - 五个固定命令名，精确匹配（不裁剪空白、不折叠大小写）；
//! - 映射表为编译期常量，只读共享，可跨线程并发读取；
//! - 未知命令名统一以 [`CommandError::InvalidCommand`] 失败。
//!
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, CommandResult};

/// 设备命令（封闭枚举）
///
/// 序列化采用与命令名一致的 snake_case 文本（如 `"timed_measure"`），
/// 与 [`resolve`] 接受的输入保持同一套词汇。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// 空命令（不执行任何动作）
    Nothing,
    /// 应答确认
    Acknowledge,
    /// 去皮（将当前载荷计为零点）
    Tare,
    /// 校准
    Calibrate,
    /// 定时测量
    TimedMeasure,
}

/// 命令名到命令的固定映射表（与 [`Command::ALL`] 同序）
static NAME_TABLE: [(&str, Command); 5] = [
    ("nothing", Command::Nothing),
    ("acknowledge", Command::Acknowledge),
    ("tare", Command::Tare),
    ("calibrate", Command::Calibrate),
    ("timed_measure", Command::TimedMeasure),
];

impl Command {
    /// 全部命令，顺序与映射表一致
    pub const ALL: [Command; 5] = [
        Command::Nothing,
        Command::Acknowledge,
        Command::Tare,
        Command::Calibrate,
        Command::TimedMeasure,
    ];

    /// 将命令名解析为命令
    ///
    /// 仅接受五个已知命令名的精确匹配；未知输入返回
    /// [`CommandError::InvalidCommand`]，错误信息携带原始输入。
    ///
    /// # 示例
    ///
    /// ```
    /// use scale_command::command::Command;
    ///
    /// assert_eq!(Command::resolve("tare").unwrap(), Command::Tare);
    /// assert!(Command::resolve("TARE").is_err());
    /// ```
    pub fn resolve(name: &str) -> CommandResult<Command> {
        NAME_TABLE
            .iter()
            .find(|&&(key, _)| key == name)
            .map(|&(_, command)| command)
            .ok_or_else(|| CommandError::InvalidCommand {
                name: name.to_string(),
            })
    }

    /// 命令的稳定名称（常量字符串，不随重构变化），用于日志与显示
    ///
    /// # 示例
    ///
    /// ```
    /// use scale_command::command::Command;
    ///
    /// assert_eq!(Command::TimedMeasure.name(), "timed_measure");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Nothing => "nothing",
            Command::Acknowledge => "acknowledge",
            Command::Tare => "tare",
            Command::Calibrate => "calibrate",
            Command::TimedMeasure => "timed_measure",
        }
    }
}

/// 命令名到命令的完整映射（固定 5 条，只读）
///
/// 用于枚举与自检场景（校验配置、生成帮助文本等）。
///
/// # 示例
///
/// ```
/// use scale_command::command::mapping;
///
/// assert_eq!(mapping().len(), 5);
/// ```
pub fn mapping() -> &'static [(&'static str, Command)] {
    &NAME_TABLE
}

/// 将命令名解析为命令（[`Command::resolve`] 的自由函数形式）
pub fn resolve(name: &str) -> CommandResult<Command> {
    Command::resolve(name)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::resolve(s)
    }
}
