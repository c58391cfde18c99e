//! 称重仪表命令词汇基础库（scale-command）
//!
//! 提供称重设备接入层通用的命令词汇与解析能力：
//! - 封闭的命令枚举（[`command::Command`]）：nothing / acknowledge / tare /
//!   calibrate / timed_measure 五种命令；
//! - 命令名解析（[`command::resolve`]）：精确匹配，未知输入以
//!   `InvalidCommand` 失败并携带原始文本；
//! - 完整映射表（[`command::mapping`]）：用于枚举、校验与帮助文本。
//!
//! 本 crate 不涉及命令参数解析、命令执行与任何 I/O，仅定义词汇表与
//! 最小必要的错误类型，以便在不同接入实现（串口、网络等）上复用。
//!
pub mod command;
pub mod error;

pub use command::{Command, mapping, resolve};
pub use error::{CommandError, CommandResult};
