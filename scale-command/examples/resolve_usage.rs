//! 命令词汇表使用示例
//!
//! 展示如何将文本命令名解析为 `Command`，以及如何利用完整映射表
//! 做枚举与帮助文本。
//!
//! 运行示例：
//! ```bash
//! cargo run -p scale-command --example resolve_usage
//! ```

use scale_command::command::{Command, mapping, resolve};

fn main() {
    println!("=== 命令词汇表使用示例 ===\n");

    // 1. 解析已知命令名
    println!("1. 解析已知命令名");
    for name in ["tare", "calibrate", "timed_measure"] {
        match resolve(name) {
            Ok(command) => println!("   {name:?} -> {command:?}"),
            Err(err) => println!("   {name:?} -> {err}"),
        }
    }
    println!();

    // 2. 未知命令名以 InvalidCommand 失败，错误信息携带原始输入
    println!("2. 未知命令名");
    for name in ["TARE", "tar", ""] {
        match resolve(name) {
            Ok(command) => println!("   {name:?} -> {command:?}"),
            Err(err) => println!("   {name:?} -> {err}"),
        }
    }
    println!();

    // 3. 遍历完整映射表（生成帮助文本）
    println!("3. 完整映射表");
    for (name, command) in mapping() {
        println!("   {name:<14} => {command:?}");
    }
    println!();

    // 4. Display 与 FromStr
    println!("4. Display 与 FromStr");
    match "timed_measure".parse::<Command>() {
        Ok(command) => println!("   \"timed_measure\".parse() = {command:?}"),
        Err(err) => println!("   解析失败: {err}"),
    }
    println!("   Command::Tare 的稳定名称: {}", Command::Tare);
}
