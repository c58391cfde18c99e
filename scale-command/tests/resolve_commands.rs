use anyhow::Result as AnyResult;
use scale_command::command::{Command, mapping, resolve};
use scale_command::error::CommandError;

// 五个已知命令名逐一解析为对应命令，且与映射表一致
#[test]
fn resolve_full_vocabulary() {
    let expected = [
        ("nothing", Command::Nothing),
        ("acknowledge", Command::Acknowledge),
        ("tare", Command::Tare),
        ("calibrate", Command::Calibrate),
        ("timed_measure", Command::TimedMeasure),
    ];
    for (name, command) in expected {
        assert_eq!(resolve(name).unwrap(), command);
    }
    assert_eq!(mapping(), &expected);
}

// 未知输入（空串、空白、大小写变体、子串、变体拼写）一律被拒绝
#[test]
fn reject_unknown_inputs() {
    let unknown = [
        "",
        " ",
        "Tare",
        "TARE",
        "tar",
        "tares",
        " tare",
        "tare ",
        "timed-measure",
        "measure",
    ];
    for name in unknown {
        assert!(resolve(name).is_err(), "{name:?} should be rejected");
    }
}

// 错误信息携带未识别的原始文本
#[test]
fn error_carries_offending_input() {
    let err = resolve("TARE").unwrap_err();
    assert!(matches!(&err, CommandError::InvalidCommand { name } if name == "TARE"));
    assert_eq!(err.to_string(), "invalid command string: TARE");

    let err = resolve("").unwrap_err();
    assert_eq!(err.to_string(), "invalid command string: ");
}

// 同一输入重复解析结果稳定（成功与失败两侧）
#[test]
fn resolve_is_deterministic() {
    assert_eq!(resolve("calibrate").unwrap(), resolve("calibrate").unwrap());

    let first = resolve("zero").unwrap_err().to_string();
    let second = resolve("zero").unwrap_err().to_string();
    assert_eq!(first, second);
}

// 稳定名称、Display 与 FromStr 互为往返
#[test]
fn display_and_parse_round_trip() -> AnyResult<()> {
    for command in Command::ALL {
        let parsed: Command = command.name().parse()?;
        assert_eq!(parsed, command);
        assert_eq!(command.to_string(), command.name());
    }
    Ok(())
}

// 序列化文本与命令名同一套词汇
#[test]
fn serde_uses_command_names() -> AnyResult<()> {
    assert_eq!(
        serde_json::to_string(&Command::TimedMeasure)?,
        "\"timed_measure\""
    );
    let parsed: Command = serde_json::from_str("\"acknowledge\"")?;
    assert_eq!(parsed, Command::Acknowledge);
    assert!(serde_json::from_str::<Command>("\"TARE\"").is_err());
    Ok(())
}
